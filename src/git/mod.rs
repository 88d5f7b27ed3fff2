pub mod lines;
pub mod repo;

pub use repo::GitRepo;

use crate::error::Result;
use crate::model::{CommitRecord, LineStats};

/// Where commit records come from.
///
/// `commits` lists records without line stats, oldest first; `line_stats`
/// counts the lines one commit added and removed.
pub trait CommitSource {
    fn repository_name(&self) -> &str;

    fn commits(&self) -> Result<Vec<CommitRecord>>;

    fn line_stats(&self, sha: &str) -> Result<LineStats>;
}
