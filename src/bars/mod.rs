pub mod aggregate;
pub mod calendar;
pub mod exec;
pub mod range;
pub mod render;
pub mod score;

pub use aggregate::{author_counts, filter_by_authors, group_by_week};
pub use calendar::{fill_gaps, group_by_day, CalendarKey};
pub use exec::{exec, VisualizeArgs};
pub use range::estimate_range;
pub use render::{build_bars, chart_buckets, write_bars, write_bars_to_file, ChartConfig};
pub use score::score;

use crate::model::CommitRecord;
use std::collections::BTreeMap;

/// Commits falling into one calendar period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<K> {
    pub key: K,
    pub commits: Vec<CommitRecord>,
}

/// Buckets ordered by key; iteration order is presentation order.
pub type Buckets<K> = BTreeMap<K, Bucket<K>>;

impl<K> Bucket<K> {
    pub fn empty(key: K) -> Self {
        Self {
            key,
            commits: Vec::new(),
        }
    }

    pub fn added(&self) -> u64 {
        self.commits.iter().map(CommitRecord::added).sum()
    }

    pub fn removed(&self) -> u64 {
        self.commits.iter().map(CommitRecord::removed).sum()
    }

    pub fn change(&self) -> u64 {
        self.added() + self.removed()
    }
}

/// Move every commit into the bucket named by `key_of`.
pub fn group_by<K, F>(commits: Vec<CommitRecord>, key_of: F) -> Buckets<K>
where
    K: Ord + Copy,
    F: Fn(&CommitRecord) -> K,
{
    let mut buckets: Buckets<K> = BTreeMap::new();
    for commit in commits {
        buckets
            .entry(key_of(&commit))
            .or_insert_with_key(|key| Bucket::empty(*key))
            .commits
            .push(commit);
    }
    buckets
}
