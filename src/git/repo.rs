use super::lines::{added_lines, diff_lines, removed_lines};
use super::CommitSource;
use crate::error::{GitbarsError, Result};
use crate::model::{CommitRecord, LineStats};
use crate::util::repository_name;
use chrono::{DateTime, Local, NaiveDateTime};
use gix::object::tree::diff::ChangeDetached;
use gix::{discover, ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    name: String,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let name = repository_name(path.as_ref());
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(path = %path.display(), %name, "opened repository");

        Ok(Self { repo, path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn local_time(secs: i64) -> Result<NaiveDateTime> {
        DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.with_timezone(&Local).naive_local())
            .ok_or_else(|| GitbarsError::InvalidDate(format!("Invalid timestamp: {secs}")))
    }

    fn parse_id(sha: &str) -> Result<ObjectId> {
        ObjectId::from_hex(sha.as_bytes())
            .map_err(|e| GitbarsError::Parse(format!("Invalid commit ID '{sha}': {e}")))
    }

    fn change_stats(&self, change: ChangeDetached) -> LineStats {
        // Objects that cannot be read (submodule commits) contribute nothing.
        match change {
            ChangeDetached::Addition { id, .. } => self
                .repo
                .find_object(id)
                .map(|obj| added_lines(obj.data.as_slice()))
                .unwrap_or_default(),
            ChangeDetached::Deletion { id, .. } => self
                .repo
                .find_object(id)
                .map(|obj| removed_lines(obj.data.as_slice()))
                .unwrap_or_default(),
            ChangeDetached::Modification { previous_id, id, .. } => {
                match (self.repo.find_object(previous_id), self.repo.find_object(id)) {
                    (Ok(old), Ok(new)) => diff_lines(old.data.as_slice(), new.data.as_slice()),
                    _ => LineStats::default(),
                }
            }
            ChangeDetached::Rewrite { source_id, id, .. } => {
                match (self.repo.find_object(source_id), self.repo.find_object(id)) {
                    (Ok(old), Ok(new)) => diff_lines(old.data.as_slice(), new.data.as_slice()),
                    _ => LineStats::default(),
                }
            }
        }
    }
}

impl CommitSource for GitRepo {
    fn repository_name(&self) -> &str {
        &self.name
    }

    /// Every commit reachable from HEAD, oldest first.
    fn commits(&self) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let signature = commit.author()?;
            // Author time, not committer time.
            let time = signature
                .time()
                .map_err(|e| GitbarsError::InvalidDate(format!("Invalid author time of {commit_id}: {e}")))?;
            let timestamp = Self::local_time(time.seconds)?;
            let author = signature.name.to_string();

            records.push(CommitRecord::new(
                self.name.clone(),
                commit_id.to_string(),
                timestamp,
                author,
            ));

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        // The walk starts at HEAD; reverse it so equal timestamps stay parent-first.
        records.reverse();
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        debug!(repository = %self.name, count = records.len(), "listed commits");
        Ok(records)
    }

    /// Lines changed against the first parent. Merge commits report zero,
    /// matching `git show --numstat`.
    fn line_stats(&self, sha: &str) -> Result<LineStats> {
        let commit = self.repo.find_commit(Self::parse_id(sha)?)?;
        let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
        if parents.len() > 1 {
            return Ok(LineStats::default());
        }

        let tree = commit.tree()?;
        let changes: Vec<ChangeDetached> = match parents.first() {
            Some(parent_id) => {
                let parent_tree = self.repo.find_commit(*parent_id)?.tree()?;
                self.repo.diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?
            }
            None => self.repo.diff_tree_to_tree(None, Some(&tree), None)?,
        };

        let mut stats = LineStats::default();
        for change in changes {
            stats += self.change_stats(change);
        }

        trace!(%sha, added = stats.added, removed = stats.removed, "counted lines");
        Ok(stats)
    }
}
