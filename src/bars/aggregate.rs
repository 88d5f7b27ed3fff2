use super::{group_by, Buckets};
use crate::model::{AuthorCount, CommitRecord, WeekKey};
use crate::util::{normalize_author, week_key};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Commit count per author, busiest first. Ties keep first-seen order.
pub fn author_counts(commits: &[CommitRecord]) -> Vec<AuthorCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<AuthorCount> = Vec::new();

    for commit in commits {
        match index.get(commit.author.as_str()) {
            Some(&i) => counts[i].commits += 1,
            None => {
                index.insert(commit.author.as_str(), counts.len());
                counts.push(AuthorCount {
                    author: commit.author.clone(),
                    commits: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.commits.cmp(&a.commits));
    counts
}

/// Keep the commits whose author is one of `authors`, ignoring case and
/// surrounding whitespace. An empty author list keeps everything.
pub fn filter_by_authors(commits: Vec<CommitRecord>, authors: &[String]) -> Vec<CommitRecord> {
    if authors.is_empty() {
        return commits;
    }

    let wanted: HashSet<String> = authors.iter().map(|a| normalize_author(a)).collect();
    let before = commits.len();
    let filtered: Vec<CommitRecord> = commits
        .into_iter()
        .filter(|c| wanted.contains(&normalize_author(&c.author)))
        .collect();

    debug!(before, after = filtered.len(), "filtered commits by author");
    filtered
}

/// Group commits by the ISO week of their timestamp.
///
/// Weeks without commits are not inserted; see [`super::fill_gaps`].
pub fn group_by_week(commits: Vec<CommitRecord>) -> Buckets<WeekKey> {
    group_by(commits, |c| week_key(&c.timestamp))
}
