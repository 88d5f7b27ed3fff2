use chrono::NaiveDateTime;
use gitbars::collect::collect_from;
use gitbars::error::{GitbarsError, Result};
use gitbars::git::{CommitSource, GitRepo};
use gitbars::model::{CommitRecord, LineStats};
use indicatif::ProgressBar;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

struct FakeSource {
    name: String,
    commits: Vec<CommitRecord>,
    stats: HashMap<String, LineStats>,
}

impl FakeSource {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            commits: Vec::new(),
            stats: HashMap::new(),
        }
    }

    fn with_commit(mut self, sha: &str, timestamp: &str, author: &str, stats: LineStats) -> Self {
        let timestamp = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap();
        self.commits.push(CommitRecord::new(
            self.name.clone(),
            sha.to_string(),
            timestamp,
            author.to_string(),
        ));
        self.stats.insert(sha.to_string(), stats);
        self
    }
}

impl CommitSource for FakeSource {
    fn repository_name(&self) -> &str {
        &self.name
    }

    fn commits(&self) -> Result<Vec<CommitRecord>> {
        Ok(self.commits.clone())
    }

    fn line_stats(&self, sha: &str) -> Result<LineStats> {
        self.stats
            .get(sha)
            .copied()
            .ok_or_else(|| GitbarsError::Parse(format!("unknown commit {sha}")))
    }
}

#[test]
fn attaches_line_stats_to_every_commit() {
    let source = FakeSource::new("demo")
        .with_commit("aaa", "2024-01-01 10:00:00", "Alice", LineStats::new(3, 1))
        .with_commit("bbb", "2024-01-02 10:00:00", "Bob", LineStats::new(0, 9));

    let commits = collect_from(&source, &ProgressBar::hidden()).unwrap();

    let stats: Vec<(&str, Option<LineStats>)> = commits
        .iter()
        .map(|c| (c.sha.as_str(), c.line_stats))
        .collect();
    assert_eq!(
        stats,
        vec![
            ("aaa", Some(LineStats::new(3, 1))),
            ("bbb", Some(LineStats::new(0, 9)))
        ]
    );
    assert!(commits.iter().all(|c| c.repository == "demo"));
}

#[test]
fn extraction_failure_is_fatal() {
    let mut source = FakeSource::new("broken").with_commit("aaa", "2024-01-01 10:00:00", "Alice", LineStats::new(1, 1));
    source.stats.clear();

    assert!(collect_from(&source, &ProgressBar::hidden()).is_err());
}

#[test]
fn empty_repository_collects_nothing() {
    let source = FakeSource::new("empty");
    assert!(collect_from(&source, &ProgressBar::hidden()).unwrap().is_empty());
}

#[test]
fn opening_a_plain_directory_fails_discovery() {
    let dir = tempfile::tempdir().unwrap();
    match GitRepo::open(dir.path()) {
        Err(GitbarsError::GitDiscover(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected discovery to fail"),
    }
}
