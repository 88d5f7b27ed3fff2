use crate::error::{GitbarsError, Result};
use crate::model::{CommitRecord, LineStats};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const HEADER: [&str; 6] = ["Repository", "SHA", "Timestamp", "Author", "Added", "Removed"];

/// Written in both line columns while a commit has not been diffed yet.
pub const UNKNOWN_LINES: i64 = -1;

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Repository")]
    repository: String,
    #[serde(rename = "SHA")]
    sha: String,
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Added")]
    added: i64,
    #[serde(rename = "Removed")]
    removed: i64,
}

impl From<&CommitRecord> for CsvRow {
    fn from(commit: &CommitRecord) -> Self {
        let (added, removed) = match commit.line_stats {
            Some(stats) => (stats.added as i64, stats.removed as i64),
            None => (UNKNOWN_LINES, UNKNOWN_LINES),
        };
        Self {
            repository: commit.repository.clone(),
            sha: commit.sha.clone(),
            timestamp: commit.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            author: commit.author.clone(),
            added,
            removed,
        }
    }
}

impl CsvRow {
    fn into_record(self, line: u64) -> Result<CommitRecord> {
        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            GitbarsError::InvalidDate(format!("line {line}: '{}': {e}", self.timestamp))
        })?;

        let line_stats = match (self.added, self.removed) {
            (UNKNOWN_LINES, UNKNOWN_LINES) => None,
            (added, removed) if added >= 0 && removed >= 0 => {
                Some(LineStats::new(added as u64, removed as u64))
            }
            (added, removed) => {
                return Err(GitbarsError::Parse(format!(
                    "line {line}: invalid line counts added={added} removed={removed}"
                )))
            }
        };

        Ok(CommitRecord {
            repository: self.repository,
            sha: self.sha,
            timestamp,
            author: self.author,
            line_stats,
        })
    }
}

pub fn read_commits(path: &Path) -> Result<Vec<CommitRecord>> {
    let file = File::open(path)?;
    let commits = read_commits_from(file)?;
    debug!(path = %path.display(), count = commits.len(), "loaded commits");
    Ok(commits)
}

/// Parse commit rows. Any malformed row aborts the whole load.
pub fn read_commits_from<R: Read>(reader: R) -> Result<Vec<CommitRecord>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if !headers.iter().eq(HEADER.iter().copied()) {
        return Err(GitbarsError::Parse(format!(
            "expected header '{}', found '{}'",
            HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut commits = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        commits.push(row.into_record(line)?);
    }

    Ok(commits)
}

pub fn write_commits(path: &Path, commits: &[CommitRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_commits_to(file, commits)?;
    debug!(path = %path.display(), count = commits.len(), "wrote commits");
    Ok(())
}

/// Write the header row followed by one row per commit.
pub fn write_commits_to<W: Write>(writer: W, commits: &[CommitRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for commit in commits {
        wtr.serialize(CsvRow::from(commit))?;
    }
    wtr.flush()?;
    Ok(())
}
