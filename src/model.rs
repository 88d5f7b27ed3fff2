use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

pub const SCHEMA_VERSION: u32 = 1;

/// Added/removed line counts of a single commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineStats {
    pub added: u64,
    pub removed: u64,
}

impl LineStats {
    pub fn new(added: u64, removed: u64) -> Self {
        Self { added, removed }
    }

    pub fn change(&self) -> u64 {
        self.added + self.removed
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.removed += other.removed;
    }
}

/// One commit as collected from a repository.
///
/// `line_stats` is `None` until the diff has been counted. A record gets its
/// stats attached once, through [`CommitRecord::with_line_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub repository: String,
    pub sha: String,
    pub timestamp: NaiveDateTime,
    pub author: String,
    pub line_stats: Option<LineStats>,
}

impl CommitRecord {
    pub fn new(repository: String, sha: String, timestamp: NaiveDateTime, author: String) -> Self {
        Self {
            repository,
            sha,
            timestamp,
            author,
            line_stats: None,
        }
    }

    pub fn with_line_stats(self, stats: LineStats) -> Self {
        Self {
            line_stats: Some(stats),
            ..self
        }
    }

    pub fn added(&self) -> u64 {
        self.line_stats.map_or(0, |s| s.added)
    }

    pub fn removed(&self) -> u64 {
        self.line_stats.map_or(0, |s| s.removed)
    }

    /// Lines touched by this commit; a commit without stats counts as zero.
    pub fn change(&self) -> u64 {
        self.line_stats.map_or(0, |s| s.change())
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// ISO year and week number, rendered as `YYYY-WW`.
///
/// Ordering is year-major, which matches the lexicographic order of the
/// rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday of this ISO week, if the pair names a real week.
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, chrono::Weekday::Mon)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.week)
    }
}

/// Bucket granularity of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Day,
}

impl Period {
    pub fn plural(&self) -> &'static str {
        match self {
            Period::Week => "weeks",
            Period::Day => "days",
        }
    }
}

/// The `(mean, lower, upper)` window bucket magnitudes are scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRange {
    pub mean: u64,
    pub lower: u64,
    pub upper: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub commits: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartBucket {
    pub key: String,
    pub commit_count: usize,
    pub added: u64,
    pub removed: u64,
    pub change: u64,
    pub score: f64,
    pub blocks: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub period: Period,
    pub authors: Vec<String>,
    pub width: usize,
    pub range: Option<NormalizationRange>,
    pub buckets: Vec<ChartBucket>,
}
