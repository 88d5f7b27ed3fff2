use crate::model::WeekKey;
use chrono::NaiveDateTime;
use std::path::Path;

pub fn week_key(timestamp: &NaiveDateTime) -> WeekKey {
    WeekKey::from_date(timestamp.date())
}

/// Author names match after trimming and case folding.
pub fn normalize_author(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Display name of a repository: the last component of its path.
pub fn repository_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            path.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
