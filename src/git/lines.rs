use crate::model::LineStats;
use similar::{ChangeTag, TextDiff};

/// Same heuristic git uses: a NUL byte in the first 8KiB marks binary content.
pub fn is_binary(data: &[u8]) -> bool {
    data.iter().take(8192).any(|&b| b == 0)
}

pub fn count_lines(data: &[u8]) -> u64 {
    String::from_utf8_lossy(data).lines().count() as u64
}

/// Lines added and removed between two blob versions. Binary blobs count as zero.
pub fn diff_lines(old: &[u8], new: &[u8]) -> LineStats {
    if is_binary(old) || is_binary(new) {
        return LineStats::default();
    }

    let old = String::from_utf8_lossy(old);
    let new = String::from_utf8_lossy(new);
    let diff = TextDiff::from_lines(old.as_ref(), new.as_ref());

    let mut stats = LineStats::default();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.added += 1,
            ChangeTag::Delete => stats.removed += 1,
            ChangeTag::Equal => {}
        }
    }
    stats
}

pub fn added_lines(data: &[u8]) -> LineStats {
    if is_binary(data) {
        return LineStats::default();
    }
    LineStats::new(count_lines(data), 0)
}

pub fn removed_lines(data: &[u8]) -> LineStats {
    if is_binary(data) {
        return LineStats::default();
    }
    LineStats::new(0, count_lines(data))
}
