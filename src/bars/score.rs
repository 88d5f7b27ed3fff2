use super::Bucket;
use crate::model::NormalizationRange;

/// Saturating linear position of `value` within `lower..=upper`.
///
/// A collapsed range scores everything zero.
pub fn score(value: u64, lower: u64, upper: u64) -> f64 {
    if upper <= lower || value <= lower {
        return 0.0;
    }
    if value >= upper {
        return 1.0;
    }
    (value - lower) as f64 / (upper - lower) as f64
}

impl<K> Bucket<K> {
    pub fn score(&self, range: &NormalizationRange) -> f64 {
        score(self.change(), range.lower, range.upper)
    }
}
