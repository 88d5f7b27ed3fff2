use super::{Bucket, Buckets};
use crate::model::NormalizationRange;
use tracing::debug;

/// Mean ± one sample standard deviation of the bucket magnitudes.
///
/// A zero is always added to the sample so quiet periods pull the floor
/// down. Returns `None` when there are no buckets.
pub fn estimate_range<K>(buckets: &Buckets<K>) -> Option<NormalizationRange> {
    if buckets.is_empty() {
        return None;
    }

    let mut changes: Vec<u64> = buckets.values().map(Bucket::change).collect();
    changes.push(0);

    let range = range_of(&changes);
    debug!(?range, samples = changes.len(), "estimated normalization range");
    Some(range)
}

/// Range over an explicit sample. An empty sample yields all zeros.
pub fn range_of(values: &[u64]) -> NormalizationRange {
    let mean = mean(values).round_ties_even() as i64;
    let stddev = sample_stddev(values).round_ties_even() as i64;

    NormalizationRange {
        mean: mean as u64,
        lower: (mean - stddev).max(0) as u64,
        upper: (mean + stddev) as u64,
    }
}

fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

fn sample_stddev(values: &[u64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|&v| (v as f64 - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
