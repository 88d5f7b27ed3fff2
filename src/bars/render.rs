use super::{Bucket, Buckets};
use crate::error::Result;
use crate::model::{ChartBucket, NormalizationRange, Period};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_BLOCK: char = '\u{2580}';

/// Minimum width of the change column.
const CHANGE_FIELD: usize = 5;

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: usize,
    pub block: char,
    pub period: Period,
    pub fill_gaps: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            block: DEFAULT_BLOCK,
            period: Period::Week,
            fill_gaps: false,
        }
    }
}

fn bucket_score<K>(bucket: &Bucket<K>, range: Option<&NormalizationRange>) -> f64 {
    range.map_or(0.0, |r| bucket.score(r))
}

pub fn block_count(score: f64, width: usize) -> usize {
    (score * width as f64).floor() as usize
}

/// `<key>  <change padded to 5><blocks>\n`
pub fn render_line<K: Display>(
    bucket: &Bucket<K>,
    range: Option<&NormalizationRange>,
    config: &ChartConfig,
) -> String {
    let blocks = block_count(bucket_score(bucket, range), config.width);
    format!(
        "{}  {:<width$}{}\n",
        bucket.key,
        bucket.change(),
        config.block.to_string().repeat(blocks),
        width = CHANGE_FIELD
    )
}

/// One line per bucket in ascending key order.
pub fn build_bars<K: Ord + Display>(
    buckets: &Buckets<K>,
    range: Option<&NormalizationRange>,
    config: &ChartConfig,
) -> Vec<String> {
    buckets
        .values()
        .map(|bucket| render_line(bucket, range, config))
        .collect()
}

pub fn chart_buckets<K: Ord + Display>(
    buckets: &Buckets<K>,
    range: Option<&NormalizationRange>,
    config: &ChartConfig,
) -> Vec<ChartBucket> {
    buckets
        .values()
        .map(|bucket| {
            let score = bucket_score(bucket, range);
            ChartBucket {
                key: bucket.key.to_string(),
                commit_count: bucket.commits.len(),
                added: bucket.added(),
                removed: bucket.removed(),
                change: bucket.change(),
                score,
                blocks: block_count(score, config.width),
            }
        })
        .collect()
}

pub fn write_bars<W: Write>(mut writer: W, bars: &[String]) -> std::io::Result<()> {
    for bar in bars {
        writer.write_all(bar.as_bytes())?;
    }
    writer.flush()
}

pub fn write_bars_to_file(path: &Path, bars: &[String]) -> Result<()> {
    let file = File::create(path)?;
    write_bars(BufWriter::new(file), bars)?;
    Ok(())
}
