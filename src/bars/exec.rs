use super::{
    author_counts, build_bars, chart_buckets, estimate_range, fill_gaps, filter_by_authors, group_by_day,
    group_by_week, write_bars_to_file, Buckets, ChartConfig,
};
use crate::model::{ChartOutput, Period, SCHEMA_VERSION};
use crate::store::read_commits;
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

pub struct VisualizeArgs {
    pub input: PathBuf,
    pub authors: Vec<String>,
    pub output: PathBuf,
    pub json: bool,
    pub config: ChartConfig,
}

pub fn exec(args: VisualizeArgs) -> anyhow::Result<()> {
    let commits = read_commits(&args.input)
        .with_context(|| format!("Failed to read commits from {}", args.input.display()))?;

    let authors = author_counts(&commits);
    println!("{} found {} authors", style("=>").bold(), authors.len());
    for entry in &authors {
        println!("{}: {}", entry.author, entry.commits);
    }

    let commits = if args.authors.is_empty() {
        commits
    } else {
        let before = commits.len();
        let filtered = filter_by_authors(commits, &args.authors);
        println!(
            "\n{} filtered down from {} to {} commits",
            style("=>").bold(),
            before,
            filtered.len()
        );
        filtered
    };

    match args.config.period {
        Period::Week => {
            let weeks = group_by_week(commits);
            let weeks = if args.config.fill_gaps { fill_gaps(weeks) } else { weeks };
            render_chart(&weeks, &args)
        }
        Period::Day => render_chart(&group_by_day(commits), &args),
    }
}

fn render_chart<K: Ord + Display>(buckets: &Buckets<K>, args: &VisualizeArgs) -> anyhow::Result<()> {
    println!(
        "\n{} grouped into {} {}",
        style("=>").bold(),
        buckets.len(),
        args.config.period.plural()
    );

    let range = estimate_range(buckets);
    if let Some(r) = &range {
        println!("\n{} calculated the stddev", style("=>").bold());
        println!("mean: {}, lower: {}, upper: {}", r.mean, r.lower, r.upper);
    }

    if args.json {
        let output = ChartOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            input: args.input.to_string_lossy().to_string(),
            period: args.config.period,
            authors: args.authors.clone(),
            width: args.config.width,
            range,
            buckets: chart_buckets(buckets, range.as_ref(), &args.config),
        };
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create {}", args.output.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &output).context("Failed to write chart JSON")?;
        writer.flush()?;
    } else {
        let bars = build_bars(buckets, range.as_ref(), &args.config);
        write_bars_to_file(&args.output, &bars)
            .with_context(|| format!("Failed to write bars to {}", args.output.display()))?;
    }

    info!(buckets = buckets.len(), output = %args.output.display(), "chart written");
    println!("\n{} wrote bars to {}", style("=>").bold(), args.output.display());
    Ok(())
}
