use crate::error::Result;
use crate::git::{CommitSource, GitRepo};
use crate::model::CommitRecord;
use crate::store::write_commits;
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// List the commits of one source and attach their line stats.
pub fn collect_from<S: CommitSource>(source: &S, progress: &ProgressBar) -> Result<Vec<CommitRecord>> {
    let name = source.repository_name();
    println!("collecting the commits of {}", style(name).cyan());
    let commits = source.commits()?;

    println!("adding line stats for {} commits in {}", commits.len(), style(name).cyan());
    progress.set_length(commits.len() as u64);
    progress.set_position(0);
    progress.set_message(name.to_string());

    let mut collected = Vec::with_capacity(commits.len());
    for commit in commits {
        let stats = source.line_stats(&commit.sha)?;
        collected.push(commit.with_line_stats(stats));
        progress.inc(1);
    }

    Ok(collected)
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

pub fn exec(repositories: Vec<PathBuf>, output: &Path) -> anyhow::Result<()> {
    let pb = progress_bar();
    let mut commits = Vec::new();

    for path in &repositories {
        let repo = GitRepo::open(path)
            .with_context(|| format!("Failed to open git repository {}", path.display()))?;
        let collected = collect_from(&repo, &pb)
            .with_context(|| format!("Failed to collect commits from {}", path.display()))?;
        info!(
            repository = repo.repository_name(),
            path = %repo.path().display(),
            count = collected.len(),
            "collected commits"
        );
        commits.extend(collected);
    }
    pb.finish_and_clear();

    write_commits(output, &commits)
        .with_context(|| format!("Failed to write commits to {}", output.display()))?;
    println!(
        "wrote {} commits to {}",
        style(commits.len()).cyan(),
        output.display()
    );
    Ok(())
}
