//! chronik - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use chronik::changelog::{ReleaseMetadata, merge_into_file, render_fragment};
use chronik::commit::{classify, group_commits, is_ignored, split_records};
use chronik::config::Config;
use chronik::git::{GitCli, SystemGit, check_git_installed};
use chronik::version::read_version;

/// Build a categorized changelog section from conventional commits.
#[derive(Parser, Debug)]
#[command(name = "chronik")]
#[command(about = "Build a categorized changelog section from conventional commits")]
#[command(version)]
struct Cli {
    /// Path to changelog file
    #[arg(short = 'o', long, default_value = "CHANGELOG.md")]
    output: PathBuf,

    /// Path to the single-line version file
    #[arg(long, default_value = "build_version.txt")]
    version_file: PathBuf,

    /// Additional subject substrings to ignore (repeatable)
    #[arg(long = "ignore")]
    ignore: Vec<String>,

    /// Dry run - print the rendered section without merging
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Step 1: Check prerequisites
    check_git_installed().context("git is required")?;

    // Step 2: Build run configuration
    let mut config = Config::default();
    config.ignore_list.extend(cli.ignore);

    // Step 3: Read the release version
    let version = read_version(&cli.version_file).context("Failed to read release version")?;

    // Step 4: Resolve the baseline tag
    let git = SystemGit;
    let tag_hash = git
        .latest_tag_commit()
        .context("Failed to find the most recent tag")?;
    let tag = git
        .tag_name(&tag_hash)
        .context("Failed to resolve the tag name")?;

    println!("Collecting commits since {tag}...");

    // Step 5: Fetch and parse the log dump
    let logs = git
        .log_since(&tag, &config.log_format())
        .context("Failed to fetch the commit log")?;

    let records = split_records(&logs, &config).context("Failed to parse the commit log")?;

    println!("Found {} commits", records.len());

    // Step 6: Classify and filter
    let commits: Vec<_> = records
        .iter()
        .map(|fields| classify(fields, &git))
        .filter(|commit| !is_ignored(&config, &commit.subject))
        .collect();

    // Step 7: Group and render
    let groups = group_commits(commits);

    let meta = ReleaseMetadata {
        version,
        date: Utc::now().format("%Y-%m-%d").to_string(),
    };

    let fragment = render_fragment(&meta, &groups);

    // Step 8: Merge or display
    if cli.dry_run {
        println!("\n--- Dry Run Output ---\n");
        println!("{fragment}");
    } else {
        merge_into_file(&cli.output, &fragment)
            .with_context(|| format!("Failed to update {}", cli.output.display()))?;

        println!("✓ Added {} section to {}", meta.version, cli.output.display());
    }

    Ok(())
}
