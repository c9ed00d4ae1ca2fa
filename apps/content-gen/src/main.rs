//! Content generator CLI.
//!
//! Reads every markdown post from the content directory and writes the ordered
//! snapshot the site server loads at startup.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use fourrap_infra::{ingest_directory, write_snapshot};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Config {
    content_dir: PathBuf,
    snapshot_path: PathBuf,
}

impl Config {
    fn from_env() -> Self {
        Self {
            content_dir: env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("posts.json")),
        }
    }
}

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Ingest and write the snapshot. Returns the number of posts written.
fn run(config: &Config) -> anyhow::Result<usize> {
    let report = ingest_directory(&config.content_dir);

    for failure in &report.failures {
        tracing::warn!(file = %failure.file, error = %failure.error, "Skipped document");
    }

    write_snapshot(&config.snapshot_path, &report.posts).with_context(|| {
        format!(
            "failed to write snapshot to {}",
            config.snapshot_path.display()
        )
    })?;

    tracing::info!(
        posts = report.posts.len(),
        skipped = report.failures.len(),
        renamed = report.collisions.len(),
        output = %config.snapshot_path.display(),
        "Snapshot written"
    );

    Ok(report.posts.len())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok()))
        .init();

    let config = Config::from_env();
    tracing::info!(content_dir = %config.content_dir.display(), "Generating content snapshot");

    let count = run(&config)?;
    println!("Generated {} posts into {}", count, config.snapshot_path.display());

    Ok(())
}
