//! The snapshot artifact: the ordered post collection as a JSON file,
//! written at build time and loaded once when the site starts.

use std::fs;
use std::path::Path;

use fourrap_core::domain::Post;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write `posts` to `path` as pretty-printed JSON, keeping their order.
///
/// The file is written next to its final location and renamed into place,
/// so readers never observe a half-written snapshot.
pub fn write_snapshot(path: &Path, posts: &[Post]) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(posts)?;
    json.push('\n');

    let staging = path.with_extension("json.tmp");
    fs::write(&staging, json)?;
    fs::rename(&staging, path)?;

    tracing::info!(path = %path.display(), posts = posts.len(), "Snapshot written");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Vec<Post>, SnapshotError> {
    let text = fs::read_to_string(path)?;
    let posts: Vec<Post> = serde_json::from_str(&text)?;

    tracing::info!(path = %path.display(), posts = posts.len(), "Snapshot loaded");
    Ok(posts)
}
