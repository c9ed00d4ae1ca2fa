//! Directory ingestion: every markdown file in one directory into an ordered
//! post collection.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use fourrap_core::domain::Post;

use super::document::{DocumentError, MARKDOWN_EXTENSION, parse_document};

/// A document that could not be ingested.
#[derive(Debug)]
pub struct DocumentFailure {
    pub file: String,
    pub error: DocumentError,
}

/// A post whose slug was already taken by a newer post and got a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub file: String,
    pub kept_by: String,
    pub slug: String,
    pub renamed_to: String,
}

/// Outcome of one ingestion run.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Ingested posts, newest first. Slugs are unique.
    pub posts: Vec<Post>,
    pub failures: Vec<DocumentFailure>,
    pub collisions: Vec<SlugCollision>,
}

/// Ingest every `*.md` file directly inside `dir`.
///
/// The directory is created when missing. Unreadable directories and broken
/// documents are logged and skipped; this never fails as a whole.
pub fn ingest_directory(dir: &Path) -> IngestReport {
    let mut report = IngestReport::default();

    if !dir.exists() {
        match fs::create_dir_all(dir) {
            Ok(()) => tracing::info!(dir = %dir.display(), "Created content directory"),
            Err(e) => {
                tracing::error!(dir = %dir.display(), error = %e, "Failed to create content directory");
                return report;
            }
        }
    }

    let file_names = match list_markdown_files(dir) {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(dir = %dir.display(), error = %e, "Failed to read content directory");
            return report;
        }
    };

    for file_name in file_names {
        let result = fs::read_to_string(dir.join(&file_name))
            .map_err(DocumentError::from)
            .and_then(|text| parse_document(&file_name, &text));

        match result {
            Ok(post) => {
                tracing::debug!(file = %file_name, slug = %post.slug, "Ingested document");
                report.posts.push(post);
            }
            Err(error) => {
                tracing::warn!(file = %file_name, error = %error, "Skipping document");
                report.failures.push(DocumentFailure {
                    file: file_name,
                    error,
                });
            }
        }
    }

    sort_newest_first(&mut report.posts);
    report.collisions = disambiguate_slugs(&mut report.posts);

    tracing::info!(
        posts = report.posts.len(),
        failures = report.failures.len(),
        renamed = report.collisions.len(),
        "Content ingestion finished"
    );

    report
}

/// Markdown file names in `dir`, sorted so runs are reproducible.
fn list_markdown_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(MARKDOWN_EXTENSION) => names.push(name),
            Ok(_) => {}
            Err(raw) => tracing::warn!(file = ?raw, "Skipping file with non UTF-8 name"),
        }
    }

    names.sort();
    Ok(names)
}

/// Give every post a unique slug. The first holder of a slug keeps it, later
/// ones become `{slug}-{id}`.
pub fn disambiguate_slugs(posts: &mut [Post]) -> Vec<SlugCollision> {
    let mut owners: HashMap<String, String> = HashMap::with_capacity(posts.len());
    let mut collisions = Vec::new();

    for post in posts.iter_mut() {
        let Some(owner) = owners.get(&post.slug).cloned() else {
            owners.insert(post.slug.clone(), post.id.clone());
            continue;
        };

        let mut renamed = format!("{}-{}", post.slug, post.id);
        let mut n = 2;
        while owners.contains_key(&renamed) {
            renamed = format!("{}-{}-{}", post.slug, post.id, n);
            n += 1;
        }

        let collision = SlugCollision {
            file: format!("{}{}", post.id, MARKDOWN_EXTENSION),
            kept_by: format!("{}{}", owner, MARKDOWN_EXTENSION),
            slug: post.slug.clone(),
            renamed_to: renamed.clone(),
        };
        tracing::warn!(
            file = %collision.file,
            kept_by = %collision.kept_by,
            slug = %collision.slug,
            renamed_to = %collision.renamed_to,
            "Duplicate slug"
        );

        owners.insert(renamed.clone(), post.id.clone());
        post.slug = renamed;
        collisions.push(collision);
    }

    collisions
}

/// Sort newest first. Posts without a parseable date go last; ties keep
/// their current order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.published_on(), b.published_on()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
