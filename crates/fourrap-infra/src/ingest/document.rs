//! Normalization of a single markdown document into a [`Post`].

use std::collections::BTreeMap;

use fourrap_core::domain::{Category, ParseCategoryError, Post, PostDraft, placeholder_image_url};
use fourrap_core::slug::slugify;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::frontmatter::{Metadata, parse_metadata, split_frontmatter};

pub(crate) const MARKDOWN_EXTENSION: &str = ".md";

/// Failure to turn one document into a post. Never aborts a whole run.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),

    #[error("frontmatter has no closing delimiter")]
    UnterminatedFrontmatter,

    #[error("invalid frontmatter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("frontmatter is not a key-value mapping")]
    NotAMapping,

    #[error("frontmatter cannot be represented as JSON: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error(transparent)]
    InvalidCategory(#[from] ParseCategoryError),
}

/// Parse `text`, read from a file named `file_name`, into a post.
pub fn parse_document(file_name: &str, text: &str) -> Result<Post, DocumentError> {
    let (raw_metadata, body) = split_frontmatter(text)?;
    let mut metadata = match raw_metadata {
        Some(yaml) => parse_metadata(yaml)?,
        None => Metadata::new(),
    };

    let id = file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .unwrap_or(file_name)
        .to_string();

    let category = take_string(&mut metadata, "category")?
        .ok_or(DocumentError::MissingField("category"))?
        .parse::<Category>()?;

    let title = take_string(&mut metadata, "title")?.unwrap_or_default();
    let slug = match take_string(&mut metadata, "slug")?.filter(|s| !s.is_empty()) {
        Some(explicit) => explicit,
        None => Some(slugify(&title))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| id.clone()),
    };
    let image_url = take_string(&mut metadata, "imageUrl")?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| placeholder_image_url(file_name));

    let excerpt = take_string(&mut metadata, "excerpt")?.unwrap_or_default();
    let author = take_string(&mut metadata, "author")?.unwrap_or_default();
    let date = take_string(&mut metadata, "date")?.unwrap_or_default();
    let tags = take_tags(&mut metadata)?;

    // identity and body come from the file itself
    for reserved in ["id", "content"] {
        if metadata.remove(reserved).is_some() {
            tracing::debug!(file = %file_name, key = reserved, "Ignoring reserved frontmatter key");
        }
    }

    Ok(Post {
        id,
        slug,
        title,
        excerpt,
        content: body.to_string(),
        author,
        date,
        category,
        tags,
        image_url,
        extra: metadata.into_iter().collect::<BTreeMap<_, _>>(),
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn take_string(metadata: &mut Metadata, field: &'static str) -> Result<Option<String>, DocumentError> {
    match metadata.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(&value)
            .map(Some)
            .ok_or_else(|| DocumentError::InvalidField {
                field,
                reason: "must be a scalar value".to_string(),
            }),
    }
}

/// Tags come as a YAML sequence or a comma-separated string.
fn take_tags(metadata: &mut Metadata) -> Result<Vec<String>, DocumentError> {
    let invalid = |reason: &str| DocumentError::InvalidField {
        field: "tags",
        reason: reason.to_string(),
    };

    match metadata.remove("tags") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(list)) => Ok(list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| scalar_to_string(item).ok_or_else(|| invalid("must contain only scalar values")))
            .collect(),
        Some(_) => Err(invalid("must be a list or a comma-separated string")),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftFrontmatter<'a> {
    title: &'a str,
    slug: &'a str,
    excerpt: &'a str,
    author: &'a str,
    date: &'a str,
    category: Category,
    tags: &'a [String],
    image_url: &'a str,
}

/// Render a draft as a markdown document the ingestion pipeline accepts.
pub fn render_document(draft: &PostDraft) -> Result<String, DocumentError> {
    let frontmatter = serde_yaml::to_string(&DraftFrontmatter {
        title: &draft.title,
        slug: &draft.slug,
        excerpt: &draft.excerpt,
        author: &draft.author,
        date: &draft.date,
        category: draft.category,
        tags: &draft.tags,
        image_url: &draft.image_url,
    })?;

    Ok(format!("---\n{frontmatter}---\n{}", draft.content))
}

/// File name a draft is saved under inside the content directory.
pub fn draft_file_name(draft: &PostDraft) -> String {
    let stem = if draft.slug.is_empty() { "draft" } else { &draft.slug };
    format!("{}-{}{}", draft.date, stem, MARKDOWN_EXTENSION)
}
