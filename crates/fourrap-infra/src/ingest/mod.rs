//! Content ingestion - markdown documents with YAML frontmatter into posts.

mod document;
mod frontmatter;
mod pipeline;

pub use document::{DocumentError, draft_file_name, parse_document, render_document};
pub use frontmatter::{Metadata, parse_metadata, split_frontmatter};
pub use pipeline::{
    DocumentFailure, IngestReport, SlugCollision, disambiguate_slugs, ingest_directory,
    sort_newest_first,
};
