//! Domain entities - the core content objects.

mod category;
mod draft;
mod post;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use draft::{AI_AUTHOR, GeneratedPost, GeneratorParams, PostDraft};
pub use post::{Post, placeholder_image_url};
