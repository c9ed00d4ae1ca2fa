//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use fourrap_core::Catalog;
use fourrap_core::domain::{GeneratorParams, PostDraft};
use fourrap_core::error::GenerateError;
use fourrap_core::ports::PostGenerator;
use fourrap_infra::load_snapshot;

#[cfg(feature = "gemini")]
use fourrap_infra::{GeminiConfig, GeminiGenerator};

use crate::config::{AppConfig, GeneratorConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub generator: Arc<dyn PostGenerator>,
}

/// Generator used when no backend is configured. Every call fails.
pub struct UnconfiguredGenerator;

#[async_trait::async_trait]
impl PostGenerator for UnconfiguredGenerator {
    async fn generate(&self, _params: &GeneratorParams) -> Result<PostDraft, GenerateError> {
        tracing::warn!("Draft requested but no generator is configured");
        Err(GenerateError::NotConfigured)
    }
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let catalog = load_catalog(&config.snapshot_path);
        let generator = build_generator(config.generator.as_ref());

        tracing::info!(posts = catalog.len(), "Application state initialized");

        Self::from_parts(catalog, generator)
    }

    pub fn from_parts(catalog: Catalog, generator: Arc<dyn PostGenerator>) -> Self {
        Self { catalog, generator }
    }
}

/// Load the snapshot into a catalog. Any failure degrades to an empty site.
fn load_catalog(path: &Path) -> Catalog {
    let posts = match load_snapshot(path) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Snapshot unavailable. Serving an empty catalog."
            );
            return Catalog::default();
        }
    };

    Catalog::new(posts).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Snapshot rejected. Serving an empty catalog.");
        Catalog::default()
    })
}

#[cfg(feature = "gemini")]
fn build_generator(config: Option<&GeneratorConfig>) -> Arc<dyn PostGenerator> {
    let Some(config) = config else {
        tracing::warn!("API_KEY not set. Draft generation disabled.");
        return Arc::new(UnconfiguredGenerator);
    };

    let mut gemini = GeminiConfig::new(config.api_key.clone());
    if let Some(model) = &config.model {
        gemini = gemini.with_model(model.clone());
    }

    match GeminiGenerator::new(gemini) {
        Ok(generator) => {
            tracing::info!("Gemini draft generator configured");
            Arc::new(generator)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Gemini client. Draft generation disabled.");
            Arc::new(UnconfiguredGenerator)
        }
    }
}

#[cfg(not(feature = "gemini"))]
fn build_generator(config: Option<&GeneratorConfig>) -> Arc<dyn PostGenerator> {
    if config.is_some() {
        tracing::warn!("API_KEY is set but this build has no gemini feature");
    }
    tracing::info!("Running without gemini feature - draft generation disabled");
    Arc::new(UnconfiguredGenerator)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use fourrap_core::domain::{Category, Post};
    use fourrap_infra::write_snapshot;

    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            slug: id.to_string(),
            title: id.to_string(),
            excerpt: String::new(),
            content: String::new(),
            author: String::new(),
            date: "2024-01-01".to_string(),
            category: Category::Beats,
            tags: vec![],
            image_url: String::new(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_missing_snapshot_gives_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(&dir.path().join("missing.json")).is_empty());
    }

    #[test]
    fn test_duplicate_ids_give_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        write_snapshot(&path, &[post("a"), post("a")]).unwrap();
        assert!(load_catalog(&path).is_empty());
    }

    #[test]
    fn test_snapshot_loads_into_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        write_snapshot(&path, &[post("a"), post("b")]).unwrap();
        assert_eq!(load_catalog(&path).len(), 2);
    }

    #[actix_web::test]
    async fn test_unconfigured_generator_fails() {
        let params = GeneratorParams {
            topic: "t".into(),
            category: Category::Beats,
            tone: "chill".into(),
        };
        let result = UnconfiguredGenerator.generate(&params).await;
        assert!(matches!(result, Err(GenerateError::NotConfigured)));
    }
}
