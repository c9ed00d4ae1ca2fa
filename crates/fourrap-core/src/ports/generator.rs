use async_trait::async_trait;

use crate::domain::{GeneratorParams, PostDraft};
use crate::error::GenerateError;

/// Draft generator trait - abstraction over text generation backends.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    /// Produce one draft for `params`. One request, no retries.
    async fn generate(&self, params: &GeneratorParams) -> Result<PostDraft, GenerateError>;
}
