//! Draft generators - implementations of the `PostGenerator` port.

mod gemini;

pub use gemini::{DEFAULT_MODEL, GeminiConfig, GeminiGenerator};
