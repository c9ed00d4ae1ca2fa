//! # 4RAP Core
//!
//! The domain layer of the 4RAP content site.
//! Post records, the in-memory query engine, slug derivation and the
//! markdown-subset renderer. No I/O lives here.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod markdown;
pub mod ports;
pub mod query;
pub mod slug;
pub mod view;

pub use catalog::Catalog;
pub use error::DomainError;
