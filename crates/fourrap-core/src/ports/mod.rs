//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;

pub use generator::PostGenerator;
