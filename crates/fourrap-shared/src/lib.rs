//! # 4RAP Shared
//!
//! Wire types shared by the site server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
