//! Shared domain types for the movie dialogue API.
//!
//! Zero internal deps so both the repository layer and the HTTP layer can
//! use these without cycles.

pub mod error;
pub mod pagination;
pub mod types;
