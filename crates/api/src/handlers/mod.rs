//! HTTP handlers, one module per resource.

pub mod character;
pub mod conversation;
pub mod line;
pub mod movie;
