//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` projection structs matching the documented
//!   response shapes (field names are part of the public contract)
//! - `Deserialize` query-parameter structs with their sort-key enums
//! - For conversations, the `Deserialize` DTO accepted by the write path

pub mod character;
pub mod conversation;
pub mod line;
pub mod movie;
