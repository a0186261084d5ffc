//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Reads are single queries
//! (grouped where a derived count is needed); the one write runs inside a
//! transaction.

pub mod character_repo;
pub mod conversation_repo;
pub mod line_repo;
pub mod movie_repo;

pub use character_repo::CharacterRepo;
pub use conversation_repo::{ConversationRepo, ConversationWriteError};
pub use line_repo::LineRepo;
pub use movie_repo::MovieRepo;
