//! Character projections and list parameters.

use dialog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One character as returned by `GET /characters`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CharacterSummary {
    pub character_id: DbId,
    pub character: String,
    pub movie: String,
    pub number_of_lines: i64,
}

/// A conversation partner in a character's `top_conversations` ranking.
///
/// `number_of_lines_together` is the total line count across every
/// conversation the two characters share, not a conversation count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopConversation {
    pub character_id: DbId,
    pub character: String,
    pub gender: Option<String>,
    pub number_of_lines_together: i64,
}

/// Full response for `GET /characters/{character_id}`.
#[derive(Debug, Serialize)]
pub struct CharacterDetail {
    pub character_id: DbId,
    pub character: String,
    pub movie: String,
    pub gender: Option<String>,
    pub top_conversations: Vec<TopConversation>,
}

/// Sort keys accepted by the character list endpoint.
///
/// `NumberOfLines` sorts highest-first; the others sort ascending.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSort {
    #[default]
    Character,
    Movie,
    NumberOfLines,
}

impl CharacterSort {
    /// ORDER BY clause for this sort key, with `character_id` as tie-break.
    ///
    /// `number_of_lines` refers to the grouped-count alias in
    /// [`CharacterRepo::list`]'s projection.
    ///
    /// [`CharacterRepo::list`]: crate::repositories::CharacterRepo::list
    pub fn order_by(self) -> &'static str {
        match self {
            CharacterSort::Character => "c.name ASC, c.character_id ASC",
            CharacterSort::Movie => "m.title ASC, c.character_id ASC",
            CharacterSort::NumberOfLines => "number_of_lines DESC, c.character_id ASC",
        }
    }
}

/// Query parameters for `GET /characters`.
#[derive(Debug, Deserialize)]
pub struct CharacterListParams {
    /// Case-insensitive substring filter on the name; empty matches all.
    #[serde(default)]
    pub name: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub sort: CharacterSort,
}
