//! Line projections and list parameters.

use dialog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full response for `GET /lines/{line_id}`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LineDetail {
    pub line_id: DbId,
    pub character_id: DbId,
    pub character: String,
    pub movie_id: DbId,
    pub movie: String,
    pub text: String,
}

/// One line as returned by `GET /lines`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LineSummary {
    pub line_id: DbId,
    pub character: String,
    pub movie: String,
    pub text: String,
}

/// Sort keys accepted by the line list endpoint. Both sort ascending.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSort {
    #[default]
    MovieTitle,
    Character,
}

impl LineSort {
    /// ORDER BY clause for this sort key, with `line_id` as tie-break.
    pub fn order_by(self) -> &'static str {
        match self {
            LineSort::MovieTitle => "m.title ASC, l.line_id ASC",
            LineSort::Character => "c.name ASC, l.line_id ASC",
        }
    }
}

/// Query parameters for `GET /lines`.
#[derive(Debug, Deserialize)]
pub struct LineListParams {
    /// Case-insensitive substring filter on the line text; empty matches all.
    #[serde(default)]
    pub text: String,
    /// Case-insensitive substring filter on the movie title; empty matches all.
    #[serde(default)]
    pub movie_title: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub sort: LineSort,
}
