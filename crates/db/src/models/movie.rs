//! Movie projections and list parameters.

use dialog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One movie as returned by `GET /movies`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MovieSummary {
    pub movie_id: DbId,
    pub movie_title: String,
    pub year: i32,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
}

/// A character entry in a movie's `top_characters` ranking.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopCharacter {
    pub character_id: DbId,
    pub character: String,
    pub num_lines: i64,
}

/// Full response for `GET /movies/{movie_id}`.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    pub movie_id: DbId,
    pub title: String,
    pub top_characters: Vec<TopCharacter>,
}

/// Sort keys accepted by the movie list endpoint.
///
/// `Rating` sorts highest-first; the others sort ascending.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSort {
    #[default]
    MovieTitle,
    Year,
    Rating,
}

impl MovieSort {
    /// ORDER BY clause for this sort key, with `movie_id` as tie-break.
    pub fn order_by(self) -> &'static str {
        match self {
            MovieSort::MovieTitle => "title ASC, movie_id ASC",
            MovieSort::Year => "year ASC, movie_id ASC",
            MovieSort::Rating => "imdb_rating DESC, movie_id ASC",
        }
    }
}

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    /// Case-insensitive substring filter on the title; empty matches all.
    #[serde(default)]
    pub name: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub sort: MovieSort,
}
