//! Repository for the `lines` table.

use dialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::line::{LineDetail, LineSort, LineSummary};

/// Read-only queries over lines.
pub struct LineRepo;

impl LineRepo {
    /// Fetch one line joined with its speaker's name and its movie's title.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<LineDetail>, sqlx::Error> {
        sqlx::query_as::<_, LineDetail>(
            r#"SELECT l.line_id, l.character_id, c.name AS "character",
                      l.movie_id, m.title AS movie, l.line_text AS text
               FROM lines l
               JOIN characters c ON c.character_id = l.character_id
               JOIN movies m ON m.movie_id = l.movie_id
               WHERE l.line_id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List lines filtered by case-insensitive substrings of the line text
    /// and of the movie title (both optional, applied independently).
    ///
    /// The caller is responsible for validating `limit` and `offset`.
    pub async fn list(
        pool: &PgPool,
        text: &str,
        movie_title: &str,
        sort: LineSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LineSummary>, sqlx::Error> {
        let query = format!(
            r#"SELECT l.line_id, c.name AS "character", m.title AS movie,
                      l.line_text AS text
               FROM lines l
               JOIN characters c ON c.character_id = l.character_id
               JOIN movies m ON m.movie_id = l.movie_id
               WHERE l.line_text ILIKE '%' || $1 || '%'
                 AND m.title ILIKE '%' || $2 || '%'
               ORDER BY {}
               LIMIT $3 OFFSET $4"#,
            sort.order_by()
        );
        sqlx::query_as::<_, LineSummary>(&query)
            .bind(text)
            .bind(movie_title)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
