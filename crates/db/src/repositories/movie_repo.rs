//! Repository for the `movies` table.

use dialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{MovieDetail, MovieSort, MovieSummary, TopCharacter};

/// Read-only queries over movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Fetch one movie with its top five characters ranked by line count
    /// (descending, ties broken by character id ascending).
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        let movie: Option<(DbId, String)> =
            sqlx::query_as("SELECT movie_id, title FROM movies WHERE movie_id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;

        let Some((movie_id, title)) = movie else {
            return Ok(None);
        };

        let top_characters = sqlx::query_as::<_, TopCharacter>(
            r#"SELECT c.character_id, c.name AS "character", COUNT(l.line_id) AS num_lines
               FROM characters c
               LEFT JOIN lines l ON l.character_id = c.character_id
               WHERE c.movie_id = $1
               GROUP BY c.character_id, c.name
               ORDER BY num_lines DESC, c.character_id ASC
               LIMIT 5"#,
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;

        Ok(Some(MovieDetail {
            movie_id,
            title,
            top_characters,
        }))
    }

    /// List movies filtered by a case-insensitive title substring.
    ///
    /// The caller is responsible for validating `limit` and `offset`.
    pub async fn list(
        pool: &PgPool,
        name: &str,
        sort: MovieSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT movie_id, title AS movie_title, year, imdb_rating, imdb_votes
             FROM movies
             WHERE title ILIKE '%' || $1 || '%'
             ORDER BY {}
             LIMIT $2 OFFSET $3",
            sort.order_by()
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
