//! Repository for the `characters` table.

use dialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{
    CharacterDetail, CharacterSort, CharacterSummary, TopConversation,
};

/// Read-only queries over characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Fetch one character with its conversation partners ranked by total
    /// shared line count (descending, ties broken by partner id ascending).
    ///
    /// The ranking is computed in one grouped query over the character's
    /// conversations joined to their lines, rather than one count query per
    /// partner.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let character: Option<(DbId, String, String, Option<String>)> = sqlx::query_as(
            "SELECT c.character_id, c.name, m.title, c.gender
             FROM characters c
             JOIN movies m ON m.movie_id = c.movie_id
             WHERE c.character_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some((character_id, name, movie, gender)) = character else {
            return Ok(None);
        };

        // Ordinals: 1 = partner id, 2 = partner name, 3 = partner gender,
        // 4 = total lines across every conversation with that partner.
        // Lines are LEFT JOINed so a partner whose conversations carry no
        // lines yet still ranks, with a count of zero.
        let top_conversations = sqlx::query_as::<_, TopConversation>(
            r#"SELECT CASE WHEN co.character1_id = $1 THEN co.character2_id
                           ELSE co.character1_id END AS character_id,
                      p.name AS "character",
                      p.gender,
                      COUNT(l.line_id) AS number_of_lines_together
               FROM conversations co
               JOIN characters p
                 ON p.character_id = CASE WHEN co.character1_id = $1 THEN co.character2_id
                                          ELSE co.character1_id END
               LEFT JOIN lines l ON l.conversation_id = co.conversation_id
               WHERE co.character1_id = $1 OR co.character2_id = $1
               GROUP BY 1, 2, 3
               ORDER BY 4 DESC, 1 ASC"#,
        )
        .bind(character_id)
        .fetch_all(pool)
        .await?;

        Ok(Some(CharacterDetail {
            character_id,
            character: name,
            movie,
            gender,
            top_conversations,
        }))
    }

    /// List characters filtered by a case-insensitive name substring, with
    /// per-character line counts.
    ///
    /// Uses a LEFT JOIN so characters without any lines still appear (with a
    /// count of zero). The caller is responsible for validating `limit` and
    /// `offset`.
    pub async fn list(
        pool: &PgPool,
        name: &str,
        sort: CharacterSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CharacterSummary>, sqlx::Error> {
        let query = format!(
            r#"SELECT c.character_id, c.name AS "character", m.title AS movie,
                      COUNT(l.line_id) AS number_of_lines
               FROM characters c
               JOIN movies m ON m.movie_id = c.movie_id
               LEFT JOIN lines l ON l.character_id = c.character_id
               WHERE c.name ILIKE '%' || $1 || '%'
               GROUP BY c.character_id, c.name, m.title
               ORDER BY {}
               LIMIT $2 OFFSET $3"#,
            sort.order_by()
        );
        sqlx::query_as::<_, CharacterSummary>(&query)
            .bind(name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
