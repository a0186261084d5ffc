//! Repository for the `conversations` table, including the validated
//! write path.

use dialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::conversation::{ConversationDetail, ConversationLine, NewConversation};

/// Why a conversation insert was rejected or failed.
///
/// The HTTP layer maps every rejection variant to 404 (a documented
/// compatibility quirk of the public contract); only `Db` can surface as
/// something else.
#[derive(Debug, thiserror::Error)]
pub enum ConversationWriteError {
    #[error("movie {0} not found")]
    MovieNotFound(DbId),

    #[error("character {character_id} is not part of movie {movie_id}")]
    CharacterNotInMovie { character_id: DbId, movie_id: DbId },

    #[error("conversation characters must be distinct, got {0} twice")]
    SameCharacter(DbId),

    #[error("line {position} is spoken by character {character_id}, who is not in the conversation")]
    LineSpeakerMismatch { position: usize, character_id: DbId },

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Queries over conversations plus the single write operation.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Fetch one conversation as a transcript: movie title plus each line's
    /// speaker name and text, ordered by the line sort index.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ConversationDetail>, sqlx::Error> {
        let conversation: Option<(DbId, String)> = sqlx::query_as(
            "SELECT co.conversation_id, m.title
             FROM conversations co
             JOIN movies m ON m.movie_id = co.movie_id
             WHERE co.conversation_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some((conv_id, movie)) = conversation else {
            return Ok(None);
        };

        let lines = sqlx::query_as::<_, ConversationLine>(
            r#"SELECT c.name AS "character", l.line_text AS line
               FROM lines l
               JOIN characters c ON c.character_id = l.character_id
               WHERE l.conversation_id = $1
               ORDER BY l.sort ASC"#,
        )
        .bind(conv_id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ConversationDetail {
            conv_id,
            movie,
            conversation: lines,
        }))
    }

    /// Validate and insert one conversation plus its lines.
    ///
    /// Everything runs inside a single transaction: a rejection at any step
    /// leaves no partial rows. Identifiers come from the database sequence,
    /// so concurrent writers cannot allocate the same id. Line `sort` values
    /// are the 1-based submission positions.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &NewConversation,
    ) -> Result<DbId, ConversationWriteError> {
        let mut tx = pool.begin().await?;

        let movie: Option<(DbId,)> =
            sqlx::query_as("SELECT movie_id FROM movies WHERE movie_id = $1")
                .bind(movie_id)
                .fetch_optional(&mut *tx)
                .await?;
        if movie.is_none() {
            return Err(ConversationWriteError::MovieNotFound(movie_id));
        }

        for character_id in [input.character_1_id, input.character_2_id] {
            let member: Option<(DbId,)> = sqlx::query_as(
                "SELECT character_id FROM characters
                 WHERE character_id = $1 AND movie_id = $2",
            )
            .bind(character_id)
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;
            if member.is_none() {
                return Err(ConversationWriteError::CharacterNotInMovie {
                    character_id,
                    movie_id,
                });
            }
        }

        if input.character_1_id == input.character_2_id {
            return Err(ConversationWriteError::SameCharacter(input.character_1_id));
        }

        for (i, line) in input.lines.iter().enumerate() {
            if line.character_id != input.character_1_id
                && line.character_id != input.character_2_id
            {
                return Err(ConversationWriteError::LineSpeakerMismatch {
                    position: i + 1,
                    character_id: line.character_id,
                });
            }
        }

        let (conversation_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO conversations (character1_id, character2_id, movie_id)
             VALUES ($1, $2, $3)
             RETURNING conversation_id",
        )
        .bind(input.character_1_id)
        .bind(input.character_2_id)
        .bind(movie_id)
        .fetch_one(&mut *tx)
        .await?;

        for (i, line) in input.lines.iter().enumerate() {
            sqlx::query(
                "INSERT INTO lines (character_id, movie_id, conversation_id, sort, line_text)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(line.character_id)
            .bind(movie_id)
            .bind(conversation_id)
            .bind((i + 1) as i32)
            .bind(&line.line_text)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(conversation_id)
    }
}
