//! Shared corpus fixture for repository tests.
//!
//! Seeds two movies with a handful of characters, conversations, and lines,
//! chosen so the derived counts are easy to assert:
//!
//! - line counts: NEO 3, TRINITY 3, MORPHEUS 2, AGENT SMITH 0, JESSE 1,
//!   CELINE 1
//! - NEO's shared-line totals: TRINITY 5 (two conversations), MORPHEUS 3
//! - NEO and TRINITY tie at 3 lines, so id ordering decides their rank

use sqlx::PgPool;

pub const MATRIX: i64 = 1;
pub const SUNRISE: i64 = 2;

pub const NEO: i64 = 1;
pub const TRINITY: i64 = 2;
pub const MORPHEUS: i64 = 3;
pub const SMITH: i64 = 4;
pub const JESSE: i64 = 5;
pub const CELINE: i64 = 6;

/// Database-generated conversation ids from [`seed_corpus`].
pub struct Corpus {
    pub neo_trinity_a: i64,
    pub neo_morpheus: i64,
    pub trinity_neo: i64,
    pub jesse_celine: i64,
}

async fn insert_conversation(pool: &PgPool, c1: i64, c2: i64, movie_id: i64) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO conversations (character1_id, character2_id, movie_id)
         VALUES ($1, $2, $3) RETURNING conversation_id",
    )
    .bind(c1)
    .bind(c2)
    .bind(movie_id)
    .fetch_one(pool)
    .await
    .expect("conversation insert should succeed");
    id
}

async fn insert_line(pool: &PgPool, character_id: i64, movie_id: i64, conv_id: i64, sort: i32, text: &str) {
    sqlx::query(
        "INSERT INTO lines (character_id, movie_id, conversation_id, sort, line_text)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(character_id)
    .bind(movie_id)
    .bind(conv_id)
    .bind(sort)
    .bind(text)
    .execute(pool)
    .await
    .expect("line insert should succeed");
}

pub async fn seed_corpus(pool: &PgPool) -> Corpus {
    sqlx::query(
        "INSERT INTO movies (movie_id, title, year, imdb_rating, imdb_votes) VALUES
         ($1, 'The Matrix', 1999, 8.7, 1700000),
         ($2, 'Before Sunrise', 1995, 8.1, 250000)",
    )
    .bind(MATRIX)
    .bind(SUNRISE)
    .execute(pool)
    .await
    .expect("movie insert should succeed");

    sqlx::query(
        "INSERT INTO characters (character_id, name, gender, movie_id) VALUES
         ($1, 'NEO', 'm', $7),
         ($2, 'TRINITY', 'f', $7),
         ($3, 'MORPHEUS', 'm', $7),
         ($4, 'AGENT SMITH', NULL, $7),
         ($5, 'JESSE', 'm', $8),
         ($6, 'CELINE', 'f', $8)",
    )
    .bind(NEO)
    .bind(TRINITY)
    .bind(MORPHEUS)
    .bind(SMITH)
    .bind(JESSE)
    .bind(CELINE)
    .bind(MATRIX)
    .bind(SUNRISE)
    .execute(pool)
    .await
    .expect("character insert should succeed");

    let neo_trinity_a = insert_conversation(pool, NEO, TRINITY, MATRIX).await;
    insert_line(pool, NEO, MATRIX, neo_trinity_a, 1, "I know kung fu.").await;
    insert_line(pool, TRINITY, MATRIX, neo_trinity_a, 2, "Show me.").await;
    insert_line(pool, NEO, MATRIX, neo_trinity_a, 3, "Okay.").await;

    let neo_morpheus = insert_conversation(pool, NEO, MORPHEUS, MATRIX).await;
    insert_line(pool, MORPHEUS, MATRIX, neo_morpheus, 1, "This is your last chance.").await;
    insert_line(pool, NEO, MATRIX, neo_morpheus, 2, "Why do my eyes hurt?").await;
    insert_line(pool, MORPHEUS, MATRIX, neo_morpheus, 3, "You've never used them before.").await;

    // Participant order flipped so the partner CASE sees both directions.
    let trinity_neo = insert_conversation(pool, TRINITY, NEO, MATRIX).await;
    insert_line(pool, TRINITY, MATRIX, trinity_neo, 1, "Dodge this.").await;
    insert_line(pool, TRINITY, MATRIX, trinity_neo, 2, "Get up, Neo.").await;

    let jesse_celine = insert_conversation(pool, JESSE, CELINE, SUNRISE).await;
    insert_line(pool, JESSE, SUNRISE, jesse_celine, 1, "I have an admittedly insane idea.").await;
    insert_line(pool, CELINE, SUNRISE, jesse_celine, 2, "Let's get off the train in Vienna.").await;

    Corpus {
        neo_trinity_a,
        neo_morpheus,
        trinity_neo,
        jesse_celine,
    }
}
