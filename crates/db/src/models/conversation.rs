//! Conversation projections and the write-path DTOs.

use dialog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One exchange inside a conversation transcript, in sort order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConversationLine {
    pub character: String,
    pub line: String,
}

/// Full response for `GET /conversations/{conv_id}`.
#[derive(Debug, Serialize)]
pub struct ConversationDetail {
    pub conv_id: DbId,
    pub movie: String,
    pub conversation: Vec<ConversationLine>,
}

/// One submitted line in a conversation create request.
#[derive(Debug, Deserialize)]
pub struct NewLine {
    pub character_id: DbId,
    pub line_text: String,
}

/// Request body for `POST /movies/{movie_id}/conversations`.
///
/// Line `sort` values are assigned from the submission order, starting at 1.
#[derive(Debug, Deserialize)]
pub struct NewConversation {
    pub character_1_id: DbId,
    pub character_2_id: DbId,
    pub lines: Vec<NewLine>,
}

/// Response body for a successful conversation insert.
#[derive(Debug, Serialize)]
pub struct ConversationCreated {
    pub conversation_id: DbId,
}
