//! Handlers for conversations: transcript reads plus the one write path
//! nested under movies.

use axum::extract::{Path, State};
use axum::Json;
use dialog_core::error::CoreError;
use dialog_core::types::DbId;
use dialog_db::models::conversation::{ConversationCreated, ConversationDetail, NewConversation};
use dialog_db::repositories::ConversationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /conversations/{conv_id}
///
/// Returns the conversation as a transcript ordered by line sort index.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(conv_id): Path<DbId>,
) -> AppResult<Json<ConversationDetail>> {
    let conversation = ConversationRepo::find_detail(&state.pool, conv_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conversation",
            id: conv_id,
        }))?;
    Ok(Json(conversation))
}

/// POST /movies/{movie_id}/conversations
///
/// Validates and inserts one conversation plus its ordered lines in a
/// single transaction. Any validation failure reports 404.
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<NewConversation>,
) -> AppResult<Json<ConversationCreated>> {
    let conversation_id = ConversationRepo::create(&state.pool, movie_id, &input).await?;
    tracing::info!(conversation_id, movie_id, lines = input.lines.len(), "Conversation created");
    Ok(Json(ConversationCreated { conversation_id }))
}
