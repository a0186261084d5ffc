//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dialog_core::error::CoreError;
use dialog_core::pagination::{validate_limit, validate_offset};
use dialog_core::types::DbId;
use dialog_db::models::character::{CharacterDetail, CharacterListParams, CharacterSummary};
use dialog_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /characters/{character_id}
///
/// Returns the character together with its conversation partners ranked by
/// total shared line count.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::find_detail(&state.pool, character_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }))?;
    Ok(Json(character))
}

/// GET /characters
///
/// Filter by name substring (`name`), sort by `character`, `movie`, or
/// `number_of_lines`, paginate with `limit`/`offset`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterListParams>,
) -> AppResult<Json<Vec<CharacterSummary>>> {
    let limit = validate_limit(params.limit)?;
    let offset = validate_offset(params.offset)?;
    let characters =
        CharacterRepo::list(&state.pool, &params.name, params.sort, limit, offset).await?;
    Ok(Json(characters))
}
