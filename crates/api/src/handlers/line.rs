//! Handlers for the `/lines` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dialog_core::error::CoreError;
use dialog_core::pagination::{validate_limit, validate_offset};
use dialog_core::types::DbId;
use dialog_db::models::line::{LineDetail, LineListParams, LineSummary};
use dialog_db::repositories::LineRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /lines/{line_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(line_id): Path<DbId>,
) -> AppResult<Json<LineDetail>> {
    let line = LineRepo::find_detail(&state.pool, line_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Line",
            id: line_id,
        }))?;
    Ok(Json(line))
}

/// GET /lines
///
/// Filter by line text substring (`text`) and movie title substring
/// (`movie_title`), sort by `movie_title` or `character`, paginate with
/// `limit`/`offset`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LineListParams>,
) -> AppResult<Json<Vec<LineSummary>>> {
    let limit = validate_limit(params.limit)?;
    let offset = validate_offset(params.offset)?;
    let lines = LineRepo::list(
        &state.pool,
        &params.text,
        &params.movie_title,
        params.sort,
        limit,
        offset,
    )
    .await?;
    Ok(Json(lines))
}
