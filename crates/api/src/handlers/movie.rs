//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dialog_core::error::CoreError;
use dialog_core::pagination::{validate_limit, validate_offset};
use dialog_core::types::DbId;
use dialog_db::models::movie::{MovieDetail, MovieListParams, MovieSummary};
use dialog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies/{movie_id}
///
/// Returns the movie together with its top five characters ranked by
/// number of lines.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<MovieDetail>> {
    let movie = MovieRepo::find_detail(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;
    Ok(Json(movie))
}

/// GET /movies
///
/// Filter by title substring (`name`), sort by `movie_title`, `year`, or
/// `rating`, paginate with `limit`/`offset`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let limit = validate_limit(params.limit)?;
    let offset = validate_offset(params.offset)?;
    let movies = MovieRepo::list(&state.pool, &params.name, params.sort, limit, offset).await?;
    Ok(Json(movies))
}
