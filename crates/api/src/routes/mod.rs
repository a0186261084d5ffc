//! Route tree for the public API.

pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, conversation, line, movie};
use crate::state::AppState;

/// Build the resource routes, mounted at the root.
///
/// ```text
/// GET  /movies                              list (name, sort, limit, offset)
/// GET  /movies/{movie_id}                   movie + top characters
/// POST /movies/{movie_id}/conversations     insert conversation + lines
///
/// GET  /characters                          list (name, sort, limit, offset)
/// GET  /characters/{character_id}           character + top conversation partners
///
/// GET  /lines                               list (text, movie_title, sort, limit, offset)
/// GET  /lines/{line_id}                     line + speaker + movie
///
/// GET  /conversations/{conv_id}             conversation transcript
/// ```
pub fn api_routes() -> Router<AppState> {
    let movie_routes = Router::new()
        .route("/", get(movie::list))
        .route("/{movie_id}", get(movie::get_by_id))
        .route(
            "/{movie_id}/conversations",
            axum::routing::post(conversation::create),
        );

    let character_routes = Router::new()
        .route("/", get(character::list))
        .route("/{character_id}", get(character::get_by_id));

    let line_routes = Router::new()
        .route("/", get(line::list))
        .route("/{line_id}", get(line::get_by_id));

    let conversation_routes = Router::new().route("/{conv_id}", get(conversation::get_by_id));

    Router::new()
        .nest("/movies", movie_routes)
        .nest("/characters", character_routes)
        .nest("/lines", line_routes)
        .nest("/conversations", conversation_routes)
}
