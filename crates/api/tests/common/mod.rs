use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use dialog_api::config::ServerConfig;
use dialog_api::routes;
use dialog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Seed a two-movie corpus matching the ids used in the endpoint tests.
///
/// Movie 0 ("The Matrix") has characters 0-2, movie 1 ("Before Sunrise")
/// has characters 3-4. One seeded conversation (returned) carries three
/// lines in movie 0.
pub async fn seed_corpus(pool: &PgPool) -> i64 {
    sqlx::query(
        "INSERT INTO movies (movie_id, title, year, imdb_rating, imdb_votes) VALUES
         (0, 'The Matrix', 1999, 8.7, 1700000),
         (1, 'Before Sunrise', 1995, 8.1, 250000)",
    )
    .execute(pool)
    .await
    .expect("movie insert should succeed");

    sqlx::query(
        "INSERT INTO characters (character_id, name, gender, movie_id) VALUES
         (0, 'NEO', 'm', 0),
         (1, 'TRINITY', 'f', 0),
         (2, 'MORPHEUS', 'm', 0),
         (3, 'JESSE', 'm', 1),
         (4, 'CELINE', 'f', 1)",
    )
    .execute(pool)
    .await
    .expect("character insert should succeed");

    let (conv_id,): (i64,) = sqlx::query_as(
        "INSERT INTO conversations (character1_id, character2_id, movie_id)
         VALUES (0, 1, 0) RETURNING conversation_id",
    )
    .fetch_one(pool)
    .await
    .expect("conversation insert should succeed");

    sqlx::query(
        "INSERT INTO lines (character_id, movie_id, conversation_id, sort, line_text) VALUES
         (0, 0, $1, 1, 'I know kung fu.'),
         (1, 0, $1, 2, 'Show me.'),
         (0, 0, $1, 3, 'Okay.')",
    )
    .bind(conv_id)
    .execute(pool)
    .await
    .expect("line insert should succeed");

    conv_id
}
