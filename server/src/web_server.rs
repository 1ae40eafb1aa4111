use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use common::games::tictactoe::Difficulty;
use common::lobby::{RoomRegistry, SessionRegistry};
use common::log;

use crate::http_handler;

#[derive(Clone)]
pub struct WebServerState {
    pub room_registry: RoomRegistry,
    pub session_registry: SessionRegistry,
    pub default_difficulty: Difficulty,
}

pub fn build_router(state: WebServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/sessions", post(http_handler::start_session))
        .route("/api/sessions/{id}", get(http_handler::session_state))
        .route("/api/sessions/{id}/move/{cell}", post(http_handler::session_move))
        .route("/api/sessions/{id}/reset", post(http_handler::session_reset))
        .route("/api/sessions/{id}/reset-scores", post(http_handler::session_reset_scores))
        .route("/api/rooms", post(http_handler::create_room))
        .route("/api/rooms/{code}", get(http_handler::room_state))
        .route("/api/rooms/{code}/join", post(http_handler::join_room))
        .route("/api/rooms/{code}/move", post(http_handler::room_move))
        .route("/api/rooms/{code}/reset", post(http_handler::room_reset))
        .route("/api/rooms/{code}/reset-scores", post(http_handler::room_reset_scores))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server<F>(
    state: WebServerState,
    addr: SocketAddr,
    shutdown_signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!("Web server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
