use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use common::games::tictactoe::{Difficulty, GameError, GameSnapshot, Mark};
use common::{RoomCode, SessionId};

use crate::web_server::WebServerState;

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub player_name: String,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub session_id: SessionId,
    pub state: GameSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct PlayerNameRequest {
    pub player_name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRoomResponse {
    pub code: RoomCode,
    pub state: GameSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct RoomMoveRequest {
    pub mark: Mark,
    pub cell: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// Maps domain errors onto HTTP statuses with a JSON body.
#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::InvalidMove(_) => StatusCode::BAD_REQUEST,
            GameError::RoomNotFound | GameError::SessionNotFound => StatusCode::NOT_FOUND,
            GameError::NotYourTurn | GameError::RoomFull => StatusCode::CONFLICT,
        };
        let body = ErrorBody {
            error: self.0.kind(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn start_session(
    State(state): State<WebServerState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<StartSessionResponse>), ApiError> {
    let difficulty = request
        .difficulty
        .as_deref()
        .map(Difficulty::parse_or_default)
        .unwrap_or(state.default_difficulty);

    let session_id = state.session_registry.start(request.player_name, difficulty).await;
    let snapshot = state.session_registry.snapshot(&session_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(StartSessionResponse {
            session_id,
            state: snapshot,
        }),
    ))
}

pub async fn session_state(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.session_registry.snapshot(&SessionId::new(id)).await?;
    Ok(Json(snapshot))
}

pub async fn session_move(
    State(state): State<WebServerState>,
    Path((id, cell)): Path<(String, usize)>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state
        .session_registry
        .apply_move(&SessionId::new(id), cell)
        .await?;
    Ok(Json(snapshot))
}

pub async fn session_reset(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.session_registry.reset(&SessionId::new(id)).await?;
    Ok(Json(snapshot))
}

pub async fn session_reset_scores(
    State(state): State<WebServerState>,
    Path(id): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.session_registry.reset_scores(&SessionId::new(id)).await?;
    Ok(Json(snapshot))
}

pub async fn create_room(
    State(state): State<WebServerState>,
    Json(request): Json<PlayerNameRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), ApiError> {
    let code = state.room_registry.create_room(request.player_name).await;
    let snapshot = state.room_registry.snapshot(code.as_str()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            code,
            state: snapshot,
        }),
    ))
}

pub async fn join_room(
    State(state): State<WebServerState>,
    Path(code): Path<String>,
    Json(request): Json<PlayerNameRequest>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state
        .room_registry
        .join_room(&code, request.player_name)
        .await?;
    Ok(Json(snapshot))
}

pub async fn room_state(
    State(state): State<WebServerState>,
    Path(code): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.room_registry.snapshot(&code).await?;
    Ok(Json(snapshot))
}

pub async fn room_move(
    State(state): State<WebServerState>,
    Path(code): Path<String>,
    Json(request): Json<RoomMoveRequest>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state
        .room_registry
        .apply_move(&code, request.mark, request.cell)
        .await?;
    Ok(Json(snapshot))
}

pub async fn room_reset(
    State(state): State<WebServerState>,
    Path(code): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.room_registry.reset_room(&code).await?;
    Ok(Json(snapshot))
}

pub async fn room_reset_scores(
    State(state): State<WebServerState>,
    Path(code): Path<String>,
) -> ApiResult<GameSnapshot> {
    let snapshot = state.room_registry.reset_scores(&code).await?;
    Ok(Json(snapshot))
}
