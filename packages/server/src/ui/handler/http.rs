//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{RoomName, RoomSecret, RoomValue},
    infrastructure::dto::http::{
        CreateRoomRequest, CreateRoomResponse, DeleteRoomRequest, HealthResponse, RoomDetailDto,
        RoomSummaryDto, UpdateValueRequest,
    },
    ui::{error::ApiError, state::AppState},
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Get list of rooms
pub async fn get_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoomSummaryDto>>, ApiError> {
    let rooms = state.get_rooms_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(rooms.into_iter().map(RoomSummaryDto::from).collect()))
}

/// Create a room
///
/// Returns the room secret, generated when the request carries none.
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), ApiError> {
    let name = RoomName::new(request.room_id)?;
    let secret = request.password.map(RoomSecret::new).transpose()?;

    let secret = state
        .create_room_usecase
        .execute(name.clone(), secret)
        .await?;

    let response = CreateRoomResponse {
        room_id: name.into_string(),
        password: secret.into_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let name = RoomName::new(room_id)?;
    let detail = state.get_room_detail_usecase.execute(name).await?;
    Ok(Json(detail.into()))
}

/// Delete a room
///
/// Subscribers receive `room-closed` before the room disappears from the list.
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(request): Json<DeleteRoomRequest>,
) -> Result<StatusCode, ApiError> {
    let name = RoomName::new(room_id)?;
    let secret = RoomSecret::new(request.password)?;

    state.delete_room_usecase.execute(name, secret).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the value of a room and notify its subscribers
pub async fn update_value(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(request): Json<UpdateValueRequest>,
) -> Result<StatusCode, ApiError> {
    let name = RoomName::new(room_id)?;
    let secret = RoomSecret::new(request.password)?;
    let value = RoomValue::new(request.value)?;

    state
        .update_value_usecase
        .execute(name, secret, value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
