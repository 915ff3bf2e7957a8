//! HTTP API client.

use qrroom_server::infrastructure::dto::http::{
    CreateRoomRequest, CreateRoomResponse, DeleteRoomRequest, ErrorResponse, RoomDetailDto,
    RoomSummaryDto, UpdateValueRequest,
};
use reqwest::{Response, StatusCode, Url};

use crate::error::ClientError;

/// Client for the room server's HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for a server such as `http://127.0.0.1:8888`
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base = Url::parse(server).map_err(|_| ClientError::InvalidUrl(server.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(server.to_string()));
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    /// Build `<base>/<segments...>`, escaping each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// WebSocket subscription URL for a room
    pub fn ws_url(&self, room: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint(&["ws"])?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?;
        url.query_pairs_mut().append_pair("room_id", room);
        Ok(url)
    }

    /// Create a room; returns the room secret
    pub async fn create_room(
        &self,
        room: &str,
        password: Option<String>,
    ) -> Result<CreateRoomResponse, ClientError> {
        let request = CreateRoomRequest {
            room_id: room.to_string(),
            password,
        };
        let response = self
            .http
            .post(self.endpoint(&["api", "rooms"])?)
            .json(&request)
            .send()
            .await?;
        Ok(check(response, room).await?.json().await?)
    }

    pub async fn delete_room(&self, room: &str, password: &str) -> Result<(), ClientError> {
        let request = DeleteRoomRequest {
            password: password.to_string(),
        };
        let response = self
            .http
            .delete(self.endpoint(&["api", "rooms", room])?)
            .json(&request)
            .send()
            .await?;
        check(response, room).await?;
        Ok(())
    }

    pub async fn update_value(
        &self,
        room: &str,
        password: &str,
        value: &str,
    ) -> Result<(), ClientError> {
        let request = UpdateValueRequest {
            password: password.to_string(),
            value: value.to_string(),
        };
        let response = self
            .http
            .put(self.endpoint(&["api", "rooms", room, "value"])?)
            .json(&request)
            .send()
            .await?;
        check(response, room).await?;
        Ok(())
    }

    pub async fn list_rooms(&self) -> Result<Vec<RoomSummaryDto>, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["api", "rooms"])?)
            .send()
            .await?;
        Ok(check(response, "").await?.json().await?)
    }

    pub async fn room_detail(&self, room: &str) -> Result<RoomDetailDto, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["api", "rooms", room])?)
            .send()
            .await?;
        Ok(check(response, room).await?.json().await?)
    }
}

/// Turn an error status into `ClientError`
async fn check(response: Response, room: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND && !room.is_empty() {
        return Err(ClientError::RoomNotFound(room.to_string()));
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
