//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    CreateRoomUseCase, DeleteRoomUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
    SubscribeRoomUseCase, UpdateValueUseCase,
};

use super::{
    handler::{
        create_room, delete_room, get_room_detail, get_rooms, health_check, update_value,
        websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Room server
///
/// This struct holds the use cases and provides methods to build the router
/// and run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     create_room_usecase,
///     delete_room_usecase,
///     update_value_usecase,
///     subscribe_room_usecase,
///     get_rooms_usecase,
///     get_room_detail_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 8888).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(
        create_room_usecase: Arc<CreateRoomUseCase>,
        delete_room_usecase: Arc<DeleteRoomUseCase>,
        update_value_usecase: Arc<UpdateValueUseCase>,
        subscribe_room_usecase: Arc<SubscribeRoomUseCase>,
        get_rooms_usecase: Arc<GetRoomsUseCase>,
        get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    ) -> Self {
        let state = Arc::new(AppState {
            create_room_usecase,
            delete_room_usecase,
            update_value_usecase,
            subscribe_room_usecase,
            get_rooms_usecase,
            get_room_detail_usecase,
        });
        Self { state }
    }

    /// Build the router with every endpoint and request tracing.
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms).post(create_room))
            .route(
                "/api/rooms/{room_id}",
                get(get_room_detail).delete(delete_room),
            )
            .route("/api/rooms/{room_id}/value", put(update_value))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the room server until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Room server listening on {}", listener.local_addr()?);
        tracing::info!("Subscribe with: ws://{}/ws?room_id=<room>", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
