//! Room server: share a short value (a QR-code payload) with every subscriber
//! of a named room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin qrroom-server
//! cargo run --bin qrroom-server -- --host 0.0.0.0 --port 3000 --idle-timeout-secs 300
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use qrroom_server::{
    domain::{RoomPoolHandle, RoomRegistry},
    ui::Server,
    usecase::{
        CreateRoomUseCase, DeleteRoomUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        SubscribeRoomUseCase, UpdateValueUseCase,
    },
};
use qrroom_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "qrroom-server")]
#[command(about = "Room server pushing value changes to WebSocket subscribers", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8888")]
    port: u16,

    /// Seconds without requests after which a room closes itself
    #[arg(long, default_value = "120")]
    idle_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. RoomPool
    // 2. UseCases
    // 3. Server

    // 1. Start the RoomPool actor
    let idle_timeout = Duration::from_secs(args.idle_timeout_secs);
    let registry: Arc<dyn RoomRegistry> = Arc::new(RoomPoolHandle::new(idle_timeout));

    // 2. Create UseCases
    let create_room_usecase = Arc::new(CreateRoomUseCase::new(registry.clone()));
    let delete_room_usecase = Arc::new(DeleteRoomUseCase::new(registry.clone()));
    let update_value_usecase = Arc::new(UpdateValueUseCase::new(registry.clone()));
    let subscribe_room_usecase = Arc::new(SubscribeRoomUseCase::new(registry.clone()));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(registry.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(registry));

    // 3. Create and run the server
    let server = Server::new(
        create_room_usecase,
        delete_room_usecase,
        update_value_usecase,
        subscribe_room_usecase,
        get_rooms_usecase,
        get_room_detail_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
