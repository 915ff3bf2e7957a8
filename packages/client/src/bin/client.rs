//! Room client: create rooms, publish values, and watch them change.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin qrroom-client -- create alpha --password 42
//! cargo run --bin qrroom-client -- subscribe alpha
//! cargo run --bin qrroom-client -- publish alpha --password 42
//! ```

use clap::{Parser, Subcommand};

use qrroom_client::{
    ApiClient, ClientError, formatter::EventFormatter, publisher::run_publisher,
    runner::run_subscriber,
};
use qrroom_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "qrroom-client")]
#[command(about = "CLI client for the room server", long_about = None)]
struct Args {
    /// Room server URL
    #[arg(short = 's', long, default_value = "http://127.0.0.1:8888")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a room and print its password
    Create {
        room: String,
        /// Room password (generated by the server when omitted)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Close a room; subscribers are notified
    Delete {
        room: String,
        #[arg(short = 'p', long)]
        password: String,
    },
    /// Set the room value once
    Update {
        room: String,
        #[arg(short = 'p', long)]
        password: String,
        value: String,
    },
    /// Publish every entered line as the room value
    Publish {
        room: String,
        #[arg(short = 'p', long)]
        password: String,
    },
    /// Print every value change until the room closes
    Subscribe { room: String },
    /// List rooms
    List,
    /// Show a room's current value and subscriber count
    Show { room: String },
}

async fn run(api: ApiClient, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Create { room, password } => {
            let created = api.create_room(&room, password).await?;
            println!("room: {}", created.room_id);
            println!("password: {}", created.password);
        }
        Command::Delete { room, password } => {
            api.delete_room(&room, &password).await?;
            println!("room '{}' closed", room);
        }
        Command::Update {
            room,
            password,
            value,
        } => {
            api.update_value(&room, &password, &value).await?;
            println!("room '{}' updated", room);
        }
        Command::Publish { room, password } => run_publisher(&api, &room, &password).await?,
        Command::Subscribe { room } => run_subscriber(&api, &room).await?,
        Command::List => {
            let rooms = api.list_rooms().await?;
            print!("{}", EventFormatter::format_room_list(&rooms));
        }
        Command::Show { room } => {
            let detail = api.room_detail(&room).await?;
            print!("{}", EventFormatter::format_room_detail(&detail));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let result = match ApiClient::new(&args.server) {
        Ok(api) => run(api, args.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("Client error: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
