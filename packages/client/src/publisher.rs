//! Interactive publisher: every entered line becomes the room value.

use qrroom_shared::time::get_jst_timestamp;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{api::ApiClient, error::ClientError, formatter::EventFormatter};

/// Read lines with rustyline and publish each one to the room.
///
/// Ends on Ctrl+C / Ctrl+D. A wrong password or a closed room ends the
/// publisher with an error; other failures are reported and the prompt
/// continues.
pub async fn run_publisher(api: &ApiClient, room: &str, password: &str) -> Result<(), ClientError> {
    // Fail early on an unknown room
    api.room_detail(room).await?;

    println!(
        "\nPublishing to room '{}'. Type a value and press Enter. Press Ctrl+C to exit.\n",
        room
    );

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let prompt = format!("{}> ", room);

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    while let Some(line) = input_rx.recv().await {
        match api.update_value(room, password, &line).await {
            Ok(()) => println!("{}", EventFormatter::format_published(&line, get_jst_timestamp())),
            Err(e @ (ClientError::RoomNotFound(_) | ClientError::Api { status: 403, .. })) => {
                return Err(e);
            }
            Err(e) => tracing::warn!("Failed to publish: {}", e),
        }
    }

    Ok(())
}
