//! `RoomPoolActor` - process-wide registry of live rooms.
//!
//! The pool:
//!
//! - Owns the name → (room, secret) mapping
//! - Creates rooms and supervises them until they terminate
//! - Removes an entry only when that room's terminal signal has been
//!   observed, so a name cannot be reused while its old room is still
//!   draining clients
//!
//! Supervision is one small task per room that waits on the terminal signal
//! and posts a `Reap` message back into the pool mailbox.

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use qrroom_shared::time::get_jst_timestamp;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{debug, error, info, instrument, warn};

use super::{
    error::RoomError,
    message::{PoolMessage, RoomSummary},
    registry::RoomRegistry,
    room::{RoomActor, RoomHandle},
    value_object::{RoomName, RoomSecret, Timestamp},
};

/// Channel buffer size for the pool mailbox.
const POOL_CHANNEL_BUFFER: usize = 256;

/// Idle timeout applied to new rooms when none is configured.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Result of a successful lookup.
#[derive(Debug, Clone)]
pub struct RoomEntry {
    handle: RoomHandle,
    secret: RoomSecret,
    created_at: Timestamp,
}

impl RoomEntry {
    pub fn new(handle: RoomHandle, secret: RoomSecret, created_at: Timestamp) -> Self {
        Self {
            handle,
            secret,
            created_at,
        }
    }

    /// Handle for read-only operations (subscribe, get value).
    pub fn handle(&self) -> &RoomHandle {
        &self.handle
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Check the caller-supplied secret and hand out the room handle.
    pub fn authorize(&self, secret: &RoomSecret) -> Result<&RoomHandle, RoomError> {
        if &self.secret == secret {
            Ok(&self.handle)
        } else {
            Err(RoomError::WrongSecret)
        }
    }
}

/// Handle to the `RoomPoolActor`.
#[derive(Clone)]
pub struct RoomPoolHandle {
    sender: mpsc::Sender<PoolMessage>,
}

impl RoomPoolHandle {
    /// Spawn the pool actor. Rooms it creates close after `idle_timeout`
    /// without serviced requests.
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(POOL_CHANNEL_BUFFER);

        let actor = RoomPoolActor {
            receiver,
            supervisor: sender.downgrade(),
            rooms: HashMap::new(),
            idle_timeout,
            next_generation: 0,
        };

        tokio::spawn(actor.run());

        Self { sender }
    }

    pub async fn create(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(PoolMessage::Create {
            name,
            secret,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| RoomError::PoolUnavailable)?
    }

    pub async fn lookup(&self, name: RoomName) -> Result<RoomEntry, RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(PoolMessage::Lookup {
            name,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| RoomError::PoolUnavailable)?
    }

    /// Validate the secret and ask the room to close.
    ///
    /// The entry disappears once the room has terminated, not on return.
    pub async fn delete(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(PoolMessage::Delete {
            name,
            secret,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| RoomError::PoolUnavailable)?
    }

    pub async fn list(&self) -> Result<Vec<RoomSummary>, RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(PoolMessage::List { respond_to: tx }).await?;
        rx.await.map_err(|_| RoomError::PoolUnavailable)
    }

    async fn request(&self, message: PoolMessage) -> Result<(), RoomError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| RoomError::PoolUnavailable)
    }
}

#[async_trait]
impl RoomRegistry for RoomPoolHandle {
    async fn create_room(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        self.create(name, secret).await
    }

    async fn lookup_room(&self, name: RoomName) -> Result<RoomEntry, RoomError> {
        self.lookup(name).await
    }

    async fn delete_room(&self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        self.delete(name, secret).await
    }

    async fn list_rooms(&self) -> Result<Vec<RoomSummary>, RoomError> {
        self.list().await
    }
}

/// Internal state for a managed room.
struct ManagedRoom {
    entry: RoomEntry,
    /// Distinguishes this room from a later one with the same name.
    generation: u64,
}

/// The `RoomPoolActor` implementation.
struct RoomPoolActor {
    receiver: mpsc::Receiver<PoolMessage>,
    /// Weak so that the pool exits once every external handle is dropped.
    supervisor: mpsc::WeakSender<PoolMessage>,
    rooms: HashMap<RoomName, ManagedRoom>,
    idle_timeout: Duration,
    next_generation: u64,
}

impl RoomPoolActor {
    #[instrument(skip_all, name = "room_pool")]
    async fn run(mut self) {
        info!(
            idle_timeout_secs = self.idle_timeout.as_secs(),
            "RoomPool started"
        );

        while let Some(message) = self.receiver.recv().await {
            self.handle_message(message);
        }

        info!(rooms_remaining = self.rooms.len(), "RoomPool stopped");
    }

    fn handle_message(&mut self, message: PoolMessage) {
        match message {
            PoolMessage::Create {
                name,
                secret,
                respond_to,
            } => {
                let result = self.create(name, secret);
                let _ = respond_to.send(result);
            }

            PoolMessage::Lookup { name, respond_to } => {
                let result = self
                    .rooms
                    .get(&name)
                    .map(|managed| managed.entry.clone())
                    .ok_or_else(|| RoomError::RoomNotFound(name.into_string()));
                let _ = respond_to.send(result);
            }

            PoolMessage::Delete {
                name,
                secret,
                respond_to,
            } => {
                let result = self.delete(name, &secret);
                let _ = respond_to.send(result);
            }

            PoolMessage::List { respond_to } => {
                let mut summaries: Vec<RoomSummary> = self
                    .rooms
                    .iter()
                    .map(|(name, managed)| RoomSummary {
                        name: name.clone(),
                        created_at: managed.entry.created_at(),
                    })
                    .collect();
                summaries.sort_by(|a, b| a.name.cmp(&b.name));
                let _ = respond_to.send(summaries);
            }

            PoolMessage::Reap { name, generation } => self.reap(name, generation),
        }
    }

    fn create(&mut self, name: RoomName, secret: RoomSecret) -> Result<(), RoomError> {
        if self.rooms.contains_key(&name) {
            debug!(room = %name, "Room name already taken");
            return Err(RoomError::RoomNameTaken(name.into_string()));
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let (handle, task_handle) = RoomActor::spawn(name.clone(), self.idle_timeout);
        self.supervise(handle.clone(), task_handle, generation);

        let created_at = Timestamp::new(get_jst_timestamp());
        self.rooms.insert(
            name.clone(),
            ManagedRoom {
                entry: RoomEntry::new(handle, secret, created_at),
                generation,
            },
        );

        info!(room = %name, total_rooms = self.rooms.len(), "Room created");
        Ok(())
    }

    fn delete(&mut self, name: RoomName, secret: &RoomSecret) -> Result<(), RoomError> {
        let Some(managed) = self.rooms.get(&name) else {
            return Err(RoomError::RoomNotFound(name.into_string()));
        };

        let handle = managed.entry.authorize(secret).inspect_err(|_| {
            warn!(room = %name, "Delete rejected: wrong secret");
        })?;

        handle.close();
        info!(room = %name, "Room close requested");
        Ok(())
    }

    fn reap(&mut self, name: RoomName, generation: u64) {
        match self.rooms.get(&name) {
            Some(managed) if managed.generation == generation => {
                self.rooms.remove(&name);
                info!(room = %name, total_rooms = self.rooms.len(), "Room removed");
            }
            _ => debug!(room = %name, generation, "Stale reap ignored"),
        }
    }

    /// Wait for the room's terminal signal, then ask the pool to drop it.
    fn supervise(&self, handle: RoomHandle, task_handle: JoinHandle<()>, generation: u64) {
        let pool = self.supervisor.clone();

        tokio::spawn(async move {
            handle.closed().await;

            if let Err(join_error) = task_handle.await {
                if join_error.is_panic() {
                    error!(room = %handle.name(), error = ?join_error, "Room actor panicked");
                }
            }

            if let Some(pool) = pool.upgrade() {
                let _ = pool
                    .send(PoolMessage::Reap {
                        name: handle.name().clone(),
                        generation,
                    })
                    .await;
            }
        });
    }
}
