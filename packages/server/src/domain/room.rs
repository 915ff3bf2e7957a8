//! `RoomActor` - per-room actor that owns the room value and member set.
//!
//! Lifecycle: Running → Closing → Closed.
//!
//! - Running: requests are serviced one at a time in arrival order. Every
//!   serviced request resets the idle clock.
//! - Closing: entered on an explicit `Close` or when no request has been
//!   serviced for `idle_timeout`. The mailbox is closed, then every member
//!   is sent its "closed" notification.
//! - Closed: the terminal signal fires and the task exits. Requests still
//!   addressed to the room fail with `RoomError::RoomNotFound`.

use std::{collections::HashMap, time::Duration};

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::Instant,
};
use tracing::{debug, info, instrument, warn};

use super::{
    client::{Client, Delivery},
    error::RoomError,
    message::{RoomMessage, RoomSnapshot},
    value_object::{ClientId, RoomName, RoomValue},
};

/// Channel buffer size for the room mailbox.
const ROOM_CHANNEL_BUFFER: usize = 64;

/// Why a room left the Running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseReason {
    Requested,
    IdleTimeout,
    /// Every handle was dropped
    Abandoned,
}

/// Handle to a `RoomActor`.
///
/// Cheap to clone. All methods are requests to the room's control loop.
#[derive(Debug, Clone)]
pub struct RoomHandle {
    name: RoomName,
    sender: mpsc::Sender<RoomMessage>,
    closed: watch::Receiver<bool>,
}

impl RoomHandle {
    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// Add a client to the member set.
    pub async fn register_client(&self, client: Client) -> Result<(), RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(RoomMessage::RegisterClient {
            client,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| self.gone())
    }

    /// Remove a client from the member set. No-op if it is not a member.
    pub async fn deregister_client(&self, client_id: ClientId) -> Result<(), RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(RoomMessage::DeregisterClient {
            client_id,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| self.gone())
    }

    /// Replace the value and notify every member.
    ///
    /// Returns once the value is stored and notifications are queued.
    pub async fn set_value(&self, value: RoomValue) -> Result<(), RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(RoomMessage::SetValue {
            value,
            respond_to: tx,
        })
        .await?;
        rx.await.map_err(|_| self.gone())
    }

    pub async fn get_value(&self) -> Result<RoomValue, RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(RoomMessage::GetValue { respond_to: tx })
            .await?;
        rx.await.map_err(|_| self.gone())
    }

    pub async fn get_snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        let (tx, rx) = oneshot::channel();
        self.request(RoomMessage::GetSnapshot { respond_to: tx })
            .await?;
        rx.await.map_err(|_| self.gone())
    }

    /// Request termination without waiting for it.
    ///
    /// Never blocks the caller: if the mailbox is full the request is handed
    /// to a short-lived task. Closing an already terminated room is a no-op.
    pub fn close(&self) {
        match self.sender.try_send(RoomMessage::Close) {
            Ok(()) | Err(mpsc::error::TrySendError::Closed(_)) => {}
            Err(mpsc::error::TrySendError::Full(message)) => {
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let _ = sender.send(message).await;
                });
            }
        }
    }

    /// Wait for the room's terminal signal.
    ///
    /// Resolves after every member has been sent its "closed" notification.
    pub async fn closed(&self) {
        let mut closed = self.closed.clone();
        // Err means the actor dropped its sender, which only happens on exit.
        let _ = closed.wait_for(|closed| *closed).await;
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    async fn request(&self, message: RoomMessage) -> Result<(), RoomError> {
        self.sender.send(message).await.map_err(|_| self.gone())
    }

    fn gone(&self) -> RoomError {
        RoomError::RoomNotFound(self.name.as_str().to_string())
    }
}

/// The `RoomActor` implementation.
///
/// Owns the room state and runs the message loop. Nothing else holds a
/// reference to the value or the member set.
pub struct RoomActor {
    name: RoomName,
    receiver: mpsc::Receiver<RoomMessage>,
    value: RoomValue,
    clients: HashMap<ClientId, Client>,
    idle_timeout: Duration,
    last_active: Instant,
    closed: watch::Sender<bool>,
}

impl RoomActor {
    /// Spawn a new room actor.
    ///
    /// Returns a handle and the task join handle.
    pub fn spawn(name: RoomName, idle_timeout: Duration) -> (RoomHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(ROOM_CHANNEL_BUFFER);
        let (closed_tx, closed_rx) = watch::channel(false);

        let actor = Self {
            name: name.clone(),
            receiver,
            value: RoomValue::default(),
            clients: HashMap::new(),
            idle_timeout,
            last_active: Instant::now(),
            closed: closed_tx,
        };

        let task_handle = tokio::spawn(actor.run());

        let handle = RoomHandle {
            name,
            sender,
            closed: closed_rx,
        };

        (handle, task_handle)
    }

    /// Run the actor message loop.
    #[instrument(skip_all, name = "room", fields(room = %self.name))]
    async fn run(mut self) {
        info!(
            idle_timeout_secs = self.idle_timeout.as_secs(),
            "Room started"
        );

        let reason = loop {
            let idle_deadline = self.last_active + self.idle_timeout;

            tokio::select! {
                () = tokio::time::sleep_until(idle_deadline) => {
                    break CloseReason::IdleTimeout;
                }

                msg = self.receiver.recv() => {
                    match msg {
                        Some(RoomMessage::Close) => break CloseReason::Requested,
                        Some(message) => {
                            self.handle_message(message);
                            self.last_active = Instant::now();
                        }
                        None => break CloseReason::Abandoned,
                    }
                }
            }
        };

        self.shutdown(reason);
    }

    /// Handle a single message.
    fn handle_message(&mut self, message: RoomMessage) {
        match message {
            RoomMessage::RegisterClient { client, respond_to } => {
                let client_id = client.id();
                if self.clients.insert(client_id, client).is_some() {
                    warn!(client_id = %client_id, "Client registered twice, replacing");
                }
                debug!(
                    client_id = %client_id,
                    clients = self.clients.len(),
                    "Client registered"
                );
                let _ = respond_to.send(());
            }

            RoomMessage::DeregisterClient {
                client_id,
                respond_to,
            } => {
                if self.clients.remove(&client_id).is_some() {
                    debug!(
                        client_id = %client_id,
                        clients = self.clients.len(),
                        "Client deregistered"
                    );
                }
                let _ = respond_to.send(());
            }

            RoomMessage::SetValue { value, respond_to } => {
                self.value = value;
                self.fan_out();
                let _ = respond_to.send(());
            }

            RoomMessage::GetValue { respond_to } => {
                let _ = respond_to.send(self.value.clone());
            }

            RoomMessage::GetSnapshot { respond_to } => {
                let _ = respond_to.send(RoomSnapshot {
                    value: self.value.clone(),
                    client_count: self.clients.len(),
                });
            }

            // Intercepted by the loop before dispatch.
            RoomMessage::Close => {}
        }
    }

    /// Notify every member that the value changed.
    ///
    /// Members whose subscriber side is gone are dropped from the set.
    fn fan_out(&mut self) {
        let mut delivered = 0usize;
        let mut coalesced = 0usize;
        let mut disconnected = Vec::new();

        for (client_id, client) in &self.clients {
            match client.notify_changed() {
                Delivery::Delivered => delivered += 1,
                Delivery::Coalesced => coalesced += 1,
                Delivery::Disconnected => disconnected.push(*client_id),
            }
        }

        for client_id in &disconnected {
            self.clients.remove(client_id);
        }

        debug!(
            delivered,
            coalesced,
            pruned = disconnected.len(),
            "Value change fanned out"
        );
    }

    /// Close the mailbox, notify every member, then fire the terminal signal.
    fn shutdown(mut self, reason: CloseReason) {
        info!(reason = ?reason, clients = self.clients.len(), "Room closing");

        // Queued requests are dropped with the receiver; their callers see
        // RoomNotFound.
        self.receiver.close();

        let mut notified = 0usize;
        for (client_id, client) in self.clients.drain() {
            match client.notify_closed() {
                Delivery::Delivered | Delivery::Coalesced => notified += 1,
                Delivery::Disconnected => {
                    debug!(client_id = %client_id, "Client already gone at close");
                }
            }
        }

        self.closed.send_replace(true);

        info!(notified, "Room closed");
    }
}
