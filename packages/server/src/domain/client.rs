//! Subscriber registration handle.
//!
//! A `Client` is the half a room keeps in its member set; `ClientEvents` is
//! the half the connection handler keeps and waits on. Delivery from the
//! room side never blocks:
//!
//! - "value changed" goes through a capacity-1 queue written with
//!   `try_send`. A full queue already holds an unread notification, so the
//!   new one is coalesced into it. The subscriber reads the latest value
//!   when it wakes up, so nothing is lost.
//! - "closed" goes through a oneshot channel that is consumed on send, so a
//!   client is told about closure at most once.

use tokio::sync::{mpsc, oneshot};

use super::value_object::ClientId;

/// One unread "value changed" notification is enough.
const CHANGED_QUEUE_CAPACITY: usize = 1;

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Notification queued for the subscriber
    Delivered,
    /// A notification was already pending; merged into it
    Coalesced,
    /// The subscriber side is gone
    Disconnected,
}

/// Room-side half of a subscriber registration.
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    changed: mpsc::Sender<()>,
    closed: oneshot::Sender<()>,
}

impl Client {
    /// Create a client and the event stream its owner listens on.
    pub fn new(id: ClientId) -> (Self, ClientEvents) {
        let (changed_tx, changed_rx) = mpsc::channel(CHANGED_QUEUE_CAPACITY);
        let (closed_tx, closed_rx) = oneshot::channel();

        let client = Self {
            id,
            changed: changed_tx,
            closed: closed_tx,
        };
        let events = ClientEvents {
            id,
            changed: changed_rx,
            closed: Some(closed_rx),
        };

        (client, events)
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Signal that the room value changed. Never blocks.
    pub fn notify_changed(&self) -> Delivery {
        match self.changed.try_send(()) {
            Ok(()) => Delivery::Delivered,
            Err(mpsc::error::TrySendError::Full(())) => Delivery::Coalesced,
            Err(mpsc::error::TrySendError::Closed(())) => Delivery::Disconnected,
        }
    }

    /// Signal that the room is closing. Consumes the client.
    pub fn notify_closed(self) -> Delivery {
        match self.closed.send(()) {
            Ok(()) => Delivery::Delivered,
            Err(()) => Delivery::Disconnected,
        }
    }
}

/// Event observed by the owner of a `ClientEvents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
    /// The room value changed; fetch it with `RoomHandle::get_value`
    ValueChanged,
    /// The room is gone; no further events follow
    RoomClosed,
}

/// Subscriber-side half of a registration.
#[derive(Debug)]
pub struct ClientEvents {
    id: ClientId,
    changed: mpsc::Receiver<()>,
    closed: Option<oneshot::Receiver<()>>,
}

impl ClientEvents {
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Wait for the next event.
    ///
    /// Closure takes priority over a pending change. Returns `RoomClosed`
    /// exactly once (also when the room dropped the client without an
    /// explicit notice), then `None` forever.
    pub async fn next(&mut self) -> Option<ClientEvent> {
        let closed = self.closed.as_mut()?;

        let event = tokio::select! {
            biased;
            _ = closed => ClientEvent::RoomClosed,
            received = self.changed.recv() => match received {
                Some(()) => ClientEvent::ValueChanged,
                None => ClientEvent::RoomClosed,
            },
        };

        if event == ClientEvent::RoomClosed {
            self.closed = None;
        }
        Some(event)
    }
}
