//! Event bus
//!
//! Clock and keyboard both push into one channel; a single consumer reads
//! events back in arrival order. Dropping the consumer detaches it: every
//! later send fails and producers wind down on their own.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::sim::GameEvent;

/// Owner of a fresh channel. Hand out producers with [`EventBus::sender`],
/// then keep the consumer end with [`EventBus::into_stream`].
pub struct EventBus {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A new producer handle
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Keep only the consumer end. Once every producer handed out so far is
    /// dropped, the stream reports disconnection.
    pub fn into_stream(self) -> EventStream {
        EventStream { rx: self.rx }
    }
}

/// Producer half, cheap to clone
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<GameEvent>,
}

impl EventSender {
    /// Queue an event. Returns false once the consumer has detached.
    pub fn send(&self, event: GameEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer half
pub struct EventStream {
    rx: Receiver<GameEvent>,
}

impl EventStream {
    /// Wait for the next event. `None` means every producer is gone.
    pub fn recv(&self) -> Option<GameEvent> {
        self.rx.recv().ok()
    }

    /// Everything queued right now, in arrival order
    pub fn drain(&self) -> impl Iterator<Item = GameEvent> + '_ {
        self.rx.try_iter()
    }
}
