//! Platform layer
//!
//! The two event producers and the channel that merges them:
//! - `clock`: fixed-interval ticks
//! - `input`: edge-triggered arrow keys
//! - `bus`: multi-producer, single-consumer event stream

pub mod bus;
pub mod clock;
pub mod input;

pub use bus::{EventBus, EventSender, EventStream};
pub use clock::Clock;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::{ClockHandle, spawn_clock};
pub use input::{InputSource, Key};
