//! Simulation clock
//!
//! Ticks are numbered from 0 for every attachment. The interval is fixed:
//! there is no catch-up or jitter compensation, each tick is one step of
//! motion no matter how late it arrives.

use crate::sim::GameEvent;

/// Tick counter shared by the native thread clock and the web interval timer
#[derive(Debug, Default)]
pub struct Clock {
    next: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Produce the next tick event
    pub fn tick(&mut self) -> GameEvent {
        let n = self.next;
        self.next += 1;
        GameEvent::Tick(n)
    }

    pub fn ticks_emitted(&self) -> u64 {
        self.next
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    use super::Clock;
    use crate::platform::EventSender;

    /// Running clock thread. Dropping the handle stops it after the current
    /// sleep; so does detaching the consumer from the bus.
    pub struct ClockHandle {
        stop: Arc<AtomicBool>,
        thread: Option<JoinHandle<u64>>,
    }

    impl ClockHandle {
        /// Wait for the thread to end on its own, which happens once the
        /// consumer detaches and a send fails
        pub fn join(mut self) -> u64 {
            self.thread
                .take()
                .and_then(|t| t.join().ok())
                .unwrap_or_default()
        }

        pub fn is_finished(&self) -> bool {
            self.thread.as_ref().is_none_or(|t| t.is_finished())
        }
    }

    impl Drop for ClockHandle {
        fn drop(&mut self) {
            self.stop.store(true, Ordering::Relaxed);
        }
    }

    /// Start a thread sending one tick per `interval` into `sender`
    pub fn spawn_clock(interval: Duration, sender: EventSender) -> ClockHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        let thread = thread::spawn(move || {
            let mut clock = Clock::new();
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                if !sender.send(clock.tick()) {
                    log::debug!("Clock detached after {} ticks", clock.ticks_emitted());
                    break;
                }
            }
            clock.ticks_emitted()
        });

        ClockHandle {
            stop,
            thread: Some(thread),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{ClockHandle, spawn_clock};

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::platform::EventBus;

    #[test]
    fn test_counter_is_monotonic() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(), GameEvent::Tick(0));
        assert_eq!(clock.tick(), GameEvent::Tick(1));
        assert_eq!(clock.tick(), GameEvent::Tick(2));
        assert_eq!(clock.ticks_emitted(), 3);
    }

    #[test]
    fn test_thread_clock_emits_in_order() {
        let bus = EventBus::new();
        let handle = spawn_clock(Duration::from_millis(1), bus.sender());
        let stream = bus.into_stream();

        let first: Vec<_> = (0..5).filter_map(|_| stream.recv()).collect();
        assert_eq!(first, (0..5).map(GameEvent::Tick).collect::<Vec<_>>());

        drop(stream);
        assert!(handle.join() >= 5);
    }

    #[test]
    fn test_thread_clock_stops_when_detached() {
        let bus = EventBus::new();
        let handle = spawn_clock(Duration::from_millis(1), bus.sender());
        let stream = bus.into_stream();
        assert!(stream.recv().is_some());

        drop(stream);
        let deadline = Instant::now() + Duration::from_secs(5);
        while !handle.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(handle.is_finished());
        assert!(handle.join() >= 1);
    }
}
