//! Game session
//!
//! The single subscriber of the event bus. It owns the current state, folds
//! every event through the reducer in arrival order and hands each new state
//! to the renderer. Detaching drops the consumer end of the bus, which stops
//! the producers; restarting builds a fresh initial state and re-attaches.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::EventStream;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, apply};

pub struct Session<R: Renderer> {
    config: GameConfig,
    state: GameState,
    renderer: R,
    stream: Option<EventStream>,
    /// Events folded since the last (re)start
    folded: u64,
}

impl<R: Renderer> Session<R> {
    /// Validate the config, build the initial state and render it once
    pub fn new(config: GameConfig, mut renderer: R) -> Result<Self, ConfigError> {
        let state = GameState::new(&config)?;
        renderer.render(&state);
        log::info!("Session ready (seed {})", config.seed);

        Ok(Self {
            config,
            state,
            renderer,
            stream: None,
            folded: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn events_folded(&self) -> u64 {
        self.folded
    }

    /// Subscribe to a merged event stream, replacing any previous one
    pub fn attach(&mut self, stream: EventStream) {
        if self.stream.replace(stream).is_some() {
            log::debug!("Replaced attached event stream");
        }
    }

    /// Unsubscribe. Producers see their next send fail and stop.
    pub fn detach(&mut self) {
        if self.stream.take().is_some() {
            log::info!(
                "Detached at tick {} ({})",
                self.state.elapsed_ticks,
                self.state.status.as_str()
            );
        }
    }

    pub fn is_attached(&self) -> bool {
        self.stream.is_some()
    }

    /// Fold one event and render the result
    pub fn handle(&mut self, event: GameEvent) {
        apply(&mut self.state, &event);
        self.folded += 1;
        self.renderer.render(&self.state);
    }

    /// Fold everything already queued on the attached stream
    pub fn pump(&mut self) -> usize {
        let Some(stream) = self.stream.take() else {
            return 0;
        };
        let mut count = 0;
        for event in stream.drain() {
            self.handle(event);
            count += 1;
        }
        self.stream = Some(stream);
        count
    }

    /// Block on the attached stream, folding events until `done` returns
    /// true or every producer has gone away. A stalled producer simply
    /// leaves the session waiting at its last state.
    pub fn run_until(&mut self, mut done: impl FnMut(&GameState) -> bool) -> &GameState {
        if let Some(stream) = self.stream.take() {
            while !done(&self.state) {
                match stream.recv() {
                    Some(event) => self.handle(event),
                    None => {
                        log::warn!(
                            "Event stream closed at tick {}",
                            self.state.elapsed_ticks
                        );
                        break;
                    }
                }
            }
            self.stream = Some(stream);
        }
        &self.state
    }

    /// Throw the current run away and start over on `stream`
    pub fn restart(&mut self, stream: EventStream) -> Result<(), ConfigError> {
        self.detach();
        self.state = GameState::new(&self.config)?;
        self.folded = 0;
        self.renderer.reset();
        self.renderer.render(&self.state);
        self.attach(stream);
        log::info!("Session restarted");
        Ok(())
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::{EventBus, InputSource};
    use crate::renderer::LogRenderer;
    use crate::sim::{GameStatus, fold};

    #[test]
    fn test_renders_initial_and_every_event() {
        let mut seen = Vec::new();
        {
            let mut session =
                Session::new(GameConfig::default(), |s: &GameState| seen.push(s.elapsed_ticks))
                    .unwrap();
            session.handle(GameEvent::Tick(0));
            session.handle(GameEvent::Move { dx: 60.0, dy: 0.0 });
            session.handle(GameEvent::Tick(1));
            assert_eq!(session.events_folded(), 3);
        }
        assert_eq!(seen, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_pump_matches_pure_fold() {
        let bus = EventBus::new();
        let clock = bus.sender();
        let keys = bus.sender();
        let mut input = InputSource::new();

        let mut session = Session::new(GameConfig::default(), LogRenderer::new()).unwrap();
        session.attach(bus.into_stream());

        let mut sent = Vec::new();
        for n in 0..20 {
            let tick = GameEvent::Tick(n);
            clock.send(tick);
            sent.push(tick);
            if n % 5 == 0 {
                if let Some(hop) = input.key_down("ArrowLeft") {
                    keys.send(hop);
                    sent.push(hop);
                }
                input.key_up("ArrowLeft");
            }
        }

        assert_eq!(session.pump(), sent.len());
        let expected = fold(GameState::new(&GameConfig::default()).unwrap(), &sent);
        assert_eq!(session.state(), &expected);
        assert_eq!(session.state().frog.pos.x, FROG_START_X - 4.0 * HOP_DISTANCE);
    }

    #[test]
    fn test_run_stops_at_last_state_when_stream_closes() {
        let bus = EventBus::new();
        let clock = bus.sender();
        let mut session = Session::new(GameConfig::default(), LogRenderer::new()).unwrap();
        session.attach(bus.into_stream());

        for n in 0..10 {
            clock.send(GameEvent::Tick(n));
        }
        drop(clock);

        let state = session.run_until(|_| false);
        assert_eq!(state.elapsed_ticks, 10);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(session.is_attached());
    }

    #[test]
    fn test_run_until_terminal() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut session = Session::new(GameConfig::default(), LogRenderer::new()).unwrap();
        session.attach(bus.into_stream());

        for _ in 0..5 {
            sender.send(GameEvent::Move { dx: 0.0, dy: -HOP_DISTANCE });
        }
        for n in 0..10 {
            sender.send(GameEvent::Tick(n));
        }

        let state = session.run_until(|s| s.status.is_terminal());
        assert_eq!(state.status, GameStatus::Drowned);
        // Stopped right at the drowning tick, later ticks still queued
        assert_eq!(state.elapsed_ticks, 1);
        assert_eq!(session.renderer().last_status(), Some(GameStatus::Drowned));
    }

    #[test]
    fn test_detach_fails_producers() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut session = Session::new(GameConfig::default(), LogRenderer::new()).unwrap();
        session.attach(bus.into_stream());

        assert!(sender.send(GameEvent::Tick(0)));
        session.detach();
        assert!(!session.is_attached());
        assert!(!sender.send(GameEvent::Tick(1)));
        assert_eq!(session.pump(), 0);
    }

    #[test]
    fn test_restart_builds_fresh_state() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut session = Session::new(GameConfig::default(), LogRenderer::new()).unwrap();
        session.attach(bus.into_stream());
        for n in 0..50 {
            sender.send(GameEvent::Tick(n));
        }
        session.pump();
        assert_eq!(session.state().elapsed_ticks, 50);

        let bus = EventBus::new();
        let sender2 = bus.sender();
        session.restart(bus.into_stream()).unwrap();
        assert_eq!(session.state().elapsed_ticks, 0);
        assert_eq!(session.state().obstacles().count(), 0);
        assert_eq!(session.events_folded(), 0);
        // The old bus is detached, the new one is live
        assert!(!sender.send(GameEvent::Tick(50)));
        assert!(sender2.send(GameEvent::Tick(0)));
        assert_eq!(session.pump(), 1);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.lanes.clear();
        assert!(Session::new(config, LogRenderer::new()).is_err());
    }
}
