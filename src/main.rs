//! Frog Crossing entry point
//!
//! Web: wires the SVG canvas, keyboard, interval clock and restart button to a
//! session. Native: runs a headless session with a scripted player.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use frog_crossing::platform::{Clock, EventBus, EventSender, InputSource};
    use frog_crossing::renderer::SvgRenderer;
    use frog_crossing::{ConfigError, GameConfig, Session};

    /// Game instance holding the session and both producers
    struct Game {
        session: Session<SvgRenderer>,
        sender: EventSender,
        clock: Clock,
        input: InputSource,
    }

    impl Game {
        fn new(config: GameConfig, renderer: SvgRenderer) -> Result<Self, ConfigError> {
            let mut session = Session::new(config, renderer)?;
            let bus = EventBus::new();
            let sender = bus.sender();
            session.attach(bus.into_stream());
            Ok(Self {
                session,
                sender,
                clock: Clock::new(),
                input: InputSource::new(),
            })
        }

        fn on_tick(&mut self) {
            if self.sender.send(self.clock.tick()) {
                self.session.pump();
            }
        }

        fn on_key_down(&mut self, code: &str, repeat: bool) {
            if repeat {
                return;
            }
            if let Some(event) = self.input.key_down(code) {
                if self.sender.send(event) {
                    self.session.pump();
                }
            }
        }

        fn on_key_up(&mut self, code: &str) {
            self.input.key_up(code);
        }

        /// Detach from the old bus and start over on a new one
        fn restart(&mut self) -> Result<(), ConfigError> {
            let bus = EventBus::new();
            self.sender = bus.sender();
            self.clock = Clock::new();
            self.input.release_all();
            self.session.restart(bus.into_stream())
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Frog Crossing starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("svgCanvas")
            .ok_or("no #svgCanvas element")?;

        let mut config = GameConfig::load();
        config.seed = js_sys::Date::now() as u64;
        let interval_ms = i32::try_from(config.tick_interval_ms)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", config.seed);

        let renderer = SvgRenderer::new(document.clone(), canvas);
        let game = Game::new(config, renderer).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(game));

        setup_input_handlers(&window, game.clone())?;
        setup_restart_button(&document, game.clone())?;
        setup_clock(&window, game, interval_ms)?;

        log::info!("Frog Crossing running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().on_key_down(&event.code(), event.repeat());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up re-arms the key
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().on_key_up(&event.code());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-up events get lost while unfocused
        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().input.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = game.borrow_mut().restart() {
                    log::error!("Restart failed: {}", e);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_clock(window: &web_sys::Window, game: Rc<RefCell<Game>>, interval_ms: i32) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().on_tick();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::thread::{self, JoinHandle};
    use std::time::Duration;

    use frog_crossing::platform::{EventBus, EventSender, InputSource, spawn_clock};
    use frog_crossing::renderer::LogRenderer;
    use frog_crossing::{ConfigError, GameConfig, Session};

    /// Give up on a run that never ends
    const MAX_TICKS: u64 = 600;
    /// Ticks the scripted player waits between hops
    const HOP_EVERY: u32 = 12;
    /// Straight up the board
    const SCRIPT: [&str; 9] = ["ArrowUp"; 9];

    pub fn run() -> Result<(), ConfigError> {
        let path = std::env::args_os().nth(1).map(PathBuf::from);
        let config = GameConfig::load_from(path.as_deref())?;
        let interval = config.tick_interval();

        let mut session = Session::new(config, LogRenderer::new())?;
        let bus = EventBus::new();
        let clock = spawn_clock(interval, bus.sender());
        let player = spawn_player(bus.sender(), interval * HOP_EVERY);
        session.attach(bus.into_stream());

        let state = session
            .run_until(|s| s.status.is_terminal() || s.elapsed_ticks >= MAX_TICKS)
            .clone();
        session.detach();

        // Detaching fails the clock's next send
        if !clock.is_finished() {
            log::debug!("Waiting for the clock to see the detach");
        }
        let ticks = clock.join();
        if player.join().is_err() {
            log::warn!("Scripted player panicked");
        }

        let folded = session.events_folded();
        let renderer = session.into_renderer();
        log::info!(
            "Clock sent {} ticks; folded {} events into {} frames; {} obstacles spawned, {} retired",
            ticks,
            folded,
            renderer.frames(),
            renderer.spawned(),
            renderer.retired()
        );
        match serde_json::to_string_pretty(&state) {
            Ok(json) => log::debug!("Final state:\n{}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }

        println!(
            "{} after {} ticks, frog at ({:.0}, {:.0})",
            state.status.as_str(),
            state.elapsed_ticks,
            state.frog.pos.x,
            state.frog.pos.y
        );
        Ok(())
    }

    /// Press each scripted key through the edge detector, one per `pause`
    fn spawn_player(sender: EventSender, pause: Duration) -> JoinHandle<()> {
        thread::spawn(move || {
            let mut input = InputSource::new();
            for code in SCRIPT {
                thread::sleep(pause);
                if let Some(event) = input.key_down(code) {
                    if !sender.send(event) {
                        break;
                    }
                }
                input.key_up(code);
            }
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Frog Crossing (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
