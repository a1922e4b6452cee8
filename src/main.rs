//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the tick loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use grid_snake::consts::START_DIRECTION;
    use grid_snake::platform::web::{DomRenderer, IntervalTimer};
    use grid_snake::{GameConfig, Session};

    type WebSession = Rc<RefCell<Session<DomRenderer>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::load();
        let seed = config.seed_or(js_sys::Date::now() as u64);

        let renderer = DomRenderer::new(document, config.arena_size);
        let session: WebSession = Rc::new(RefCell::new(Session::new(
            &config,
            seed,
            START_DIRECTION,
            renderer,
        )));
        session.borrow_mut().start();

        setup_keyboard(session.clone());
        start_ticks(session, config.tick_interval_ms);

        log::info!("Grid Snake running!");
    }

    fn setup_keyboard(session: WebSession) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut s = session.borrow_mut();
            if s.on_key(&event.key()).is_none() {
                // Older browsers only report key codes
                s.on_key_code(event.key_code());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_ticks(session: WebSession, interval_ms: u32) {
        let ticking = session.clone();
        let timer = IntervalTimer::start(interval_ms, move || {
            ticking.borrow_mut().on_tick();
        });

        match timer {
            Ok(timer) => session.borrow_mut().attach_timer(Box::new(timer)),
            Err(e) => log::error!("Failed to start tick timer: {:?}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use grid_snake::consts::START_DIRECTION;
    use grid_snake::platform::headless::LogRenderer;
    use grid_snake::{GameConfig, Session};

    env_logger::init();
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_from(config_path.as_deref());

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(grid_snake::consts::DEFAULT_SEED);
    let seed = config.seed_or(now);

    let mut session = Session::new(&config, seed, START_DIRECTION, LogRenderer::new());
    session.start();

    while session.is_running() {
        std::thread::sleep(config.tick_interval());
        session.on_tick();
    }

    log::info!(
        "Finished after {} ticks, final length {}",
        session.state().time_ticks,
        session.state().snake.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
