//! Space Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use space_shooter::renderer::{CanvasRenderer, HudText, Starfield, build_frame};
    use space_shooter::sim::{GamePhase, Snapshot};
    use space_shooter::{FrameDriver, Tuning};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        renderer: CanvasRenderer,
        starfield: Starfield,
        last_hud: Option<HudText>,
    }

    impl Game {
        /// Update HUD elements in DOM
        fn update_hud(&mut self, snapshot: &Snapshot) {
            let text = HudText::from_snapshot(&snapshot.hud);
            if self.last_hud.as_ref() == Some(&text) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for (selector, value) in [
                ("#hud-health .hud-value", &text.health),
                ("#hud-shield .hud-value", &text.shield),
                ("#hud-score .hud-value", &text.score),
            ] {
                if let Some(el) = document.query_selector(selector).ok().flatten() {
                    el.set_text_content(Some(value.as_str()));
                }
            }
            self.last_hud = Some(text);
        }

        fn frame(&mut self, time: f64) {
            let snapshot = self.driver.frame(time);
            let frame = build_frame(&snapshot, &self.starfield);
            self.renderer.draw(&frame, snapshot.field.x, snapshot.field.y);
            self.update_hud(&snapshot);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Space Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        canvas.set_width(tuning.field.width as u32);
        canvas.set_height(tuning.field.height as u32);

        let renderer = CanvasRenderer::new(canvas).expect("no 2d context");
        let seed = js_sys::Date::now() as u64;
        let starfield = Starfield::new(
            seed,
            glam::Vec2::new(tuning.field.width, tuning.field.height),
        );

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(tuning, seed),
            renderer,
            starfield,
            last_hud: None,
        }));

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Space Shooter running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.driver.input_mut().key_down(&event.key(), event.repeat()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().driver.input_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Pause when the window loses focus; keyups won't arrive while away
    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            g.driver.input_mut().release_all();
            if g.driver.state().phase == GamePhase::Playing {
                g.driver
                    .input_mut()
                    .trigger(space_shooter::platform::Trigger::TogglePause);
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_shooter::sim::GamePhase;
    use space_shooter::{FrameDriver, Tuning};

    env_logger::init();
    log::info!("Space Shooter (native) starting...");
    log::info!("Native mode runs headless in demo mode - build for wasm32 to play");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut driver = FrameDriver::new(tuning, seed);
    driver.set_demo(true);

    let frame_ms = 1000.0 / 60.0;
    let mut hud = driver.state().hud();
    for i in 0..frames {
        hud = driver.frame(i as f64 * frame_ms).hud;
        if hud.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "score {} | health {}% | shield {}% | {} kills | {:?} after {} ticks",
        hud.score,
        hud.health,
        hud.shield,
        driver.kills(),
        hud.phase,
        driver.state().time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Read a tuning file, falling back to defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> space_shooter::Tuning {
    use space_shooter::Tuning;

    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}
