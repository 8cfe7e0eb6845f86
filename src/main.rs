//! Paturain Racer entry point
//!
//! Web: wires keyboard, buttons and a 2D canvas to the engine.
//! Native: runs a headless autopilot demo and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use paturain_racer::EngineConfig;
    use paturain_racer::audio::{AudioManager, SoundEffect};
    use paturain_racer::renderer::draw_list;
    use paturain_racer::sim::{Direction, Engine, FixedStep, GamePhase, autopilot};

    /// Game instance holding all state
    struct Game {
        engine: Engine,
        clock: FixedStep,
        audio: AudioManager,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
        autopilot: bool,
    }

    impl Game {
        /// Run simulation ticks for this frame and forward events to audio
        fn update(&mut self, dt: f32) {
            if self.autopilot && self.engine.is_playing() {
                let input = autopilot::steer(&self.engine.snapshot());
                self.engine.set_input(input);
            }
            self.clock.advance(&mut self.engine, dt);

            for event in self.engine.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
            self.audio.set_ambience(self.engine.is_playing());
        }

        fn render(&self) {
            for quad in draw_list(&self.engine.snapshot()) {
                self.ctx.set_global_alpha(quad.alpha as f64);
                self.ctx.set_fill_style_str(&quad.color.to_css());
                self.ctx.fill_rect(
                    quad.rect.pos.x as f64,
                    quad.rect.pos.y as f64,
                    quad.rect.size.x as f64,
                    quad.rect.size.y as f64,
                );
            }
            self.ctx.set_global_alpha(1.0);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let run = self.engine.run();

            let set_text = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            };
            set_text("hud-score", &run.score.to_string());
            set_text("hud-bonus", &run.bonus_points.to_string());
            set_text("hud-high", &self.engine.high_score().to_string());

            let show = |id: &str, visible: bool| {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
                }
            };
            let phase = self.engine.phase();
            show("start-btn", phase == GamePhase::Idle);
            show("pause-btn", phase == GamePhase::Playing);
            show("resume-btn", phase == GamePhase::Paused);
            show("game-over", phase == GamePhase::GameOver);

            if phase == GamePhase::GameOver {
                if let Some(summary) = self.engine.last_run() {
                    set_text("final-score", &summary.score.to_string());
                    set_text("final-total", &summary.total().to_string());
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Paturain Racer starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = EngineConfig::load();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Engine initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            engine,
            clock: FixedStep::default(),
            audio: AudioManager::new(),
            ctx,
            last_time: 0.0,
            autopilot: false,
        }));

        setup_keyboard(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);
        log::info!("Paturain Racer running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(dir) = Direction::from_key(&key) {
                    event.prevent_default();
                    g.engine.press(dir);
                    return;
                }
                match key.as_str() {
                    " " | "Escape" => {
                        g.engine.toggle_pause();
                    }
                    "Enter" => {
                        g.audio.resume();
                        g.engine.start();
                    }
                    "m" | "M" => {
                        let muted = g.audio.toggle_muted();
                        log::info!("Muted: {}", muted);
                    }
                    "i" | "I" => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    game.borrow_mut().engine.release(dir);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let bind = |id: &str, action: fn(&mut Game)| {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                return;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut game.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        };

        bind("start-btn", |g| {
            g.audio.resume();
            g.engine.start();
        });
        bind("restart-btn", |g| {
            g.audio.resume();
            g.engine.start();
        });
        bind("pause-btn", |g| {
            g.engine.pause();
        });
        bind("resume-btn", |g| {
            g.engine.resume();
        });
        bind("reset-btn", |g| {
            g.engine.reset();
            g.clock.reset();
        });
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden
                    && game.borrow_mut().engine.pause()
                {
                    log::info!("Auto-paused (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                // Keys released while unfocused never reach us
                g.engine.set_input(Default::default());
                if g.engine.pause() {
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                paturain_racer::consts::SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Demo run length cap (ten minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paturain_racer::consts::SIM_DT;
    use paturain_racer::sim::{Engine, FixedStep, GamePhase, autopilot};
    use paturain_racer::EngineConfig;

    env_logger::init();
    log::info!("Paturain Racer (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    // Usage: paturain-racer [seed] [config.json]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);
    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match EngineConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid config {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut engine = match Engine::new(config, seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let mut clock = FixedStep::default();

    engine.start();
    while engine.phase() == GamePhase::Playing && engine.run().ticks < DEMO_MAX_TICKS {
        let input = autopilot::steer(&engine.snapshot());
        engine.set_input(input);
        clock.advance(&mut engine, SIM_DT);
        for event in engine.drain_events() {
            log::debug!("{:?}", event);
        }
    }

    let run = engine.run();
    println!("\nSeed {}", seed);
    println!("  ticks survived: {}", run.ticks);
    println!("  score:          {}", run.score);
    println!("  bonus points:   {}", run.bonus_points);
    println!("  final speed:    {:.1}", run.game_speed);
    println!("  high score:     {}", engine.high_score());
}
