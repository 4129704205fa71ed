//! Block Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use block_hop::ads::sdk::SdkAds;
    use block_hop::ads::{self, AdProvider, NoopAds};
    use block_hop::renderer::{RenderState, build_frame};
    use block_hop::scheduler::FrameScheduler;
    use block_hop::settings::Settings;
    use block_hop::sim::{GameMode, GameState, Intent, apply_intent};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        scheduler: FrameScheduler,
        render_state: Option<RenderState>,
        settings: Settings,
        ads: Rc<dyn AdProvider>,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, ads: Rc<dyn AdProvider>) -> Self {
            Self {
                state: GameState::new(seed, width, height),
                scheduler: FrameScheduler::new(),
                render_state: None,
                settings: Settings::load(),
                ads,
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_frame(&self.state, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Sync the menu panels with the current mode
        fn update_panels(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            set_visible(&document, "mainMenu", self.state.mode == GameMode::Menu);
            set_visible(&document, "pauseMenu", self.state.mode == GameMode::Paused);
        }

        /// Fire-and-forget midgame ad; events stay advisory (logged only)
        fn request_ad(&self) {
            self.ads.request_midgame(Box::new(ads::log_ad_event));
        }
    }

    fn set_visible(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    /// Apply an input intent and feed the resulting signal to the scheduler,
    /// kicking off a new animation-frame chain when one was started.
    fn dispatch(game: &Rc<RefCell<Game>>, intent: Intent) {
        let kicked = {
            let mut g = game.borrow_mut();
            if intent == Intent::TriggerAd {
                g.request_ad();
                false
            } else {
                let signal = apply_intent(&mut g.state, intent);
                let kicked = g.scheduler.handle(signal);
                g.update_panels();
                kicked
            }
        };
        if kicked {
            request_animation_frame(game.clone());
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Block Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to the viewport; the world bounds come from it
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Ad capability: the page's SDK when present, a no-op otherwise
        let ads: Rc<dyn AdProvider> = match SdkAds::detect() {
            Some(sdk) => {
                sdk.init();
                Rc::new(sdk) as Rc<dyn AdProvider>
            }
            None => Rc::new(NoopAds),
        };

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            width as f32,
            height as f32,
            ads,
        )));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_keyboard(game.clone());

        // Set up menu buttons
        setup_menu_buttons(game.clone());

        // Set up auto-pause on visibility change
        setup_auto_pause(game.clone());

        // Initial state: main menu shown, pause panel hidden, no frame chain
        game.borrow().update_panels();

        log::info!("Block Hop running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key-down edges
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mode = game.borrow().state.mode;
                let intent = match event.code().as_str() {
                    "Space" => Some(Intent::Jump),
                    "ArrowLeft" => Some(Intent::MoveLeftStart),
                    "ArrowRight" => Some(Intent::MoveRightStart),
                    "Escape" => match mode {
                        GameMode::Playing => Some(Intent::Pause),
                        GameMode::Paused => Some(Intent::Resume),
                        GameMode::Menu => None,
                    },
                    "KeyL" if mode == GameMode::Playing => Some(Intent::TriggerAd),
                    _ => None,
                };
                if let Some(intent) = intent {
                    dispatch(&game, intent);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up edges (movement only)
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let intent = match event.code().as_str() {
                    "ArrowLeft" => Some(Intent::MoveLeftStop),
                    "ArrowRight" => Some(Intent::MoveRightStop),
                    _ => None,
                };
                if let Some(intent) = intent {
                    dispatch(&game, intent);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Start button
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let kicked = {
                    let mut g = game.borrow_mut();
                    let signal = g.state.start();
                    let kicked = g.scheduler.handle(signal);
                    g.update_panels();
                    kicked
                };
                if kicked {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resume button
        if let Some(btn) = document.get_element_by_id("resumeButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, Intent::Resume);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Quit button
        if let Some(btn) = document.get_element_by_id("quitButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, Intent::Quit);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let playing = game.borrow().state.mode == GameMode::Playing;
                if playing {
                    dispatch(&game, Intent::Pause);
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let reschedule = {
            let mut borrow = game.borrow_mut();
            let g = &mut *borrow;
            let reschedule = g.scheduler.frame(&mut g.state);
            g.render();
            g.update_panels();
            reschedule
        };

        if reschedule {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Hop (native) starting...");
    log::info!("The playable build is the web one - run with `trunk serve`");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation for a few seconds without a window: start, move
/// right, jump, pause, resume, quit. Exercises the same code paths the web
/// build runs per animation frame.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use block_hop::FrameScheduler;
    use block_hop::ads::{AdProvider, NoopAds, log_ad_event};
    use block_hop::sim::{GameState, Intent, apply_intent};

    let mut state = GameState::new(0xB10C, 800.0, 600.0);
    let mut scheduler = FrameScheduler::new();
    scheduler.handle(state.start());

    apply_intent(&mut state, Intent::MoveRightStart);
    for frame in 0..240u32 {
        match frame {
            30 => {
                apply_intent(&mut state, Intent::Jump);
            }
            90 => {
                apply_intent(&mut state, Intent::MoveRightStop);
            }
            120 => {
                scheduler.handle(apply_intent(&mut state, Intent::Pause));
            }
            150 => {
                scheduler.handle(apply_intent(&mut state, Intent::Resume));
            }
            _ => {}
        }
        if !scheduler.frame(&mut state) {
            break;
        }
    }

    log::info!(
        "player at ({:.0}, {:.0}) after {} ticks, {} live particles",
        state.player.pos.x,
        state.player.pos.y,
        state.time_ticks,
        state.particles.len()
    );

    // The ad capability degrades to a logged notice without an SDK
    NoopAds.request_midgame(Box::new(log_ad_event));

    scheduler.handle(apply_intent(&mut state, Intent::Quit));
    log::info!("quit to menu, frame chain running: {}", scheduler.running());
}
