//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use canvas_pong::platform::{CanvasRect, pointer_to_paddle_y};
    use canvas_pong::renderer::{Overlay, RenderError, RenderState, scene};
    use canvas_pong::{Game, Settings};

    /// Browser-side app: the frame driver plus everything it draws with
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Buffer a pointer at client y for the next frame
        fn pointer_at(&mut self, client_y: f32) {
            let bounds = self.canvas.get_bounding_client_rect();
            let rect = CanvasRect {
                top: bounds.top() as f32,
                height: bounds.height() as f32,
            };
            let config = &self.game.state.config;
            let y = pointer_to_paddle_y(client_y, rect, config.surface_height, config.paddle_height);
            self.game.set_pointer(y);
        }

        /// Render the current frame
        fn render(&mut self) {
            let overlay = Overlay {
                fps: self.game.fps(),
            };
            let vertices = scene::build(&self.game.state, &self.game.settings, overlay);
            let clear = scene::background(self.game.settings.theme);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, clear) {
                    Ok(_) => {}
                    Err(RenderError::Surface(wgpu::SurfaceError::Lost))
                    | Err(RenderError::Surface(wgpu::SurfaceError::Outdated)) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, seed);

        // Canvas backing store matches the simulation surface
        let (surface_w, surface_h) = (
            game.state.config.surface_width,
            game.state.config.surface_height,
        );
        canvas.set_width(surface_w as u32);
        canvas.set_height(surface_h as u32);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(
            surface,
            &adapter,
            surface_w as u32,
            surface_h as u32,
            (surface_w, surface_h),
        )
        .await
        {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("Renderer unavailable: {}", e);
                None
            }
        };

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_keyboard(app.clone());

        request_animation_frame(app);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().pointer_at(event.client_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move
        for name in ["touchstart", "touchmove"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().pointer_at(touch.client_y() as f32);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let mut a = app.borrow_mut();
            if key == "r" || key == "R" {
                let seed = js_sys::Date::now() as u64;
                a.game.restart(seed);
                return;
            }

            let settings = &mut a.game.settings;
            match key.as_str() {
                "n" | "N" => settings.toggle_net(),
                "f" | "F" => settings.toggle_fps(),
                "t" | "T" => {
                    settings.theme = settings.theme.next();
                    log::info!("Theme: {}", settings.theme.as_str());
                }
                _ => return,
            }
            settings.save();
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step, one render, then wait for the next refresh
    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.game.frame(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::{Game, Settings};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);

    log::info!("Canvas Pong (native, headless) starting...");
    log::info!("Running {} frames", frames);

    let mut game = Game::new(Settings::load(), seed);
    let max_y = game.state.config.paddle_max_y();

    // Scripted pointer: sweep the paddle up and down, two pixels per frame
    for frame in 0..frames {
        let phase = (frame * 2) as f32 % (2.0 * max_y);
        let y = if phase < max_y { phase } else { 2.0 * max_y - phase };
        game.set_pointer(y);
        // Lockstep at a nominal 60 Hz
        game.frame(frame as f64 * 1000.0 / 60.0);
    }

    let (player, opponent) = game.state.scores();
    println!("Final score after {frames} frames (seed {seed}): {player} - {opponent}");
}
