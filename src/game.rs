//! Frame driver
//!
//! Owns the simulation context and its random source, buffers the latest
//! pointer position, and runs exactly one simulation step per display frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SimConfig, TickInput, tick};

/// Number of frame timestamps the FPS meter averages over
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate from frame timestamps (ms)
#[derive(Debug, Clone)]
pub struct FpsMeter {
    frame_times: [Option<f64>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self {
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsMeter {
    /// Record a frame timestamp
    pub fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = Some(time);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot after newest is the oldest once the window has wrapped
        if let Some(oldest_time) = self.frame_times[self.frame_index] {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Game instance holding all state
pub struct Game {
    pub settings: Settings,
    pub state: GameState,
    rng: Pcg32,
    seed: u64,
    /// Latest pointer target, applied at the start of the next frame
    input: TickInput,
    fps: FpsMeter,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut settings = settings;
        if let Err(e) = settings.sim.validate() {
            log::warn!("Invalid simulation config ({}), using defaults", e);
            settings.sim = SimConfig::default();
        }

        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(settings.sim),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            input: TickInput::default(),
            fps: FpsMeter::default(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Buffer a paddle target (surface coordinates). Last write wins.
    pub fn set_pointer(&mut self, paddle_y: f32) {
        self.input.pointer_y = Some(paddle_y);
    }

    /// Run one simulation step and return what happened
    pub fn frame(&mut self, time: f64) -> &[GameEvent] {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, &mut self.rng);
        self.fps.record(time);

        for event in &self.state.events {
            match event {
                GameEvent::Scored { side } => {
                    let (player, opponent) = self.state.scores();
                    log::info!("Point to {}: {} - {}", side.as_str(), player, opponent);
                }
                GameEvent::PaddleHit {
                    side,
                    offset,
                    speed,
                } => {
                    log::debug!(
                        "{} paddle hit at offset {:.2}, speed now {:.1}",
                        side.as_str(),
                        offset,
                        speed
                    );
                }
                GameEvent::WallBounce => log::debug!("Wall bounce"),
            }
        }

        &self.state.events
    }

    /// Start over with a fresh state and random source
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(self.settings.sim);
        self.rng = Pcg32::seed_from_u64(seed);
        self.seed = seed;
        self.input = TickInput::default();
        log::info!("Game restarted with seed: {}", seed);
    }
}
