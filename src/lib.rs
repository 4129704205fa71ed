//! Block Hop - a keyboard platformer for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, particles, game mode)
//! - `scheduler`: Frame scheduler owning the run-loop lifecycle
//! - `renderer`: WebGPU rendering pipeline
//! - `ads`: Optional advertisement capability
//! - `settings`: User preferences

pub mod ads;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use scheduler::FrameScheduler;
pub use settings::Settings;

/// Game configuration constants
///
/// The simulation advances one tick per display refresh, so all rates are
/// per-tick pixel units rather than per-second.
pub mod consts {
    /// Player square size (pixels)
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Player spawn x; spawn y is world_height - 70 (standing on the ground)
    pub const PLAYER_START_X: f32 = 50.0;
    /// Horizontal speed while a move key is held (pixels/tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Downward acceleration applied to the player every tick
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity set on jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -20.0;

    /// Ground platform thickness
    pub const GROUND_THICKNESS: f32 = 20.0;
    /// Floating platform size
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Particles emitted per jump burst
    pub const PARTICLE_COUNT: usize = 20;
    /// Per-axis particle velocity range is +/- half this value
    pub const PARTICLE_SPEED: f32 = 5.0;
    /// Particle quad size (pixels)
    pub const PARTICLE_SIZE: f32 = 3.0;
    /// Particle-local gravity, much weaker than the player's
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    /// Particle lifetime is drawn uniformly from [MIN, MAX) frames
    pub const PARTICLE_LIFE_MIN: f32 = 20.0;
    pub const PARTICLE_LIFE_MAX: f32 = 70.0;
    /// Maximum trail-history entries per particle
    pub const TRAIL_LENGTH: usize = 5;
}
