//! Game state and core simulation types
//!
//! The simulation context (`GameState`) owns every mutable entity and is
//! passed explicitly to each operation; there are no hidden globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particles::Particle;
use crate::consts::*;

/// Current mode of the game-state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Main menu, nothing simulates or renders
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen view with the pause panel shown
    Paused,
}

/// Run-loop signal emitted by a mode transition.
///
/// `Start` asks the host to kick off the animation-frame chain (idempotent
/// if one is already running), `Stop` lets it wind down. The scheduler
/// consumes these instead of each tick re-deciding at its tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Start,
    Stop,
    Unchanged,
}

/// The player-controlled rectangle
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner, pixels, y grows downward
    pub pos: Vec2,
    pub size: Vec2,
    /// dx is set directly by input edges; dy integrates gravity
    pub vel: Vec2,
    /// True between a jump and the next landing
    pub airborne: bool,
}

impl Player {
    pub fn new(world_height: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, spawn_y(world_height)),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            airborne: false,
        }
    }

    /// Back to the spawn point with zero velocity (quit-to-menu)
    pub fn reset(&mut self, world_height: f32) {
        self.pos = Vec2::new(PLAYER_START_X, spawn_y(world_height));
        self.vel = Vec2::ZERO;
        self.airborne = false;
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Spawn height puts the player's feet exactly on the ground platform
fn spawn_y(world_height: f32) -> f32 {
    world_height - GROUND_THICKNESS - PLAYER_HEIGHT
}

/// A static axis-aligned platform. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    /// Cosmetic tag consumed by the renderer
    pub color: [f32; 4],
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Platform color tag (everything is the same dirt brown)
pub const PLATFORM_COLOR: [f32; 4] = [0.55, 0.33, 0.14, 1.0];

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// World bounds in pixels (the canvas size at startup)
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducible particle bursts
    pub seed: u64,
    pub mode: GameMode,
    pub player: Player,
    /// Fixed set built at construction; never mutated afterwards
    pub platforms: Vec<Platform>,
    /// Owned exclusively by the particle subsystem
    pub particles: Vec<Particle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game in `Menu` mode with the default platform layout
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            seed,
            mode: GameMode::Menu,
            player: Player::new(height),
            platforms: default_platforms(width, height),
            particles: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Menu -> Playing. The host shows the canvas and starts the frame chain.
    pub fn start(&mut self) -> LoopSignal {
        match self.mode {
            GameMode::Menu => {
                self.mode = GameMode::Playing;
                LoopSignal::Start
            }
            _ => LoopSignal::Unchanged,
        }
    }

    /// Playing -> Paused. The view freezes; the pause panel appears.
    pub fn pause(&mut self) -> LoopSignal {
        match self.mode {
            GameMode::Playing => {
                self.mode = GameMode::Paused;
                LoopSignal::Unchanged
            }
            _ => LoopSignal::Unchanged,
        }
    }

    /// Paused -> Playing. `Start` is emitted so a host that stopped the
    /// chain on pause can restart it; a still-running chain ignores it.
    pub fn resume(&mut self) -> LoopSignal {
        match self.mode {
            GameMode::Paused => {
                self.mode = GameMode::Playing;
                LoopSignal::Start
            }
            _ => LoopSignal::Unchanged,
        }
    }

    /// Playing/Paused -> Menu. Resets the player; live particles are kept
    /// (they stop updating outside Playing) exactly like the platforms.
    pub fn quit(&mut self) -> LoopSignal {
        match self.mode {
            GameMode::Playing | GameMode::Paused => {
                self.mode = GameMode::Menu;
                self.player.reset(self.height);
                LoopSignal::Stop
            }
            GameMode::Menu => LoopSignal::Unchanged,
        }
    }
}

/// One ground platform spanning the world plus three floating ledges
fn default_platforms(width: f32, height: f32) -> Vec<Platform> {
    vec![
        Platform::new(
            0.0,
            height - GROUND_THICKNESS,
            width,
            GROUND_THICKNESS,
            PLATFORM_COLOR,
        ),
        Platform::new(
            200.0,
            height - 100.0,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
            PLATFORM_COLOR,
        ),
        Platform::new(
            400.0,
            height - 150.0,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
            PLATFORM_COLOR,
        ),
        Platform::new(
            600.0,
            height - 200.0,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
            PLATFORM_COLOR,
        ),
    ]
}
