//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display refresh, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use particles::Particle;
pub use state::{GameMode, GameState, LoopSignal, Platform, Player};
pub use tick::{Intent, apply_intent, tick};
