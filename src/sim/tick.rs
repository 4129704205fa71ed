//! Per-tick simulation step and input intents
//!
//! `apply_intent` mutates the context immediately when the host delivers an
//! input edge; `tick` advances physics and particles by exactly one frame.
//! Both are total functions: no input can reach an invalid state.

use glam::Vec2;

use super::collision;
use super::particles;
use super::state::{GameMode, GameState, LoopSignal};
use crate::consts::*;

/// Discrete input intents produced by the host's input adapter.
///
/// Left/right movement uses set-velocity-on-key-down / zero-on-key-up edge
/// semantics; the most recent edge wins. There is no queuing: intents are
/// applied atomically between scheduled frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Jump,
    Pause,
    Resume,
    Quit,
    /// Handled by the host's ad capability; a no-op for the simulation
    TriggerAd,
}

/// Apply one input intent to the simulation context.
///
/// Movement and jumping only act while `Playing`, mirroring the mode
/// branches of the key handler; pause/resume/quit defer to the state
/// machine, whose `LoopSignal` is forwarded to the scheduler.
pub fn apply_intent(state: &mut GameState, intent: Intent) -> LoopSignal {
    let playing = state.mode == GameMode::Playing;
    match intent {
        Intent::MoveLeftStart => {
            if playing {
                state.player.vel.x = -PLAYER_SPEED;
            }
            LoopSignal::Unchanged
        }
        Intent::MoveRightStart => {
            if playing {
                state.player.vel.x = PLAYER_SPEED;
            }
            LoopSignal::Unchanged
        }
        Intent::MoveLeftStop | Intent::MoveRightStop => {
            if playing {
                state.player.vel.x = 0.0;
            }
            LoopSignal::Unchanged
        }
        Intent::Jump => {
            if playing && !state.player.airborne {
                state.player.vel.y = JUMP_IMPULSE;
                state.player.airborne = true;
                let feet =
                    state.player.pos + Vec2::new(state.player.size.x / 2.0, state.player.size.y);
                particles::emit(&mut state.particles, &mut state.rng, feet, PARTICLE_COUNT);
            }
            LoopSignal::Unchanged
        }
        Intent::Pause => state.pause(),
        Intent::Resume => state.resume(),
        Intent::Quit => state.quit(),
        Intent::TriggerAd => LoopSignal::Unchanged,
    }
}

/// Advance the simulation by one tick.
///
/// Runs only while `Playing`; the order is load-bearing: vertical
/// integration, horizontal integration, platform landings, floor clamp,
/// side clamp, then the particle pass.
pub fn tick(state: &mut GameState) {
    if state.mode != GameMode::Playing {
        return;
    }
    state.time_ticks += 1;

    state.player.vel.y += GRAVITY;
    state.player.pos.y += state.player.vel.y;
    state.player.pos.x += state.player.vel.x;

    collision::resolve_platform_landings(&mut state.player, &state.platforms);
    collision::clamp_to_floor(&mut state.player, state.height);
    collision::clamp_to_sides(&mut state.player, state.width);

    particles::update(&mut state.particles);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345, 800.0, 600.0);
        state.start();
        state
    }

    #[test]
    fn test_gravity_only_tick() {
        // Free fall with no platform in reach: dy picks up one unit of
        // gravity and y advances by the new velocity.
        let mut state = playing_state();
        state.platforms.clear();
        let before = state.player.pos;

        tick(&mut state);

        assert_eq!(state.player.vel.y, 1.0);
        assert_eq!(state.player.pos.y, before.y + 1.0);
        assert_eq!(state.player.pos.x, before.x);
    }

    #[test]
    fn test_standing_on_ground_is_stable() {
        let mut state = playing_state();
        let spawn = state.player.pos;

        for _ in 0..10 {
            tick(&mut state);
            assert_eq!(state.player.pos, spawn);
            assert_eq!(state.player.vel.y, 0.0);
        }
    }

    #[test]
    fn test_jump_emits_burst_at_feet() {
        let mut state = playing_state();
        let feet = state.player.pos + Vec2::new(25.0, 50.0);

        apply_intent(&mut state, Intent::Jump);

        assert_eq!(state.player.vel.y, JUMP_IMPULSE);
        assert!(state.player.airborne);
        assert_eq!(state.particles.len(), PARTICLE_COUNT);
        assert!(state.particles.iter().all(|p| p.pos == feet));
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::Jump);
        tick(&mut state);
        let count = state.particles.len();

        apply_intent(&mut state, Intent::Jump);
        assert_eq!(state.particles.len(), count);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let mut state = playing_state();
        let spawn = state.player.pos;
        apply_intent(&mut state, Intent::Jump);

        // -20 +1/tick gravity: back on the ground well within a second
        for _ in 0..60 {
            tick(&mut state);
        }

        assert_eq!(state.player.pos.y, spawn.y);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.airborne);
    }

    #[test]
    fn test_movement_edges() {
        let mut state = playing_state();

        apply_intent(&mut state, Intent::MoveRightStart);
        assert_eq!(state.player.vel.x, PLAYER_SPEED);
        let x = state.player.pos.x;
        tick(&mut state);
        assert_eq!(state.player.pos.x, x + PLAYER_SPEED);

        // Most recent edge wins
        apply_intent(&mut state, Intent::MoveLeftStart);
        assert_eq!(state.player.vel.x, -PLAYER_SPEED);

        apply_intent(&mut state, Intent::MoveRightStop);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_no_simulation_outside_playing() {
        let mut state = GameState::new(12345, 800.0, 600.0);
        let before = state.player.pos;

        tick(&mut state);
        assert_eq!(state.player.pos, before);
        assert_eq!(state.time_ticks, 0);

        state.start();
        apply_intent(&mut state, Intent::Jump);
        apply_intent(&mut state, Intent::Pause);
        let particle_pos: Vec<_> = state.particles.iter().map(|p| p.pos).collect();

        tick(&mut state);
        let after: Vec<_> = state.particles.iter().map(|p| p.pos).collect();
        assert_eq!(particle_pos, after);
    }

    #[test]
    fn test_movement_ignored_while_paused() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::Pause);

        apply_intent(&mut state, Intent::MoveRightStart);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_quit_from_paused_resets() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::MoveRightStart);
        for _ in 0..5 {
            tick(&mut state);
        }
        apply_intent(&mut state, Intent::Pause);

        let signal = apply_intent(&mut state, Intent::Quit);

        assert_eq!(signal, LoopSignal::Stop);
        assert_eq!(state.mode, GameMode::Menu);
        assert_eq!(state.player.pos, Vec2::new(50.0, 530.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state();
        let mut b = playing_state();

        for i in 0..120u32 {
            if i % 30 == 0 {
                apply_intent(&mut a, Intent::Jump);
                apply_intent(&mut b, Intent::Jump);
            }
            tick(&mut a);
            tick(&mut b);
        }

        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.particles.len(), b.particles.len());
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // World-bounds invariant over arbitrary input sequences
            #[test]
            fn prop_player_never_leaves_world(actions in proptest::collection::vec(0u8..8, 1..300)) {
                let mut state = GameState::new(99, 800.0, 600.0);
                state.start();

                for action in actions {
                    let intent = match action {
                        0 => Some(Intent::MoveLeftStart),
                        1 => Some(Intent::MoveRightStart),
                        2 => Some(Intent::MoveLeftStop),
                        3 => Some(Intent::MoveRightStop),
                        4 => Some(Intent::Jump),
                        _ => None,
                    };
                    if let Some(intent) = intent {
                        apply_intent(&mut state, intent);
                    }
                    tick(&mut state);

                    prop_assert!(state.player.pos.x >= 0.0);
                    prop_assert!(state.player.pos.x + state.player.size.x <= state.width);
                    prop_assert!(state.player.bottom() <= state.height);
                }
            }
        }
    }
}
