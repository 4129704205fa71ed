//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{GameMode, GameState, Particle};

/// Append a filled axis-aligned quad as two triangles
pub fn quad(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

/// Particle streak: history entries as shrinking squares, newest largest.
/// The oldest entry scales to zero and is skipped.
pub fn particle_trail(out: &mut Vec<Vertex>, particle: &Particle, color: [f32; 4]) {
    let len = particle.trail.len() as f32;
    for (i, pos) in particle.trail.iter().enumerate() {
        let size = particle.size * (i as f32 / len);
        if size <= 0.0 {
            continue;
        }
        quad(out, *pos, Vec2::splat(size), color);
    }
}

/// Build the frame's triangle list from a read-only state snapshot.
///
/// Menu mode produces an empty frame (the background clear is all that
/// shows); Playing and Paused draw platforms, player and particles.
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if state.mode == GameMode::Menu {
        return vertices;
    }

    for platform in &state.platforms {
        quad(&mut vertices, platform.pos, platform.size, platform.color);
    }

    quad(
        &mut vertices,
        state.player.pos,
        state.player.size,
        colors::PLAYER,
    );

    if settings.particles {
        for particle in &state.particles {
            let [r, g, b, _] = colors::PARTICLE;
            let color = [r, g, b, particle.alpha.max(0.0)];
            if settings.trails {
                particle_trail(&mut vertices, particle, color);
            }
            quad(
                &mut vertices,
                particle.pos,
                Vec2::splat(particle.size),
                color,
            );
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Intent, apply_intent, tick};

    fn playing_state() -> GameState {
        let mut state = GameState::new(11, 800.0, 600.0);
        state.start();
        state
    }

    #[test]
    fn test_menu_renders_nothing() {
        let state = GameState::new(11, 800.0, 600.0);
        let vertices = build_frame(&state, &Settings::default());
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_playing_frame_vertex_count() {
        let state = playing_state();
        let vertices = build_frame(&state, &Settings::default());
        // 4 platforms + player, 6 vertices each, no particles yet
        assert_eq!(vertices.len(), 5 * 6);
    }

    #[test]
    fn test_paused_view_still_renders() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::Pause);
        let vertices = build_frame(&state, &Settings::default());
        assert_eq!(vertices.len(), 5 * 6);
    }

    #[test]
    fn test_particles_respect_settings() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::Jump);
        tick(&mut state);

        let on = build_frame(&state, &Settings::default());
        let off = build_frame(
            &state,
            &Settings {
                particles: false,
                trails: false,
            },
        );

        assert!(on.len() > off.len());
        assert_eq!(off.len(), 5 * 6);
    }

    #[test]
    fn test_trail_squares_skip_zero_size() {
        let mut state = playing_state();
        apply_intent(&mut state, Intent::Jump);
        // Two ticks: each live particle has two history entries, of which
        // the oldest scales to zero size.
        tick(&mut state);
        tick(&mut state);

        let mut vertices = Vec::new();
        let particle = &state.particles[0];
        particle_trail(&mut vertices, particle, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
    }
}
