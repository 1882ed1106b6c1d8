//! Per-frame scene update
//!
//! Advances every particle one animation frame: integrate, bounce off the
//! canvas edges, flee the pointer, push out of overlapping neighbors.
//! Particles update sequentially in index order; later particles see the
//! already-updated state of earlier ones within the same frame.

use glam::Vec2;

use super::state::SceneState;

/// Inputs gathered from events since the last frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Latest pointer position (mouse or first touch)
    pub pointer: Option<Vec2>,
    /// New canvas bounds after a resize
    pub resize: Option<Vec2>,
}

/// Advance the scene by one frame
pub fn step(state: &mut SceneState, input: &FrameInput) {
    if let Some(bounds) = input.resize {
        state.bounds = bounds;
    }
    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }
    state.frames += 1;

    let bounds = state.bounds;
    let pointer = state.pointer;
    let pointer_radius = state.config.pointer_radius;
    let flee_speed = state.config.flee_speed;

    for i in 0..state.particles.len() {
        let (head, rest) = state.particles.split_at_mut(i);
        let Some((p, tail)) = rest.split_first_mut() else {
            break;
        };

        p.pos += p.vel;

        // Bounce per axis when the blit box leaves the canvas
        if p.pos.x < 0.0 || p.pos.x + p.size > bounds.x {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y + p.size > bounds.y {
            p.vel.y = -p.vel.y;
        }

        // Pointer repulsion: a hard velocity override away from the pointer.
        // A pointer sitting exactly on the center would divide by zero, so
        // that case keeps the prior velocity.
        let away = p.center() - pointer;
        let dist = away.length();
        if dist < pointer_radius + p.size / 2.0 && dist > f32::EPSILON {
            p.vel = away / dist * flee_speed;
        }

        // Pairwise repulsion: an unnormalized impulse out of every
        // overlapping neighbor. Impulses compound when several overlap.
        // atan2(0, 0) is 0, so coincident particles stay finite.
        for other in head.iter().chain(tail.iter()) {
            let to_other = other.center() - p.center();
            if to_other.length() < (p.size + other.size) / 2.0 {
                let angle = to_other.y.atan2(to_other.x);
                p.vel -= Vec2::new(angle.cos(), angle.sin());
            }
        }
    }
}
