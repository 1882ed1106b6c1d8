//! Scene state and core types
//!
//! Everything the frame loop mutates lives here, behind a seeded RNG so
//! runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SceneConfig;

/// A floating image sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Top-left corner of the blit box
    pub pos: Vec2,
    /// Velocity (px/frame)
    pub vel: Vec2,
    /// Blit box edge length (the box is square)
    pub size: f32,
    /// Index into the loaded image pool
    pub image: usize,
}

impl Particle {
    /// Center of the blit box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete scene state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Scene configuration
    pub config: SceneConfig,
    /// Canvas bounds (px)
    pub bounds: Vec2,
    /// Shared pointer position, last-write-wins
    pub pointer: Vec2,
    /// Floating particles; count is fixed once populated
    pub particles: Vec<Particle>,
    /// Frame counter
    pub frames: u64,
}

impl SceneState {
    /// Create an empty scene; `populate` spawns the particles once the
    /// image pool is known
    pub fn new(config: SceneConfig, bounds: Vec2, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            config,
            bounds,
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            frames: 0,
        }
    }

    /// Spawn the configured number of particles, each with a random image,
    /// size, position and velocity. Called once; `image_count` must be
    /// non-zero.
    pub fn populate(&mut self, image_count: usize) {
        let mut rng = self.rng_state.to_rng();
        let config = &self.config;
        let bounds = self.bounds;

        self.particles = (0..config.particle_count)
            .map(|_| {
                let size = config.particle_min_size
                    + rng.random::<f32>() * (config.particle_max_size - config.particle_min_size);
                Particle {
                    pos: Vec2::new(
                        rng.random::<f32>() * bounds.x,
                        rng.random::<f32>() * bounds.y,
                    ),
                    vel: Vec2::new(
                        (rng.random::<f32>() - 0.5) * config.max_speed,
                        (rng.random::<f32>() - 0.5) * config.max_speed,
                    ),
                    size,
                    image: rng.random_range(0..image_count),
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> SceneState {
        SceneState::new(SceneConfig::default(), Vec2::new(1280.0, 720.0), 42)
    }

    #[test]
    fn test_populate_counts_and_ranges() {
        let mut state = scene();
        state.populate(4);

        assert_eq!(state.particles.len(), state.config.particle_count);
        for p in &state.particles {
            assert!(p.size >= state.config.particle_min_size);
            assert!(p.size < state.config.particle_max_size);
            assert!(p.image < 4);
            assert!(p.pos.x >= 0.0 && p.pos.x < state.bounds.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < state.bounds.y);
            assert!(p.vel.x.abs() <= state.config.max_speed / 2.0);
            assert!(p.vel.y.abs() <= state.config.max_speed / 2.0);
        }
    }

    #[test]
    fn test_populate_is_deterministic() {
        let mut a = scene();
        let mut b = scene();
        a.populate(4);
        b.populate(4);

        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.size, pb.size);
            assert_eq!(pa.image, pb.image);
        }
    }

    #[test]
    fn test_center_is_box_midpoint() {
        let p = Particle {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::ZERO,
            size: 40.0,
            image: 0,
        };
        assert_eq!(p.center(), Vec2::new(30.0, 40.0));
    }
}
