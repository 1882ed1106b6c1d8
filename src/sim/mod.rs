//! Deterministic scene module
//!
//! All per-frame logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by particle index)
//! - No rendering or platform dependencies

pub mod fit;
pub mod sparkle;
pub mod state;
pub mod step;

pub use fit::{PosterFit, fit_viewport};
pub use sparkle::{SparkleSpec, sparkle_burst};
pub use state::{Particle, RngState, SceneState};
pub use step::{FrameInput, step};
