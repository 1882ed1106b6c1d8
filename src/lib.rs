//! Sparkle Poster - a decorative page in three independent behaviors
//!
//! Core modules:
//! - `sim`: Deterministic scene logic (poster fit, sparkle bursts, particle field)
//! - `config`: Page-authored runtime configuration
//!
//! All DOM and canvas wiring lives in the entry point (`main.rs`); nothing in
//! the library touches the browser.

pub mod config;
pub mod sim;

pub use config::SceneConfig;

/// Page tuning constants
pub mod consts {
    /// Poster design width (px); the fitted poster keeps width:height at
    /// the design ratio
    pub const POSTER_BASE_WIDTH: f32 = 900.0;
    /// Poster design height (px)
    pub const POSTER_BASE_HEIGHT: f32 = 1400.0;
    /// Root font size at design scale (px); scales linearly with the poster
    pub const ROOT_FONT_PX: f32 = 16.0;
    /// Delay before refitting after an orientation change (ms)
    pub const ORIENTATION_SETTLE_MS: i32 = 200;

    /// Sparkles spawned per pointer event
    pub const SPARKLES_PER_EVENT: usize = 2;
    /// Full per-axis sparkle jitter span (px); offsets are uniform in ± half
    pub const SPARKLE_JITTER: f32 = 25.0;
    /// Sparkle lifetime before removal (ms)
    pub const SPARKLE_LIFETIME_MS: i32 = 1000;

    /// Floating particle count, fixed for the page's lifetime
    pub const PARTICLE_COUNT: usize = 25;
    /// Particle blit box edge range (px)
    pub const PARTICLE_MIN_SIZE: f32 = 40.0;
    pub const PARTICLE_MAX_SIZE: f32 = 70.0;
    /// Initial per-axis speed cap (px/frame)
    pub const MAX_SPEED: f32 = 0.8;
    /// Pointer influence radius (px)
    pub const POINTER_RADIUS: f32 = 100.0;
    /// Speed of a particle fleeing the pointer (px/frame)
    pub const FLEE_SPEED: f32 = 2.0;
}
