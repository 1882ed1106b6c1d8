//! Page-authored runtime configuration
//!
//! Defaults mirror `consts`; a page can override any subset through an
//! inline JSON block. Nothing is persisted anywhere.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of floating particles
    pub particle_count: usize,
    /// Smallest particle blit box edge (px)
    pub particle_min_size: f32,
    /// Largest particle blit box edge (px)
    pub particle_max_size: f32,
    /// Initial per-axis speed cap (px/frame)
    pub max_speed: f32,
    /// Pointer influence radius (px)
    pub pointer_radius: f32,
    /// Flee speed under pointer influence (px/frame)
    pub flee_speed: f32,
    /// Sparkles per pointer event
    pub sparkle_count: usize,
    /// Full per-axis sparkle jitter span (px)
    pub sparkle_jitter: f32,
    /// Sparkle lifetime (ms)
    pub sparkle_lifetime_ms: i32,
    /// Refit delay after an orientation change (ms)
    pub orientation_settle_ms: i32,
    /// Pinned RNG seed; fresh per page load when absent
    pub seed: Option<u64>,
    /// Image pool for the particle field
    pub image_sources: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_max_size: PARTICLE_MAX_SIZE,
            max_speed: MAX_SPEED,
            pointer_radius: POINTER_RADIUS,
            flee_speed: FLEE_SPEED,
            sparkle_count: SPARKLES_PER_EVENT,
            sparkle_jitter: SPARKLE_JITTER,
            sparkle_lifetime_ms: SPARKLE_LIFETIME_MS,
            orientation_settle_ms: ORIENTATION_SETTLE_MS,
            seed: None,
            image_sources: vec![
                "assets/star-gold.png".to_string(),
                "assets/star-rose.png".to_string(),
                "assets/star-mint.png".to_string(),
                "assets/portrait.png".to_string(),
            ],
        }
    }
}

impl SceneConfig {
    /// DOM id of the optional inline JSON config block
    #[allow(dead_code)]
    const CONFIG_ELEMENT_ID: &'static str = "scene-config";

    /// Load config from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(text) = text {
            match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded scene config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed scene config: {}", e),
            }
        }

        log::info!("Using default scene config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = SceneConfig::default();
        assert_eq!(config.particle_count, PARTICLE_COUNT);
        assert_eq!(config.max_speed, MAX_SPEED);
        assert_eq!(config.sparkle_count, SPARKLES_PER_EVENT);
        assert_eq!(config.image_sources.len(), 4);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{"particle_count": 40, "seed": 7}"#).unwrap();
        assert_eq!(config.particle_count, 40);
        assert_eq!(config.seed, Some(7));
        // Untouched fields fall back to defaults
        assert_eq!(config.pointer_radius, POINTER_RADIUS);
        assert_eq!(config.sparkle_lifetime_ms, SPARKLE_LIFETIME_MS);
    }

    #[test]
    fn test_roundtrip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.particle_count, config.particle_count);
        assert_eq!(back.image_sources, config.image_sources);
    }
}
