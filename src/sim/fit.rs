//! Poster fit computation
//!
//! The poster fills the viewport without overflow or scroll while keeping
//! its design aspect ratio. Height-first: take the full viewport height,
//! and fall back to the full width when that would overflow horizontally.
//! Two branches are exact; no iteration is needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{POSTER_BASE_HEIGHT, POSTER_BASE_WIDTH, ROOT_FONT_PX};

/// Fitted poster dimensions and the root font size they imply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosterFit {
    /// Poster box width (px, rounded)
    pub width: f32,
    /// Poster box height (px, rounded)
    pub height: f32,
    /// Root font size scaled with the poster (px, unrounded so rem-sized
    /// text tracks the poster exactly)
    pub font_size: f32,
}

/// Largest poster box with the design aspect ratio that fits the viewport
pub fn fit_viewport(viewport: Vec2) -> PosterFit {
    let aspect = POSTER_BASE_WIDTH / POSTER_BASE_HEIGHT;

    let mut height = viewport.y;
    let mut width = height * aspect;

    if width > viewport.x {
        width = viewport.x;
        height = width / aspect;
    }

    PosterFit {
        width: width.round(),
        height: height.round(),
        font_size: ROOT_FONT_PX * width / POSTER_BASE_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ASPECT: f32 = POSTER_BASE_WIDTH / POSTER_BASE_HEIGHT;

    #[test]
    fn test_narrow_viewport_pins_width() {
        let fit = fit_viewport(Vec2::new(1000.0, 2000.0));
        // Height-first would give width ~1286 > 1000, so the width branch
        // applies: 1000 wide, 1000 / (900/1400) = 1555.6 tall
        assert_eq!(fit.width, 1000.0);
        assert_eq!(fit.height, 1556.0);
        assert_eq!(fit.font_size, ROOT_FONT_PX * 1000.0 / POSTER_BASE_WIDTH);
    }

    #[test]
    fn test_wide_viewport_pins_height() {
        let fit = fit_viewport(Vec2::new(2000.0, 1000.0));
        assert_eq!(fit.height, 1000.0);
        assert_eq!(fit.width, (1000.0 * ASPECT).round());
    }

    #[test]
    fn test_exact_ratio_viewport() {
        let fit = fit_viewport(Vec2::new(900.0, 1400.0));
        assert_eq!(fit.width, 900.0);
        assert_eq!(fit.height, 1400.0);
        assert!((fit.font_size - ROOT_FONT_PX).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_fit_keeps_ratio_and_fits(
            w in 100.0f32..4000.0,
            h in 100.0f32..4000.0,
        ) {
            let fit = fit_viewport(Vec2::new(w, h));

            // Fits the viewport, within rounding
            prop_assert!(fit.width <= w + 0.5);
            prop_assert!(fit.height <= h + 0.5);

            // Keeps the design ratio, within rounding
            prop_assert!((fit.width / fit.height - ASPECT).abs() < 0.02);

            // Maximal: one dimension saturates its viewport extent
            prop_assert!(fit.width >= w - 1.0 || fit.height >= h - 1.0);
        }

        #[test]
        fn prop_font_scales_with_width(w in 100.0f32..4000.0, h in 100.0f32..4000.0) {
            let fit = fit_viewport(Vec2::new(w, h));
            let unrounded_width = fit.font_size / ROOT_FONT_PX * POSTER_BASE_WIDTH;
            prop_assert!((unrounded_width - fit.width).abs() <= 0.5);
        }
    }
}
