//! Separable per-pixel functions of the wave gradient.
//!
//! A pixel's color is the zone color at its wave-shifted, clamped horizontal position, darkened
//! by its row's vertical factor. Each stage is exposed on its own so it can be checked in
//! isolation.

use crate::foundation::core::Rgb8;
use crate::foundation::math::{lerp_channel, scale_channel};
use crate::synth::config::GradientConfig;
use std::f64::consts::TAU;

/// Horizontal band a normalized position falls into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zone {
    /// Light-to-dark transition; `t` is the interpolation parameter.
    Left {
        /// Progress through the band in `[0, 1]`.
        t: f64,
    },
    /// Flat dark band.
    Dark,
    /// Dark-to-light transition; `t` is the interpolation parameter.
    Right {
        /// Progress through the band in `[0, 1]`.
        t: f64,
    },
}

/// Horizontal displacement in pixels for row `y` of a `width`×`height` surface.
pub fn wave_offset(cfg: &GradientConfig, y: u32, width: u32, height: u32) -> f64 {
    let angle = (f64::from(y) / f64::from(height)) * cfg.wave_frequency * TAU;
    angle.sin() * (f64::from(width) * cfg.wave_amplitude)
}

/// Wave-shifted column `x` as a fraction of `width`, saturated to `[0, 1]`.
pub fn normalized_position(x: u32, offset: f64, width: u32) -> f64 {
    let adjusted = f64::from(x) + offset;
    (adjusted / f64::from(width)).clamp(0.0, 1.0)
}

/// Classify a normalized position.
///
/// An empty left zone (`left_zone <= 0`) or an empty right zone (`zone_end >= 1`) is skipped
/// rather than divided by; positions past an empty right zone stay in the dark band.
pub fn zone_at(cfg: &GradientConfig, pos: f64) -> Zone {
    let left_end = cfg.left_zone;
    let zone_end = cfg.zone_end();

    if left_end > 0.0 && pos < left_end {
        Zone::Left { t: pos / left_end }
    } else if pos < zone_end {
        Zone::Dark
    } else if zone_end < 1.0 {
        Zone::Right {
            t: (pos - zone_end) / (1.0 - zone_end),
        }
    } else {
        Zone::Dark
    }
}

/// Undarkened color at a normalized position.
pub fn zone_color(cfg: &GradientConfig, pos: f64) -> Rgb8 {
    match zone_at(cfg, pos) {
        Zone::Left { t } => lerp(cfg.light_color, cfg.dark_color, t),
        Zone::Dark => cfg.dark_color,
        Zone::Right { t } => lerp(cfg.dark_color, cfg.light_color, t),
    }
}

/// Luminance multiplier for row `y`; `1` at the top edge.
pub fn vertical_factor(cfg: &GradientConfig, y: u32, height: u32) -> f64 {
    1.0 - (f64::from(y) / f64::from(height)) * cfg.vertical_darken
}

/// Scale every channel by `factor`, rounding and clamping to `[0, 255]`.
pub fn darken(color: Rgb8, factor: f64) -> Rgb8 {
    Rgb8::new(
        scale_channel(color.r, factor),
        scale_channel(color.g, factor),
        scale_channel(color.b, factor),
    )
}

/// Final color of pixel `(x, y)` on a non-empty `width`×`height` surface.
pub fn pixel_color(cfg: &GradientConfig, x: u32, y: u32, width: u32, height: u32) -> Rgb8 {
    let offset = wave_offset(cfg, y, width, height);
    let pos = normalized_position(x, offset, width);
    darken(zone_color(cfg, pos), vertical_factor(cfg, y, height))
}

fn lerp(c1: Rgb8, c2: Rgb8, t: f64) -> Rgb8 {
    Rgb8::new(
        lerp_channel(c1.r, c2.r, t),
        lerp_channel(c1.g, c2.g, t),
        lerp_channel(c1.b, c2.b, t),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/synth/field.rs"]
mod tests;
