use crate::foundation::core::Rgb8;
use crate::foundation::error::{WavegradError, WavegradResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How a surface becomes visible once the first raster has been painted.
///
/// Reveal is a presentation hint only; it never changes pixel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reveal {
    /// Paint and show in the same step.
    Immediate,
    /// Paint while hidden, then fade to fully opaque.
    FadeIn {
        /// Fade duration in milliseconds.
        #[serde(default = "default_fade_ms")]
        duration_ms: u32,
    },
}

fn default_fade_ms() -> u32 {
    600
}

impl Default for Reveal {
    fn default() -> Self {
        Self::FadeIn {
            duration_ms: default_fade_ms(),
        }
    }
}

/// Fixed visual configuration of a gradient synthesizer.
///
/// Positions and zone widths are fractions of the surface width. Missing JSON keys take the
/// values of [`GradientConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Horizontal wave displacement as a fraction of surface width.
    pub wave_amplitude: f64,
    /// Full sine periods spanning the surface height.
    pub wave_frequency: f64,
    /// Width of the light-to-dark transition band on the left.
    pub left_zone: f64,
    /// Width of the flat dark band following the left zone.
    pub dark_zone: f64,
    /// Color at both outer edges of the gradient.
    pub light_color: Rgb8,
    /// Color of the flat middle band.
    pub dark_color: Rgb8,
    /// Fractional luminance reduction reached at the bottom edge.
    pub vertical_darken: f64,
    /// Presentation mode for the first paint.
    pub reveal: Reveal,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            wave_amplitude: 0.08,
            wave_frequency: 1.5,
            left_zone: 0.25,
            dark_zone: 0.50,
            light_color: Rgb8::new(248, 250, 242),
            dark_color: Rgb8::new(185, 193, 205),
            vertical_darken: 0.1,
            reveal: Reveal::default(),
        }
    }
}

impl GradientConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WavegradResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WavegradError::serde(format!("parse gradient config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WavegradResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WavegradError::validation(format!("open gradient config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> WavegradResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WavegradError::serde(format!("serialize gradient config: {e}")))
    }

    /// End of the flat dark band in normalized position.
    pub fn zone_end(&self) -> f64 {
        self.left_zone + self.dark_zone
    }

    /// Reject non-finite numbers.
    ///
    /// Out-of-range fractions are accepted: they produce unusual but well-defined rasters, so
    /// they are only reported through `tracing`.
    pub fn validate(&self) -> WavegradResult<()> {
        let fields = [
            ("wave_amplitude", self.wave_amplitude),
            ("wave_frequency", self.wave_frequency),
            ("left_zone", self.left_zone),
            ("dark_zone", self.dark_zone),
            ("vertical_darken", self.vertical_darken),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(WavegradError::validation(format!(
                    "gradient config '{name}' must be finite, got {v}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.left_zone) {
            tracing::warn!(left_zone = self.left_zone, "left zone outside [0, 1]");
        }
        if self.dark_zone < 0.0 {
            tracing::warn!(dark_zone = self.dark_zone, "dark zone is negative");
        }
        if self.zone_end() > 1.0 {
            tracing::warn!(
                zone_end = self.zone_end(),
                "left + dark zones exceed the surface; right zone is empty"
            );
        }
        if !(0.0..=1.0).contains(&self.vertical_darken) {
            tracing::warn!(
                vertical_darken = self.vertical_darken,
                "vertical darken outside [0, 1]; bottom rows will saturate"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/config.rs"]
mod tests;
