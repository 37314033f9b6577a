use crate::foundation::error::{WavegradError, WavegradResult};
use crate::synth::config::{GradientConfig, Reveal};

/// Built-in configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Waved sage/slate gradient, faded in after the first paint.
    Classic,
    /// Same palette without the wave, painted immediately.
    Still,
}

impl Preset {
    /// All presets in listing order.
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Still];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Still => "still",
        }
    }

    /// Look a preset up by name (case-insensitive).
    pub fn from_name(name: &str) -> WavegradResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                WavegradError::validation(format!(
                    "unknown preset \"{name}\" (known: {})",
                    known.join(", ")
                ))
            })
    }

    /// Materialize the preset's configuration.
    pub fn config(self) -> GradientConfig {
        match self {
            Preset::Classic => GradientConfig::default(),
            Preset::Still => GradientConfig {
                wave_amplitude: 0.0,
                reveal: Reveal::Immediate,
                ..GradientConfig::default()
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/presets.rs"]
mod tests;
