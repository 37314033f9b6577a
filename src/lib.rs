//! wavegrad synthesizes decorative background images: a light/dark/light color gradient whose
//! zone boundaries bend along a vertical sine wave and darken towards the bottom edge.
//!
//! - Build a [`GradientConfig`] (or pick a [`Preset`])
//! - Call [`GradientSynthesizer::generate`] for a one-off [`Raster`]
//! - Or drive a [`Surface`] through a [`GradientHost`] that repaints on ready/resize signals
//!
//! Output is a pure function of the canvas size and the configuration.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Ready/resize lifecycle binding a synthesizer to a surface.
pub mod host;
/// Drawing surfaces the host presents into.
pub mod surface;
/// Gradient configuration, per-pixel field and raster generation.
pub mod synth;

pub use crate::foundation::core::{Canvas, FALLBACK_CANVAS, Rgb8};
pub use crate::foundation::error::{WavegradError, WavegradResult};

pub use crate::host::{GradientHost, SurfaceEvent};
pub use crate::surface::memory::InMemorySurface;
pub use crate::surface::png::PngSurface;
pub use crate::surface::{Surface, Visibility};
pub use crate::synth::config::{GradientConfig, Reveal};
pub use crate::synth::field::Zone;
pub use crate::synth::presets::Preset;
pub use crate::synth::raster::Raster;
pub use crate::synth::synthesizer::{GradientSynthesizer, SynthOpts};
