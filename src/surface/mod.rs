use crate::foundation::core::Canvas;
use crate::foundation::error::WavegradResult;
use crate::synth::config::Reveal;
use crate::synth::raster::Raster;

pub(crate) mod memory;
pub(crate) mod png;

/// Drawing surface a [`crate::GradientHost`] renders into.
///
/// Call order for one cycle: `resize`, then `present`, then (first time only) `reveal`.
pub trait Surface {
    /// Current host viewport size, or `None` while it cannot be measured.
    fn viewport(&self) -> Option<Canvas>;
    /// Resize the backing store to `canvas`.
    fn resize(&mut self, canvas: Canvas) -> WavegradResult<()>;
    /// Paint `raster` starting at the top-left origin.
    fn present(&mut self, raster: &Raster) -> WavegradResult<()>;
    /// Make the surface visible.
    fn reveal(&mut self, reveal: Reveal) -> WavegradResult<()>;
}

/// Visibility state tracked by surfaces that start hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Nothing painted yet.
    #[default]
    Hidden,
    /// Fading towards opaque over the given duration.
    FadingIn {
        /// Fade duration in milliseconds.
        duration_ms: u32,
    },
    /// Fully opaque.
    Visible,
}

impl From<Reveal> for Visibility {
    fn from(reveal: Reveal) -> Self {
        match reveal {
            Reveal::Immediate => Visibility::Visible,
            Reveal::FadeIn { duration_ms: 0 } => Visibility::Visible,
            Reveal::FadeIn { duration_ms } => Visibility::FadingIn { duration_ms },
        }
    }
}
