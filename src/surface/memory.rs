use crate::foundation::core::Canvas;
use crate::foundation::error::{WavegradError, WavegradResult};
use crate::surface::{Surface, Visibility};
use crate::synth::config::Reveal;
use crate::synth::raster::Raster;

/// In-memory surface for tests and headless hosts.
///
/// The viewport is scripted with [`set_viewport`](Self::set_viewport); every presented raster
/// is kept in order.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    viewport: Option<Canvas>,
    size: Option<Canvas>,
    visibility: Visibility,
    presented: Vec<Raster>,
}

impl InMemorySurface {
    /// Create a surface whose viewport is not measurable yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with a measurable viewport.
    pub fn with_viewport(canvas: Canvas) -> Self {
        Self {
            viewport: Some(canvas),
            ..Self::default()
        }
    }

    /// Change what the next `viewport` call reports.
    pub fn set_viewport(&mut self, canvas: Option<Canvas>) {
        self.viewport = canvas;
    }

    /// Backing store size set by the last `resize`.
    pub fn size(&self) -> Option<Canvas> {
        self.size
    }

    /// Current visibility state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Rasters presented so far, oldest first.
    pub fn presented(&self) -> &[Raster] {
        &self.presented
    }

    /// The raster currently on screen.
    pub fn last_presented(&self) -> Option<&Raster> {
        self.presented.last()
    }
}

impl Surface for InMemorySurface {
    fn viewport(&self) -> Option<Canvas> {
        self.viewport
    }

    fn resize(&mut self, canvas: Canvas) -> WavegradResult<()> {
        self.size = Some(canvas);
        Ok(())
    }

    fn present(&mut self, raster: &Raster) -> WavegradResult<()> {
        if self.size != Some(raster.canvas()) {
            return Err(WavegradError::surface(format!(
                "raster {} does not match surface size {:?}",
                raster.canvas(),
                self.size
            )));
        }
        self.presented.push(raster.clone());
        Ok(())
    }

    fn reveal(&mut self, reveal: Reveal) -> WavegradResult<()> {
        self.visibility = reveal.into();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/memory.rs"]
mod tests;
