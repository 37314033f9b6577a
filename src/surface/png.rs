use crate::foundation::core::Canvas;
use crate::foundation::error::WavegradResult;
use crate::surface::{Surface, Visibility};
use crate::synth::config::Reveal;
use crate::synth::raster::Raster;
use std::path::PathBuf;

/// Surface that writes every presented raster to a numbered PNG file.
///
/// Files are named `<stem>-<n>-<w>x<h>.png` inside `dir`, with `n` counting presents from 0.
#[derive(Debug)]
pub struct PngSurface {
    dir: PathBuf,
    stem: String,
    viewport: Option<Canvas>,
    size: Option<Canvas>,
    visibility: Visibility,
    written: Vec<PathBuf>,
}

impl PngSurface {
    /// Create a surface writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            viewport: None,
            size: None,
            visibility: Visibility::Hidden,
            written: Vec::new(),
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

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Current visibility state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl Surface for PngSurface {
    fn viewport(&self) -> Option<Canvas> {
        self.viewport
    }

    fn resize(&mut self, canvas: Canvas) -> WavegradResult<()> {
        self.size = Some(canvas);
        Ok(())
    }

    fn present(&mut self, raster: &Raster) -> WavegradResult<()> {
        let name = format!(
            "{}-{}-{}.png",
            self.stem,
            self.written.len(),
            raster.canvas()
        );
        let path = self.dir.join(name);
        raster.save_png(&path)?;
        tracing::info!(path = %path.display(), fingerprint = raster.fingerprint(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn reveal(&mut self, reveal: Reveal) -> WavegradResult<()> {
        self.visibility = reveal.into();
        tracing::debug!(?reveal, "surface revealed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/png.rs"]
mod tests;
