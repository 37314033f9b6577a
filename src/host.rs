use crate::foundation::core::{Canvas, FALLBACK_CANVAS};
use crate::foundation::error::WavegradResult;
use crate::surface::Surface;
use crate::synth::raster::Raster;
use crate::synth::synthesizer::{GradientSynthesizer, SynthOpts};

/// Environment signals a host reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface became available for the first time.
    Ready,
    /// The viewport changed size.
    Resized,
}

/// Binds a [`GradientSynthesizer`] to a [`Surface`] and redraws on ready/resize signals.
///
/// All methods run to completion before returning, so two generations never interleave; the
/// most recently presented raster is the visible one.
pub struct GradientHost<S: Surface> {
    synth: GradientSynthesizer,
    surface: S,
    opts: SynthOpts,
    current: Option<Raster>,
    revealed: bool,
    generations: u64,
}

impl<S: Surface> GradientHost<S> {
    /// Create a host with sequential generation.
    pub fn new(synth: GradientSynthesizer, surface: S) -> Self {
        Self::with_opts(synth, surface, SynthOpts::default())
    }

    /// Create a host with explicit generation options.
    pub fn with_opts(synth: GradientSynthesizer, surface: S, opts: SynthOpts) -> Self {
        Self {
            synth,
            surface,
            opts,
            current: None,
            revealed: false,
            generations: 0,
        }
    }

    /// Size the surface to the viewport and paint the first raster.
    ///
    /// Each viewport dimension that is zero or unmeasurable falls back to 800×600. A repeated
    /// ready signal behaves like a resize. Returns whether a raster was presented.
    #[tracing::instrument(skip(self))]
    pub fn on_surface_ready(&mut self) -> WavegradResult<bool> {
        if self.revealed {
            tracing::debug!("surface already revealed; handling ready as resize");
            return self.on_surface_resized();
        }
        let canvas = match self.surface.viewport() {
            Some(c) => c.or_fallback(FALLBACK_CANVAS),
            None => FALLBACK_CANVAS,
        };
        self.cycle(canvas)
    }

    /// Resize the surface to the new viewport and repaint.
    ///
    /// An empty or unmeasurable viewport skips the cycle and leaves the previous raster
    /// visible. Returns whether a raster was presented.
    #[tracing::instrument(skip(self))]
    pub fn on_surface_resized(&mut self) -> WavegradResult<bool> {
        match self.surface.viewport() {
            Some(canvas) if !canvas.is_empty() => self.cycle(canvas),
            other => {
                tracing::debug!(viewport = ?other, "nothing to draw; keeping previous raster");
                Ok(false)
            }
        }
    }

    /// Dispatch one environment signal.
    pub fn handle(&mut self, event: SurfaceEvent) -> WavegradResult<bool> {
        match event {
            SurfaceEvent::Ready => self.on_surface_ready(),
            SurfaceEvent::Resized => self.on_surface_resized(),
        }
    }

    /// Handle a queue of signals, collapsing each run of consecutive `Resized` events into one
    /// repaint at the viewport size current when the run ends.
    ///
    /// Returns the number of rasters presented.
    pub fn drain<I>(&mut self, events: I) -> WavegradResult<usize>
    where
        I: IntoIterator<Item = SurfaceEvent>,
    {
        let mut presented = 0;
        let mut pending_resize = false;
        let mut coalesced = 0usize;
        for event in events {
            match event {
                SurfaceEvent::Resized => {
                    if pending_resize {
                        coalesced += 1;
                    }
                    pending_resize = true;
                }
                SurfaceEvent::Ready => {
                    if std::mem::take(&mut pending_resize) {
                        presented += usize::from(self.on_surface_resized()?);
                    }
                    presented += usize::from(self.on_surface_ready()?);
                }
            }
        }
        if pending_resize {
            presented += usize::from(self.on_surface_resized()?);
        }
        if coalesced > 0 {
            tracing::debug!(coalesced, "coalesced resize signals");
        }
        Ok(presented)
    }

    /// The raster most recently presented.
    pub fn current(&self) -> Option<&Raster> {
        self.current.as_ref()
    }

    /// Number of rasters presented so far.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// The synthesizer driving this host.
    pub fn synthesizer(&self) -> &GradientSynthesizer {
        &self.synth
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface, e.g. to script its viewport.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the host, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn cycle(&mut self, canvas: Canvas) -> WavegradResult<bool> {
        let Some(raster) = self.synth.generate_with(canvas, &self.opts)? else {
            return Ok(false);
        };
        self.surface.resize(canvas)?;
        self.surface.present(&raster)?;
        if !self.revealed {
            self.surface.reveal(self.synth.config().reveal)?;
            self.revealed = true;
        }
        self.generations += 1;
        tracing::info!(
            %canvas,
            generation = self.generations,
            fingerprint = raster.fingerprint(),
            "presented raster"
        );
        self.current = Some(raster);
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;
