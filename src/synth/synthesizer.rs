use crate::foundation::core::Canvas;
use crate::foundation::error::{WavegradError, WavegradResult};
use crate::synth::config::GradientConfig;
use crate::synth::field::{darken, normalized_position, vertical_factor, wave_offset, zone_color};
use crate::synth::raster::Raster;
use rayon::prelude::*;
use std::time::Instant;

/// Execution options for [`GradientSynthesizer::generate_with`].
///
/// Options never change output bytes; parallel and sequential generation are byte-identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynthOpts {
    /// Fill rows in parallel on a rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses the global pool.
    pub threads: Option<usize>,
}

/// Deterministic wave-gradient raster generator.
///
/// Holds only its immutable [`GradientConfig`]; every call to [`generate`](Self::generate)
/// produces a fresh raster that depends on nothing but the canvas and the config.
#[derive(Clone, Debug)]
pub struct GradientSynthesizer {
    cfg: GradientConfig,
}

impl GradientSynthesizer {
    /// Create a synthesizer for a fixed configuration.
    pub fn new(cfg: GradientConfig) -> Self {
        Self { cfg }
    }

    /// The configuration this synthesizer renders with.
    pub fn config(&self) -> &GradientConfig {
        &self.cfg
    }

    /// Synthesize a full raster for `canvas` on the current thread.
    ///
    /// Returns `None` for an empty canvas: there is nothing to draw, which is not an error.
    /// A canvas whose buffer length cannot be addressed also yields `None`;
    /// [`generate_with`](Self::generate_with) reports it as an error instead.
    pub fn generate(&self, canvas: Canvas) -> Option<Raster> {
        if canvas.is_empty() {
            tracing::debug!(%canvas, "skipping generation for empty canvas");
            return None;
        }
        let Some(mut raster) = Raster::zeroed(canvas) else {
            tracing::warn!(%canvas, "canvas too large to address; skipping generation");
            return None;
        };
        let started = Instant::now();
        let stride = raster.stride();
        for (y, row) in raster.data.chunks_exact_mut(stride).enumerate() {
            self.fill_row(row, y as u32, canvas);
        }
        tracing::debug!(
            %canvas,
            elapsed_us = started.elapsed().as_micros() as u64,
            "generated raster"
        );
        Some(raster)
    }

    /// Synthesize with explicit execution options.
    #[tracing::instrument(skip(self, opts), fields(parallel = opts.parallel))]
    pub fn generate_with(
        &self,
        canvas: Canvas,
        opts: &SynthOpts,
    ) -> WavegradResult<Option<Raster>> {
        if canvas.is_empty() {
            tracing::debug!("skipping generation for empty canvas");
            return Ok(None);
        }
        if canvas.rgba_len().is_none() {
            return Err(WavegradError::validation(format!(
                "canvas {canvas} is too large to address"
            )));
        }
        if !opts.parallel {
            return Ok(self.generate(canvas));
        }

        let Some(mut raster) = Raster::zeroed(canvas) else {
            return Err(WavegradError::validation(format!(
                "canvas {canvas} is too large to address"
            )));
        };
        let started = Instant::now();
        let stride = raster.stride();
        let fill = |data: &mut [u8]| {
            data.par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(y, row)| self.fill_row(row, y as u32, canvas));
        };
        match opts.threads {
            Some(n) => build_thread_pool(n)?.install(|| fill(raster.data.as_mut_slice())),
            None => fill(raster.data.as_mut_slice()),
        }
        tracing::debug!(
            elapsed_us = started.elapsed().as_micros() as u64,
            "generated raster (parallel)"
        );
        Ok(Some(raster))
    }

    fn fill_row(&self, row: &mut [u8], y: u32, canvas: Canvas) {
        let Canvas { width, height } = canvas;
        let offset = wave_offset(&self.cfg, y, width, height);
        let factor = vertical_factor(&self.cfg, y, height);
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let pos = normalized_position(x as u32, offset, width);
            let c = darken(zone_color(&self.cfg, pos), factor);
            px.copy_from_slice(&c.to_rgba());
        }
    }
}

fn build_thread_pool(threads: usize) -> WavegradResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(WavegradError::validation("synth 'threads' must be >= 1 when set"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| {
            WavegradError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
