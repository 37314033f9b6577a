use crate::foundation::core::Canvas;
use crate::foundation::error::{WavegradError, WavegradResult};
use std::path::Path;

/// A synthesized image as straight-alpha RGBA8 pixels.
///
/// Rows run top to bottom, pixels left to right, tightly packed. Every alpha byte is 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl Raster {
    /// Zero-filled raster sized for `canvas`, or `None` if its byte length overflows `usize`.
    pub(crate) fn zeroed(canvas: Canvas) -> Option<Self> {
        Some(Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.rgba_len()?],
        })
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// RGBA of pixel `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Stable content hash over dimensions and bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&self.width.to_le_bytes());
        h.update(&self.height.to_le_bytes());
        h.update(&self.data);
        h.digest()
    }

    /// Check that `data` holds exactly `width * height` RGBA8 pixels.
    pub fn validate(&self) -> WavegradResult<()> {
        if self.canvas().rgba_len() != Some(self.data.len()) {
            return Err(WavegradError::validation(format!(
                "raster buffer length {} does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_image(&self) -> WavegradResult<image::RgbaImage> {
        self.validate()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| WavegradError::validation("raster does not fit an RgbaImage"))
    }

    /// Write the raster as a PNG file, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> WavegradResult<()> {
        let path = path.as_ref();
        self.validate()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                WavegradError::surface(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }

        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| WavegradError::surface(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/raster.rs"]
mod tests;
