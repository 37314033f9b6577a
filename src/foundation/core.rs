use serde::{Deserialize, Serialize};

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Size used when the host viewport cannot be measured at startup.
pub const FALLBACK_CANVAS: Canvas = Canvas {
    width: 800,
    height: 600,
};

impl Canvas {
    /// Create a canvas of `width`×`height` pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when the canvas has no pixels to synthesize.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered by the canvas, or `None` if it overflows `usize`.
    pub fn pixel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Length of a tightly packed RGBA8 buffer for the canvas, or `None` if it overflows
    /// `usize`.
    pub fn rgba_len(self) -> Option<usize> {
        self.pixel_count()?.checked_mul(4)
    }

    /// Replace each zero dimension with the matching dimension of `fallback`.
    pub fn or_fallback(self, fallback: Canvas) -> Self {
        Self {
            width: if self.width == 0 {
                fallback.width
            } else {
                self.width
            },
            height: if self.height == 0 {
                fallback.height
            } else {
                self.height
            },
        }
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Canvas {
    type Err = String;

    /// Parse `WIDTHxHEIGHT`, e.g. `1024x768`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("canvas size \"{s}\" must look like WIDTHxHEIGHT"))?;
        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid canvas width \"{w}\": {e}"))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid canvas height \"{h}\": {e}"))?;
        Ok(Self { width, height })
    }
}

/// Opaque 8-bit RGB color.
///
/// Deserializes from `{"r":..,"g":..,"b":..}`, `[r, g, b]` or `"#RRGGBB"`; always serializes
/// as the object form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Append full opacity.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have len 3 ([r,g,b]) with channels in 0..=255",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }

    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
