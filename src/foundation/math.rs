/// Round to the nearest integer, with halves going towards positive infinity.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Round and saturate into a `u8` channel.
pub(crate) fn to_channel(v: f64) -> u8 {
    round_half_up(v).clamp(0.0, 255.0) as u8
}

/// Interpolate one channel from `c1` to `c2`; `t` is clamped to `[0, 1]`.
pub(crate) fn lerp_channel(c1: u8, c2: u8, t: f64) -> u8 {
    let t = t.clamp(0.0, 1.0);
    let c1 = f64::from(c1);
    let c2 = f64::from(c2);
    to_channel(c1 + (c2 - c1) * t)
}

/// Multiply one channel by `factor`, rounding and clamping to `[0, 255]`.
pub(crate) fn scale_channel(c: u8, factor: f64) -> u8 {
    to_channel(f64::from(c) * factor)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
