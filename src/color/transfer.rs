//! sRGB transfer curve on normalized `[0, 1]` samples.
//!
//! Both directions are computed in `f64` and clamped to `[0, 1]` so that
//! rounding overshoot at the segment boundaries never leaks into integer
//! conversions downstream.

const SRGB_LINEAR_CUTOFF: f64 = 0.04045;
const LINEAR_SRGB_CUTOFF: f64 = 0.0031308;
const LINEAR_SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

/// Decode a perceptually encoded (sRGB) sample into linear light.
///
/// `x / 12.92` below `0.04045`, `((x + 0.055) / 1.055)^2.4` above.
/// The result is clamped to `[0, 1]`; NaN maps to `0.0`.
#[inline]
pub fn srgb_to_linear(x: f32) -> f32 {
    let x = f64::from(x);
    let out = if x <= SRGB_LINEAR_CUTOFF {
        x / LINEAR_SLOPE
    } else {
        ((x + OFFSET) / SCALE).powf(GAMMA)
    };
    clamp01(out)
}

/// Encode a linear-light sample with the sRGB curve.
///
/// `12.92 * x` below `0.0031308`, `1.055 * x^(1/2.4) - 0.055` above.
/// The result is clamped to `[0, 1]`; NaN maps to `0.0`.
#[inline]
pub fn linear_to_srgb(x: f32) -> f32 {
    let x = f64::from(x);
    let out = if x <= LINEAR_SRGB_CUTOFF {
        LINEAR_SLOPE * x
    } else {
        SCALE * x.powf(1.0 / GAMMA) - OFFSET
    };
    clamp01(out)
}

// Both `powf` bases are strictly positive on the branches that reach them, so
// finite inputs stay finite. Infinite inputs clamp.
#[inline]
fn clamp01(v: f64) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/color/transfer.rs"]
mod tests;
