//! Tone-curve builders.
//!
//! Each builder turns its parameters into a [`Lut8`]. Parameters outside
//! their domain are clamped, NaN percentages fall back to the identity
//! point, and identity points return [`Lut8::identity`] exactly.
//!
//! | Builder | Domain | Identity |
//! |---------|--------|----------|
//! | [`contrast`] | `[-100, 100]` | `0` |
//! | [`brightness`] | `[-100, 100]` | `0` |
//! | [`gamma`] | `> 0` | `1` |
//! | [`sigmoid`] | midpoint `[0, 1]`, factor any | factor `0` |
//!
//! All curves operate directly on gamma-encoded bytes.

use crate::{Lut8, LutError, LutResult};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Clamps a percentage to `[-100, 100]`; NaN becomes 0.
fn clamp_percentage(op: &'static str, percentage: f64) -> f64 {
    if percentage.is_nan() {
        debug!(op, "NaN percentage treated as 0");
        return 0.0;
    }
    let clamped = percentage.clamp(-100.0, 100.0);
    if clamped != percentage {
        debug!(op, percentage, clamped, "Percentage clamped");
    }
    clamped
}

/// Inverts every byte: `255 - v`.
pub fn invert() -> Lut8 {
    Lut8::from_byte_fn(|v| 255 - v)
}

/// Contrast curve pivoting around mid-gray.
///
/// `percentage` is clamped to `[-100, 100]`. With `v = (100 + p) / 100`,
/// values `v <= 1` scale the distance from 0.5 by `v`; values `1 < v < 2`
/// scale it by `1 / (2 - v)`. At `+100` the curve is a hard threshold
/// (`< 128` to 0, `>= 128` to 255); at `-100` everything becomes 128.
///
/// ```rust
/// use tonal_lut::curves::contrast;
///
/// let lut = contrast(100.0);
/// assert_eq!((lut[127], lut[128]), (0, 255));
/// assert!(contrast(-100.0).as_table().iter().all(|&v| v == 128));
/// ```
pub fn contrast(percentage: f64) -> Lut8 {
    let p = clamp_percentage("contrast", percentage);
    if p == 0.0 {
        trace!("contrast identity");
        return Lut8::identity();
    }

    let v = (100.0 + p) / 100.0;
    if v >= 2.0 {
        return Lut8::from_byte_fn(|i| if i >= 128 { 255 } else { 0 });
    }
    let slope = if v <= 1.0 { v } else { 1.0 / (2.0 - v) };
    Lut8::from_fn(|i| (0.5 + (i / 255.0 - 0.5) * slope) * 255.0)
}

/// Brightness shift by `percentage` of the full range.
///
/// `percentage` is clamped to `[-100, 100]`; `+100` maps everything to 255,
/// `-100` to 0.
pub fn brightness(percentage: f64) -> Lut8 {
    let p = clamp_percentage("brightness", percentage);
    if p == 0.0 {
        trace!("brightness identity");
        return Lut8::identity();
    }

    let shift = 255.0 * p / 100.0;
    Lut8::from_fn(|i| i + shift)
}

/// Power curve `255 * (i / 255)^gamma`.
///
/// Gamma below 1 lifts midtones, above 1 darkens them. Endpoints 0 and 255
/// are fixed for every valid gamma.
///
/// # Errors
///
/// [`LutError::InvalidGamma`] if `gamma` is not strictly positive (NaN
/// included).
///
/// ```rust
/// use tonal_lut::curves::gamma;
///
/// let lift = gamma(0.5).unwrap();
/// assert!(lift[64] > 64);
/// assert!(gamma(0.0).is_err());
/// ```
pub fn gamma(gamma: f64) -> LutResult<Lut8> {
    // `!(g > 0)` also rejects NaN.
    if !(gamma > 0.0) {
        return Err(LutError::InvalidGamma(gamma));
    }
    if gamma == 1.0 {
        trace!("gamma identity");
        return Ok(Lut8::identity());
    }
    Ok(Lut8::from_fn(|i| (i / 255.0).powf(gamma) * 255.0))
}

/// Logistic function `1 / (1 + exp(steepness * (midpoint - x)))`.
#[inline]
pub fn logistic(midpoint: f64, steepness: f64, x: f64) -> f64 {
    1.0 / (1.0 + (steepness * (midpoint - x)).exp())
}

/// Sigmoidal contrast curve.
///
/// The logistic function centered at `midpoint` (clamped to `[0, 1]`, NaN
/// becomes 0.5) with steepness `|factor|` is rescaled so that 0 and 255
/// stay fixed. A positive `factor` increases contrast around the midpoint;
/// a negative one applies the inverse curve and decreases it. `factor == 0`
/// (or NaN) is the identity.
///
/// ```rust
/// use tonal_lut::curves::sigmoid;
///
/// let s = sigmoid(0.5, 3.0);
/// assert_eq!((s[0], s[255]), (0, 255));
/// assert!(s[64] < 64 && s[192] > 192);
/// assert!(sigmoid(0.3, 0.0).is_identity());
/// ```
pub fn sigmoid(midpoint: f64, factor: f64) -> Lut8 {
    let a = if midpoint.is_nan() {
        debug!("NaN sigmoid midpoint treated as 0.5");
        0.5
    } else {
        midpoint.clamp(0.0, 1.0)
    };
    let factor = if factor.is_nan() {
        debug!("NaN sigmoid factor treated as 0");
        0.0
    } else {
        factor.clamp(-f64::MAX, f64::MAX)
    };
    if factor == 0.0 {
        trace!("sigmoid identity");
        return Lut8::identity();
    }

    let b = factor.abs();
    let s0 = logistic(a, b, 0.0);
    let s1 = logistic(a, b, 1.0);
    let span = s1 - s0;
    // Very flat curves lose the span to rounding; their limit is the identity.
    if !(span > 0.0) || !span.is_finite() {
        debug!(midpoint = a, factor, "sigmoid span vanished, using identity");
        return Lut8::identity();
    }

    if factor > 0.0 {
        Lut8::from_fn(|i| (logistic(a, b, i / 255.0) - s0) / span * 255.0)
    } else {
        Lut8::from_fn(|i| {
            let t = (span * (i / 255.0) + s0).clamp(1e-6, 1.0 - 1e-6);
            (a - (1.0 / t - 1.0).ln() / b) * 255.0
        })
    }
}
