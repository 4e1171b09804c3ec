//! Rounding policy shared by every curve.
//!
//! All curves are evaluated in `f64` and turned into bytes by [`quantize`]:
//! round half up, then clamp to `[0, 255]`. Over the non-negative range this
//! is the same as rounding half away from zero; negative values clamp to 0
//! either way. NaN maps to 0.

/// Rounds `value` half up and clamps it to a byte.
///
/// ```rust
/// use tonal_lut::quantize;
///
/// assert_eq!(quantize(25.5), 26);
/// assert_eq!(quantize(25.499), 25);
/// assert_eq!(quantize(-3.0), 0);
/// assert_eq!(quantize(300.0), 255);
/// ```
#[inline]
pub fn quantize(value: f64) -> u8 {
    let v = (value + 0.5).floor();
    if v >= 255.0 {
        255
    } else if v > 0.0 {
        v as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(quantize(0.5), 1);
        assert_eq!(quantize(42.5), 43);
        assert_eq!(quantize(254.5), 255);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(quantize(-0.6), 0);
        assert_eq!(quantize(-1e300), 0);
        assert_eq!(quantize(255.49), 255);
        assert_eq!(quantize(f64::INFINITY), 255);
        assert_eq!(quantize(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn test_integers_are_exact() {
        for i in 0..=255u8 {
            assert_eq!(quantize(i as f64), i);
        }
    }
}
