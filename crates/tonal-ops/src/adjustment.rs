//! Adjustment descriptions and chains.
//!
//! [`Adjustment`] names one operator together with its parameters, so a
//! pipeline can be stored, sent over the wire or read from a config file
//! (with the `serde` feature) and applied later:
//!
//! ```rust
//! use tonal_core::RgbaBuffer;
//! use tonal_ops::{apply_chain, Adjustment, ParallelConfig};
//!
//! let chain = [
//!     Adjustment::Brightness { percentage: 10.0 },
//!     Adjustment::Gamma { gamma: 0.8 },
//!     Adjustment::Invert,
//! ];
//! let img = RgbaBuffer::filled(8, 8, [0x11, 0x22, 0x33, 0xff]);
//! let out = apply_chain(&img, &chain, &ParallelConfig::default())?;
//! assert_eq!(out.dimensions(), (8, 8));
//! # Ok::<(), tonal_ops::OpsError>(())
//! ```
//!
//! [`apply_chain`] composes each run of consecutive per-channel adjustments
//! into a single [`Lut8`], so a chain of curves costs one pass over the
//! pixels. Byte LUT composition is exact; the output equals applying each
//! adjustment in turn.

use crate::adjust::{grayscale_buffer, lut_or_copy};
use crate::parallel::{adapt_with, ParallelConfig};
use crate::OpsResult;
use tonal_core::{RgbaBuffer, SourceView};
use tonal_lut::{curves, Lut8, LutResult};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// One tone operator with its parameters.
///
/// With the `serde` feature this is an internally tagged object:
///
/// ```json
/// {"op": "contrast", "percentage": 10.0}
/// {"op": "sigmoid", "midpoint": 0.5, "factor": 3.0}
/// {"op": "grayscale"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Adjustment {
    /// Rec. 601 luma on all three channels.
    Grayscale,
    /// `255 - v` per channel.
    Invert,
    /// Contrast by percentage in `[-100, 100]`.
    Contrast {
        /// Percentage, clamped.
        percentage: f64,
    },
    /// Brightness by percentage in `[-100, 100]`.
    Brightness {
        /// Percentage, clamped.
        percentage: f64,
    },
    /// Power curve.
    Gamma {
        /// Exponent, must be positive.
        gamma: f64,
    },
    /// Sigmoidal contrast.
    Sigmoid {
        /// Curve center in `[0, 1]`.
        #[cfg_attr(feature = "serde", serde(default = "default_midpoint"))]
        midpoint: f64,
        /// Steepness; the sign selects more or less contrast.
        factor: f64,
    },
}

#[cfg(feature = "serde")]
fn default_midpoint() -> f64 {
    0.5
}

impl Adjustment {
    /// Short operator name, as used in serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Contrast { .. } => "contrast",
            Self::Brightness { .. } => "brightness",
            Self::Gamma { .. } => "gamma",
            Self::Sigmoid { .. } => "sigmoid",
        }
    }

    /// The per-channel lookup table, or `None` for [`Adjustment::Grayscale`],
    /// which mixes channels.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidGamma`](tonal_lut::LutError::InvalidGamma) for a
    /// non-positive gamma.
    pub fn lut(&self) -> LutResult<Option<Lut8>> {
        Ok(Some(match *self {
            Self::Grayscale => return Ok(None),
            Self::Invert => curves::invert(),
            Self::Contrast { percentage } => curves::contrast(percentage),
            Self::Brightness { percentage } => curves::brightness(percentage),
            Self::Gamma { gamma } => curves::gamma(gamma)?,
            Self::Sigmoid { midpoint, factor } => curves::sigmoid(midpoint, factor),
        }))
    }

    /// Returns `true` if applying this adjustment leaves every pixel as is.
    ///
    /// ```rust
    /// use tonal_ops::Adjustment;
    ///
    /// assert!(Adjustment::Contrast { percentage: 0.0 }.is_identity());
    /// assert!(!Adjustment::Gamma { gamma: 0.0 }.is_identity());
    /// assert!(!Adjustment::Grayscale.is_identity());
    /// ```
    pub fn is_identity(&self) -> bool {
        matches!(self.lut(), Ok(Some(lut)) if lut.is_identity())
    }

    /// Applies this adjustment with the default [`ParallelConfig`].
    pub fn apply<S: SourceView + ?Sized>(&self, source: &S) -> OpsResult<RgbaBuffer> {
        self.apply_with(source, &ParallelConfig::default())
    }

    /// Applies this adjustment with an explicit [`ParallelConfig`].
    pub fn apply_with<S: SourceView + ?Sized>(
        &self,
        source: &S,
        config: &ParallelConfig,
    ) -> OpsResult<RgbaBuffer> {
        apply_chain(source, std::slice::from_ref(self), config)
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale | Self::Invert => f.write_str(self.name()),
            Self::Contrast { percentage } | Self::Brightness { percentage } => {
                write!(f, "{}({})", self.name(), percentage)
            }
            Self::Gamma { gamma } => write!(f, "gamma({})", gamma),
            Self::Sigmoid { midpoint, factor } => write!(f, "sigmoid({}, {})", midpoint, factor),
        }
    }
}

/// A chain after fusion.
#[derive(Debug)]
enum Step {
    Lut(Lut8),
    Grayscale,
}

/// Builds every LUT up front and merges consecutive ones.
fn plan(chain: &[Adjustment]) -> LutResult<Vec<Step>> {
    let mut steps = Vec::with_capacity(chain.len());
    for adj in chain {
        match adj.lut()? {
            Some(lut) => match steps.last_mut() {
                Some(Step::Lut(prev)) => *prev = prev.then(&lut),
                _ => steps.push(Step::Lut(lut)),
            },
            None => steps.push(Step::Grayscale),
        }
    }
    Ok(steps)
}

/// Adapts `source` once and applies `chain` in order.
///
/// `config` governs both the adapter and the mapper: a single-worker
/// config reads the source on the calling thread.
///
/// Every parameter is validated before the source is read. Runs of
/// per-channel adjustments are fused into one table; an empty chain returns
/// the adapted source.
///
/// # Errors
///
/// - [`OpsError::Validation`](crate::OpsError::Validation) for an invalid
///   parameter anywhere in the chain
/// - [`OpsError::Image`](crate::OpsError::Image) if the source cannot be read
pub fn apply_chain<S: SourceView + ?Sized>(
    source: &S,
    chain: &[Adjustment],
    config: &ParallelConfig,
) -> OpsResult<RgbaBuffer> {
    let steps = plan(chain)?;
    let mut img = adapt_with(source, config)?;
    trace!(
        width = img.width(),
        height = img.height(),
        adjustments = chain.len(),
        passes = steps.len(),
        "apply_chain"
    );

    for step in &steps {
        img = match step {
            Step::Lut(lut) => lut_or_copy(img, lut, config)?,
            Step::Grayscale => grayscale_buffer(&img, config)?,
        };
    }

    debug!(chain = ?chain.iter().map(|a| a.to_string()).collect::<Vec<_>>(), "Applied chain");
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adjust_brightness, adjust_gamma, grayscale, invert};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn noise(width: u32, height: u32, seed: u64) -> RgbaBuffer {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0u8; (width * height * 4) as usize];
        rng.fill(&mut data[..]);
        RgbaBuffer::from_data(width, height, data).unwrap()
    }

    #[test]
    fn test_plan_fuses_runs() {
        let chain = [
            Adjustment::Invert,
            Adjustment::Contrast { percentage: 20.0 },
            Adjustment::Grayscale,
            Adjustment::Gamma { gamma: 2.0 },
            Adjustment::Grayscale,
        ];
        let steps = plan(&chain).unwrap();
        assert_eq!(steps.len(), 4);
        assert!(matches!(steps[0], Step::Lut(_)));
        assert!(matches!(steps[1], Step::Grayscale));
    }

    #[test]
    fn test_chain_matches_sequential() {
        let img = noise(23, 19, 11);
        let chain = [
            Adjustment::Brightness { percentage: 10.0 },
            Adjustment::Gamma { gamma: 0.6 },
            Adjustment::Grayscale,
            Adjustment::Invert,
        ];
        let fused = apply_chain(&img, &chain, &ParallelConfig::default()).unwrap();
        let step = adjust_brightness(&img, 10.0).unwrap();
        let step = adjust_gamma(&step, 0.6).unwrap();
        let step = grayscale(&step).unwrap();
        let sequential = invert(&step).unwrap();
        assert_eq!(fused, sequential);
    }

    #[test]
    fn test_empty_chain_copies() {
        let img = noise(4, 4, 12);
        assert_eq!(apply_chain(&img, &[], &ParallelConfig::default()).unwrap(), img);
    }

    #[test]
    fn test_invalid_gamma_anywhere_fails() {
        let img = noise(4, 4, 13);
        let chain = [Adjustment::Invert, Adjustment::Gamma { gamma: -2.0 }];
        let err = apply_chain(&img, &chain, &ParallelConfig::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_lut_and_identity() {
        assert!(Adjustment::Grayscale.lut().unwrap().is_none());
        assert!(Adjustment::Invert.lut().unwrap().is_some());
        assert!(Adjustment::Gamma { gamma: 1.0 }.is_identity());
        assert!(Adjustment::Sigmoid { midpoint: 0.1, factor: 0.0 }.is_identity());
        assert!(!Adjustment::Brightness { percentage: 1.0 }.is_identity());
    }

    #[test]
    fn test_display() {
        assert_eq!(Adjustment::Contrast { percentage: -10.0 }.to_string(), "contrast(-10)");
        assert_eq!(Adjustment::Sigmoid { midpoint: 0.5, factor: 3.0 }.to_string(), "sigmoid(0.5, 3)");
        assert_eq!(Adjustment::Grayscale.to_string(), "grayscale");
    }
}
