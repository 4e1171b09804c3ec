//! 256-entry byte lookup table.
//!
//! A [`Lut8`] maps every possible channel byte to its adjusted value. It is
//! built once per operator call, before any pixel work starts, and is only
//! read afterwards, so it can be shared freely across worker threads.

use crate::quantize;

/// A byte-to-byte lookup table.
///
/// # Example
///
/// ```rust
/// use tonal_lut::Lut8;
///
/// let half = Lut8::from_fn(|v| v / 2.0);
/// assert_eq!(half.apply(200), 100);
/// assert_eq!(half.apply(3), 2); // 1.5 rounds up
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lut8 {
    table: [u8; 256],
}

impl Lut8 {
    /// Creates the identity (pass-through) table.
    pub fn identity() -> Self {
        Self::from_byte_fn(|v| v)
    }

    /// Wraps an existing table.
    #[inline]
    pub const fn from_table(table: [u8; 256]) -> Self {
        Self { table }
    }

    /// Builds a table from a floating-point curve.
    ///
    /// `f` receives the input byte as `f64` in `0.0..=255.0`; its result is
    /// passed through [`quantize`].
    pub fn from_fn(f: impl Fn(f64) -> f64) -> Self {
        Self::from_byte_fn(|v| quantize(f(v as f64)))
    }

    /// Builds a table from a byte-to-byte function.
    pub fn from_byte_fn(f: impl Fn(u8) -> u8) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = f(i as u8);
        }
        Self { table }
    }

    /// Looks up a single byte.
    #[inline(always)]
    pub fn apply(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// Returns the raw table.
    #[inline]
    pub fn as_table(&self) -> &[u8; 256] {
        &self.table
    }

    /// Returns `true` if every entry maps to itself.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Returns `true` if the table never decreases.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| w[0] <= w[1])
    }

    /// Composes two tables: the result applies `self`, then `next`.
    ///
    /// Composition of byte tables is exact:
    /// `a.then(&b).apply(v) == b.apply(a.apply(v))` for every `v`.
    ///
    /// ```rust
    /// use tonal_lut::Lut8;
    ///
    /// let inv = Lut8::from_byte_fn(|v| 255 - v);
    /// assert!(inv.then(&inv).is_identity());
    /// ```
    #[must_use]
    pub fn then(&self, next: &Lut8) -> Lut8 {
        Self::from_byte_fn(|v| next.apply(self.apply(v)))
    }
}

impl Default for Lut8 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<u8> for Lut8 {
    type Output = u8;

    #[inline(always)]
    fn index(&self, value: u8) -> &u8 {
        &self.table[value as usize]
    }
}

impl From<[u8; 256]> for Lut8 {
    fn from(table: [u8; 256]) -> Self {
        Self::from_table(table)
    }
}

impl std::fmt::Debug for Lut8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 256 entries is too noisy; show the endpoints and midpoint.
        f.debug_struct("Lut8")
            .field("0", &self.table[0])
            .field("128", &self.table[128])
            .field("255", &self.table[255])
            .finish()
    }
}
