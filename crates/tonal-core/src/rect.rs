//! Visible rectangles for source images.
//!
//! A source image exposes only the part of its coordinate space that is
//! considered in-bounds. That part is described by a [`Rect`].
//!
//! # Coordinate System
//!
//! - Origin may be anywhere, including negative coordinates
//! - X increases to the right, Y increases downward
//! - Left/top edges are inclusive, right/bottom edges exclusive
//!
//! ```text
//! (x,y) ─────────► right()
//!   │  ┌──────────┐
//!   │  │ visible  │
//!   │  └──────────┘
//!   ▼
//! bottom()
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tonal_core::Rect;
//!
//! // Equivalent of a source spanning (-1,-1)..(2,2)
//! let rect = Rect::from_corners(-1, -1, 2, 2);
//! assert_eq!(rect.width, 3);
//! assert!(rect.contains(-1, 1));
//! assert!(!rect.contains(2, 0));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from two corner points.
    ///
    /// `(x0, y0)` is inclusive, `(x1, y1)` exclusive. Swapped coordinates
    /// are normalized.
    ///
    /// ```rust
    /// use tonal_core::Rect;
    ///
    /// let rect = Rect::from_corners(10, 20, 110, 70);
    /// assert_eq!((rect.width, rect.height), (100, 50));
    /// ```
    #[inline]
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self::new(
            min_x,
            min_y,
            (max_x as i64 - min_x as i64) as u32,
            (max_y as i64 - min_y as i64) as u32,
        )
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns `true` if every pixel inside the rectangle has `i32`
    /// coordinates.
    ///
    /// Empty rectangles are always addressable. `right()` and `bottom()`
    /// may reach `i32::MAX + 1` since both edges are exclusive.
    ///
    /// ```rust
    /// use tonal_core::Rect;
    ///
    /// assert!(Rect::new(i32::MAX - 1, 0, 2, 1).is_addressable());
    /// assert!(!Rect::new(i32::MAX - 1, 0, 3, 1).is_addressable());
    /// ```
    #[inline]
    pub const fn is_addressable(&self) -> bool {
        const LIMIT: i64 = i32::MAX as i64 + 1;
        self.is_empty() || (self.right() <= LIMIT && self.bottom() <= LIMIT)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        (px as i64) >= self.x as i64
            && (px as i64) < self.right()
            && (py as i64) >= self.y as i64
            && (py as i64) < self.bottom()
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    ///
    /// An empty `other` is contained in anything.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Returns the intersection of two rectangles, or `None` if they don't overlap.
    ///
    /// ```rust
    /// use tonal_core::Rect;
    ///
    /// let a = Rect::new(-2, -2, 4, 4);
    /// let b = Rect::new(0, 0, 10, 10);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(0, 0, 2, 2)));
    /// ```
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if (left as i64) < right && (top as i64) < bottom {
            Some(Rect::new(
                left,
                top,
                (right - left as i64) as u32,
                (bottom - top as i64) as u32,
            ))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}
