//! Unit conversion utilities.
//!
//! All DrawingML coordinates are expressed in English Metric Units (EMU),
//! an integer unit chosen so that inch, centimeter, and point lengths all
//! have exact representations.

use std::fmt;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// A length in English Metric Units (914400 EMU = 1 inch).
///
/// Used for all shape extents, offsets, and transforms. The wrapped value
/// may be negative for signed coordinates such as anchor offsets; extent
/// values are restricted to non-negative by their attribute type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(pub i64);

impl Emu {
    /// Create a length from a whole number of inches.
    #[inline]
    pub const fn from_inches(inches: i64) -> Self {
        Emu(inches * EMUS_PER_INCH)
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Emu((cm * EMUS_PER_CM as f64) as i64)
    }

    /// Create a length from points.
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Emu((pt * EMUS_PER_PT as f64) as i64)
    }

    /// Get the raw EMU count.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get the length in inches.
    #[inline]
    pub fn inches(self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }

    /// Get the length in centimeters.
    #[inline]
    pub fn cm(self) -> f64 {
        self.0 as f64 / EMUS_PER_CM as f64
    }

    /// Get the length in points.
    #[inline]
    pub fn pt(self) -> f64 {
        self.0 as f64 / EMUS_PER_PT as f64
    }
}

impl From<i64> for Emu {
    #[inline]
    fn from(value: i64) -> Self {
        Emu(value)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EMU", self.0)
    }
}
