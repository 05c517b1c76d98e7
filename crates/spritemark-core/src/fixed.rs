//! Signed fixed-point values with 8 fractional bits.
//!
//! Positions and velocities are stored as [`Fixed`]: a 32-bit integer
//! whose low 8 bits hold the fractional part, so one unit is 1/256 of a
//! pixel. Integer arithmetic keeps motion bit-reproducible across
//! platforms, which floating point does not guarantee.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of fractional bits in the [`Fixed`] encoding.
pub const FRAC_BITS: u32 = 8;

/// A signed fixed-point value: 24 integer bits, 8 fractional bits.
///
/// `Fixed(256)` is one pixel; `Fixed(1)` is 1/256 of a pixel. The
/// representable pixel range is roughly ±8.3 million, far beyond any
/// screen dimension the benchmark targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero in any unit.
    pub const ZERO: Fixed = Fixed(0);
    /// One pixel.
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    /// Wrap a raw encoded value.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Encode a whole-pixel value.
    ///
    /// `v` must fit in the 24-bit integer part (`|v| <= i32::MAX >> 8`);
    /// larger magnitudes overflow the encoding.
    pub const fn from_int(v: i32) -> Self {
        Self(v << FRAC_BITS)
    }

    /// The raw encoded value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The whole-pixel part, rounded toward negative infinity.
    ///
    /// This is the arithmetic shift the renderer applies when converting
    /// a position to a destination pixel, so `-0.5` pixels lands on `-1`.
    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// The value as a float, for display and tests.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(1 << FRAC_BITS)
    }

    /// Absolute value of the encoded quantity.
    pub const fn abs(self) -> Fixed {
        Self(self.0.abs())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.to_f64())
    }
}
