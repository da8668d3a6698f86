//! Physical pixel values for panel widths and viewport translations.
//!
//! Widths are measured by the rendering collaborator and handed to the engine
//! as [`Px`]. Translations produced by the engine are signed [`Px`] values the
//! renderer applies along the carousel's main axis.
//!
//! # Example
//!
//! ```
//! use slidekit::px::Px;
//!
//! let widths = [Px::new(120), Px::new(80)];
//! let total: Px = widths.iter().copied().sum();
//! assert_eq!(total, Px::new(200));
//! assert_eq!(-total, Px::new(-200));
//! ```

use std::ops::{AddAssign, Neg, SubAssign};

/// A physical pixel value.
///
/// Negative values are meaningful: a carousel translated to the left of its
/// viewport carries a negative offset.
///
/// # Examples
///
/// ```
/// use slidekit::px::Px;
///
/// let width = Px::new(100);
/// assert_eq!(width * 3, Px::new(300));
///
/// // Saturating arithmetic prevents overflow
/// let max_px = Px::MAX;
/// assert_eq!(max_px.saturating_add(Px::new(1)), Px::MAX);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the absolute value as a u32.
    ///
    /// ```
    /// use slidekit::px::Px;
    ///
    /// assert_eq!(Px::new(-5).abs(), 5);
    /// ```
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Saturating negation; `i32::MIN` maps to `i32::MAX`.
    pub fn saturating_neg(self) -> Self {
        Px(self.0.saturating_neg())
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.saturating_neg()
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0.saturating_mul(rhs))
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Px {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Px::ZERO, |acc, px| acc + px)
    }
}

impl<'a> std::iter::Sum<&'a Px> for Px {
    fn sum<I: Iterator<Item = &'a Px>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}
