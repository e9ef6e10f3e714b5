//! # Traits
//!
//! The algorithms in this crate compute with finite precision floating point numbers. The `Real`
//! trait bundles everything they need from such a number, so that signatures stay readable.
use std::fmt::{Debug, Display, LowerExp};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

/// A real number with a finite (floating point) representation.
///
/// Automatically implemented for all types satisfying the trait's bounds, in practice `f32` and
/// `f64`.
pub trait Real:
    Float +
    FromPrimitive +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    Sum +
    Display +
    LowerExp +
    Debug +
    Send +
    Sync +
    'static
{
    /// Convert a `f64` literal into this type.
    ///
    /// Falls back to zero for values that are not representable, which doesn't happen for the
    /// primitive float types.
    fn from_literal(value: f64) -> Self {
        <Self as FromPrimitive>::from_f64(value).unwrap_or_else(Self::zero)
    }

    /// Whether this value is zero, up to `tolerance`.
    fn is_negligible(self, tolerance: Self) -> bool {
        self.abs() <= tolerance
    }
}

impl<T> Real for T
where
    T: Float + FromPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Sum + Display
        + LowerExp + Debug + Send + Sync + 'static,
{
}
