//! The curve point type.

use crate::primitives::U256;

/// A point on the curve: either the distinguished point at infinity (the
/// group identity) or an affine coordinate pair.
///
/// Using a tagged variant instead of a sentinel coordinate (e.g. `(0, 0)`)
/// means the group identity can never be confused with an actual point
/// whose coordinates happen to be zero, and `#[derive(PartialEq)]` handles
/// the infinity case uniformly alongside the affine one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: U256, y: U256 },
}

impl Point {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Returns the affine coordinates, or `None` for the point at infinity.
    pub fn coords(&self) -> Option<(U256, U256)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((*x, *y)),
        }
    }
}
