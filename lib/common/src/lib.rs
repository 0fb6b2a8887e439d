//! Items shared between the crates of the plantmesh workspace.

#[macro_use]
mod macros;

use num_traits::FloatConst;
use simba::{scalar::RealField, simd::SimdPartialOrd};

/// The width of a [Float] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `f32`
    Single,
    /// `f64`
    Double,
}

/// Trait for floating-point types, so that meshes and their properties can be generic over
/// {f32, f64} without having to use [weird macros](crate::item_with).
///
/// Arithmetic, `sqrt`, trigonometry and friends come from [RealField]; named constants come from
/// [FloatConst]. This is only intended to be implemented on `f32` and `f64`.
pub trait Float: RealField + SimdPartialOrd + FloatConst + Copy + Send + Sync {
    const ZERO: Self;
    const TWO: Self;
    const HALF: Self;

    /// Difference between `1.0` and the next larger representable number.
    const EPSILON: Self;

    const PRECISION: Precision;

    /// Convert a count (of triangles, segments, ...) into `Self`, rounding if necessary.
    fn from_count(n: usize) -> Self;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32, f64 => impl Float for Real {
    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;

    const EPSILON: Self = Self::EPSILON;

    const PRECISION: Precision = if std::mem::size_of::<Self>() == std::mem::size_of::<f32>() {
        Precision::Single
    } else {
        Precision::Double
    };

    #[inline]
    fn from_count(n: usize) -> Self {
        n as Self
    }
}}
