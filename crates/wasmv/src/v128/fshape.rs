//! Lane-wise operations on the floating-point interpretations of [`V128`].
//!
//! Unless noted otherwise, lane results follow IEEE 754 as implemented by Rust's primitive
//! float operations. Operations whose WebAssembly semantics differ from Rust's (e.g. `min` on
//! signed zeroes) are provided by [`wasmv_math`].
//!
//! [`V128`]: crate::v128::V128

use crate::generic::{Abs, Compare, MinMax, PseudoMinMax, Round, Splat, Sqrt};
use crate::v128::ishape::{binary_op_impls, comparisons};
use crate::v128::{mask_lane, zip_with, B32x4, B64x2, F32x4, F64x2};
use num_traits::Float;

macro_rules! float {
    ($name:ident = [$float:ident; $lanes:literal] as $prefix:ident, $mask:ident) => {
        paste::paste! {

impl $name {
    #[doc = concat!("Creates a new 128-bit vector whose ", stringify!($lanes), " lanes are ")]
    #[doc = concat!("filled with the given [`", stringify!($float), "`] value.")]
    #[inline]
    pub const fn splat(x: $float) -> Self {
        Self([x; $lanes])
    }
}

impl Splat for $name {
    #[inline]
    fn splat(x: $float) -> Self {
        Self([x; $lanes])
    }
}

#[doc = concat!("Creates a [`", stringify!($name), "`] with every lane set to `x`.")]
#[inline]
pub const fn [<$prefix _splat>](x: $float) -> $name {
    $name::splat(x)
}

/// Lane-wise addition.
#[inline]
pub fn [<$prefix _add>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, |x, y| x + y))
}

/// Lane-wise subtraction.
#[inline]
pub fn [<$prefix _sub>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, |x, y| x - y))
}

/// Lane-wise multiplication.
#[inline]
pub fn [<$prefix _mul>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, |x, y| x * y))
}

/// Lane-wise division.
#[inline]
pub fn [<$prefix _div>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, |x, y| x / y))
}

/// Lane-wise negation, flipping the sign bit of every lane including *NaN*s.
#[inline]
pub fn [<$prefix _neg>](a: $name) -> $name {
    $name(a.0.map(|x| -x))
}

/// Lane-wise absolute value, clearing the sign bit of every lane including *NaN*s.
#[inline]
pub fn [<$prefix _abs>](a: $name) -> $name {
    $name(a.0.map(Float::abs))
}

/// Lane-wise square root.
#[inline]
pub fn [<$prefix _sqrt>](a: $name) -> $name {
    $name(a.0.map(Float::sqrt))
}

/// Rounds each lane toward positive infinity.
#[inline]
pub fn [<$prefix _ceil>](a: $name) -> $name {
    $name(a.0.map(Float::ceil))
}

/// Rounds each lane toward negative infinity.
#[inline]
pub fn [<$prefix _floor>](a: $name) -> $name {
    $name(a.0.map(Float::floor))
}

/// Rounds each lane toward zero.
#[inline]
pub fn [<$prefix _trunc>](a: $name) -> $name {
    $name(a.0.map(Float::trunc))
}

/// Rounds each lane to the nearest integer, with ties rounding to the even integer.
#[inline]
pub fn [<$prefix _nearest>](a: $name) -> $name {
    $name(a.0.map(wasmv_math::[<$float _nearest>]))
}

/// Lane-wise minimum.
///
/// If either lane is *NaN*, the result lane is *NaN*. `-0.0` is less than `+0.0`.
#[inline]
pub fn [<$prefix _min>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, wasmv_math::[<$float _min>]))
}

/// Lane-wise maximum.
///
/// If either lane is *NaN*, the result lane is *NaN*. `+0.0` is greater than `-0.0`.
#[inline]
pub fn [<$prefix _max>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, wasmv_math::[<$float _max>]))
}

/// Lane-wise pseudo-minimum, computing `if b < a { b } else { a }`.
#[inline]
pub fn [<$prefix _pmin>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, wasmv_math::[<$float _pmin>]))
}

/// Lane-wise pseudo-maximum, computing `if a < b { b } else { a }`.
#[inline]
pub fn [<$prefix _pmax>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, wasmv_math::[<$float _pmax>]))
}

comparisons!($name = $float => $mask, $prefix);

binary_op_impls!($name:
    Add::add / AddAssign::add_assign => [<$prefix _add>],
    Sub::sub / SubAssign::sub_assign => [<$prefix _sub>],
    Mul::mul / MulAssign::mul_assign => [<$prefix _mul>],
    Div::div / DivAssign::div_assign => [<$prefix _div>]
);

impl core::ops::Neg for $name {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        [<$prefix _neg>](self)
    }
}

impl core::ops::Neg for &$name {
    type Output = $name;

    #[inline]
    fn neg(self) -> $name {
        [<$prefix _neg>](*self)
    }
}

impl Abs for $name {
    #[inline]
    fn abs(self) -> Self {
        [<$prefix _abs>](self)
    }
}

impl Sqrt for $name {
    #[inline]
    fn sqrt(self) -> Self {
        [<$prefix _sqrt>](self)
    }
}

impl Round for $name {
    #[inline]
    fn ceil(self) -> Self {
        [<$prefix _ceil>](self)
    }

    #[inline]
    fn floor(self) -> Self {
        [<$prefix _floor>](self)
    }

    #[inline]
    fn trunc(self) -> Self {
        [<$prefix _trunc>](self)
    }

    #[inline]
    fn nearest(self) -> Self {
        [<$prefix _nearest>](self)
    }
}

impl MinMax for $name {
    #[inline]
    fn min(self, rhs: Self) -> Self {
        [<$prefix _min>](self, rhs)
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        [<$prefix _max>](self, rhs)
    }
}

impl PseudoMinMax for $name {
    #[inline]
    fn pmin(self, rhs: Self) -> Self {
        [<$prefix _pmin>](self, rhs)
    }

    #[inline]
    fn pmax(self, rhs: Self) -> Self {
        [<$prefix _pmax>](self, rhs)
    }
}

        }
    };
}

float!(F32x4 = [f32; 4] as f32x4, B32x4);
float!(F64x2 = [f64; 2] as f64x2, B64x2);
