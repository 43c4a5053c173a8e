//! Lane-wise operations on the integer interpretations of [`V128`].

use crate::generic::{
    Abs, AllTrue, AvgRound, Compare, MinMax, Popcnt, SaturatingArith, Shift, Splat,
};
use crate::v128::{
    mask_lane, saturate, zip_with, B16x8, B32x4, B64x2, B8x16, I16x8, I32x4, I64x2, I8x16,
    U16x8, U32x4, U64x2, U8x16,
};

macro_rules! binary_op_impls {
    ($name:ident: $($op:ident::$method:ident / $assign:ident::$assign_method:ident => $func:ident),+) => {$(
        impl core::ops::$op for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $func(self, rhs)
            }
        }

        impl core::ops::$op<&$name> for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: &$name) -> $name {
                $func(self, *rhs)
            }
        }

        impl core::ops::$op<$name> for &$name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: $name) -> $name {
                $func(*self, rhs)
            }
        }

        impl core::ops::$op<&$name> for &$name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: &$name) -> $name {
                $func(*self, *rhs)
            }
        }

        impl core::ops::$assign for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $func(*self, rhs);
            }
        }
    )+};
}

pub(in crate::v128) use binary_op_impls;

macro_rules! integer {
    ($name:ident = [$int:ty; $lanes:literal] as $prefix:ident, $wasm:literal, $mask:ident) => {
        paste::paste! {

impl $name {
    #[doc = concat!("Creates a new 128-bit vector whose ", stringify!($lanes), " lanes are ")]
    #[doc = concat!("filled with the given [`", stringify!($int), "`] value.")]
    #[inline]
    pub const fn splat(x: $int) -> Self {
        Self([x; $lanes])
    }
}

impl Splat for $name {
    #[inline]
    fn splat(x: $int) -> Self {
        Self([x; $lanes])
    }
}

#[doc = concat!("Creates a [`", stringify!($name), "`] with every lane set to `x`.\n\n")]
#[doc = concat!("This implements the [`", $wasm, ".splat`](")]
#[doc = "https://webassembly.github.io/spec/core/exec/instructions.html#exec-vec-splat"]
#[doc = ") instruction."]
#[inline]
pub const fn [<$prefix _splat>](x: $int) -> $name {
    $name::splat(x)
}

/// Lane-wise wrapping integer addition.
#[inline]
pub fn [<$prefix _add>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, <$int>::wrapping_add))
}

/// Lane-wise wrapping integer subtraction.
#[inline]
pub fn [<$prefix _sub>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, <$int>::wrapping_sub))
}

#[doc = concat!("Shifts each lane left by `count` modulo ", stringify!($int), "::BITS.")]
#[inline]
pub fn [<$prefix _shl>](a: $name, count: u32) -> $name {
    $name(a.0.map(|x| x.wrapping_shl(count)))
}

#[doc = concat!("Shifts each lane right by `count` modulo ", stringify!($int), "::BITS.")]
///
/// Signed lanes are shifted arithmetically, unsigned lanes logically.
#[inline]
pub fn [<$prefix _shr>](a: $name, count: u32) -> $name {
    $name(a.0.map(|x| x.wrapping_shr(count)))
}

/// Lane-wise minimum.
#[inline]
pub fn [<$prefix _min>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, Ord::min))
}

/// Lane-wise maximum.
#[inline]
pub fn [<$prefix _max>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, Ord::max))
}

#[doc = concat!("Lane-wise addition, saturating to the range of [`", stringify!($int), "`].")]
#[inline]
pub fn [<$prefix _add_sat>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, <$int>::saturating_add))
}

#[doc = concat!("Lane-wise subtraction, saturating to the range of [`", stringify!($int), "`].")]
#[inline]
pub fn [<$prefix _sub_sat>](a: $name, b: $name) -> $name {
    $name(zip_with(a.0, b.0, <$int>::saturating_sub))
}

/// Counts the number of bits set in each lane.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn [<$prefix _popcnt>](a: $name) -> $name {
    // The count never exceeds the lane width.
    $name(a.0.map(|x| x.count_ones() as $int))
}

/// Returns `true` if every lane is non-zero.
#[inline]
pub fn [<$prefix _all_true>](a: $name) -> bool {
    a.0.iter().all(|&x| x != 0)
}

/// Collects the most significant bit of each lane into the low bits of a [`u16`].
#[inline]
pub fn [<$prefix _bitmask>](a: $name) -> u16 {
    a.0.iter()
        .enumerate()
        .fold(0, |bits, (i, &x)| bits | (u16::from(x.leading_zeros() == 0) << i))
}

comparisons!($name = $int => $mask, $prefix);

binary_op_impls!($name:
    Add::add / AddAssign::add_assign => [<$prefix _add>],
    Sub::sub / SubAssign::sub_assign => [<$prefix _sub>]
);

impl core::ops::Shl<u32> for $name {
    type Output = Self;

    #[inline]
    fn shl(self, count: u32) -> Self {
        [<$prefix _shl>](self, count)
    }
}

impl core::ops::Shr<u32> for $name {
    type Output = Self;

    #[inline]
    fn shr(self, count: u32) -> Self {
        [<$prefix _shr>](self, count)
    }
}

impl core::ops::ShlAssign<u32> for $name {
    #[inline]
    fn shl_assign(&mut self, count: u32) {
        *self = [<$prefix _shl>](*self, count);
    }
}

impl core::ops::ShrAssign<u32> for $name {
    #[inline]
    fn shr_assign(&mut self, count: u32) {
        *self = [<$prefix _shr>](*self, count);
    }
}

impl Shift for $name {
    #[inline]
    fn shl(self, count: u32) -> Self {
        [<$prefix _shl>](self, count)
    }

    #[inline]
    fn shr(self, count: u32) -> Self {
        [<$prefix _shr>](self, count)
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

impl SaturatingArith for $name {
    #[inline]
    fn add_sat(self, rhs: Self) -> Self {
        [<$prefix _add_sat>](self, rhs)
    }

    #[inline]
    fn sub_sat(self, rhs: Self) -> Self {
        [<$prefix _sub_sat>](self, rhs)
    }
}

impl Popcnt for $name {
    #[inline]
    fn popcnt(self) -> Self {
        [<$prefix _popcnt>](self)
    }
}

impl AllTrue for $name {
    #[inline]
    fn all_true(self) -> bool {
        [<$prefix _all_true>](self)
    }

    #[inline]
    fn bitmask(self) -> u16 {
        [<$prefix _bitmask>](self)
    }
}

        }
    };
}

macro_rules! comparisons {
    ($name:ident = $lane:ty => $mask:ident, $prefix:ident) => {
        paste::paste! {
            #[doc = concat!("Lane-wise `==`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _eq>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x == y)))
            }

            #[doc = concat!("Lane-wise `!=`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _ne>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x != y)))
            }

            #[doc = concat!("Lane-wise `<`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _lt>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x < y)))
            }

            #[doc = concat!("Lane-wise `<=`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _le>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x <= y)))
            }

            #[doc = concat!("Lane-wise `>`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _gt>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x > y)))
            }

            #[doc = concat!("Lane-wise `>=`, producing a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$prefix _ge>](a: $name, b: $name) -> $mask {
                $mask(zip_with(a.0, b.0, |x, y| mask_lane(x >= y)))
            }

            impl Compare for $name {
                type Mask = $mask;

                #[inline]
                fn eq(self, rhs: Self) -> $mask {
                    [<$prefix _eq>](self, rhs)
                }

                #[inline]
                fn ne(self, rhs: Self) -> $mask {
                    [<$prefix _ne>](self, rhs)
                }

                #[inline]
                fn lt(self, rhs: Self) -> $mask {
                    [<$prefix _lt>](self, rhs)
                }

                #[inline]
                fn le(self, rhs: Self) -> $mask {
                    [<$prefix _le>](self, rhs)
                }

                #[inline]
                fn gt(self, rhs: Self) -> $mask {
                    [<$prefix _gt>](self, rhs)
                }

                #[inline]
                fn ge(self, rhs: Self) -> $mask {
                    [<$prefix _ge>](self, rhs)
                }
            }
        }
    };
}

pub(in crate::v128) use comparisons;

macro_rules! signed {
    ($name:ident as $prefix:ident) => {
        paste::paste! {
            /// Lane-wise wrapping negation.
            #[inline]
            pub fn [<$prefix _neg>](a: $name) -> $name {
                $name(a.0.map(|x| x.wrapping_neg()))
            }

            /// Lane-wise absolute value.
            ///
            /// The minimum lane value has no positive counterpart, and is returned unchanged.
            #[inline]
            pub fn [<$prefix _abs>](a: $name) -> $name {
                $name(a.0.map(|x| x.wrapping_abs()))
            }

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
        }
    };
}

macro_rules! unsigned {
    ($name:ident as $prefix:ident) => {
        paste::paste! {
            /// Lane-wise rounding average, computing `(a + b + 1) / 2` without overflow.
            #[inline]
            pub fn [<$prefix _avgr>](a: $name, b: $name) -> $name {
                $name(zip_with(a.0, b.0, |x, y| (x | y) - ((x ^ y) >> 1)))
            }

            impl AvgRound for $name {
                #[inline]
                fn avgr(self, rhs: Self) -> Self {
                    [<$prefix _avgr>](self, rhs)
                }
            }
        }
    };
}

macro_rules! mul {
    ($name:ident as $prefix:ident) => {
        paste::paste! {
            /// Lane-wise wrapping integer multiplication.
            #[inline]
            pub fn [<$prefix _mul>](a: $name, b: $name) -> $name {
                $name(zip_with(a.0, b.0, |x, y| x.wrapping_mul(y)))
            }

            binary_op_impls!($name: Mul::mul / MulAssign::mul_assign => [<$prefix _mul>]);
        }
    };
}

integer!(I8x16 = [i8; 16] as i8x16, "i8x16", B8x16);
integer!(I16x8 = [i16; 8] as i16x8, "i16x8", B16x8);
integer!(I32x4 = [i32; 4] as i32x4, "i32x4", B32x4);
integer!(I64x2 = [i64; 2] as i64x2, "i64x2", B64x2);
integer!(U8x16 = [u8; 16] as u8x16, "i8x16", B8x16);
integer!(U16x8 = [u16; 8] as u16x8, "i16x8", B16x8);
integer!(U32x4 = [u32; 4] as u32x4, "i32x4", B32x4);
integer!(U64x2 = [u64; 2] as u64x2, "i64x2", B64x2);

signed!(I8x16 as i8x16);
signed!(I16x8 as i16x8);
signed!(I32x4 as i32x4);
signed!(I64x2 as i64x2);

unsigned!(U8x16 as u8x16);
unsigned!(U16x8 as u16x8);
unsigned!(U32x4 as u32x4);
unsigned!(U64x2 as u64x2);

mul!(I16x8 as i16x8);
mul!(I32x4 as i32x4);
mul!(I64x2 as i64x2);
mul!(U16x8 as u16x8);
mul!(U32x4 as u32x4);
mul!(U64x2 as u64x2);

/// Lane-wise Q15 fixed-point multiplication, rounding to nearest and saturating.
///
/// This implements the [`i16x8.q15mulr_sat_s`] instruction.
///
/// [`i16x8.q15mulr_sat_s`]: https://webassembly.github.io/spec/core/exec/numerics.html#op-iq15mulrsat-s
#[inline]
pub fn i16x8_q15mulr_sat(a: I16x8, b: I16x8) -> I16x8 {
    I16x8(zip_with(a.0, b.0, |x, y| {
        saturate((i32::from(x) * i32::from(y) + 0x4000) >> 15)
    }))
}

/// Multiplies the signed 16-bit lanes, then adds adjacent pairs of the 32-bit products.
///
/// This implements the [`i32x4.dot_i16x8_s`] instruction.
///
/// [`i32x4.dot_i16x8_s`]: https://webassembly.github.io/spec/core/exec/instructions.html#exec-vec-dot
#[inline]
pub fn i32x4_dot_i16x8(a: I16x8, b: I16x8) -> I32x4 {
    I32x4(core::array::from_fn(|i| {
        let low = i32::from(a.0[2 * i]) * i32::from(b.0[2 * i]);
        let high = i32::from(a.0[2 * i + 1]) * i32::from(b.0[2 * i + 1]);
        low.wrapping_add(high)
    }))
}
