//! Bitwise operations, which are defined for every interpretation of [`V128`].
//!
//! Integer and floating-point vectors can also be combined with the mask vector of the same lane
//! width, in either operand order. These operate on the underlying bits, and always produce the
//! non-mask type:
//!
//! ```
//! use wasmv::v128::{f32x4_and_b32x4, f32x4_gt};
//! use wasmv::F32x4;
//!
//! let x = F32x4::new(-1.5, 2.0, -0.25, 8.0);
//! let positive = f32x4_gt(x, F32x4::splat(0.0));
//! assert_eq!(f32x4_and_b32x4(x, positive).to_lanes(), [0.0, 2.0, 0.0, 8.0]);
//! assert_eq!((positive & x).to_lanes(), [0.0, 2.0, 0.0, 8.0]);
//! ```

use crate::generic::{AndNot, AnyTrue, BitSelect, Bits128, Blend};
use crate::v128::ishape::binary_op_impls;
use crate::v128::{
    B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2,
    U8x16, V128,
};

#[inline(always)]
fn bits<T: Bits128>(v: T) -> u128 {
    bytemuck::must_cast(v)
}

#[inline(always)]
fn from_bits<T: Bits128>(bits: u128) -> T {
    bytemuck::must_cast(bits)
}

#[inline(always)]
fn select<T: Bits128, C: Bits128>(a: T, b: T, control: C) -> T {
    let control = bits(control);
    from_bits((bits(a) & control) | (bits(b) & !control))
}

macro_rules! bitwise {
    ($name:ident as $prefix:ident) => {
        bitwise!(@ops $name as $prefix, $name);
    };
    ($name:ident as $prefix:ident, $control:ident) => {
        bitwise!(@ops $name as $prefix, $control);

        impl BitSelect<$control> for $name {
            #[inline]
            fn bitselect(self, other: Self, control: $control) -> Self {
                select(self, other, control)
            }
        }
    };
    (@ops $name:ident as $prefix:ident, $control:ident) => {
        paste::paste! {

/// Bitwise NOT.
#[inline]
pub fn [<$prefix _not>](a: $name) -> $name {
    from_bits(!bits(a))
}

/// Bitwise AND.
#[inline]
pub fn [<$prefix _and>](a: $name, b: $name) -> $name {
    from_bits(bits(a) & bits(b))
}

/// Bitwise OR.
#[inline]
pub fn [<$prefix _or>](a: $name, b: $name) -> $name {
    from_bits(bits(a) | bits(b))
}

/// Bitwise XOR.
#[inline]
pub fn [<$prefix _xor>](a: $name, b: $name) -> $name {
    from_bits(bits(a) ^ bits(b))
}

/// Bitwise AND of `a` with the complement of `b`.
#[inline]
pub fn [<$prefix _andnot>](a: $name, b: $name) -> $name {
    from_bits(bits(a) & !bits(b))
}

/// Takes each bit from `a` where the corresponding bit of `control` is set, and from `b`
/// otherwise.
#[inline]
pub fn [<$prefix _bitselect>](a: $name, b: $name, control: $control) -> $name {
    select(a, b, control)
}

/// Returns `true` if any bit is set.
#[inline]
pub fn [<$prefix _any_true>](a: $name) -> bool {
    bits(a) != 0
}

impl core::ops::Not for $name {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        [<$prefix _not>](self)
    }
}

impl core::ops::Not for &$name {
    type Output = $name;

    #[inline]
    fn not(self) -> $name {
        [<$prefix _not>](*self)
    }
}

binary_op_impls!($name:
    BitAnd::bitand / BitAndAssign::bitand_assign => [<$prefix _and>],
    BitOr::bitor / BitOrAssign::bitor_assign => [<$prefix _or>],
    BitXor::bitxor / BitXorAssign::bitxor_assign => [<$prefix _xor>]
);

impl AndNot for $name {
    type Output = Self;

    #[inline]
    fn andnot(self, rhs: Self) -> Self {
        [<$prefix _andnot>](self, rhs)
    }
}

impl BitSelect for $name {
    #[inline]
    fn bitselect(self, other: Self, control: Self) -> Self {
        select(self, other, control)
    }
}

impl AnyTrue for $name {}

        }
    };
}

macro_rules! mixed_op {
    ($value:ident as $vp:ident, $mask:ident as $mp:ident: $op:ident::$method:ident / $assign:ident::$assign_method:ident => $name:ident($sym:tt)) => {
        paste::paste! {
            #[doc = concat!("Bitwise ", stringify!($name), " of a [`", stringify!($value), "`] and a [`", stringify!($mask), "`].")]
            #[inline]
            pub fn [<$vp _ $name _ $mp>](a: $value, m: $mask) -> $value {
                from_bits(bits(a) $sym bits(m))
            }

            impl core::ops::$op<$mask> for $value {
                type Output = $value;

                #[inline]
                fn $method(self, rhs: $mask) -> $value {
                    [<$vp _ $name _ $mp>](self, rhs)
                }
            }

            impl core::ops::$op<$value> for $mask {
                type Output = $value;

                #[inline]
                fn $method(self, rhs: $value) -> $value {
                    [<$vp _ $name _ $mp>](rhs, self)
                }
            }

            impl core::ops::$assign<$mask> for $value {
                #[inline]
                fn $assign_method(&mut self, rhs: $mask) {
                    *self = [<$vp _ $name _ $mp>](*self, rhs);
                }
            }
        }
    };
}

macro_rules! masked {
    ($value:ident as $vp:ident, $mask:ident as $mp:ident) => {
        mixed_op!($value as $vp, $mask as $mp: BitAnd::bitand / BitAndAssign::bitand_assign => and(&));
        mixed_op!($value as $vp, $mask as $mp: BitOr::bitor / BitOrAssign::bitor_assign => or(|));
        mixed_op!($value as $vp, $mask as $mp: BitXor::bitxor / BitXorAssign::bitxor_assign => xor(^));

        paste::paste! {
            #[doc = concat!("Clears the bits of a [`", stringify!($value), "`] in lanes where the [`")]
            #[doc = concat!(stringify!($mask), "`] is `true`.")]
            #[inline]
            pub fn [<$vp _andnot_ $mp>](a: $value, m: $mask) -> $value {
                from_bits(bits(a) & !bits(m))
            }

            #[doc = concat!("Computes `m & !a` for a [`", stringify!($mask), "`] and a [`")]
            #[doc = concat!(stringify!($value), "`], producing a [`", stringify!($value), "`].")]
            #[inline]
            pub fn [<$mp _andnot_ $vp>](m: $mask, a: $value) -> $value {
                from_bits(bits(m) & !bits(a))
            }

            #[doc = concat!("Takes each lane from `a` where the [`", stringify!($mask), "`] is `true`, ")]
            /// and from `b` otherwise.
            #[inline]
            pub fn [<$vp _blend>](a: $value, b: $value, m: $mask) -> $value {
                select(a, b, m)
            }

            impl AndNot<$mask> for $value {
                type Output = $value;

                #[inline]
                fn andnot(self, rhs: $mask) -> $value {
                    [<$vp _andnot_ $mp>](self, rhs)
                }
            }

            impl AndNot<$value> for $mask {
                type Output = $value;

                #[inline]
                fn andnot(self, rhs: $value) -> $value {
                    [<$mp _andnot_ $vp>](self, rhs)
                }
            }

            impl Blend for $value {
                type Mask = $mask;

                #[inline]
                fn blend(self, other: Self, mask: $mask) -> Self {
                    [<$vp _blend>](self, other, mask)
                }
            }
        }
    };
}

macro_rules! mask_blend {
    ($mask:ident as $mp:ident) => {
        paste::paste! {
            /// Takes each lane from `a` where `m` is `true`, and from `b` otherwise.
            #[inline]
            pub fn [<$mp _blend>](a: $mask, b: $mask, m: $mask) -> $mask {
                select(a, b, m)
            }

            impl Blend for $mask {
                type Mask = Self;

                #[inline]
                fn blend(self, other: Self, mask: Self) -> Self {
                    [<$mp _blend>](self, other, mask)
                }
            }
        }
    };
}

bitwise!(V128 as v128);
bitwise!(U8x16 as u8x16);
bitwise!(U16x8 as u16x8);
bitwise!(U32x4 as u32x4);
bitwise!(U64x2 as u64x2);
bitwise!(I8x16 as i8x16, U8x16);
bitwise!(I16x8 as i16x8, U16x8);
bitwise!(I32x4 as i32x4, U32x4);
bitwise!(I64x2 as i64x2, U64x2);
bitwise!(B8x16 as b8x16, U8x16);
bitwise!(B16x8 as b16x8, U16x8);
bitwise!(B32x4 as b32x4, U32x4);
bitwise!(B64x2 as b64x2, U64x2);
bitwise!(F32x4 as f32x4, U32x4);
bitwise!(F64x2 as f64x2, U64x2);

masked!(I8x16 as i8x16, B8x16 as b8x16);
masked!(I16x8 as i16x8, B16x8 as b16x8);
masked!(I32x4 as i32x4, B32x4 as b32x4);
masked!(I64x2 as i64x2, B64x2 as b64x2);
masked!(U8x16 as u8x16, B8x16 as b8x16);
masked!(U16x8 as u16x8, B16x8 as b16x8);
masked!(U32x4 as u32x4, B32x4 as b32x4);
masked!(U64x2 as u64x2, B64x2 as b64x2);
masked!(F32x4 as f32x4, B32x4 as b32x4);
masked!(F64x2 as f64x2, B64x2 as b64x2);

mask_blend!(B8x16 as b8x16);
mask_blend!(B16x8 as b16x8);
mask_blend!(B32x4 as b32x4);
mask_blend!(B64x2 as b64x2);
