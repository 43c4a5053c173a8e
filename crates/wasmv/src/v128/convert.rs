//! Conversions that change the lane width or lane family of a vector's values.
//!
//! Unlike reinterpretation, these operate on lane values: widening, saturating narrowing, and
//! conversions between integer and floating-point lanes.

use crate::generic::{ExtAddPairwise, ExtMul, Extend, Narrow};
use crate::v128::{
    saturate, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16,
};

macro_rules! extend {
    ($narrow:ident = $n:ty as $np:ident => $wide:ident = [$w:ty; $wl:literal] as $wp:ident) => {
        paste::paste! {

#[doc = concat!("Widens the lower ", stringify!($wl), " lanes of a [`", stringify!($narrow), "`].")]
#[inline]
pub fn [<$wp _extend_low_ $np>](a: $narrow) -> $wide {
    $wide(core::array::from_fn(|i| <$w>::from(a.0[i])))
}

#[doc = concat!("Widens the upper ", stringify!($wl), " lanes of a [`", stringify!($narrow), "`].")]
#[inline]
pub fn [<$wp _extend_high_ $np>](a: $narrow) -> $wide {
    $wide(core::array::from_fn(|i| <$w>::from(a.0[i + $wl])))
}

/// Multiplies the lower half of the lanes, producing products of twice the lane width.
#[inline]
pub fn [<$wp _extmul_low_ $np>](a: $narrow, b: $narrow) -> $wide {
    $wide(core::array::from_fn(|i| {
        <$w>::from(a.0[i]).wrapping_mul(<$w>::from(b.0[i]))
    }))
}

/// Multiplies the upper half of the lanes, producing products of twice the lane width.
#[inline]
pub fn [<$wp _extmul_high_ $np>](a: $narrow, b: $narrow) -> $wide {
    $wide(core::array::from_fn(|i| {
        <$w>::from(a.0[i + $wl]).wrapping_mul(<$w>::from(b.0[i + $wl]))
    }))
}

#[doc = concat!("Reads ", stringify!($wl), " [`", stringify!($n), "`] values from memory, ")]
#[doc = concat!("widening each into a lane of a [`", stringify!($wide), "`].")]
///
/// # Safety
///
/// The `ptr` must be [valid] for reads of 8 bytes. No alignment is required.
///
/// [valid]: core::ptr#safety
#[inline]
pub unsafe fn [<$wp _load_extend_ $np>](ptr: *const [$n; $wl]) -> $wide {
    // SAFETY: ensured by caller.
    let lanes = unsafe { ptr.read_unaligned() };
    $wide(lanes.map(<$w>::from))
}

impl Extend for $narrow {
    type Wide = $wide;

    #[inline]
    fn extend_low(self) -> $wide {
        [<$wp _extend_low_ $np>](self)
    }

    #[inline]
    fn extend_high(self) -> $wide {
        [<$wp _extend_high_ $np>](self)
    }
}

impl ExtMul for $narrow {
    #[inline]
    fn extmul_low(self, rhs: Self) -> $wide {
        [<$wp _extmul_low_ $np>](self, rhs)
    }

    #[inline]
    fn extmul_high(self, rhs: Self) -> $wide {
        [<$wp _extmul_high_ $np>](self, rhs)
    }
}

        }
    };
}

macro_rules! extadd {
    ($narrow:ident as $np:ident => $wide:ident = $w:ty, $wp:ident) => {
        paste::paste! {
            /// Adds each pair of adjacent lanes, producing sums of twice the lane width.
            #[inline]
            pub fn [<$wp _extadd_pairwise_ $np>](a: $narrow) -> $wide {
                $wide(core::array::from_fn(|i| {
                    <$w>::from(a.0[2 * i]).wrapping_add(<$w>::from(a.0[2 * i + 1]))
                }))
            }

            impl ExtAddPairwise for $narrow {
                #[inline]
                fn extadd_pairwise(self) -> $wide {
                    [<$wp _extadd_pairwise_ $np>](self)
                }
            }
        }
    };
}

macro_rules! narrow {
    (impl $wide:ident as $wp:ident => $narrow:ident as $np:ident, $wl:literal) => {
        narrow!($wide as $wp => $narrow as $np, $wl);

        paste::paste! {
            impl Narrow for $wide {
                type Narrow = $narrow;

                #[inline]
                fn narrow(self, high: Self) -> $narrow {
                    [<$np _narrow_ $wp>](self, high)
                }
            }
        }
    };
    ($wide:ident as $wp:ident => $narrow:ident as $np:ident, $wl:literal) => {
        paste::paste! {
            #[doc = concat!("Narrows the lanes of two [`", stringify!($wide), "`] vectors into a [`")]
            #[doc = concat!(stringify!($narrow), "`], saturating values that are out of range.\n\n")]
            /// The lanes of `low` make up the lower half of the result.
            #[inline]
            pub fn [<$np _narrow_ $wp>](low: $wide, high: $wide) -> $narrow {
                $narrow(core::array::from_fn(|i| {
                    saturate(if i < $wl { low.0[i] } else { high.0[i - $wl] })
                }))
            }
        }
    };
}

extend!(I8x16 = i8 as i8x16 => I16x8 = [i16; 8] as i16x8);
extend!(I16x8 = i16 as i16x8 => I32x4 = [i32; 4] as i32x4);
extend!(I32x4 = i32 as i32x4 => I64x2 = [i64; 2] as i64x2);
extend!(U8x16 = u8 as u8x16 => U16x8 = [u16; 8] as u16x8);
extend!(U16x8 = u16 as u16x8 => U32x4 = [u32; 4] as u32x4);
extend!(U32x4 = u32 as u32x4 => U64x2 = [u64; 2] as u64x2);

extadd!(I8x16 as i8x16 => I16x8 = i16, i16x8);
extadd!(I16x8 as i16x8 => I32x4 = i32, i32x4);
extadd!(U8x16 as u8x16 => U16x8 = u16, u16x8);
extadd!(U16x8 as u16x8 => U32x4 = u32, u32x4);

narrow!(impl I16x8 as i16x8 => I8x16 as i8x16, 8);
narrow!(impl I32x4 as i32x4 => I16x8 as i16x8, 4);
narrow!(impl U16x8 as u16x8 => U8x16 as u8x16, 8);
narrow!(impl U32x4 as u32x4 => U16x8 as u16x8, 4);
narrow!(I16x8 as i16x8 => U8x16 as u8x16, 8);
narrow!(I32x4 as i32x4 => U16x8 as u16x8, 4);

/// Converts each signed lane to the nearest [`f32`].
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn f32x4_convert_i32x4(a: I32x4) -> F32x4 {
    F32x4(a.0.map(|x| x as f32))
}

/// Converts each unsigned lane to the nearest [`f32`].
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn f32x4_convert_u32x4(a: U32x4) -> F32x4 {
    F32x4(a.0.map(|x| x as f32))
}

/// Converts the lower two signed lanes to [`f64`], which is exact.
#[inline]
pub fn f64x2_convert_low_i32x4(a: I32x4) -> F64x2 {
    F64x2([f64::from(a.0[0]), f64::from(a.0[1])])
}

/// Converts the lower two unsigned lanes to [`f64`], which is exact.
#[inline]
pub fn f64x2_convert_low_u32x4(a: U32x4) -> F64x2 {
    F64x2([f64::from(a.0[0]), f64::from(a.0[1])])
}

/// Truncates each lane toward zero, saturating to the range of [`i32`]. *NaN* becomes `0`.
#[inline]
pub fn i32x4_trunc_sat_f32x4(a: F32x4) -> I32x4 {
    I32x4(a.0.map(wasmv_math::i32_trunc_sat_f32))
}

/// Truncates each lane toward zero, saturating to the range of [`u32`]. *NaN* becomes `0`.
#[inline]
pub fn u32x4_trunc_sat_f32x4(a: F32x4) -> U32x4 {
    U32x4(a.0.map(wasmv_math::u32_trunc_sat_f32))
}

/// Truncates both lanes toward zero into the lower two lanes of the result, saturating to the
/// range of [`i32`]. The upper two lanes are zero.
#[inline]
pub fn i32x4_trunc_sat_f64x2_zero(a: F64x2) -> I32x4 {
    let [x, y] = a.0.map(wasmv_math::i32_trunc_sat_f64);
    I32x4([x, y, 0, 0])
}

/// Truncates both lanes toward zero into the lower two lanes of the result, saturating to the
/// range of [`u32`]. The upper two lanes are zero.
#[inline]
pub fn u32x4_trunc_sat_f64x2_zero(a: F64x2) -> U32x4 {
    let [x, y] = a.0.map(wasmv_math::u32_trunc_sat_f64);
    U32x4([x, y, 0, 0])
}

/// Rounds both lanes to the nearest [`f32`] into the lower two lanes of the result. The upper
/// two lanes are zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn f32x4_demote_f64x2_zero(a: F64x2) -> F32x4 {
    let [x, y] = a.0.map(|x| x as f32);
    F32x4([x, y, 0.0, 0.0])
}

/// Converts the lower two lanes to [`f64`], which is exact.
#[inline]
pub fn f64x2_promote_low_f32x4(a: F32x4) -> F64x2 {
    F64x2([f64::from(a.0[0]), f64::from(a.0[1])])
}
