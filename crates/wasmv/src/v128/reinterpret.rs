//! Reinterpretation between every pair of distinct 128-bit vector types.
//!
//! Each function returns a value with exactly the same 16 bytes as its input. Since lanes are
//! stored in the target's native byte order, the lane values observed after reinterpreting
//! between vectors of different lane widths depend on the target's endianness; WebAssembly
//! itself is always little-endian.

use crate::v128::{
    B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2,
    U8x16, V128,
};

macro_rules! assert_layout {
    ($name:ident = [$lane:ty; $lanes:literal] as $prefix:ident) => {
        const _: () = assert!(
            core::mem::size_of::<$name>() == 16
                && core::mem::align_of::<$name>() == 16
                && core::mem::size_of::<[$lane; $lanes]>() == 16
        );
    };
}

v128_interpretations!(assert_layout);

macro_rules! reinterpret_matrix {
    ($($name:ident as $prefix:ident),+) => {
        reinterpret_matrix!(@walk [] [$($name as $prefix),+]);
    };
    (@walk [$($before:ident as $bp:ident),*] []) => {};
    (@walk
        [$($before:ident as $bp:ident),*]
        [$current:ident as $cp:ident $(, $after:ident as $ap:ident)*]
    ) => {
        reinterpret_matrix!(@to $current as $cp => [$($before as $bp,)* $($after as $ap,)*]);
        reinterpret_matrix!(@walk [$($before as $bp,)* $current as $cp] [$($after as $ap),*]);
    };
    (@to $from:ident as $fp:ident => [$($to:ident as $tp:ident,)*]) => {$(
        paste::paste! {
            #[doc = concat!("Reinterprets the bits of a [`", stringify!($from), "`] as a [`")]
            #[doc = concat!(stringify!($to), "`].")]
            #[inline]
            pub fn [<$fp _as_ $tp>](v: $from) -> $to {
                bytemuck::must_cast(v)
            }
        }
    )*};
}

reinterpret_matrix! {
    V128 as v128,
    I8x16 as i8x16,
    I16x8 as i16x8,
    I32x4 as i32x4,
    I64x2 as i64x2,
    U8x16 as u8x16,
    U16x8 as u16x8,
    U32x4 as u32x4,
    U64x2 as u64x2,
    B8x16 as b8x16,
    B16x8 as b16x8,
    B32x4 as b32x4,
    B64x2 as b64x2,
    F32x4 as f32x4,
    F64x2 as f64x2
}
