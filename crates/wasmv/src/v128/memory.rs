//! Memory accesses of individual lanes.
//!
//! Whole-vector loads and stores (`<shape>_load`, `<shape>_loadu`, ...) are defined alongside
//! each interpretation. Widening loads are in the [`convert`](super::convert) module.
//!
//! None of the functions here require the pointer to be aligned.

use crate::generic::Splat;
use crate::v128::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};

macro_rules! lane_memory {
    ($name:ident = $num:ty as $prefix:ident) => {
        paste::paste! {
            #[doc = concat!("Reads one [`", stringify!($num), "`] from memory into every lane.")]
            ///
            /// # Safety
            ///
            /// See [`Splat::load_splat()`].
            #[inline]
            pub unsafe fn [<$prefix _load_splat>](ptr: *const $num) -> $name {
                // SAFETY: ensured by caller.
                unsafe { <$name as Splat>::load_splat(ptr) }
            }

            #[doc = concat!("Reads one [`", stringify!($num), "`] from memory into lane `L`.")]
            ///
            /// # Safety
            ///
            /// See [`Splat::load_lane()`].
            #[inline]
            pub unsafe fn [<$prefix _load_lane>]<const L: usize>(v: $name, ptr: *const $num) -> $name {
                // SAFETY: ensured by caller.
                unsafe { v.load_lane::<L>(ptr) }
            }

            #[doc = concat!("Writes lane `L` to memory as one [`", stringify!($num), "`].")]
            ///
            /// # Safety
            ///
            /// See [`Splat::store_lane()`].
            #[inline]
            pub unsafe fn [<$prefix _store_lane>]<const L: usize>(v: $name, ptr: *mut $num) {
                // SAFETY: ensured by caller.
                unsafe { v.store_lane::<L>(ptr) }
            }
        }
    };
}

macro_rules! load_zero {
    ($name:ident = $num:ty as $prefix:ident) => {
        paste::paste! {
            #[doc = concat!("Reads one [`", stringify!($num), "`] from memory into lane `0`, ")]
            /// setting the remaining lanes to zero.
            ///
            /// # Safety
            ///
            #[doc = concat!("The `ptr` must be [valid] for reads of one [`", stringify!($num), "`].")]
            ///
            /// [valid]: core::ptr#safety
            #[inline]
            pub unsafe fn [<$prefix _load_zero>](ptr: *const $num) -> $name {
                let mut lanes = $name::default().0;
                // SAFETY: ensured by caller.
                lanes[0] = unsafe { ptr.read_unaligned() };
                $name(lanes)
            }
        }
    };
}

lane_memory!(I8x16 = i8 as i8x16);
lane_memory!(I16x8 = i16 as i16x8);
lane_memory!(I32x4 = i32 as i32x4);
lane_memory!(I64x2 = i64 as i64x2);
lane_memory!(U8x16 = u8 as u8x16);
lane_memory!(U16x8 = u16 as u16x8);
lane_memory!(U32x4 = u32 as u32x4);
lane_memory!(U64x2 = u64 as u64x2);
lane_memory!(F32x4 = f32 as f32x4);
lane_memory!(F64x2 = f64 as f64x2);

load_zero!(I32x4 = i32 as i32x4);
load_zero!(I64x2 = i64 as i64x2);
load_zero!(U32x4 = u32 as u32x4);
load_zero!(U64x2 = u64 as u64x2);
load_zero!(F32x4 = f32 as f32x4);
load_zero!(F64x2 = f64 as f64x2);
