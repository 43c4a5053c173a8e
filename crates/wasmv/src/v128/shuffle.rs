//! Lane selection with constant indices ([`Shuffle`]) and with run-time indices ([`Swizzle`]).

use crate::generic::{Shuffle, ShuffleIndices, Swizzle, Vector};
use crate::v128::{
    B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2,
    U8x16,
};
use core::marker::PhantomData;

struct IndicesCheck<V, I>(PhantomData<(V, I)>);

impl<V: Vector, I: ShuffleIndices> IndicesCheck<V, I> {
    const VALID: () = {
        assert!(
            I::INDICES.len() == V::LANES,
            "shuffle requires exactly one index per lane"
        );

        let mut i = 0;
        while i < I::INDICES.len() {
            assert!(I::INDICES[i] < 2 * V::LANES, "shuffle index out of range");
            i += 1;
        }
    };
}

impl<V: Vector> Shuffle for V {
    #[inline]
    fn shuffle<I: ShuffleIndices>(self, other: Self) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = IndicesCheck::<V, I>::VALID;

        // Lanes are moved as raw bytes, so partially set mask lanes keep their bits.
        let width = 16 / V::LANES;
        let (a, b) = (self.to_bytes(), other.to_bytes());
        let mut bytes = [0u8; 16];
        for (lane, &index) in bytes.chunks_exact_mut(width).zip(I::INDICES) {
            let (source, index) = if index < V::LANES {
                (&a, index)
            } else {
                (&b, index - V::LANES)
            };

            lane.copy_from_slice(&source[index * width..][..width]);
        }

        V::from_bytes(bytes)
    }
}

macro_rules! shuffle_fn {
    ($name:ident as $prefix:ident, $($index:ident),+) => {
        paste::paste! {
            #[doc = concat!("Selects the lanes of a [`", stringify!($name), "`] from `a` and `b`.\n\n")]
            /// Each const parameter is the index of an output lane's source. Indices less than the
            /// number of lanes select from `a`, the rest from `b`. An index out of range fails to
            /// compile.
            #[inline]
            pub fn [<$prefix _shuffle>]<$(const $index: usize),+>(a: $name, b: $name) -> $name {
                struct Indices<$(const $index: usize),+>;

                impl<$(const $index: usize),+> ShuffleIndices for Indices<$($index),+> {
                    const INDICES: &'static [usize] = &[$($index),+];
                }

                a.shuffle::<Indices<$($index),+>>(b)
            }
        }
    };
}

shuffle_fn!(I8x16 as i8x16, I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15);
shuffle_fn!(U8x16 as u8x16, I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15);
shuffle_fn!(B8x16 as b8x16, I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15);
shuffle_fn!(I16x8 as i16x8, I0, I1, I2, I3, I4, I5, I6, I7);
shuffle_fn!(U16x8 as u16x8, I0, I1, I2, I3, I4, I5, I6, I7);
shuffle_fn!(B16x8 as b16x8, I0, I1, I2, I3, I4, I5, I6, I7);
shuffle_fn!(I32x4 as i32x4, I0, I1, I2, I3);
shuffle_fn!(U32x4 as u32x4, I0, I1, I2, I3);
shuffle_fn!(B32x4 as b32x4, I0, I1, I2, I3);
shuffle_fn!(F32x4 as f32x4, I0, I1, I2, I3);
shuffle_fn!(I64x2 as i64x2, I0, I1);
shuffle_fn!(U64x2 as u64x2, I0, I1);
shuffle_fn!(B64x2 as b64x2, I0, I1);
shuffle_fn!(F64x2 as f64x2, I0, I1);

#[inline]
fn swizzle_lanes<T: Copy + Default>(lanes: [T; 16], indices: [u8; 16]) -> [T; 16] {
    indices.map(|i| lanes.get(usize::from(i)).copied().unwrap_or_default())
}

/// Selects byte lanes of `a` using the lanes of `s` as indices, evaluated at run time.
///
/// Indices of 16 or more select `0`.
#[inline]
pub fn i8x16_swizzle(a: I8x16, s: U8x16) -> I8x16 {
    I8x16(swizzle_lanes(a.0, s.0))
}

/// Selects byte lanes of `a` using the lanes of `s` as indices, evaluated at run time.
///
/// Indices of 16 or more select `0`.
#[inline]
pub fn u8x16_swizzle(a: U8x16, s: U8x16) -> U8x16 {
    U8x16(swizzle_lanes(a.0, s.0))
}

impl Swizzle for I8x16 {
    #[inline]
    fn swizzle(self, indices: U8x16) -> Self {
        i8x16_swizzle(self, indices)
    }
}

impl Swizzle for U8x16 {
    #[inline]
    fn swizzle(self, indices: U8x16) -> Self {
        u8x16_swizzle(self, indices)
    }
}
