//! Operations specific to the mask interpretations of [`V128`].
//!
//! Bitwise operations on masks, including those mixing masks with integer and floating-point
//! vectors, are in the [`bitwise`](super::bitwise) module.
//!
//! [`V128`]: crate::v128::V128

use crate::generic::AllTrue;
use crate::v128::{B16x8, B32x4, B64x2, B8x16};

macro_rules! mask_ops {
    ($name:ident as $prefix:ident) => {
        paste::paste! {
            /// Returns `true` if every lane of the mask is `true`.
            #[inline]
            pub fn [<$prefix _all_true>](m: $name) -> bool {
                m.0.iter().all(|&lane| lane != 0)
            }

            /// Collects the most significant bit of each lane into the low bits of a [`u16`].
            ///
            /// For a mask with every lane either all-ones or all-zeroes, bit `i` is set exactly
            /// when lane `i` is `true`.
            #[inline]
            pub fn [<$prefix _bitmask>](m: $name) -> u16 {
                m.0.iter()
                    .enumerate()
                    .fold(0, |bits, (i, &lane)| bits | (u16::from(lane.leading_zeros() == 0) << i))
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

mask_ops!(B8x16 as b8x16);
mask_ops!(B16x8 as b16x8);
mask_ops!(B32x4 as b32x4);
mask_ops!(B64x2 as b64x2);
