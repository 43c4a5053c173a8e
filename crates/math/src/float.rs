//! Provides lane operations on floating-point values.

use crate::nan;
use num_traits::Float;

macro_rules! zeroes_with_opposite_signs {
    ($z_1:ident, $z_2:ident) => {
        $z_1 == 0.0 && $z_2 == 0.0 && $z_1.is_sign_positive() == $z_2.is_sign_negative()
    };
}

macro_rules! float_ops {
    {$(
        $float:ident {
            propagate_nan = $propagate_nan:ident,
            is_canonical = $is_canonical:path,
            canonical = $canonical:path,
            min = $min:ident,
            max = $max:ident,
            pmin = $pmin:ident,
            pmax = $pmax:ident,
            nearest = $nearest:ident,
        }
    )*} => {$(
        #[doc = concat!("Implements [*NaN* propagation] for [`", stringify!($float), "`] lanes.")]
        ///
        /// [*NaN* propagation]: https://webassembly.github.io/spec/core/exec/numerics.html#nan-propagation
        fn $propagate_nan(z_1: $float, z_2: $float) -> $float {
            if $is_canonical(z_1) && $is_canonical(z_2) {
                $float::from_bits($canonical)
            } else {
                // Let Rust pick a NaN value.
                z_1 + z_2
            }
        }

        #[doc = concat!("Lane semantics of the `min` operation on [`", stringify!($float), "`] lanes.")]
        ///
        /// This corresponds to the [*fmin* operator]: *NaN* inputs propagate, and `-0.0` is
        /// considered smaller than `+0.0`.
        ///
        /// [*fmin* operator]: https://webassembly.github.io/spec/core/exec/numerics.html#op-fmin
        pub fn $min(z_1: $float, z_2: $float) -> $float {
            if z_1.is_nan() || z_2.is_nan() {
                $propagate_nan(z_1, z_2)
            } else if zeroes_with_opposite_signs!(z_1, z_2) {
                -0.0
            } else {
                Float::min(z_1, z_2)
            }
        }

        #[doc = concat!("Lane semantics of the `max` operation on [`", stringify!($float), "`] lanes.")]
        ///
        /// This corresponds to the [*fmax* operator].
        ///
        /// [*fmax* operator]: https://webassembly.github.io/spec/core/exec/numerics.html#op-fmax
        pub fn $max(z_1: $float, z_2: $float) -> $float {
            if z_1.is_nan() || z_2.is_nan() {
                $propagate_nan(z_1, z_2)
            } else if zeroes_with_opposite_signs!(z_1, z_2) {
                0.0
            } else {
                Float::max(z_1, z_2)
            }
        }

        /// Pseudo-minimum, defined as `if z_2 < z_1 { z_2 } else { z_1 }`.
        ///
        /// Unlike the *fmin* operator, the first operand is returned when either operand is
        /// *NaN* or both are zeroes.
        #[inline]
        pub fn $pmin(z_1: $float, z_2: $float) -> $float {
            if z_2 < z_1 {
                z_2
            } else {
                z_1
            }
        }

        /// Pseudo-maximum, defined as `if z_1 < z_2 { z_2 } else { z_1 }`.
        #[inline]
        pub fn $pmax(z_1: $float, z_2: $float) -> $float {
            if z_1 < z_2 {
                z_2
            } else {
                z_1
            }
        }

        /// Rounds to the nearest integer, with ties rounding to the even integer.
        ///
        /// This corresponds to the [*fnearest* operator].
        ///
        /// [*fnearest* operator]: https://webassembly.github.io/spec/core/exec/numerics.html#op-fnearest
        pub fn $nearest(z: $float) -> $float {
            if Float::abs(z - Float::trunc(z)) == 0.5 {
                2.0 * Float::round(z / 2.0)
            } else {
                Float::round(z)
            }
        }
    )*};
}

float_ops! {
    f32 {
        propagate_nan = f32_propagate_nan,
        is_canonical = nan::is_canonical_f32,
        canonical = nan::F32_CANONICAL,
        min = f32_min,
        max = f32_max,
        pmin = f32_pmin,
        pmax = f32_pmax,
        nearest = f32_nearest,
    }
    f64 {
        propagate_nan = f64_propagate_nan,
        is_canonical = nan::is_canonical_f64,
        canonical = nan::F64_CANONICAL,
        min = f64_min,
        max = f64_max,
        pmin = f64_pmin,
        pmax = f64_pmax,
        nearest = f64_nearest,
    }
}
