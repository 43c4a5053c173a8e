//! Constants and functions for classifying *NaN* lane values.
//!
//! Vector floating-point operations may produce any *arithmetic NaN*; tests asserting on such
//! lanes should use [`is_arithmetic_f32()`] or [`is_canonical_f32()`] (and their [`f64`]
//! counterparts) rather than comparing bit patterns.
//!
//! Refer to the [WebAssembly specification] for the exact definitions for *arithmetic* and
//! *canonical NaN*s.
//!
//! [WebAssembly specification]: https://webassembly.github.io/spec/core/syntax/values.html#floating-point

macro_rules! nan_consts {
    {$(
        $float:ident($bits:ident) {
            exponent_bits = $exponent:literal,
            significand_bits = $significand:literal,
            canonical = $canonical:ident,
            neg_canonical = $neg_canonical:ident,
            is_canonical = $is_canonical:ident,
            is_arithmetic = $is_arithmetic:ident,
        }
    )*} => {$(
        #[doc = concat!("The positive [*canonical NaN*] bit pattern for [`", stringify!($float), "`] lanes.")]
        ///
        /// [*canonical NaN*]: https://webassembly.github.io/spec/core/syntax/values.html#floating-point
        pub const $canonical: $bits =
            (((1 << $exponent) - 1) << $significand) | (1 << ($significand - 1));

        #[doc = concat!("The negative [*canonical NaN*] bit pattern for [`", stringify!($float), "`] lanes.")]
        ///
        /// [*canonical NaN*]: https://webassembly.github.io/spec/core/syntax/values.html#floating-point
        pub const $neg_canonical: $bits = $canonical | (1 << ($exponent + $significand));

        #[doc = concat!("Checks if the given [`", stringify!($float), "`] is a [positive] or [negative] ")]
        /// *canonical NaN*.
        ///
        #[doc = concat!("[positive]: ", stringify!($canonical))]
        #[doc = concat!("[negative]: ", stringify!($neg_canonical))]
        pub fn $is_canonical(value: $float) -> bool {
            matches!(value.to_bits(), $canonical | $neg_canonical)
        }

        #[doc = concat!("Checks if the given [`", stringify!($float), "`] is an [*arithmetic NaN*].")]
        ///
        /// [*arithmetic NaN*]: https://webassembly.github.io/spec/core/syntax/values.html#floating-point
        pub fn $is_arithmetic(value: $float) -> bool {
            value.is_nan() && value.to_bits() & (1 << ($significand - 1)) != 0
        }
    )*};
}

nan_consts! {
    f32(u32) {
        exponent_bits = 8,
        significand_bits = 23,
        canonical = F32_CANONICAL,
        neg_canonical = F32_NEG_CANONICAL,
        is_canonical = is_canonical_f32,
        is_arithmetic = is_arithmetic_f32,
    }
    f64(u64) {
        exponent_bits = 11,
        significand_bits = 52,
        canonical = F64_CANONICAL,
        neg_canonical = F64_NEG_CANONICAL,
        is_canonical = is_canonical_f64,
        is_arithmetic = is_arithmetic_f64,
    }
}
