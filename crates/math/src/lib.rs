//! Scalar semantics for the lanes of WebAssembly [128-bit SIMD] vectors.
//!
//! The vector operations in `wasmv` are lane-wise applications of the functions in this crate
//! wherever a lane's result is not simply a Rust primitive operation (e.g. `fmin` with *NaN*
//! propagation, or rounding ties to even).
//!
//! Float rounding and square roots require either the `std` or the `libm` feature.
//!
//! [128-bit SIMD]: https://github.com/webassembly/simd

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

mod float;

pub mod nan;

pub use float::{
    f32_max, f32_min, f32_nearest, f32_pmax, f32_pmin, f64_max, f64_min, f64_nearest, f64_pmax,
    f64_pmin,
};

macro_rules! trunc_sat {
    {$(
        $float:ty => $trunc:ident = $trunc_name:literal -> $int:ty;
    )*} => {$(
        #[doc = concat!(
            "Lane semantics of the [`", $trunc_name, "`] instruction.\n\n",
            "Truncates a [`", stringify!($float), "`] toward zero and converts it to an [`",
            stringify!($int), "`]. *NaN* becomes `0`, and values outside of the range of [`",
            stringify!($int), "`] saturate to [`", stringify!($int), "::MIN`] or [`",
            stringify!($int), "::MAX`].\n\n",
            "[`", $trunc_name, "`]: ",
            "https://webassembly.github.io/spec/core/exec/numerics.html#op-trunc-sat-u"
        )]
        #[inline]
        pub fn $trunc(value: $float) -> $int {
            match <$int as num_traits::cast::NumCast>::from(value) {
                Some(n) => n,
                None if value.is_nan() => 0,
                None if value < 0.0 => <$int>::MIN,
                None => <$int>::MAX,
            }
        }
    )*};
}

trunc_sat! {
    f32 => i32_trunc_sat_f32 = "i32x4.trunc_sat_f32x4_s" -> i32;
    f32 => u32_trunc_sat_f32 = "i32x4.trunc_sat_f32x4_u" -> u32;
    f64 => i32_trunc_sat_f64 = "i32x4.trunc_sat_f64x2_s_zero" -> i32;
    f64 => u32_trunc_sat_f64 = "i32x4.trunc_sat_f64x2_u_zero" -> u32;
}
