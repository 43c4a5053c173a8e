//! Type-safe interpretations of WebAssembly [128-bit SIMD] vectors.
//!
//! A [`V128`] is 16 bytes with no interpretation. Each of the typed vectors ([`I8x16`],
//! [`F32x4`], [`B32x4`], and so on) interprets those same bytes as a fixed number of lanes,
//! and only provides the operations which make sense for that interpretation. Mask vectors
//! (`B*`) are the results of lane-wise comparisons, with every bit of a lane either set or clear.
//!
//! Operations are available in two forms:
//! - Concretely-typed functions named `<shape>_<operation>` in the [`v128`] module, e.g.
//!   [`i32x4_add()`](v128::i32x4_add), along with [`core::ops`] implementations.
//! - Generic functions in the [`generic`] module, which select the concrete function from the
//!   types of their operands.
//!
//! ```
//! use wasmv::{generic, F32x4, I32x4};
//!
//! let a = I32x4::new(1, 2, 3, 4);
//! let b = I32x4::splat(10);
//! assert_eq!(generic::add(a, b), wasmv::v128::i32x4_add(a, b));
//!
//! let x = F32x4::new(1.0, -2.0, 3.0, -4.0);
//! let positive = generic::gt(x, F32x4::splat(0.0));
//! assert_eq!(generic::and(x, positive).to_lanes(), [1.0, 0.0, 3.0, 0.0]);
//! ```
//!
//! All conversions between vector types are reinterpretations of the same 128 bits; see
//! [`Bits128::reinterpret()`].
//!
//! # Features
//!
//! - `std` (default) or `libm` provide the floating-point rounding and square root functions.
//!   At least one of the two must be enabled.
//! - `simd-intrinsics` (default) enables conversions to and from [`core::arch::wasm32::v128`]
//!   when compiling for `wasm32` with the `simd128` target feature.
//!
//! [128-bit SIMD]: https://github.com/webassembly/simd

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

pub mod generic;
pub mod v128;

pub use generic::{Bits128, Vector};
pub use v128::{
    B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2,
    U8x16, V128,
};

/// Error returned when a slice passed to [`Bits128::from_slice()`] or
/// [`Bits128::write_to_slice()`] is not exactly 16 bytes long.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LengthError {
    actual: usize,
}

impl LengthError {
    pub(crate) const fn new(actual: usize) -> Self {
        Self { actual }
    }

    /// The length of the slice, in bytes.
    pub const fn actual_len(&self) -> usize {
        self.actual
    }
}

impl core::fmt::Display for LengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "expected a slice of 16 bytes, but got {} bytes",
            self.actual
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthError {}
