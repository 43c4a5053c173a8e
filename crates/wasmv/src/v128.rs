//! The raw [`V128`] type, its lane interpretations, and their concretely-typed operations.
//!
//! Functions are named after the WebAssembly instruction they implement, with the `<shape>.`
//! prefix written as `<shape>_` and signedness moved into the type (e.g. `i16x8.add_sat_u`
//! becomes [`u16x8_add_sat()`]).
//!
//! Reinterpretations between every pair of vector types are provided as `<from>_as_<to>`
//! functions, e.g. [`f32x4_as_u32x4()`].

/// Lists every lane interpretation of a [`V128`], passing each to `$macro` as
/// `Name = [lane; count] as prefix`.
macro_rules! v128_interpretations {
    ($macro:ident) => {
        $macro!(I8x16 = [i8; 16] as i8x16);
        $macro!(I16x8 = [i16; 8] as i16x8);
        $macro!(I32x4 = [i32; 4] as i32x4);
        $macro!(I64x2 = [i64; 2] as i64x2);
        $macro!(U8x16 = [u8; 16] as u8x16);
        $macro!(U16x8 = [u16; 8] as u16x8);
        $macro!(U32x4 = [u32; 4] as u32x4);
        $macro!(U64x2 = [u64; 2] as u64x2);
        $macro!(B8x16 = [u8; 16] as b8x16);
        $macro!(B16x8 = [u16; 8] as b16x8);
        $macro!(B32x4 = [u32; 4] as b32x4);
        $macro!(B64x2 = [u64; 2] as b64x2);
        $macro!(F32x4 = [f32; 4] as f32x4);
        $macro!(F64x2 = [f64; 2] as f64x2);
    };
}

/// Defines the whole-vector memory accesses `<prefix>_load`, `<prefix>_loadu`, `<prefix>_store`
/// and `<prefix>_storeu`.
macro_rules! vector_memory {
    ($name:ident as $prefix:ident) => {
        paste::paste! {
            #[doc = concat!("Reads a [`", stringify!($name), "`] from memory aligned to 16 bytes.")]
            ///
            /// # Safety
            ///
            /// See [`Bits128::load()`](crate::Bits128::load).
            #[inline]
            pub unsafe fn [<$prefix _load>](ptr: *const $name) -> $name {
                // SAFETY: ensured by caller.
                unsafe { <$name as crate::Bits128>::load(ptr) }
            }

            #[doc = concat!("Reads a [`", stringify!($name), "`] from memory with any alignment.")]
            ///
            /// # Safety
            ///
            /// See [`Bits128::loadu()`](crate::Bits128::loadu).
            #[inline]
            pub unsafe fn [<$prefix _loadu>](ptr: *const $name) -> $name {
                // SAFETY: ensured by caller.
                unsafe { <$name as crate::Bits128>::loadu(ptr) }
            }

            #[doc = concat!("Writes a [`", stringify!($name), "`] to memory aligned to 16 bytes.")]
            ///
            /// # Safety
            ///
            /// See [`Bits128::store()`](crate::Bits128::store).
            #[inline]
            pub unsafe fn [<$prefix _store>](ptr: *mut $name, v: $name) {
                // SAFETY: ensured by caller.
                unsafe { <$name as crate::Bits128>::store(v, ptr) }
            }

            #[doc = concat!("Writes a [`", stringify!($name), "`] to memory with any alignment.")]
            ///
            /// # Safety
            ///
            /// See [`Bits128::storeu()`](crate::Bits128::storeu).
            #[inline]
            pub unsafe fn [<$prefix _storeu>](ptr: *mut $name, v: $name) {
                // SAFETY: ensured by caller.
                unsafe { <$name as crate::Bits128>::storeu(v, ptr) }
            }
        }
    };
}

mod bitwise;
mod bshape;
mod convert;
mod fshape;
mod interpretations;
mod ishape;
mod memory;
mod reinterpret;
mod shuffle;

pub use bitwise::*;
pub use bshape::*;
pub use convert::*;
pub use fshape::*;
pub use interpretations::*;
pub use ishape::*;
pub use memory::*;
pub use reinterpret::*;
pub use shuffle::*;

use crate::generic::Bits128;

/// Represents a generic [128-bit vector] whose interpretation is not specified.
///
/// # Interpretations
///
/// Specific interpretations of the lanes of a [`V128`] are provided as separate types, along with
/// the operations (e.g. lane-wise [`Add`]) valid for those interpretations:
/// - Signed integers: [`I8x16`], [`I16x8`], [`I32x4`], [`I64x2`].
/// - Unsigned integers: [`U8x16`], [`U16x8`], [`U32x4`], [`U64x2`].
/// - Masks: [`B8x16`], [`B16x8`], [`B32x4`], [`B64x2`].
/// - Floating-point: [`F32x4`], [`F64x2`].
///
/// A [`V128`] itself only supports bitwise operations, memory accesses and reinterpretation.
///
/// [128-bit vector]: https://webassembly.github.io/spec/core/syntax/values.html#vectors
/// [`Add`]: core::ops::Add
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[repr(C, align(16))]
pub struct V128([u8; 16]);

// SAFETY: `V128` is 16 bytes with no padding, and all bit patterns are valid.
unsafe impl bytemuck::Zeroable for V128 {}

// SAFETY: see above.
unsafe impl bytemuck::Pod for V128 {}

impl crate::generic::sealed::Sealed for V128 {}

impl Bits128 for V128 {}

impl V128 {
    /// A vector with all bits clear.
    pub const ZERO: Self = Self([0; 16]);

    /// Interprets a 128-bit integer value as a 128-bit vector.
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits.to_le_bytes())
    }

    /// Returns a 128-bit integer value containing the contents of the 128-bit vector.
    pub const fn to_bits(self) -> u128 {
        u128::from_le_bytes(self.0)
    }

    /// Constructs a 128-bit vector from bytes in little-endian order.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the representation of a 128-bit vector as a byte array in little-endian order.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl From<u128> for V128 {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<V128> for u128 {
    fn from(v: V128) -> Self {
        v.to_bits()
    }
}

#[cfg(simd_wasm32_intrinsics)]
impl From<core::arch::wasm32::v128> for V128 {
    fn from(v: core::arch::wasm32::v128) -> Self {
        // SAFETY: both types are 16 bytes, and all bit patterns are valid.
        unsafe { core::mem::transmute::<core::arch::wasm32::v128, Self>(v) }
    }
}

#[cfg(simd_wasm32_intrinsics)]
impl From<V128> for core::arch::wasm32::v128 {
    fn from(v: V128) -> Self {
        // SAFETY: both types are 16 bytes, and all bit patterns are valid.
        unsafe { core::mem::transmute::<V128, Self>(v) }
    }
}

impl core::fmt::Debug for V128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#034X}", self.to_bits())
    }
}

vector_memory!(V128 as v128);

/// Applies `f` to each pair of lanes.
#[inline(always)]
fn zip_with<T: Copy, U, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> U) -> [U; N] {
    core::array::from_fn(|i| f(a[i], b[i]))
}

/// Converts a boolean into a mask lane with all bits set or clear.
#[inline(always)]
fn mask_lane<M: num_traits::PrimInt>(b: bool) -> M {
    if b {
        !M::zero()
    } else {
        M::zero()
    }
}

/// Converts an integer to a narrower type, clamping to its range.
#[inline]
fn saturate<W, N>(x: W) -> N
where
    W: num_traits::PrimInt,
    N: num_traits::PrimInt,
{
    match <N as num_traits::NumCast>::from(x) {
        Some(n) => n,
        None if x < W::zero() => N::min_value(),
        None => N::max_value(),
    }
}
