//! Defines the interpretations for [`V128`].

use crate::generic::{sealed::Sealed, Bits128, Vector};
use crate::v128::V128;

macro_rules! common {
    ($name:ident = [$lane:ty; $lanes:literal] as $prefix:ident) => {
        paste::paste! {

// SAFETY: the vector consists of 16 bytes of lanes, without padding, and all bit patterns are
// valid.
unsafe impl bytemuck::Zeroable for $name {}

// SAFETY: see above.
unsafe impl bytemuck::Pod for $name {}

impl Sealed for $name {}

impl Bits128 for $name {}

impl From<$name> for V128 {
    fn from(vec: $name) -> Self {
        vec.to_v128()
    }
}

impl From<V128> for $name {
    #[doc = concat!("Interprets the contents of the [`V128`] as a [`", stringify!($name), "`].")]
    fn from(vec: V128) -> Self {
        Self::from_v128(vec)
    }
}

impl From<$name> for [$lane; $lanes] {
    #[doc = concat!("Calls [`", stringify!($name), "::to_lanes()`].")]
    fn from(vec: $name) -> Self {
        vec.to_lanes()
    }
}

impl From<[$lane; $lanes]> for $name {
    #[doc = concat!("Calls [`", stringify!($name), "::from_lanes()`].")]
    fn from(lanes: [$lane; $lanes]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl Vector for $name {
    type Lane = $lane;
    type Lanes = [$lane; $lanes];

    const LANES: usize = $lanes;

    #[inline]
    fn from_lanes(lanes: [$lane; $lanes]) -> Self {
        Self::from_lanes(lanes)
    }

    #[inline]
    fn to_lanes(self) -> [$lane; $lanes] {
        Self::to_lanes(self)
    }
}

impl core::fmt::Debug for $name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.to_lanes()).finish()
    }
}

#[doc = concat!("Returns lane `L` of a [`", stringify!($name), "`].")]
///
/// Fails to compile if `L` is out of range.
#[inline]
pub fn [<$prefix _extract_lane>]<const L: usize>(v: $name) -> $lane {
    v.extract_lane::<L>()
}

#[doc = concat!("Replaces lane `L` of a [`", stringify!($name), "`].")]
///
/// Fails to compile if `L` is out of range.
#[inline]
pub fn [<$prefix _replace_lane>]<const L: usize>(v: $name, x: $lane) -> $name {
    v.replace_lane::<L>(x)
}

vector_memory!($name as $prefix);

        }
    };
}

macro_rules! hex_fmt {
    ($name:ident = $bits:ty => $lanes:expr) => {
        impl core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                #[derive(Clone, Copy)]
                struct Lane($bits);

                impl core::fmt::Debug for Lane {
                    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        core::fmt::LowerHex::fmt(&self.0, f)
                    }
                }

                let lanes = $lanes(*self);
                f.debug_list().entries(lanes.into_iter().map(Lane)).finish()
            }
        }

        impl core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                #[derive(Clone, Copy)]
                struct Lane($bits);

                impl core::fmt::Debug for Lane {
                    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        core::fmt::UpperHex::fmt(&self.0, f)
                    }
                }

                let lanes = $lanes(*self);
                f.debug_list().entries(lanes.into_iter().map(Lane)).finish()
            }
        }
    };
}

macro_rules! numeric {
    (
        $(#[$derive:meta])?
        $name:ident = [$num:ty; $lanes:literal] as $prefix:ident, $wasm:literal,
        ($($arg:ident),+)
    ) => {
        paste::paste! {

#[doc = concat!("Represents a [`V128`] interpreted as ", stringify!($lanes), " lanes of ")]
#[doc = concat!("packed [`", stringify!($num), "`] values.\n\n")]
#[doc = concat!("Corresponds to the [`", $wasm, "`](")]
#[doc = "https://webassembly.github.io/spec/core/syntax/instructions.html#syntax-shape)"]
#[doc = "interpretation in WebAssembly."]
#[derive(Clone, Copy, Default, PartialEq)]
$(#[$derive])?
#[repr(C, align(16))]
pub struct $name(pub(in crate::v128) [$num; $lanes]);

impl $name {
    #[doc = concat!("Creates a vector from ", stringify!($lanes), " [`", stringify!($num), "`] lanes.")]
    ///
    /// The first argument is lane `0`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new($($arg: $num),+) -> Self {
        Self([$($arg),+])
    }

    /// Creates a vector from an array of lanes.
    #[inline]
    pub const fn from_lanes(lanes: [$num; $lanes]) -> Self {
        Self(lanes)
    }

    #[doc = concat!("Returns an array containing each [`", stringify!($num), "`] lane in the")]
    /// vector.
    #[inline]
    pub const fn to_lanes(self) -> [$num; $lanes] {
        self.0
    }
}

#[doc = concat!("Creates a [`", stringify!($name), "`] from ", stringify!($lanes), " lanes.")]
///
/// This is the equivalent of a `v128.const` with the given lane values.
#[inline]
#[allow(clippy::too_many_arguments)]
pub const fn [<$prefix _make>]($($arg: $num),+) -> $name {
    $name::new($($arg),+)
}

        }

        common!($name = [$num; $lanes] as $prefix);
    };
}

macro_rules! mask {
    ($name:ident = [$bits:ty; $lanes:literal] as $prefix:ident, ($($arg:ident),+)) => {
        paste::paste! {

#[doc = concat!("Represents a [`V128`] interpreted as ", stringify!($lanes), " mask lanes of ")]
#[doc = concat!("[`", stringify!($bits), "`] width.\n\n")]
/// Each lane has either all of its bits set (`true`), or all of its bits clear (`false`). Masks
/// are produced by lane-wise comparisons, and are used to select lanes with
/// [`Blend`](crate::generic::Blend) or bitwise operations.
///
/// A mask obtained by reinterpreting some other vector may have lanes with only some bits set,
/// in which case the lane is considered `true`.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[repr(C, align(16))]
pub struct $name(pub(in crate::v128) [$bits; $lanes]);

impl $name {
    /// Creates a mask from boolean lanes, the first argument being lane `0`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub const fn new($($arg: bool),+) -> Self {
        Self([$(if $arg { <$bits>::MAX } else { 0 }),+])
    }

    /// Creates a mask with every lane set to `b`.
    #[inline]
    pub const fn splat(b: bool) -> Self {
        Self([if b { <$bits>::MAX } else { 0 }; $lanes])
    }

    /// Creates a mask from an array of boolean lanes.
    #[inline]
    pub const fn from_lanes(lanes: [bool; $lanes]) -> Self {
        let mut bits = [0; $lanes];
        let mut i = 0;
        while i < $lanes {
            if lanes[i] {
                bits[i] = <$bits>::MAX;
            }

            i += 1;
        }

        Self(bits)
    }

    /// Returns each lane of the mask as a boolean.
    #[inline]
    pub fn to_lanes(self) -> [bool; $lanes] {
        self.0.map(|lane| lane != 0)
    }
}

#[doc = concat!("Creates a [`", stringify!($name), "`] from ", stringify!($lanes), " boolean lanes.")]
#[inline]
#[allow(clippy::too_many_arguments)]
pub const fn [<$prefix _make>]($($arg: bool),+) -> $name {
    $name::new($($arg),+)
}

hex_fmt!($name = $bits => |v: $name| v.0);

        }

        common!($name = [bool; $lanes] as $prefix);
    };
}

numeric! {
    #[derive(Eq, Hash)]
    I8x16 = [i8; 16] as i8x16, "i8x16",
    (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15)
}

numeric! {
    #[derive(Eq, Hash)]
    I16x8 = [i16; 8] as i16x8, "i16x8",
    (a0, a1, a2, a3, a4, a5, a6, a7)
}

numeric! {
    #[derive(Eq, Hash)]
    I32x4 = [i32; 4] as i32x4, "i32x4",
    (a0, a1, a2, a3)
}

numeric! {
    #[derive(Eq, Hash)]
    I64x2 = [i64; 2] as i64x2, "i64x2",
    (a0, a1)
}

numeric! {
    #[derive(Eq, Hash)]
    U8x16 = [u8; 16] as u8x16, "i8x16",
    (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15)
}

numeric! {
    #[derive(Eq, Hash)]
    U16x8 = [u16; 8] as u16x8, "i16x8",
    (a0, a1, a2, a3, a4, a5, a6, a7)
}

numeric! {
    #[derive(Eq, Hash)]
    U32x4 = [u32; 4] as u32x4, "i32x4",
    (a0, a1, a2, a3)
}

numeric! {
    #[derive(Eq, Hash)]
    U64x2 = [u64; 2] as u64x2, "i64x2",
    (a0, a1)
}

numeric! {
    F32x4 = [f32; 4] as f32x4, "f32x4",
    (a0, a1, a2, a3)
}

numeric! {
    F64x2 = [f64; 2] as f64x2, "f64x2",
    (a0, a1)
}

hex_fmt!(I8x16 = i8 => I8x16::to_lanes);
hex_fmt!(I16x8 = i16 => I16x8::to_lanes);
hex_fmt!(I32x4 = i32 => I32x4::to_lanes);
hex_fmt!(I64x2 = i64 => I64x2::to_lanes);
hex_fmt!(U8x16 = u8 => U8x16::to_lanes);
hex_fmt!(U16x8 = u16 => U16x8::to_lanes);
hex_fmt!(U32x4 = u32 => U32x4::to_lanes);
hex_fmt!(U64x2 = u64 => U64x2::to_lanes);

mask!(B8x16 = [u8; 16] as b8x16, (a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15));
mask!(B16x8 = [u16; 8] as b16x8, (a0, a1, a2, a3, a4, a5, a6, a7));
mask!(B32x4 = [u32; 4] as b32x4, (a0, a1, a2, a3));
mask!(B64x2 = [u64; 2] as b64x2, (a0, a1));
