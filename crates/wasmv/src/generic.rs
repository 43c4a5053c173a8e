//! Generic operations, resolved at compile time from the types of their operands.
//!
//! Every operation in this module forwards to the concretely-typed function of the same name in
//! the [`v128`](crate::v128) module (e.g. [`add()`] on two [`I32x4`] values calls
//! [`i32x4_add()`](crate::v128::i32x4_add)). Resolution happens entirely through trait
//! implementations, so there is no runtime cost over calling the concrete function directly.
//!
//! Operand combinations without an implementation are rejected by the compiler:
//!
//! ```compile_fail
//! use wasmv::{generic, I32x4};
//!
//! // `sqrt` is only defined for floating-point lanes.
//! let _ = generic::sqrt(I32x4::splat(4));
//! ```
//!
//! The bitwise operations [`and()`], [`or()`], [`xor()`] and [`andnot()`] also accept a value
//! and a mask of the same lane width, in either order. Masks of a different width are rejected:
//!
//! ```compile_fail
//! use wasmv::{generic, B16x8, I32x4};
//!
//! let _ = generic::and(I32x4::splat(1), B16x8::default());
//! ```
//!
//! Lane indices are checked against the number of lanes during compilation:
//!
//! ```compile_fail
//! use wasmv::{generic, I32x4};
//!
//! let _ = generic::extract_lane::<4, _>(I32x4::splat(1));
//! ```
//!
//! The traits are sealed, so other crates cannot add operand combinations:
//!
//! ```compile_fail
//! use wasmv::generic::AndNot;
//!
//! #[derive(Clone, Copy)]
//! struct Flags(u8);
//!
//! impl AndNot for Flags {
//!     type Output = Flags;
//!
//!     fn andnot(self, rhs: Flags) -> Flags {
//!         Flags(self.0 & !rhs.0)
//!     }
//! }
//! ```

use crate::v128::{
    B16x8, B32x4, B64x2, B8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2,
    U8x16, V128,
};
use crate::LengthError;
use core::marker::PhantomData;

pub(crate) mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// A 128-bit value which can be reinterpreted as any other 128-bit vector type.
///
/// Implemented by [`V128`] and every lane interpretation. Reinterpretation never changes the
/// underlying bits.
pub trait Bits128: Copy + Default + core::fmt::Debug + bytemuck::Pod + sealed::Sealed {
    /// Reinterprets the bits of this vector as another 128-bit type.
    ///
    /// The bytes of the result are identical to the bytes of `self`.
    #[inline]
    fn reinterpret<T: Bits128>(self) -> T {
        bytemuck::must_cast(self)
    }

    /// Returns the bits of this vector as an uninterpreted [`V128`].
    #[inline]
    fn to_v128(self) -> V128 {
        self.reinterpret()
    }

    /// Interprets the bits of a [`V128`] as this type.
    #[inline]
    fn from_v128(v: V128) -> Self {
        v.reinterpret()
    }

    /// Copies the vector's 16 bytes out of an array.
    #[inline]
    fn from_bytes(bytes: [u8; 16]) -> Self {
        bytemuck::must_cast(bytes)
    }

    /// Returns the vector's 16 bytes.
    #[inline]
    fn to_bytes(self) -> [u8; 16] {
        bytemuck::must_cast(self)
    }

    /// Copies the vector's bytes from a slice.
    ///
    /// # Errors
    ///
    /// Returns a [`LengthError`] if the slice is not exactly 16 bytes long.
    fn from_slice(bytes: &[u8]) -> Result<Self, LengthError> {
        match <[u8; 16]>::try_from(bytes) {
            Ok(bytes) => Ok(Self::from_bytes(bytes)),
            Err(_) => Err(LengthError::new(bytes.len())),
        }
    }

    /// Copies the vector's bytes into a slice.
    ///
    /// # Errors
    ///
    /// Returns a [`LengthError`] if the slice is not exactly 16 bytes long.
    fn write_to_slice(self, out: &mut [u8]) -> Result<(), LengthError> {
        let len = out.len();
        match <&mut [u8; 16]>::try_from(out) {
            Ok(out) => {
                *out = self.to_bytes();
                Ok(())
            }
            Err(_) => Err(LengthError::new(len)),
        }
    }

    /// Reads a vector from memory.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for reads of 16 bytes and aligned to 16 bytes.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn load(ptr: *const Self) -> Self {
        // SAFETY: ensured by caller.
        unsafe { ptr.read() }
    }

    /// Reads a vector from memory, without any alignment requirement.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for reads of 16 bytes.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn loadu(ptr: *const Self) -> Self {
        // SAFETY: ensured by caller.
        unsafe { ptr.read_unaligned() }
    }

    /// Writes the vector to memory.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for writes of 16 bytes and aligned to 16 bytes.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn store(self, ptr: *mut Self) {
        // SAFETY: ensured by caller.
        unsafe { ptr.write(self) }
    }

    /// Writes the vector to memory, without any alignment requirement.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for writes of 16 bytes.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn storeu(self, ptr: *mut Self) {
        // SAFETY: ensured by caller.
        unsafe { ptr.write_unaligned(self) }
    }
}

struct LaneCheck<V, const L: usize>(PhantomData<V>);

impl<V: Vector, const L: usize> LaneCheck<V, L> {
    const INDEX: usize = {
        assert!(L < V::LANES, "lane index out of range");
        L
    };
}

/// A 128-bit vector interpreted as a fixed number of lanes.
pub trait Vector: Bits128 + PartialEq {
    /// The type of each lane. Mask lanes are represented as [`bool`].
    type Lane: Copy + core::fmt::Debug + PartialEq;

    /// An array containing every lane.
    type Lanes: Copy
        + core::fmt::Debug
        + Default
        + AsRef<[Self::Lane]>
        + AsMut<[Self::Lane]>;

    /// The number of lanes, always `128 / lane width`.
    const LANES: usize;

    /// Creates a vector from an array of lanes.
    fn from_lanes(lanes: Self::Lanes) -> Self;

    /// Returns an array containing each lane.
    fn to_lanes(self) -> Self::Lanes;

    /// Returns the lane at index `L`.
    ///
    /// An `L` that is not less than [`LANES`](Vector::LANES) fails to compile.
    #[inline]
    fn extract_lane<const L: usize>(self) -> Self::Lane {
        self.to_lanes().as_ref()[LaneCheck::<Self, L>::INDEX]
    }

    /// Returns a copy of the vector with the lane at index `L` replaced.
    ///
    /// An `L` that is not less than [`LANES`](Vector::LANES) fails to compile.
    ///
    /// The bits of every other lane are left unchanged, even for mask lanes that are only
    /// partially set.
    #[inline]
    fn replace_lane<const L: usize>(self, lane: Self::Lane) -> Self {
        let index = LaneCheck::<Self, L>::INDEX;
        let mut lanes = Self::Lanes::default();
        lanes.as_mut()[index] = lane;

        let width = 16 / Self::LANES;
        let range = index * width..(index + 1) * width;
        let mut bytes = self.to_bytes();
        bytes[range.clone()].copy_from_slice(&Self::from_lanes(lanes).to_bytes()[range]);
        Self::from_bytes(bytes)
    }
}

/// Vectors of integer or floating-point lanes, which can be created from a single lane value.
pub trait Splat: Vector {
    /// Creates a vector with every lane set to `x`.
    fn splat(x: Self::Lane) -> Self;

    /// Reads a single lane value from memory and copies it to every lane.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for reads of one lane. No alignment is required.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn load_splat(ptr: *const Self::Lane) -> Self {
        // SAFETY: ensured by caller.
        Self::splat(unsafe { ptr.read_unaligned() })
    }

    /// Reads a single lane value from memory into the lane at index `L`.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for reads of one lane. No alignment is required.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn load_lane<const L: usize>(self, ptr: *const Self::Lane) -> Self {
        // SAFETY: ensured by caller.
        self.replace_lane::<L>(unsafe { ptr.read_unaligned() })
    }

    /// Writes the lane at index `L` to memory.
    ///
    /// # Safety
    ///
    /// The `ptr` must be [valid] for writes of one lane. No alignment is required.
    ///
    /// [valid]: core::ptr#safety
    #[inline]
    unsafe fn store_lane<const L: usize>(self, ptr: *mut Self::Lane) {
        let lane = self.extract_lane::<L>();
        // SAFETY: ensured by caller.
        unsafe { ptr.write_unaligned(lane) }
    }
}

/// Tests whether any bit in a vector is set.
pub trait AnyTrue: Bits128 {
    /// Returns `true` if any bit is set.
    #[inline]
    fn any_true(self) -> bool {
        self.to_v128().to_bits() != 0
    }
}

/// Lane-wise truth tests on integer and mask vectors.
pub trait AllTrue: Vector {
    /// Returns `true` if every lane is non-zero.
    fn all_true(self) -> bool;

    /// Collects the most significant bit of each lane, lane `i` becoming bit `i` of the result.
    fn bitmask(self) -> u16;
}

/// Bitwise `self & !rhs`.
///
/// Besides same-typed operands, this is implemented between a value vector and the mask
/// vector of the same lane width, in either order. The result is always the value type.
pub trait AndNot<Rhs = Self>: sealed::Sealed {
    /// The resulting type.
    type Output;

    /// Computes `self & !rhs`.
    fn andnot(self, rhs: Rhs) -> Self::Output;
}

/// Bitwise selection between two vectors, controlled by a vector of bits.
///
/// The control operand is either the vector's own type, or the unsigned integer vector with the
/// same lane width.
pub trait BitSelect<C: Bits128 = Self>: Bits128 {
    /// Takes each bit from `self` where the corresponding bit of `control` is set, and from
    /// `other` where it is clear.
    fn bitselect(self, other: Self, control: C) -> Self;
}

/// Lane-wise selection between two vectors, controlled by a mask vector.
///
/// This is the same operation as [`BitSelect`], with the control restricted to a mask type.
pub trait Blend: Bits128 {
    /// The mask vector with the same lane width.
    type Mask: Vector<Lane = bool>;

    /// Takes each lane from `self` where the corresponding `mask` lane is `true`, and from
    /// `other` otherwise.
    fn blend(self, other: Self, mask: Self::Mask) -> Self;
}

/// Lane-wise comparisons, producing masks.
pub trait Compare: Vector {
    /// The mask vector with the same lane width.
    type Mask: Vector<Lane = bool>;

    /// Lane-wise `==`.
    fn eq(self, rhs: Self) -> Self::Mask;
    /// Lane-wise `!=`.
    fn ne(self, rhs: Self) -> Self::Mask;
    /// Lane-wise `<`.
    fn lt(self, rhs: Self) -> Self::Mask;
    /// Lane-wise `<=`.
    fn le(self, rhs: Self) -> Self::Mask;
    /// Lane-wise `>`.
    fn gt(self, rhs: Self) -> Self::Mask;
    /// Lane-wise `>=`.
    fn ge(self, rhs: Self) -> Self::Mask;
}

/// Lane-wise absolute value.
pub trait Abs: Vector {
    /// Computes the absolute value of each lane. For integers, `MIN` maps to itself.
    fn abs(self) -> Self;
}

/// Lane-wise minimum and maximum.
pub trait MinMax: Vector {
    /// Lane-wise minimum.
    fn min(self, rhs: Self) -> Self;
    /// Lane-wise maximum.
    fn max(self, rhs: Self) -> Self;
}

/// Lane-wise pseudo-minimum and pseudo-maximum of floating-point lanes.
pub trait PseudoMinMax: Vector {
    /// Computes `if rhs < self { rhs } else { self }` for each lane.
    fn pmin(self, rhs: Self) -> Self;
    /// Computes `if self < rhs { rhs } else { self }` for each lane.
    fn pmax(self, rhs: Self) -> Self;
}

/// Lane-wise rounding of floating-point lanes.
pub trait Round: Vector {
    /// Rounds toward positive infinity.
    fn ceil(self) -> Self;
    /// Rounds toward negative infinity.
    fn floor(self) -> Self;
    /// Rounds toward zero.
    fn trunc(self) -> Self;
    /// Rounds to the nearest integer, ties to even.
    fn nearest(self) -> Self;
}

/// Lane-wise square root.
pub trait Sqrt: Vector {
    /// Computes the square root of each lane.
    fn sqrt(self) -> Self;
}

/// Lane-wise saturating integer arithmetic.
pub trait SaturatingArith: Vector {
    /// Adds, clamping to the range of the lane type.
    fn add_sat(self, rhs: Self) -> Self;
    /// Subtracts, clamping to the range of the lane type.
    fn sub_sat(self, rhs: Self) -> Self;
}

/// Lane-wise rounding average of unsigned integer lanes.
pub trait AvgRound: Vector {
    /// Computes `(self + rhs + 1) / 2` without overflow.
    fn avgr(self, rhs: Self) -> Self;
}

/// Lane-wise shifts by a scalar count.
///
/// The count is taken modulo the lane width. Right shifts are arithmetic for signed lanes and
/// logical for unsigned lanes.
pub trait Shift: Vector {
    /// Shifts each lane left.
    fn shl(self, count: u32) -> Self;
    /// Shifts each lane right.
    fn shr(self, count: u32) -> Self;
}

/// Lane-wise population count.
pub trait Popcnt: Vector {
    /// Counts the bits set in each lane.
    fn popcnt(self) -> Self;
}

/// Widening of integer lanes to twice their width.
pub trait Extend: Vector {
    /// The vector with lanes of twice the width.
    type Wide: Vector;

    /// Widens the lower half of the lanes.
    fn extend_low(self) -> Self::Wide;
    /// Widens the upper half of the lanes.
    fn extend_high(self) -> Self::Wide;
}

/// Widening multiplication of integer lanes.
pub trait ExtMul: Extend {
    /// Multiplies the lower half of the lanes, producing double-width products.
    fn extmul_low(self, rhs: Self) -> Self::Wide;
    /// Multiplies the upper half of the lanes, producing double-width products.
    fn extmul_high(self, rhs: Self) -> Self::Wide;
}

/// Widening addition of adjacent pairs of integer lanes.
pub trait ExtAddPairwise: Extend {
    /// Adds lanes `2i` and `2i + 1` into double-width lane `i`.
    fn extadd_pairwise(self) -> Self::Wide;
}

/// Saturating narrowing of integer lanes to half their width.
pub trait Narrow: Vector {
    /// The vector with lanes of half the width.
    type Narrow: Vector;

    /// Narrows the lanes of `self` into the lower half of the result and the lanes of `high`
    /// into the upper half, saturating values that do not fit.
    fn narrow(self, high: Self) -> Self::Narrow;
}

/// Selection of byte lanes using indices computed at run time.
pub trait Swizzle: Vector {
    /// Lane `i` of the result is lane `indices[i]` of `self`, or `0` if the index is not less
    /// than 16.
    fn swizzle(self, indices: U8x16) -> Self;
}

/// A list of lane indices for [`Shuffle`], known at compile time.
///
/// Usually implemented by the [`shuffle!`](crate::shuffle!) macro. This is the only trait in the
/// module that other crates may implement.
pub trait ShuffleIndices {
    /// One index per lane of the output. Indices less than the number of lanes select from the
    /// first operand, the remaining indices select from the second.
    const INDICES: &'static [usize];
}

/// Selection of lanes from two vectors using indices known at compile time.
///
/// An index list of the wrong length, or containing an index not less than twice the number of
/// lanes, fails to compile.
pub trait Shuffle: Vector {
    /// Selects the lanes of the result from `self` and `other`.
    fn shuffle<I: ShuffleIndices>(self, other: Self) -> Self;
}

/// Shuffles the lanes of two vectors using a list of constant indices.
///
/// ```
/// use wasmv::{shuffle, I32x4};
///
/// let a = I32x4::new(0, 1, 2, 3);
/// let b = I32x4::new(4, 5, 6, 7);
/// assert_eq!(shuffle!(a, b, [7, 0, 5, 2]).to_lanes(), [7, 0, 5, 2]);
/// ```
#[macro_export]
macro_rules! shuffle {
    ($a:expr, $b:expr, [$($index:expr),+ $(,)?]) => {{
        struct Indices;

        impl $crate::generic::ShuffleIndices for Indices {
            const INDICES: &'static [usize] = &[$($index),+];
        }

        $crate::generic::Shuffle::shuffle::<Indices>($a, $b)
    }};
}

/// Creates a vector with every lane set to `x`.
#[inline]
pub fn splat<V: Splat>(x: V::Lane) -> V {
    V::splat(x)
}

/// Creates a vector from an array of lanes.
#[inline]
pub fn from_lanes<V: Vector>(lanes: V::Lanes) -> V {
    V::from_lanes(lanes)
}

/// Returns an array containing each lane.
#[inline]
pub fn to_lanes<V: Vector>(v: V) -> V::Lanes {
    v.to_lanes()
}

/// Returns the lane at index `L`.
#[inline]
pub fn extract_lane<const L: usize, V: Vector>(v: V) -> V::Lane {
    v.extract_lane::<L>()
}

/// Replaces the lane at index `L`.
#[inline]
pub fn replace_lane<const L: usize, V: Vector>(v: V, lane: V::Lane) -> V {
    v.replace_lane::<L>(lane)
}

/// Reads a vector from aligned memory.
///
/// # Safety
///
/// See [`Bits128::load()`].
#[inline]
pub unsafe fn load<V: Bits128>(ptr: *const V) -> V {
    // SAFETY: ensured by caller.
    unsafe { V::load(ptr) }
}

/// Reads a vector from memory without any alignment requirement.
///
/// # Safety
///
/// See [`Bits128::loadu()`].
#[inline]
pub unsafe fn loadu<V: Bits128>(ptr: *const V) -> V {
    // SAFETY: ensured by caller.
    unsafe { V::loadu(ptr) }
}

/// Writes a vector to aligned memory.
///
/// # Safety
///
/// See [`Bits128::store()`].
#[inline]
pub unsafe fn store<V: Bits128>(ptr: *mut V, v: V) {
    // SAFETY: ensured by caller.
    unsafe { v.store(ptr) }
}

/// Writes a vector to memory without any alignment requirement.
///
/// # Safety
///
/// See [`Bits128::storeu()`].
#[inline]
pub unsafe fn storeu<V: Bits128>(ptr: *mut V, v: V) {
    // SAFETY: ensured by caller.
    unsafe { v.storeu(ptr) }
}

/// Reads one lane value from memory and copies it to every lane.
///
/// # Safety
///
/// See [`Splat::load_splat()`].
#[inline]
pub unsafe fn load_splat<V: Splat>(ptr: *const V::Lane) -> V {
    // SAFETY: ensured by caller.
    unsafe { V::load_splat(ptr) }
}

macro_rules! binary_ops {
    {$(
        $(#[$meta:meta])*
        $op:ident: $bound:path => $body:expr;
    )*} => {$(
        $(#[$meta])*
        #[inline]
        pub fn $op<V: Vector + $bound>(a: V, b: V) -> V {
            $body(a, b)
        }
    )*};
}

binary_ops! {
    /// Lane-wise wrapping addition.
    add: core::ops::Add<Output = V> => core::ops::Add::add;
    /// Lane-wise wrapping subtraction.
    sub: core::ops::Sub<Output = V> => core::ops::Sub::sub;
    /// Lane-wise wrapping multiplication.
    mul: core::ops::Mul<Output = V> => core::ops::Mul::mul;
    /// Lane-wise division of floating-point lanes.
    div: core::ops::Div<Output = V> => core::ops::Div::div;
    /// Lane-wise minimum.
    min: MinMax => MinMax::min;
    /// Lane-wise maximum.
    max: MinMax => MinMax::max;
    /// Lane-wise pseudo-minimum.
    pmin: PseudoMinMax => PseudoMinMax::pmin;
    /// Lane-wise pseudo-maximum.
    pmax: PseudoMinMax => PseudoMinMax::pmax;
    /// Lane-wise rounding average.
    avgr: AvgRound => AvgRound::avgr;
    /// Lane-wise saturating addition.
    add_sat: SaturatingArith => SaturatingArith::add_sat;
    /// Lane-wise saturating subtraction.
    sub_sat: SaturatingArith => SaturatingArith::sub_sat;
}

macro_rules! unary_ops {
    {$(
        $(#[$meta:meta])*
        $op:ident: $bound:path => $body:expr;
    )*} => {$(
        $(#[$meta])*
        #[inline]
        pub fn $op<V: Vector + $bound>(a: V) -> V {
            $body(a)
        }
    )*};
}

unary_ops! {
    /// Lane-wise negation.
    neg: core::ops::Neg<Output = V> => core::ops::Neg::neg;
    /// Lane-wise absolute value.
    abs: Abs => Abs::abs;
    /// Lane-wise square root.
    sqrt: Sqrt => Sqrt::sqrt;
    /// Lane-wise rounding toward positive infinity.
    ceil: Round => Round::ceil;
    /// Lane-wise rounding toward negative infinity.
    floor: Round => Round::floor;
    /// Lane-wise rounding toward zero.
    trunc: Round => Round::trunc;
    /// Lane-wise rounding to the nearest integer, ties to even.
    nearest: Round => Round::nearest;
    /// Lane-wise population count.
    popcnt: Popcnt => Popcnt::popcnt;
}

macro_rules! comparisons {
    ($($op:ident = $description:literal;)*) => {$(
        #[doc = concat!("Lane-wise `", $description, "`, producing a mask.")]
        #[inline]
        pub fn $op<V: Compare>(a: V, b: V) -> V::Mask {
            Compare::$op(a, b)
        }
    )*};
}

comparisons! {
    eq = "==";
    ne = "!=";
    lt = "<";
    le = "<=";
    gt = ">";
    ge = ">=";
}

/// Lane-wise shift left, with the count taken modulo the lane width.
#[inline]
pub fn shl<V: Shift>(a: V, count: u32) -> V {
    Shift::shl(a, count)
}

/// Lane-wise shift right, with the count taken modulo the lane width.
///
/// Signed lanes are shifted arithmetically, unsigned lanes logically.
#[inline]
pub fn shr<V: Shift>(a: V, count: u32) -> V {
    Shift::shr(a, count)
}

/// Bitwise AND.
///
/// Either both operands have the same type, or one is a mask and the other is a value of the
/// same lane width, in which case the result is the value type.
#[inline]
pub fn and<A, B>(a: A, b: B) -> A::Output
where
    A: Bits128 + core::ops::BitAnd<B>,
    B: Bits128,
{
    a & b
}

/// Bitwise OR, accepting the same operand combinations as [`and()`].
#[inline]
pub fn or<A, B>(a: A, b: B) -> A::Output
where
    A: Bits128 + core::ops::BitOr<B>,
    B: Bits128,
{
    a | b
}

/// Bitwise XOR, accepting the same operand combinations as [`and()`].
#[inline]
pub fn xor<A, B>(a: A, b: B) -> A::Output
where
    A: Bits128 + core::ops::BitXor<B>,
    B: Bits128,
{
    a ^ b
}

/// Bitwise `a & !b`, accepting the same operand combinations as [`and()`].
#[inline]
pub fn andnot<A, B>(a: A, b: B) -> A::Output
where
    A: Bits128 + AndNot<B>,
    B: Bits128,
{
    a.andnot(b)
}

/// Bitwise NOT.
#[inline]
pub fn not<V: Bits128 + core::ops::Not<Output = V>>(a: V) -> V {
    !a
}

/// Takes each bit from `a` where `control` is set and from `b` where it is clear.
#[inline]
pub fn bitselect<V: BitSelect<C>, C: Bits128>(a: V, b: V, control: C) -> V {
    a.bitselect(b, control)
}

/// Takes each lane from `a` where `mask` is `true` and from `b` otherwise.
#[inline]
pub fn blend<V: Blend>(a: V, b: V, mask: V::Mask) -> V {
    a.blend(b, mask)
}

/// Returns `true` if any bit is set.
#[inline]
pub fn any_true<V: AnyTrue>(a: V) -> bool {
    a.any_true()
}

/// Returns `true` if every lane is non-zero.
#[inline]
pub fn all_true<V: AllTrue>(a: V) -> bool {
    a.all_true()
}

/// Collects the most significant bit of each lane.
#[inline]
pub fn bitmask<V: AllTrue>(a: V) -> u16 {
    a.bitmask()
}

/// Widens the lower half of the lanes.
#[inline]
pub fn extend_low<V: Extend>(a: V) -> V::Wide {
    a.extend_low()
}

/// Widens the upper half of the lanes.
#[inline]
pub fn extend_high<V: Extend>(a: V) -> V::Wide {
    a.extend_high()
}

/// Widening multiplication of the lower half of the lanes.
#[inline]
pub fn extmul_low<V: ExtMul>(a: V, b: V) -> V::Wide {
    a.extmul_low(b)
}

/// Widening multiplication of the upper half of the lanes.
#[inline]
pub fn extmul_high<V: ExtMul>(a: V, b: V) -> V::Wide {
    a.extmul_high(b)
}

/// Widening addition of adjacent lane pairs.
#[inline]
pub fn extadd_pairwise<V: ExtAddPairwise>(a: V) -> V::Wide {
    a.extadd_pairwise()
}

/// Saturating narrowing of `low` and `high` into one vector.
#[inline]
pub fn narrow<V: Narrow>(low: V, high: V) -> V::Narrow {
    low.narrow(high)
}

/// Selects byte lanes using indices computed at run time.
#[inline]
pub fn swizzle<V: Swizzle>(a: V, indices: U8x16) -> V {
    a.swizzle(indices)
}

/// Reinterprets the bits of a vector as another 128-bit type.
#[inline]
pub fn reinterpret<T: Bits128, V: Bits128>(v: V) -> T {
    v.reinterpret()
}

macro_rules! reinterpret_as {
    ($($to:ident as $prefix:ident),*) => {$(
        paste::paste! {
            #[doc = concat!("Reinterprets the bits of any 128-bit vector as [`", stringify!($to), "`].")]
            #[inline]
            pub fn [<as_ $prefix>]<V: Bits128>(v: V) -> $to {
                v.reinterpret()
            }
        }
    )*};
}

reinterpret_as! {
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
