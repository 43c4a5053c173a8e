//! Checks that the generic operations resolve to the concretely-typed functions.

use wasmv::generic::{self, Vector};
use wasmv::v128::*;

fn sum_lanes<V>(v: V) -> V::Lane
where
    V: Vector,
    V::Lane: core::ops::Add<Output = V::Lane> + Default,
{
    v.to_lanes()
        .as_ref()
        .iter()
        .fold(V::Lane::default(), |sum, &lane| sum + lane)
}

#[test]
fn lane_access() {
    let v: F64x2 = generic::splat(1.5);
    assert_eq!(v, f64x2_splat(1.5));
    assert_eq!(generic::from_lanes::<I16x8>([1, 2, 3, 4, 5, 6, 7, 8]), i16x8_make(1, 2, 3, 4, 5, 6, 7, 8));
    assert_eq!(generic::to_lanes(B32x4::new(true, false, true, true)), [true, false, true, true]);
    assert_eq!(generic::extract_lane::<1, _>(I64x2::new(7, 8)), i64x2_extract_lane::<1>(I64x2::new(7, 8)));
    assert_eq!(
        generic::replace_lane::<0, _>(F32x4::splat(1.0), 2.0),
        f32x4_replace_lane::<0>(F32x4::splat(1.0), 2.0)
    );

    assert_eq!(sum_lanes(I32x4::new(1, 2, 3, 4)), 10);
    assert_eq!(sum_lanes(F64x2::new(0.5, 0.25)), 0.75);
    assert_eq!(sum_lanes(U8x16::splat(2)), 32);
}

#[test]
fn arithmetic() {
    let a = I16x8::new(1, 2, 3, 4, 5, 6, 7, i16::MAX);
    let b = I16x8::splat(3);
    assert_eq!(generic::add(a, b), i16x8_add(a, b));
    assert_eq!(generic::sub(a, b), i16x8_sub(a, b));
    assert_eq!(generic::mul(a, b), i16x8_mul(a, b));
    assert_eq!(generic::neg(a), i16x8_neg(a));
    assert_eq!(generic::abs(a), i16x8_abs(a));
    assert_eq!(generic::min(a, b), i16x8_min(a, b));
    assert_eq!(generic::max(a, b), i16x8_max(a, b));
    assert_eq!(generic::add_sat(a, b), i16x8_add_sat(a, b));
    assert_eq!(generic::sub_sat(a, b), i16x8_sub_sat(a, b));
    assert_eq!(generic::popcnt(a), i16x8_popcnt(a));
    assert_eq!(generic::shl(a, 3), i16x8_shl(a, 3));
    assert_eq!(generic::shr(a, 3), i16x8_shr(a, 3));

    let u = U8x16::splat(7);
    assert_eq!(generic::avgr(u, U8x16::splat(10)), u8x16_avgr(u, U8x16::splat(10)));

    let f = F32x4::new(2.5, -0.5, 9.0, 1.0);
    let g = F32x4::splat(2.0);
    assert_eq!(generic::div(f, g), f32x4_div(f, g));
    assert_eq!(generic::sqrt(f).to_lanes()[2], 3.0);
    assert_eq!(generic::nearest(f), f32x4_nearest(f));
    assert_eq!(generic::ceil(f), f32x4_ceil(f));
    assert_eq!(generic::floor(f), f32x4_floor(f));
    assert_eq!(generic::trunc(f), f32x4_trunc(f));
    assert_eq!(generic::pmin(f, g), f32x4_pmin(f, g));
    assert_eq!(generic::pmax(f, g), f32x4_pmax(f, g));
}

#[test]
fn comparisons() {
    let a = U32x4::new(1, 5, 3, u32::MAX);
    let b = U32x4::splat(3);
    assert_eq!(generic::eq(a, b), u32x4_eq(a, b));
    assert_eq!(generic::ne(a, b), u32x4_ne(a, b));
    assert_eq!(generic::lt(a, b), u32x4_lt(a, b));
    assert_eq!(generic::le(a, b), u32x4_le(a, b));
    assert_eq!(generic::gt(a, b), u32x4_gt(a, b));
    assert_eq!(generic::ge(a, b), u32x4_ge(a, b));

    let m: B64x2 = generic::lt(F64x2::new(1.0, 3.0), F64x2::splat(2.0));
    assert_eq!(m.to_lanes(), [true, false]);
}

#[test]
fn bitwise_with_masks() {
    let v = I32x4::new(1, 2, 3, 4);
    let m = B32x4::new(false, true, true, false);

    assert_eq!(generic::and(v, m), i32x4_and_b32x4(v, m));
    assert_eq!(generic::and(m, v), i32x4_and_b32x4(v, m));
    assert_eq!(generic::or(m, v), i32x4_or_b32x4(v, m));
    assert_eq!(generic::xor(v, m), i32x4_xor_b32x4(v, m));
    assert_eq!(generic::andnot(v, m), i32x4_andnot_b32x4(v, m));
    assert_eq!(generic::andnot(m, v), b32x4_andnot_i32x4(m, v));
    assert_eq!(generic::and(v, v), i32x4_and(v, v));
    assert_eq!(generic::and(m, m), b32x4_and(m, m));
    assert_eq!(generic::not(m), b32x4_not(m));

    assert_eq!(generic::blend(v, -v, m), i32x4_blend(v, -v, m));
    assert_eq!(
        generic::bitselect(v, -v, U32x4::splat(0xFF)),
        i32x4_bitselect(v, -v, U32x4::splat(0xFF))
    );
    assert!(generic::any_true(m));
    assert!(!generic::all_true(m));
    assert_eq!(generic::bitmask(m), b32x4_bitmask(m));
}

#[test]
fn conversions() {
    let v = I8x16::new(-1, 2, -3, 4, -5, 6, -7, 8, 9, -10, 11, -12, 13, -14, 15, -16);
    assert_eq!(generic::extend_low(v), i16x8_extend_low_i8x16(v));
    assert_eq!(generic::extend_high(v), i16x8_extend_high_i8x16(v));
    assert_eq!(generic::extmul_low(v, v), i16x8_extmul_low_i8x16(v, v));
    assert_eq!(generic::extmul_high(v, v), i16x8_extmul_high_i8x16(v, v));
    assert_eq!(generic::extadd_pairwise(v), i16x8_extadd_pairwise_i8x16(v));

    let wide = U32x4::new(1, 70000, 3, u32::MAX);
    assert_eq!(generic::narrow(wide, wide), u16x8_narrow_u32x4(wide, wide));

    let indices = U8x16::new(15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
    assert_eq!(generic::swizzle(v, indices), i8x16_swizzle(v, indices));
}

#[test]
fn reinterpretation() {
    let v = I32x4::new(-1, 0, 1, 2);
    assert_eq!(generic::reinterpret::<U16x8, _>(v), i32x4_as_u16x8(v));
    assert_eq!(generic::as_u32x4(generic::as_f32x4(v)), i32x4_as_u32x4(v));
    assert_eq!(generic::as_b8x16(v), i32x4_as_b8x16(v));
    assert_eq!(generic::as_v128(v), V128::from(v));
    assert_eq!(generic::as_i32x4(generic::as_v128(v)), v);
}

#[test]
fn memory() {
    let data = [U16x8::splat(3), U16x8::splat(4)];
    assert_eq!(unsafe { generic::load(&data[1]) }, unsafe { u16x8_load(&data[1]) });
    assert_eq!(unsafe { generic::loadu(&data[0]) }, unsafe { u16x8_loadu(&data[0]) });

    let mut out = U16x8::default();
    unsafe { generic::store(&mut out, data[1]) };
    assert_eq!(out, data[1]);

    let lane = 9u16;
    assert_eq!(unsafe { generic::load_splat::<U16x8>(&lane) }, unsafe { u16x8_load_splat(&lane) });
}
