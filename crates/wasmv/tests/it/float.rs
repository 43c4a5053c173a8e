use wasmv::v128::*;

fn sign_bits(v: F32x4) -> [bool; 4] {
    v.to_lanes().map(f32::is_sign_negative)
}

#[test]
fn arithmetic() {
    let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = F32x4::new(0.5, -2.0, 0.25, 8.0);
    assert_eq!(f32x4_add(a, b).to_lanes(), [1.5, 0.0, 3.25, 12.0]);
    assert_eq!(f32x4_sub(a, b).to_lanes(), [0.5, 4.0, 2.75, -4.0]);
    assert_eq!((a * b).to_lanes(), [0.5, -4.0, 0.75, 32.0]);
    assert_eq!((&a / &b).to_lanes(), [2.0, -1.0, 12.0, 0.5]);

    let mut c = F64x2::new(1.0, -1.0);
    c /= F64x2::splat(0.0);
    assert_eq!(c.to_lanes(), [f64::INFINITY, f64::NEG_INFINITY]);
}

#[test]
fn division_is_not_truncated() {
    let q = f64x2_div(F64x2::new(1.0, 7.0), F64x2::new(3.0, 2.0));
    assert_eq!(q.to_lanes(), [1.0 / 3.0, 3.5]);
}

#[test]
fn sign_manipulation_includes_nan() {
    let nan = u32x4_as_f32x4(U32x4::splat(0x7FC0_0000));
    assert_eq!(f32x4_as_u32x4(f32x4_neg(nan)), U32x4::splat(0xFFC0_0000));
    assert_eq!(f32x4_as_u32x4(f32x4_abs(-nan)), U32x4::splat(0x7FC0_0000));

    assert_eq!(sign_bits(-F32x4::new(0.0, -0.0, 1.0, -1.0)), [true, false, true, false]);
    assert_eq!(sign_bits(f32x4_abs(F32x4::new(-0.0, -1.0, 2.0, f32::NEG_INFINITY))), [false; 4]);
    assert_eq!(
        f64x2_abs(F64x2::new(-3.5, f64::NEG_INFINITY)).to_lanes(),
        [3.5, f64::INFINITY]
    );
}

#[test]
fn square_root() {
    let roots = f32x4_sqrt(F32x4::new(4.0, 9.0, 2.25, -1.0)).to_lanes();
    assert_eq!(roots[..3], [2.0, 3.0, 1.5]);
    assert!(roots[3].is_nan());

    assert_eq!(f64x2_sqrt(F64x2::new(0.0, f64::INFINITY)).to_lanes(), [0.0, f64::INFINITY]);
}

#[test]
fn rounding() {
    let v = F32x4::new(-1.5, -0.5, 0.5, 2.5);
    assert_eq!(f32x4_ceil(v).to_lanes(), [-1.0, -0.0, 1.0, 3.0]);
    assert_eq!(f32x4_floor(v).to_lanes(), [-2.0, -1.0, 0.0, 2.0]);
    assert_eq!(f32x4_trunc(v).to_lanes(), [-1.0, -0.0, 0.0, 2.0]);
    assert_eq!(f32x4_nearest(v).to_lanes(), [-2.0, -0.0, 0.0, 2.0]);

    assert_eq!(sign_bits(f32x4_ceil(v)), [true, true, false, false]);
    assert_eq!(sign_bits(f32x4_nearest(v)), [true, true, false, false]);

    let v = F64x2::new(3.5, -4.5);
    assert_eq!(f64x2_nearest(v).to_lanes(), [4.0, -4.0]);
    assert_eq!(f64x2_trunc(v).to_lanes(), [3.0, -4.0]);
}

#[test]
fn min_max_propagate_nan() {
    let a = F32x4::new(0.0, -0.0, f32::NAN, 1.0);
    let b = F32x4::new(-0.0, 0.0, 1.0, f32::NAN);

    let min = f32x4_min(a, b).to_lanes();
    assert_eq!(min[..2], [0.0, 0.0]);
    assert!(min[0].is_sign_negative() && min[1].is_sign_negative(), "-0.0 is the minimum");
    assert!(min[2].is_nan() && min[3].is_nan());

    let max = f32x4_max(a, b).to_lanes();
    assert!(max[0].is_sign_positive() && max[1].is_sign_positive(), "+0.0 is the maximum");
    assert!(max[2].is_nan() && max[3].is_nan());

    assert_eq!(f64x2_min(F64x2::new(1.0, -5.0), F64x2::splat(2.0)).to_lanes(), [1.0, -5.0]);
    assert_eq!(f64x2_max(F64x2::new(1.0, -5.0), F64x2::splat(2.0)).to_lanes(), [2.0, 2.0]);
}

#[test]
fn pseudo_min_max_prefer_first_operand() {
    let a = F32x4::new(f32::NAN, 1.0, 0.0, -0.0);
    let b = F32x4::new(1.0, f32::NAN, -0.0, 0.0);

    let pmin = f32x4_pmin(a, b).to_lanes();
    assert!(pmin[0].is_nan());
    assert_eq!(pmin[1], 1.0);
    assert_eq!(sign_bits(F32x4::from_lanes(pmin))[2..], [false, true]);

    let pmax = f32x4_pmax(a, b).to_lanes();
    assert!(pmax[0].is_nan());
    assert_eq!(pmax[1], 1.0);
    assert_eq!(sign_bits(F32x4::from_lanes(pmax))[2..], [false, true]);

    assert_eq!(f64x2_pmax(F64x2::new(1.0, 3.0), F64x2::new(2.0, -1.0)).to_lanes(), [2.0, 3.0]);
}

#[test]
fn comparisons_follow_ieee() {
    let a = F32x4::new(f32::NAN, -0.0, 1.0, f32::NEG_INFINITY);
    let b = F32x4::new(f32::NAN, 0.0, 2.0, -1.0);
    assert_eq!(f32x4_eq(a, b).to_lanes(), [false, true, false, false]);
    assert_eq!(f32x4_ne(a, b).to_lanes(), [true, false, true, true]);
    assert_eq!(f32x4_lt(a, b).to_lanes(), [false, false, true, true]);
    assert_eq!(f32x4_le(a, b).to_lanes(), [false, true, true, true]);
    assert_eq!(f32x4_gt(a, b).to_lanes(), [false, false, false, false]);
    assert_eq!(f32x4_ge(a, b).to_lanes(), [false, true, false, false]);

    let m = f64x2_lt(F64x2::new(1.0, 2.0), F64x2::splat(1.5));
    assert_eq!(b64x2_as_u64x2(m).to_lanes(), [u64::MAX, 0]);
}
