use wasmv::v128::*;

#[test]
fn extension_keeps_signedness() {
    let v = I8x16::new(-1, 2, -128, 127, 0, 0, 0, 0, 5, 6, 7, 8, -9, -10, -11, -12);
    assert_eq!(i16x8_extend_low_i8x16(v).to_lanes(), [-1, 2, -128, 127, 0, 0, 0, 0]);
    assert_eq!(i16x8_extend_high_i8x16(v).to_lanes(), [5, 6, 7, 8, -9, -10, -11, -12]);

    let u = U8x16::splat(255);
    assert_eq!(u16x8_extend_low_u8x16(u), U16x8::splat(255));

    let v = I32x4::new(i32::MIN, -1, 1, i32::MAX);
    assert_eq!(i64x2_extend_low_i32x4(v).to_lanes(), [i64::from(i32::MIN), -1]);
    assert_eq!(i64x2_extend_high_i32x4(v).to_lanes(), [1, i64::from(i32::MAX)]);
    assert_eq!(
        u64x2_extend_high_u32x4(U32x4::new(0, 0, u32::MAX, 7)).to_lanes(),
        [u64::from(u32::MAX), 7]
    );
}

#[test]
fn extended_multiplication() {
    let a = I8x16::splat(-128);
    assert_eq!(i16x8_extmul_low_i8x16(a, a), I16x8::splat(16384));

    let u = U8x16::new(255, 2, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 255);
    assert_eq!(
        u16x8_extmul_low_u8x16(u, u).to_lanes(),
        [65025, 4, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
        u16x8_extmul_high_u8x16(u, u).to_lanes(),
        [9, 0, 0, 0, 0, 0, 0, 65025]
    );

    let v = I32x4::new(i32::MIN, 2, -3, i32::MAX);
    assert_eq!(i64x2_extmul_low_i32x4(v, v).to_lanes(), [1 << 62, 4]);
    assert_eq!(
        i64x2_extmul_high_i32x4(v, I32x4::splat(-1)).to_lanes(),
        [3, -i64::from(i32::MAX)]
    );
    assert_eq!(
        u32x4_extmul_high_u16x8(U16x8::splat(u16::MAX), U16x8::splat(u16::MAX)),
        U32x4::splat(0xFFFE_0001)
    );
}

#[test]
fn pairwise_addition() {
    assert_eq!(i16x8_extadd_pairwise_i8x16(I8x16::splat(-128)), I16x8::splat(-256));
    assert_eq!(u32x4_extadd_pairwise_u16x8(U16x8::splat(u16::MAX)), U32x4::splat(131070));
    assert_eq!(
        i32x4_extadd_pairwise_i16x8(I16x8::new(1, 2, -3, -4, i16::MAX, i16::MAX, 0, -1)).to_lanes(),
        [3, -7, 65534, -1]
    );
    assert_eq!(u16x8_extadd_pairwise_u8x16(U8x16::splat(255)), U16x8::splat(510));
}

#[test]
fn narrowing_saturates() {
    let low = I16x8::new(300, -300, 127, -128, 0, 1, -1, 200);
    let high = I16x8::splat(-129);
    assert_eq!(
        i8x16_narrow_i16x8(low, high).to_lanes(),
        [127, -128, 127, -128, 0, 1, -1, 127, -128, -128, -128, -128, -128, -128, -128, -128]
    );
    assert_eq!(
        u8x16_narrow_i16x8(low, high).to_lanes(),
        [255, 0, 127, 0, 0, 1, 0, 200, 0, 0, 0, 0, 0, 0, 0, 0]
    );

    let wide = I32x4::new(70000, -70000, 65535, -1);
    assert_eq!(
        u16x8_narrow_i32x4(wide, wide).to_lanes(),
        [65535, 0, 65535, 0, 65535, 0, 65535, 0]
    );
    assert_eq!(
        i16x8_narrow_i32x4(wide, I32x4::splat(5)).to_lanes(),
        [i16::MAX, i16::MIN, i16::MAX, -1, 5, 5, 5, 5]
    );

    let wide = U32x4::new(1, 70000, 3, u32::MAX);
    assert_eq!(
        u16x8_narrow_u32x4(wide, U32x4::splat(0)).to_lanes(),
        [1, u16::MAX, 3, u16::MAX, 0, 0, 0, 0]
    );
    assert_eq!(u8x16_narrow_u16x8(U16x8::splat(256), U16x8::splat(255)).to_lanes()[..9], [255; 9]);
}

#[test]
fn integer_to_float() {
    let v = I32x4::new(-1, 0, 16_777_217, i32::MIN);
    assert_eq!(f32x4_convert_i32x4(v).to_lanes(), [-1.0, 0.0, 16_777_216.0, -2_147_483_648.0]);

    let u = U32x4::new(u32::MAX, 1, 0, 3);
    assert_eq!(f32x4_convert_u32x4(u).to_lanes(), [4_294_967_296.0, 1.0, 0.0, 3.0]);

    assert_eq!(f64x2_convert_low_i32x4(I32x4::new(-7, 8, 100, 100)).to_lanes(), [-7.0, 8.0]);
    assert_eq!(
        f64x2_convert_low_u32x4(U32x4::new(u32::MAX, 8, 100, 100)).to_lanes(),
        [4_294_967_295.0, 8.0]
    );
}

#[test]
fn float_to_integer_saturates() {
    let f = F32x4::new(f32::NAN, -1.5, 3e9, -3e9);
    assert_eq!(i32x4_trunc_sat_f32x4(f).to_lanes(), [0, -1, i32::MAX, i32::MIN]);
    assert_eq!(u32x4_trunc_sat_f32x4(f).to_lanes(), [0, 0, 3_000_000_000, 0]);

    let f = F64x2::new(1e10, -2.5);
    assert_eq!(i32x4_trunc_sat_f64x2_zero(f).to_lanes(), [i32::MAX, -2, 0, 0]);
    assert_eq!(u32x4_trunc_sat_f64x2_zero(f).to_lanes(), [u32::MAX, 0, 0, 0]);
    assert_eq!(
        u32x4_trunc_sat_f64x2_zero(F64x2::new(f64::NAN, 4.99)).to_lanes(),
        [0, 4, 0, 0]
    );
}

#[test]
fn float_width_changes() {
    let d = f32x4_demote_f64x2_zero(F64x2::new(1.5, 1e300));
    assert_eq!(d.to_lanes(), [1.5, f32::INFINITY, 0.0, 0.0]);

    let p = f64x2_promote_low_f32x4(F32x4::new(1.5, -0.25, 9.0, 9.0));
    assert_eq!(p.to_lanes(), [1.5, -0.25]);
}
