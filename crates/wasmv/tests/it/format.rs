use wasmv::v128::*;

#[test]
fn debug_lanes() {
    insta::assert_snapshot!(format!("{:?}", I32x4::new(1, -2, 3, -4)), @"[1, -2, 3, -4]");
    insta::assert_snapshot!(format!("{:?}", U8x16::splat(7)), @"[7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7]");
    insta::assert_snapshot!(format!("{:?}", F64x2::new(1.5, f64::NEG_INFINITY)), @"[1.5, -inf]");
    insta::assert_snapshot!(format!("{:?}", F32x4::new(f32::NAN, 0.0, -0.0, 2.0)), @"[NaN, 0.0, -0.0, 2.0]");
}

#[test]
fn debug_masks() {
    insta::assert_snapshot!(
        format!("{:?}", B16x8::new(true, false, true, false, false, false, false, true)),
        @"[true, false, true, false, false, false, false, true]"
    );
    insta::assert_snapshot!(format!("{:?}", B64x2::default()), @"[false, false]");
}

#[test]
fn debug_raw_bits() {
    insta::assert_snapshot!(format!("{:?}", V128::from_bits(0xFF)), @"0x000000000000000000000000000000FF");
    insta::assert_snapshot!(format!("{:?}", V128::from_bits(u128::MAX)), @"0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
}

#[test]
fn hexadecimal_lanes() {
    insta::assert_snapshot!(
        format!("{:x}", I16x8::new(-1, 0x10, 0, 0, 0, 0, 0, 0x7FFF)),
        @"[ffff, 10, 0, 0, 0, 0, 0, 7fff]"
    );
    insta::assert_snapshot!(format!("{:X}", U32x4::new(0xDEAD_BEEF, 1, 0, 0xA)), @"[DEADBEEF, 1, 0, A]");
    insta::assert_snapshot!(format!("{:x}", B32x4::new(true, false, true, false)), @"[ffffffff, 0, ffffffff, 0]");
    insta::assert_snapshot!(format!("{:X}", i64x2_make(i64::MIN, 255)), @"[8000000000000000, FF]");
}

#[test]
fn pretty_debug() {
    insta::assert_snapshot!(format!("{:#?}", I64x2::new(1, -2)), @r###"
    [
        1,
        -2,
    ]
    "###);
}

#[test]
fn length_error() {
    let error = <U16x8 as wasmv::Bits128>::from_slice(&[0u8; 4]).unwrap_err();
    insta::assert_snapshot!(error, @"expected a slice of 16 bytes, but got 4 bytes");
    insta::assert_debug_snapshot!(error, @r###"
    LengthError {
        actual: 4,
    }
    "###);
}
