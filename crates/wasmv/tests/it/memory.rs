use wasmv::generic;
use wasmv::v128::*;
use wasmv::Bits128;

#[test]
fn aligned_load_and_store() {
    let values = [I32x4::new(1, 2, 3, 4), I32x4::splat(-7)];
    let v = unsafe { i32x4_load(&values[1]) };
    assert_eq!(v, I32x4::splat(-7));

    let mut out = [I32x4::default(); 2];
    unsafe { i32x4_store(&mut out[0], values[0]) };
    assert_eq!(out, [values[0], I32x4::default()]);

    let raw = unsafe { generic::load::<V128>(&V128::from_bits(42)) };
    assert_eq!(raw.to_bits(), 42);

    let mut f = F64x2::default();
    unsafe { F64x2::new(0.5, -1.0).store(&mut f) };
    assert_eq!(f.to_lanes(), [0.5, -1.0]);
}

#[test]
fn unaligned_load_and_store() {
    let bytes: [u8; 20] = core::array::from_fn(|i| i as u8);
    let v = unsafe { u8x16_loadu(bytes.as_ptr().add(3).cast()) };
    let expected: [u8; 16] = core::array::from_fn(|i| (i + 3) as u8);
    assert_eq!(v.to_lanes(), expected);

    let mut buf = [0u8; 20];
    unsafe { u8x16_storeu(buf.as_mut_ptr().add(1).cast(), v) };
    assert_eq!(buf[0], 0);
    assert_eq!(buf[1..17], expected);
    assert_eq!(buf[17..], [0, 0, 0]);

    let mut buf = [0u8; 17];
    unsafe { generic::storeu(buf.as_mut_ptr().add(1).cast::<B8x16>(), B8x16::splat(true)) };
    assert_eq!(buf[0], 0);
    assert!(buf[1..].iter().all(|&b| b == 0xFF));

    let read = unsafe { generic::loadu::<B8x16>(buf.as_ptr().add(1).cast()) };
    assert_eq!(read, B8x16::splat(true));
}

#[test]
fn load_splat() {
    let x = 0x1234_5678u32;
    assert_eq!(unsafe { u32x4_load_splat(&x) }, U32x4::splat(0x1234_5678));

    let bytes = [0u8, 0xCD, 0xAB];
    let v = unsafe { i16x8_load_splat(bytes.as_ptr().add(1).cast()) };
    assert_eq!(v, I16x8::splat(i16::from_ne_bytes([0xCD, 0xAB])));

    let f: F32x4 = unsafe { generic::load_splat(&1.25f32) };
    assert_eq!(f.to_lanes(), [1.25; 4]);
}

#[test]
fn load_zero() {
    let z = unsafe { f64x2_load_zero(&2.5f64) };
    assert_eq!(z.to_lanes(), [2.5, 0.0]);

    let z = unsafe { i32x4_load_zero(&-1i32) };
    assert_eq!(z.to_lanes(), [-1, 0, 0, 0]);
}

#[test]
fn single_lanes() {
    let v = unsafe { i16x8_load_lane::<3>(I16x8::splat(1), &-9i16) };
    assert_eq!(v.to_lanes(), [1, 1, 1, -9, 1, 1, 1, 1]);

    let mut out = 0i64;
    unsafe { i64x2_store_lane::<1>(I64x2::new(5, 6), &mut out) };
    assert_eq!(out, 6);

    let mut buf = [0u8; 5];
    unsafe { u32x4_store_lane::<2>(U32x4::new(0, 0, 0xAABB_CCDD, 0), buf.as_mut_ptr().add(1).cast()) };
    assert_eq!(buf[1..], 0xAABB_CCDDu32.to_ne_bytes());
}

#[test]
fn widening_loads() {
    let narrow: [i8; 8] = [-1, 2, -3, 4, -128, 127, 0, 1];
    let wide = unsafe { i16x8_load_extend_i8x16(&narrow) };
    assert_eq!(wide.to_lanes(), [-1, 2, -3, 4, -128, 127, 0, 1]);

    let narrow: [u16; 4] = [0xFFFF, 1, 2, 3];
    let wide = unsafe { u32x4_load_extend_u16x8(&narrow) };
    assert_eq!(wide.to_lanes(), [0xFFFF, 1, 2, 3]);

    let narrow: [i32; 2] = [i32::MIN, -1];
    let wide = unsafe { i64x2_load_extend_i32x4(&narrow) };
    assert_eq!(wide.to_lanes(), [i64::from(i32::MIN), -1]);
}
