fn main() {
    use cfg_aliases::cfg_aliases;

    println!("cargo::rustc-check-cfg=cfg(simd_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_wasm32_intrinsics)");

    cfg_aliases! {
        simd_intrinsics: { feature = "simd-intrinsics" },
        simd_wasm32_intrinsics: {
            all(simd_intrinsics, target_arch = "wasm32", target_feature = "simd128")
        },
    }
}
