fn main() {
    // The library and its tests build without the webview toolchain; only the
    // desktop shell needs the generated Tauri context.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
