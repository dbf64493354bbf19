//! Log sink shared by the library, the CLI and the browser bindings.

/// Write one line to stderr, or to the browser console with the `wasm-console` feature.
pub fn write_line(line: &str) {
    #[cfg(feature = "wasm-console")]
    web_sys::console::log_1(&line.into());

    #[cfg(not(feature = "wasm-console"))]
    eprintln!("{line}");
}

/// `format!`-style logging through [`write_line`].
#[macro_export]
macro_rules! log_line {
    ($($arg:tt)*) => { $crate::console::write_line(&format!($($arg)*)) };
}
