use wasm_bindgen::prelude::*;

mod common;
mod grid;
mod pins;

pub use grid::{build_hex_grid, fill_layers, find_anchor_layer, is_interactive, parse_color};
pub use pins::{pin_opens_dialog, read_pins};

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
