#![doc = "hexmap public API"]
pub mod console;
mod color;
mod common;
mod config;
mod geom;
mod grid;
mod io;
mod map;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;

#[doc(inline)]
pub use color::{parse_color, Rgb};

#[doc(inline)]
pub use config::{GridConfig, DEFAULT_CELL_SIZE_KM, DEFAULT_OUTLINE_ALPHA_MULTIPLIER, MIN_CELL_SIZE_KM};

#[doc(inline)]
pub use geom::hex_grid;

#[doc(inline)]
pub use grid::{build_hex_grid, prepare_layer, CompositedCell, LayerMeta};

#[doc(inline)]
pub use io::{cells_to_geojson, fill_layers, find_anchor_layer, parse_geojson, read_geojson, MapData, HEX_LAYER_BOTTOM, HEX_LAYER_TOP};

#[doc(inline)]
pub use map::{sort_by_z_index, Area, Pin};
