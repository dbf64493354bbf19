mod geojson;
mod read;

pub use geojson::{cells_to_geojson, fill_layers, find_anchor_layer, HEX_LAYER_BOTTOM, HEX_LAYER_TOP};
pub use read::{parse_geojson, read_geojson, MapData};
