mod cell;
mod composite;
mod layer;

pub use cell::CompositedCell;
pub use composite::build_hex_grid;
pub use layer::{prepare_layer, LayerMeta};
