mod bbox;
mod hex;
mod line;

pub(crate) use bbox::{bounds, candidates_at, index, BoundingBox};
pub use hex::hex_grid;
pub(crate) use line::{boundary_lines, distance_km, distance_to_lines_km};
