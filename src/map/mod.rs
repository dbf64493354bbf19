mod area;
mod pin;

pub use area::Area;
pub use pin::{sort_by_z_index, Pin};
