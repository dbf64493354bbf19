mod fs;
mod parse;

pub(crate) use fs::{ensure_parent_dir_exists, ensure_writable};
pub(crate) use parse::{parse_flag, parse_float};
