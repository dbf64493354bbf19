use crate::common::parse_float;

/// Hex side length used when nothing is configured.
pub const DEFAULT_CELL_SIZE_KM: f64 = 1.75;

/// Smaller cells would make the grid explode in size.
pub const MIN_CELL_SIZE_KM: f64 = 0.2;

/// Outline alpha equals fill alpha unless configured otherwise.
pub const DEFAULT_OUTLINE_ALPHA_MULTIPLIER: f64 = 1.0;

/// Page-level settings for one hex grid build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    cell_size_km: f64,
    outline_alpha_multiplier: f64,
}

impl GridConfig {
    /// Non-finite values fall back to the defaults; the cell size is floored at [`MIN_CELL_SIZE_KM`].
    pub fn new(cell_size_km: f64, outline_alpha_multiplier: f64) -> Self {
        let cell_size_km = if cell_size_km.is_finite() {
            cell_size_km.max(MIN_CELL_SIZE_KM)
        } else {
            DEFAULT_CELL_SIZE_KM
        };
        let outline_alpha_multiplier = if outline_alpha_multiplier.is_finite() {
            outline_alpha_multiplier
        } else {
            DEFAULT_OUTLINE_ALPHA_MULTIPLIER
        };

        Self { cell_size_km, outline_alpha_multiplier }
    }

    /// Build from the raw `data-grid-resolution` and `data-outline-multiplier` attribute values.
    /// Missing or unparseable values use the defaults.
    pub fn from_attributes(grid_resolution: Option<&str>, outline_multiplier: Option<&str>) -> Self {
        Self::new(
            grid_resolution.and_then(parse_float).unwrap_or(DEFAULT_CELL_SIZE_KM),
            outline_multiplier.and_then(parse_float).unwrap_or(DEFAULT_OUTLINE_ALPHA_MULTIPLIER),
        )
    }

    /// Effective hex side length, in kilometres.
    #[inline] pub fn cell_size_km(&self) -> f64 { self.cell_size_km }

    /// Factor applied to a cell's opacity to get its outline alpha.
    #[inline] pub fn outline_alpha_multiplier(&self) -> f64 { self.outline_alpha_multiplier }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE_KM, DEFAULT_OUTLINE_ALPHA_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GridConfig::default();
        assert_eq!(config.cell_size_km(), 1.75);
        assert_eq!(config.outline_alpha_multiplier(), 1.0);
    }

    #[test]
    fn cell_size_is_floored() {
        assert_eq!(GridConfig::new(0.05, 1.0).cell_size_km(), 0.2);
        assert_eq!(GridConfig::new(-3.0, 1.0).cell_size_km(), 0.2);
        assert_eq!(GridConfig::new(0.2, 1.0).cell_size_km(), 0.2);
        assert_eq!(GridConfig::new(4.0, 1.0).cell_size_km(), 4.0);
    }

    #[test]
    fn non_finite_values_use_defaults() {
        let config = GridConfig::new(f64::NAN, f64::INFINITY);
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn attribute_strings() {
        let config = GridConfig::from_attributes(Some("3.5"), Some("0.4"));
        assert_eq!(config.cell_size_km(), 3.5);
        assert_eq!(config.outline_alpha_multiplier(), 0.4);

        assert_eq!(GridConfig::from_attributes(Some("fine"), None), GridConfig::default());
        assert_eq!(GridConfig::from_attributes(Some("0.01"), None).cell_size_km(), 0.2);
    }
}
