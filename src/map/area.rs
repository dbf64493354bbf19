use geo::MultiPolygon;

/// A CMS-authored map region with its visual parameters.
///
/// Percent-style inputs (`opacity`, `softness`, `jitter`) are on a 0-100 scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub color: String,
    pub opacity: f64,
    pub z_index: f64,
    pub softness: f64,
    pub jitter: f64,
    pub is_below_roads: bool,
    pub geometry: MultiPolygon<f64>,
}

impl Area {
    pub const DEFAULT_COLOR: &'static str = "#00959d";
    pub const DEFAULT_OPACITY: f64 = 50.0;
    pub const DEFAULT_Z_INDEX: f64 = 1.0;
    pub const DEFAULT_SOFTNESS: f64 = 50.0;
    pub const DEFAULT_JITTER: f64 = 30.0;

    /// Create an area over `geometry` with the CMS defaults for every other field.
    pub fn new(geometry: impl Into<MultiPolygon<f64>>) -> Self {
        Self {
            name: None,
            label: None,
            description: None,
            color: Self::DEFAULT_COLOR.to_string(),
            opacity: Self::DEFAULT_OPACITY,
            z_index: Self::DEFAULT_Z_INDEX,
            softness: Self::DEFAULT_SOFTNESS,
            jitter: Self::DEFAULT_JITTER,
            is_below_roads: false,
            geometry: geometry.into(),
        }
    }
}
