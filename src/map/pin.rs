use serde::{Deserialize, Serialize};

/// Added to a pin's z-index to place markers above the map canvas overlays.
const MARKER_Z_OFFSET: f64 = 200.0;

/// A CMS-authored location marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub lat: f64,
    pub long: f64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub min_zoom: f64,
    pub z_index: f64,
    pub is_clickable: bool,
    /// Matches the `data-dialog-id` of the dialog this pin opens; may be empty.
    pub slug: String,
    /// Whether the dialog link opens in a new tab.
    pub target_blank: bool,
}

impl Pin {
    /// Create a pin at `(long, lat)` with the CMS defaults for every other field.
    pub fn new(long: f64, lat: f64) -> Self {
        Self {
            lat,
            long,
            title: None,
            description: None,
            icon_url: None,
            min_zoom: 0.0,
            z_index: 0.0,
            is_clickable: false,
            slug: String::new(),
            target_blank: true,
        }
    }

    /// Markers are hidden below their minimum zoom.
    #[inline] pub fn is_visible_at(&self, zoom: f64) -> bool { zoom >= self.min_zoom }

    /// Stacking order of the marker element when not hovered.
    #[inline] pub fn marker_z_index(&self) -> f64 { self.z_index + MARKER_Z_OFFSET }

    /// Clicking opens a dialog only for clickable pins whose slug names an existing dialog.
    pub fn opens_dialog(&self, dialog_exists: impl FnOnce(&str) -> bool) -> bool {
        self.is_clickable && !self.slug.is_empty() && dialog_exists(&self.slug)
    }
}

/// Order pins low to high so later markers are drawn on top; ties keep their order.
pub fn sort_by_z_index(pins: &mut [Pin]) {
    pins.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
}
