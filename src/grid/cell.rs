use geo::Polygon;
use serde::Serialize;

/// Cells at or below this opacity are not worth a hover label.
const INTERACTIVE_OPACITY: f64 = 0.2;

/// One hex cell of the composited overlay, with its paint and topmost-area metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositedCell {
    #[serde(skip)]
    pub geometry: Polygon<f64>,
    /// CSS `rgb(r,g,b)`.
    pub color: String,
    /// In (0.01, 1].
    pub opacity: f64,
    /// CSS `rgba(r,g,b,a)`.
    pub outline_color: String,
    pub label: String,
    pub description: Option<String>,
    pub z_index: f64,
    pub is_below_roads: bool,
}

impl CompositedCell {
    /// Whether hovering this cell should show its label.
    #[inline] pub fn is_interactive(&self) -> bool { Self::is_interactive_opacity(self.opacity) }

    /// Hover threshold applied to a cell opacity read back from the rendered features.
    #[inline] pub fn is_interactive_opacity(opacity: f64) -> bool { opacity > INTERACTIVE_OPACITY }
}
