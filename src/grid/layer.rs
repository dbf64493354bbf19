use geo::{LineString, Point};
use rand::Rng;

use crate::{color::{parse_color, Rgb}, geom::{boundary_lines, distance_to_lines_km}, map::Area};

/// Softness 100 fades over this many kilometres.
const SOFTNESS_KM_AT_FULL: f64 = 100.0;

/// Jitter 100 perturbs alpha by up to this amplitude (peak to peak).
const JITTER_AMP_AT_FULL: f64 = 0.25;

/// A positive falloff never spans fewer cells than this.
const MIN_SOFTNESS_CELLS: f64 = 3.0;

/// Layers at or below this alpha leave a cell untouched.
const MIN_LAYER_ALPHA: f64 = 0.001;

/// Compositing parameters of one area, derived once per build.
#[derive(Clone, Debug)]
pub struct LayerMeta<'a> {
    pub area: &'a Area,
    pub boundary_lines: Vec<LineString<f64>>,
    pub base_opacity: f64,
    pub jitter_amp: f64,
    pub softness_radius_km: f64,
    pub rgb: Rgb,
    pub z_index: f64,
    pub is_below_roads: bool,
}

/// Derive the compositing parameters of `area` for a grid of `cell_size_km` cells.
pub fn prepare_layer(area: &Area, cell_size_km: f64) -> LayerMeta<'_> {
    let mut softness_radius_km = area.softness / 100.0 * SOFTNESS_KM_AT_FULL;
    if softness_radius_km > 0.0 && softness_radius_km < cell_size_km * MIN_SOFTNESS_CELLS {
        softness_radius_km = cell_size_km * MIN_SOFTNESS_CELLS;
    }

    let jitter_amp = if area.jitter > 0.0 { area.jitter / 100.0 * JITTER_AMP_AT_FULL } else { 0.0 };

    LayerMeta {
        area,
        boundary_lines: boundary_lines(&area.geometry),
        base_opacity: area.opacity / 100.0,
        jitter_amp,
        softness_radius_km,
        rgb: parse_color(&area.color),
        z_index: area.z_index,
        is_below_roads: area.is_below_roads,
    }
}

impl LayerMeta<'_> {
    #[inline] pub fn label(&self) -> Option<&str> { self.area.label.as_deref() }

    #[inline] pub fn description(&self) -> Option<&str> { self.area.description.as_deref() }

    /// Alpha this layer contributes at `point`, after edge softening and jitter.
    /// `None` when it is too faint to contribute.
    pub(crate) fn alpha_at(&self, point: Point<f64>, rng: &mut impl Rng) -> Option<f64> {
        let mut alpha = self.base_opacity;

        if !self.boundary_lines.is_empty() && self.softness_radius_km > 0.0 {
            let d = distance_to_lines_km(point, &self.boundary_lines);
            if d.is_finite() {
                alpha *= (d / self.softness_radius_km).min(1.0);
            }
        }

        if self.jitter_amp > 0.0 {
            alpha += (rng.random::<f64>() - 0.5) * self.jitter_amp;
        }

        let alpha = alpha.clamp(0.0, 1.0);
        (alpha > MIN_LAYER_ALPHA).then_some(alpha)
    }
}
