use geo::{Centroid, Intersects, Point, Polygon};
use rand::Rng;
use rstar::RTree;
use smallvec::SmallVec;

use crate::{
    color::Rgb,
    config::GridConfig,
    geom::{bounds, candidates_at, hex_grid, index, BoundingBox},
    grid::{prepare_layer, CompositedCell, LayerMeta},
    map::Area,
};

/// Cells whose composited alpha is at or below this are left out.
const MIN_CELL_ALPHA: f64 = 0.01;

/// Label used when the topmost layer has none.
const DEFAULT_LABEL: &str = "Area";

/// Running source-over accumulation of one cell.
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Accumulator {
    /// Composite `rgb` at `alpha` over what has been accumulated so far.
    fn blend(&mut self, rgb: Rgb, alpha: f64) {
        let a = alpha + self.a * (1.0 - alpha);
        if a > 0.0 {
            let under = self.a * (1.0 - alpha);
            self.r = (rgb.r as f64 * alpha + self.r * under) / a;
            self.g = (rgb.g as f64 * alpha + self.g * under) / a;
            self.b = (rgb.b as f64 * alpha + self.b * under) / a;
        }
        self.a = a;
    }

    fn rgb(&self) -> Rgb {
        let channel = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Rasterize `areas` onto a hex grid over their bounding box and composite
/// overlapping areas cell by cell.
///
/// Each cell is sampled at its centroid. Areas containing the centroid are
/// blended bottom-up by ascending z-index (ties keep input order), each one's
/// alpha faded near its boundary by its softness and perturbed by its jitter,
/// which draws from `rng`. Unclaimed cells and cells at or below 1% alpha are
/// omitted. Without jitter the output depends on the inputs only.
pub fn build_hex_grid(areas: &[Area], config: &GridConfig, rng: &mut impl Rng) -> Vec<CompositedCell> {
    let Some(bbox) = bounds(areas.iter().map(|area| &area.geometry)) else { return Vec::new() };

    let cell_size_km = config.cell_size_km();
    let layers: Vec<LayerMeta> = areas.iter()
        .map(|area| prepare_layer(area, cell_size_km))
        .collect();
    let tree = index(areas.iter().map(|area| &area.geometry));

    let mut cells = Vec::new();
    for hex in hex_grid(&bbox, cell_size_km) {
        if let Some(cell) = composite_cell(hex, &layers, &tree, config.outline_alpha_multiplier(), &mut *rng) {
            cells.push(cell);
        }
    }
    cells
}

fn composite_cell(
    hex: Polygon<f64>,
    layers: &[LayerMeta],
    tree: &RTree<BoundingBox>,
    outline_alpha_multiplier: f64,
    rng: &mut impl Rng,
) -> Option<CompositedCell> {
    let center = hex.centroid()?;

    let mut active = active_layers(center, layers, tree);
    if active.is_empty() { return None }
    active.sort_by(|&i, &j| layers[i].z_index.total_cmp(&layers[j].z_index).then(i.cmp(&j)));

    let mut acc = Accumulator::default();
    let mut top: Option<&LayerMeta> = None;
    for i in active {
        let layer = &layers[i];
        let Some(alpha) = layer.alpha_at(center, &mut *rng) else { continue };
        acc.blend(layer.rgb, alpha);
        top = Some(layer);
    }

    if acc.a <= MIN_CELL_ALPHA { return None }

    let rgb = acc.rgb();
    Some(CompositedCell {
        geometry: hex,
        color: rgb.to_string(),
        opacity: acc.a,
        outline_color: rgb.to_rgba_string(acc.a * outline_alpha_multiplier),
        label: top.and_then(LayerMeta::label)
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_LABEL)
            .to_string(),
        description: top.and_then(LayerMeta::description).map(str::to_string),
        z_index: top.map_or(0.0, |layer| layer.z_index),
        is_below_roads: top.is_some_and(|layer| layer.is_below_roads),
    })
}

/// Indices of the layers whose area contains `point`, boundary included.
fn active_layers(point: Point<f64>, layers: &[LayerMeta], tree: &RTree<BoundingBox>) -> SmallVec<[usize; 4]> {
    candidates_at(tree, point)
        .filter(|&i| layers[i].area.geometry.intersects(&point))
        .collect()
}
