use std::f64::consts::PI;

use geo::{Coord, LineString, Point, Polygon, Rect};

use super::distance_km;

/// Tile `bbox` (lon/lat) with flat-topped hexagons whose side is `cell_side_km`.
///
/// Hex width and height are converted to degrees separately along each axis of the box,
/// columns are spaced 3/4 of a hex width apart, odd columns are shifted down by half a hex,
/// and the whole grid is centred in the box. A box too small to hold one hexagon, or one
/// with no extent, produces no cells. Cells are generated lazily, column by column.
pub fn hex_grid(bbox: &Rect<f64>, cell_side_km: f64) -> impl Iterator<Item = Polygon<f64>> {
    Layout::new(bbox, cell_side_km).into_iter().flat_map(Layout::cells)
}

/// Placement of every cell of one tiling, in degrees.
#[derive(Clone, Copy, Debug)]
struct Layout {
    west: f64,
    south: f64,
    x_interval: f64,
    y_interval: f64,
    x_adjust: f64,
    y_adjust: f64,
    rx: f64,
    ry: f64,
    x_count: u64,
    y_count: u64,
    has_offset_y: bool,
    corners: [(f64, f64); 6],
}

impl Layout {
    fn new(bbox: &Rect<f64>, cell_side_km: f64) -> Option<Self> {
        let (west, south) = bbox.min().x_y();
        let (east, north) = bbox.max().x_y();
        let box_width = east - west;
        let box_height = north - south;
        if !(box_width > 0.0 && box_height > 0.0 && cell_side_km > 0.0) { return None }

        let center_x = (west + east) / 2.0;
        let center_y = (south + north) / 2.0;

        let cell_width = cell_side_km * 2.0 / distance_km(Point::new(west, center_y), Point::new(east, center_y)) * box_width;
        let cell_height = cell_side_km * 2.0 / distance_km(Point::new(center_x, south), Point::new(center_x, north)) * box_height;
        if !(cell_width.is_finite() && cell_height.is_finite()) { return None }

        let radius = cell_width / 2.0;
        let hex_width = radius * 2.0;
        let hex_height = 3f64.sqrt() / 2.0 * cell_height;
        let x_interval = 3.0 / 4.0 * hex_width;

        let x_count = ((box_width - hex_width) / (hex_width - radius / 2.0)).floor();
        let y_count = ((box_height - hex_height) / hex_height).floor();
        if x_count < 0.0 || y_count < 0.0 { return None }

        let x_adjust = (x_count * x_interval - radius / 2.0 - box_width) / 2.0 - radius / 2.0 + x_interval / 2.0;
        let mut y_adjust = (box_height - y_count * hex_height) / 2.0;
        let has_offset_y = y_count * hex_height - box_height > hex_height / 2.0;
        if has_offset_y { y_adjust -= hex_height / 4.0 }

        let corners: [(f64, f64); 6] = std::array::from_fn(|i| {
            let angle = PI / 3.0 * i as f64;
            (angle.cos(), angle.sin())
        });

        Some(Self {
            west,
            south,
            x_interval,
            y_interval: hex_height,
            x_adjust,
            y_adjust,
            rx: cell_width / 2.0,
            ry: cell_height / 2.0,
            x_count: x_count as u64,
            y_count: y_count as u64,
            has_offset_y,
            corners,
        })
    }

    fn cells(self) -> impl Iterator<Item = Polygon<f64>> {
        (0..=self.x_count).flat_map(move |x| (0..=self.y_count).filter_map(move |y| self.cell(x, y)))
    }

    /// Hexagon in column `x`, row `y`; the first row of odd (or offset) columns is skipped.
    fn cell(&self, x: u64, y: u64) -> Option<Polygon<f64>> {
        let is_odd = x % 2 == 1;
        if y == 0 && (is_odd || self.has_offset_y) { return None }

        let cx = x as f64 * self.x_interval + self.west - self.x_adjust;
        let mut cy = y as f64 * self.y_interval + self.south + self.y_adjust;
        if is_odd { cy -= self.y_interval / 2.0 }

        Some(self.hexagon(Coord { x: cx, y: cy }))
    }

    /// Closed hexagon around `center`.
    fn hexagon(&self, center: Coord<f64>) -> Polygon<f64> {
        let mut ring: Vec<Coord<f64>> = self.corners.iter()
            .map(|&(cos, sin)| Coord { x: center.x + self.rx * cos, y: center.y + self.ry * sin })
            .collect();
        ring.push(ring[0]);
        Polygon::new(LineString(ring), vec![])
    }
}
