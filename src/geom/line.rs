use geo::{Coord, Distance, Haversine, LineString, MultiPolygon, Point};

/// Great-circle distance between two lon/lat points, in kilometres.
#[inline]
pub(crate) fn distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / 1000.0
}

/// Split the boundary of a shape into line strings, one per ring (exteriors and holes).
/// Rings too short to form a segment are dropped.
pub(crate) fn boundary_lines(shape: &MultiPolygon<f64>) -> Vec<LineString<f64>> {
    shape.0.iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
        .filter(|ring| ring.0.len() >= 2)
        .cloned()
        .collect()
}

/// Distance from `point` to the nearest segment of any of `lines`, in kilometres.
/// Infinite when there is no segment at all.
pub(crate) fn distance_to_lines_km(point: Point<f64>, lines: &[LineString<f64>]) -> f64 {
    lines.iter()
        .flat_map(|line| line.lines())
        .map(|segment| distance_to_segment_km(point.0, segment.start, segment.end))
        .fold(f64::INFINITY, f64::min)
}

/// The nearest point is found in plain lon/lat space, then measured with haversine.
fn distance_to_segment_km(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    let v = b - a;
    let w = p - a;

    let c1 = w.x * v.x + w.y * v.y;
    if c1 <= 0.0 { return distance_km(p.into(), a.into()) }

    let c2 = v.x * v.x + v.y * v.y;
    if c2 <= c1 { return distance_km(p.into(), b.into()) }

    distance_km(p.into(), (a + v * (c1 / c2)).into())
}
