use geo::{BoundingRect, Coord, MultiPolygon, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// A bounding box in an R-tree, associated with an area by index.
#[derive(Debug, Clone)]
pub(crate) struct BoundingBox {
    idx: usize, // Index of the corresponding area
    bbox: Rect<f64>,
}

impl BoundingBox {
    pub(crate) fn new(idx: usize, bbox: Rect<f64>) -> Self {
        Self { idx, bbox }
    }

    /// Get the index of the corresponding area.
    pub(crate) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Bulk-load an R-tree over the bounding rectangles of `shapes`.
/// Empty shapes have no rectangle and are left out.
pub(crate) fn index<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> RTree<BoundingBox> {
    RTree::bulk_load(
        shapes.into_iter().enumerate()
            .filter_map(|(i, shape)| shape.bounding_rect().map(|rect| BoundingBox::new(i, rect)))
            .collect()
    )
}

/// Indices of the shapes whose bounding rectangle contains `point` (edges inclusive).
/// The order is unspecified.
pub(crate) fn candidates_at(tree: &RTree<BoundingBox>, point: Point<f64>) -> impl Iterator<Item = usize> + '_ {
    tree.locate_in_envelope_intersecting(&AABB::from_point([point.x(), point.y()]))
        .map(BoundingBox::idx)
}

/// Compute the bounding rectangle enclosing all `shapes`.
pub(crate) fn bounds<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes.into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Polygon;

    fn square(x: f64, y: f64, size: f64) -> MultiPolygon<f64> {
        Rect::new(Coord { x, y }, Coord { x: x + size, y: y + size }).to_polygon().into()
    }

    #[test]
    fn bounds_enclose_every_shape() {
        let shapes = [square(0.0, 0.0, 1.0), square(3.0, -2.0, 1.0)];
        let rect = bounds(&shapes).unwrap();
        assert_eq!(rect.min(), Coord { x: 0.0, y: -2.0 });
        assert_eq!(rect.max(), Coord { x: 4.0, y: 1.0 });
    }

    #[test]
    fn bounds_of_nothing() {
        assert!(bounds(&Vec::<MultiPolygon<f64>>::new()).is_none());
        assert!(bounds(&[MultiPolygon::<f64>::new(vec![])]).is_none());
    }

    #[test]
    fn point_lookup_returns_overlapping_boxes() {
        let empty = MultiPolygon::from(Vec::<Polygon<f64>>::new());
        let shapes = [square(0.0, 0.0, 2.0), empty, square(1.0, 1.0, 2.0)];
        let tree = index(&shapes);
        assert_eq!(tree.size(), 2);

        let mut hits: Vec<usize> = candidates_at(&tree, Point::new(1.5, 1.5)).collect();
        hits.sort();
        assert_eq!(hits, vec![0, 2]);

        // edges count as inside
        assert_eq!(candidates_at(&tree, Point::new(3.0, 3.0)).collect::<Vec<_>>(), vec![2]);
        assert_eq!(candidates_at(&tree, Point::new(5.0, 5.0)).count(), 0);
    }
}
