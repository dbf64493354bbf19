use anyhow::{Context, Result};
use geo::{LineString, Polygon};
use serde_json::{json, Value};

use crate::grid::CompositedCell;

/// Layer drawn beneath the base map's roads and labels.
pub const HEX_LAYER_BOTTOM: &str = "hex-layer-bottom";

/// Layer drawn above the base map's roads, still beneath its symbols.
pub const HEX_LAYER_TOP: &str = "hex-layer-top";

/// Style layers whose id contains one of these anchor the hex layers.
const ANCHOR_KEYWORDS: [&str; 4] = ["symbol", "label", "road", "building"];

/// Export composited cells as a GeoJSON FeatureCollection of hexagon polygons.
/// Properties: color, opacity, outlineColor, label, description, zIndex, isBelowRoads.
pub fn cells_to_geojson(cells: &[CompositedCell]) -> Result<Value> {
    let features = cells.iter()
        .map(|cell| {
            let properties = serde_json::to_value(cell)
                .context("Failed to serialize cell properties")?;
            Ok(json!({
                "type": "Feature",
                "geometry": polygon_to_geojson(&cell.geometry),
                "properties": properties,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

/// Fill layer definitions for the cells, split on `isBelowRoads` into a bottom and a top pass.
pub fn fill_layers(source_id: &str) -> [Value; 2] {
    let paint = json!({
        "fill-color": ["get", "color"],
        "fill-opacity": ["get", "opacity"],
        "fill-outline-color": ["get", "outlineColor"],
    });

    [
        json!({
            "id": HEX_LAYER_BOTTOM,
            "type": "fill",
            "source": source_id,
            "slot": "bottom",
            "filter": ["==", ["get", "isBelowRoads"], true],
            "paint": paint.clone(),
        }),
        json!({
            "id": HEX_LAYER_TOP,
            "type": "fill",
            "source": source_id,
            "filter": ["!=", ["get", "isBelowRoads"], true],
            "paint": paint,
        }),
    ]
}

/// Id of the first style layer the hex layers must be inserted before: a symbol layer, or one
/// whose id mentions symbols, labels, roads or buildings. `None` appends them on top.
pub fn find_anchor_layer(style_layers: &[Value]) -> Option<&str> {
    style_layers.iter()
        .filter_map(|layer| Some((layer["id"].as_str()?, layer)))
        .find(|(id, layer)| {
            layer["type"].as_str() == Some("symbol") || ANCHOR_KEYWORDS.iter().any(|kw| id.contains(kw))
        })
        .map(|(id, _)| id)
}

/// Helper to convert a Polygon to a serde_json::Value representing GeoJSON Geometry.
fn polygon_to_geojson(polygon: &Polygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>();
    let rings: Vec<_> = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring)
        .collect();

    json!({
        "type": "Polygon",
        "coordinates": rings,
    })
}
