use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value};

use crate::{
    common::{parse_flag, parse_float},
    map::{sort_by_z_index, Area, Pin},
};

/// Areas and pins read from one collection, each ordered by ascending z-index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
    pub areas: Vec<Area>,
    pub pins: Vec<Pin>,
}

/// A feature recognised as map content.
enum Item {
    Area(Area),
    Pin(Pin),
}

/// Read a GeoJSON FeatureCollection of areas and pins from a file.
pub fn read_geojson(path: &Path) -> Result<MapData> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON in {}", path.display()))?;

    parse_geojson(&value)
}

/// Polygon and MultiPolygon features become areas, Point features become pins.
///
/// Property values may be JSON numbers/booleans or the raw CMS attribute strings; missing or
/// unreadable values take the CMS defaults. A geometry may also be given as a JSON string.
/// Malformed features are skipped with a warning and other geometry types are ignored.
pub fn parse_geojson(value: &Value) -> Result<MapData> {
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("Expected a FeatureCollection with a `features` array"))?;

    let mut data = MapData::default();
    for (idx, feature) in features.iter().enumerate() {
        match read_feature(feature) {
            Ok(Some(Item::Area(area))) => data.areas.push(area),
            Ok(Some(Item::Pin(pin))) => data.pins.push(pin),
            Ok(None) => {}
            Err(e) => crate::log_line!("Warning: Skipping malformed feature {idx}: {e:#}"),
        }
    }

    data.areas.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
    sort_by_z_index(&mut data.pins);

    Ok(data)
}

fn read_feature(feature: &Value) -> Result<Option<Item>> {
    let empty = Map::new();
    let props = feature["properties"].as_object().unwrap_or(&empty);

    let geometry = match &feature["geometry"] {
        Value::String(raw) => serde_json::from_str(raw).context("Geometry string is not valid JSON")?,
        Value::Object(_) => feature["geometry"].clone(),
        _ => bail!("Feature has no geometry"),
    };

    let coords = &geometry["coordinates"];
    let item = match geometry["type"].as_str() {
        Some("Polygon") => Item::Area(read_area(props, MultiPolygon(vec![parse_polygon(coords)?]))),
        Some("MultiPolygon") => {
            let polygons = coords.as_array()
                .ok_or_else(|| anyhow!("MultiPolygon coordinates must be an array"))?
                .iter()
                .map(parse_polygon)
                .collect::<Result<Vec<_>>>()?;
            if polygons.is_empty() { bail!("MultiPolygon has no polygons") }
            Item::Area(read_area(props, MultiPolygon(polygons)))
        }
        Some("Point") => {
            let c = parse_position(coords)?;
            Item::Pin(read_pin(props, c))
        }
        Some(_) => return Ok(None),
        None => bail!("Geometry has no type"),
    };

    Ok(Some(item))
}

fn read_area(props: &Map<String, Value>, geometry: MultiPolygon<f64>) -> Area {
    Area {
        name: text(props, "name"),
        label: text(props, "label"),
        description: text(props, "description"),
        color: text(props, "color")
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| Area::DEFAULT_COLOR.to_string()),
        opacity: number(props, "opacity").unwrap_or(Area::DEFAULT_OPACITY),
        z_index: number(props, "zIndex").unwrap_or(Area::DEFAULT_Z_INDEX),
        softness: number(props, "softness").unwrap_or(Area::DEFAULT_SOFTNESS),
        jitter: number(props, "jitter").unwrap_or(Area::DEFAULT_JITTER),
        // unlike pin flags, the area slot attribute must be exactly "true"
        is_below_roads: match props.get("isBelowRoads") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        },
        geometry,
    }
}

fn read_pin(props: &Map<String, Value>, position: Coord<f64>) -> Pin {
    let defaults = Pin::new(position.x, position.y);
    Pin {
        title: text(props, "title"),
        description: text(props, "description"),
        icon_url: text(props, "iconUrl"),
        min_zoom: number(props, "minZoom").unwrap_or(defaults.min_zoom),
        z_index: number(props, "zIndex").unwrap_or(defaults.z_index),
        is_clickable: flag(props, "isClickable").unwrap_or(false),
        slug: text(props, "slug").unwrap_or_default(),
        // only an explicit "false" opens the dialog link in the same tab
        target_blank: match props.get("targetBlank") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.trim().eq_ignore_ascii_case("false"),
            _ => defaults.target_blank,
        },
        ..defaults
    }
}

fn text(props: &Map<String, Value>, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number(props: &Map<String, Value>, key: &str) -> Option<f64> {
    match props.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

fn flag(props: &Map<String, Value>, key: &str) -> Option<bool> {
    match props.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(parse_flag(s)),
        _ => None,
    }
}

/// Parse GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon(coords: &Value) -> Result<Polygon<f64>> {
    let rings = coords.as_array()
        .ok_or_else(|| anyhow!("Polygon coordinates must be an array of rings"))?;
    let (exterior, interiors) = rings.split_first()
        .ok_or_else(|| anyhow!("Polygon is missing its exterior ring"))?;

    Ok(Polygon::new(
        parse_ring(exterior)?,
        interiors.iter().map(parse_ring).collect::<Result<Vec<_>>>()?,
    ))
}

/// Parse a ring `[[x, y], ...]`, closing it if needed.
fn parse_ring(coords: &Value) -> Result<LineString<f64>> {
    let mut points = coords.as_array()
        .ok_or_else(|| anyhow!("Ring must be an array of positions"))?
        .iter()
        .map(parse_position)
        .collect::<Result<Vec<_>>>()?;

    if points.len() < 3 {
        bail!("Ring has {} positions, need at least 3", points.len());
    }

    // Ensure ring is closed (first point == last point)
    if points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}

fn parse_position(coords: &Value) -> Result<Coord<f64>> {
    match coords.as_array().map(Vec::as_slice) {
        Some([x, y, ..]) => Ok(Coord {
            x: x.as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?,
            y: y.as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?,
        }),
        _ => bail!("Position must be an array of at least two numbers"),
    }
}
