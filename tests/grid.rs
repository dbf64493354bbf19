// Integration tests for the hex grid compositor:
//   determinism, opacity thresholds, z-order, source-over blending,
//   softness falloff, jitter bounds and GeoJSON output.

use geo::{Coord, Polygon, Rect};
use hexmap::{build_hex_grid, cells_to_geojson, parse_geojson, prepare_layer, Area, GridConfig};
use rand::{rngs::StdRng, SeedableRng};

/// A one-degree square in central Poland.
fn square() -> Polygon<f64> {
    Rect::new(Coord { x: 19.0, y: 52.0 }, Coord { x: 20.0, y: 53.0 }).to_polygon()
}

/// A flat, fully opaque area with no falloff and no noise.
fn flat(color: &str, opacity: f64, z_index: f64, label: &str) -> Area {
    Area {
        label: Some(label.to_string()),
        description: Some(format!("{label} description")),
        color: color.to_string(),
        opacity,
        z_index,
        softness: 0.0,
        jitter: 0.0,
        ..Area::new(square())
    }
}

fn config() -> GridConfig {
    GridConfig::new(5.0, 1.0)
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn empty_input_builds_nothing() {
    for cell in [0.05, 1.75, 50.0] {
        let cells = build_hex_grid(&[], &GridConfig::new(cell, 0.3), &mut rng(0));
        assert!(cells.is_empty());
    }
}

#[test]
fn single_opaque_area_keeps_its_color() {
    let cells = build_hex_grid(&[flat("#00959d", 100.0, 1.0, "A")], &config(), &mut rng(0));
    assert!(!cells.is_empty());

    for cell in &cells {
        assert_eq!(cell.color, "rgb(0,149,157)");
        assert_eq!(cell.opacity, 1.0);
        assert_eq!(cell.outline_color, "rgba(0,149,157,1)");
        assert_eq!(cell.label, "A");
        assert_eq!(cell.description.as_deref(), Some("A description"));
        assert_eq!(cell.z_index, 1.0);
    }
}

#[test]
fn topmost_opaque_area_wins() {
    let red = flat("#ff0000", 100.0, 1.0, "A");
    let blue = flat("#0000ff", 100.0, 2.0, "B");

    // input order must not matter, only z-index
    for areas in [[red.clone(), blue.clone()], [blue, red]] {
        let cells = build_hex_grid(&areas, &config(), &mut rng(0));
        assert!(!cells.is_empty());
        for cell in &cells {
            assert_eq!(cell.color, "rgb(0,0,255)");
            assert_eq!(cell.label, "B");
            assert_eq!(cell.description.as_deref(), Some("B description"));
            assert_eq!(cell.z_index, 2.0);
        }
    }
}

#[test]
fn half_transparent_area_blends_over_opaque_one() {
    let areas = [
        flat("rgb(0,0,255)", 50.0, 2.0, "B"),
        flat("rgb(255,0,0)", 100.0, 1.0, "A"),
    ];
    let cells = build_hex_grid(&areas, &config(), &mut rng(0));
    assert!(!cells.is_empty());

    for cell in &cells {
        assert_eq!(cell.opacity, 1.0);
        assert_eq!(cell.color, "rgb(128,0,128)");
        assert_eq!(cell.label, "B");
    }
}

#[test]
fn equal_z_index_keeps_input_order() {
    let areas = [
        flat("#ff0000", 100.0, 1.0, "first"),
        flat("#00ff00", 100.0, 1.0, "second"),
    ];
    let cells = build_hex_grid(&areas, &config(), &mut rng(0));
    assert!(cells.iter().all(|cell| cell.label == "second" && cell.color == "rgb(0,255,0)"));
}

#[test]
fn metadata_comes_from_topmost_contributing_layer() {
    // the upper layer is too faint to contribute, so the lower one keeps the label
    let areas = [
        flat("#ff0000", 100.0, 1.0, "A"),
        Area { is_below_roads: true, ..flat("#0000ff", 0.05, 2.0, "B") },
    ];
    let cells = build_hex_grid(&areas, &config(), &mut rng(0));
    assert!(!cells.is_empty());
    for cell in &cells {
        assert_eq!(cell.label, "A");
        assert_eq!(cell.color, "rgb(255,0,0)");
        assert!(!cell.is_below_roads);
    }
}

#[test]
fn unlabelled_area_falls_back_to_default_label() {
    let area = Area { label: None, ..flat("#ff0000", 100.0, 1.0, "") };
    let cells = build_hex_grid(&[area], &config(), &mut rng(0));
    assert!(cells.iter().all(|cell| cell.label == "Area"));
}

#[test]
fn outline_alpha_uses_multiplier() {
    let cells = build_hex_grid(&[flat("#ff0000", 100.0, 1.0, "A")], &GridConfig::new(5.0, 0.5), &mut rng(0));
    assert!(cells.iter().all(|cell| cell.outline_color == "rgba(255,0,0,0.5)"));
}

#[test]
fn unclaimed_cells_are_omitted() {
    // two small squares far apart: the grid covers both and the gap between them
    let west = Rect::new(Coord { x: 10.0, y: 50.0 }, Coord { x: 10.5, y: 50.5 }).to_polygon();
    let east = Rect::new(Coord { x: 14.5, y: 50.0 }, Coord { x: 15.0, y: 50.5 }).to_polygon();
    let areas = [
        Area { geometry: west.into(), ..flat("#ff0000", 100.0, 1.0, "W") },
        Area { geometry: east.into(), ..flat("#0000ff", 100.0, 1.0, "E") },
    ];
    let cells = build_hex_grid(&areas, &config(), &mut rng(0));

    assert!(cells.iter().any(|cell| cell.label == "W"));
    assert!(cells.iter().any(|cell| cell.label == "E"));
    for cell in &cells {
        let x = cell.geometry.exterior().0[0].x;
        assert!(x < 11.0 || x > 14.0, "cell in the gap at x={x}");
    }
}

#[test]
fn softness_fades_the_whole_square() {
    // a 100 km falloff is wider than the distance from any interior point to the edge
    let area = Area { softness: 100.0, ..flat("#ff0000", 100.0, 1.0, "A") };
    let cells = build_hex_grid(&[area], &config(), &mut rng(0));
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|cell| cell.opacity < 0.5));
}

#[test]
fn softness_radius_never_below_three_cells() {
    for cell_size in [0.2, 1.75, 10.0] {
        for softness in [0.1, 2.0, 25.0, 100.0] {
            let area = Area { softness, ..Area::new(square()) };
            let layer = prepare_layer(&area, cell_size);
            assert!(layer.softness_radius_km >= 3.0 * cell_size);
        }
    }
}

#[test]
fn output_is_deterministic_without_jitter() {
    let areas = [
        Area { softness: 30.0, ..flat("#ff8800", 70.0, 1.0, "A") },
        Area {
            softness: 60.0,
            geometry: Rect::new(Coord { x: 19.4, y: 52.3 }, Coord { x: 20.6, y: 53.4 }).to_polygon().into(),
            ..flat("#0088ff", 40.0, 2.0, "B")
        },
    ];
    let first = build_hex_grid(&areas, &config(), &mut rng(1));
    let second = build_hex_grid(&areas, &config(), &mut rng(2));

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(cells_to_geojson(&first).unwrap().to_string(), cells_to_geojson(&second).unwrap().to_string());
}

#[test]
fn jitter_is_reproducible_with_a_seed() {
    let area = Area { jitter: 100.0, softness: 20.0, ..flat("#ff0000", 60.0, 1.0, "A") };
    let first = build_hex_grid(std::slice::from_ref(&area), &config(), &mut rng(7));
    let again = build_hex_grid(std::slice::from_ref(&area), &config(), &mut rng(7));
    assert_eq!(first, again);
}

#[test]
fn emitted_opacity_stays_in_range() {
    let areas = [
        Area { jitter: 100.0, softness: 40.0, ..flat("#ff0000", 30.0, 1.0, "A") },
        Area { jitter: 100.0, softness: 10.0, ..flat("#00ff00", 5.0, 2.0, "B") },
    ];
    for seed in 0..5 {
        for cell in build_hex_grid(&areas, &config(), &mut rng(seed)) {
            assert!(cell.opacity > 0.01 && cell.opacity <= 1.0, "opacity {}", cell.opacity);
        }
    }
}

#[test]
fn faint_cells_are_dropped_entirely() {
    let cells = build_hex_grid(&[flat("#ff0000", 1.0, 1.0, "A")], &config(), &mut rng(0));
    assert!(cells.is_empty());
}

#[test]
fn minimum_cell_size_is_enforced() {
    let config = GridConfig::new(0.05, 1.0);
    assert_eq!(config.cell_size_km(), 0.2);
}

#[test]
fn below_roads_flag_is_carried_per_cell() {
    let areas = [Area { is_below_roads: true, ..flat("#ff0000", 100.0, 1.0, "A") }];
    let cells = build_hex_grid(&areas, &config(), &mut rng(0));
    let geojson = cells_to_geojson(&cells).unwrap();

    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), cells.len());
    assert!(features.iter().all(|f| f["properties"]["isBelowRoads"] == true));
    assert!(features.iter().all(|f| f["geometry"]["type"] == "Polygon"));
}

#[test]
fn geojson_input_to_overlay() {
    let input = serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "label": "Basin", "color": "#f00", "opacity": "100", "softness": "0", "jitter": "0" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[19.0, 52.0], [20.0, 52.0], [20.0, 53.0], [19.0, 53.0], [19.0, 52.0]]],
            },
        }],
    });
    let data = parse_geojson(&input).unwrap();
    let cells = build_hex_grid(&data.areas, &config(), &mut rng(0));

    assert!(!cells.is_empty());
    assert!(cells.iter().all(|cell| cell.color == "rgb(255,0,0)" && cell.is_interactive()));
}

#[test]
fn page_attribute_strings_configure_the_build() {
    let area = flat("#ff0000", 100.0, 1.0, "A");
    let from_page = GridConfig::from_attributes(Some("5km"), Some("0.5"));
    assert_eq!(from_page, GridConfig::new(5.0, 0.5));

    let cells = build_hex_grid(std::slice::from_ref(&area), &from_page, &mut rng(0));
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|cell| cell.outline_color == "rgba(255,0,0,0.5)" && cell.is_interactive()));
}
