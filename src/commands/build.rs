use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};

use crate::cli::{BuildArgs, Cli};
use crate::common::{ensure_parent_dir_exists, ensure_writable};
use crate::{build_hex_grid, cells_to_geojson, log_line, read_geojson, GridConfig};

pub fn run(cli: &Cli, args: &BuildArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;

    let data = read_geojson(&args.areas)?;
    let config = GridConfig::new(args.cell_size, args.outline_multiplier);

    if cli.verbose > 0 {
        log_line!(
            "[build] areas={} pins={} cell={}km outline={} -> {}",
            data.areas.len(),
            data.pins.len(),
            config.cell_size_km(),
            config.outline_alpha_multiplier(),
            args.output.display()
        );
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cells = build_hex_grid(&data.areas, &config, &mut rng);

    if cli.verbose > 0 {
        let below = cells.iter().filter(|cell| cell.is_below_roads).count();
        let interactive = cells.iter().filter(|cell| cell.is_interactive()).count();
        log_line!(
            "[build] cells={} below_roads={} above_roads={} interactive={}",
            cells.len(), below, cells.len() - below, interactive
        );
    }
    if cli.verbose > 1 {
        for area in &data.areas {
            log_line!(
                "[build]   z={} color={} opacity={} softness={} jitter={} label={:?}",
                area.z_index, area.color, area.opacity, area.softness, area.jitter, area.label
            );
        }
    }

    let geojson = cells_to_geojson(&cells)?;
    let bytes = serde_json::to_vec(&geojson).context("Failed to serialize GeoJSON to bytes")?;

    ensure_parent_dir_exists(&args.output)?;
    std::fs::write(&args.output, bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if cli.verbose > 0 {
        log_line!("[build] wrote {}", args.output.display());
    }

    Ok(())
}
