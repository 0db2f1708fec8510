//! Map marker grouping tool
//!
//! Reads geographic points from a CSV file, groups the ones visible in a
//! viewport into non-overlapping map clusters, and writes one row per cluster.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use geogroup::GrouperConfig;
use geogroup::cluster::{BoundingBox, ClusterGroup, LatLng, MapView, compute_groups};


#[derive(Parser)]
#[command(name = "geogroup")]
#[command(about = "Groups geo points into non-overlapping map clusters", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns
    #[arg(short, long, default_value = "points.csv")]
    input: PathBuf,

    /// Output CSV file with one row per cluster (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base clustering radius in pixels
    #[arg(short, long, default_value_t = geogroup::config::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Map zoom level the points are projected at
    #[arg(short, long, default_value_t = 13)]
    zoom: i32,

    /// Visible area as south,west,north,east (default: fitted to the points)
    #[arg(short, long, value_parser = parse_bounds)]
    bounds: Option<BoundingBox>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.debug { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = GrouperConfig::default().with_epsilon(args.epsilon);
    config.validate()?;

    let items = read_items(&args.input)
        .with_context(|| format!("reading CSV {:?}", args.input))?;

    let Some(bounds) = args.bounds.or_else(|| fitted_bounds(&items)) else {
        bail!("No points found in CSV file");
    };
    info!(items = items.len(), ?bounds, zoom = args.zoom, "read {:?}", args.input);

    let view = MapView::new(bounds, args.zoom);
    let groups = compute_groups(&items, |item| *item, &view, config.epsilon, 0);
    debug!(
        clusters = groups.len(),
        singles = groups.iter().filter(|g| g.is_single()).count(),
        "grouping done"
    );

    match args.output {
        None => write_clusters(std::io::stdout().lock(), &groups).context("writing to stdout")?,
        Some(output_file) => {
            let file = File::create(&output_file)
                .with_context(|| format!("creating {:?}", output_file))?;
            write_clusters(file, &groups)
                .with_context(|| format!("writing CSV {:?}", output_file))?;
            info!("clusters written to {:?}", output_file);
        }
    }

    Ok(())
}

/// Parses `south,west,north,east` in degrees
fn parse_bounds(s: &str) -> std::result::Result<BoundingBox, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<f64>, _>>()
        .map_err(|e| format!("invalid bounds {:?}: {}", s, e))?;

    match values[..] {
        [south, west, north, east] if south <= north && west <= east => Ok(BoundingBox::new(
            LatLng::new(south, west),
            LatLng::new(north, east),
        )),
        [_, _, _, _] => Err(format!("bounds {:?} are not ordered south,west,north,east", s)),
        _ => Err(format!("expected 4 values in bounds {:?}", s)),
    }
}

/// Viewport covering every item that has a coordinate
fn fitted_bounds(items: &[Option<LatLng>]) -> Option<BoundingBox> {
    BoundingBox::around(items.iter().flatten())
}

/// Reads one item per data row of a CSV file
///
/// Expected format: `latitude,longitude` (header row is optional). Rows
/// whose coordinates don't parse become items without a coordinate so row
/// numbers stay aligned.
fn read_items(filename: &Path) -> Result<Vec<Option<LatLng>>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut items = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let is_header = row == 0
            && record
                .get(0)
                .is_some_and(|cell| cell.trim().parse::<f64>().is_err());
        if !is_header {
            items.push(parse_coord(&record));
        }
    }

    Ok(items)
}

fn parse_coord(record: &StringRecord) -> Option<LatLng> {
    let lat = record.get(0)?.trim().parse::<f64>().ok()?;
    let lng = record.get(1)?.trim().parse::<f64>().ok()?;
    Some(LatLng::new(lat, lng))
}

/// Writes one row per cluster: `cluster,latitude,longitude,size,rows`
///
/// `rows` lists the data row numbers (0-based, header excluded) behind the
/// cluster, `;`-separated and ascending.
fn write_clusters<W: Write>(out: W, groups: &[ClusterGroup]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(["cluster", "latitude", "longitude", "size", "rows"])?;

    for (i, group) in groups.iter().enumerate() {
        let rows = group
            .view
            .indices()
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            i.to_string(),
            group.center.lat.to_string(),
            group.center.lng.to_string(),
            group.len().to_string(),
            rows,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
