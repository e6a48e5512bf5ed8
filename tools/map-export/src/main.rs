use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use tbm_live_core::transit::{
    available_dates, available_times, filter, DatasetSource, FileDatasetSource, Selection,
    StationSnapshot,
};
use tbm_live_core::{StationMapBuilder, TileProvider, TransitMapBuilder};

mod output;

use output::{write_map_geojson, write_map_html};

#[derive(Parser, Debug)]
#[command(
    name = "tbm-map-export",
    author,
    version,
    about = "Export the VCub station map and the transit network map",
    long_about = "Reads the VCub station table and the Bus • Tram • BatCub line geometry, \
                  builds the same two maps as the dashboard and writes each one as a \
                  GeoJSON FeatureCollection and as a standalone Leaflet page.\n\n\
                  Without --date/--time the station map shows the first date and time \
                  offered by the dashboard selectors."
)]
struct Args {
    /// Directory holding stations_VCube.csv and gdfbustrambat.json
    #[arg(short, long, env = "TBM_DATA_DIR", default_value = "Data")]
    data_dir: PathBuf,

    /// Station table, overrides the file in the data directory
    #[arg(long)]
    stations: Option<PathBuf>,

    /// Line geometry, overrides the file in the data directory
    #[arg(long)]
    lines: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "export")]
    output: PathBuf,

    /// Snapshot date (YYYY-MM-DD)
    #[arg(long, requires = "time")]
    date: Option<String>,

    /// Snapshot time (HH:MM)
    #[arg(long, requires = "date")]
    time: Option<String>,

    /// MapTiler key for the light basemap
    #[arg(long, env = "MAPTILER_API_KEY", hide_env_values = true)]
    maptiler_api_key: Option<String>,

    /// Skip the HTML pages, write GeoJSON only
    #[arg(long)]
    geojson_only: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn source(&self) -> FileDatasetSource {
        let defaults = FileDatasetSource::in_dir(&self.data_dir);
        FileDatasetSource::new(
            self.stations
                .clone()
                .unwrap_or_else(|| defaults.stations_path().to_path_buf()),
            self.lines
                .clone()
                .unwrap_or_else(|| defaults.lines_path().to_path_buf()),
        )
    }
}

/// The explicit selection, or the first offered date and time
fn select(
    date: Option<&str>,
    time: Option<&str>,
    snapshots: &[StationSnapshot],
) -> Result<Selection> {
    if let (Some(date), Some(time)) = (date, time) {
        return Selection::parse(date, time)
            .with_context(|| format!("Invalid selection '{date} {time}', expected YYYY-MM-DD HH:MM"));
    }

    let dates = available_dates(snapshots);
    let times = available_times(snapshots);
    match (dates.first(), times.first()) {
        (Some(date), Some(time)) => Ok(Selection::new(*date, *time)),
        _ => bail!("The station table holds no selectable date"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let source = args.source();
    let tiles = TileProvider::new(args.maptiler_api_key.clone());

    log::info!("=== TBM Map Export ===");
    log::info!("Stations: {}", source.stations_path().display());
    log::info!("Lines: {}", source.lines_path().display());
    log::info!("Output: {}", args.output.display());

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    log::info!("");
    log::info!("Phase 1: VCub stations...");
    let snapshots = source
        .load_station_data()
        .context("Failed to load the station table")?;
    log::info!("  Loaded {} snapshots", snapshots.len());

    let selection = select(args.date.as_deref(), args.time.as_deref(), &snapshots)?;
    let selected = filter(&snapshots, Some(&selection));
    log::info!(
        "  {} stations at {} {}",
        selected.len(),
        selection.date,
        selection.time.format("%H:%M")
    );
    if selected.is_empty() {
        log::warn!("  No snapshot matches the selection, the station map will be empty");
    }

    let stations = StationMapBuilder::new().build(&selected, &tiles.for_time(selection.time));
    let count = write_map_geojson(&stations, &args.output.join("vcub.geojson"))?;
    log::info!("  Wrote {count} markers to vcub.geojson");
    if !args.geojson_only {
        write_map_html(&stations, "VCub", &args.output.join("vcub.html"))?;
        log::info!("  Wrote vcub.html");
    }

    log::info!("");
    log::info!("Phase 2: Bus • Tram • BatCub network...");
    let segments = source
        .load_transit_geometry()
        .context("Failed to load the line geometry")?;
    log::info!("  Loaded {} line segments", segments.len());

    let network = TransitMapBuilder::new(tiles.light()).build(&segments);
    for layer in &network.layers {
        log::info!(
            "    {}: {} lines",
            layer.name.as_deref().unwrap_or_default(),
            layer.len()
        );
    }
    let count = write_map_geojson(&network, &args.output.join("reseau.geojson"))?;
    log::info!("  Wrote {count} features to reseau.geojson");
    if !args.geojson_only {
        write_map_html(&network, "Bus • Tram • BatCub", &args.output.join("reseau.html"))?;
        log::info!("  Wrote reseau.html");
    }

    log::info!("");
    log::info!("Done.");
    Ok(())
}
