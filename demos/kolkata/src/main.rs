//! kolkata-metro — route viewer for the Kolkata Metro.
//!
//! Picks a source and destination station, prints the distance, travel-time
//! estimate, and how to get there, and optionally exports map layers for a
//! renderer.
//!
//! ```text
//! kolkata-metro --list
//! kolkata-metro --from Dakshineswar --to "Howrah Maidan"
//! kolkata-metro --from Joka --to Central --out-dir output/kolkata --format csv
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mv_core::TravelModel;
use mv_core::travel::DEFAULT_SPEED_KMH;
use mv_network::{MetroNetwork, RouteResolver, kolkata, load_network_csv};
use mv_render::{CsvWriter, JsonWriter, LayerWriter, MapLayers, TripSummary};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Distance, travel time, and interchanges between two metro stations.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Source station
    #[arg(long, required_unless_present = "list")]
    from: Option<String>,

    /// Destination station
    #[arg(long, required_unless_present = "list")]
    to: Option<String>,

    /// List every station and the lines through it, then exit
    #[arg(long)]
    list: bool,

    /// Station table (name,lat,lon) to use instead of the bundled dataset
    #[arg(long, requires = "lines")]
    stations: Option<PathBuf>,

    /// Line table (line,color,station) to use instead of the bundled dataset
    #[arg(long, requires = "stations")]
    lines: Option<PathBuf>,

    /// Average speed used for the travel-time estimate, km/h
    #[arg(long, default_value_t = DEFAULT_SPEED_KMH)]
    speed_kmh: f64,

    /// Print the resolved trip as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Directory to export map layers into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Layer export format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let network = load_network(&args)?;

    if args.list {
        print_stations(&network);
        return Ok(());
    }

    let (Some(from), Some(to)) = (args.from.as_deref(), args.to.as_deref()) else {
        bail!("--from and --to are required unless --list is given");
    };

    let travel = TravelModel::new(args.speed_kmh)?;
    let resolver = RouteResolver::with_travel_model(&network, travel);
    let trip = resolver
        .resolve(from, to)
        .with_context(|| format!("resolving {from} → {to} (see --list for station names)"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else {
        println!("{}", TripSummary::new(&trip));
    }

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let layers = MapLayers::build(&network, from, to)?;
        let mut writer: Box<dyn LayerWriter> = match args.format {
            Format::Json => Box::new(JsonWriter::new(dir)?),
            Format::Csv => Box::new(CsvWriter::new(dir)?),
        };
        writer.write_layers(&layers)?;
        writer.finish()?;
        info!(dir = %dir.display(), format = ?args.format, "exported map layers");
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_network(args: &Args) -> Result<MetroNetwork> {
    match (&args.stations, &args.lines) {
        (Some(stations), Some(lines)) => load_network_csv(stations, lines)
            .with_context(|| format!("loading {} and {}", stations.display(), lines.display())),
        _ => Ok(kolkata::network()?),
    }
}

fn print_stations(network: &MetroNetwork) {
    println!("{:<24} Lines", "Station");
    println!("{}", "-".repeat(48));
    for station in network.stations() {
        let lines: Vec<&str> = network.lines_through(&station.name).map(|l| l.name.as_str()).collect();
        println!("{:<24} {}", station.name, lines.join(", "));
    }
}
