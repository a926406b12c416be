//! CSV dataset loader.
//!
//! # CSV format
//!
//! Two files.  `stations.csv` has one row per station:
//!
//! ```csv
//! name,lat,lon
//! Esplanade,22.5625,88.3140
//! Central,22.5725,88.3100
//! ```
//!
//! `lines.csv` has one row per station stop, in physical order along the
//! line.  Every row of a line must carry the same colour.
//!
//! ```csv
//! line,color,station
//! Blue Line,#0070C0,Esplanade
//! Blue Line,#0070C0,Central
//! ```
//!
//! Lines are created in the order of their first row.  Rows for one line
//! need not be contiguous; their relative order is the station order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use mv_core::{GeoPoint, Rgb};

use crate::network::{MetroNetwork, MetroNetworkBuilder};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct LineRecord {
    line:    String,
    color:   String,
    station: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`MetroNetwork`] from a station CSV and a line CSV on disk.
pub fn load_network_csv(stations: &Path, lines: &Path) -> NetworkResult<MetroNetwork> {
    let stations_file = std::fs::File::open(stations)?;
    let lines_file = std::fs::File::open(lines)?;
    let network = load_network_reader(stations_file, lines_file)?;
    info!(
        stations = %stations.display(),
        lines = %lines.display(),
        "loaded metro network from CSV"
    );
    Ok(network)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded with
/// `include_str!`.
pub fn load_network_reader<S: Read, L: Read>(stations: S, lines: L) -> NetworkResult<MetroNetwork> {
    let mut builder = MetroNetworkBuilder::new();

    // ── Stations ──────────────────────────────────────────────────────────
    let mut station_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(stations);
    for result in station_reader.deserialize::<StationRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        builder.add_station(row.name.trim(), GeoPoint::new(row.lat, row.lon))?;
    }

    // ── Lines: group rows by line, keeping first-seen order ───────────────
    let mut grouped: Vec<(String, Rgb, Vec<String>)> = Vec::new();
    let mut line_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(lines);
    for result in line_reader.deserialize::<LineRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let name = row.line.trim();
        let color = Rgb::from_hex(&row.color)?;
        let station = row.station.trim().to_owned();

        match grouped.iter_mut().find(|(n, _, _)| n.as_str() == name) {
            Some((_, existing, stops)) => {
                if *existing != color {
                    return Err(NetworkError::Parse(format!(
                        "line {name:?} has conflicting colours {existing} and {color}"
                    )));
                }
                stops.push(station);
            }
            None => grouped.push((name.to_owned(), color, vec![station])),
        }
    }

    for (name, color, stops) in grouped {
        builder.add_line(name, color, stops)?;
    }

    Ok(builder.build())
}
