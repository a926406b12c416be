//! Metro dataset representation and builder.
//!
//! # Data layout
//!
//! Stations and lines are stored in definition order and addressed by
//! `StationId` / `LineId`.  Both tables also carry a name index, since every
//! query arrives as a station name picked from a list.
//!
//! A line keeps its station sequence **by name**.  A name that has no entry
//! in the station table is still a member of the line (it takes part in
//! membership and interchange checks), but it has no position, so it is
//! skipped by [`MetroNetwork::line_path`] and never reaches a rendered
//! polyline.

use std::collections::HashMap;

use tracing::{debug, info};

use mv_core::{GeoPoint, LineId, Rgb, StationId};

use crate::{NetworkError, NetworkResult};

// ── Station / Line ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub name: String,
    pub pos:  GeoPoint,
}

/// A metro line: display colour plus the ordered station sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub name:  String,
    pub color: Rgb,
    stations:  Vec<String>,
}

impl Line {
    /// Station names in physical order along the line.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// `true` if `station` is anywhere on this line.  Order is irrelevant.
    pub fn contains(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }
}

// ── MetroNetwork ──────────────────────────────────────────────────────────────

/// Immutable metro dataset.  Do not construct directly; use
/// [`MetroNetworkBuilder`].
#[derive(Clone, Debug)]
pub struct MetroNetwork {
    stations:      Vec<Station>,
    lines:         Vec<Line>,
    station_index: HashMap<String, StationId>,
    line_index:    HashMap<String, LineId>,
}

impl MetroNetwork {
    /// A network with no stations or lines.
    pub fn empty() -> Self {
        MetroNetworkBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.lines.is_empty()
    }

    // ── Stations ──────────────────────────────────────────────────────────

    /// All stations in definition order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_index.get(name).copied()
    }

    /// Position of a named station, or [`NetworkError::UnknownStation`].
    pub fn position(&self, name: &str) -> NetworkResult<GeoPoint> {
        self.station_id(name)
            .map(|id| self.station(id).pos)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_owned()))
    }

    /// Fails with [`NetworkError::UnknownStation`] unless `name` is a key of
    /// the station table.
    pub fn require_station(&self, name: &str) -> NetworkResult<StationId> {
        self.station_id(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_owned()))
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    /// All lines in definition order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.line_index.get(name).map(|id| self.line(*id))
    }

    /// Lines whose sequence contains `station`, in definition order.
    pub fn lines_through(&self, station: &str) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.contains(station))
    }

    /// Positions along `line` in line order.  Stations without a position are
    /// skipped.
    pub fn line_path(&self, line: &Line) -> impl Iterator<Item = GeoPoint> {
        line.stations
            .iter()
            .filter_map(|name| self.station_id(name).map(|id| self.station(id).pos))
    }
}

// ── MetroNetworkBuilder ───────────────────────────────────────────────────────

/// Construct a [`MetroNetwork`] incrementally, then call [`build`](Self::build).
///
/// Stations and lines may be added in any order; a line may reference
/// stations that are added after it.
///
/// # Example
///
/// ```
/// use mv_core::{GeoPoint, Rgb};
/// use mv_network::MetroNetworkBuilder;
///
/// let mut b = MetroNetworkBuilder::new();
/// b.add_station("Esplanade", GeoPoint::new(22.5625, 88.3140)).unwrap();
/// b.add_station("Central", GeoPoint::new(22.5725, 88.3100)).unwrap();
/// b.add_line("Blue Line", Rgb(0, 112, 192), ["Esplanade", "Central"]).unwrap();
/// let net = b.build();
/// assert_eq!(net.station_count(), 2);
/// assert_eq!(net.line_count(), 1);
/// ```
pub struct MetroNetworkBuilder {
    stations:      Vec<Station>,
    lines:         Vec<Line>,
    station_index: HashMap<String, StationId>,
    line_index:    HashMap<String, LineId>,
}

impl MetroNetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(stations: usize, lines: usize) -> Self {
        Self {
            stations:      Vec::with_capacity(stations),
            lines:         Vec::with_capacity(lines),
            station_index: HashMap::with_capacity(stations),
            line_index:    HashMap::with_capacity(lines),
        }
    }

    /// Add a station and return its `StationId` (sequential from 0).
    pub fn add_station(&mut self, name: impl Into<String>, pos: GeoPoint) -> NetworkResult<StationId> {
        let name = name.into();
        if self.station_index.contains_key(&name) {
            return Err(NetworkError::DuplicateStation(name));
        }
        let id = StationId::try_from(self.stations.len())
            .map_err(|_| NetworkError::Capacity("stations"))?;
        self.station_index.insert(name.clone(), id);
        self.stations.push(Station { name, pos });
        Ok(id)
    }

    /// Add a line with its stations in physical order and return its `LineId`.
    pub fn add_line<I, S>(&mut self, name: impl Into<String>, color: Rgb, stations: I) -> NetworkResult<LineId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.line_index.contains_key(&name) {
            return Err(NetworkError::DuplicateLine(name));
        }
        let id = LineId::try_from(self.lines.len())
            .map_err(|_| NetworkError::Capacity("lines"))?;
        self.line_index.insert(name.clone(), id);
        self.lines.push(Line {
            name,
            color,
            stations: stations.into_iter().map(Into::into).collect(),
        });
        Ok(id)
    }

    pub fn station_count(&self) -> usize { self.stations.len() }
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Consume the builder and produce a [`MetroNetwork`].
    pub fn build(self) -> MetroNetwork {
        for line in &self.lines {
            for name in line.stations.iter().filter(|s| !self.station_index.contains_key(*s)) {
                debug!(line = %line.name, station = %name, "station has no coordinates; omitted from line path");
            }
        }
        info!(
            stations = self.stations.len(),
            lines = self.lines.len(),
            "built metro network"
        );

        MetroNetwork {
            stations:      self.stations,
            lines:         self.lines,
            station_index: self.station_index,
            line_index:    self.line_index,
        }
    }
}

impl Default for MetroNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
