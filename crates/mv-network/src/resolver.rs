//! Route resolution over a static [`MetroNetwork`].
//!
//! There is no graph search here.  A trip is described by:
//!
//! - the straight-line (haversine) distance and a travel-time estimate,
//! - the lines that serve both ends directly,
//! - failing that, the stations where one change of line would work.
//!
//! Multi-interchange journeys are not searched for; when no single change
//! connects the two stations the trip is reported as [`Connection::NoConnection`].

use tracing::debug;

use mv_core::TravelModel;

use crate::network::{Line, MetroNetwork};
use crate::NetworkResult;

// ── Trip ──────────────────────────────────────────────────────────────────────

/// How the source and destination are linked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "via", rename_all = "snake_case"))]
pub enum Connection {
    /// Source and destination are the same station.
    SameStation,
    /// Lines serving both stations, in definition order.
    Direct(Vec<String>),
    /// Stations shared by a line through the source and a line through the
    /// destination.
    Interchange(Vec<String>),
    /// Neither a direct line nor a single interchange exists.
    NoConnection,
}

/// Everything known about one source → destination query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub source:      String,
    pub destination: String,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Estimated travel time in whole minutes.
    pub minutes:     u32,
    pub connection:  Connection,
}

// ── RouteResolver ─────────────────────────────────────────────────────────────

/// Stateless queries over a borrowed network.
///
/// All operations reject station names missing from the station table with
/// [`NetworkError::UnknownStation`](crate::NetworkError::UnknownStation).
#[derive(Copy, Clone, Debug)]
pub struct RouteResolver<'a> {
    network: &'a MetroNetwork,
    travel:  TravelModel,
}

impl<'a> RouteResolver<'a> {
    /// Resolver using the default 30 km/h travel model.
    pub fn new(network: &'a MetroNetwork) -> Self {
        Self::with_travel_model(network, TravelModel::default())
    }

    pub fn with_travel_model(network: &'a MetroNetwork, travel: TravelModel) -> Self {
        Self { network, travel }
    }

    pub fn network(&self) -> &'a MetroNetwork {
        self.network
    }

    pub fn travel_model(&self) -> TravelModel {
        self.travel
    }

    /// Haversine distance in km and estimated minutes between two stations.
    ///
    /// `src == dst` yields `(0.0, 0)`.
    pub fn distance_and_time(&self, src: &str, dst: &str) -> NetworkResult<(f64, u32)> {
        let a = self.network.position(src)?;
        let b = self.network.position(dst)?;
        let km = a.distance_km(b);
        Ok((km, self.travel.minutes_for(km)))
    }

    /// Names of every line containing both stations, in definition order.
    pub fn direct_lines(&self, src: &str, dst: &str) -> NetworkResult<Vec<&'a str>> {
        self.network.require_station(src)?;
        self.network.require_station(dst)?;

        Ok(self
            .network
            .lines()
            .iter()
            .filter(|l| l.contains(src) && l.contains(dst))
            .map(|l| l.name.as_str())
            .collect())
    }

    /// Stations where a rider could change from a line through `src` to a
    /// line through `dst`.
    ///
    /// Line pairs are tried with the source line in the outer loop and the
    /// destination line in the inner loop, both in definition order.  The
    /// first pair with a non-empty intersection wins; later pairs are not
    /// merged in.  Stations are listed in their order along the source line.
    ///
    /// Only meaningful when [`direct_lines`](Self::direct_lines) is empty:
    /// otherwise the first pair is a line with itself.
    pub fn interchange_candidates(&self, src: &str, dst: &str) -> NetworkResult<Vec<&'a str>> {
        self.network.require_station(src)?;
        self.network.require_station(dst)?;

        let network = self.network;
        for s_line in network.lines_through(src) {
            for d_line in network.lines_through(dst) {
                let common = shared_stations(s_line, d_line);
                if !common.is_empty() {
                    debug!(from = %s_line.name, to = %d_line.name, count = common.len(), "interchange found");
                    return Ok(common);
                }
            }
        }
        Ok(Vec::new())
    }

    /// Run every query for one trip.  The interchange search only runs when
    /// no direct line exists.
    pub fn resolve(&self, src: &str, dst: &str) -> NetworkResult<Trip> {
        let (distance_km, minutes) = self.distance_and_time(src, dst)?;

        let connection = if src == dst {
            Connection::SameStation
        } else {
            let direct = self.direct_lines(src, dst)?;
            if !direct.is_empty() {
                Connection::Direct(to_owned(direct))
            } else {
                let via = self.interchange_candidates(src, dst)?;
                if via.is_empty() {
                    Connection::NoConnection
                } else {
                    Connection::Interchange(to_owned(via))
                }
            }
        };
        debug!(src, dst, distance_km, minutes, ?connection, "resolved trip");

        Ok(Trip {
            source: src.to_owned(),
            destination: dst.to_owned(),
            distance_km,
            minutes,
            connection,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Stations of `a` that also lie on `b`, de-duplicated, in `a`'s order.
fn shared_stations<'a>(a: &'a Line, b: &Line) -> Vec<&'a str> {
    let mut common: Vec<&'a str> = Vec::new();
    for name in a.stations() {
        if b.contains(name) && !common.contains(&name.as_str()) {
            common.push(name);
        }
    }
    common
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_owned).collect()
}
