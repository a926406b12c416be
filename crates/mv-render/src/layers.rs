//! Rendering-ready map layers.
//!
//! Positions are `[lon, lat]` pairs and colours are `[r, g, b]` arrays, the
//! shapes web map path/scatter/text layers take directly.

use serde::Serialize;

use mv_core::{GeoPoint, Rgb};
use mv_network::MetroNetwork;

use crate::RenderResult;

/// Initial camera for the map.
pub const DEFAULT_ZOOM:  f32 = 11.0;
pub const DEFAULT_PITCH: f32 = 45.0;

// ── Layer rows ────────────────────────────────────────────────────────────────

/// One background polyline per line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePath {
    pub line:  String,
    pub color: [u8; 3],
    pub path:  Vec<[f64; 2]>,
}

/// Straight source → destination segment drawn over the network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HighlightPath {
    pub color: [u8; 3],
    pub path:  [[f64; 2]; 2],
}

/// Marker + text label for one station.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationLabel {
    pub name:     String,
    pub position: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude:  f64,
    pub longitude: f64,
    pub zoom:      f32,
    pub pitch:     f32,
    pub bearing:   f32,
}

// ── MapLayers ─────────────────────────────────────────────────────────────────

/// Everything the map collaborator needs to draw one query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapLayers {
    pub lines:     Vec<LinePath>,
    /// `None` when source and destination are the same station.
    pub highlight: Option<HighlightPath>,
    pub labels:    Vec<StationLabel>,
    pub view:      ViewState,
}

impl MapLayers {
    /// Build layers for a `src` → `dst` query.
    ///
    /// Lines with fewer than two positioned stations are left out, since
    /// they cannot form a path.
    pub fn build(network: &MetroNetwork, src: &str, dst: &str) -> RenderResult<Self> {
        let a = network.position(src)?;
        let b = network.position(dst)?;

        let lines = network
            .lines()
            .iter()
            .filter_map(|line| {
                let path: Vec<[f64; 2]> = network.line_path(line).map(GeoPoint::lon_lat).collect();
                (path.len() > 1).then(|| LinePath {
                    line: line.name.clone(),
                    color: line.color.to_array(),
                    path,
                })
            })
            .collect();

        let highlight = (src != dst).then(|| HighlightPath {
            color: Rgb::HIGHLIGHT.to_array(),
            path:  [a.lon_lat(), b.lon_lat()],
        });

        let labels = network
            .stations()
            .iter()
            .map(|s| StationLabel { name: s.name.clone(), position: s.pos.lon_lat() })
            .collect();

        let centre = a.midpoint(b);
        let view = ViewState {
            latitude:  centre.lat,
            longitude: centre.lon,
            zoom:      DEFAULT_ZOOM,
            pitch:     DEFAULT_PITCH,
            bearing:   0.0,
        };

        Ok(Self { lines, highlight, labels, view })
    }
}
