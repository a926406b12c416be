//! `mv-render` — output consumed by the map rendering collaborator.
//!
//! Nothing here draws.  [`MapLayers`] turns a network plus a query into
//! path, marker, and label data; [`TripSummary`] formats a resolved trip as
//! text; the writers persist layers for an external renderer.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mv_network::{kolkata, RouteResolver};
//! use mv_render::{JsonWriter, LayerWriter, MapLayers, TripSummary};
//!
//! let net = kolkata::network().unwrap();
//! let trip = RouteResolver::new(&net).resolve("Esplanade", "Central").unwrap();
//! println!("{}", TripSummary::new(&trip));
//!
//! let layers = MapLayers::build(&net, "Esplanade", "Central").unwrap();
//! let mut out = JsonWriter::new(Path::new("output")).unwrap();
//! out.write_layers(&layers).unwrap();
//! out.finish().unwrap();
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod layers;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{RenderError, RenderResult};
pub use json::JsonWriter;
pub use layers::{HighlightPath, LinePath, MapLayers, StationLabel, ViewState};
pub use summary::TripSummary;
pub use writer::LayerWriter;
