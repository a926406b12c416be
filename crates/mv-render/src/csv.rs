//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `line_paths.csv`     — one row per vertex, `seq` counts from 0 per line
//! - `station_labels.csv` — one row per station
//!
//! The highlight and view are per-query and have no table here; use the
//! JSON backend when a renderer needs them.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::writer::LayerWriter;
use crate::{MapLayers, RenderError, RenderResult};

pub const LINE_PATHS_FILE:     &str = "line_paths.csv";
pub const STATION_LABELS_FILE: &str = "station_labels.csv";

/// Writes line paths and station labels to two CSV files.
pub struct CsvWriter {
    paths:    Writer<File>,
    labels:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> RenderResult<Self> {
        let mut paths = Writer::from_path(dir.join(LINE_PATHS_FILE))?;
        paths.write_record(["line", "r", "g", "b", "seq", "lon", "lat"])?;

        let mut labels = Writer::from_path(dir.join(STATION_LABELS_FILE))?;
        labels.write_record(["name", "lon", "lat"])?;

        Ok(Self {
            paths,
            labels,
            finished: false,
        })
    }
}

impl LayerWriter for CsvWriter {
    fn write_layers(&mut self, layers: &MapLayers) -> RenderResult<()> {
        if self.finished {
            return Err(RenderError::Finished);
        }
        for line in &layers.lines {
            let [r, g, b] = line.color;
            for (seq, [lon, lat]) in line.path.iter().enumerate() {
                self.paths.write_record(&[
                    line.line.clone(),
                    r.to_string(),
                    g.to_string(),
                    b.to_string(),
                    seq.to_string(),
                    lon.to_string(),
                    lat.to_string(),
                ])?;
            }
        }
        for label in &layers.labels {
            let [lon, lat] = label.position;
            self.labels.write_record(&[label.name.clone(), lon.to_string(), lat.to_string()])?;
        }
        info!(lines = layers.lines.len(), labels = layers.labels.len(), "wrote layer CSVs");
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        if self.finished {
            return Ok(());
        }
        self.paths.flush()?;
        self.labels.flush()?;
        self.finished = true;
        Ok(())
    }
}
