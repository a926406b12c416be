//! JSON output backend.
//!
//! Writes a single `map_layers.json` document in the configured directory.
//! A JSON file holds one document, so a second `write_layers` call is an
//! error.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::writer::LayerWriter;
use crate::{MapLayers, RenderError, RenderResult};

pub const JSON_FILE: &str = "map_layers.json";

pub struct JsonWriter {
    path:    PathBuf,
    out:     Option<BufWriter<File>>,
    written: bool,
}

impl JsonWriter {
    /// Create (or truncate) `map_layers.json` in `dir`.
    pub fn new(dir: &Path) -> RenderResult<Self> {
        let path = dir.join(JSON_FILE);
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out: Some(out), written: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayerWriter for JsonWriter {
    fn write_layers(&mut self, layers: &MapLayers) -> RenderResult<()> {
        let Some(out) = self.out.as_mut() else {
            return Err(RenderError::Finished);
        };
        if self.written {
            return Err(RenderError::AlreadyWritten(self.path.clone()));
        }
        serde_json::to_writer_pretty(&mut *out, layers)?;
        out.write_all(b"\n")?;
        self.written = true;
        info!(path = %self.path.display(), lines = layers.lines.len(), "wrote map layers");
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
            self.out = None;
        }
        Ok(())
    }
}
