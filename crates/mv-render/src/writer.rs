//! The `LayerWriter` trait implemented by all export backends.

use crate::{MapLayers, RenderResult};

/// Trait implemented by the JSON and CSV layer writers.
pub trait LayerWriter {
    /// Write one set of map layers.
    fn write_layers(&mut self, layers: &MapLayers) -> RenderResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> RenderResult<()>;
}
