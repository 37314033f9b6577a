pub(crate) mod config;
pub mod field;
pub(crate) mod presets;
pub(crate) mod raster;
pub(crate) mod synthesizer;
