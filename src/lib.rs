pub mod config;
pub mod error;
pub mod grid;
pub mod manifest;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod writer;
pub mod year;

pub use config::Config;
pub use error::Error;
pub use manifest::{Manifest, ManifestBuilder, TileEntry};
pub use model::{Bounds, RasterGrid};
pub use source::DatasetSource;
pub use writer::GeoTiffWriter;
