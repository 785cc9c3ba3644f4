pub mod geojson;

pub use geojson::{GeoJsonError, GeoJsonSource};
