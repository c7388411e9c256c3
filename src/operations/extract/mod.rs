mod extract_vertices;
mod place_model;

pub use extract_vertices::{ExtractVertices, ExtractedViews};
pub use place_model::{PlaceModel, PlacementParams};
