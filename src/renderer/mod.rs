//! Rendering helpers
//!
//! Builds vertex data from a `RenderSnapshot`. Uploading and drawing are
//! up to the window layer.

pub mod shapes;
pub mod vertex;

pub use shapes::scene_vertices;
pub use vertex::Vertex;
