//! WebGPU rendering module
//!
//! Builds a flat triangle list from the simulation state each frame and
//! draws it in a single pass. Everything is a colored quad.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
