//! WebGPU rendering module
//!
//! A read-only sink: builds a triangle list from the simulation state each
//! frame and draws it. Never mutates game state.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_frame;
pub use vertex::Vertex;
