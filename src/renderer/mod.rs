//! WebGPU rendering module
//!
//! `scene` builds flat-colored triangles from the game state; `pipeline`
//! uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::Overlay;
pub use vertex::Vertex;
