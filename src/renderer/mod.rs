//! CPU-side rendering module
//!
//! Builds vertex lists for a frame; any GPU backend can upload them as-is.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, health_bar_width};
pub use vertex::Vertex;
