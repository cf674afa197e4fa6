//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.90, 1.0];
    pub const CLEAR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const FISH_EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BAR_BACKGROUND: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BAR_FILL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BAR_BORDER: [f32; 4] = [1.0, 0.83, 0.28, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
