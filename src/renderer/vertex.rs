//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (normalized device coordinates) and color
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
}

/// Colors for game elements
pub mod colors {
    pub const GRASS: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const WATER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const ROAD: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const VEHICLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const LOG: [f32; 4] = [139.0 / 255.0, 69.0 / 255.0, 19.0 / 255.0, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Player tint once the session has ended
    pub const PLAYER_DOWN: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
