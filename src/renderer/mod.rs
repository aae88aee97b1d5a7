//! Frame geometry
//!
//! Tessellates a [`Snapshot`] into a triangle list a host can upload as a
//! single vertex buffer. Windowing and GPU setup belong to the host.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::view::{BandKind, DrawableKind, Snapshot};

/// Triangle-list geometry for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
}

impl Frame {
    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

fn band_color(kind: BandKind) -> [f32; 4] {
    match kind {
        BandKind::Goal | BandKind::Median | BandKind::Start => colors::GRASS,
        BandKind::River => colors::WATER,
        BandKind::Road => colors::ROAD,
    }
}

/// Build the frame: background bands, then logs and vehicles, then the player
pub fn build_frame(snapshot: &Snapshot) -> Frame {
    let viewport = Vec2::new(snapshot.panel_width as f32, snapshot.panel_height as f32);
    let ended = snapshot.hud.game_over || snapshot.hud.game_won;

    let mut vertices = Vec::with_capacity((snapshot.bands.len() + snapshot.drawables.len()) * 6);
    for band in &snapshot.bands {
        vertices.extend(shapes::rect(&band.rect, band_color(band.kind), viewport));
    }
    for drawable in &snapshot.drawables {
        let color = match drawable.kind {
            DrawableKind::Log => colors::LOG,
            DrawableKind::Vehicle => colors::VEHICLE,
            DrawableKind::Player if ended => colors::PLAYER_DOWN,
            DrawableKind::Player => colors::PLAYER,
        };
        vertices.extend(shapes::rect(&drawable.rect, color, viewport));
    }

    Frame { vertices }
}
