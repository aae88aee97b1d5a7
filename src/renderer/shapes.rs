//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::geometry::Rect;

/// Map playfield pixels (y down) to normalized device coordinates (y up)
#[inline]
pub fn to_ndc(point: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(point.x / viewport.x * 2.0 - 1.0, 1.0 - point.y / viewport.y * 2.0)
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4], viewport: Vec2) -> [Vertex; 6] {
    let min = to_ndc(rect.pos.as_vec2(), viewport);
    let max = to_ndc((rect.pos + rect.size).as_vec2(), viewport);

    let top_left = Vertex::new(min.x, min.y, color);
    let top_right = Vertex::new(max.x, min.y, color);
    let bottom_left = Vertex::new(min.x, max.y, color);
    let bottom_right = Vertex::new(max.x, max.y, color);

    [
        top_left,
        bottom_left,
        top_right,
        top_right,
        bottom_left,
        bottom_right,
    ]
}
