use bytemuck::{Pod, Zeroable};

use crate::gl::{VertexAttribute, VertexLayout};
use crate::paint::Color;

use super::common::{check_position, check_size, InvalidShape, ShapeKind};

/// Solid axis-aligned rectangle. `(x, y)` is the top-left corner in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

/// Vertex layout (12 bytes):
///
///  offset 0  position  [f32; 2]  loc 0
///  offset 8  color     u32       loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub color: u32,
}

/// Plain quads: position + color per corner.
#[derive(Debug, Copy, Clone)]
pub struct QuadKind;

impl ShapeKind for QuadKind {
    type Shape = Quad;
    type Vertex = QuadVertex;

    const NAME: &'static str = "quad";
    const SHADER_FILE: &'static str = "quad.wsh";
    const SHADER_SOURCE: &'static str = include_str!("shaders/quad.wsh");

    fn layout() -> VertexLayout {
        VertexLayout::new([VertexAttribute::float(2), VertexAttribute::uint(1)])
    }

    fn validate(q: &Quad) -> Result<(), InvalidShape> {
        check_position(q.x, q.y)?;
        check_size(q.w, q.h)
    }

    fn corners(q: &Quad) -> [QuadVertex; 4] {
        let color = q.color.0;
        let (x0, y0, x1, y1) = (q.x, q.y, q.x + q.w, q.y + q.h);
        [
            QuadVertex { position: [x0, y0], color },
            QuadVertex { position: [x0, y1], color },
            QuadVertex { position: [x1, y1], color },
            QuadVertex { position: [x1, y0], color },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_vertex() {
        assert_eq!(QuadKind::layout().stride(), std::mem::size_of::<QuadVertex>());
        assert_eq!(QuadKind::layout().offset(1), std::mem::offset_of!(QuadVertex, color));
    }

    #[test]
    fn corners_cover_footprint() {
        let q = Quad { x: 0.0, y: 0.0, w: 50.0, h: 50.0, color: Color::RED };
        let c = QuadKind::corners(&q);
        let pos: Vec<[f32; 2]> = c.iter().map(|v| v.position).collect();
        assert_eq!(pos, vec![[0.0, 0.0], [0.0, 50.0], [50.0, 50.0], [50.0, 0.0]]);
        assert!(c.iter().all(|v| v.color == Color::RED.0));
    }

    #[test]
    fn validation() {
        let ok = Quad { x: 1230.0, y: 0.0, w: 50.0, h: 50.0, color: Color::GREEN };
        assert!(QuadKind::validate(&ok).is_ok());
        assert_eq!(
            QuadKind::validate(&Quad { x: -1.0, ..ok }),
            Err(InvalidShape::Position { x: -1.0, y: 0.0 })
        );
        assert_eq!(
            QuadKind::validate(&Quad { h: 0.0, ..ok }),
            Err(InvalidShape::Size { w: 50.0, h: 0.0 })
        );
    }
}
