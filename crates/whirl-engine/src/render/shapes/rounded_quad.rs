use bytemuck::{Pod, Zeroable};

use crate::gl::{VertexAttribute, VertexLayout};
use crate::paint::Color;

use super::common::{check_position, check_radius, check_size, InvalidShape, ShapeKind};

/// Rectangle with four equal circular corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedQuad {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub radius: f32,
    pub color: Color,
}

/// Vertex layout (32 bytes):
///
///  offset  0  position  [f32; 2]  loc 0
///  offset  8  size      [f32; 2]  loc 1
///  offset 16  local     [f32; 2]  loc 2  (px from the top-left corner)
///  offset 24  radius    f32       loc 3
///  offset 28  color     u32       loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RoundedQuadVertex {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub local: [f32; 2],
    pub radius: f32,
    pub color: u32,
}

/// Rounded quads; the fragment shader cuts and antialiases the corners.
#[derive(Debug, Copy, Clone)]
pub struct RoundedQuadKind;

impl ShapeKind for RoundedQuadKind {
    type Shape = RoundedQuad;
    type Vertex = RoundedQuadVertex;

    const NAME: &'static str = "rounded quad";
    const SHADER_FILE: &'static str = "rquad.wsh";
    const SHADER_SOURCE: &'static str = include_str!("shaders/rquad.wsh");

    fn layout() -> VertexLayout {
        VertexLayout::new([
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(1),
            VertexAttribute::uint(1),
        ])
    }

    fn validate(q: &RoundedQuad) -> Result<(), InvalidShape> {
        check_position(q.x, q.y)?;
        check_size(q.w, q.h)?;
        check_radius(q.radius)?;
        if q.radius * 2.0 > q.w || q.radius * 2.0 > q.h {
            return Err(InvalidShape::RadiusTooLarge { radius: q.radius, w: q.w, h: q.h });
        }
        Ok(())
    }

    fn corners(q: &RoundedQuad) -> [RoundedQuadVertex; 4] {
        let (x0, y0, x1, y1) = (q.x, q.y, q.x + q.w, q.y + q.h);
        let v = |position: [f32; 2], local: [f32; 2]| RoundedQuadVertex {
            position,
            size: [q.w, q.h],
            local,
            radius: q.radius,
            color: q.color.0,
        };
        [
            v([x0, y0], [0.0, 0.0]),
            v([x0, y1], [0.0, q.h]),
            v([x1, y1], [q.w, q.h]),
            v([x1, y0], [q.w, 0.0]),
        ]
    }
}
