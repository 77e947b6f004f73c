use bytemuck::{Pod, Zeroable};

use crate::gl::{VertexAttribute, VertexLayout};
use crate::paint::Color;

use super::common::{check_position, check_radius, InvalidShape, ShapeKind};

/// Filled circle centered at `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Vertex layout (32 bytes):
///
///  offset  0  position  [f32; 2]  loc 0
///  offset  8  center    [f32; 2]  loc 1  (local, always (r, r))
///  offset 16  local     [f32; 2]  loc 2
///  offset 24  radius    f32       loc 3
///  offset 28  color     u32       loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleVertex {
    pub position: [f32; 2],
    pub center: [f32; 2],
    pub local: [f32; 2],
    pub radius: f32,
    pub color: u32,
}

/// Circles drawn over their bounding square.
#[derive(Debug, Copy, Clone)]
pub struct CircleKind;

impl ShapeKind for CircleKind {
    type Shape = Circle;
    type Vertex = CircleVertex;

    const NAME: &'static str = "circle";
    const SHADER_FILE: &'static str = "circle.wsh";
    const SHADER_SOURCE: &'static str = include_str!("shaders/circle.wsh");

    fn layout() -> VertexLayout {
        VertexLayout::new([
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(1),
            VertexAttribute::uint(1),
        ])
    }

    fn validate(c: &Circle) -> Result<(), InvalidShape> {
        check_position(c.x, c.y)?;
        check_radius(c.radius)
    }

    fn corners(c: &Circle) -> [CircleVertex; 4] {
        let r = c.radius;
        let d = r * 2.0;
        let (x0, y0, x1, y1) = (c.x - r, c.y - r, c.x + r, c.y + r);
        let v = |position: [f32; 2], local: [f32; 2]| CircleVertex {
            position,
            center: [r, r],
            local,
            radius: r,
            color: c.color.0,
        };
        [
            v([x0, y0], [0.0, 0.0]),
            v([x0, y1], [0.0, d]),
            v([x1, y1], [d, d]),
            v([x1, y0], [d, 0.0]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_vertex() {
        let l = CircleKind::layout();
        assert_eq!(l.stride(), std::mem::size_of::<CircleVertex>());
        assert_eq!(l.offset(3), std::mem::offset_of!(CircleVertex, radius));
    }

    #[test]
    fn bounding_square_is_centered() {
        let circle = Circle { x: 100.0, y: 50.0, radius: 10.0, color: Color::MAGENTA };
        let c = CircleKind::corners(&circle);
        assert_eq!(c[0].position, [90.0, 40.0]);
        assert_eq!(c[2].position, [110.0, 60.0]);
        assert!(c.iter().all(|v| v.center == [10.0, 10.0]));
        assert_eq!(c[2].local, [20.0, 20.0]);
    }

    #[test]
    fn validation() {
        let ok = Circle { x: 5.0, y: 5.0, radius: 3.0, color: Color::WHITE };
        assert!(CircleKind::validate(&ok).is_ok());
        assert!(CircleKind::validate(&Circle { radius: 0.0, ..ok }).is_err());
        assert!(CircleKind::validate(&Circle { y: -1.0, ..ok }).is_err());
    }
}
