//! Shared contract and helpers used by all shape kinds.

use std::fmt;

use bytemuck::Pod;

use crate::gl::VertexLayout;

/// Two triangles over one quad footprint, sharing the 0→2 diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Everything the batching engine needs to know about one shape kind.
///
/// Implemented by zero-sized marker types; the engine itself is generic and
/// never dispatches dynamically.
pub trait ShapeKind {
    /// Draw request as submitted by the caller.
    type Shape: Copy + fmt::Debug;
    /// One expanded corner, uploaded byte-for-byte.
    type Vertex: Pod;

    /// Used in logs and error context.
    const NAME: &'static str;
    /// File name looked up in a configured shader directory.
    const SHADER_FILE: &'static str;
    /// Built-in annotated shader source.
    const SHADER_SOURCE: &'static str;

    /// Attribute layout matching `Self::Vertex` field by field.
    fn layout() -> VertexLayout;

    /// Geometry check run on submission; invalid shapes are never queued.
    fn validate(shape: &Self::Shape) -> Result<(), InvalidShape>;

    /// Bounding-quad corners in the order `QUAD_INDICES` expects.
    fn corners(shape: &Self::Shape) -> [Self::Vertex; 4];
}

/// Why a submitted shape was dropped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidShape {
    Position { x: f32, y: f32 },
    Size { w: f32, h: f32 },
    Radius { radius: f32 },
    RadiusTooLarge { radius: f32, w: f32, h: f32 },
}

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidShape::Position { x, y } => write!(f, "invalid coordinates: ({x}, {y})"),
            InvalidShape::Size { w, h } => write!(f, "invalid dimensions: ({w}, {h})"),
            InvalidShape::Radius { radius } => write!(f, "invalid radius: ({radius})"),
            InvalidShape::RadiusTooLarge { radius, w, h } => {
                write!(f, "radius ({radius}) too large for ({w}, {h})")
            }
        }
    }
}

// NaN fails every comparison, so these also reject non-numbers.

#[inline]
pub(crate) fn check_position(x: f32, y: f32) -> Result<(), InvalidShape> {
    if x >= 0.0 && y >= 0.0 && x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(InvalidShape::Position { x, y })
    }
}

#[inline]
pub(crate) fn check_size(w: f32, h: f32) -> Result<(), InvalidShape> {
    if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() {
        Ok(())
    } else {
        Err(InvalidShape::Size { w, h })
    }
}

#[inline]
pub(crate) fn check_radius(radius: f32) -> Result<(), InvalidShape> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(InvalidShape::Radius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rules() {
        assert!(check_position(0.0, 0.0).is_ok());
        assert!(check_position(-0.5, 0.0).is_err());
        assert!(check_position(0.0, -1.0).is_err());
        assert!(check_position(f32::NAN, 0.0).is_err());
    }

    #[test]
    fn size_rules() {
        assert!(check_size(1.0, 1.0).is_ok());
        assert!(check_size(0.0, 1.0).is_err());
        assert!(check_size(1.0, -3.0).is_err());
        assert!(check_size(f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn radius_rules() {
        assert!(check_radius(0.1).is_ok());
        assert!(check_radius(0.0).is_err());
        assert!(check_radius(-2.0).is_err());
    }

    #[test]
    fn messages() {
        let e = InvalidShape::RadiusTooLarge { radius: 30.0, w: 50.0, h: 20.0 };
        assert_eq!(e.to_string(), "radius (30) too large for (50, 20)");
    }

    #[test]
    fn built_in_shaders_parse() {
        use crate::gl::ShaderSource;
        use crate::render::shapes::{CircleKind, QuadKind, RoundedQuadKind};

        for (name, text) in [
            (QuadKind::NAME, QuadKind::SHADER_SOURCE),
            (RoundedQuadKind::NAME, RoundedQuadKind::SHADER_SOURCE),
            (CircleKind::NAME, CircleKind::SHADER_SOURCE),
        ] {
            let src = ShaderSource::parse(text).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(src.vertex.starts_with("#version 330 core"), "{name}");
            assert!(src.vertex.contains("u_Projection"), "{name}");
            assert!(src.fragment.contains("void main()"), "{name}");
        }
    }

    #[test]
    fn rounded_quad_edges_stay_solid_outside_corners() {
        use crate::gl::ShaderSource;
        use crate::render::shapes::RoundedQuadKind;

        let src = ShaderSource::parse(RoundedQuadKind::SHADER_SOURCE).unwrap();
        let guard = src.fragment.find("if (q.x > 0.0 && q.y > 0.0)").unwrap();
        let falloff = src.fragment.find("smoothstep").unwrap();
        assert!(src.fragment.contains("float coverage = 1.0;"));
        assert!(guard < falloff, "falloff must be limited to corner regions");
    }
}
