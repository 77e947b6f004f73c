use glam::Mat4;

/// Framebuffer size in pixels.
///
/// Renderers use it to build the orthographic projection from screen pixels
/// (top-left origin, +Y down) to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Orthographic projection with left=0, right=width, bottom=height, top=0,
    /// near=-1, far=1.
    #[inline]
    pub fn projection(self) -> Mat4 {
        Mat4::orthographic_rh_gl(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }
}
