use std::rc::Rc;

use anyhow::{Context, Result};
use glam::Mat4;

use crate::coords::Viewport;
use crate::gl::GlBackend;
use crate::paint::Color;

use super::config::GuiRendererConfig;
use super::renderer::ShapeRenderer;
use super::shapes::{Circle, CircleKind, Quad, QuadKind, RoundedQuad, RoundedQuadKind};

pub type QuadRenderer<G> = ShapeRenderer<G, QuadKind>;
pub type RoundedQuadRenderer<G> = ShapeRenderer<G, RoundedQuadKind>;
pub type CircleRenderer<G> = ShapeRenderer<G, CircleKind>;

/// What one [`GuiRenderer::submit`] put on screen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub quads: usize,
    pub rounded_quads: usize,
    pub circles: usize,
    pub draw_calls: usize,
}

impl FrameStats {
    #[inline]
    pub fn shapes(&self) -> usize {
        self.quads + self.rounded_quads + self.circles
    }
}

/// Shapes queued but not yet submitted, per kind.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PendingShapes {
    pub quads: usize,
    pub rounded_quads: usize,
    pub circles: usize,
}

/// Immediate-mode 2D shape drawing.
///
/// `draw_*` calls queue shapes in screen pixels (top-left origin, +Y down);
/// [`submit`](Self::submit) flushes every kind with one draw call each, in
/// the order quads, rounded quads, circles. Later kinds paint over earlier
/// ones.
///
/// The projection is identity until the first successful
/// [`adjust`](Self::adjust).
pub struct GuiRenderer<G: GlBackend> {
    gl: Rc<G>,
    viewport: Viewport,
    projection: Mat4,

    quads: QuadRenderer<G>,
    rounded_quads: RoundedQuadRenderer<G>,
    circles: CircleRenderer<G>,
}

impl<G: GlBackend> GuiRenderer<G> {
    pub fn new(gl: Rc<G>, config: &GuiRendererConfig) -> Result<Self> {
        let quads = QuadRenderer::from_config(gl.clone(), config)
            .context("failed to create quad renderer")?;
        let rounded_quads = RoundedQuadRenderer::from_config(gl.clone(), config)
            .context("failed to create rounded quad renderer")?;
        let circles = CircleRenderer::from_config(gl.clone(), config)
            .context("failed to create circle renderer")?;

        gl.enable_alpha_blend();

        log::trace!("gui renderer opened");
        Ok(Self {
            gl,
            viewport: Viewport::default(),
            projection: Mat4::IDENTITY,
            quads,
            rounded_quads,
            circles,
        })
    }

    // ── drawing ──────────────────────────────────────────────────────────

    pub fn draw_quad(&mut self, x: f32, y: f32, w: f32, h: f32, color: impl Into<Color>) -> bool {
        self.quads.submit(Quad { x, y, w, h, color: color.into() })
    }

    /// Vertical line: a `thickness`-wide quad extending `length` px down.
    pub fn draw_vline(
        &mut self,
        x: f32,
        y: f32,
        length: f32,
        thickness: f32,
        color: impl Into<Color>,
    ) -> bool {
        self.draw_quad(x, y, thickness, length, color)
    }

    /// Horizontal line: a `thickness`-tall quad extending `length` px right.
    pub fn draw_hline(
        &mut self,
        x: f32,
        y: f32,
        length: f32,
        thickness: f32,
        color: impl Into<Color>,
    ) -> bool {
        self.draw_quad(x, y, length, thickness, color)
    }

    pub fn draw_rounded_quad(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: impl Into<Color>,
    ) -> bool {
        self.rounded_quads.submit(RoundedQuad { x, y, w, h, radius, color: color.into() })
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: impl Into<Color>) -> bool {
        self.circles.submit(Circle { x, y, radius, color: color.into() })
    }

    // ── frame ────────────────────────────────────────────────────────────

    /// Flushes all queued shapes against the current projection.
    pub fn submit(&mut self) -> FrameStats {
        let projection = self.projection;
        let mut stats = FrameStats {
            quads: self.quads.draw(&projection),
            rounded_quads: self.rounded_quads.draw(&projection),
            circles: self.circles.draw(&projection),
            draw_calls: 0,
        };
        stats.draw_calls = [stats.quads, stats.rounded_quads, stats.circles]
            .iter()
            .filter(|&&n| n > 0)
            .count();
        stats
    }

    /// Rebuilds the projection for a `width` x `height` framebuffer.
    ///
    /// Non-positive sizes are rejected and the previous projection stays in
    /// effect.
    pub fn adjust(&mut self, width: i32, height: i32) -> bool {
        let viewport = Viewport::new(width as f32, height as f32);
        if !viewport.is_valid() {
            log::warn!("invalid viewport size: ({width}, {height})");
            return false;
        }

        log::debug!("adjusting gui renderer: ({width}, {height})");
        self.viewport = viewport;
        self.projection = self.viewport.projection();
        self.gl.set_viewport(0, 0, width, height);
        true
    }

    /// Clears the color buffer.
    pub fn clear(&self, color: impl Into<Color>) {
        self.gl.clear_color(color.into().to_f32());
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pending(&self) -> PendingShapes {
        PendingShapes {
            quads: self.quads.pending(),
            rounded_quads: self.rounded_quads.pending(),
            circles: self.circles.pending(),
        }
    }
}

impl<G: GlBackend> Drop for GuiRenderer<G> {
    fn drop(&mut self) {
        log::trace!("gui renderer closed");
    }
}
