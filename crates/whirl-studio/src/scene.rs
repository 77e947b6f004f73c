use whirl_engine::gl::GlBackend;
use whirl_engine::paint::Color;
use whirl_engine::render::GuiRenderer;

const PANEL: Color = Color::rgb(0x31, 0x32, 0x44);
const ACCENT: Color = Color::rgb(0x89, 0xb4, 0xfa);
const GRID: Color = Color::new(0xff, 0xff, 0xff, 0x20);

/// Queues the demo frame for a `width` x `height` framebuffer.
pub fn draw<G: GlBackend>(gui: &mut GuiRenderer<G>, width: f32, height: f32) {
    // Corner markers.
    gui.draw_quad(0.0, 0.0, 50.0, 50.0, Color::RED);
    gui.draw_quad((width - 50.0).max(0.0), 0.0, 50.0, 50.0, Color::GREEN);

    // Grid.
    let mut x = 100.0;
    while x < width {
        gui.draw_vline(x, 0.0, height, 1.0, GRID);
        x += 100.0;
    }
    let mut y = 100.0;
    while y < height {
        gui.draw_hline(0.0, y, width, 1.0, GRID);
        y += 100.0;
    }

    // Panel with a header bar and a row of buttons.
    let (px, py, pw, ph) = (80.0, 120.0, 360.0, 240.0);
    gui.draw_rounded_quad(px, py, pw, ph, 12.0, PANEL);
    gui.draw_hline(px + 16.0, py + 48.0, pw - 32.0, 2.0, ACCENT);
    for i in 0..3 {
        let bx = px + 16.0 + i as f32 * 112.0;
        gui.draw_rounded_quad(bx, py + ph - 64.0, 96.0, 40.0, 20.0, ACCENT.with_alpha(0xc0));
    }

    // Status dots.
    for (i, color) in [Color::RED, Color::YELLOW, Color::GREEN].into_iter().enumerate() {
        gui.draw_circle(px + pw - 24.0 - i as f32 * 24.0, py + 24.0, 8.0, color);
    }

    gui.draw_circle(width * 0.75, height * 0.5, 80.0, Color::MAGENTA.with_alpha(0xa0));
    gui.draw_circle(width * 0.75 + 60.0, height * 0.5 + 40.0, 60.0, Color::CYAN.with_alpha(0xa0));
}
