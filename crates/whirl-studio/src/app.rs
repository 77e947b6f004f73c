use std::ffi::CStr;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use whirl_engine::gl::GlowContext;
use whirl_engine::render::{GuiRenderer, GuiRendererConfig};

use crate::config::StudioConfig;
use crate::scene;

/// Everything tied to one window and its GL context.
///
/// Field order is drop order: GL objects go first, while the context is
/// still current.
struct Session {
    gui: GuiRenderer<GlowContext>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl Session {
    fn create(event_loop: &ActiveEventLoop, config: &StudioConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                configs
                    .max_by_key(|c| c.num_samples())
                    .expect("glutin offers at least one config")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let raw_handle = window
            .window_handle()
            .context("failed to get window handle")?
            .as_raw();
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_handle));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .context("failed to create OpenGL 3.3 core context")?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;
        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            log::warn!("vsync unavailable: {e}");
        }

        // SAFETY: the context was made current on this thread above and stays
        // current for the lifetime of the session.
        let gl = unsafe {
            GlowContext::load_with(|symbol: &CStr| gl_display.get_proc_address(symbol))
        };

        let renderer_config = GuiRendererConfig {
            shader_dir: config.shader_dir.clone(),
            ..Default::default()
        };
        let mut gui = GuiRenderer::new(Rc::new(gl), &renderer_config)
            .context("failed to create gui renderer")?;

        let size = window.inner_size();
        gui.adjust(size.width as i32, size.height as i32);

        log::info!("window opened: {}x{}", size.width, size.height);
        Ok(Self { gui, surface, context, window })
    }

    fn resize(&mut self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Minimized.
            return;
        };
        self.surface.resize(&self.context, w, h);
        self.gui.adjust(width as i32, height as i32);
    }

    fn frame(&mut self, config: &StudioConfig) -> Result<()> {
        let viewport = self.gui.viewport();
        self.gui.clear(config.clear_color);
        scene::draw(&mut self.gui, viewport.width, viewport.height);

        let stats = self.gui.submit();
        log::trace!("frame: {} shapes in {} draw calls", stats.shapes(), stats.draw_calls);

        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")?;
        Ok(())
    }
}

struct Studio {
    config: StudioConfig,
    session: Option<Session>,
}

impl ApplicationHandler for Studio {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }
        match Session::create(event_loop, &self.config) {
            Ok(session) => {
                session.window.request_redraw();
                self.session = Some(session);
            }
            Err(e) => {
                log::error!("failed to open studio window: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(session) = &self.session {
            session.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.session = None;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                session.resize(size.width, size.height);
                session.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = session.frame(&self.config) {
                    log::error!("{e:#}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

pub fn run(config: StudioConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut studio = Studio { config, session: None };

    event_loop
        .run_app(&mut studio)
        .context("winit event loop terminated with error")?;
    Ok(())
}
