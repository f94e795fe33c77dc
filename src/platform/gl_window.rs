//=========================================================================
// GL Window
//=========================================================================
//
// The window, its OpenGL context and surface, and the canvas painter
// bound to them.
//
// Setup:
// ```text
//   DisplayBuilder (window + GL config, MSAA)
//     → ContextAttributesBuilder (core profile, requested version)
//     → create_window_surface → make_current
//     → FemtovgPainter (GL symbols from the display)
// ```
//
// Fields drop in declaration order: the painter's GL objects go before
// the surface and context they live in.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::num::NonZeroU32;

use glutin::config::ConfigTemplateBuilder;
use glutin::display::GetGlDisplay;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use log::{debug, info, warn};
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

//=== Internal Dependencies ===============================================

use crate::config::WindowConfig;
use crate::error::PlatformError;
use crate::render::{FemtovgPainter, Viewport};

//=== GlWindow ============================================================

pub(crate) struct GlWindow {
    painter: FemtovgPainter,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    //--- Construction -----------------------------------------------------

    /// Opens the window and makes a GL context current on it.
    pub(crate) fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, PlatformError> {
        let attributes = WindowAttributes::default()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let mut template = ConfigTemplateBuilder::new().with_alpha_size(8);
        if config.samples > 0 {
            template = template.with_multisampling(config.samples);
        }

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let window = window
            .ok_or_else(|| PlatformError::WindowCreation("display created no window".into()))?;

        debug!(
            target: "platform",
            "GL config: {} samples, alpha {}",
            gl_config.num_samples(),
            gl_config.alpha_size()
        );

        //--- Context ------------------------------------------------------

        let [major, minor] = config.gl_version;
        let raw_handle = window.window_handle()?.as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        let display = gl_config.display();
        let not_current = unsafe { display.create_context(&gl_config, &context_attributes)? };

        //--- Surface ------------------------------------------------------

        let surface_attributes = window.build_surface_attributes(Default::default())?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes)? };
        let context = not_current.make_current(&surface)?;

        if config.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                warn!(target: "platform", "Could not enable vsync: {}", e);
            }
        }

        //--- Canvas -------------------------------------------------------

        // The context stays current on this thread for the painter's lifetime.
        let painter = unsafe {
            FemtovgPainter::from_gl_loader(|symbol| display.get_proc_address(symbol))?
        };

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI, OpenGL {}.{} core",
            size.width,
            size.height,
            window.scale_factor(),
            major,
            minor
        );

        Ok(Self { painter, surface, context, window })
    }

    //--- Accessors --------------------------------------------------------

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn painter_mut(&mut self) -> &mut FemtovgPainter {
        &mut self.painter
    }

    /// Current drawable area in logical pixels.
    pub(crate) fn viewport(&self) -> Viewport {
        let scale = self.window.scale_factor();
        let logical: LogicalSize<f32> = self.window.inner_size().to_logical(scale);
        Viewport::new(logical.width, logical.height, scale as f32)
    }

    //--- Surface ----------------------------------------------------------

    /// Resizes the GL surface. Zero sizes (minimized windows) are ignored.
    pub(crate) fn resize(&self, size: PhysicalSize<u32>) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            self.surface.resize(&self.context, width, height);
        }
    }

    /// Presents the frame drawn since the last swap.
    pub(crate) fn present(&self) -> Result<(), PlatformError> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

//=== Config Selection ====================================================

/// Prefers the config with the most MSAA samples.
fn pick_config(
    configs: Box<dyn Iterator<Item = glutin::config::Config> + '_>,
) -> glutin::config::Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        // find_configs fails on an empty match before the picker runs
        .expect("display returned an empty GL config list")
}
