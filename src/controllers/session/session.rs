use log::{debug, info};

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::controllers::render::render_orchestrator::{RenderOrchestrator, RenderSummary};
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::session_config::SessionConfig;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::zoom_request::ZoomRequest;
use crate::core::viewport::viewport_mapper::ViewportMapper;

/// One viewing session: a single viewport rendered into a single frame buffer
/// and shown on a single surface.
pub struct Session<S: DisplaySurfacePort> {
    config: SessionConfig,
    viewport: ViewportMapper,
    frame_buffer: FrameBuffer,
    orchestrator: RenderOrchestrator,
    surface: S,
}

impl<S: DisplaySurfacePort> Session<S> {
    pub fn new(config: SessionConfig, surface: S) -> Result<Self, SessionError> {
        config.validate()?;

        info!(
            "starting {}x{} session, max {} iterations, {} render",
            config.frame_size.width(),
            config.frame_size.height(),
            config.mandelbrot.max_iterations,
            config.render_strategy
        );

        Ok(Self {
            viewport: ViewportMapper::new(config.mandelbrot.region, config.frame_size),
            frame_buffer: FrameBuffer::new(config.frame_size),
            orchestrator: RenderOrchestrator::new(config.render_strategy),
            config,
            surface,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportMapper {
        &self.viewport
    }

    #[must_use]
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn render(&mut self) -> Result<RenderSummary, SessionError> {
        let summary = self.orchestrator.render_frame(
            &self.viewport,
            &mut self.frame_buffer,
            self.config.mandelbrot.max_iterations,
            &mut self.surface,
        )?;

        Ok(summary)
    }

    /// Applies the zoom then re-renders. A rejected zoom leaves both the
    /// viewport and the presented frame untouched.
    pub fn zoom_and_render(&mut self, request: ZoomRequest) -> Result<RenderSummary, SessionError> {
        self.viewport.zoom(request.anchor, request.scale_factor)?;

        let region = self.viewport.region();
        debug!(
            "viewport now x [{}, {}], y [{}, {}]",
            region.x_min(),
            region.x_max(),
            region.y_min(),
            region.y_max()
        );

        self.render()
    }

    pub fn reset_view(&mut self) -> Result<RenderSummary, SessionError> {
        self.viewport.reset(self.config.mandelbrot.region);

        self.render()
    }
}
