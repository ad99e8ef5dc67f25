//! Mandelbrot escape-time renderer with click-to-zoom.

pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::ports::display_surface::DisplaySurfacePort;
pub use controllers::render::errors::RenderError;
pub use controllers::render::render_orchestrator::{RenderOrchestrator, RenderSummary};
pub use controllers::render::render_strategy::RenderStrategy;
pub use controllers::session::errors::SessionError;
pub use controllers::session::session::Session;
pub use controllers::session::session_config::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_ZOOM_IN_SCALE, DEFAULT_ZOOM_OUT_SCALE,
    SessionConfig, SessionConfigError,
};
pub use controllers::zoom::zoom_controller::{ZoomController, ZoomControllerError, ZoomOutcome};
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::pixel_coordinate::PixelCoordinate;
pub use crate::core::data::plane_point::PlanePoint;
pub use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
pub use crate::core::data::rgba::Rgba;
pub use crate::core::data::zoom_request::ZoomRequest;
pub use crate::core::fractals::mandelbrot::escape_time::escape_time;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_MAX_ITERATIONS, MandelbrotConfig};
pub use crate::core::viewport::viewport_mapper::{ViewportError, ViewportMapper};
pub use input::interaction::{InteractionRecord, ParsePointerButtonError, Phase, PointerButton};
pub use presenters::file::ppm::PpmFileSurface;
pub use presenters::memory::memory_surface::MemorySurface;

#[cfg(feature = "gui")]
pub use input::gui::run_gui::run_gui;
#[cfg(feature = "gui")]
pub use presenters::pixels::surface::PixelsSurface;
