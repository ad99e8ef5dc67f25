use crate::controllers::render::render_strategy::RenderStrategy;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use std::error::Error;
use std::fmt;

pub const DEFAULT_FRAME_WIDTH: u32 = 700;
pub const DEFAULT_FRAME_HEIGHT: u32 = 400;
pub const DEFAULT_ZOOM_IN_SCALE: f64 = 0.5;
pub const DEFAULT_ZOOM_OUT_SCALE: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionConfigError {
    ZeroMaxIterations,
    InvalidZoomScale { scale: f64 },
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "max iterations must be greater than zero"),
            Self::InvalidZoomScale { scale } => {
                write!(f, "zoom scale must be positive and finite, got {}", scale)
            }
        }
    }
}

impl Error for SessionConfigError {}

/// Everything a session needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub frame_size: FrameSize,
    pub mandelbrot: MandelbrotConfig,
    pub zoom_in_scale: f64,
    pub zoom_out_scale: f64,
    pub render_strategy: RenderStrategy,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.mandelbrot.max_iterations == 0 {
            return Err(SessionConfigError::ZeroMaxIterations);
        }

        for scale in [self.zoom_in_scale, self.zoom_out_scale] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(SessionConfigError::InvalidZoomScale { scale });
            }
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
                .expect("default frame size is valid"),
            mandelbrot: MandelbrotConfig::default(),
            zoom_in_scale: DEFAULT_ZOOM_IN_SCALE,
            zoom_out_scale: DEFAULT_ZOOM_OUT_SCALE,
            render_strategy: RenderStrategy::Serial,
        }
    }
}
