use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::window::Window;

#[derive(Debug)]
pub enum PixelsSurfaceError {
    FrameSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelsSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSizeMismatch { expected, actual } => write!(
                f,
                "pixels frame holds {} bytes but frame buffer has {}",
                expected, actual
            ),
        }
    }
}

impl Error for PixelsSurfaceError {}

/// Window-backed display surface. The pixels buffer always matches the
/// session frame size; the window surface is scaled to fit.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, frame_size: FrameSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(frame_size.width(), frame_size.height(), surface_texture)?;

        Ok(Self { pixels })
    }

    /// Shows the last copied frame again, e.g. after the window was exposed.
    pub fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    /// Maps a physical window position to a frame pixel, or `None` outside it.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Option<PixelCoordinate> {
        let (col, row) = self.pixels.window_pos_to_pixel((x as f32, y as f32)).ok()?;

        Some(PixelCoordinate {
            col: u32::try_from(col).ok()?,
            row: u32::try_from(row).ok()?,
        })
    }
}

impl DisplaySurfacePort for PixelsSurface {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>> {
        let dest = self.pixels.frame_mut();

        if dest.len() != frame.data().len() {
            return Err(Box::new(PixelsSurfaceError::FrameSizeMismatch {
                expected: dest.len(),
                actual: frame.data().len(),
            }));
        }

        dest.copy_from_slice(frame.data());
        self.pixels.render()?;

        Ok(())
    }
}
