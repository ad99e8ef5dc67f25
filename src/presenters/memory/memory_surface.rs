use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::error::Error;

/// Keeps a copy of the last presented frame. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    last_frame: Option<FrameBuffer>,
    present_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn present_count(&self) -> usize {
        self.present_count
    }
}

impl DisplaySurfacePort for MemorySurface {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>> {
        self.last_frame = Some(frame.clone());
        self.present_count += 1;

        Ok(())
    }
}
