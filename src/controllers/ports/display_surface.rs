use std::error::Error;

use crate::core::data::frame_buffer::FrameBuffer;

/// Receives each completed frame. Called exactly once per render.
pub trait DisplaySurfacePort {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>>;
}
