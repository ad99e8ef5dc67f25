pub mod ports;
#[allow(clippy::module_inception)]
pub mod write_frame_buffer;
