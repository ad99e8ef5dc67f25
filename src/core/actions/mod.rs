pub mod generate_fractal;
pub mod write_frame_buffer;
