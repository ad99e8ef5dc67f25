pub mod frame_buffer;
pub mod frame_size;
pub mod pixel_coordinate;
pub mod plane_point;
pub mod plane_rect;
pub mod rgba;
pub mod zoom_request;
