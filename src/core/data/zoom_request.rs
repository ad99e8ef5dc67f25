use crate::core::data::pixel_coordinate::PixelCoordinate;

/// A zoom about `anchor`: `scale_factor < 1` zooms in, `> 1` zooms out and
/// `1` only recentres the view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomRequest {
    pub anchor: PixelCoordinate,
    pub scale_factor: f64,
}
