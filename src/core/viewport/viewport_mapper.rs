use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidArgument { scale_factor: f64 },
    PrecisionExhausted { step: f64, magnitude: f64 },
    Region(PlaneRectError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { scale_factor } => {
                write!(f, "zoom scale factor must be positive and finite, got {}", scale_factor)
            }
            Self::PrecisionExhausted { step, magnitude } => {
                write!(
                    f,
                    "pixel step {:e} is below f64 resolution at magnitude {:e}",
                    step, magnitude
                )
            }
            Self::Region(err) => write!(f, "zoom produced an invalid region: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaneRectError> for ViewportError {
    fn from(err: PlaneRectError) -> Self {
        Self::Region(err)
    }
}

/// Maps frame pixels onto a rectangle of the complex plane.
///
/// The mapping is affine and total: pixels outside the frame extrapolate
/// rather than fail, so `plane_x(width) == x_max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportMapper {
    region: PlaneRect,
    frame_size: FrameSize,
}

impl ViewportMapper {
    #[must_use]
    pub fn new(region: PlaneRect, frame_size: FrameSize) -> Self {
        Self { region, frame_size }
    }

    #[must_use]
    pub fn region(&self) -> PlaneRect {
        self.region
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[must_use]
    pub fn plane_x(&self, col: u32) -> f64 {
        self.region.x_min() + self.region.width() / f64::from(self.frame_size.width()) * f64::from(col)
    }

    #[must_use]
    pub fn plane_y(&self, row: u32) -> f64 {
        self.region.y_min() + self.region.height() / f64::from(self.frame_size.height()) * f64::from(row)
    }

    #[must_use]
    pub fn plane_point(&self, pixel: PixelCoordinate) -> PlanePoint {
        PlanePoint {
            re: self.plane_x(pixel.col),
            im: self.plane_y(pixel.row),
        }
    }

    /// Recentres the region on `anchor` and scales its extent by `scale_factor`.
    ///
    /// On error the region is left unchanged.
    pub fn zoom(&mut self, anchor: PixelCoordinate, scale_factor: f64) -> Result<(), ViewportError> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(ViewportError::InvalidArgument { scale_factor });
        }

        let target = self.plane_point(anchor);
        let half_width = self.region.width() * scale_factor / 2.0;
        let half_height = self.region.height() * scale_factor / 2.0;

        let step_x = half_width * 2.0 / f64::from(self.frame_size.width());
        let step_y = half_height * 2.0 / f64::from(self.frame_size.height());
        let step = step_x.min(step_y);
        let magnitude = target.re.abs().max(target.im.abs()).max(1.0);

        if step <= f64::EPSILON * magnitude {
            return Err(ViewportError::PrecisionExhausted { step, magnitude });
        }

        self.region = PlaneRect::from_centre(target, half_width, half_height)?;

        Ok(())
    }

    pub fn reset(&mut self, region: PlaneRect) {
        self.region = region;
    }
}
