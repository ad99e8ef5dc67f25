use crate::core::data::plane_point::PlanePoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRectError {
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for PlaneRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "plane rect bounds must be finite and non-empty: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for PlaneRectError {}

/// The rectangle of the complex plane currently mapped onto the frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneRect {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneRectError> {
        let all_finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !all_finite || x_max <= x_min || y_max <= y_min {
            return Err(PlaneRectError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn from_centre(
        centre: PlanePoint,
        half_width: f64,
        half_height: f64,
    ) -> Result<Self, PlaneRectError> {
        Self::new(
            centre.re - half_width,
            centre.re + half_width,
            centre.im - half_height,
            centre.im + half_height,
        )
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn centre(&self) -> PlanePoint {
        PlanePoint {
            re: self.x_min + self.width() / 2.0,
            im: self.y_min + self.height() / 2.0,
        }
    }
}
