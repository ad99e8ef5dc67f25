use crate::core::data::pixel_coordinate::PixelCoordinate;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: PixelCoordinate) -> Result<Self::Success, Self::Failure>;
}
