use crate::core::data::rgba::Rgba;
use std::error::Error;

pub trait ColourMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<Rgba, Self::Failure>;
}
