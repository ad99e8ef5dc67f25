use crate::core::data::plane_rect::PlaneRect;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;

/// The classic framing of the whole set.
pub fn default_region() -> PlaneRect {
    PlaneRect::new(-2.5, 1.0, -1.0, 1.0).expect("default fractal region is valid")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: PlaneRect,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
