use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_coordinate::PixelCoordinate;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::viewport::viewport_mapper::ViewportMapper;

/// Escape-time evaluation over a fixed viewport snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: ViewportMapper,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: PixelCoordinate) -> Result<Self::Success, Self::Failure> {
        let frame_size = self.viewport.frame_size();

        if !frame_size.contains(pixel) {
            return Err(MandelbrotError::PixelOutsideFrame { pixel, frame_size });
        }

        let c = self.viewport.plane_point(pixel);

        Ok(escape_time(c.re, c.im, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: ViewportMapper, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportMapper {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::data::plane_rect::PlaneRect;

    fn create_viewport() -> ViewportMapper {
        ViewportMapper::new(
            PlaneRect::new(-2.0, 0.0, -1.0, 1.0).unwrap(),
            FrameSize::new(2, 2).unwrap(),
        )
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        let result = MandelbrotAlgorithm::new(create_viewport(), 0);

        assert_eq!(result, Err(MandelbrotError::ZeroMaxIterations));
    }

    #[test]
    fn test_compute_maps_pixel_through_viewport() {
        let algorithm = MandelbrotAlgorithm::new(create_viewport(), 255).unwrap();

        // (-2, -1), (-1, -1), (-2, 0), (-1, 0)
        assert_eq!(algorithm.compute(PixelCoordinate { col: 0, row: 0 }), Ok(1));
        assert_eq!(algorithm.compute(PixelCoordinate { col: 1, row: 0 }), Ok(3));
        assert_eq!(algorithm.compute(PixelCoordinate { col: 0, row: 1 }), Ok(1));
        assert_eq!(algorithm.compute(PixelCoordinate { col: 1, row: 1 }), Ok(255));
    }

    #[test]
    fn test_compute_rejects_pixel_outside_frame() {
        let algorithm = MandelbrotAlgorithm::new(create_viewport(), 255).unwrap();
        let pixel = PixelCoordinate { col: 2, row: 0 };

        assert_eq!(
            algorithm.compute(pixel),
            Err(MandelbrotError::PixelOutsideFrame {
                pixel,
                frame_size: FrameSize::new(2, 2).unwrap()
            })
        );
    }

    #[test]
    fn test_algorithm_holds_a_snapshot() {
        let mut viewport = create_viewport();
        let algorithm = MandelbrotAlgorithm::new(viewport, 10).unwrap();

        viewport.zoom(PixelCoordinate { col: 1, row: 1 }, 0.5).unwrap();

        assert_ne!(algorithm.viewport(), &viewport);
        assert_eq!(algorithm.max_iterations(), 10);
    }
}
