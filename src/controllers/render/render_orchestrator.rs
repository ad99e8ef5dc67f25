use std::time::{Duration, Instant};

use log::debug;

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::controllers::render::errors::RenderError;
use crate::controllers::render::render_strategy::RenderStrategy;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::write_frame_buffer::write_frame_buffer::write_frame_buffer;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::grayscale::MandelbrotGrayscale;
use crate::core::viewport::viewport_mapper::ViewportMapper;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub render_duration: Duration,
    pub pixel_count: usize,
}

/// Drives one full-frame render: map, evaluate, write, present.
#[derive(Debug, Copy, Clone, Default)]
pub struct RenderOrchestrator {
    strategy: RenderStrategy,
}

impl RenderOrchestrator {
    #[must_use]
    pub fn new(strategy: RenderStrategy) -> Self {
        Self { strategy }
    }

    /// Recomputes every pixel of `frame_buffer` from `viewport` and presents it.
    ///
    /// The viewport is copied before evaluation starts, so the whole frame
    /// reflects a single region. `surface` is not touched unless the frame
    /// was fully written.
    pub fn render_frame<S: DisplaySurfacePort + ?Sized>(
        &self,
        viewport: &ViewportMapper,
        frame_buffer: &mut FrameBuffer,
        max_iterations: u32,
        surface: &mut S,
    ) -> Result<RenderSummary, RenderError> {
        let snapshot = *viewport;
        let frame_size = snapshot.frame_size();

        if frame_buffer.frame_size() != frame_size {
            return Err(RenderError::SizeMismatch {
                viewport: frame_size,
                frame_buffer: frame_buffer.frame_size(),
            });
        }

        let algorithm = MandelbrotAlgorithm::new(snapshot, max_iterations)?;
        let colour_map = MandelbrotGrayscale::new(max_iterations);

        let start = Instant::now();
        let iterations = match self.strategy {
            RenderStrategy::Serial => generate_fractal(frame_size, &algorithm)?,
            RenderStrategy::Parallel => generate_fractal_rayon(frame_size, &algorithm)?,
        };
        write_frame_buffer(iterations, &colour_map, frame_buffer)?;
        let render_duration = start.elapsed();

        surface.present(frame_buffer).map_err(RenderError::Present)?;

        debug!(
            "rendered {}x{} frame ({} strategy, max {} iterations) in {:?}",
            frame_size.width(),
            frame_size.height(),
            self.strategy,
            max_iterations,
            render_duration
        );

        Ok(RenderSummary {
            render_duration,
            pixel_count: frame_size.pixel_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::data::plane_rect::PlaneRect;
    use crate::core::data::rgba::Rgba;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;
    use std::error::Error;
    use std::fmt;

    #[derive(Default)]
    struct MockSurface {
        presented: Vec<FrameBuffer>,
    }

    impl DisplaySurfacePort for MockSurface {
        fn present(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>> {
            self.presented.push(frame.clone());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct SurfaceGone {}

    impl fmt::Display for SurfaceGone {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "surface gone")
        }
    }

    impl Error for SurfaceGone {}

    struct FailingSurface {}

    impl DisplaySurfacePort for FailingSurface {
        fn present(&mut self, _: &FrameBuffer) -> Result<(), Box<dyn Error>> {
            Err(Box::new(SurfaceGone {}))
        }
    }

    fn golden_viewport() -> ViewportMapper {
        ViewportMapper::new(
            PlaneRect::new(-2.0, 0.0, -1.0, 1.0).unwrap(),
            FrameSize::new(2, 2).unwrap(),
        )
    }

    fn classic_viewport(width: u32, height: u32) -> ViewportMapper {
        ViewportMapper::new(
            PlaneRect::new(-2.5, 1.0, -1.0, 1.0).unwrap(),
            FrameSize::new(width, height).unwrap(),
        )
    }

    #[test]
    fn test_render_frame_golden_two_by_two() {
        let viewport = golden_viewport();
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();

        RenderOrchestrator::default()
            .render_frame(&viewport, &mut frame_buffer, 255, &mut surface)
            .unwrap();

        assert_eq!(
            frame_buffer.data(),
            &[
                1, 1, 1, 255, // (-2, -1)
                3, 3, 3, 255, // (-1, -1)
                1, 1, 1, 255, // (-2, 0)
                255, 255, 255, 255, // (-1, 0) never escapes
            ]
        );
    }

    #[test]
    fn test_render_frame_presents_exactly_once_after_full_scan() {
        let viewport = golden_viewport();
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();

        RenderOrchestrator::default()
            .render_frame(&viewport, &mut frame_buffer, 255, &mut surface)
            .unwrap();

        assert_eq!(surface.presented.len(), 1);
        assert_eq!(surface.presented[0], frame_buffer);
    }

    #[test]
    fn test_render_frame_writes_every_pixel_opaque_grey() {
        let viewport = classic_viewport(35, 20);
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();

        let summary = RenderOrchestrator::default()
            .render_frame(&viewport, &mut frame_buffer, 255, &mut surface)
            .unwrap();

        assert_eq!(summary.pixel_count, 700);
        for pixel in viewport.frame_size().pixels() {
            let colour = frame_buffer.pixel(pixel.col, pixel.row).unwrap();
            assert_eq!(colour, Rgba::grey(colour.r));
        }
    }

    #[test]
    fn test_rerender_is_bit_identical() {
        let viewport = classic_viewport(70, 40);
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();
        let orchestrator = RenderOrchestrator::default();

        orchestrator
            .render_frame(&viewport, &mut frame_buffer, 255, &mut surface)
            .unwrap();
        orchestrator
            .render_frame(&viewport, &mut frame_buffer, 255, &mut surface)
            .unwrap();

        assert_eq!(surface.presented.len(), 2);
        assert_eq!(surface.presented[0].data(), surface.presented[1].data());
    }

    #[test]
    fn test_parallel_strategy_matches_serial() {
        let viewport = classic_viewport(70, 40);
        let mut serial_buffer = FrameBuffer::new(viewport.frame_size());
        let mut parallel_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();

        RenderOrchestrator::new(RenderStrategy::Serial)
            .render_frame(&viewport, &mut serial_buffer, 255, &mut surface)
            .unwrap();
        RenderOrchestrator::new(RenderStrategy::Parallel)
            .render_frame(&viewport, &mut parallel_buffer, 255, &mut surface)
            .unwrap();

        assert_eq!(serial_buffer, parallel_buffer);
    }

    #[test]
    fn test_render_frame_rejects_mismatched_buffer() {
        let viewport = golden_viewport();
        let mut frame_buffer = FrameBuffer::new(FrameSize::new(3, 2).unwrap());
        let mut surface = MockSurface::default();

        let result =
            RenderOrchestrator::default().render_frame(&viewport, &mut frame_buffer, 255, &mut surface);

        assert!(matches!(result, Err(RenderError::SizeMismatch { .. })));
        assert!(surface.presented.is_empty());
    }

    #[test]
    fn test_render_frame_rejects_zero_max_iterations() {
        let viewport = golden_viewport();
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());
        let mut surface = MockSurface::default();

        let result =
            RenderOrchestrator::default().render_frame(&viewport, &mut frame_buffer, 0, &mut surface);

        assert!(matches!(
            result,
            Err(RenderError::Algorithm(MandelbrotError::ZeroMaxIterations))
        ));
        assert!(surface.presented.is_empty());
    }

    #[test]
    fn test_render_frame_reports_surface_failure() {
        let viewport = golden_viewport();
        let mut frame_buffer = FrameBuffer::new(viewport.frame_size());

        let result = RenderOrchestrator::default().render_frame(
            &viewport,
            &mut frame_buffer,
            255,
            &mut FailingSurface {},
        );

        let err = result.unwrap_err();
        assert!(matches!(err, RenderError::Present(_)));
        assert_eq!(err.to_string(), "display surface error: surface gone");
    }
}
