use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_coordinate::PixelCoordinate;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are evaluated independently and flattened back into row-major order,
/// so the output matches [`generate_fractal`](super::generate_fractal::generate_fractal)
/// exactly. The algorithm is shared read-only across workers.
pub fn generate_fractal_rayon<Alg>(
    frame_size: FrameSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = frame_size.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..frame_size.height())
        .into_par_iter()
        .map(|row| {
            (0..width)
                .map(|col| algorithm.compute(PixelCoordinate { col, row }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: PixelCoordinate) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.col) + u64::from(pixel.row) * 1000)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: PixelCoordinate) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let frame_size = FrameSize::new(11, 9).unwrap();

        let sequential_results = generate_fractal(frame_size, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(frame_size, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};
        let frame_size = FrameSize::new(4, 5).unwrap();

        let result = generate_fractal_rayon(frame_size, &algorithm);

        assert!(result.is_err());
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm {};
        let frame_size = FrameSize::new(1, 1).unwrap();

        let rayon_results = generate_fractal_rayon(frame_size, &algorithm).unwrap();

        assert_eq!(rayon_results, vec![0]);
    }

    #[test]
    fn test_rayon_with_large_frame() {
        let algorithm = StubSuccessAlgorithm {};
        let frame_size = FrameSize::new(101, 101).unwrap();

        let sequential_results = generate_fractal(frame_size, &algorithm).unwrap();
        let rayon_results = generate_fractal_rayon(frame_size, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
