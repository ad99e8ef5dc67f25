use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;

/// Evaluates every pixel of the frame in row-major order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    frame_size: FrameSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    frame_size
        .pixels()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
