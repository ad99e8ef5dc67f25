use crate::core::actions::write_frame_buffer::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum WriteFrameBufferError<E> {
    ColourMap(E),
    FrameBuffer(FrameBufferError),
}

impl<E: fmt::Display> fmt::Display for WriteFrameBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for WriteFrameBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl<E> From<FrameBufferError> for WriteFrameBufferError<E> {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Colours row-major per-pixel values into `frame_buffer`, one `write` per pixel.
///
/// `input` must hold exactly one value per pixel of the frame.
pub fn write_frame_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    frame_buffer: &mut FrameBuffer,
) -> Result<(), WriteFrameBufferError<CMap::Failure>> {
    let frame_size = frame_buffer.frame_size();

    if input.len() != frame_size.pixel_count() {
        return Err(WriteFrameBufferError::FrameBuffer(
            FrameBufferError::SizeMismatch {
                expected: frame_size.pixel_count(),
                actual: input.len(),
            },
        ));
    }

    for (pixel, value) in frame_size.pixels().zip(input) {
        let colour = mapper.map(value).map_err(WriteFrameBufferError::ColourMap)?;

        frame_buffer.write(pixel.col, pixel.row, colour.r, colour.g, colour.b, colour.a)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::data::rgba::Rgba;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct RedChannelMap {}

    impl ColourMap<u8> for RedChannelMap {
        type Failure = StubError;

        fn map(&self, value: u8) -> Result<Rgba, Self::Failure> {
            Ok(Rgba {
                r: value,
                g: 0,
                b: 0,
                a: 255,
            })
        }
    }

    struct FailingMap {}

    impl ColourMap<u8> for FailingMap {
        type Failure = StubError;

        fn map(&self, _: u8) -> Result<Rgba, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_write_frame_buffer_places_values_row_major() {
        let mut frame_buffer = FrameBuffer::new(FrameSize::new(2, 2).unwrap());

        write_frame_buffer(vec![1, 2, 3, 4], &RedChannelMap {}, &mut frame_buffer).unwrap();

        assert_eq!(
            frame_buffer.data(),
            &[1, 0, 0, 255, 2, 0, 0, 255, 3, 0, 0, 255, 4, 0, 0, 255]
        );
    }

    #[test]
    fn test_write_frame_buffer_rejects_wrong_input_length() {
        let mut frame_buffer = FrameBuffer::new(FrameSize::new(2, 2).unwrap());

        let result = write_frame_buffer(vec![1, 2, 3], &RedChannelMap {}, &mut frame_buffer);

        assert_eq!(
            result,
            Err(WriteFrameBufferError::FrameBuffer(
                FrameBufferError::SizeMismatch {
                    expected: 4,
                    actual: 3
                }
            ))
        );
    }

    #[test]
    fn test_write_frame_buffer_propagates_colour_map_failure() {
        let mut frame_buffer = FrameBuffer::new(FrameSize::new(1, 1).unwrap());

        let result = write_frame_buffer(vec![9], &FailingMap {}, &mut frame_buffer);

        assert_eq!(result, Err(WriteFrameBufferError::ColourMap(StubError {})));
    }

    #[test]
    fn test_error_display() {
        let err: WriteFrameBufferError<StubError> = WriteFrameBufferError::ColourMap(StubError {});

        assert_eq!(err.to_string(), "colour map error: StubError");
    }
}
