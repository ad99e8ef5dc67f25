pub const OPAQUE: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque grey with all three colour channels set to `intensity`.
    #[must_use]
    pub const fn grey(intensity: u8) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
            a: OPAQUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_is_opaque_with_equal_channels() {
        assert_eq!(
            Rgba::grey(42),
            Rgba {
                r: 42,
                g: 42,
                b: 42,
                a: 255
            }
        );
    }
}
