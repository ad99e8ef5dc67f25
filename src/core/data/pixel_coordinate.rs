/// A pixel position in the frame, `col` growing rightwards and `row` downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelCoordinate {
    pub col: u32,
    pub row: u32,
}
