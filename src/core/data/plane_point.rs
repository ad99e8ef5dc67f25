/// A point `re + i·im` of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlanePoint {
    pub re: f64,
    pub im: f64,
}
