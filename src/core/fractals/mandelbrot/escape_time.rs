/// Squared escape radius. Once `|z| >= 2` the orbit is guaranteed to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z = z² + c` from `z = 0` until `|z|² >= 4` or
/// `max_iterations` is reached, with `c = re0 + i·im0`.
///
/// Non-finite input never panics: any comparison against NaN fails, so the
/// loop stops at the current count.
#[must_use]
pub fn escape_time(re0: f64, im0: f64, max_iterations: u32) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut iterations = 0;

    while x * x + y * y < ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        let x_next = x * x - y * y + re0;
        y = 2.0 * x * y + im0;
        x = x_next;
        iterations += 1;
    }

    iterations
}
