use std::f64::consts::SQRT_2;

/// Manhattan (L1) distance between two coordinate pairs.
#[inline]
pub fn manhattan(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Euclidean (L2) distance between two coordinate pairs.
#[inline]
pub fn euclidean(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Chebyshev (L∞) distance between two coordinate pairs.
#[inline]
pub fn chebyshev(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).abs().max((a[1] - b[1]).abs())
}

/// Octile distance: diagonal steps cost √2, straight steps cost 1.
#[inline]
pub fn octile(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = (a[0] - b[0]).abs();
    let dy = (a[1] - b[1]).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    lo * SQRT_2 + (hi - lo)
}
