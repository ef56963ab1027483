/// Sine of an angle in radians.
pub fn sin(n: f64) -> f64 {
    n.sin()
}

/// Cosine of an angle in radians.
pub fn cos(n: f64) -> f64 {
    n.cos()
}

/// Tangent of an angle in radians.
pub fn tan(n: f64) -> f64 {
    n.tan()
}
