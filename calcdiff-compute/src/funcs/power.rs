/// Exponential function, `e^n`.
pub fn exp(n: f64) -> f64 {
    n.exp()
}

/// Logarithm of `n` in the given base, computed as `ln(n) / ln(base)`.
pub fn log(n: f64, base: f64) -> f64 {
    n.ln() / base.ln()
}
