/// Round a score to 4 decimal places.
///
/// Idempotent: a value that is already rounded comes back unchanged.
pub fn round4(score: f64) -> f64 {
    let scaled = score * 10_000.0;
    // Magnitudes this large carry no fractional digits.
    if !scaled.is_finite() {
        return score;
    }
    scaled.round() / 10_000.0
}
