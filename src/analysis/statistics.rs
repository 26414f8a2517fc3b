//! Goodness-of-fit statistics

/// Chi-squared distance between an observed and an expected distribution
///
/// χ² = Σ (observed − expected)² / expected
///
/// Both slices are probabilities in the same ordinal order. Lower is a better
/// fit; identical distributions score 0.
///
/// # Properties
/// - Always non-negative
/// - Zero exactly when the distributions match
/// - Expected probabilities must be positive (enforced by
///   [`ReferenceDistribution::resolve`](super::ReferenceDistribution::resolve))
///
/// # Examples
/// ```
/// use vigenere_cracker::analysis::chi_squared;
///
/// let expected = [0.5, 0.5];
/// assert!(chi_squared(&[0.5, 0.5], &expected).abs() < 1e-12);
/// assert!((chi_squared(&[1.0, 0.0], &expected) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn chi_squared(observed: &[f64], expected: &[f64]) -> f64 {
    debug_assert_eq!(observed.len(), expected.len());

    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let diff = o - e;
            diff * diff / e
        })
        .sum()
}
