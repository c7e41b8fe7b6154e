use serde::{Deserialize, Serialize};

/// Number of numeric features per hero.
pub const FEATURE_DIM: usize = 6;

/// Feature column names, in vector order. The order is fixed: it defines
/// the layout of every [`FeatureVector`] built from a hero record.
pub const FEATURE_COLUMNS: [&str; FEATURE_DIM] = [
    "defense_overall",
    "offense_overall",
    "skill_effect_overall",
    "difficulty_overall",
    "win_rate",
    "pick_rate",
];

/// A hero's numeric stats as a fixed-order vector in feature space.
///
/// Features are kept in their native units; no scaling or normalization
/// is applied before distance computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: [f64; FEATURE_DIM],
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; FEATURE_DIM]) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        FEATURE_DIM
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Compute L2 (Euclidean) distance to another vector.
    #[inline]
    pub fn l2_distance(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<[f64; FEATURE_DIM]> for FeatureVector {
    fn from(data: [f64; FEATURE_DIM]) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_distance() {
        let v1 = FeatureVector::new([0.0; FEATURE_DIM]);
        let v2 = FeatureVector::new([3.0, 4.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((v1.l2_distance(&v2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_distance_identical() {
        let v = FeatureVector::new([1.5, 2.5, 3.5, 4.5, 0.5, 0.1]);
        assert_eq!(v.l2_distance(&v), 0.0);
    }

    #[test]
    fn test_l2_distance_symmetric() {
        let v1 = FeatureVector::new([7.0, 5.0, 6.0, 2.0, 0.54, 1.2]);
        let v2 = FeatureVector::new([3.0, 9.0, 4.0, 8.0, 0.48, 0.3]);
        assert_eq!(v1.l2_distance(&v2), v2.l2_distance(&v1));
    }
}
