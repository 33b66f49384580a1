/// How a pair's squared separation is compared against its radii.
///
/// With `t = 2 (rᵢ + rⱼ)`, a pair is bonded when `d² < threshold(rᵢ, rⱼ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdConvention {
    /// `d² < t`: the squared distance is compared against the linear sum.
    ///
    /// Matches the bond sets of established XYZ viewers. The comparison mixes
    /// Å² with Å, so the effective cutoff is `sqrt(t)` rather than `t`.
    #[default]
    Legacy,
    /// `d² < t²`, equivalent to `d < 2 (rᵢ + rⱼ)`.
    Squared,
}

impl ThresholdConvention {
    /// Value a squared separation must fall strictly below to form a bond.
    #[inline]
    pub fn threshold(self, r_i: f64, r_j: f64) -> f64 {
        let t = 2.0 * (r_i + r_j);
        match self {
            Self::Legacy => t,
            Self::Squared => t * t,
        }
    }

    /// Largest separation at which two atoms with radii up to `max_radius` can bond.
    pub fn max_bond_distance(self, max_radius: f64) -> f64 {
        self.threshold(max_radius, max_radius).sqrt()
    }
}

/// Pair enumeration strategy. All strategies produce identical bond sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Every unordered pair evaluated in `(i, j)` order.
    #[default]
    BruteForce,
    /// Uniform spatial binning; only atoms in the same or adjacent cells are compared.
    Grid,
    /// Brute force with rows of the pair matrix spread over the rayon pool.
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectConfig {
    pub threshold: ThresholdConvention,
    pub strategy: Strategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_threshold_is_linear_sum() {
        let t = ThresholdConvention::Legacy.threshold(0.31, 0.66);
        assert!((t - 1.94).abs() < 1e-12);
    }

    #[test]
    fn squared_threshold_squares_the_sum() {
        let t = ThresholdConvention::Squared.threshold(0.31, 0.66);
        assert!((t - 1.94 * 1.94).abs() < 1e-12);
    }

    #[test]
    fn max_bond_distance_matches_threshold() {
        let legacy = ThresholdConvention::Legacy.max_bond_distance(1.0);
        assert!((legacy - 2.0).abs() < 1e-12);
        let squared = ThresholdConvention::Squared.max_bond_distance(1.0);
        assert!((squared - 4.0).abs() < 1e-12);
    }

    #[test]
    fn defaults_reproduce_legacy_brute_force() {
        let config = DetectConfig::default();
        assert_eq!(config.threshold, ThresholdConvention::Legacy);
        assert_eq!(config.strategy, Strategy::BruteForce);
    }
}
