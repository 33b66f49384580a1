use xyzbond::{DetectConfig, Strategy, ThresholdConvention};

use crate::cli::{DetectOptions, PairStrategy, Threshold};

impl From<Threshold> for ThresholdConvention {
    fn from(t: Threshold) -> Self {
        match t {
            Threshold::Legacy => ThresholdConvention::Legacy,
            Threshold::Squared => ThresholdConvention::Squared,
        }
    }
}

impl From<PairStrategy> for Strategy {
    fn from(s: PairStrategy) -> Self {
        match s {
            PairStrategy::Brute => Strategy::BruteForce,
            PairStrategy::Grid => Strategy::Grid,
            PairStrategy::Parallel => Strategy::Parallel,
        }
    }
}

pub fn build_detect_config(opts: &DetectOptions) -> DetectConfig {
    DetectConfig {
        threshold: opts.threshold.into(),
        strategy: opts.strategy.into(),
    }
}
