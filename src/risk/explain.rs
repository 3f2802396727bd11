//! Mock no-show assessment with explanation records.
//!
//! The explanation bands use their own cut points (0.7 / 0.4), which differ from the
//! tiering floors in [crate::risk::tier] (0.7 / 0.3). A score in `(0.3, 0.4]` is therefore
//! tiered medium but explained with the low-band pool. Both sets are kept as-is until
//! product confirms which one is intended.

use rand::Rng;
use serde::Serialize;

use crate::risk::reasons::{
    ReasonRecord, HIGH_RISK_REASONS, LOW_RISK_REASONS, MEDIUM_RISK_REASONS,
};
use crate::risk::sampling::{choose_one, sample_without_replacement};

pub const MOCK_SCORE_MIN: f64 = 0.1;
pub const MOCK_SCORE_MAX: f64 = 0.95;
pub const HIGH_BAND_FLOOR: f64 = 0.7;
pub const MEDIUM_BAND_FLOOR: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockAssessment {
    pub no_show_risk: f64,
    pub risk_reasons: Vec<ReasonRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationBand {
    Low,
    Medium,
    High,
}

impl ExplanationBand {
    /// Upper bounds are inclusive: exactly 0.7 is medium, exactly 0.4 is low.
    pub fn for_score(risk_score: f64) -> Self {
        if risk_score > HIGH_BAND_FLOOR {
            Self::High
        } else if risk_score > MEDIUM_BAND_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

pub fn mock_risk_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(MOCK_SCORE_MIN..=MOCK_SCORE_MAX);
    round_to(raw, 2).clamp(MOCK_SCORE_MIN, MOCK_SCORE_MAX)
}

pub fn select_reasons<R: Rng + ?Sized>(risk_score: f64, rng: &mut R) -> Vec<ReasonRecord> {
    match ExplanationBand::for_score(risk_score) {
        ExplanationBand::High => {
            let mut reasons: Vec<ReasonRecord> =
                choose_one(&HIGH_RISK_REASONS, rng).into_iter().collect();
            let extra = rng.gen_range(1..=2);
            reasons.extend(sample_without_replacement(&MEDIUM_RISK_REASONS, extra, rng));
            reasons
        }
        ExplanationBand::Medium => {
            let count = rng.gen_range(2..=3);
            sample_without_replacement(&MEDIUM_RISK_REASONS, count, rng)
        }
        ExplanationBand::Low => {
            let combined: Vec<ReasonRecord> = MEDIUM_RISK_REASONS
                .iter()
                .chain(&LOW_RISK_REASONS)
                .copied()
                .collect();
            let count = rng.gen_range(1..=2);
            sample_without_replacement(&combined, count, rng)
        }
    }
}

pub fn mock_assessment<R: Rng + ?Sized>(rng: &mut R) -> MockAssessment {
    let no_show_risk = mock_risk_score(rng);
    let risk_reasons = select_reasons(no_show_risk, rng);
    tracing::info!(
        risk_score = no_show_risk,
        reasons = risk_reasons.len(),
        "mock no-show assessment generated"
    );
    MockAssessment {
        no_show_risk,
        risk_reasons,
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitMix64;
    use crate::risk::tier::RiskLevel;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn texts(reasons: &[ReasonRecord]) -> HashSet<&'static str> {
        reasons.iter().map(|record| record.reason).collect()
    }

    fn in_pool(record: &ReasonRecord, pool: &[ReasonRecord]) -> bool {
        pool.iter().any(|candidate| candidate.reason == record.reason)
    }

    #[test]
    fn band_edges() {
        assert_eq!(ExplanationBand::for_score(0.71), ExplanationBand::High);
        assert_eq!(ExplanationBand::for_score(0.7), ExplanationBand::Medium);
        assert_eq!(ExplanationBand::for_score(0.41), ExplanationBand::Medium);
        assert_eq!(ExplanationBand::for_score(0.4), ExplanationBand::Low);
        assert_eq!(ExplanationBand::for_score(0.0), ExplanationBand::Low);
    }

    #[test]
    fn bands_diverge_from_tiering_between_point_three_and_point_four() {
        assert_eq!(RiskLevel::from_probability(0.35), RiskLevel::Medium);
        assert_eq!(ExplanationBand::for_score(0.35), ExplanationBand::Low);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::High);
        assert_eq!(ExplanationBand::for_score(0.7), ExplanationBand::Medium);
    }

    #[test]
    fn high_score_gets_one_high_reason_plus_medium() {
        for seed in 0..200 {
            let mut rng = SplitMix64::new(seed);
            let reasons = select_reasons(0.75, &mut rng);
            assert!((2..=3).contains(&reasons.len()));
            let high = reasons.iter().filter(|r| in_pool(r, &HIGH_RISK_REASONS)).count();
            assert_eq!(high, 1);
            let medium = reasons.iter().filter(|r| in_pool(r, &MEDIUM_RISK_REASONS)).count();
            assert!((1..=2).contains(&medium));
            assert_eq!(texts(&reasons).len(), reasons.len());
        }
    }

    #[test]
    fn medium_score_draws_only_medium_pool() {
        for seed in 0..200 {
            let mut rng = SplitMix64::new(seed);
            let reasons = select_reasons(0.55, &mut rng);
            assert!((2..=3).contains(&reasons.len()));
            assert!(reasons.iter().all(|r| in_pool(r, &MEDIUM_RISK_REASONS)));
            assert_eq!(texts(&reasons).len(), reasons.len());
        }
    }

    #[test]
    fn low_score_draws_from_combined_pool() {
        let mut seen = HashSet::new();
        for seed in 0..400 {
            let mut rng = SplitMix64::new(seed);
            let reasons = select_reasons(0.35, &mut rng);
            assert!((1..=2).contains(&reasons.len()));
            assert!(reasons
                .iter()
                .all(|r| in_pool(r, &MEDIUM_RISK_REASONS) || in_pool(r, &LOW_RISK_REASONS)));
            assert_eq!(texts(&reasons).len(), reasons.len());
            seen.extend(texts(&reasons));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn both_counts_occur_in_each_band() {
        for (score, expected) in [(0.75, [2, 3]), (0.55, [2, 3]), (0.2, [1, 2])] {
            let counts: HashSet<usize> = (0..200)
                .map(|seed| select_reasons(score, &mut SplitMix64::new(seed)).len())
                .collect();
            assert_eq!(counts, expected.into_iter().collect::<HashSet<_>>());
        }
    }

    #[test]
    fn seeded_assessment_is_reproducible() {
        let a = mock_assessment(&mut SplitMix64::new(2024));
        let b = mock_assessment(&mut SplitMix64::new(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn rounding_to_two_decimals() {
        assert_eq!(round_to(0.456, 2), 0.46);
        assert_eq!(round_to(0.95, 2), 0.95);
        assert_eq!(round_to(0.123456, 4), 0.1235);
    }

    proptest! {
        #[test]
        fn mock_score_is_bounded_and_rounded(seed in any::<u64>()) {
            let score = mock_risk_score(&mut SplitMix64::new(seed));
            prop_assert!((MOCK_SCORE_MIN..=MOCK_SCORE_MAX).contains(&score));
            prop_assert!(((score * 100.0).round() - score * 100.0).abs() < 1e-9);
        }

        #[test]
        fn selection_is_total_and_duplicate_free(score in 0.0f64..=1.0, seed in any::<u64>()) {
            let reasons = select_reasons(score, &mut SplitMix64::new(seed));
            let allowed = match ExplanationBand::for_score(score) {
                ExplanationBand::High | ExplanationBand::Medium => 2..=3,
                ExplanationBand::Low => 1..=2,
            };
            prop_assert!(allowed.contains(&reasons.len()));
            prop_assert_eq!(texts(&reasons).len(), reasons.len());
        }
    }
}
