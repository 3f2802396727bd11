pub mod coerce;
pub mod explain;
pub mod reasons;
pub mod sampling;
pub mod tier;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::model::{Scorer, FEATURE_COUNT};

pub use explain::{mock_assessment, select_reasons, ExplanationBand, MockAssessment};
pub use reasons::{ReasonRecord, HIGH_RISK_REASONS, LOW_RISK_REASONS, MEDIUM_RISK_REASONS};
pub use sampling::sample_without_replacement;
pub use tier::RiskLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientFeatures {
    #[serde(deserialize_with = "coerce::lenient_int")]
    pub age: i64,
    #[serde(default, deserialize_with = "coerce::lenient_int")]
    pub previous_no_shows: u32,
    #[serde(deserialize_with = "coerce::lenient_int")]
    pub days_until_appointment: i64,
    #[serde(deserialize_with = "coerce::lenient_int")]
    pub appointment_hour: i64,
    #[serde(default)]
    pub patient_id: Option<String>,
}

impl PatientFeatures {
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            f64::from(self.previous_no_shows),
            self.days_until_appointment as f64,
            self.appointment_hour as f64,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub patient_id: Option<String>,
}

/// Scores one patient. The tier is taken from the unrounded probability; the reported
/// score is rounded to 4 decimals.
pub fn assess(scorer: &dyn Scorer, patient: &PatientFeatures) -> Result<RiskAssessment, ScoringError> {
    let probability = scorer.predict_proba(&patient.to_vector())?;
    let risk_level = RiskLevel::from_probability(probability);
    tracing::info!(
        risk_probability = probability,
        %risk_level,
        "prediction made"
    );
    Ok(RiskAssessment {
        risk_score: explain::round_to(probability, 4),
        risk_level,
        patient_id: patient.patient_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{shared_forest, ModelDescriptor};

    fn patient(age: i64, previous: u32, days: i64, hour: i64) -> PatientFeatures {
        PatientFeatures {
            age,
            previous_no_shows: previous,
            days_until_appointment: days,
            appointment_hour: hour,
            patient_id: Some("P-001".into()),
        }
    }

    struct FixedScorer(f64);

    impl Scorer for FixedScorer {
        fn predict_proba(&self, _features: &[f64]) -> Result<f64, ScoringError> {
            Ok(self.0)
        }

        fn describe(&self) -> ModelDescriptor {
            ModelDescriptor {
                model_type: "Fixed",
                n_estimators: 0,
                features: Vec::new(),
                trained: true,
            }
        }
    }

    struct BrokenScorer;

    impl Scorer for BrokenScorer {
        fn predict_proba(&self, _features: &[f64]) -> Result<f64, ScoringError> {
            Err(ScoringError::NotTrained)
        }

        fn describe(&self) -> ModelDescriptor {
            ModelDescriptor {
                model_type: "Broken",
                n_estimators: 0,
                features: Vec::new(),
                trained: false,
            }
        }
    }

    #[test]
    fn attended_training_row_is_low_risk() {
        let assessment = assess(shared_forest(), &patient(25, 0, 7, 10)).unwrap();
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.patient_id.as_deref(), Some("P-001"));
    }

    #[test]
    fn repeated_scoring_is_deterministic() {
        let input = patient(45, 1, 5, 12);
        let first = assess(shared_forest(), &input).unwrap();
        let second = assess(shared_forest(), &input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn tier_uses_unrounded_probability() {
        let assessment = assess(&FixedScorer(0.299_99), &patient(30, 0, 3, 9)).unwrap();
        assert_eq!(assessment.risk_score, 0.3);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn scorer_failure_propagates() {
        let err = assess(&BrokenScorer, &patient(30, 0, 3, 9)).unwrap_err();
        assert_eq!(err, ScoringError::NotTrained);
    }

    #[test]
    fn previous_no_shows_defaults_to_zero() {
        let parsed: PatientFeatures = serde_json::from_str(
            r#"{"age":40,"days_until_appointment":2,"appointment_hour":15}"#,
        )
        .unwrap();
        assert_eq!(parsed.previous_no_shows, 0);
        assert_eq!(parsed.patient_id, None);
        assert_eq!(parsed.to_vector(), [40.0, 0.0, 2.0, 15.0]);
    }

    #[test]
    fn integral_floats_and_numeric_strings_are_coerced() {
        let parsed: PatientFeatures = serde_json::from_str(
            r#"{"age":25.0,"previous_no_shows":"1","days_until_appointment":"7","appointment_hour":10}"#,
        )
        .unwrap();
        assert_eq!(parsed.to_vector(), [25.0, 1.0, 7.0, 10.0]);
    }

    #[test]
    fn fractional_or_negative_counts_are_rejected() {
        for body in [
            r#"{"age":25.5,"days_until_appointment":7,"appointment_hour":10}"#,
            r#"{"age":"abc","days_until_appointment":7,"appointment_hour":10}"#,
            r#"{"age":25,"previous_no_shows":-1,"days_until_appointment":7,"appointment_hour":10}"#,
        ] {
            assert!(serde_json::from_str::<PatientFeatures>(body).is_err(), "{body}");
        }
    }
}
