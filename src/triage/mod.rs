//! Batch triage over a caller-supplied list of appointments: score every scheduled
//! appointment, then summarise the list as KPIs and an ordered action queue.

pub mod appointment;
pub mod queue;

use rand::Rng;
use serde::Serialize;

use crate::error::ScoringError;
use crate::risk::{mock_assessment, MockAssessment};

pub use appointment::{Appointment, AppointmentStatus};
pub use queue::{action_queue, kpi_stats, KpiStats, ACTION_RISK_FLOOR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub processed: usize,
    pub errors: usize,
    /// Scheduled appointments found in the input.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageReport {
    pub summary: ProcessSummary,
    pub kpis: KpiStats,
    pub appointments: Vec<Appointment>,
    pub action_queue: Vec<Appointment>,
}

/// Scores each `Scheduled` appointment with `source` and marks it `Confirmation Sent`.
/// An appointment whose assessment fails is left unchanged and counted as an error.
pub fn process_appointments<F>(
    appointments: &mut [Appointment],
    mut source: F,
) -> ProcessSummary
where
    F: FnMut(&Appointment) -> Result<MockAssessment, ScoringError>,
{
    let mut summary = ProcessSummary::default();

    for appointment in appointments
        .iter_mut()
        .filter(|appointment| appointment.status == AppointmentStatus::Scheduled)
    {
        summary.total += 1;
        match source(appointment) {
            Ok(assessment) => {
                appointment.no_show_risk = Some(assessment.no_show_risk);
                appointment.risk_reasons = assessment.risk_reasons;
                appointment.status = AppointmentStatus::ConfirmationSent;
                summary.processed += 1;
                tracing::info!(
                    appointment_id = appointment.id,
                    patient_name = %appointment.patient_name,
                    risk_score = assessment.no_show_risk,
                    reasons_count = appointment.risk_reasons.len(),
                    appointment_time = %appointment.appointment_time,
                    "processed appointment"
                );
            }
            Err(err) => {
                summary.errors += 1;
                tracing::error!(
                    appointment_id = appointment.id,
                    error = %err,
                    "failed to process appointment"
                );
            }
        }
    }

    tracing::info!(
        processed = summary.processed,
        errors = summary.errors,
        total = summary.total,
        "appointment processing finished"
    );
    summary
}

/// Processes the list with mock assessments drawn from `rng` and builds the report.
/// Appointments come back ordered by time.
pub fn triage<R: Rng + ?Sized>(mut appointments: Vec<Appointment>, rng: &mut R) -> TriageReport {
    let summary = process_appointments(&mut appointments, |_| Ok(mock_assessment(&mut *rng)));
    appointments.sort_by_key(|appointment| appointment.appointment_time);

    TriageReport {
        summary,
        kpis: kpi_stats(&appointments),
        action_queue: action_queue(&appointments),
        appointments,
    }
}
