use std::cmp::Ordering;

use serde::Serialize;

use crate::triage::appointment::{Appointment, AppointmentStatus};

/// Appointments scoring strictly above this need a scheduler's attention.
pub const ACTION_RISK_FLOOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KpiStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub high_risk: usize,
}

fn is_high_risk(appointment: &Appointment) -> bool {
    appointment
        .no_show_risk
        .is_some_and(|risk| risk > ACTION_RISK_FLOOR)
}

pub fn kpi_stats(appointments: &[Appointment]) -> KpiStats {
    appointments.iter().fold(
        KpiStats {
            total: appointments.len(),
            ..KpiStats::default()
        },
        |mut stats, appointment| {
            if appointment.status == AppointmentStatus::Confirmed {
                stats.confirmed += 1;
            }
            if appointment.status.is_pending() {
                stats.pending += 1;
            }
            if is_high_risk(appointment) {
                stats.high_risk += 1;
            }
            stats
        },
    )
}

fn by_risk_then_time(a: &Appointment, b: &Appointment) -> Ordering {
    let risk = |appointment: &Appointment| appointment.no_show_risk.unwrap_or(0.0);
    risk(b)
        .total_cmp(&risk(a))
        .then_with(|| a.appointment_time.cmp(&b.appointment_time))
}

/// High-risk appointments nobody has resolved yet, riskiest first and earliest first
/// among equal risks.
pub fn action_queue(appointments: &[Appointment]) -> Vec<Appointment> {
    let mut queue: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| is_high_risk(appointment))
        .filter(|appointment| {
            !matches!(
                appointment.status,
                AppointmentStatus::Confirmed | AppointmentStatus::Skipped
            )
        })
        .cloned()
        .collect();
    queue.sort_by(by_risk_then_time);
    queue
}
