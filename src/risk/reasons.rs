//! Fixed pools of scheduler-facing explanation records.

use serde::Serialize;

use crate::risk::tier::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReasonRecord {
    pub reason: &'static str,
    pub weight: RiskLevel,
    pub icon: &'static str,
    pub action: &'static str,
}

const fn record(
    reason: &'static str,
    weight: RiskLevel,
    icon: &'static str,
    action: &'static str,
) -> ReasonRecord {
    ReasonRecord {
        reason,
        weight,
        icon,
        action,
    }
}

pub const HIGH_RISK_REASONS: [ReasonRecord; 3] = [
    record(
        "Missed 3 or more appointments in the last 12 months",
        RiskLevel::High,
        "🚨",
        "Call the patient personally to confirm attendance",
    ),
    record(
        "No response to the last two confirmation messages",
        RiskLevel::High,
        "📵",
        "Try an alternate contact number or emergency contact",
    ),
    record(
        "Previous appointment was a same-day cancellation",
        RiskLevel::High,
        "⛔",
        "Offer an earlier slot and keep the patient on the waitlist",
    ),
];

pub const MEDIUM_RISK_REASONS: [ReasonRecord; 6] = [
    record(
        "Appointment booked more than three weeks in advance",
        RiskLevel::Medium,
        "📅",
        "Send a reminder 48 hours before the visit",
    ),
    record(
        "Early-morning slot before 9 AM",
        RiskLevel::Medium,
        "⏰",
        "Suggest a later time if the schedule allows",
    ),
    record(
        "Long travel distance to the clinic",
        RiskLevel::Medium,
        "🚗",
        "Share transport options or offer a telehealth visit",
    ),
    record(
        "One missed appointment in the past year",
        RiskLevel::Medium,
        "⚠️",
        "Send an SMS reminder the day before",
    ),
    record(
        "Monday appointment following a weekend",
        RiskLevel::Medium,
        "🗓️",
        "Confirm attendance on Friday afternoon",
    ),
    record(
        "New patient with no visit history",
        RiskLevel::Medium,
        "🆕",
        "Send a welcome message with directions and parking details",
    ),
];

pub const LOW_RISK_REASONS: [ReasonRecord; 3] = [
    record(
        "Consistent attendance record",
        RiskLevel::Low,
        "✅",
        "Standard reminder only",
    ),
    record(
        "Appointment confirmed through the patient portal",
        RiskLevel::Low,
        "💻",
        "No further action needed",
    ),
    record(
        "Lives close to the clinic",
        RiskLevel::Low,
        "📍",
        "Standard reminder only",
    ),
];
