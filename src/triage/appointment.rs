use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::risk::ReasonRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    #[serde(rename = "Confirmation Sent")]
    ConfirmationSent,
    Confirmed,
    Rescheduled,
    #[serde(rename = "No-Show")]
    NoShow,
    Skipped,
}

impl AppointmentStatus {
    /// Awaiting a confirmation from the patient.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Scheduled | Self::ConfirmationSent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[serde(with = "appointment_time")]
    pub appointment_time: NaiveDateTime,
    #[serde(default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub no_show_risk: Option<f64>,
    #[serde(default, skip_deserializing)]
    pub risk_reasons: Vec<ReasonRecord>,
}

/// Wire format for appointment times. Reads `2024-05-01 09:30:00`, the `T`-separated
/// form, or RFC 3339 (shifted to UTC). Always writes the space-separated form.
pub mod appointment_time {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_FORMAT))
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|at| at.naive_utc()))
    }

    pub fn serialize<S: Serializer>(
        time: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid appointment_time `{raw}`")))
    }
}
