//! Fixed synthetic training set the service fits its forest on at startup.

pub const FEATURE_NAMES: [&str; 4] = [
    "age",
    "previous_no_shows",
    "days_until_appointment",
    "appointment_hour",
];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// 0 = attended, 1 = no-show.
pub type Label = u8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; FEATURE_COUNT],
    pub label: Label,
}

const fn sample(
    age: f64,
    previous_no_shows: f64,
    days_until_appointment: f64,
    appointment_hour: f64,
    label: Label,
) -> Sample {
    Sample {
        features: [age, previous_no_shows, days_until_appointment, appointment_hour],
        label,
    }
}

pub const SYNTHETIC_APPOINTMENTS: [Sample; 8] = [
    sample(25.0, 0.0, 7.0, 10.0, 0),
    sample(45.0, 1.0, 3.0, 14.0, 1),
    sample(65.0, 0.0, 14.0, 9.0, 0),
    sample(35.0, 2.0, 1.0, 16.0, 1),
    sample(55.0, 0.0, 5.0, 11.0, 0),
    sample(40.0, 1.0, 2.0, 15.0, 1),
    sample(30.0, 0.0, 10.0, 8.0, 0),
    sample(50.0, 3.0, 1.0, 17.0, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_set_is_balanced() {
        let no_shows = SYNTHETIC_APPOINTMENTS
            .iter()
            .filter(|sample| sample.label == 1)
            .count();
        assert_eq!(no_shows, 4);
        assert_eq!(SYNTHETIC_APPOINTMENTS.len() - no_shows, 4);
    }
}
