//! Forest fitting and scoring throughput.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noshow::model::{RandomForest, Scorer, SplitMix64};
use noshow::risk::{assess, mock_assessment, PatientFeatures};
use noshow::triage::{triage, Appointment};

fn bench_scorer(c: &mut Criterion) {
    let forest = RandomForest::fit_default();
    let patient = PatientFeatures {
        age: 45,
        previous_no_shows: 1,
        days_until_appointment: 5,
        appointment_hour: 12,
        patient_id: None,
    };

    let mut group = c.benchmark_group("scorer");
    group.bench_function("fit_default_forest", |b| {
        b.iter(|| black_box(RandomForest::fit_default()))
    });
    group.bench_function("predict_proba", |b| {
        b.iter(|| black_box(forest.predict_proba(black_box(&[45.0, 1.0, 5.0, 12.0]))))
    });
    group.bench_function("assess_patient", |b| {
        b.iter(|| black_box(assess(&forest, black_box(&patient))))
    });
    group.finish();
}

fn bench_explanations(c: &mut Criterion) {
    let mut rng = SplitMix64::new(7);
    c.bench_function("mock_assessment", |b| {
        b.iter(|| black_box(mock_assessment(&mut rng)))
    });
}

fn bench_triage(c: &mut Criterion) {
    let appointments: Vec<Appointment> = (0..200u64)
        .map(|id| {
            let json = format!(
                r#"{{"id":{id},"patient_name":"Patient {id}","appointment_time":"2024-05-{:02} {:02}:00:00"}}"#,
                id % 28 + 1,
                id % 10 + 8
            );
            serde_json::from_str(&json).expect("bench appointment should parse")
        })
        .collect();
    let mut rng = SplitMix64::new(3);
    c.bench_function("triage_200_appointments", |b| {
        b.iter(|| black_box(triage(appointments.clone(), &mut rng)))
    });
}

criterion_group!(benches, bench_scorer, bench_explanations, bench_triage);
criterion_main!(benches);
