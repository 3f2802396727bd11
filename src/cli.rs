use std::str::FromStr;

use rand::SeedableRng;

use crate::config::{init_tracing, ServiceConfig};
use crate::model::{shared_forest, Scorer, SplitMix64};
use crate::risk::{assess, mock_assessment, PatientFeatures};
use crate::server;
use crate::triage::{triage, Appointment};

pub const USAGE: &str = "usage: noshow <serve|predict|explain|process|info>\n  \
    predict <age> <previous_no_shows> <days_until_appointment> <appointment_hour> [patient_id]\n  \
    explain [seed]\n  \
    process <appointments.json> [seed]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Predict,
    Explain,
    Process,
    Info,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("predict") => Some(Command::Predict),
        Some("explain") => Some(Command::Explain),
        Some("process") => Some(Command::Process),
        Some("info") => Some(Command::Info),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Predict) => handle_predict(args),
        Some(Command::Explain) => handle_explain(args),
        Some(Command::Process) => handle_process(args),
        Some(Command::Info) => handle_info(),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return 2;
        }
    };
    init_tracing(&config);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("runtime error: {err}");
            return 1;
        }
    };
    match runtime.block_on(server::run_server(&config)) {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_predict(args: &[String]) -> i32 {
    init_tracing(&ServiceConfig::from_env().unwrap_or_default());

    let patient = match parse_patient(args.get(2..).unwrap_or_default()) {
        Ok(patient) => patient,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return 2;
        }
    };
    match assess(shared_forest(), &patient) {
        Ok(assessment) => print_json(&assessment),
        Err(err) => {
            eprintln!("Prediction error: {err}");
            1
        }
    }
}

fn handle_explain(args: &[String]) -> i32 {
    init_tracing(&ServiceConfig::from_env().unwrap_or_default());

    let assessment = match args.get(2) {
        Some(raw) => match parse_arg::<u64>(Some(raw), "seed") {
            Ok(seed) => mock_assessment(&mut SplitMix64::seed_from_u64(seed)),
            Err(message) => {
                eprintln!("{message}\n{USAGE}");
                return 2;
            }
        },
        None => mock_assessment(&mut rand::thread_rng()),
    };
    print_json(&assessment)
}

fn handle_process(args: &[String]) -> i32 {
    init_tracing(&ServiceConfig::from_env().unwrap_or_default());

    let loaded = args
        .get(2)
        .ok_or_else(|| "missing appointments file".to_string())
        .and_then(|path| load_appointments(path));
    let appointments = match loaded {
        Ok(appointments) => appointments,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return 2;
        }
    };
    let report = match args.get(3) {
        Some(raw) => match parse_arg::<u64>(Some(raw), "seed") {
            Ok(seed) => triage(appointments, &mut SplitMix64::seed_from_u64(seed)),
            Err(message) => {
                eprintln!("{message}\n{USAGE}");
                return 2;
            }
        },
        None => triage(appointments, &mut rand::thread_rng()),
    };
    print_json(&report)
}

pub fn load_appointments(path: &str) -> Result<Vec<Appointment>, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("cannot read {path}: {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid appointments in {path}: {err}"))
}

fn handle_info() -> i32 {
    print_json(&shared_forest().describe())
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            eprintln!("failed to encode output: {err}");
            1
        }
    }
}

/// Positional form of [PatientFeatures]: age, previous no-shows, days until the
/// appointment, appointment hour and an optional patient id.
pub fn parse_patient(args: &[String]) -> Result<PatientFeatures, String> {
    Ok(PatientFeatures {
        age: parse_arg(args.first(), "age")?,
        previous_no_shows: parse_arg(args.get(1), "previous_no_shows")?,
        days_until_appointment: parse_arg(args.get(2), "days_until_appointment")?,
        appointment_hour: parse_arg(args.get(3), "appointment_hour")?,
        patient_id: args.get(4).cloned(),
    })
}

fn parse_arg<T: FromStr>(raw: Option<&String>, name: &str) -> Result<T, String> {
    let raw = raw.ok_or_else(|| format!("missing {name}"))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {name}: `{raw}`"))
}
