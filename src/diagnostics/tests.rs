//! Tests for the diagnostic pipeline.

use super::*;
use crate::test_support::{complete_vehicle, part};
use crate::vehicle::{ConditionType, Part, PartType, RequiredParts, Vehicle, VehicleField};
use std::collections::BTreeMap;

// =========================================================================
// Helper functions
// =========================================================================

/// Run the default engine and capture output lines.
fn run(vehicle: &Vehicle) -> (DiagnosticReport, Vec<String>) {
    run_with(&DiagnosticEngine::default(), vehicle)
}

fn run_with(engine: &DiagnosticEngine, vehicle: &Vehicle) -> (DiagnosticReport, Vec<String>) {
    let mut out: Vec<u8> = Vec::new();
    let report = engine.run(vehicle, &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    (report, lines)
}

fn without_parts(types: &[PartType]) -> Vehicle {
    let mut vehicle = complete_vehicle();
    for part_type in types {
        if let Some(pos) = vehicle.parts.iter().position(|p| p.part_type == *part_type) {
            vehicle.parts.remove(pos);
        }
    }
    vehicle
}

// =========================================================================
// Stage 1: fields
// =========================================================================

#[test]
fn test_missing_fields_reports_all_of_them() {
    let vehicle = Vehicle {
        year: None,
        model: None,
        ..complete_vehicle()
    };

    let (report, lines) = run(&vehicle);

    assert_eq!(
        report,
        DiagnosticReport::FieldsMissing {
            fields: vec![VehicleField::Year, VehicleField::Model],
        }
    );
    assert_eq!(
        lines,
        vec![
            "Car is missing field(s): Year, Model.",
            "Yikes! Car is missing fields, cannot proceed with diagnostics.",
        ]
    );
}

#[test]
fn test_field_check_precedes_part_checks() {
    let vehicle = Vehicle {
        make: None,
        parts: vec![part(PartType::Tire, ConditionType::Flat)],
        ..complete_vehicle()
    };

    let (report, lines) = run(&vehicle);

    assert_eq!(report.kind(), OutcomeKind::FieldsMissing);
    assert!(lines.iter().all(|l| !l.contains("Part")));
}

// =========================================================================
// Stage 2: part presence
// =========================================================================

#[test]
fn test_missing_parts_reports_every_type() {
    let vehicle = Vehicle {
        parts: vec![
            part(PartType::Tire, ConditionType::Good),
            part(PartType::Tire, ConditionType::Good),
        ],
        ..complete_vehicle()
    };
    let engine =
        DiagnosticEngine::new(RequiredParts::from_iter([(PartType::Engine, 1), (PartType::Tire, 4)]));

    let (report, lines) = run_with(&engine, &vehicle);

    let expected: BTreeMap<PartType, u32> = [(PartType::Engine, 1), (PartType::Tire, 2)]
        .into_iter()
        .collect();
    assert_eq!(report, DiagnosticReport::PartsMissing { parts: expected });
    assert_eq!(
        lines,
        vec![
            "Missing Part(s) Detected: ENGINE - Count: 1",
            "Missing Part(s) Detected: TIRE - Count: 2",
            "Yikes! Car has missing parts, cannot proceed with diagnostics.",
        ]
    );
}

#[test]
fn test_part_presence_precedes_condition_check() {
    let mut vehicle = without_parts(&[PartType::OilFilter]);
    vehicle.parts[0].condition = ConditionType::Damaged;

    let (report, lines) = run(&vehicle);

    assert_eq!(report.kind(), OutcomeKind::PartsMissing);
    assert!(lines.iter().all(|l| !l.starts_with("Damaged")));
}

#[test]
fn test_extra_unlisted_parts_do_not_fail_presence() {
    let mut vehicle = complete_vehicle();
    vehicle.parts.push(part(PartType::KeyFob, ConditionType::New));

    let (report, _) = run(&vehicle);

    assert!(report.is_success());
}

// =========================================================================
// Stage 3: part condition
// =========================================================================

#[test]
fn test_damaged_parts_reports_all_in_order() {
    let mut vehicle = complete_vehicle();
    vehicle.parts[1].condition = ConditionType::NoPower;
    vehicle.parts[6].condition = ConditionType::Flat;

    let (report, lines) = run(&vehicle);

    assert_eq!(
        report,
        DiagnosticReport::PartsDamaged {
            parts: vec![
                Part::new(PartType::Electrical, ConditionType::NoPower),
                Part::new(PartType::Tire, ConditionType::Flat),
            ],
        }
    );
    assert_eq!(
        lines,
        vec![
            "Damaged Part Detected: ELECTRICAL - Condition: NO_POWER",
            "Damaged Part Detected: TIRE - Condition: FLAT",
            "Yikes! Car has damaged parts, cannot proceed with diagnostics.",
        ]
    );
}

#[test]
fn test_worn_parts_are_not_damage() {
    let mut vehicle = complete_vehicle();
    for p in &mut vehicle.parts {
        p.condition = ConditionType::Worn;
    }

    let (report, _) = run(&vehicle);

    assert!(report.is_success());
}

// =========================================================================
// Success and repeatability
// =========================================================================

#[test]
fn test_complete_vehicle_passes() {
    let (report, lines) = run(&complete_vehicle());

    assert_eq!(report, DiagnosticReport::Success);
    assert_eq!(lines, vec!["Success! Car passes all diagnostics."]);
}

#[test]
fn test_runs_are_idempotent() {
    let mut vehicle = complete_vehicle();
    vehicle.parts[0].condition = ConditionType::Sprung;
    let engine = DiagnosticEngine::default();

    let first = run_with(&engine, &vehicle);
    let second = run_with(&engine, &vehicle);

    assert_eq!(first, second);
}

#[test]
fn test_empty_requirements_skip_presence_stage() {
    let engine = DiagnosticEngine::new(RequiredParts::from_iter(Vec::<(PartType, u32)>::new()));
    let vehicle = Vehicle {
        parts: vec![],
        ..complete_vehicle()
    };

    let (report, _) = run_with(&engine, &vehicle);

    assert!(report.is_success());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(DiagnosticEngine::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || run_with(&engine, &complete_vehicle()).0)
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_success());
    }
}

// =========================================================================
// Reporting sink
// =========================================================================

struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_run_to_stdout_matches_buffered_run() {
    let mut vehicle = complete_vehicle();
    vehicle.parts[3].condition = ConditionType::Clogged;
    let engine = DiagnosticEngine::default();

    let report = engine.run_to_stdout(&vehicle).unwrap();

    assert_eq!(report, run_with(&engine, &vehicle).0);
    assert_eq!(report.kind(), OutcomeKind::PartsDamaged);
}

#[test]
fn test_sink_failure_is_an_error_not_a_finding() {
    let err = DiagnosticEngine::default()
        .run(&complete_vehicle(), &mut FailingWriter)
        .unwrap_err();

    assert!(!err.is_finding());
}

// =========================================================================
// Report
// =========================================================================

#[test]
fn test_report_json_shape() {
    let report = DiagnosticReport::PartsMissing {
        parts: [(PartType::Tire, 2)].into_iter().collect(),
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "outcome": "parts_missing", "parts": { "TIRE": 2 } })
    );

    let report = DiagnosticReport::PartsDamaged {
        parts: vec![Part::new(PartType::Engine, ConditionType::Clogged)],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "outcome": "parts_damaged",
            "parts": [{ "type": "ENGINE", "condition": "CLOGGED" }]
        })
    );

    let json = serde_json::to_value(DiagnosticReport::Success).unwrap();
    assert_eq!(json, serde_json::json!({ "outcome": "success" }));
}

#[test]
fn test_outcome_kind_exit_codes() {
    use crate::exit_codes;

    assert_eq!(OutcomeKind::Success.exit_code(), exit_codes::SUCCESS);
    assert_eq!(OutcomeKind::FieldsMissing.exit_code(), exit_codes::FIELDS_MISSING);
    assert_eq!(OutcomeKind::PartsMissing.exit_code(), exit_codes::PARTS_MISSING);
    assert_eq!(OutcomeKind::PartsDamaged.exit_code(), exit_codes::PARTS_DAMAGED);
}
