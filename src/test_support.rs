use crate::vehicle::{ConditionType, Part, PartType, Vehicle};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) fn part(part_type: PartType, condition: ConditionType) -> Part {
    Part::new(part_type, condition)
}

/// A 2008 Toyota Tacoma with every default-required part in good shape.
pub(crate) fn complete_vehicle() -> Vehicle {
    let mut parts = vec![
        part(PartType::Engine, ConditionType::Good),
        part(PartType::Electrical, ConditionType::Good),
        part(PartType::FuelFilter, ConditionType::New),
        part(PartType::OilFilter, ConditionType::Worn),
    ];
    parts.extend((0..4).map(|_| part(PartType::Tire, ConditionType::Good)));

    Vehicle {
        year: Some("2008".to_string()),
        make: Some("Toyota".to_string()),
        model: Some("Tacoma".to_string()),
        parts,
    }
}

pub(crate) const SAMPLE_RECORD_YAML: &str = r#"
year: 2008
make: Toyota
model: Tacoma
parts:
  - type: ENGINE
    condition: GOOD
  - type: ELECTRICAL
    condition: GOOD
  - type: FUEL_FILTER
    condition: NEW
  - type: OIL_FILTER
    condition: WORN
  - type: TIRE
    condition: GOOD
  - type: TIRE
    condition: GOOD
  - type: TIRE
    condition: GOOD
  - type: TIRE
    condition: GOOD
"#;

/// Write `content` to `name` inside a fresh temporary directory.
pub(crate) fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    write_file(&path, content);
    (dir, path)
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}
