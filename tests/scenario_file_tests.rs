use std::io::Write;

use auto_drive::{Scenario, SimError, SimulationResult};

#[test]
fn test_loads_scenario_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"width": 10, "height": 10, "vehicles": [
            {{"id": "A", "x": 0, "y": 0, "heading": "N", "commands": "FFFFFFFF"}},
            {{"id": "B", "x": 0, "y": 4, "heading": "S", "commands": "F"}}
        ]}}"#
    )
    .unwrap();

    let scenario = Scenario::from_path(file.path()).unwrap();
    let mut stepper = scenario.build().unwrap();
    let result = stepper.run();
    assert_eq!(result.to_string(), "A B\n0 3\n3");
    assert_eq!(stepper.statistics().steps_completed, 2);
    assert_eq!(stepper.statistics().collision.as_ref().unwrap().step, 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scenario::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_written_scenario_reloads() {
    let scenario = Scenario::from_json(
        r#"{"width": 4, "height": 4, "vehicles": [{"id": "solo", "x": 1, "y": 1, "heading": "E", "commands": "FLF"}]}"#,
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    std::fs::write(&path, scenario.to_json().unwrap()).unwrap();

    let reloaded = Scenario::from_path(&path).unwrap();
    assert_eq!(reloaded, scenario);
    assert_eq!(reloaded.build().unwrap().run(), SimulationResult::NoCollision);
}
