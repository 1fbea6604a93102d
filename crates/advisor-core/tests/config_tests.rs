//! Config file loading tests

use std::io::Write;

use advisor_core::recommend::{LOW_ATTENDANCE_WARNING, STUDY_TIME_SUGGESTION};
use advisor_core::{Advisor, AdvisorConfig, ConfigError, StudentFeatures};
use tempfile::Builder;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_overrides_thresholds() {
    let file = write_config(
        ".toml",
        r#"
[thresholds]
min_attendance_percentage = 90.0
"#,
    );
    let config = AdvisorConfig::load(file.path()).unwrap();
    assert_eq!(config.thresholds.min_attendance_percentage, 90.0);

    let advisor = Advisor::new(config);
    let recs = advisor.recommend(&StudentFeatures::new().with_attendance(80.0), "");
    assert_eq!(recs, vec![LOW_ATTENDANCE_WARNING]);
}

#[test]
fn test_load_json_overrides_defaults() {
    let file = write_config(".json", r#"{"defaults": {"study_hours": 2.0}}"#);
    let config = AdvisorConfig::load(file.path()).unwrap();
    assert_eq!(config.defaults.study_hours, 2.0);

    let recs = Advisor::new(config).recommend(&StudentFeatures::new(), "");
    assert_eq!(recs, vec![STUDY_TIME_SUGGESTION]);
}

#[test]
fn test_load_rejects_out_of_range_values() {
    let file = write_config(".toml", "[defaults]\nsubject_score = 120.0\n");
    assert!(matches!(
        AdvisorConfig::load(file.path()),
        Err(ConfigError::OutOfRange(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        AdvisorConfig::load(&missing),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_empty_file_uses_builtins() {
    let file = write_config(".toml", "");
    assert_eq!(AdvisorConfig::load(file.path()).unwrap(), AdvisorConfig::default());
}
