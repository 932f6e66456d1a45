use std::fs;

use tempfile::TempDir;

use pro2cmake_core::config::{self, CONFIG_FILE_NAME};
use pro2cmake_core::convert::convert;

const WIDGETS_APP: &str = r#"
[normalize]
strip_prefix = ["$$PWD/"]

[normalize.rename]
core = "Qt::Core"
gui = "Qt::Gui"
widgets = "Qt::Widgets"

[[assign]]
key = "QT"
op = "+="
values = ["core gui"]

[[assign]]
key = "SOURCES"
op = "="
values = ["$$PWD/main.cpp", "$$PWD/window.cpp"]

[[assign]]
key = "QT"
op = "*="
values = ["widgets", "core"]

[[assign]]
key = "QT"
op = "-="
values = ["gui", "network"]
"#;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn converts_conversion_file_from_project_root() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), WIDGETS_APP).unwrap();

    let path = config::config_path(None, temp.path());
    let config = config::parse_config(&path).unwrap();
    let report = convert(&config);

    let qt = report.get("QT").unwrap();
    assert_eq!(qt.values, strings(&["Qt::Core", "Qt::Widgets"]));
    assert_eq!(qt.removals, strings(&["network"]));
    assert_eq!(qt.old, strings(&["core", "widgets", "-network"]));

    let sources = report.get("SOURCES").unwrap();
    assert_eq!(sources.values, strings(&["main.cpp", "window.cpp"]));
    assert!(sources.removals.is_empty());
}

#[test]
fn report_serializes_to_json() {
    let config = config::parse_config_str(WIDGETS_APP).unwrap();
    let report = convert(&config);

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["variables"][0]["key"], "QT");
    assert_eq!(json["variables"][0]["operations"][1], "*=(widgets, core)");
    assert_eq!(json["variables"][1]["values"][0], "main.cpp");
}

#[test]
fn missing_conversion_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = config::config_path(None, temp.path());

    let err = config::parse_config(&path).unwrap_err();

    assert!(err.to_string().contains("Failed to read config file"));
}
