use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("radial.log");

    radial_gesture_menu::logging::init(true, Some(path.clone()));
    tracing::info!("radial menu log line");
    tracing::debug!("debug enabled");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("radial menu log line"));
    assert!(contents.contains("debug enabled"));
}
