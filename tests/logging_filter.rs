use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

#[test]
fn info_level_drops_debug_events() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pet.log");

    desktop_pet::logging::init(false, Some(path.clone()));
    tracing::debug!(from = "walking", to = "sleeping", "pet mode changed");
    tracing::info!("behavior engine started");

    sleep(Duration::from_millis(100));

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("behavior engine started"));
    assert!(
        !contents.contains("pet mode changed"),
        "debug events leaked with debug logging off"
    );
}
