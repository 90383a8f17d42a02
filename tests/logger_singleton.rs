use std::fs;
use std::ptr;
use std::thread;

use creational_patterns::logger::LogReader;
use creational_patterns::{LogLevel, Logger};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn first_init_global_configures_the_shared_logger() {
    let dir = tempdir().unwrap();
    let first_log = dir.path().join("first.log");
    let second_log = dir.path().join("second.log");
    let first_config = dir.path().join("first.json");
    let second_config = dir.path().join("second.json");

    fs::write(
        &first_config,
        json!({ "log_level": 3, "log_file": first_log, "console": false }).to_string(),
    )
    .unwrap();
    fs::write(
        &second_config,
        json!({ "log_level": 1, "log_file": second_log, "console": false }).to_string(),
    )
    .unwrap();

    let first = Logger::init_global(&first_config).unwrap();
    let second = Logger::init_global(&second_config).unwrap();
    let global = Logger::global();

    assert!(ptr::eq(first, second));
    assert!(ptr::eq(first, global));
    assert_eq!(global.log_level(), LogLevel::Error);
    assert_eq!(global.path(), first_log.as_path());

    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| Logger::global() as *const Logger as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addresses.iter().all(|&addr| addr == first as *const Logger as usize));

    global.info("dropped below threshold").unwrap();
    global.error("kept").unwrap();

    let entries = LogReader::new(&first_log).entries(LogLevel::Info).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "kept");
    assert!(!second_log.exists());
}
