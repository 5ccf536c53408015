//! Process exit contract of the `first_triangle` binary

use std::process::Command;

#[test]
fn test_unsupported_config_exits_with_status_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_first_triangle"))
        .arg("settings.json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported format: settings.json"), "stderr was: {stderr}");
}

#[test]
fn test_invalid_config_exits_with_status_one() {
    let path = std::env::temp_dir().join(format!("first_triangle_zero_{}.toml", std::process::id()));
    std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_first_triangle")).arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}
