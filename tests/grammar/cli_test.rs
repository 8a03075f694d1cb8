//! End-to-end tests of the ethcmd binary.

use std::process::Command;

fn run(args: &[&str]) -> (i32, String, String) {
    let config_dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_ethcmd"))
        .arg("--config")
        .arg(config_dir.path().join("none.toml"))
        .args(args)
        .env_remove("ETHCMD_BACKEND")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_accepted_command_writes_request() {
    let (code, stdout, _) = run(&["-s", "eth0", "speed", "100"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(r#""backend":"extended""#), "{stdout}");
    assert!(stdout.contains(r#""command":"change_settings""#), "{stdout}");
}

#[test]
fn test_rejected_command() {
    let (code, stdout, stderr) = run(&["-s", "eth0", "speed", "foo"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid value 'foo' for 'speed'"), "{stderr}");
}

#[test]
fn test_backend_flag() {
    let (code, _, _) = run(&["--backend", "legacy", "--set-fec", "eth0", "encoding", "foo"]);
    assert_eq!(code, 1);
    let (code, _, _) = run(&["--backend", "extended", "--set-fec", "eth0", "encoding", "foo"]);
    assert_eq!(code, 0);
}

#[test]
fn test_help_and_version() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Usage: ethcmd"));

    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "backend = \"legacy\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ethcmd"))
        .arg("--config")
        .arg(&config)
        .arg("16_char_devname!")
        .env_remove("ETHCMD_BACKEND")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
