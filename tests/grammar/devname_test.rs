//! Device name length limits per backend.

use super::run_on;
use ethcmd::backend::Backend;
use ethcmd::commands::CommandRouter;
use ethcmd::error::ErrorKind;

fn name(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn test_legacy_limit() {
    assert_eq!(run_on(&name(15), Backend::Legacy).0, 0);
    assert_eq!(run_on(&name(16), Backend::Legacy).0, 1);
}

#[test]
fn test_extended_limit() {
    assert_eq!(run_on(&name(16), Backend::Extended).0, 0);
    assert_eq!(run_on(&name(127), Backend::Extended).0, 0);
    assert_eq!(run_on(&name(128), Backend::Extended).0, 1);
}

#[test]
fn test_limit_applies_to_every_command() {
    let args = format!("-s {} speed 100", name(16));
    assert_eq!(run_on(&args, Backend::Legacy).0, 1);
    assert_eq!(run_on(&args, Backend::Extended).0, 0);

    let args = format!("-m {}", name(128));
    assert_eq!(run_on(&args, Backend::Extended).0, 1);
}

#[test]
fn test_name_checked_before_keywords() {
    // An overlong name is reported even when the keywords are also bad.
    let args = vec!["-s".to_string(), name(16), "speed".to_string(), "foo".to_string()];
    let err = CommandRouter::parse(&args, &Backend::Legacy.capabilities()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeviceNameTooLong);
}
