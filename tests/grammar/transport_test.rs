//! Transport hand-off: exactly once on acceptance, never on rejection.

use super::run_on;
use ethcmd::backend::Backend;
use ethcmd::commands::CommandRouter;
use ethcmd::transport::{DryRunTransport, JsonTransport};
use serde_json::{json, Value};

#[test]
fn test_accepted_submits_once() {
    for args in ["devname", "-s devname speed 100", "-X devname equal 2", "-m devname"] {
        assert_eq!(run_on(args, Backend::Legacy), (0, 1), "{args}");
        assert_eq!(run_on(args, Backend::Extended), (0, 1), "{args}");
    }
}

#[test]
fn test_rejected_never_submits() {
    for args in ["", "--foo", "-s devname speed foo", "-X devname equal 0", "-m"] {
        assert_eq!(run_on(args, Backend::Legacy), (1, 0), "{args}");
    }
}

#[test]
fn test_local_commands_never_submit() {
    for args in ["-h", "--help", "--version"] {
        assert_eq!(run_on(args, Backend::Extended), (0, 0), "{args}");
    }
}

#[test]
fn test_transport_failure_exits_nonzero() {
    let mut transport = DryRunTransport::failing("operation not supported");
    let outcome = CommandRouter::run(
        &["-A", "devname", "rx", "off"],
        &Backend::Legacy.capabilities(),
        &mut transport,
    );
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(transport.submissions().len(), 1);
}

#[test]
fn test_same_input_same_submission() {
    let caps = Backend::Extended.capabilities();
    let args = ["-G", "devname", "rx", "512", "tx", "256"];
    let mut transport = DryRunTransport::new();
    CommandRouter::run(&args, &caps, &mut transport);
    CommandRouter::run(&args, &caps, &mut transport);

    let submissions = transport.submissions();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0], submissions[1]);
}

#[test]
fn test_json_transport_request() {
    let mut transport = JsonTransport::new(Vec::new(), Backend::Extended);
    let outcome = CommandRouter::run(
        &["--json", "-g", "eth1"],
        &Backend::Extended.capabilities(),
        &mut transport,
    );
    assert_eq!(outcome.exit_code(), 0);

    let output = String::from_utf8(transport.into_inner()).unwrap();
    let request: Value = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(request["backend"], json!("extended"));
    assert_eq!(request["format"], json!("attribute-encoded"));
    assert_eq!(request["device"], json!("eth1"));
    assert_eq!(request["options"]["json"], json!(true));
    assert_eq!(request["command"], json!({ "command": "show_ring" }));
}
