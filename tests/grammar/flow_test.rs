//! Classification rules through the full driver.

use ethcmd::backend::Backend;
use ethcmd::commands::structured::{
    FlowConfig, FlowRule, FlowSpec, FlowType, L4Match, Masked,
};
use ethcmd::commands::values::MacAddr;
use ethcmd::commands::{Command, CommandRouter};
use ethcmd::error::{ErrorKind, ParseError};
use pretty_assertions::assert_eq;
use std::net::Ipv4Addr;

fn parse_rule(args: &str) -> Result<FlowRule, ParseError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let invocation = CommandRouter::parse(&tokens, &Backend::Extended.capabilities())?;
    match invocation.command {
        Command::ConfigFlow(FlowConfig::AddRule(rule)) => Ok(rule),
        other => panic!("expected a rule, got {other:?}"),
    }
}

fn kind(args: &str) -> ErrorKind {
    parse_rule(args).unwrap_err().kind()
}

#[test]
fn test_ether_rule_with_short_masks() {
    let rule = parse_rule(
        "-N eth0 flow-type ether src 01:23:45:67:89:ab m ff:ff:ff:00:00:00 \
         dst 89:ab:cd:ef:01:23 vlan 0x89ab m 0x0fff action -1",
    )
    .unwrap();

    assert_eq!(
        rule.spec,
        FlowSpec::Ether {
            src: Masked::new(
                MacAddr([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]),
                Some(MacAddr([0xff, 0xff, 0xff, 0, 0, 0])),
            ),
            dst: Masked::new(MacAddr([0x89, 0xab, 0xcd, 0xef, 0x01, 0x23]), None),
            proto: None,
        }
    );
    assert_eq!(rule.vlan, Some(Masked::new(0x89ab, Some(0x0fff))));
    assert_eq!(rule.action, -1);
    assert_eq!(rule.location, None);
}

#[test]
fn test_tcp4_rule_with_suffix_masks() {
    let rule = parse_rule(
        "-U eth0 flow-type tcp4 src-ip 10.0.0.1 src-ip-mask 255.0.0.0 dst-ip 10.0.0.2 \
         src-port 80 dst-port 8080 dst-port-mask 0xff00 loc 3 action 2",
    )
    .unwrap();

    assert_eq!(
        rule.spec,
        FlowSpec::Ip4 {
            flow_type: FlowType::Tcp4,
            src_ip: Masked::new(Ipv4Addr::new(10, 0, 0, 1), Some(Ipv4Addr::new(255, 0, 0, 0))),
            dst_ip: Masked::new(Ipv4Addr::new(10, 0, 0, 2), None),
            tos: None,
            l4: L4Match::Ports {
                src: Masked::new(80, None),
                dst: Masked::new(8080, Some(0xff00)),
            },
        }
    );
    assert_eq!(rule.location, Some(3));
    assert_eq!(rule.action, 2);
}

#[test]
fn test_mixed_mask_spellings_rejected() {
    assert_eq!(
        kind(
            "-N eth0 flow-type ip4 src-ip 1.2.3.4 m 255.0.0.0 \
             dst-ip 5.6.7.8 dst-ip-mask 255.0.0.0 action 0"
        ),
        ErrorKind::ConflictingKeywords
    );
}

#[test]
fn test_fields_follow_flow_type() {
    // Ports belong to tcp4/udp4/sctp4, spi to ah4/esp4.
    assert_eq!(
        kind("-N eth0 flow-type ah4 src-ip 1.2.3.4 dst-ip 5.6.7.8 src-port 1 action 0"),
        ErrorKind::UnknownKeyword
    );
    assert_eq!(
        kind("-N eth0 flow-type udp4 src-ip 1.2.3.4 dst-ip 5.6.7.8 spi 1 action 0"),
        ErrorKind::UnknownKeyword
    );
    assert_eq!(
        kind("-N eth0 flow-type ether src-ip 1.2.3.4 action 0"),
        ErrorKind::UnknownKeyword
    );
}

#[test]
fn test_required_fields() {
    assert_eq!(
        kind("-N eth0 flow-type ether src 01:23:45:67:89:ab dst 89:ab:cd:ef:01:23"),
        ErrorKind::MissingRequiredKeyword
    );
    assert_eq!(
        kind("-N eth0 flow-type esp4 src-ip 1.2.3.4 dst-ip 5.6.7.8 action 0"),
        ErrorKind::MissingRequiredKeyword
    );
    assert_eq!(
        kind("-N eth0 flow-type sctp4 src-ip 1.2.3.4 dst-ip 5.6.7.8 src-port 1 action 0"),
        ErrorKind::MissingRequiredKeyword
    );
}
