//! Accept/reject table for the whole command surface, run on both backends.

use super::run_on;
use ethcmd::backend::Backend;

/// Expected outcome of one argument string.
#[derive(Debug, Clone, Copy)]
enum Expect {
    /// Accepted by both backends.
    Ok,
    /// Rejected by both backends.
    Err,
    /// Accepted only by the extended backend.
    OkExtended,
    /// Accepted only by the legacy backend.
    OkLegacy,
}

impl Expect {
    fn exit_code(self, backend: Backend) -> i32 {
        let accepted = match self {
            Self::Ok => true,
            Self::Err => false,
            Self::OkExtended => backend == Backend::Extended,
            Self::OkLegacy => backend == Backend::Legacy,
        };
        if accepted {
            0
        } else {
            1
        }
    }
}

use Expect::*;

#[rustfmt::skip]
static CASES: &[(Expect, &str)] = &[
    (Err, ""),
    (Ok, "devname"),
    (Ok, "15_char_devname"),
    (OkExtended, "--json devname"),
    // Long device names
    (OkExtended, "16_char_devname!"),
    (OkExtended, "127_char_devname0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcde"),
    (Err, "128_char_devname0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"),
    // Settings
    (Ok, "-s devname"),
    (Ok, "--change devname speed 100 duplex half mdix auto"),
    (Err, "-s devname speed foo"),
    (Err, "--change devname speed"),
    (Ok, "-s devname duplex half"),
    (Err, "--change devname duplex foo"),
    (Err, "-s devname duplex"),
    (Err, "--change devname mdix foo"),
    (Err, "-s devname mdix"),
    (Ok, "--change devname port tp"),
    (Err, "-s devname port foo"),
    (Err, "--change devname port"),
    (Ok, "-s devname autoneg on"),
    (Err, "--change devname autoneg foo"),
    (Err, "-s devname autoneg"),
    (Ok, "--change devname advertise 0x1"),
    (Ok, "--change devname advertise 0xf"),
    (Ok, "--change devname advertise 0Xf"),
    (Ok, "--change devname advertise 1"),
    (Ok, "--change devname advertise f"),
    (Ok, "--change devname advertise 01"),
    (Ok, "--change devname advertise 0f"),
    (Ok, "--change devname advertise 0xfffffffffffffffffffffffffffffffff"),
    (Ok, "--change devname advertise fffffffffffffffffffffffffffffffff"),
    (Ok, "--change devname advertise 0x0000fffffffffffffffffffffffffffff"),
    (Ok, "--change devname advertise 0000fffffffffffffffffffffffffffff"),
    (Err, "-s devname advertise"),
    (Err, "-s devname advertise 0x"),
    (Err, "-s devname advertise foo"),
    (Err, "-s devname advertise 0xfoo"),
    (Err, "--change devname advertise"),
    (Ok, "-s devname phyad 1"),
    (Err, "--change devname phyad foo"),
    (Err, "-s devname phyad"),
    // xcvr is deprecated on the extended backend
    (OkLegacy, "--change devname xcvr external"),
    (Err, "-s devname xcvr foo"),
    (Err, "--change devname xcvr"),
    (Ok, "-s devname wol p"),
    (Err, "--change devname wol"),
    (Ok, "-s devname sopass 01:23:45:67:89:ab"),
    (Err, "--change devname sopass 01:23:45:67:89:"),
    (Err, "-s devname sopass 01:23:45:67:89"),
    (Err, "--change devname sopass"),
    (Ok, "-s devname msglvl 1"),
    (Err, "--change devname msglvl"),
    (Ok, "-s devname msglvl hw on rx_status off"),
    (Ok, "-s devname msglvl hw on wol g"),
    (Ok, "-s devname wol g msglvl hw on"),
    (Err, "--change devname msglvl hw foo"),
    (Err, "-s devname msglvl hw"),
    (Ok, "--change devname speed 100 duplex half port tp autoneg on advertise 0x1 phyad 1 wol p sopass 01:23:45:67:89:ab msglvl 1"),
    // xcvr is deprecated on the extended backend
    (OkLegacy, "--change devname speed 100 duplex half port tp autoneg on advertise 0x1 phyad 1 xcvr external wol p sopass 01:23:45:67:89:ab msglvl 1"),
    (Err, "-s devname foo"),
    (Err, "-s"),
    (Ok, "-a devname"),
    (Ok, "--show-pause devname"),
    (Err, "-a"),
    // Generic keyword grammars
    (Ok, "-A devname autoneg on"),
    (Err, "--pause devname autoneg foo"),
    (Err, "-A devname autoneg"),
    (Ok, "--pause devname rx off"),
    (Ok, "-A devname tx on rx on autoneg off"),
    (Err, "--pause devname foo on"),
    (Err, "-A"),
    (Ok, "-c devname"),
    (Ok, "--show-coalesce devname"),
    (Ok, "-C devname adaptive-rx on adaptive-tx off rx-usecs 1 rx-frames 2 rx-usecs-irq 3 rx-frames-irq 4 tx-usecs 5 tx-frames 6 tx-usecs-irq 7 tx-frames-irq 8 stats-block-usecs 9 pkt-rate-low 10"),
    (Ok, "--coalesce devname rx-usecs-low 11 rx-frames-low 12 tx-usecs-low 13 tx-frames-low 14 pkt-rate-high 15 rx-usecs-high 16 rx-frames-high 17 tx-usecs-high 18 tx-frames-high 19 sample-interval 20"),
    (Err, "-C devname adaptive-rx foo"),
    (Err, "--coalesce devname adaptive-rx"),
    (Err, "-C devname foo on"),
    (Err, "-C"),
    (Ok, "-g devname"),
    (Ok, "--show-ring devname"),
    (Err, "-g"),
    (Ok, "-G devname rx 1 rx-mini 2 rx-jumbo 3 tx 4"),
    (Ok, "--set-ring devname rx 1 rx-mini 2 rx-jumbo 3 tx 4"),
    (Err, "-G devname rx foo"),
    (Err, "--set-ring devname rx"),
    (Err, "-G devname foo 1"),
    (Err, "-G"),
    (Err, "-k"),
    (Err, "-K"),
    (Ok, "-i devname"),
    (Ok, "--driver devname"),
    (Err, "-i"),
    (Ok, "-d devname"),
    (Ok, "--register-dump devname raw on file foo"),
    (Err, "-d devname raw foo"),
    (Err, "--register-dump devname file"),
    (Err, "-d devname foo"),
    (Err, "-d"),
    (Ok, "-e devname"),
    (Ok, "--eeprom-dump devname raw on offset 1 length 2"),
    (Err, "-e devname raw foo"),
    (Err, "--eeprom-dump devname offset foo"),
    (Err, "-e devname length"),
    (Err, "--eeprom-dump devname foo"),
    (Err, "-e"),
    (Ok, "-E devname"),
    (Ok, "--change-eeprom devname magic 0x87654321 offset 0 value 1"),
    (Ok, "-E devname magic 0x87654321 offset 0 length 2"),
    (Err, "-E"),
    (Ok, "-r devname"),
    (Ok, "--negotiate devname"),
    (Err, "-r"),
    (Ok, "-p devname"),
    (Ok, "--identify devname 1"),
    (Err, "-p devname 1 foo"),
    (Err, "--identify devname foo"),
    (Err, "-p"),
    // Self test
    (Ok, "-t devname"),
    (Ok, "--test devname online"),
    (Err, "-t devname foo"),
    (Err, "--test devname online foo"),
    (Ok, "-S devname"),
    (Ok, "--statistics devname"),
    (Err, "-S"),
    // Flow queries
    (Ok, "-n devname rx-flow-hash tcp4"),
    (Ok, "-u devname rx-flow-hash sctp4"),
    (Ok, "--show-nfc devname rx-flow-hash udp6"),
    (Ok, "--show-ntuple devname rx-flow-hash esp6"),
    (Err, "-n devname rx-flow-hash foo"),
    (Err, "-u devname rx-flow-hash foo"),
    (Err, "--show-nfc devname rx-flow-hash"),
    (Err, "--show-ntuple devname rx-flow-hash"),
    (Err, "-n"),
    // Firmware flash
    (Err, "-f devname"),
    (Ok, "--flash devname filename"),
    (Ok, "-f devname filename 1"),
    (Err, "-f devname filename 1 foo"),
    (Err, "-f"),
    // Flow configuration
    (Ok, "-N devname rx-flow-hash tcp4 mvtsdfn"),
    (Ok, "--config-ntuple devname rx-flow-hash tcp4 r"),
    (Err, "-U devname rx-flow-hash tcp4"),
    (Err, "--config-nfc devname rx-flow-hash foo"),
    (Err, "-N devname rx-flow-hash"),
    (Err, "--config-ntuple devname foo"),
    (Ok, "-U devname delete 1"),
    (Err, "--config-nfc devname delete foo"),
    (Err, "-N devname delete"),
    (Ok, "--config-ntuple devname flow-type ether src 01:23:45:67:89:ab m cd:ef:01:23:45:67 dst 89:ab:cd:ef:01:23 m 45:67:89:ab:cd:ef proto 0x0123 m 0x4567 vlan 0x89ab m 0xcdef action 0"),
    (Ok, "-U devname flow-type ether src 01:23:45:67:89:ab src-mask cd:ef:01:23:45:67 dst 89:ab:cd:ef:01:23 dst-mask 45:67:89:ab:cd:ef proto 0x0123 proto-mask 0x4567 vlan 0x89ab vlan-mask 0xcdef action 1"),
    (Err, "--config-nfc devname flow-type ether src 01:23:45:67:89: action 3"),
    (Err, "-N devname flow-type ether src 01:23:45:67:89 action 4"),
    (Ok, "--config-ntuple devname flow-type ip4 src-ip 0.123.45.67 m 89.0.123.45 dst-ip 67.89.0.123 m 45.67.89.0 tos 1 m 1 l4proto 0x23 m 0x45 l4data 0xfedcba98 m 76543210 vlan 0x89ab m 0xcdef action 6"),
    (Ok, "-U devname flow-type ip4 src-ip 0.123.45.67 src-ip-mask 89.0.123.45 dst-ip 67.89.0.123 dst-ip-mask 45.67.89.0 tos 1 tos-mask 1 l4proto 0x23 l4proto-mask 0x45 l4data 0xfedcba98 l4data-mask 76543210 vlan 0x89ab vlan-mask 0xcdef action 7"),
    (Ok, "--config-nfc devname flow-type tcp4 src-ip 0.123.45.67 m 89.0.123.45 dst-ip 67.89.0.123 m 45.67.89.0 tos 1 m 1 src-port 23456 m 7890 dst-port 12345 m 6789 vlan 0x89ab m 0xcdef action 8"),
    (Ok, "-N devname flow-type tcp4 src-ip 0.123.45.67 src-ip-mask 89.0.123.45 dst-ip 67.89.0.123 dst-ip-mask 45.67.89.0 tos 1 tos-mask 1 src-port 23456 src-port-mask 7890 dst-port 12345 dst-port-mask 6789 vlan 0x89ab vlan-mask 0xcdef action 9"),
    (Ok, "--config-ntuple devname flow-type ah4 src-ip 0.123.45.67 m 89.0.123.45 dst-ip 67.89.0.123 m 45.67.89.0 tos 1 m 1 spi 2 m 3 vlan 0x89ab m 0xcdef action 10"),
    (Ok, "-U devname flow-type ah4 src-ip 0.123.45.67 src-ip-mask 89.0.123.45 dst-ip 67.89.0.123 dst-ip-mask 45.67.89.0 tos 1 tos-mask 1 spi 2 spi-mask 3 vlan 0x89ab vlan-mask 0xcdef action 11"),
    (Err, "--config-nfc devname flow-type tcp4 action foo"),
    (Err, "-N devname flow-type foo"),
    (Err, "--config-ntuple devname flow-type"),
    (Err, "-U devname foo"),
    (Err, "-N"),
    (Err, "-U"),
    (Ok, "-T devname"),
    (Ok, "--show-time-stamping devname"),
    (Err, "-T"),
    (Ok, "-x devname"),
    (Ok, "--show-rxfh-indir devname"),
    (Ok, "--show-rxfh devname"),
    (Err, "-x"),
    // Indirection table and hash key
    (Ok, "-X devname equal 2"),
    (Ok, "--set-rxfh-indir devname equal 256"),
    (Err, "-X devname equal 0"),
    (Err, "--set-rxfh-indir devname equal foo"),
    (Err, "-X devname equal"),
    (Err, "-X devname start"),
    (Err, "-X devname start 3"),
    (Ok, "-X devname start 4 equal 2"),
    (Ok, "--set-rxfh-indir devname weight 1 2 3 4"),
    (Ok, "--set-rxfh-indir devname start 4 weight 1 2 3 4"),
    (Ok, "--rxfh devname hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee"),
    (Ok, "-X devname hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee"),
    (Ok, "--rxfh devname hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee weight 1 2 3 4"),
    (Ok, "-X devname weight 1 2 3 4 hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee"),
    (Ok, "--rxfh devname hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee equal 2"),
    (Ok, "-X devname equal 2 hkey 48:15:6e:bb:d8:bd:6f:b1:a4:c6:7a:c4:76:1c:29:98:da:e1:ae:6c:2e:12:2f:c0:b9:be:61:3d:00:54:35:9e:09:05:c7:d7:93:72:4a:ee"),
    (Err, "--rxfh devname weight 1 2 3 4 equal 8"),
    (Err, "-X devname weight 1 2 3 4 equal 8"),
    (Err, "-X devname foo"),
    (Err, "-X"),
    (Ok, "-P devname"),
    (Ok, "--show-permaddr devname"),
    (Err, "-P"),
    (Ok, "-w devname"),
    (Ok, "--get-dump devname data filename"),
    (Ok, "-w devname data filename"),
    (Err, "--get-dump devname data"),
    (Err, "-w devname foo"),
    (Err, "-w"),
    (Ok, "-W devname 1"),
    (Ok, "--set-dump devname 2"),
    (Err, "-W devname 1 foo"),
    (Err, "-W devname foo"),
    (Err, "-W"),
    (Ok, "-l devname"),
    (Ok, "--show-channels devname"),
    (Err, "-l"),
    (Ok, "-L devname rx 1 tx 2 other 3 combined 4"),
    (Ok, "--set-channels devname rx 1 tx 2 other 3 combined 4"),
    (Err, "-L devname rx foo"),
    (Err, "--set-channels devname rx"),
    (Ok, "-L devname"),
    (Err, "-L"),
    (Ok, "--show-priv-flags devname"),
    (Err, "--show-priv-flags devname foo"),
    (Err, "--show-priv-flags"),
    (Err, "-m"),
    (Ok, "-m devname"),
    (Err, "--dump-module-eeprom"),
    (Ok, "--dump-module-eeprom devname"),
    (Err, "--module-info"),
    (Ok, "--module-info devname"),
    (Ok, "-m devname raw on"),
    (Ok, "-m devname raw off"),
    (Ok, "-m devname hex on"),
    (Ok, "-m devname hex off"),
    (Err, "-m devname hex on raw on"),
    (Ok, "-m devname offset 4 length 6"),
    (Err, "--show-eee"),
    (Ok, "--show-eee devname"),
    (Err, "--show-eee devname foo"),
    (Err, "--set-eee"),
    (Err, "--set-eee devname"),
    (Err, "--set-eee devname foo"),
    (Ok, "--set-eee devname eee on"),
    (Ok, "--set-eee devname eee off"),
    (Err, "--set-eee devname eee foo"),
    (Ok, "--set-eee devname tx-lpi on"),
    (Ok, "--set-eee devname tx-lpi off"),
    (Err, "--set-eee devname tx-lpi foo"),
    (Ok, "--set-eee devname tx-timer 42 advertise 0x4321"),
    (Err, "--set-eee devname tx-timer foo"),
    (Err, "--set-eee devname advertise foo"),
    (Err, "--set-fec devname"),
    (Ok, "--set-fec devname encoding auto"),
    (Ok, "--set-fec devname encoding off"),
    (Ok, "--set-fec devname encoding baser rs"),
    (Ok, "--set-fec devname encoding auto auto"),
    // Encoding names are only checked locally on the legacy backend
    (OkExtended, "--set-fec devname encoding foo"),
    (OkExtended, "--set-fec devname encoding auto foo"),
    (OkExtended, "--set-fec devname encoding none"),
    (Err, "--set-fec devname auto"),
    (Err, "--rxfh devname hkey foo"),
    (Err, "-X devname hkey foo"),
    // Toggle lists
    (Ok, "-K devname rx on"),
    (Ok, "--features devname tso off gro on"),
    (Err, "-K devname rx"),
    (Err, "-K devname rx foo"),
    (Err, "-K devname rx on rx off"),
    (Ok, "--set-priv-flags devname legacy-rx on"),
    (Err, "--set-priv-flags devname"),
    (Err, "--set-priv-flags devname legacy-rx"),
    // Local commands
    (Ok, "-h"),
    (Ok, "--help"),
    (Ok, "--version"),
    (Err, "--foo"),
    (Err, "-foo"),
    (Err, "-0"),
];

fn check_table(backend: Backend) {
    let failures: Vec<String> = CASES
        .iter()
        .filter_map(|&(expect, args)| {
            let (code, _) = run_on(args, backend);
            (code != expect.exit_code(backend))
                .then(|| format!("ethcmd {args:?} returned {code} on {backend}"))
        })
        .collect();

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_table_legacy_backend() {
    check_table(Backend::Legacy);
}

#[test]
fn test_table_extended_backend() {
    check_table(Backend::Extended);
}

#[test]
fn test_table_is_deterministic() {
    for &(_, args) in CASES {
        for backend in [Backend::Legacy, Backend::Extended] {
            assert_eq!(run_on(args, backend).0, run_on(args, backend).0, "{args}");
        }
    }
}
