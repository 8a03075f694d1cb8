//! Command definitions for declarative command metadata.
//!
//! Every selector the tool accepts is listed once in [`COMMANDS`] together
//! with its aliases, argument requirements and grammar. This enables:
//! - Selector resolution in the parse driver
//! - Auto-generated help text
//! - Consistent device and argument-count validation

use super::grammars::{eee_fec, flow, generic, module_eeprom, rxfh, settings};
use super::structured::Command;
use super::tokenizer::TokenStream;
use crate::backend::Capabilities;
use crate::error::ParseError;

/// Grammar entry point for commands that take arguments.
pub type GrammarFn = fn(&mut TokenStream<'_>, &Capabilities) -> Result<Command, ParseError>;

/// How the tokens after the device name are read.
#[derive(Debug, Clone)]
pub enum Grammar {
    /// No arguments; any leftover token is rejected.
    Bare(Command),
    /// Arguments read by a dedicated grammar.
    Parser(GrammarFn),
}

/// What the command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A network device named right after the selector.
    Device,
    /// Nothing; answered locally.
    None,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Primary command name.
    pub name: &'static str,
    /// Selector tokens, short form first.
    pub aliases: &'static [&'static str],
    /// Short description shown in help.
    pub description: &'static str,
    /// Arguments after the device name, as shown in help.
    pub usage: &'static str,
    /// Minimum number of tokens after the device name.
    pub min_args: usize,
    pub target: Target,
    /// Whether `--json` output is available when the backend supports it.
    pub json: bool,
    pub grammar: Grammar,
    /// Category for grouping in help.
    pub category: CommandCategory,
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Help and version.
    General,
    /// Link settings, pause, EEE and FEC.
    Link,
    /// Queues, coalescing and offloads.
    Tuning,
    /// Receive hashing and classification.
    Flow,
    /// Dumps, tests and firmware.
    Diagnostics,
}

impl CommandCategory {
    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General commands",
            Self::Link => "Link commands",
            Self::Tuning => "Tuning commands",
            Self::Flow => "Flow steering commands",
            Self::Diagnostics => "Diagnostic commands",
        }
    }
}

/// Name of the command run when the first token is a device name.
pub const DEFAULT_COMMAND: &str = "show-settings";

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    // Link commands
    CommandDef {
        name: DEFAULT_COMMAND,
        aliases: &[],
        description: "Show link settings",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowSettings),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "change-settings",
        aliases: &["-s", "--change"],
        description: "Change link settings",
        usage: "[speed N] [duplex half|full] [port tp|aui|bnc|mii|fibre|da] [mdix auto|on|off] \
                [autoneg on|off] [advertise MASK] [phyad N] [wol p|u|m|b|a|g|s|f|d...] \
                [sopass xx:yy:zz:aa:bb:cc] [msglvl N | msglvl type on|off ...] [lanes N] \
                [master-slave preferred-master|preferred-slave|forced-master|forced-slave]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(settings::parse),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "show-pause",
        aliases: &["-a", "--show-pause"],
        description: "Show pause options",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowPause),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "set-pause",
        aliases: &["-A", "--pause"],
        description: "Set pause options",
        usage: "[autoneg on|off] [rx on|off] [tx on|off]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_pause),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "negotiate",
        aliases: &["-r", "--negotiate"],
        description: "Restart N-WAY negotiation",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Bare(Command::Negotiate),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "show-eee",
        aliases: &["--show-eee"],
        description: "Show EEE settings",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowEee),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "set-eee",
        aliases: &["--set-eee"],
        description: "Set EEE settings",
        usage: "[eee on|off] [tx-lpi on|off] [tx-timer N] [advertise MASK]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(eee_fec::parse_eee),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "show-fec",
        aliases: &["--show-fec"],
        description: "Show FEC settings",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowFec),
        category: CommandCategory::Link,
    },
    CommandDef {
        name: "set-fec",
        aliases: &["--set-fec"],
        description: "Set FEC settings",
        usage: "encoding auto|off|rs|baser|llrs [...]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(eee_fec::parse_fec),
        category: CommandCategory::Link,
    },
    // Tuning commands
    CommandDef {
        name: "show-coalesce",
        aliases: &["-c", "--show-coalesce"],
        description: "Show coalesce options",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowCoalesce),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "set-coalesce",
        aliases: &["-C", "--coalesce"],
        description: "Set coalesce options",
        usage: "[adaptive-rx on|off] [adaptive-tx on|off] [rx-usecs N] [rx-frames N] ...",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_coalesce),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "show-ring",
        aliases: &["-g", "--show-ring"],
        description: "Query RX/TX ring parameters",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowRing),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "set-ring",
        aliases: &["-G", "--set-ring"],
        description: "Set RX/TX ring parameters",
        usage: "[rx N] [rx-mini N] [rx-jumbo N] [tx N] [rx-buf-len N] [cqe-size N] \
                [tx-push on|off]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_ring),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "show-channels",
        aliases: &["-l", "--show-channels"],
        description: "Query channels",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowChannels),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "set-channels",
        aliases: &["-L", "--set-channels"],
        description: "Set channels",
        usage: "[rx N] [tx N] [other N] [combined N]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_channels),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "show-features",
        aliases: &["-k", "--show-features", "--show-offload"],
        description: "Get state of protocol offload and other features",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowFeatures),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "set-features",
        aliases: &["-K", "--features", "--offload"],
        description: "Set protocol offload and other features",
        usage: "FEATURE on|off ...",
        min_args: 1,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_features),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "show-priv-flags",
        aliases: &["--show-priv-flags"],
        description: "Query private flags",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowPrivFlags),
        category: CommandCategory::Tuning,
    },
    CommandDef {
        name: "set-priv-flags",
        aliases: &["--set-priv-flags"],
        description: "Set private flags",
        usage: "FLAG on|off ...",
        min_args: 1,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_priv_flags),
        category: CommandCategory::Tuning,
    },
    // Flow steering commands
    CommandDef {
        name: "show-nfc",
        aliases: &["-n", "-u", "--show-nfc", "--show-ntuple"],
        description: "Show Rx network flow classification options or rules",
        usage: "[rx-flow-hash tcp4|udp4|ah4|esp4|sctp4|tcp6|udp6|ah6|esp6|sctp6 | rule N]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(flow::parse_query),
        category: CommandCategory::Flow,
    },
    CommandDef {
        name: "config-nfc",
        aliases: &["-N", "-U", "--config-nfc", "--config-ntuple"],
        description: "Configure Rx network flow classification options or rules",
        usage: "rx-flow-hash TYPE m|v|t|s|d|f|n|r... | \
                flow-type ether|ip4|tcp4|udp4|sctp4|ah4|esp4 \
                [src-ip IP [m MASK]] ... action N [loc N] | delete N",
        min_args: 1,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(flow::parse_config),
        category: CommandCategory::Flow,
    },
    CommandDef {
        name: "show-rxfh",
        aliases: &["-x", "--show-rxfh-indir", "--show-rxfh"],
        description: "Show Rx flow hash indirection table and/or RSS hash key",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowRxfh),
        category: CommandCategory::Flow,
    },
    CommandDef {
        name: "set-rxfh",
        aliases: &["-X", "--set-rxfh-indir", "--rxfh"],
        description: "Set Rx flow hash indirection table and/or RSS hash key",
        usage: "[context new|N] [delete] [equal N | weight W0 W1 ... | default] [start N] \
                [hkey xx:yy:zz:aa:bb:cc:...] [hfunc FUNC]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(rxfh::parse),
        category: CommandCategory::Flow,
    },
    // Diagnostic commands
    CommandDef {
        name: "driver-info",
        aliases: &["-i", "--driver"],
        description: "Show driver information",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::DriverInfo),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "register-dump",
        aliases: &["-d", "--register-dump"],
        description: "Do a register dump",
        usage: "[raw on|off] [hex on|off] [file FILENAME]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_register_dump),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "eeprom-dump",
        aliases: &["-e", "--eeprom-dump"],
        description: "Do a EEPROM dump",
        usage: "[raw on|off] [offset N] [length N]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_eeprom_dump),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "change-eeprom",
        aliases: &["-E", "--change-eeprom"],
        description: "Change bytes in device EEPROM",
        usage: "[magic N] [offset N] [length N] [value N]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_change_eeprom),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "module-info",
        aliases: &["-m", "--dump-module-eeprom", "--module-info"],
        description: "Query/Decode Module EEPROM information and optical diagnostics",
        usage: "[raw on|off] [hex on|off] [offset N] [length N] [page N] [bank N] [i2c N]",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Parser(module_eeprom::parse),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "identify",
        aliases: &["-p", "--identify"],
        description: "Show visible port identification (e.g. blinking)",
        usage: "[TIME-IN-SECONDS]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_identify),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "self-test",
        aliases: &["-t", "--test"],
        description: "Execute adapter self test",
        usage: "[online | offline | external_lb]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_self_test),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "statistics",
        aliases: &["-S", "--statistics"],
        description: "Show adapter statistics",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::Statistics),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "show-time-stamping",
        aliases: &["-T", "--show-time-stamping"],
        description: "Show time stamping capabilities",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: true,
        grammar: Grammar::Bare(Command::ShowTimeStamping),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "show-permaddr",
        aliases: &["-P", "--show-permaddr"],
        description: "Show permanent hardware address",
        usage: "",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Bare(Command::ShowPermAddr),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "flash",
        aliases: &["-f", "--flash"],
        description: "Flash firmware image from the specified file to a region on the device",
        usage: "FILENAME [REGION-NUMBER-TO-FLASH]",
        min_args: 1,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_flash),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "get-dump",
        aliases: &["-w", "--get-dump"],
        description: "Get dump flag, data",
        usage: "[data FILENAME]",
        min_args: 0,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_get_dump),
        category: CommandCategory::Diagnostics,
    },
    CommandDef {
        name: "set-dump",
        aliases: &["-W", "--set-dump"],
        description: "Set dump flag of the device",
        usage: "N",
        min_args: 1,
        target: Target::Device,
        json: false,
        grammar: Grammar::Parser(generic::parse_set_dump),
        category: CommandCategory::Diagnostics,
    },
    // General commands
    CommandDef {
        name: "help",
        aliases: &["-h", "--help"],
        description: "Show this help",
        usage: "",
        min_args: 0,
        target: Target::None,
        json: false,
        grammar: Grammar::Bare(Command::Help),
        category: CommandCategory::General,
    },
    CommandDef {
        name: "version",
        aliases: &["--version"],
        description: "Show version number",
        usage: "",
        min_args: 0,
        target: Target::None,
        json: false,
        grammar: Grammar::Bare(Command::Version),
        category: CommandCategory::General,
    },
];

/// Generates help text from command definitions.
pub fn generate_help_text() -> String {
    let categories = [
        CommandCategory::Link,
        CommandCategory::Tuning,
        CommandCategory::Flow,
        CommandCategory::Diagnostics,
        CommandCategory::General,
    ];

    let category_blocks = categories
        .iter()
        .filter_map(|category| {
            let cmds: Vec<_> = COMMANDS
                .iter()
                .filter(|c| c.category == *category)
                .collect();

            if cmds.is_empty() {
                return None;
            }

            let command_lines = cmds
                .iter()
                .map(|cmd| {
                    let selector = if cmd.aliases.is_empty() {
                        "DEVNAME".to_string()
                    } else if cmd.target == Target::Device {
                        format!("{} DEVNAME", cmd.aliases.join("|"))
                    } else {
                        cmd.aliases.join("|")
                    };
                    let mut line = format!("  {:<40} {}\n", selector, cmd.description);
                    if !cmd.usage.is_empty() {
                        line.push_str(&format!("        {}\n", cmd.usage));
                    }
                    line
                })
                .collect::<Vec<_>>()
                .join("");

            Some(format!("{}:\n{}\n", category.display_name(), command_lines))
        })
        .collect::<Vec<_>>()
        .join("");

    let global_options = [
        "Global options (before the command):",
        "  --json          - Machine-readable output (extended backend only)",
        "  --debug MASK    - Turn on debugging messages",
    ]
    .join("\n");

    format!(
        "Usage: ethcmd [GLOBAL OPTIONS] COMMAND DEVNAME [ARGS]\n\n{}{}",
        category_blocks, global_options
    )
}

/// Finds a command definition by selector token.
///
/// Selectors are case-sensitive: `-s` and `-S` are different commands.
pub fn find_command(selector: &str) -> Option<&'static CommandDef> {
    COMMANDS
        .iter()
        .find(|c| c.aliases.iter().any(|a| *a == selector))
}

/// Returns the command run when no selector is given.
pub fn default_command() -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|c| c.name == DEFAULT_COMMAND)
}
