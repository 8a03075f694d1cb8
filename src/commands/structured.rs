//! Structured commands produced by the grammar layer.
//!
//! Every command family gets its own typed argument set. An [`Invocation`]
//! bundles the command with its target device and the global options; it is
//! what the transport boundary receives.

use super::values::{HexMask, MacAddr, TokenEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// Options given before the command selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalOptions {
    /// `--json`: machine-readable output from show commands.
    pub json: bool,
    /// `--debug N`: debug message mask.
    pub debug: Option<u32>,
}

/// A fully validated command ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Target device; `None` only for help and version.
    pub device: Option<String>,
    pub options: GlobalOptions,
    pub command: Command,
}

impl Invocation {
    /// Whether this invocation is answered locally without a transport.
    pub fn is_local(&self) -> bool {
        matches!(self.command, Command::Help | Command::Version)
    }
}

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Command {
    ShowSettings,
    ChangeSettings(SettingsArgs),
    ShowPause,
    SetPause(PauseArgs),
    ShowCoalesce,
    SetCoalesce(CoalesceArgs),
    ShowRing,
    SetRing(RingArgs),
    ShowFeatures,
    SetFeatures(Vec<Toggle>),
    DriverInfo,
    RegisterDump(RegisterDumpArgs),
    EepromDump(EepromDumpArgs),
    ChangeEeprom(ChangeEepromArgs),
    /// Restart auto-negotiation.
    Negotiate,
    /// Blink the port LED, optionally for a number of seconds.
    Identify { seconds: Option<u32> },
    SelfTest { mode: Option<SelfTestMode> },
    Statistics,
    ShowFlow(FlowQuery),
    ConfigFlow(FlowConfig),
    ShowTimeStamping,
    ShowRxfh,
    SetRxfh(RxfhArgs),
    ShowPermAddr,
    /// Write a firmware image to flash.
    Flash { file: String, region: Option<u32> },
    GetDump { data: Option<String> },
    SetDump { flag: u32 },
    ShowChannels,
    SetChannels(ChannelArgs),
    ShowPrivFlags,
    SetPrivFlags(Vec<Toggle>),
    ModuleEeprom(ModuleEepromArgs),
    ShowEee,
    SetEee(EeeArgs),
    ShowFec,
    SetFec(FecArgs),
    Help,
    Version,
}

/// A named flag switched on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub name: String,
    pub enabled: bool,
}

impl Toggle {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

/// Value paired with an optional bit mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Masked<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<T>,
}

impl<T> Masked<T> {
    pub fn new(value: T, mask: Option<T>) -> Self {
        Self { value, mask }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplex {
    Half,
    Full,
}

impl TokenEnum for Duplex {
    const NAMES: &'static [&'static str] = &["half", "full"];
    const VARIANTS: &'static [Self] = &[Self::Half, Self::Full];
}

/// MDI/MDI-X selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mdix {
    Auto,
    On,
    Off,
}

impl TokenEnum for Mdix {
    const NAMES: &'static [&'static str] = &["auto", "on", "off"];
    const VARIANTS: &'static [Self] = &[Self::Auto, Self::On, Self::Off];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    Tp,
    Aui,
    Bnc,
    Mii,
    Fibre,
    Da,
}

impl TokenEnum for PortType {
    const NAMES: &'static [&'static str] = &["tp", "aui", "bnc", "mii", "fibre", "da"];
    const VARIANTS: &'static [Self] = &[
        Self::Tp,
        Self::Aui,
        Self::Bnc,
        Self::Mii,
        Self::Fibre,
        Self::Da,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transceiver {
    Internal,
    External,
}

impl TokenEnum for Transceiver {
    const NAMES: &'static [&'static str] = &["internal", "external"];
    const VARIANTS: &'static [Self] = &[Self::Internal, Self::External];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MasterSlave {
    PreferredMaster,
    PreferredSlave,
    ForcedMaster,
    ForcedSlave,
}

impl TokenEnum for MasterSlave {
    const NAMES: &'static [&'static str] = &[
        "preferred-master",
        "preferred-slave",
        "forced-master",
        "forced-slave",
    ];
    const VARIANTS: &'static [Self] = &[
        Self::PreferredMaster,
        Self::PreferredSlave,
        Self::ForcedMaster,
        Self::ForcedSlave,
    ];
}

/// Driver message level: a raw number or named classes switched on/off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Value(u32),
    Flags(Vec<Toggle>),
}

/// Arguments for `-s`/`--change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsArgs {
    pub speed: Option<u32>,
    pub duplex: Option<Duplex>,
    pub mdix: Option<Mdix>,
    pub port: Option<PortType>,
    pub autoneg: Option<bool>,
    /// Advertised link modes, one bit per mode.
    pub advertise: Option<HexMask>,
    pub phyad: Option<u8>,
    pub xcvr: Option<Transceiver>,
    /// Wake-on-LAN mode letters.
    pub wol: Option<String>,
    /// SecureOn password for magic-packet wake-up.
    pub sopass: Option<MacAddr>,
    pub msglvl: Option<MessageLevel>,
    pub lanes: Option<u32>,
    pub master_slave: Option<MasterSlave>,
}

/// Arguments for `-A`/`--pause`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PauseArgs {
    pub autoneg: Option<bool>,
    pub rx: Option<bool>,
    pub tx: Option<bool>,
}

/// Arguments for `-C`/`--coalesce`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoalesceArgs {
    pub adaptive_rx: Option<bool>,
    pub adaptive_tx: Option<bool>,
    pub cqe_mode_rx: Option<bool>,
    pub cqe_mode_tx: Option<bool>,
    /// Numeric parameters keyed by their command-line name.
    pub counters: BTreeMap<&'static str, u32>,
}

/// Arguments for `-G`/`--set-ring`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RingArgs {
    pub rx: Option<u32>,
    pub rx_mini: Option<u32>,
    pub rx_jumbo: Option<u32>,
    pub tx: Option<u32>,
    pub rx_buf_len: Option<u32>,
    pub cqe_size: Option<u32>,
    pub tx_push: Option<bool>,
}

/// Arguments for `-L`/`--set-channels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelArgs {
    pub rx: Option<u32>,
    pub tx: Option<u32>,
    pub other: Option<u32>,
    pub combined: Option<u32>,
}

/// Arguments for `-d`/`--register-dump`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterDumpArgs {
    pub raw: Option<bool>,
    pub hex: Option<bool>,
    /// File to read the dump from instead of the device.
    pub file: Option<String>,
}

/// Arguments for `-e`/`--eeprom-dump`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EepromDumpArgs {
    pub raw: Option<bool>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
}

/// Arguments for `-E`/`--change-eeprom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeEepromArgs {
    /// Device-specific key guarding EEPROM writes.
    pub magic: Option<u32>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
    /// Single byte to write at `offset`.
    pub value: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfTestMode {
    Online,
    Offline,
    ExternalLb,
}

impl TokenEnum for SelfTestMode {
    const NAMES: &'static [&'static str] = &["online", "offline", "external_lb"];
    const VARIANTS: &'static [Self] = &[Self::Online, Self::Offline, Self::ExternalLb];
}

/// Traffic classes whose receive hash can be queried or configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFlowType {
    Tcp4,
    Udp4,
    Ah4,
    Esp4,
    Sctp4,
    Tcp6,
    Udp6,
    Ah6,
    Esp6,
    Sctp6,
    Ether,
    Ip4,
    Ip6,
}

impl TokenEnum for HashFlowType {
    const NAMES: &'static [&'static str] = &[
        "tcp4", "udp4", "ah4", "esp4", "sctp4", "tcp6", "udp6", "ah6", "esp6", "sctp6", "ether",
        "ip4", "ip6",
    ];
    const VARIANTS: &'static [Self] = &[
        Self::Tcp4,
        Self::Udp4,
        Self::Ah4,
        Self::Esp4,
        Self::Sctp4,
        Self::Tcp6,
        Self::Udp6,
        Self::Ah6,
        Self::Esp6,
        Self::Sctp6,
        Self::Ether,
        Self::Ip4,
        Self::Ip6,
    ];
}

/// Flow types a classification rule can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Ether,
    Ip4,
    Tcp4,
    Udp4,
    Sctp4,
    Ah4,
    Esp4,
}

impl TokenEnum for FlowType {
    const NAMES: &'static [&'static str] =
        &["ether", "ip4", "tcp4", "udp4", "sctp4", "ah4", "esp4"];
    const VARIANTS: &'static [Self] = &[
        Self::Ether,
        Self::Ip4,
        Self::Tcp4,
        Self::Udp4,
        Self::Sctp4,
        Self::Ah4,
        Self::Esp4,
    ];
}

/// Arguments for `-n`/`-u`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowQuery {
    /// List all classification rules.
    ListRules,
    RxFlowHash(HashFlowType),
    Rule(u32),
}

/// Arguments for `-N`/`-U`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowConfig {
    /// Select the header fields hashed for a traffic class.
    RxFlowHash {
        flow_type: HashFlowType,
        fields: String,
    },
    AddRule(FlowRule),
    DeleteRule(u32),
}

/// Header fields matched after the IPv4 addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum L4Match {
    /// Plain `ip4`: optional protocol number and first four payload bytes.
    Raw {
        proto: Option<Masked<u8>>,
        data: Option<Masked<u32>>,
    },
    Ports { src: Masked<u16>, dst: Masked<u16> },
    /// Security parameter index of AH/ESP.
    Spi(Masked<u32>),
}

/// Match part of a classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowSpec {
    Ether {
        src: Masked<MacAddr>,
        dst: Masked<MacAddr>,
        proto: Option<Masked<u16>>,
    },
    Ip4 {
        flow_type: FlowType,
        src_ip: Masked<Ipv4Addr>,
        dst_ip: Masked<Ipv4Addr>,
        tos: Option<Masked<u8>>,
        l4: L4Match,
    },
}

/// A receive classification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowRule {
    pub spec: FlowSpec,
    pub vlan: Option<Masked<u16>>,
    /// RSS context the matched traffic is spread over.
    pub context: Option<u32>,
    /// Rule slot; the driver picks one when absent.
    pub location: Option<u32>,
    /// Destination queue, or a negative special action (-1 drops).
    pub action: i64,
}

/// How the indirection table is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indirection {
    /// Spread evenly over the first N queues.
    Equal(u32),
    /// Spread in proportion to per-queue weights.
    Weights(Vec<u32>),
    /// Reset to the driver default.
    Default,
}

/// RSS context a `-X` command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RssContext {
    New,
    Id(u32),
}

/// Arguments for `-X`/`--set-rxfh-indir`/`--rxfh`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RxfhArgs {
    pub indirection: Option<Indirection>,
    /// First queue of the table.
    pub start: Option<u32>,
    pub hkey: Option<Vec<u8>>,
    pub hfunc: Option<String>,
    pub context: Option<RssContext>,
    /// Delete the given context.
    pub delete: bool,
}

/// Arguments for `-m`/`--module-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleEepromArgs {
    pub raw: Option<bool>,
    pub hex: Option<bool>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
    pub page: Option<u8>,
    pub bank: Option<u8>,
    /// I2C address of the module.
    pub i2c: Option<u8>,
}

/// Arguments for `--set-eee`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EeeArgs {
    pub eee: Option<bool>,
    pub tx_lpi: Option<bool>,
    pub tx_timer: Option<u32>,
    pub advertise: Option<HexMask>,
}

/// Arguments for `--set-fec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FecArgs {
    pub encodings: Vec<String>,
}
