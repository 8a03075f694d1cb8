//! Per-command grammars.
//!
//! Each grammar consumes every token after the device name and returns the
//! structured command, or the first rejection it meets.

pub mod eee_fec;
pub mod flow;
pub mod generic;
pub mod module_eeprom;
pub mod rxfh;
pub mod settings;
pub mod toggles;
