//! Device name validation.

use crate::backend::Capabilities;
use crate::error::ParseError;

/// Checks a device name against the active backend's length limit.
///
/// The limit counts bytes, matching the fixed-size name buffers of the
/// transport requests.
pub fn validate_device_name(name: &str, caps: &Capabilities) -> Result<(), ParseError> {
    if name.is_empty() {
        return Err(ParseError::MissingDeviceName);
    }
    let limit = caps.max_device_name_len();
    if name.len() > limit {
        return Err(ParseError::DeviceNameTooLong {
            name: name.to_string(),
            limit,
        });
    }
    Ok(())
}
