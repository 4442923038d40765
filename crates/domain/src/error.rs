//! Error taxonomy for device creation and command handling.
//!
//! Every variant is recoverable: the caller reports it as one error line and
//! carries on. The `Display` output is the exact text shown to the user.

use crate::device::DeviceKind;

/// Errors raised by the device model and the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HomeError {
    /// A device type tag did not name any known [`DeviceKind`].
    #[error("Unknown device type: {tag}")]
    UnknownDeviceType { tag: String },

    /// No device is registered under the given id, or the id token could not
    /// be read as a number.
    #[error("Device {id} not found.")]
    DeviceNotFound { id: String },

    /// A device command was issued without any id token.
    #[error("No device id given.")]
    MissingDeviceId,

    /// The command exists but the target device's kind does not accept it.
    #[error("Invalid command for {}.", .kind.label())]
    UnsupportedCommand { kind: DeviceKind, command: String },

    /// The command requires a numeric value and none was provided.
    #[error("Missing value for {command}.")]
    MissingValue { command: &'static str },
}
