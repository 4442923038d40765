//! Device commands — the actions a user can ask a device to perform.
//!
//! A command is parsed without knowing the target device. Whether the
//! target accepts it is decided by [`Device::apply`](crate::device::Device::apply).

use std::fmt;

/// A parsed device command.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// `turnOn` — switch a light on.
    TurnOn,
    /// `turnOff` — switch a light off.
    TurnOff,
    /// `setTemp` — set a thermostat target; the value may be absent.
    SetTemp(Option<f64>),
    /// `lock` — lock a door.
    Lock,
    /// `unlock` — unlock a door.
    Unlock,
    /// Any other command name, kept verbatim for error reporting.
    Unknown(String),
}

impl DeviceCommand {
    /// Build a command from its name and the optional numeric argument.
    ///
    /// Names are case-sensitive. The value is only kept for `setTemp`.
    #[must_use]
    pub fn parse(name: &str, value: Option<f64>) -> Self {
        match name {
            "turnOn" => Self::TurnOn,
            "turnOff" => Self::TurnOff,
            "setTemp" => Self::SetTemp(value),
            "lock" => Self::Lock,
            "unlock" => Self::Unlock,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The command name as typed by the user.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::TurnOn => "turnOn",
            Self::TurnOff => "turnOff",
            Self::SetTemp(_) => "setTemp",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_command_names() {
        assert_eq!(DeviceCommand::parse("turnOn", None), DeviceCommand::TurnOn);
        assert_eq!(DeviceCommand::parse("turnOff", None), DeviceCommand::TurnOff);
        assert_eq!(DeviceCommand::parse("lock", None), DeviceCommand::Lock);
        assert_eq!(DeviceCommand::parse("unlock", None), DeviceCommand::Unlock);
    }

    #[test]
    fn should_keep_value_for_set_temp() {
        assert_eq!(
            DeviceCommand::parse("setTemp", Some(75.0)),
            DeviceCommand::SetTemp(Some(75.0))
        );
        assert_eq!(
            DeviceCommand::parse("setTemp", None),
            DeviceCommand::SetTemp(None)
        );
    }

    #[test]
    fn should_drop_value_for_commands_without_argument() {
        assert_eq!(DeviceCommand::parse("lock", Some(1.0)), DeviceCommand::Lock);
    }

    #[test]
    fn should_treat_names_case_sensitively() {
        assert_eq!(
            DeviceCommand::parse("turnon", None),
            DeviceCommand::Unknown("turnon".to_string())
        );
    }

    #[test]
    fn should_display_typed_name() {
        assert_eq!(DeviceCommand::SetTemp(Some(1.0)).to_string(), "setTemp");
        assert_eq!(DeviceCommand::Unknown("dance".to_string()).to_string(), "dance");
    }
}
