//! Device — a simulated appliance holding exactly one piece of mutable state.
//!
//! The three kinds are variants of [`DeviceState`], so every command is
//! checked against the device's capabilities with an exhaustive match.

use std::fmt;
use std::str::FromStr;

use crate::command::DeviceCommand;
use crate::error::HomeError;
use crate::id::DeviceId;

/// Thermostat setpoint a new thermostat starts with, in °F.
pub const DEFAULT_TEMPERATURE_F: f64 = 70.0;

/// The kind of a device, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Light,
    Thermostat,
    Door,
}

impl DeviceKind {
    /// The lowercase type tag (`light`, `thermostat`, `door`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
            Self::Door => "door",
        }
    }

    /// The capitalised name used in status and confirmation lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Thermostat => "Thermostat",
            Self::Door => "Door",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DeviceKind {
    type Err = HomeError;

    /// Type tags are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "thermostat" => Ok(Self::Thermostat),
            "door" => Ok(Self::Door),
            _ => Err(HomeError::UnknownDeviceType { tag: s.to_string() }),
        }
    }
}

/// The state a device holds, one variant per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceState {
    Light { on: bool },
    Thermostat { temperature: f64 },
    Door { locked: bool },
}

impl DeviceState {
    /// Factory defaults: light off, thermostat at
    /// [`DEFAULT_TEMPERATURE_F`], door locked.
    #[must_use]
    pub fn initial(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Light => Self::Light { on: false },
            DeviceKind::Thermostat => Self::Thermostat {
                temperature: DEFAULT_TEMPERATURE_F,
            },
            DeviceKind::Door => Self::Door { locked: true },
        }
    }

    /// The kind this state belongs to.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light { .. } => DeviceKind::Light,
            Self::Thermostat { .. } => DeviceKind::Thermostat,
            Self::Door { .. } => DeviceKind::Door,
        }
    }
}

/// Outcome of a command a device accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    LightSwitched { id: DeviceId, on: bool },
    TemperatureSet { id: DeviceId, temperature: f64 },
    DoorLocked { id: DeviceId, locked: bool },
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LightSwitched { id, on } => {
                write!(f, "Light {id} {}", if *on { "ON" } else { "OFF" })
            }
            Self::TemperatureSet { id, temperature } => {
                write!(f, "Thermostat {id} set to {temperature}")
            }
            Self::DoorLocked { id, locked } => {
                write!(f, "Door {id} {}", if *locked { "LOCKED" } else { "UNLOCKED" })
            }
        }
    }
}

/// A simulated device.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: DeviceId,
    state: DeviceState,
}

impl Device {
    /// Create a device of the given kind in its initial state.
    #[must_use]
    pub fn new(id: DeviceId, kind: DeviceKind) -> Self {
        Self {
            id,
            state: DeviceState::initial(kind),
        }
    }

    /// Create a device from a free-form type tag.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::UnknownDeviceType`] if the tag names no kind.
    pub fn from_type_tag(tag: &str, id: DeviceId) -> Result<Self, HomeError> {
        let kind = tag.parse()?;
        Ok(Self::new(id, kind))
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.state.kind()
    }

    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Apply a command if this device's kind accepts it.
    ///
    /// State is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::MissingValue`] for `setTemp` without a value on a
    /// thermostat, and [`HomeError::UnsupportedCommand`] for any command the
    /// kind does not accept.
    pub fn apply(&mut self, command: &DeviceCommand) -> Result<StateChange, HomeError> {
        let id = self.id;
        let kind = self.kind();

        match (&mut self.state, command) {
            (DeviceState::Light { on }, DeviceCommand::TurnOn | DeviceCommand::TurnOff) => {
                *on = matches!(command, DeviceCommand::TurnOn);
                Ok(StateChange::LightSwitched { id, on: *on })
            }
            (DeviceState::Thermostat { temperature }, DeviceCommand::SetTemp(Some(value))) => {
                *temperature = *value;
                Ok(StateChange::TemperatureSet {
                    id,
                    temperature: *value,
                })
            }
            (DeviceState::Thermostat { .. }, DeviceCommand::SetTemp(None)) => {
                Err(HomeError::MissingValue { command: "setTemp" })
            }
            (DeviceState::Door { locked }, DeviceCommand::Lock | DeviceCommand::Unlock) => {
                *locked = matches!(command, DeviceCommand::Lock);
                Ok(StateChange::DoorLocked {
                    id,
                    locked: *locked,
                })
            }
            _ => Err(HomeError::UnsupportedCommand {
                kind,
                command: command.name().to_string(),
            }),
        }
    }

    /// One-line status report, e.g. `Light 1 is OFF`.
    #[must_use]
    pub fn status(&self) -> String {
        match &self.state {
            DeviceState::Light { on } => {
                format!("Light {} is {}", self.id, if *on { "ON" } else { "OFF" })
            }
            DeviceState::Thermostat { temperature } => {
                format!("Thermostat {} is at {temperature}\u{b0}F", self.id)
            }
            DeviceState::Door { locked } => format!(
                "Door {} is {}",
                self.id,
                if *locked { "LOCKED" } else { "UNLOCKED" }
            ),
        }
    }

    /// Acknowledge a system-wide update notification. No state changes.
    #[must_use]
    pub fn receive_update(&self) -> String {
        format!("{} {} received system update", self.kind().label(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Device {
        Device::new(DeviceId::new(1), DeviceKind::Light)
    }

    fn thermostat() -> Device {
        Device::new(DeviceId::new(2), DeviceKind::Thermostat)
    }

    fn door() -> Device {
        Device::new(DeviceId::new(3), DeviceKind::Door)
    }

    #[test]
    fn should_parse_kind_case_insensitively() {
        assert_eq!("Light".parse::<DeviceKind>(), Ok(DeviceKind::Light));
        assert_eq!("THERMOSTAT".parse::<DeviceKind>(), Ok(DeviceKind::Thermostat));
        assert_eq!("door".parse::<DeviceKind>(), Ok(DeviceKind::Door));
    }

    #[test]
    fn should_reject_unknown_type_tag() {
        let result = Device::from_type_tag("toaster", DeviceId::new(4));
        assert_eq!(
            result,
            Err(HomeError::UnknownDeviceType {
                tag: "toaster".to_string()
            })
        );
    }

    #[test]
    fn should_start_in_documented_defaults() {
        assert_eq!(light().status(), "Light 1 is OFF");
        assert_eq!(thermostat().status(), "Thermostat 2 is at 70\u{b0}F");
        assert_eq!(door().status(), "Door 3 is LOCKED");
    }

    #[test]
    fn should_turn_light_on_and_off() {
        let mut device = light();
        let change = device.apply(&DeviceCommand::TurnOn).unwrap();
        assert_eq!(change.to_string(), "Light 1 ON");
        assert_eq!(device.status(), "Light 1 is ON");

        let change = device.apply(&DeviceCommand::TurnOff).unwrap();
        assert_eq!(change.to_string(), "Light 1 OFF");
        assert_eq!(device.status(), "Light 1 is OFF");
    }

    #[test]
    fn should_stay_on_when_turned_on_twice() {
        let mut device = light();
        device.apply(&DeviceCommand::TurnOn).unwrap();
        device.apply(&DeviceCommand::TurnOn).unwrap();
        assert_eq!(device.state(), &DeviceState::Light { on: true });
    }

    #[test]
    fn should_set_thermostat_temperature() {
        let mut device = thermostat();
        let change = device.apply(&DeviceCommand::SetTemp(Some(75.0))).unwrap();
        assert_eq!(change.to_string(), "Thermostat 2 set to 75");
        assert_eq!(device.status(), "Thermostat 2 is at 75\u{b0}F");
    }

    #[test]
    fn should_keep_fractional_temperature() {
        let mut device = thermostat();
        device.apply(&DeviceCommand::SetTemp(Some(68.5))).unwrap();
        assert_eq!(device.status(), "Thermostat 2 is at 68.5\u{b0}F");
    }

    #[test]
    fn should_reject_set_temp_without_value_and_keep_previous() {
        let mut device = thermostat();
        device.apply(&DeviceCommand::SetTemp(Some(75.0))).unwrap();

        let result = device.apply(&DeviceCommand::SetTemp(None));
        assert_eq!(result, Err(HomeError::MissingValue { command: "setTemp" }));
        assert_eq!(device.status(), "Thermostat 2 is at 75\u{b0}F");
    }

    #[test]
    fn should_lock_and_unlock_door_symmetrically() {
        let mut device = door();
        assert_eq!(
            device.apply(&DeviceCommand::Unlock).unwrap().to_string(),
            "Door 3 UNLOCKED"
        );
        assert_eq!(device.status(), "Door 3 is UNLOCKED");
        assert_eq!(
            device.apply(&DeviceCommand::Lock).unwrap().to_string(),
            "Door 3 LOCKED"
        );
        assert_eq!(device.status(), "Door 3 is LOCKED");
    }

    #[test]
    fn should_stay_unlocked_when_unlocked_twice() {
        let mut device = door();
        device.apply(&DeviceCommand::Unlock).unwrap();
        assert!(device.apply(&DeviceCommand::Unlock).is_ok());
        assert_eq!(device.status(), "Door 3 is UNLOCKED");
    }

    #[test]
    fn should_reject_commands_outside_kind_capabilities() {
        let mut device = light();
        let result = device.apply(&DeviceCommand::Lock);
        assert_eq!(
            result,
            Err(HomeError::UnsupportedCommand {
                kind: DeviceKind::Light,
                command: "lock".to_string()
            })
        );
        assert_eq!(device.status(), "Light 1 is OFF");

        let mut device = door();
        assert!(device.apply(&DeviceCommand::SetTemp(Some(60.0))).is_err());
        assert_eq!(device.status(), "Door 3 is LOCKED");

        let mut device = thermostat();
        assert!(device.apply(&DeviceCommand::TurnOn).is_err());
        assert_eq!(device.status(), "Thermostat 2 is at 70\u{b0}F");
    }

    #[test]
    fn should_reject_unknown_command_names() {
        let mut device = door();
        let err = device
            .apply(&DeviceCommand::Unknown("open".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid command for Door.");
    }

    #[test]
    fn should_acknowledge_update_without_changing_state() {
        let device = thermostat();
        assert_eq!(device.receive_update(), "Thermostat 2 received system update");
        assert_eq!(device.state(), &DeviceState::initial(DeviceKind::Thermostat));
    }
}
