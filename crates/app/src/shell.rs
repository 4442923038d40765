//! Home shell — turns a line of user input into a [`SmartHome`] call.
//!
//! Lines are split on whitespace. The first token names the command. For
//! device commands the second token is the device id and the third an
//! optional numeric value.

use homedemo_domain::command::DeviceCommand;
use homedemo_domain::error::HomeError;
use homedemo_domain::id::DeviceId;

use crate::ports::Console;
use crate::services::smart_home::SmartHome;
use crate::session::{CommandHandler, Flow};

/// Menu line listing every accepted command.
pub const HOME_MENU: &str = "Commands: turnOn id | turnOff id | lock id | unlock id | setTemp id value | status | update | exit";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Exit,
    Status,
    Update,
    Device { id: DeviceId, command: DeviceCommand },
}

impl ShellCommand {
    /// Parse one input line. A blank line yields `Ok(None)`.
    ///
    /// A value token that is not a finite number is treated as absent. An id
    /// token may be written in any numeric notation (`1`, `1.0`, `1e0`) as
    /// long as it denotes a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::MissingDeviceId`] when a device command has no id
    /// token and [`HomeError::DeviceNotFound`] when the id token is not a
    /// whole number in `u32` range.
    pub fn parse(line: &str) -> Result<Option<Self>, HomeError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let command = match name {
            "exit" => Self::Exit,
            "status" => Self::Status,
            "update" => Self::Update,
            _ => {
                let raw_id = tokens.next().ok_or(HomeError::MissingDeviceId)?;
                let id = parse_device_id(raw_id).ok_or_else(|| HomeError::DeviceNotFound {
                    id: raw_id.to_string(),
                })?;
                let value = tokens.next().and_then(parse_number);
                Self::Device {
                    id,
                    command: DeviceCommand::parse(name, value),
                }
            }
        };
        Ok(Some(command))
    }
}

/// A finite number, with `-0` folded into `0`.
fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value + 0.0)
}

/// A device id: a number that is a whole value within `u32` range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn parse_device_id(raw: &str) -> Option<DeviceId> {
    if let Ok(id) = raw.parse() {
        return Some(id);
    }
    parse_number(raw)
        .filter(|value| value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(value))
        .map(|value| DeviceId::new(value as u32))
}

/// Interactive front end of a [`SmartHome`].
pub struct HomeShell<C> {
    home: SmartHome<C>,
}

impl<C: Console> HomeShell<C> {
    pub fn new(home: SmartHome<C>) -> Self {
        Self { home }
    }

    #[must_use]
    pub fn home(&self) -> &SmartHome<C> {
        &self.home
    }
}

impl<C: Console> CommandHandler for HomeShell<C> {
    type Error = HomeError;

    fn menu(&self) -> &str {
        HOME_MENU
    }

    fn handle(&mut self, line: &str) -> Result<Flow, HomeError> {
        match ShellCommand::parse(line)? {
            None => {}
            Some(ShellCommand::Exit) => return Ok(Flow::Exit),
            Some(ShellCommand::Status) => self.home.show_status(),
            Some(ShellCommand::Update) => self.home.update_all(),
            Some(ShellCommand::Device { id, command }) => {
                self.home.execute(id, &command)?;
            }
        }
        Ok(Flow::Continue)
    }
}
