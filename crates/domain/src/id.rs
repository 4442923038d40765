//! Typed device identifier backed by a plain number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device).
///
/// Ids are chosen by whoever seeds the registry; there is no generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Access the inner number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DeviceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_number() {
        assert_eq!(DeviceId::new(42).to_string(), "42");
    }

    #[test]
    fn should_parse_numeric_text() {
        let id: DeviceId = "3".parse().unwrap();
        assert_eq!(id, DeviceId::new(3));
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        assert!(DeviceId::from_str("abc").is_err());
        assert!(DeviceId::from_str("-1").is_err());
        assert!(DeviceId::from_str("").is_err());
    }

    #[test]
    fn should_order_by_inner_number() {
        assert!(DeviceId::new(1) < DeviceId::new(2));
    }
}
