//! Smart home service — the device registry and its command dispatcher.

use std::collections::BTreeMap;

use homedemo_domain::command::DeviceCommand;
use homedemo_domain::device::{Device, StateChange};
use homedemo_domain::error::HomeError;
use homedemo_domain::id::DeviceId;

use crate::ports::Console;

const STATUS_HEADER: &str = "--- Smart Home Status ---";
const STATUS_FOOTER: &str = "------------------------";

/// Registry of devices keyed by id, iterated in ascending id order.
pub struct SmartHome<C> {
    console: C,
    devices: BTreeMap<DeviceId, Device>,
}

impl<C: Console> SmartHome<C> {
    /// Create an empty registry reporting to the given console.
    pub fn new(console: C) -> Self {
        Self {
            console,
            devices: BTreeMap::new(),
        }
    }

    /// Insert a device, replacing any device already registered under its id.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub fn add_device(&mut self, device: Device) {
        let (id, kind) = (device.id, device.kind());
        if self.devices.insert(id, device).is_some() {
            tracing::debug!("replaced existing device");
        }
        self.console.info(&format!("Device {id} ({kind}) added."));
    }

    /// Build a device from a type tag and add it.
    ///
    /// An unknown tag is reported on the console and nothing is inserted.
    /// Returns whether a device was added.
    pub fn add_from_type(&mut self, tag: &str, id: DeviceId) -> bool {
        match Device::from_type_tag(tag, id) {
            Ok(device) => {
                self.add_device(device);
                true
            }
            Err(err) => {
                self.console.error(&err.to_string());
                false
            }
        }
    }

    /// Run a command against the device with the given id and report the
    /// resulting state change.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::DeviceNotFound`] when no device has `id`, or the
    /// device's own rejection ([`HomeError::UnsupportedCommand`],
    /// [`HomeError::MissingValue`]). Nothing is written to the console and no
    /// state changes on error.
    #[tracing::instrument(skip(self, command), fields(command = %command))]
    pub fn execute(
        &mut self,
        id: DeviceId,
        command: &DeviceCommand,
    ) -> Result<StateChange, HomeError> {
        let device = self
            .devices
            .get_mut(&id)
            .ok_or_else(|| HomeError::DeviceNotFound { id: id.to_string() })?;
        let change = device.apply(command)?;
        self.console.info(&change.to_string());
        Ok(change)
    }

    /// Report every device's status between a fixed header and footer.
    pub fn show_status(&self) {
        self.console.info(STATUS_HEADER);
        for device in self.devices.values() {
            self.console.info(&device.status());
        }
        self.console.info(STATUS_FOOTER);
    }

    /// Notify every device of a system update.
    pub fn update_all(&self) {
        tracing::debug!(devices = self.devices.len(), "broadcasting system update");
        for device in self.devices.values() {
            self.console.info(&device.receive_update());
        }
    }

    #[must_use]
    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(&id)
    }

    /// Status line of a single device, if registered.
    #[must_use]
    pub fn status_of(&self, id: DeviceId) -> Option<String> {
        self.devices.get(&id).map(Device::status)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
