//! Singleton — one application config, created on first use and then shared.
//!
//! The instance lives in a [`ConfigSlot`] owned by whoever needs it and is
//! handed out by reference, so there is no global.

use std::cell::OnceCell;

/// Name the config is created with.
pub const APP_NAME: &str = "PatternApp";

#[derive(Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
}

/// Lazily initialised holder of the single [`AppConfig`].
#[derive(Debug, Default)]
pub struct ConfigSlot {
    cell: OnceCell<AppConfig>,
}

impl ConfigSlot {
    /// The config instance, created on the first call.
    #[must_use]
    pub fn instance(&self) -> &AppConfig {
        self.cell.get_or_init(|| {
            tracing::debug!("creating app config");
            AppConfig {
                app_name: APP_NAME.to_string(),
            }
        })
    }

    /// Whether the instance has been created yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_lazily() {
        let slot = ConfigSlot::default();
        assert!(!slot.is_initialized());
        assert_eq!(slot.instance().app_name, "PatternApp");
        assert!(slot.is_initialized());
    }

    #[test]
    fn should_return_same_instance_every_time() {
        let slot = ConfigSlot::default();
        let first = slot.instance();
        let second = slot.instance();
        assert!(std::ptr::eq(first, second));
    }
}
