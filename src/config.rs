use std::sync::OnceLock;
use std::time::Duration;

use log::warn;

use crate::error::{UiError, UiResult};
use crate::state::DeviceMap;

/// Settings for the scripted demo engine
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Pause between a "working" screen and the result of the action
    pub working_delay: Duration,
    /// How often message rates are pushed to the UI
    pub rate_interval: Duration,
    pub input_devices: DeviceMap,
    pub output_devices: DeviceMap,
    /// Calling this peer fails with a recoverable error
    pub unreachable_peer: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            working_delay: Duration::from_millis(1000),
            rate_interval: Duration::from_secs(1),
            input_devices: [("100", "indevice 1"), ("111", "indevice 2")]
                .into_iter()
                .collect(),
            output_devices: [("0", "outdevice 1"), ("15", "outdevice 2")]
                .into_iter()
                .collect(),
            unreachable_peer: None,
        }
    }
}

static INSTALLED: OnceLock<UiConfig> = OnceLock::new();

/// UI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub window_title: String,
    pub demo: DemoConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "Softphone".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_working_delay(mut self, delay: Duration) -> Self {
        self.demo.working_delay = delay;
        self
    }

    pub fn with_rate_interval(mut self, interval: Duration) -> Self {
        self.demo.rate_interval = interval;
        self
    }

    pub fn with_devices(mut self, input_devices: DeviceMap, output_devices: DeviceMap) -> Self {
        self.demo.input_devices = input_devices;
        self.demo.output_devices = output_devices;
        self
    }

    pub fn with_unreachable_peer(mut self, peer: impl Into<String>) -> Self {
        self.demo.unreachable_peer = Some(peer.into());
        self
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> UiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`UiConfig::from_env`], falling back to defaults on bad input
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!("Ignoring environment configuration: {}", e);
            Self::default()
        })
    }

    /// Make this the configuration returned by every later [`UiConfig::current`].
    /// Only the first install wins; returns whether this one did.
    pub fn install(self) -> bool {
        INSTALLED.set(self).is_ok()
    }

    /// Installed configuration, read from the environment on first use if none was installed
    pub fn current() -> Self {
        INSTALLED.get_or_init(Self::load).clone()
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> UiResult<Self> {
        let mut config = Self::default();

        if let Some(title) = lookup("SOFTPHONE_UI_TITLE") {
            config.window_title = title;
        }
        if let Some(ms) = lookup_millis(&lookup, "SOFTPHONE_UI_WORKING_DELAY_MS")? {
            config.demo.working_delay = ms;
        }
        if let Some(ms) = lookup_millis(&lookup, "SOFTPHONE_UI_RATE_INTERVAL_MS")? {
            if ms.is_zero() {
                return Err(UiError::InvalidSetting {
                    key: "SOFTPHONE_UI_RATE_INTERVAL_MS".to_string(),
                    value: "0".to_string(),
                });
            }
            config.demo.rate_interval = ms;
        }
        config.demo.unreachable_peer = lookup("SOFTPHONE_UI_UNREACHABLE_PEER");

        Ok(config)
    }
}

fn lookup_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> UiResult<Option<Duration>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| UiError::InvalidSetting {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = UiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = UiConfig::from_lookup(lookup_from(&[
            ("SOFTPHONE_UI_TITLE", "Phone"),
            ("SOFTPHONE_UI_WORKING_DELAY_MS", "250"),
            ("SOFTPHONE_UI_RATE_INTERVAL_MS", "2000"),
            ("SOFTPHONE_UI_UNREACHABLE_PEER", "mallory"),
        ]))
        .unwrap();

        assert_eq!(config.window_title, "Phone");
        assert_eq!(config.demo.working_delay, Duration::from_millis(250));
        assert_eq!(config.demo.rate_interval, Duration::from_secs(2));
        assert_eq!(config.demo.unreachable_peer.as_deref(), Some("mallory"));
    }

    #[test]
    fn malformed_delay_is_rejected() {
        let err = UiConfig::from_lookup(lookup_from(&[("SOFTPHONE_UI_WORKING_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            UiError::InvalidSetting {
                key: "SOFTPHONE_UI_WORKING_DELAY_MS".into(),
                value: "soon".into(),
            }
        );
    }

    #[test]
    fn zero_rate_interval_is_rejected() {
        assert!(UiConfig::from_lookup(lookup_from(&[("SOFTPHONE_UI_RATE_INTERVAL_MS", "0")])).is_err());
    }

    #[test]
    fn installed_config_is_shared_and_set_once() {
        let config = UiConfig::default().with_window_title("Installed Phone");
        assert!(config.clone().install());
        assert_eq!(UiConfig::current(), config);

        assert!(!UiConfig::default().with_window_title("Second").install());
        assert_eq!(UiConfig::current().window_title, "Installed Phone");
    }

    #[test]
    fn default_demo_devices_keep_their_order() {
        let demo = DemoConfig::default();
        assert_eq!(demo.input_devices.first_id(), Some("100"));
        assert_eq!(demo.output_devices.first_id(), Some("0"));
    }
}
