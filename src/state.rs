use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Screen the UI is currently showing
///
/// The engine decides every transition; the UI only mirrors the tag it was
/// last told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiState {
    Login,
    Working,
    Error,
    UnrecoverableError,
    DeviceSelection,
    ActiveIdle,
    ActiveOutgoingCalling,
    ActiveOutgoingCall,
    ActiveIncomingCall,
    ActiveCall,
}

impl UiState {
    pub const ALL: [UiState; 10] = [
        UiState::Login,
        UiState::Working,
        UiState::Error,
        UiState::UnrecoverableError,
        UiState::DeviceSelection,
        UiState::ActiveIdle,
        UiState::ActiveOutgoingCalling,
        UiState::ActiveOutgoingCall,
        UiState::ActiveIncomingCall,
        UiState::ActiveCall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::Login => "LOGIN",
            UiState::Working => "WORKING",
            UiState::Error => "ERROR",
            UiState::UnrecoverableError => "UNRECOVERABLE_ERROR",
            UiState::DeviceSelection => "DEVICE_SELECTION",
            UiState::ActiveIdle => "ACTIVE_IDLE",
            UiState::ActiveOutgoingCalling => "ACTIVE_OUTGOING_CALLING",
            UiState::ActiveOutgoingCall => "ACTIVE_OUTGOING_CALL",
            UiState::ActiveIncomingCall => "ACTIVE_INCOMING_CALL",
            UiState::ActiveCall => "ACTIVE_CALL",
        }
    }

    /// States in which `call_username` names the peer
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            UiState::ActiveOutgoingCalling
                | UiState::ActiveOutgoingCall
                | UiState::ActiveIncomingCall
                | UiState::ActiveCall
        )
    }

    /// No exit transition is defined for this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, UiState::UnrecoverableError)
    }
}

impl fmt::Display for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio device as offered by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub label: String,
}

/// Device id to label mapping that keeps insertion order
///
/// The first inserted id is the default selection, so ordering has to be
/// deterministic; a hash map would pick an arbitrary default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceMap {
    devices: Vec<Device>,
}

impl DeviceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a device. Re-inserting an existing id replaces its label and keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        match self.devices.iter_mut().find(|d| d.id == id) {
            Some(existing) => existing.label = label,
            None => self.devices.push(Device { id, label }),
        }
    }

    pub fn first_id(&self) -> Option<&str> {
        self.devices.first().map(|d| d.id.as_str())
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.label.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.label(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DeviceMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = DeviceMap::new();
        for (id, label) in iter {
            map.insert(id, label);
        }
        map
    }
}

impl Serialize for DeviceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.devices.len()))?;
        for device in &self.devices {
            map.serialize_entry(&device.id, &device.label)?;
        }
        map.end()
    }
}

struct DeviceMapVisitor;

impl<'de> Visitor<'de> for DeviceMapVisitor {
    type Value = DeviceMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of device ids to labels")
    }

    // Entries arrive in document order
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<DeviceMap, A::Error> {
        let mut map = DeviceMap::new();
        while let Some((id, label)) = access.next_entry::<String, String>()? {
            map.insert(id, label);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for DeviceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DeviceMapVisitor)
    }
}

/// Everything the screens render
///
/// Fields that do not belong to the current state keep whatever value they
/// last had and carry no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub state: UiState,
    pub state_entered_at: DateTime<Utc>,

    pub login_username: String,
    pub login_bootstrap: String,

    pub error_message: String,
    pub error_critical: bool,
    pub unrecoverable_error_message: String,

    pub working_message: String,

    pub call_username: Option<String>,

    pub input_devices: DeviceMap,
    pub output_devices: DeviceMap,
    pub selected_input_device: Option<String>,
    pub selected_output_device: Option<String>,

    pub in_message_rate: u32,
    pub out_message_rate: u32,

    pub block_input: bool,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            state: UiState::Working,
            state_entered_at: Utc::now(),
            login_username: String::new(),
            login_bootstrap: String::new(),
            error_message: String::new(),
            error_critical: false,
            unrecoverable_error_message: String::new(),
            working_message: "Starting...".to_string(),
            call_username: None,
            input_devices: DeviceMap::new(),
            output_devices: DeviceMap::new(),
            selected_input_device: None,
            selected_output_device: None,
            in_message_rate: 0,
            out_message_rate: 0,
            block_input: false,
        }
    }
}

impl SessionView {
    /// Move to `state`, releasing the input lock
    pub(crate) fn enter(&mut self, state: UiState) {
        self.state = state;
        self.state_entered_at = Utc::now();
        self.block_input = false;
    }
}
