use serde::{Deserialize, Serialize};

use crate::state::{DeviceMap, UiState};

/// Notifications pushed by the call-control engine to move the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiNotification {
    GoToLogin {
        /// Clear the entered credentials
        reset: bool,
    },
    GoToError {
        message: String,
        critical: bool,
    },
    GoToUnrecoverableError {
        message: String,
    },
    GoToWorking {
        message: String,
    },
    GoToIdle,
    GoToOutgoingCall {
        username: String,
    },
    GoToCalling {
        username: String,
    },
    GoToIncomingCall {
        username: String,
    },
    GoToEstablishedCall,
    ShowDeviceSelection {
        input_devices: DeviceMap,
        output_devices: DeviceMap,
    },
    UpdateMessageRate {
        incoming: u32,
        outgoing: u32,
    },
}

impl UiNotification {
    /// State this notification moves the UI to, if any
    pub fn target_state(&self) -> Option<UiState> {
        match self {
            UiNotification::GoToLogin { .. } => Some(UiState::Login),
            UiNotification::GoToError { .. } => Some(UiState::Error),
            UiNotification::GoToUnrecoverableError { .. } => Some(UiState::UnrecoverableError),
            UiNotification::GoToWorking { .. } => Some(UiState::Working),
            UiNotification::GoToIdle => Some(UiState::ActiveIdle),
            UiNotification::GoToOutgoingCall { .. } => Some(UiState::ActiveOutgoingCall),
            UiNotification::GoToCalling { .. } => Some(UiState::ActiveOutgoingCalling),
            UiNotification::GoToIncomingCall { .. } => Some(UiState::ActiveIncomingCall),
            UiNotification::GoToEstablishedCall => Some(UiState::ActiveCall),
            UiNotification::ShowDeviceSelection { .. } => Some(UiState::DeviceSelection),
            UiNotification::UpdateMessageRate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_rate_update_keeps_state() {
        let update = UiNotification::UpdateMessageRate { incoming: 3, outgoing: 4 };
        assert_eq!(update.target_state(), None);
    }

    #[test]
    fn calling_and_outgoing_call_are_distinct() {
        let calling = UiNotification::GoToCalling { username: "bob".into() };
        let outgoing = UiNotification::GoToOutgoingCall { username: "bob".into() };
        assert_eq!(calling.target_state(), Some(UiState::ActiveOutgoingCalling));
        assert_eq!(outgoing.target_state(), Some(UiState::ActiveOutgoingCall));
    }
}
