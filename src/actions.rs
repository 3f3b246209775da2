// Commands sent from the UI to the call-control engine.
// Every action is one-way: the outcome arrives later as a notification.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::{UiError, UiResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAction {
    /// The UI is up and waiting for its first notification
    Ready,
    Login {
        username: String,
        bootstrap: String,
    },
    Logout,
    ResetDevices,
    /// `None` means no device could be selected for that direction
    ChooseDevices {
        input_id: Option<String>,
        output_id: Option<String>,
    },
    DevicesChosen,
    Call {
        username: Option<String>,
    },
    AcceptIncomingCall,
    RejectIncomingCall,
    HangupCall,
    ErrorAcknowledged,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Ready => "ready",
            UiAction::Login { .. } => "login",
            UiAction::Logout => "logout",
            UiAction::ResetDevices => "reset_devices",
            UiAction::ChooseDevices { .. } => "choose_devices",
            UiAction::DevicesChosen => "devices_chosen",
            UiAction::Call { .. } => "call",
            UiAction::AcceptIncomingCall => "accept_incoming_call",
            UiAction::RejectIncomingCall => "reject_incoming_call",
            UiAction::HangupCall => "hangup_call",
            UiAction::ErrorAcknowledged => "error_acknowledged",
        }
    }
}

/// Outbound side of the engine connection
pub trait ActionSink {
    fn forward(&self, action: UiAction) -> UiResult<()>;
}

impl ActionSink for mpsc::UnboundedSender<UiAction> {
    fn forward(&self, action: UiAction) -> UiResult<()> {
        self.send(action).map_err(|_| UiError::EngineDisconnected)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Sink that keeps everything forwarded to it
    #[derive(Default)]
    pub struct RecordingSink {
        actions: RefCell<Vec<UiAction>>,
    }

    impl RecordingSink {
        pub fn take(&self) -> Vec<UiAction> {
            self.actions.borrow_mut().drain(..).collect()
        }
    }

    impl ActionSink for RecordingSink {
        fn forward(&self, action: UiAction) -> UiResult<()> {
            self.actions.borrow_mut().push(action);
            Ok(())
        }
    }
}
