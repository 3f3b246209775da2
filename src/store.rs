use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::actions::{ActionSink, UiAction};
use crate::notifications::UiNotification;
use crate::state::{SessionView, UiState};

/// Input coming from the person in front of the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserIntent {
    EditLoginUsername(String),
    EditLoginBootstrap(String),
    EditCallUsername(String),
    SelectInputDevice(String),
    SelectOutputDevice(String),
    Login,
    Logout,
    ResetDevices,
    ConfirmDevices,
    Call,
    AcceptIncomingCall,
    RejectIncomingCall,
    HangupCall,
    AcknowledgeError,
}

/// Owner of the session view
///
/// Engine notifications go through [`ViewStore::apply`], user input through
/// [`ViewStore::handle_intent`]. The store never decides a transition by
/// itself.
#[derive(Debug, Clone, Default)]
pub struct ViewStore {
    view: SessionView,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SessionView {
        &self.view
    }

    pub fn state(&self) -> UiState {
        self.view.state
    }

    /// Apply one engine notification
    pub fn apply(&mut self, notification: UiNotification, sink: &impl ActionSink) {
        if let Some(next) = notification.target_state() {
            if self.view.state.is_terminal() {
                warn!("Leaving terminal state {} for {}", self.view.state, next);
            }
            info!("UI state {} -> {}", self.view.state, next);
        }

        match notification {
            UiNotification::GoToLogin { reset } => {
                self.view.enter(UiState::Login);
                if reset {
                    self.view.login_username.clear();
                    self.view.login_bootstrap.clear();
                }
            }
            UiNotification::GoToError { message, critical } => {
                self.view.enter(UiState::Error);
                self.view.error_message = message;
                self.view.error_critical = critical;
            }
            UiNotification::GoToUnrecoverableError { message } => {
                self.view.enter(UiState::UnrecoverableError);
                self.view.unrecoverable_error_message = message;
            }
            UiNotification::GoToWorking { message } => {
                self.view.enter(UiState::Working);
                self.view.working_message = message;
            }
            UiNotification::GoToIdle => {
                self.view.enter(UiState::ActiveIdle);
            }
            UiNotification::GoToOutgoingCall { username } => {
                self.view.enter(UiState::ActiveOutgoingCall);
                self.view.call_username = Some(username);
            }
            UiNotification::GoToCalling { username } => {
                self.view.enter(UiState::ActiveOutgoingCalling);
                self.view.call_username = Some(username);
            }
            UiNotification::GoToIncomingCall { username } => {
                self.view.enter(UiState::ActiveIncomingCall);
                self.view.call_username = Some(username);
            }
            UiNotification::GoToEstablishedCall => {
                self.view.enter(UiState::ActiveCall);
            }
            UiNotification::ShowDeviceSelection {
                input_devices,
                output_devices,
            } => {
                self.view.selected_input_device = input_devices.first_id().map(str::to_owned);
                self.view.selected_output_device = output_devices.first_id().map(str::to_owned);
                self.view.input_devices = input_devices;
                self.view.output_devices = output_devices;

                if self.view.selected_input_device.is_none()
                    || self.view.selected_output_device.is_none()
                {
                    error!(
                        "Undefined device ({:?}) / ({:?})",
                        self.view.selected_input_device, self.view.selected_output_device
                    );
                }

                // The engine has to know the defaults are what is selected
                self.choose_devices(sink);

                self.view.enter(UiState::DeviceSelection);
            }
            UiNotification::UpdateMessageRate { incoming, outgoing } => {
                self.view.in_message_rate = incoming;
                self.view.out_message_rate = outgoing;
            }
        }
    }

    /// Apply one piece of user input
    pub fn handle_intent(&mut self, intent: UserIntent, sink: &impl ActionSink) {
        match intent {
            UserIntent::EditLoginUsername(value) => self.view.login_username = value,
            UserIntent::EditLoginBootstrap(value) => self.view.login_bootstrap = value,
            UserIntent::EditCallUsername(value) => self.view.call_username = Some(value),
            UserIntent::SelectInputDevice(id) => {
                self.view.selected_input_device = Some(id);
                self.choose_devices(sink);
            }
            UserIntent::SelectOutputDevice(id) => {
                self.view.selected_output_device = Some(id);
                self.choose_devices(sink);
            }
            UserIntent::Login => self.login(sink),
            UserIntent::Logout => self.logout(sink),
            UserIntent::ResetDevices => self.reset_devices(sink),
            UserIntent::ConfirmDevices => self.devices_chosen(sink),
            UserIntent::Call => self.call(sink),
            UserIntent::AcceptIncomingCall => self.accept_incoming_call(sink),
            UserIntent::RejectIncomingCall => self.reject_incoming_call(sink),
            UserIntent::HangupCall => self.hangup_call(sink),
            UserIntent::AcknowledgeError => self.acknowledge_error(sink),
        }
    }

    pub fn login(&mut self, sink: &impl ActionSink) {
        let action = UiAction::Login {
            username: self.view.login_username.clone(),
            bootstrap: self.view.login_bootstrap.clone(),
        };
        self.forward_blocking(action, sink);
    }

    pub fn logout(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::Logout, sink);
    }

    pub fn reset_devices(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::ResetDevices, sink);
    }

    /// Report the current selection. Does not block input.
    pub fn choose_devices(&mut self, sink: &impl ActionSink) {
        let action = UiAction::ChooseDevices {
            input_id: self.view.selected_input_device.clone(),
            output_id: self.view.selected_output_device.clone(),
        };
        forward(action, sink);
    }

    pub fn devices_chosen(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::DevicesChosen, sink);
    }

    pub fn call(&mut self, sink: &impl ActionSink) {
        let action = UiAction::Call {
            username: self.view.call_username.clone(),
        };
        self.forward_blocking(action, sink);
    }

    pub fn accept_incoming_call(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::AcceptIncomingCall, sink);
    }

    pub fn reject_incoming_call(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::RejectIncomingCall, sink);
    }

    pub fn hangup_call(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::HangupCall, sink);
    }

    pub fn acknowledge_error(&mut self, sink: &impl ActionSink) {
        self.forward_blocking(UiAction::ErrorAcknowledged, sink);
    }

    fn forward_blocking(&mut self, action: UiAction, sink: &impl ActionSink) {
        forward(action, sink);
        self.view.block_input = true;
    }
}

fn forward(action: UiAction, sink: &impl ActionSink) {
    let name = action.name();
    debug!("Forwarding {} action", name);
    if let Err(e) = sink.forward(action) {
        error!("Failed to forward {} action: {}", name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::RecordingSink;
    use crate::state::DeviceMap;

    fn devices(pairs: &[(&str, &str)]) -> DeviceMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn device_selection_defaults_to_first_keys_and_reports_them() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();

        store.apply(
            UiNotification::ShowDeviceSelection {
                input_devices: devices(&[("dev1", "Mic A"), ("dev2", "Mic B")]),
                output_devices: devices(&[("out1", "Speaker A")]),
            },
            &sink,
        );

        let view = store.view();
        assert_eq!(view.state, UiState::DeviceSelection);
        assert_eq!(view.selected_input_device.as_deref(), Some("dev1"));
        assert_eq!(view.selected_output_device.as_deref(), Some("out1"));
        assert!(!view.block_input);
        assert_eq!(
            sink.take(),
            vec![UiAction::ChooseDevices {
                input_id: Some("dev1".into()),
                output_id: Some("out1".into()),
            }]
        );
    }

    #[test]
    fn empty_device_map_leaves_selection_undefined() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();

        store.apply(
            UiNotification::ShowDeviceSelection {
                input_devices: DeviceMap::new(),
                output_devices: devices(&[("out1", "Speaker A")]),
            },
            &sink,
        );

        assert_eq!(store.state(), UiState::DeviceSelection);
        assert_eq!(store.view().selected_input_device, None);
        assert_eq!(
            sink.take(),
            vec![UiAction::ChooseDevices {
                input_id: None,
                output_id: Some("out1".into()),
            }]
        );
    }

    #[test]
    fn error_sets_message_and_severity() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.login(&sink);
        assert!(store.view().block_input);

        store.apply(
            UiNotification::GoToError {
                message: "Network lost".into(),
                critical: true,
            },
            &sink,
        );

        let view = store.view();
        assert_eq!(view.state, UiState::Error);
        assert_eq!(view.error_message, "Network lost");
        assert!(view.error_critical);
        assert!(!view.block_input);
    }

    #[test]
    fn login_reset_clears_credentials() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.handle_intent(UserIntent::EditLoginUsername("alice".into()), &sink);
        store.handle_intent(UserIntent::EditLoginBootstrap("10.0.0.1:5000".into()), &sink);

        store.apply(UiNotification::GoToLogin { reset: false }, &sink);
        assert_eq!(store.view().login_username, "alice");
        assert_eq!(store.view().login_bootstrap, "10.0.0.1:5000");

        store.apply(UiNotification::GoToLogin { reset: true }, &sink);
        assert_eq!(store.view().login_username, "");
        assert_eq!(store.view().login_bootstrap, "");
        assert!(sink.take().is_empty());
    }

    #[test]
    fn every_action_but_choose_devices_blocks_input() {
        type Forwarder = fn(&mut ViewStore, &RecordingSink);
        let blocking: [(Forwarder, &str); 9] = [
            (|s, k| s.login(k), "login"),
            (|s, k| s.logout(k), "logout"),
            (|s, k| s.reset_devices(k), "reset_devices"),
            (|s, k| s.devices_chosen(k), "devices_chosen"),
            (|s, k| s.call(k), "call"),
            (|s, k| s.accept_incoming_call(k), "accept_incoming_call"),
            (|s, k| s.reject_incoming_call(k), "reject_incoming_call"),
            (|s, k| s.hangup_call(k), "hangup_call"),
            (|s, k| s.acknowledge_error(k), "error_acknowledged"),
        ];

        for (press, name) in blocking {
            let sink = RecordingSink::default();
            let mut store = ViewStore::new();
            press(&mut store, &sink);
            assert!(store.view().block_input, "{name} should block input");
            let sent = sink.take();
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].name(), name);
        }

        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.choose_devices(&sink);
        assert!(!store.view().block_input);
        assert_eq!(sink.take().len(), 1);
    }

    #[test]
    fn actions_carry_current_fields_without_validation() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();

        store.login(&sink);
        store.call(&sink);
        store.handle_intent(UserIntent::EditCallUsername("bob".into()), &sink);
        store.handle_intent(UserIntent::Call, &sink);

        assert_eq!(
            sink.take(),
            vec![
                UiAction::Login {
                    username: String::new(),
                    bootstrap: String::new(),
                },
                UiAction::Call { username: None },
                UiAction::Call {
                    username: Some("bob".into())
                },
            ]
        );
    }

    #[test]
    fn selecting_a_device_reports_the_full_selection() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.apply(
            UiNotification::ShowDeviceSelection {
                input_devices: devices(&[("dev1", "Mic A"), ("dev2", "Mic B")]),
                output_devices: devices(&[("out1", "Speaker A")]),
            },
            &sink,
        );
        sink.take();

        store.handle_intent(UserIntent::SelectInputDevice("dev2".into()), &sink);

        assert_eq!(
            sink.take(),
            vec![UiAction::ChooseDevices {
                input_id: Some("dev2".into()),
                output_id: Some("out1".into()),
            }]
        );
        assert!(!store.view().block_input);
    }

    #[test]
    fn call_notifications_set_peer() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();

        store.apply(UiNotification::GoToCalling { username: "bob".into() }, &sink);
        assert_eq!(store.state(), UiState::ActiveOutgoingCalling);
        assert_eq!(store.view().call_username.as_deref(), Some("bob"));

        store.apply(UiNotification::GoToIncomingCall { username: "carol".into() }, &sink);
        assert_eq!(store.state(), UiState::ActiveIncomingCall);
        assert_eq!(store.view().call_username.as_deref(), Some("carol"));

        store.apply(UiNotification::GoToEstablishedCall, &sink);
        assert_eq!(store.state(), UiState::ActiveCall);
        assert_eq!(store.view().call_username.as_deref(), Some("carol"));
    }

    #[test]
    fn message_rate_update_does_not_change_state() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.apply(UiNotification::GoToIdle, &sink);
        store.hangup_call(&sink);

        store.apply(UiNotification::UpdateMessageRate { incoming: 12, outgoing: 7 }, &sink);

        let view = store.view();
        assert_eq!(view.state, UiState::ActiveIdle);
        assert_eq!((view.in_message_rate, view.out_message_rate), (12, 7));
        assert!(view.block_input);
    }

    #[test]
    fn last_notification_wins() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        let sequence = vec![
            UiNotification::GoToWorking { message: "Logging in".into() },
            UiNotification::GoToUnrecoverableError { message: "boom".into() },
            UiNotification::GoToIdle,
            UiNotification::UpdateMessageRate { incoming: 1, outgoing: 1 },
            UiNotification::GoToOutgoingCall { username: "dave".into() },
        ];

        let mut expected = store.state();
        for notification in sequence {
            if let Some(next) = notification.target_state() {
                expected = next;
            }
            store.apply(notification, &sink);
            assert_eq!(store.state(), expected);
        }
        assert_eq!(store.state(), UiState::ActiveOutgoingCall);
    }

    #[test]
    fn unrecoverable_error_keeps_its_own_message() {
        let sink = RecordingSink::default();
        let mut store = ViewStore::new();
        store.apply(
            UiNotification::GoToError { message: "retry".into(), critical: false },
            &sink,
        );
        store.apply(
            UiNotification::GoToUnrecoverableError { message: "audio subsystem gone".into() },
            &sink,
        );
        assert_eq!(store.state(), UiState::UnrecoverableError);
        assert_eq!(store.view().unrecoverable_error_message, "audio subsystem gone");
        assert_eq!(store.view().error_message, "retry");
    }
}
