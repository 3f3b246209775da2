use crate::state::{SessionView, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Normal,
    Highlighted,
    Danger,
    Disabled,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Normal => "px-6 py-3 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-lg font-medium transition-all duration-200 shadow-sm hover:shadow-md",
            ButtonStyle::Highlighted => "px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-all duration-200 shadow-sm hover:shadow-md",
            ButtonStyle::Danger => "px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-all duration-200 shadow-md hover:shadow-lg",
            ButtonStyle::Disabled => "px-6 py-3 bg-gray-100 text-gray-400 rounded-lg font-medium cursor-not-allowed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub visible: bool,
    pub enabled: bool,
    pub style: ButtonStyle,
}

impl ButtonState {
    const HIDDEN: ButtonState = ButtonState {
        visible: false,
        enabled: false,
        style: ButtonStyle::Disabled,
    };

    fn shown(style: ButtonStyle, blocked: bool) -> Self {
        Self {
            visible: true,
            enabled: !blocked,
            style: if blocked { ButtonStyle::Disabled } else { style },
        }
    }

    pub fn class(&self) -> &'static str {
        self.style.class()
    }
}

/// What each screen may offer for a given view
///
/// Everything is disabled while an action is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenControls {
    pub inputs_enabled: bool,
    pub login: ButtonState,
    pub logout: ButtonState,
    pub reset_devices: ButtonState,
    pub confirm_devices: ButtonState,
    pub call: ButtonState,
    pub accept_call: ButtonState,
    pub reject_call: ButtonState,
    pub hangup: ButtonState,
    pub hangup_label: &'static str,
    pub acknowledge_error: ButtonState,
}

impl ScreenControls {
    pub fn for_view(view: &SessionView) -> Self {
        let blocked = view.block_input;
        let mut controls = Self {
            inputs_enabled: !blocked,
            login: ButtonState::HIDDEN,
            logout: ButtonState::HIDDEN,
            reset_devices: ButtonState::HIDDEN,
            confirm_devices: ButtonState::HIDDEN,
            call: ButtonState::HIDDEN,
            accept_call: ButtonState::HIDDEN,
            reject_call: ButtonState::HIDDEN,
            hangup: ButtonState::HIDDEN,
            hangup_label: "End Call",
            acknowledge_error: ButtonState::HIDDEN,
        };

        match view.state {
            UiState::Login => {
                controls.login = ButtonState::shown(ButtonStyle::Highlighted, blocked);
            }
            UiState::Error => {
                controls.acknowledge_error = ButtonState::shown(ButtonStyle::Normal, blocked);
            }
            UiState::DeviceSelection => {
                controls.confirm_devices = ButtonState::shown(ButtonStyle::Highlighted, blocked);
            }
            UiState::ActiveIdle => {
                controls.call = ButtonState::shown(ButtonStyle::Highlighted, blocked);
                controls.reset_devices = ButtonState::shown(ButtonStyle::Normal, blocked);
                controls.logout = ButtonState::shown(ButtonStyle::Normal, blocked);
            }
            UiState::ActiveOutgoingCalling | UiState::ActiveOutgoingCall => {
                controls.hangup = ButtonState::shown(ButtonStyle::Danger, blocked);
                controls.hangup_label = "Cancel Call";
            }
            UiState::ActiveCall => {
                controls.hangup = ButtonState::shown(ButtonStyle::Danger, blocked);
            }
            UiState::ActiveIncomingCall => {
                controls.accept_call = ButtonState::shown(ButtonStyle::Highlighted, blocked);
                controls.reject_call = ButtonState::shown(ButtonStyle::Danger, blocked);
            }
            // Nothing to press: the engine drives these
            UiState::Working | UiState::UnrecoverableError => {
                controls.inputs_enabled = false;
            }
        }

        controls
    }
}
