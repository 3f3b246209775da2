use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::state::UiState;
use crate::store::UserIntent;

/// Outgoing (pending) and established calls
#[component]
pub fn CallScreen(
    peer: String,
    state: UiState,
    entered_at: DateTime<Utc>,
    controls: ScreenControls,
) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let mut now = use_signal(Utc::now);
    let hangup = controls.hangup;

    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            now.set(Utc::now());
        }
    });

    let status_text = match state {
        UiState::ActiveOutgoingCalling => "Calling...".to_string(),
        UiState::ActiveOutgoingCall => "Ringing...".to_string(),
        UiState::ActiveCall => {
            let secs = (*now.read() - entered_at).num_seconds().max(0);
            format!("Connected • {:02}:{:02}", secs / 60, secs % 60)
        }
        _ => String::new(),
    };
    let pending = matches!(state, UiState::ActiveOutgoingCalling | UiState::ActiveOutgoingCall);

    rsx! {
        div {
            class: "bg-white rounded-xl p-8 shadow-sm border border-gray-200 text-center",

            div {
                class: "mb-2",
                h2 {
                    class: "text-2xl font-semibold text-gray-900",
                    "{peer}"
                }
            }

            div {
                class: "flex items-center justify-center gap-2 mb-6",
                span {
                    class: if pending { "text-lg text-gray-600 animate-pulse" } else { "text-lg text-gray-600" },
                    "{status_text}"
                }
            }

            if hangup.visible {
                button {
                    class: format!("w-full {}", hangup.class()),
                    disabled: !hangup.enabled,
                    onclick: move |_| if hangup.enabled { intents.send(UserIntent::HangupCall) },
                    "{controls.hangup_label}"
                }
            }
        }
    }
}
