use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::store::UserIntent;

/// Recoverable errors can be acknowledged; unrecoverable ones cannot.
#[component]
pub fn ErrorScreen(message: String, critical: bool, controls: ScreenControls) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let acknowledge = controls.acknowledge_error;

    let (heading, accent) = match (acknowledge.visible, critical) {
        (false, _) => ("Unrecoverable Error", "text-red-800"),
        (true, true) => ("Critical Error", "text-red-700"),
        (true, false) => ("Error", "text-orange-700"),
    };

    rsx! {
        div {
            class: "bg-red-50 border border-red-200 rounded-xl p-8 text-center",
            h2 {
                class: "text-xl font-semibold mb-4 {accent}",
                "{heading}"
            }
            p {
                class: "text-sm text-gray-700 mb-6",
                "{message}"
            }
            if acknowledge.visible {
                button {
                    class: acknowledge.class(),
                    disabled: !acknowledge.enabled,
                    onclick: move |_| if acknowledge.enabled { intents.send(UserIntent::AcknowledgeError) },
                    "OK"
                }
            } else {
                p {
                    class: "text-xs text-gray-500",
                    "Restart the application to continue."
                }
            }
        }
    }
}
