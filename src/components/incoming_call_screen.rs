use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::store::UserIntent;

#[component]
pub fn IncomingCallScreen(caller: String, controls: ScreenControls) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let accept = controls.accept_call;
    let reject = controls.reject_call;

    rsx! {
        div {
            class: "bg-white rounded-xl px-8 py-12 shadow-md border border-gray-200 text-center animate-pulse",

            div {
                class: "mb-8",
                h2 {
                    class: "text-2xl font-medium text-slate-800 mb-4",
                    "Incoming Call"
                }
                p {
                    class: "text-lg font-medium text-green-600",
                    "{caller}"
                }
            }

            div {
                class: "flex gap-4 justify-center",
                button {
                    class: accept.class(),
                    disabled: !accept.enabled,
                    onclick: move |_| if accept.enabled { intents.send(UserIntent::AcceptIncomingCall) },
                    "Answer"
                }
                button {
                    class: reject.class(),
                    disabled: !reject.enabled,
                    onclick: move |_| if reject.enabled { intents.send(UserIntent::RejectIncomingCall) },
                    "Reject"
                }
            }
        }
    }
}
