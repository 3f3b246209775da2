use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::store::UserIntent;

#[component]
pub fn IdleScreen(username: String, call_target: String, controls: ScreenControls) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let call = controls.call;
    let logout = controls.logout;
    let reset_devices = controls.reset_devices;

    rsx! {
        div {
            class: "flex flex-col gap-6",

            div {
                class: "bg-white rounded-xl px-6 py-4 shadow-sm border border-gray-200 flex justify-between items-center",
                div {
                    div {
                        class: "font-medium text-gray-800 text-sm",
                        "Logged in as: {username}"
                    }
                    div {
                        class: "text-gray-500 text-xs mt-0.5",
                        "Ready to make and receive calls"
                    }
                }
                div {
                    class: "flex gap-2",
                    button {
                        class: reset_devices.class(),
                        disabled: !reset_devices.enabled,
                        onclick: move |_| if reset_devices.enabled { intents.send(UserIntent::ResetDevices) },
                        "Devices"
                    }
                    button {
                        class: logout.class(),
                        disabled: !logout.enabled,
                        onclick: move |_| if logout.enabled { intents.send(UserIntent::Logout) },
                        "Logout"
                    }
                }
            }

            div {
                class: "bg-white rounded-xl p-6 shadow-sm border border-gray-200",
                div {
                    class: "flex gap-3",
                    input {
                        r#type: "text",
                        placeholder: "Username to call",
                        class: "flex-1 px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all",
                        value: "{call_target}",
                        disabled: !controls.inputs_enabled,
                        oninput: move |evt| intents.send(UserIntent::EditCallUsername(evt.value())),
                        onkeypress: move |evt| {
                            if evt.key() == dioxus::events::Key::Enter && call.enabled {
                                intents.send(UserIntent::Call);
                            }
                        }
                    }
                    button {
                        class: call.class(),
                        disabled: !call.enabled,
                        onclick: move |_| if call.enabled { intents.send(UserIntent::Call) },
                        "Call"
                    }
                }
            }
        }
    }
}
