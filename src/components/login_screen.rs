use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::store::UserIntent;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-md text-sm bg-white text-gray-700 box-border";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";

#[component]
pub fn LoginScreen(username: String, bootstrap: String, controls: ScreenControls) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let login = controls.login;
    let inputs_enabled = controls.inputs_enabled;

    rsx! {
        div {
            class: "bg-white rounded-xl p-8 shadow-sm border border-gray-200",

            div {
                class: "mb-8 pb-6 border-b border-gray-100",
                h2 {
                    class: "text-2xl font-medium text-slate-800 mb-2",
                    "Log In"
                }
                p {
                    class: "text-sm text-slate-500",
                    "Pick a username and the address of a node already on the network"
                }
            }

            div {
                class: "flex flex-col gap-5 mb-8",

                div {
                    label { class: LABEL_CLASS, "Username" }
                    input {
                        class: INPUT_CLASS,
                        r#type: "text",
                        placeholder: "alice",
                        value: "{username}",
                        disabled: !inputs_enabled,
                        oninput: move |evt| intents.send(UserIntent::EditLoginUsername(evt.value())),
                    }
                }

                div {
                    label { class: LABEL_CLASS, "Bootstrap Address" }
                    input {
                        class: INPUT_CLASS,
                        r#type: "text",
                        placeholder: "192.168.1.100:5000",
                        value: "{bootstrap}",
                        disabled: !inputs_enabled,
                        oninput: move |evt| intents.send(UserIntent::EditLoginBootstrap(evt.value())),
                        onkeypress: move |evt| {
                            if evt.key() == dioxus::events::Key::Enter && login.enabled {
                                intents.send(UserIntent::Login);
                            }
                        }
                    }
                }
            }

            button {
                class: format!("w-full {}", login.class()),
                disabled: !login.enabled,
                onclick: move |_| if login.enabled { intents.send(UserIntent::Login) },
                if login.enabled { "Log In" } else { "Logging in..." }
            }
        }
    }
}
