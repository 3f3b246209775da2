use dioxus::prelude::*;

use crate::components::screen_controls::ScreenControls;
use crate::state::DeviceMap;
use crate::store::UserIntent;

const SELECT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-md text-sm bg-white text-gray-700 box-border cursor-pointer";

#[component]
pub fn DeviceSelectionScreen(
    input_devices: DeviceMap,
    output_devices: DeviceMap,
    selected_input: Option<String>,
    selected_output: Option<String>,
    controls: ScreenControls,
) -> Element {
    let intents = use_coroutine_handle::<UserIntent>();
    let confirm = controls.confirm_devices;
    let inputs_enabled = controls.inputs_enabled;
    let selected_input = selected_input.unwrap_or_default();
    let selected_output = selected_output.unwrap_or_default();

    rsx! {
        div {
            class: "bg-white rounded-xl p-8 shadow-sm border border-gray-200",

            h2 {
                class: "text-2xl font-medium text-slate-800 mb-6",
                "Audio Devices"
            }

            div {
                class: "flex flex-col gap-5 mb-8",

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Microphone" }
                    if input_devices.is_empty() {
                        p { class: "text-sm text-red-600", "No input devices available" }
                    } else {
                        select {
                            class: SELECT_CLASS,
                            value: "{selected_input}",
                            disabled: !inputs_enabled,
                            onchange: move |evt| intents.send(UserIntent::SelectInputDevice(evt.value())),
                            for device in input_devices.iter() {
                                option {
                                    key: "{device.id}",
                                    value: "{device.id}",
                                    selected: device.id == selected_input,
                                    "{device.label}"
                                }
                            }
                        }
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Speaker" }
                    if output_devices.is_empty() {
                        p { class: "text-sm text-red-600", "No output devices available" }
                    } else {
                        select {
                            class: SELECT_CLASS,
                            value: "{selected_output}",
                            disabled: !inputs_enabled,
                            onchange: move |evt| intents.send(UserIntent::SelectOutputDevice(evt.value())),
                            for device in output_devices.iter() {
                                option {
                                    key: "{device.id}",
                                    value: "{device.id}",
                                    selected: device.id == selected_output,
                                    "{device.label}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: format!("w-full {}", confirm.class()),
                disabled: !confirm.enabled,
                onclick: move |_| if confirm.enabled { intents.send(UserIntent::ConfirmDevices) },
                "Continue"
            }
        }
    }
}
