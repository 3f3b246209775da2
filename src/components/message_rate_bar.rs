use dioxus::prelude::*;

#[component]
pub fn MessageRateBar(incoming: u32, outgoing: u32) -> Element {
    rsx! {
        div {
            class: "bg-gray-50 rounded-xl px-6 py-4 border border-gray-200",
            div {
                class: "flex items-center justify-between text-sm text-gray-600",
                span { "In: {incoming} msg/s" }
                span { "Out: {outgoing} msg/s" }
            }
        }
    }
}
