use dioxus::prelude::*;

#[component]
pub fn WorkingScreen(message: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl p-8 shadow-sm border border-gray-200 text-center",
            div {
                class: "flex items-center justify-center gap-3",
                span { class: "w-2 h-2 bg-amber-500 rounded-full animate-pulse" }
                span {
                    class: "text-lg text-gray-700",
                    "{message}"
                }
            }
        }
    }
}
