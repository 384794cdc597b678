use dioxus::prelude::*;

/// Grey placeholder cards shown while a collection loads.
#[component]
pub fn SkeletonGrid(#[props(default = 8)] count: usize) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-4 gap-4",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "skeleton rounded-lg h-64",
                }
            }
        }
    }
}

/// Shown for an empty collection.
#[component]
pub fn EmptyState(title: String, #[props(default)] message: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16 text-neutral-600",
            h2 { class: "m-0 mb-2 font-semibold text-neutral-800 text-lg", "{title}" }
            if let Some(message) = message {
                p { class: "m-0 text-sm", "{message}" }
            }
        }
    }
}

/// Failed fetch, with a manual reload.
#[component]
pub fn ErrorState(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-16 gap-3",
            p { class: "m-0 text-red-600 text-sm", "{message}" }
            button {
                class: "btn btn-outline",
                onclick: move |_| on_retry.call(()),
                "Muat ulang"
            }
        }
    }
}
