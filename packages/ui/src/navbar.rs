use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLeaf;
use dioxus_free_icons::Icon;

use crate::session::{use_session, LogoutButton};

/// Top bar. The platform crate passes its router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar flex items-center gap-6 px-6 py-3 border-b border-neutral-200 bg-white",
            span {
                class: "flex items-center gap-2 font-bold text-green-800",
                Icon { icon: FaLeaf, width: 18, height: 18 }
                "AgroMarFeed"
            }
            nav {
                class: "flex flex-1 items-center gap-4 text-sm",
                {children}
            }
        }
    }
}

/// Greeting plus logout for a signed-in user, a login button otherwise.
#[component]
pub fn UserMenu(on_login: EventHandler<()>) -> Element {
    let context = use_session();
    let session = context.get();

    if session.loading {
        return rsx! {
            span { class: "skeleton h-4 w-20 rounded" }
        };
    }

    match session.user {
        Some(user) => rsx! {
            span {
                class: "flex items-center gap-3 text-sm",
                span { class: "text-neutral-700", "Halo, {user.display_name()}" }
                LogoutButton { class: "btn btn-outline" }
            }
        },
        None => rsx! {
            span {
                class: "flex items-center gap-3 text-sm",
                if session.retryable {
                    button {
                        class: "text-xs text-neutral-500 underline",
                        title: session.error.clone().unwrap_or_default(),
                        onclick: move |_| context.refetch(),
                        "Muat ulang sesi"
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_login.call(()),
                    "Masuk"
                }
            }
        },
    }
}
