use dioxus::prelude::*;
use ui::icons::{FaCartShopping, FaHeart};
use ui::{Icon, Navbar, UserMenu};

use crate::Route;

/// Layout shared by every storefront page.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Beranda" }
            Link { to: Route::Products {}, "Produk" }
            Link { to: Route::Articles {}, "Artikel" }
            Link { to: Route::KonsultanList {}, "Konsultan" }
            span { class: "flex-1" }
            Link {
                to: Route::Wishlist {},
                Icon { icon: FaHeart, width: 16, height: 16 }
            }
            Link {
                to: Route::Cart {},
                Icon { icon: FaCartShopping, width: 16, height: 16 }
            }
            UserMenu {
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
        main {
            Outlet::<Route> {}
        }
        footer { "© AgroMarFeed. Pakan ternak dan ikan berkualitas." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-3",
            h1 { class: "text-2xl font-bold text-neutral-800", "Halaman tidak ditemukan" }
            p { class: "text-sm text-neutral-600", "/{path}" }
            Link { class: "btn btn-primary", to: Route::Home {}, "Kembali ke beranda" }
        }
    }
}
