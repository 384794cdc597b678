use api::{ApiError, CartAddRequest, WishlistAddRequest};
use dioxus::prelude::*;
use shop::catalog::best_sellers;
use ui::components::{ErrorState, PriceTag, ProductCard, SkeletonGrid};
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn ProductDetail(id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let product_api = api.clone();
    let mut product = use_resource(use_reactive!(|id| {
        let api = product_api.clone();
        async move { api.product(&id).await }
    }));
    let list_api = api.clone();
    let catalog = use_resource(move || {
        let api = list_api.clone();
        async move { api.products(None).await }
    });

    let mut weight = use_signal(|| Option::<String>::None);
    let mut quantity = use_signal(|| 1u32);
    let mut notice = use_signal(|| Option::<String>::None);

    let add_to_cart = {
        let api = api.clone();
        let session = session.clone();
        move |product_id: String| {
            let api = api.clone();
            let user_id = session.get().user_id().map(str::to_string);
            async move {
                let Some(user_id) = user_id else {
                    nav.push(Route::Login {});
                    return;
                };
                let request = CartAddRequest {
                    user_id,
                    product_id,
                    quantity: quantity(),
                    weight: weight(),
                };
                match api.add_to_cart(&request).await {
                    Ok(()) => notice.set(Some("Ditambahkan ke keranjang".into())),
                    Err(e) => notice.set(Some(format!("Gagal menambahkan: {e}"))),
                }
            }
        }
    };

    let add_to_wishlist = {
        let api = api.clone();
        move |product_id: String| {
            let api = api.clone();
            let user_id = session.get().user_id().map(str::to_string);
            async move {
                let Some(user_id) = user_id else {
                    nav.push(Route::Login {});
                    return;
                };
                let request = WishlistAddRequest { user_id, product_id };
                match api.add_to_wishlist(&request).await {
                    Ok(()) => notice.set(Some("Disimpan ke wishlist".into())),
                    Err(e) => notice.set(Some(format!("Gagal menyimpan: {e}"))),
                }
            }
        }
    };

    let detail = match &*product.read() {
        None => rsx! { div { class: "skeleton h-96 rounded-lg" } },
        Some(Err(ApiError::NotFound)) => rsx! {
            div {
                class: "flex flex-col items-center gap-3 py-16",
                h2 { class: "text-lg font-semibold", "Produk tidak ditemukan" }
                Link { class: "btn btn-outline", to: Route::Products {}, "Lihat produk lain" }
            }
        },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat produk: {e}",
                on_retry: move |_| product.restart(),
            }
        },
        Some(Ok(p)) => {
            let selected = weight();
            let unit_price = p.price_for(selected.as_deref());
            let in_stock = p.in_stock();
            let cart_id = p.id.clone();
            let wish_id = p.id.clone();
            let add_to_cart = add_to_cart.clone();
            let add_to_wishlist = add_to_wishlist.clone();

            rsx! {
                div {
                    class: "grid md:grid-cols-2 gap-8",
                    if let Some(src) = p.image_url.clone() {
                        img { class: "w-full rounded-lg object-cover", src: "{src}", alt: "{p.name}" }
                    } else {
                        div { class: "w-full h-80 rounded-lg bg-neutral-100" }
                    }
                    div {
                        class: "flex flex-col gap-4",
                        h1 { class: "text-2xl font-bold", "{p.name}" }
                        PriceTag { price: unit_price }
                        if !p.weights.is_empty() {
                            div {
                                class: "flex flex-wrap gap-2",
                                for w in p.weights.clone() {
                                    button {
                                        key: "{w.id}",
                                        class: if selected.as_deref() == Some(w.id.as_str()) { "btn btn-primary" } else { "btn btn-outline" },
                                        onclick: move |_| weight.set(Some(w.id.clone())),
                                        "{w.label}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "flex items-center gap-2",
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| quantity.set(quantity().saturating_sub(1).max(1)),
                                "-"
                            }
                            span { class: "w-8 text-center", "{quantity}" }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| quantity.set(quantity() + 1),
                                "+"
                            }
                        }
                        div {
                            class: "flex gap-3",
                            button {
                                class: "btn btn-primary",
                                disabled: !in_stock,
                                onclick: move |_| add_to_cart(cart_id.clone()),
                                if in_stock { "Tambah ke keranjang" } else { "Stok habis" }
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| add_to_wishlist(wish_id.clone()),
                                "Wishlist"
                            }
                        }
                        if let Some(msg) = notice() {
                            p { class: "text-sm text-green-700", "{msg}" }
                        }
                        p { class: "text-sm text-neutral-700 whitespace-pre-line", "{p.description}" }
                    }
                }
            }
        }
    };

    let rail = match &*catalog.read() {
        None => rsx! { SkeletonGrid { count: 4 } },
        Some(Ok(list)) => {
            let sellers: Vec<_> = best_sellers(list, Some(id.as_str()))
                .into_iter()
                .take(4)
                .cloned()
                .collect();
            rsx! {
                if !sellers.is_empty() {
                    h2 { class: "text-xl font-semibold mt-10 mb-4", "Produk Terlaris" }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for product in sellers {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                onclick: move |id| {
                                    nav.push(Route::ProductDetail { id });
                                },
                            }
                        }
                    }
                }
            }
        }
        // The rail is optional; the main product already reports its own errors.
        Some(Err(_)) => rsx! {},
    };

    rsx! {
        {detail}
        {rail}
    }
}
