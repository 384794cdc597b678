//! Landing page: the special-offer block, best sellers and the latest articles.

use dioxus::prelude::*;
use shop::catalog::{best_sellers, special_offer};
use shop::SpecialOffer;
use ui::components::{ArticleCard, EmptyState, ErrorState, ProductCard, SkeletonGrid};
use ui::use_api;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let nav = use_navigator();

    let products_api = api.clone();
    let mut products = use_resource(move || {
        let api = products_api.clone();
        async move { api.products(None).await }
    });
    let articles = use_resource(move || {
        let api = api.clone();
        async move { api.articles().await }
    });

    // Sampled once per fetched catalog, not on every render.
    let offer = use_memo(move || {
        products
            .read()
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .map(|list| special_offer(list, &mut rand::thread_rng()))
    });

    let catalog = match &*products.read() {
        None => rsx! { SkeletonGrid { count: 4 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat produk: {e}",
                on_retry: move |_| products.restart(),
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { title: "Belum ada produk" }
        },
        Some(Ok(list)) => {
            let sellers: Vec<_> = best_sellers(list, None).into_iter().take(8).cloned().collect();
            let offer_block = match offer() {
                Some(SpecialOffer::Ready(items)) => rsx! {
                    div {
                        class: "grid grid-cols-2 gap-4",
                        for item in items {
                            ProductCard {
                                key: "{item.product.id}",
                                product: item.product.clone(),
                                discounted: item.discounted_price,
                                onclick: move |id| {
                                    nav.push(Route::ProductDetail { id });
                                },
                            }
                        }
                    }
                },
                _ => rsx! {
                    p { class: "text-sm text-neutral-600", "Belum ada penawaran spesial saat ini." }
                },
            };
            rsx! {
                section {
                    class: "flex flex-col gap-4 mb-10",
                    h2 { class: "text-xl font-semibold", "Penawaran Spesial" }
                    p { class: "text-sm text-neutral-600", "Diskon 25% untuk produk pilihan." }
                    {offer_block}
                }
                section {
                    class: "flex flex-col gap-4 mb-10",
                    h2 { class: "text-xl font-semibold", "Produk Terlaris" }
                    if sellers.is_empty() {
                        p { class: "text-sm text-neutral-600", "Belum ada produk terlaris." }
                    }
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
    };

    let latest = match &*articles.read() {
        Some(Ok(list)) if !list.is_empty() => rsx! {
            section {
                class: "flex flex-col gap-4",
                h2 { class: "text-xl font-semibold", "Artikel Terbaru" }
                div {
                    class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                    for article in list.iter().take(3).cloned() {
                        ArticleCard {
                            key: "{article.id}",
                            article: article.clone(),
                            onclick: move |id| {
                                nav.push(Route::ArticleDetail { id });
                            },
                        }
                    }
                }
            }
        },
        _ => rsx! {},
    };

    rsx! {
        section {
            class: "flex flex-col gap-2 py-10",
            h1 { class: "text-3xl font-bold text-green-800", "Pakan berkualitas untuk peternak Indonesia" }
            p { class: "text-neutral-600", "Pakan ternak dan ikan, artikel budidaya, dan konsultasi dengan ahli." }
            div {
                class: "flex gap-3 mt-4",
                Link { class: "btn btn-primary", to: Route::Products {}, "Belanja sekarang" }
                Link { class: "btn btn-outline", to: Route::KonsultanList {}, "Konsultasi" }
            }
        }
        {catalog}
        {latest}
    }
}
