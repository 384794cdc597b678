use dioxus::prelude::*;
use shop::catalog::{browse, facet_values};
use shop::{CatalogFilter, SortOrder};
use ui::components::{EmptyState, ErrorState, ProductCard, SkeletonGrid};
use ui::use_api;

use crate::Route;

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

fn price(value: String) -> Option<f64> {
    value.trim().parse().ok()
}

/// Product list with search, facet filters and sorting.
#[component]
pub fn Products() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut products = use_resource(move || {
        let api = api.clone();
        async move { api.products(None).await }
    });

    let mut filter = use_signal(CatalogFilter::default);
    let mut order = use_signal(SortOrder::default);

    let body = match &*products.read() {
        None => rsx! { SkeletonGrid {} },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat produk: {e}",
                on_retry: move |_| products.restart(),
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { title: "Belum ada produk", message: "Produk akan segera tersedia." }
        },
        Some(Ok(list)) => {
            let categories = facet_values(list, |p| p.category.as_ref());
            let materials = facet_values(list, |p| p.material.as_ref());
            let forms = facet_values(list, |p| p.physical_form.as_ref());
            let shown: Vec<_> = browse(list, &filter.read(), order())
                .into_iter()
                .cloned()
                .collect();

            rsx! {
                div {
                    class: "flex flex-wrap gap-3 mb-6",
                    input {
                        class: "field max-w-xs",
                        r#type: "search",
                        placeholder: "Cari produk...",
                        value: "{filter.read().search}",
                        oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                    }
                    FacetSelect {
                        label: "Semua kategori",
                        options: categories,
                        onchange: move |v| filter.write().category = optional(v),
                    }
                    FacetSelect {
                        label: "Semua bahan",
                        options: materials,
                        onchange: move |v| filter.write().material = optional(v),
                    }
                    FacetSelect {
                        label: "Semua bentuk",
                        options: forms,
                        onchange: move |v| filter.write().physical_form = optional(v),
                    }
                    input {
                        class: "field w-32",
                        r#type: "number",
                        placeholder: "Harga min",
                        oninput: move |evt: FormEvent| filter.write().min_price = price(evt.value()),
                    }
                    input {
                        class: "field w-32",
                        r#type: "number",
                        placeholder: "Harga maks",
                        oninput: move |evt: FormEvent| filter.write().max_price = price(evt.value()),
                    }
                    select {
                        class: "field w-44",
                        onchange: move |evt: FormEvent| {
                            order.set(evt.value().parse().unwrap_or_default());
                        },
                        for o in SortOrder::ALL {
                            option { value: "{o}", selected: o == order(), "{o.label()}" }
                        }
                    }
                }
                if shown.is_empty() {
                    EmptyState {
                        title: "Tidak ada produk yang cocok",
                        message: "Coba ubah kata kunci atau filter.",
                    }
                } else {
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                        for product in shown {
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

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Produk" }
        {body}
    }
}

#[component]
fn FacetSelect(label: String, options: Vec<String>, onchange: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "field w-44",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", "{label}" }
            for value in options {
                option { key: "{value}", value: "{value}", "{value}" }
            }
        }
    }
}
