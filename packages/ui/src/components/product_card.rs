use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;
use shop::catalog::format_rupiah;
use shop::Product;

/// Price label; a discounted price strikes through the original.
#[component]
pub fn PriceTag(price: f64, #[props(default)] discounted: Option<f64>) -> Element {
    match discounted {
        Some(discounted) => rsx! {
            span {
                class: "flex items-baseline gap-2",
                span { class: "font-semibold text-green-700", "{format_rupiah(discounted)}" }
                span { class: "text-xs text-neutral-500 line-through", "{format_rupiah(price)}" }
            }
        },
        None => rsx! {
            span { class: "font-semibold text-green-700", "{format_rupiah(price)}" }
        },
    }
}

#[component]
pub fn ProductCard(
    product: Product,
    #[props(default)] discounted: Option<f64>,
    onclick: EventHandler<String>,
) -> Element {
    let id = product.id.clone();
    let image = product.image_url.clone().unwrap_or_default();
    let rating = format!("{:.1}", product.rating);

    rsx! {
        div {
            class: "product-card flex flex-col rounded-lg border border-neutral-200 bg-white cursor-pointer overflow-hidden",
            onclick: move |_| onclick.call(id.clone()),
            if !image.is_empty() {
                img { class: "h-40 w-full object-cover", src: "{image}", alt: "{product.name}" }
            } else {
                div { class: "h-40 w-full bg-neutral-100" }
            }
            div {
                class: "flex flex-col gap-1 p-3",
                h3 { class: "m-0 text-sm font-medium text-neutral-800", "{product.name}" }
                PriceTag { price: product.price, discounted }
                span {
                    class: "flex items-center gap-1 text-xs text-neutral-600",
                    Icon { icon: FaStar, width: 12, height: 12, fill: "#f59e0b" }
                    "{rating}"
                    if !product.in_stock() {
                        span { class: "ml-2 text-red-600", "Stok habis" }
                    }
                }
            }
        }
    }
}
