use api::{CartUpdateRequest, CheckoutRequest, ShippingCostRequest};
use dioxus::prelude::*;
use shop::catalog::format_rupiah;
use shop::models::{CartItem, OrderItem, ShippingAddress, ShippingCost};
use ui::components::{EmptyState, ErrorState, ProductCard, SkeletonGrid};
use ui::icons::FaTrashCan;
use ui::{hard_navigate, use_api, Icon};

use super::use_signed_in;
use crate::Route;

const COURIERS: [&str; 3] = ["jne", "pos", "tiki"];
/// Assumed parcel weight per item, in grams, for shipping quotes.
const GRAMS_PER_ITEM: u32 = 1000;

#[component]
pub fn Cart() -> Element {
    let api = use_api();
    let session = use_signed_in();
    let user_id = session.user_id().map(str::to_string);

    let cart_api = api.clone();
    let mut cart = use_resource(use_reactive!(|user_id| {
        let api = cart_api.clone();
        async move {
            match user_id {
                Some(id) => api.cart(&id).await.map(Some),
                None => Ok(None),
            }
        }
    }));

    let change_quantity = {
        let api = api.clone();
        let user_id = user_id.clone().unwrap_or_default();
        move |(item_id, quantity): (String, u32)| {
            let api = api.clone();
            let user_id = user_id.clone();
            async move {
                let result = if quantity == 0 {
                    api.remove_from_cart(&item_id).await
                } else {
                    let request = CartUpdateRequest { user_id, item_id, quantity };
                    api.update_cart(&request).await
                };
                if let Err(e) = result {
                    tracing::warn!("Cart update failed: {}", e);
                }
                cart.restart();
            }
        }
    };

    let body = match &*cart.read() {
        None | Some(Ok(None)) => rsx! { SkeletonGrid { count: 3 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat keranjang: {e}",
                on_retry: move |_| cart.restart(),
            }
        },
        Some(Ok(Some(items))) if items.is_empty() => rsx! {
            EmptyState { title: "Keranjang masih kosong", message: "Yuk, mulai belanja pakan." }
            div {
                class: "flex justify-center",
                Link { class: "btn btn-primary", to: Route::Products {}, "Lihat produk" }
            }
        },
        Some(Ok(Some(items))) => {
            let subtotal: f64 = items.iter().map(CartItem::subtotal).sum();
            rsx! {
                div {
                    class: "grid md:grid-cols-3 gap-8",
                    div {
                        class: "md:col-span-2 flex flex-col gap-3",
                        for item in items.clone() {
                            CartRow {
                                key: "{item.id}",
                                item: item.clone(),
                                onchange: change_quantity.clone(),
                            }
                        }
                    }
                    Checkout {
                        items: items.clone(),
                        subtotal,
                        user_id: user_id.clone().unwrap_or_default(),
                        customer_name: session.user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default(),
                        customer_email: session.user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
                    }
                }
            }
        }
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Keranjang" }
        {body}
    }
}

#[component]
fn CartRow(item: CartItem, onchange: EventHandler<(String, u32)>) -> Element {
    let quantity = item.quantity;
    let (dec_id, inc_id, del_id) = (item.id.clone(), item.id.clone(), item.id.clone());

    rsx! {
        div {
            class: "flex items-center gap-4 p-3 rounded-lg border border-neutral-200 bg-white",
            div {
                class: "flex flex-1 flex-col",
                span { class: "font-medium", "{item.display_name()}" }
                if let Some(weight) = item.weight.clone() {
                    span { class: "text-xs text-neutral-500", "{weight}" }
                }
                span { class: "text-sm text-green-700", "{format_rupiah(item.price)}" }
            }
            div {
                class: "flex items-center gap-2",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| onchange.call((dec_id.clone(), quantity.saturating_sub(1))),
                    "-"
                }
                span { class: "w-8 text-center", "{quantity}" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| onchange.call((inc_id.clone(), quantity + 1)),
                    "+"
                }
            }
            span { class: "w-28 text-right font-semibold", "{format_rupiah(item.subtotal())}" }
            button {
                class: "btn btn-outline",
                onclick: move |_| onchange.call((del_id.clone(), 0)),
                Icon { icon: FaTrashCan, width: 14, height: 14 }
            }
        }
    }
}

/// Shipping address, courier quote and the hand-off to the payment gateway.
#[component]
fn Checkout(
    items: Vec<CartItem>,
    subtotal: f64,
    user_id: String,
    customer_name: String,
    customer_email: String,
) -> Element {
    let api = use_api();
    let nav = use_navigator();

    let mut recipient = use_signal(|| customer_name.clone());
    let mut phone = use_signal(String::new);
    let mut street = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut province = use_signal(|| Option::<(String, String)>::None);
    let mut city = use_signal(|| Option::<(String, String)>::None);
    let mut courier = use_signal(|| COURIERS[0].to_string());
    let mut quote = use_signal(|| Option::<ShippingCost>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let provinces_api = api.clone();
    let provinces = use_resource(move || {
        let api = provinces_api.clone();
        async move { api.provinces().await }
    });
    let cities_api = api.clone();
    let cities = use_resource(move || {
        let api = cities_api.clone();
        let province_id = province().map(|(id, _)| id);
        async move {
            match province_id {
                Some(id) => api.cities(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let parcel_weight = items.iter().map(|i| i.quantity).sum::<u32>().max(1) * GRAMS_PER_ITEM;
    let quotes_api = api.clone();
    let quotes = use_resource(move || {
        let api = quotes_api.clone();
        let destination = city().map(|(id, _)| id);
        let courier = courier();
        async move {
            match destination {
                Some(destination) => {
                    let request = ShippingCostRequest {
                        destination,
                        weight: parcel_weight,
                        courier,
                    };
                    api.shipping_cost(&request).await
                }
                None => Ok(Vec::new()),
            }
        }
    });

    let shipping_cost = quote().map(|q| q.cost).unwrap_or(0.0);
    let total = subtotal + shipping_cost;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let items = items.clone();
        let (user_id, customer_name, customer_email) =
            (user_id.clone(), customer_name.clone(), customer_email.clone());
        async move {
            let (Some((_, province_name)), Some((_, city_name)), Some(_)) = (province(), city(), quote()) else {
                error.set(Some("Lengkapi alamat dan pilih layanan pengiriman".into()));
                return;
            };
            if recipient().trim().is_empty() || phone().trim().is_empty() || street().trim().is_empty() {
                error.set(Some("Nama, telepon, dan alamat wajib diisi".into()));
                return;
            }

            submitting.set(true);
            error.set(None);
            let request = CheckoutRequest {
                user_id,
                items: items
                    .iter()
                    .map(|i| OrderItem {
                        product_id: i.product_id.clone(),
                        name: i.display_name().to_string(),
                        quantity: i.quantity,
                        weight: i.weight.clone(),
                        price: i.price,
                    })
                    .collect(),
                shipping_address: ShippingAddress {
                    recipient_name: recipient(),
                    phone: phone(),
                    address: street(),
                    city: city_name,
                    province: province_name,
                    postal_code: postal_code(),
                },
                shipping_cost,
                total_amount: total,
                customer_name,
                customer_email,
            };

            match api.create_payment(&request).await {
                Ok(payment) => match payment.redirect_url {
                    Some(url) => hard_navigate(&url),
                    None => {
                        nav.push(Route::PaymentPending {
                            order_id: payment.order_id,
                        });
                    }
                },
                Err(e) => {
                    tracing::warn!("Checkout failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        }
    };

    let province_options = match &*provinces.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let city_options = match &*cities.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let province_names = province_options.clone();
    let city_names = city_options.clone();
    let quote_options = match &*quotes.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        form {
            class: "flex flex-col gap-3 p-4 rounded-lg border border-neutral-200 bg-white",
            onsubmit: submit,
            h2 { class: "text-lg font-semibold", "Pengiriman" }
            input {
                class: "field",
                placeholder: "Nama penerima",
                value: "{recipient}",
                oninput: move |evt: FormEvent| recipient.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "tel",
                placeholder: "No. telepon",
                value: "{phone}",
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            textarea {
                class: "field",
                placeholder: "Alamat lengkap",
                value: "{street}",
                oninput: move |evt: FormEvent| street.set(evt.value()),
            }
            select {
                class: "field",
                onchange: move |evt: FormEvent| {
                    let id = evt.value();
                    let picked = province_names
                        .iter()
                        .find(|p| p.id == id)
                        .map(|p| (p.id.clone(), p.name.clone()));
                    province.set(picked);
                    city.set(None);
                    quote.set(None);
                },
                option { value: "", "Pilih provinsi" }
                for p in province_options {
                    option { key: "{p.id}", value: "{p.id}", "{p.name}" }
                }
            }
            select {
                class: "field",
                disabled: province().is_none(),
                onchange: move |evt: FormEvent| {
                    let id = evt.value();
                    let picked = city_names
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| (c.id.clone(), c.name.clone()));
                    city.set(picked);
                    quote.set(None);
                },
                option { value: "", "Pilih kota" }
                for c in city_options {
                    option { key: "{c.id}", value: "{c.id}", "{c.name}" }
                }
            }
            input {
                class: "field",
                placeholder: "Kode pos",
                value: "{postal_code}",
                oninput: move |evt: FormEvent| postal_code.set(evt.value()),
            }
            select {
                class: "field",
                onchange: move |evt: FormEvent| {
                    courier.set(evt.value());
                    quote.set(None);
                },
                for c in COURIERS {
                    option { value: "{c}", "{c.to_uppercase()}" }
                }
            }
            for (i, q) in quote_options.into_iter().enumerate() {
                label {
                    key: "{i}",
                    class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "radio",
                        name: "shipping",
                        onchange: {
                            let q = q.clone();
                            move |_| quote.set(Some(q.clone()))
                        },
                    }
                    "{q.service} · {format_rupiah(q.cost)}"
                    if let Some(etd) = q.etd.clone() {
                        span { class: "text-neutral-500", "({etd} hari)" }
                    }
                }
            }
            div {
                class: "flex flex-col gap-1 pt-3 border-t border-neutral-200 text-sm",
                span { "Subtotal: {format_rupiah(subtotal)}" }
                span { "Ongkir: {format_rupiah(shipping_cost)}" }
                span { class: "text-base font-semibold", "Total: {format_rupiah(total)}" }
            }
            if let Some(err) = error() {
                p { class: "text-sm text-red-600", "{err}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Memproses..." } else { "Bayar sekarang" }
            }
        }
    }
}

#[component]
pub fn Wishlist() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let session = use_signed_in();
    let user_id = session.user_id().map(str::to_string);

    let list_api = api.clone();
    let mut wishlist = use_resource(use_reactive!(|user_id| {
        let api = list_api.clone();
        async move {
            match user_id {
                Some(id) => api.wishlist(&id).await.map(Some),
                None => Ok(None),
            }
        }
    }));

    let remove = move |product_id: String| {
        let api = api.clone();
        async move {
            if let Err(e) = api.remove_from_wishlist(&product_id).await {
                tracing::warn!("Wishlist removal failed: {}", e);
            }
            wishlist.restart();
        }
    };

    let body = match &*wishlist.read() {
        None | Some(Ok(None)) => rsx! { SkeletonGrid { count: 4 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat wishlist: {e}",
                on_retry: move |_| wishlist.restart(),
            }
        },
        Some(Ok(Some(items))) if items.is_empty() => rsx! {
            EmptyState { title: "Wishlist masih kosong" }
        },
        Some(Ok(Some(items))) => rsx! {
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                for item in items.clone() {
                    div {
                        key: "{item.id}",
                        class: "flex flex-col gap-2",
                        if let Some(product) = item.product.clone() {
                            ProductCard {
                                product: product.clone(),
                                onclick: move |id| {
                                    nav.push(Route::ProductDetail { id });
                                },
                            }
                        } else {
                            span { class: "text-sm text-neutral-600", "{item.product_id}" }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: {
                                let remove = remove.clone();
                                let product_id = item.product_id.clone();
                                move |_| remove(product_id.clone())
                            },
                            "Hapus"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Wishlist" }
        {body}
    }
}
