use dioxus::prelude::*;
use shop::catalog::format_rupiah;
use shop::{Order, Resolution, StatusSnapshot};
use ui::components::{EmptyState, ErrorState, SkeletonGrid};
use ui::use_api;

use super::use_signed_in;
use crate::Route;

fn badge(order: &Order) -> (&'static str, String) {
    let snapshot = StatusSnapshot::from(order.clone());
    match snapshot.resolve() {
        Resolution::Success => ("text-green-700", "Dibayar".to_string()),
        Resolution::Pending | Resolution::Inconclusive => {
            ("text-amber-600", "Menunggu pembayaran".to_string())
        }
        Resolution::Failed => ("text-red-600", "Gagal".to_string()),
        Resolution::Other(value) => ("text-neutral-600", value),
    }
}

/// Order history of the signed-in user.
#[component]
pub fn Orders() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let session = use_signed_in();
    let user_id = session.user_id().map(str::to_string);

    let mut orders = use_resource(use_reactive!(|user_id| {
        let api = api.clone();
        async move {
            match user_id {
                Some(id) => api.orders(&id).await.map(Some),
                None => Ok(None),
            }
        }
    }));

    let body = match &*orders.read() {
        None | Some(Ok(None)) => rsx! { SkeletonGrid { count: 3 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat pesanan: {e}",
                on_retry: move |_| orders.restart(),
            }
        },
        Some(Ok(Some(list))) if list.is_empty() => rsx! {
            EmptyState { title: "Belum ada pesanan" }
        },
        Some(Ok(Some(list))) => rsx! {
            div {
                class: "flex flex-col gap-3",
                for order in list.clone() {
                    OrderRow {
                        key: "{order.id}",
                        order: order.clone(),
                        onclick: move |order_id| {
                            nav.push(Route::PaymentPending { order_id });
                        },
                    }
                }
            }
        },
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Pesanan Saya" }
        {body}
    }
}

#[component]
fn OrderRow(order: Order, onclick: EventHandler<String>) -> Element {
    let (color, label) = badge(&order);
    let order_id = if order.order_id.is_empty() {
        order.id.clone()
    } else {
        order.order_id.clone()
    };
    let created = order
        .created_at
        .as_deref()
        .map(|d| d.chars().take(10).collect::<String>())
        .unwrap_or_default();
    let target = order_id.clone();

    rsx! {
        div {
            class: "flex items-center gap-4 p-4 rounded-lg border border-neutral-200 bg-white cursor-pointer",
            onclick: move |_| onclick.call(target.clone()),
            div {
                class: "flex flex-1 flex-col",
                span { class: "font-medium", "{order_id}" }
                span { class: "text-xs text-neutral-500", "{created} · {order.items.len()} produk" }
            }
            span { class: "text-sm {color}", "{label}" }
            span { class: "w-32 text-right font-semibold", "{format_rupiah(order.total_amount)}" }
        }
    }
}
