use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleExclamation, FaCircleQuestion, FaCircleXmark, FaClock,
};
use dioxus_free_icons::Icon;
use shop::StatusView;

/// The body of a payment or appointment result page.
///
/// `polling` is true while more automatic attempts are coming. Once it is false the
/// pending and error states offer `on_refresh` to start over. `on_retry` books again.
#[component]
pub fn StatusPanel(
    order_id: String,
    view: StatusView,
    polling: bool,
    on_browse: EventHandler<()>,
    on_orders: EventHandler<()>,
    on_retry: EventHandler<()>,
    on_refresh: EventHandler<()>,
) -> Element {
    let body = match view {
        StatusView::Loading => rsx! {
            div { class: "spinner" }
            p { class: "text-neutral-600", "Memeriksa status pembayaran..." }
        },
        StatusView::NotFound => rsx! {
            Icon { icon: FaCircleQuestion, width: 48, height: 48, fill: "#a3a3a3" }
            h2 { class: "text-lg font-semibold", "Pesanan tidak ditemukan" }
            p { class: "text-sm text-neutral-600", "Periksa kembali nomor pesanan Anda." }
            button { class: "btn btn-primary", onclick: move |_| on_browse.call(()), "Kembali belanja" }
        },
        StatusView::Success => rsx! {
            Icon { icon: FaCircleCheck, width: 48, height: 48, fill: "#15803d" }
            h2 { class: "text-lg font-semibold", "Pembayaran berhasil" }
            p { class: "text-sm text-neutral-600", "Terima kasih, pesanan Anda sedang diproses." }
            div {
                class: "flex gap-3",
                button { class: "btn btn-primary", onclick: move |_| on_browse.call(()), "Lanjut belanja" }
                button { class: "btn btn-outline", onclick: move |_| on_orders.call(()), "Lihat pesanan" }
            }
        },
        StatusView::Pending { redirect_url } => rsx! {
            Icon { icon: FaClock, width: 48, height: 48, fill: "#d97706" }
            h2 { class: "text-lg font-semibold", "Menunggu pembayaran" }
            p {
                class: "text-sm text-neutral-600",
                if polling {
                    "Kami akan memperbarui halaman ini setelah pembayaran diterima."
                } else {
                    "Pembayaran belum kami terima."
                }
            }
            if let Some(url) = redirect_url {
                a { class: "btn btn-primary", href: "{url}", "Lanjutkan pembayaran" }
            }
            div {
                class: "flex gap-3",
                if !polling {
                    button { class: "btn btn-outline", onclick: move |_| on_refresh.call(()), "Periksa lagi" }
                }
                button { class: "btn btn-outline", onclick: move |_| on_orders.call(()), "Lihat pesanan" }
            }
        },
        StatusView::Failed => rsx! {
            Icon { icon: FaCircleXmark, width: 48, height: 48, fill: "#dc2626" }
            h2 { class: "text-lg font-semibold", "Pembayaran gagal" }
            p { class: "text-sm text-neutral-600", "Pesanan dibatalkan atau pembayaran ditolak." }
            button { class: "btn btn-primary", onclick: move |_| on_retry.call(()), "Coba pesan lagi" }
        },
        StatusView::Other(status) => rsx! {
            Icon { icon: FaCircleQuestion, width: 48, height: 48, fill: "#525252" }
            h2 { class: "text-lg font-semibold", "Status: {status}" }
            button { class: "btn btn-outline", onclick: move |_| on_orders.call(()), "Lihat pesanan" }
        },
        StatusView::Error(message) => rsx! {
            Icon { icon: FaCircleExclamation, width: 48, height: 48, fill: "#dc2626" }
            h2 { class: "text-lg font-semibold", "Terjadi kesalahan" }
            p { class: "text-sm text-neutral-600", "{message}" }
            if polling {
                p { class: "text-xs text-neutral-500", "Mencoba lagi..." }
            } else {
                button { class: "btn btn-outline", onclick: move |_| on_refresh.call(()), "Coba lagi" }
            }
        },
    };

    rsx! {
        section {
            class: "status-panel flex flex-col items-center gap-4 py-16 text-center",
            if !order_id.is_empty() {
                span { class: "text-xs text-neutral-500", "No. pesanan {order_id}" }
            }
            {body}
        }
    }
}
