//! Consultant directory and booking.

use api::{ApiError, AppointmentRequest};
use dioxus::prelude::*;
use shop::catalog::format_rupiah;
use shop::Konsultan;
use ui::components::{EmptyState, ErrorState, SkeletonGrid};
use ui::icons::FaStar;
use ui::{hard_navigate, use_api, use_session, Icon};

use crate::Route;

#[component]
fn KonsultanCard(konsultan: Konsultan, onclick: EventHandler<String>) -> Element {
    let id = konsultan.id.clone();
    let rating = format!("{:.1}", konsultan.rating);

    rsx! {
        div {
            class: "product-card flex gap-4 p-4 rounded-lg border border-neutral-200 bg-white cursor-pointer",
            onclick: move |_| onclick.call(id.clone()),
            if let Some(src) = konsultan.image_url.clone() {
                img { class: "h-20 w-20 rounded-full object-cover", src: "{src}", alt: "{konsultan.name}" }
            }
            div {
                class: "flex flex-col gap-1",
                h3 { class: "m-0 font-semibold", "{konsultan.name}" }
                span { class: "text-sm text-neutral-600", "{konsultan.profession}" }
                span {
                    class: "flex items-center gap-1 text-xs text-neutral-600",
                    Icon { icon: FaStar, width: 12, height: 12, fill: "#f59e0b" }
                    "{rating} · {konsultan.handled_cases} kasus"
                }
                span { class: "font-semibold text-green-700", "{format_rupiah(konsultan.price)}" }
            }
        }
    }
}

#[component]
pub fn KonsultanList() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut list = use_resource(move || {
        let api = api.clone();
        async move { api.konsultan_list().await }
    });

    let body = match &*list.read() {
        None => rsx! { SkeletonGrid { count: 4 } },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat konsultan: {e}",
                on_retry: move |_| list.restart(),
            }
        },
        Some(Ok(items)) => {
            let active: Vec<Konsultan> = items.iter().filter(|k| k.is_active).cloned().collect();
            if active.is_empty() {
                rsx! { EmptyState { title: "Belum ada konsultan tersedia" } }
            } else {
                rsx! {
                    div {
                        class: "grid md:grid-cols-2 gap-4",
                        for konsultan in active {
                            KonsultanCard {
                                key: "{konsultan.id}",
                                konsultan: konsultan.clone(),
                                onclick: move |id| {
                                    nav.push(Route::KonsultanDetail { id });
                                },
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Konsultasi dengan Ahli" }
        {body}
    }
}

#[component]
pub fn KonsultanDetail(id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let detail_api = api.clone();
    let mut konsultan = use_resource(use_reactive!(|id| {
        let api = detail_api.clone();
        async move { api.konsultan(&id).await }
    }));

    let mut date = use_signal(String::new);
    let mut slot = use_signal(|| Option::<String>::None);
    let mut booking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let book = move |k: Konsultan| {
        let api = api.clone();
        let user_id = session.get().user_id().map(str::to_string);
        async move {
            let Some(user_id) = user_id else {
                nav.push(Route::Login {});
                return;
            };
            let (Some(time), false) = (slot(), date().is_empty()) else {
                error.set(Some("Pilih tanggal dan jadwal terlebih dahulu".into()));
                return;
            };
            booking.set(true);
            error.set(None);
            let request = AppointmentRequest {
                user_id,
                konsultan_id: k.id.clone(),
                date: date(),
                time,
                total_amount: k.price,
            };
            match api.book_appointment(&request).await {
                Ok(payment) => match payment.redirect_url {
                    Some(url) => hard_navigate(&url),
                    None => {
                        nav.push(Route::AppointmentError {
                            order_id: payment.order_id,
                        });
                    }
                },
                Err(e) => {
                    tracing::warn!("Booking failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            booking.set(false);
        }
    };

    let body = match &*konsultan.read() {
        None => rsx! { div { class: "skeleton h-80 rounded-lg" } },
        Some(Err(ApiError::NotFound)) => rsx! {
            EmptyState { title: "Konsultan tidak ditemukan" }
        },
        Some(Err(e)) => rsx! {
            ErrorState {
                message: "Gagal memuat konsultan: {e}",
                on_retry: move |_| konsultan.restart(),
            }
        },
        Some(Ok(k)) => {
            let target = k.clone();
            let book = book.clone();
            rsx! {
                div {
                    class: "flex flex-col gap-4 max-w-2xl",
                    h1 { class: "text-2xl font-bold", "{k.name}" }
                    span { class: "text-neutral-600", "{k.profession}" }
                    p { class: "text-sm text-neutral-700", "{k.description}" }
                    span { class: "font-semibold text-green-700", "{format_rupiah(k.price)} / sesi" }
                    if !k.is_active {
                        p { class: "text-sm text-red-600", "Konsultan sedang tidak menerima jadwal." }
                    }
                    input {
                        class: "field max-w-xs",
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }
                    div {
                        class: "flex flex-wrap gap-2",
                        for s in k.schedule.clone() {
                            button {
                                key: "{s.day}-{s.time}",
                                class: if slot().as_deref() == Some(s.time.as_str()) { "btn btn-primary" } else { "btn btn-outline" },
                                onclick: {
                                    let time = s.time.clone();
                                    move |_| slot.set(Some(time.clone()))
                                },
                                "{s.day} {s.time}"
                            }
                        }
                    }
                    if let Some(err) = error() {
                        p { class: "text-sm text-red-600", "{err}" }
                    }
                    button {
                        class: "btn btn-primary max-w-xs",
                        disabled: booking() || !k.is_active,
                        onclick: move |_| book(target.clone()),
                        if booking() { "Memproses..." } else { "Pesan konsultasi" }
                    }
                }
            }
        }
    };

    rsx! {
        Link { class: "text-sm text-green-700", to: Route::KonsultanList {}, "← Semua konsultan" }
        {body}
    }
}
