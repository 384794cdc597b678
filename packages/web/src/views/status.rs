//! Payment and appointment result pages.
//!
//! The gateway sends the customer back before it has told the backend the outcome,
//! so each page polls the status route for its order id. One [`PollSlot`] per page
//! holds the running poll: a new order id (or a manual refresh) replaces it, and
//! unmounting cancels it. Updates for any other order id are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use api::{AppointmentStatus, OrderStatus};
use dioxus::prelude::*;
use shop::poll::start_poll;
use shop::{PollPolicy, PollSlot, PollUpdate, StatusSource, StatusView};
use ui::components::StatusPanel;
use ui::use_api;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusKind {
    Payment,
    Appointment,
}

impl StatusKind {
    fn title(&self) -> &'static str {
        match self {
            StatusKind::Payment => "Status Pembayaran",
            StatusKind::Appointment => "Status Konsultasi",
        }
    }
}

#[component]
pub fn PaymentSuccess(order_id: String) -> Element {
    rsx! { StatusPage { kind: StatusKind::Payment, order_id } }
}

#[component]
pub fn PaymentPending(order_id: String) -> Element {
    rsx! { StatusPage { kind: StatusKind::Payment, order_id } }
}

#[component]
pub fn PaymentError(order_id: String) -> Element {
    rsx! { StatusPage { kind: StatusKind::Payment, order_id } }
}

#[component]
pub fn AppointmentError(order_id: String) -> Element {
    rsx! { StatusPage { kind: StatusKind::Appointment, order_id } }
}

/// Spawn a poll for `order_id` into `slot`, cancelling whatever ran before.
fn launch<S>(
    source: S,
    order_id: String,
    slot: Rc<RefCell<PollSlot>>,
    mut view: Signal<StatusView>,
    mut polling: Signal<bool>,
) where
    S: StatusSource + 'static,
{
    let accepts = slot.clone();
    let (handle, task) = start_poll(
        source,
        order_id,
        PollPolicy::default(),
        move |update: PollUpdate| {
            if !accepts.borrow().accepts(&update.order_id) {
                return;
            }
            view.set(update.view);
            polling.set(!update.finished);
        },
    );
    slot.borrow_mut().replace(handle);
    spawn(async move {
        task.await;
    });
}

#[component]
fn StatusPage(kind: StatusKind, order_id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let view = use_signal(|| StatusView::Loading);
    let polling = use_signal(|| true);
    let mut refreshes = use_signal(|| 0u32);
    let slot = use_hook(|| Rc::new(RefCell::new(PollSlot::default())));

    let effect_slot = slot.clone();
    use_effect(use_reactive!(|order_id| {
        // Re-run on manual refresh as well.
        let _ = refreshes();
        let mut view = view;
        let mut polling = polling;
        view.set(StatusView::Loading);
        polling.set(true);

        let order_id = order_id.trim().to_string();
        match kind {
            StatusKind::Payment => launch(
                OrderStatus(api.clone()),
                order_id,
                effect_slot.clone(),
                view,
                polling,
            ),
            StatusKind::Appointment => launch(
                AppointmentStatus(api.clone()),
                order_id,
                effect_slot.clone(),
                view,
                polling,
            ),
        }
    }));

    let drop_slot = slot.clone();
    use_drop(move || drop_slot.borrow_mut().cancel());

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "{kind.title()}" }
        StatusPanel {
            order_id: order_id.trim().to_string(),
            view: view(),
            polling: polling(),
            on_browse: move |_| {
                nav.push(Route::Products {});
            },
            on_orders: move |_| {
                nav.push(Route::Orders {});
            },
            on_retry: move |_| match kind {
                StatusKind::Payment => {
                    nav.push(Route::Cart {});
                }
                StatusKind::Appointment => {
                    nav.push(Route::KonsultanList {});
                }
            },
            on_refresh: move |_| refreshes += 1,
        }
    }
}
