//! # Order and appointment status interpretation
//!
//! The backend reports two independent string enums for every order or appointment:
//!
//! - `status`: fulfillment progress (`pending`, `processing`, `cancelled`, ...)
//! - `payment_status`: payment gateway outcome (`pending`, `paid`, `failed`, ...)
//!
//! [`StatusSnapshot::resolve`] folds the pair into a [`Resolution`]. Values are
//! compared trimmed and case-insensitively. When both fields are set, branches are
//! tried in this order:
//!
//! | Resolution | Condition |
//! |------------|-----------|
//! | [`Resolution::Inconclusive`] | both fields empty |
//! | [`Resolution::Success`] | `payment_status == "paid"` or `status == "processing"` |
//! | [`Resolution::Pending`] | `payment_status == "pending"` or `status == "pending"` |
//! | [`Resolution::Failed`] | `payment_status == "failed"` or `status == "cancelled"` |
//! | [`Resolution::Other`] | anything else that is non-empty |
//!
//! Only [`Resolution::Inconclusive`] keeps the poller going.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Order};

/// The status-bearing subset of an order or appointment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, alias = "orderId")]
    pub order_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "paymentStatus")]
    pub payment_status: Option<String>,
    #[serde(default, alias = "snapRedirectUrl")]
    pub snap_redirect_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Inconclusive,
    Success,
    Pending,
    Failed,
    Other(String),
}

fn normalized(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

impl StatusSnapshot {
    pub fn new(order_id: impl Into<String>, status: &str, payment_status: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            order_id: order_id.into(),
            status: non_empty(status),
            payment_status: non_empty(payment_status),
            snap_redirect_url: None,
        }
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.snap_redirect_url = Some(url.into());
        self
    }

    pub fn resolve(&self) -> Resolution {
        let status = normalized(&self.status);
        let payment = normalized(&self.payment_status);

        if status.is_empty() && payment.is_empty() {
            Resolution::Inconclusive
        } else if payment == "paid" || status == "processing" {
            Resolution::Success
        } else if payment == "pending" || status == "pending" {
            Resolution::Pending
        } else if payment == "failed" || status == "cancelled" {
            Resolution::Failed
        } else if payment.is_empty() {
            Resolution::Other(status)
        } else {
            Resolution::Other(payment)
        }
    }

    /// Whether either field carries a value, i.e. polling may stop.
    pub fn is_settled(&self) -> bool {
        self.resolve() != Resolution::Inconclusive
    }

    /// Payment link, ignoring blank values.
    pub fn redirect_url(&self) -> Option<&str> {
        self.snap_redirect_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

impl From<Order> for StatusSnapshot {
    fn from(order: Order) -> Self {
        Self {
            order_id: if order.order_id.is_empty() { order.id } else { order.order_id },
            status: order.status,
            payment_status: order.payment_status,
            snap_redirect_url: order.snap_redirect_url,
        }
    }
}

impl From<Appointment> for StatusSnapshot {
    fn from(appointment: Appointment) -> Self {
        Self {
            order_id: if appointment.order_id.is_empty() {
                appointment.id
            } else {
                appointment.order_id
            },
            status: appointment.status,
            payment_status: appointment.payment_status,
            snap_redirect_url: appointment.snap_redirect_url,
        }
    }
}

/// What a status page renders.
#[derive(Clone, Debug, PartialEq)]
pub enum StatusView {
    Loading,
    NotFound,
    Success,
    Pending { redirect_url: Option<String> },
    Failed,
    Other(String),
    Error(String),
}

impl StatusView {
    /// View for a fetched snapshot. An inconclusive snapshot reads as pending.
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        match snapshot.resolve() {
            Resolution::Success => StatusView::Success,
            Resolution::Failed => StatusView::Failed,
            Resolution::Other(value) => StatusView::Other(value),
            Resolution::Pending | Resolution::Inconclusive => StatusView::Pending {
                redirect_url: snapshot.redirect_url().map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_paid_is_success() {
        let snapshot = StatusSnapshot::new("ORD123", "processing", "paid");
        assert_eq!(snapshot.resolve(), Resolution::Success);
        assert_eq!(StatusView::from_snapshot(&snapshot), StatusView::Success);
    }

    #[test]
    fn test_pending_exposes_payment_link() {
        let snapshot = StatusSnapshot::new("ORD123", "pending", "pending")
            .with_redirect_url("https://app.sandbox.midtrans.com/snap/v2/vtweb/abc");
        assert_eq!(snapshot.resolve(), Resolution::Pending);
        assert_eq!(
            StatusView::from_snapshot(&snapshot),
            StatusView::Pending {
                redirect_url: Some("https://app.sandbox.midtrans.com/snap/v2/vtweb/abc".into())
            }
        );

        let without_link = StatusSnapshot::new("ORD123", "pending", "pending")
            .with_redirect_url("  ");
        assert_eq!(
            StatusView::from_snapshot(&without_link),
            StatusView::Pending { redirect_url: None }
        );
    }

    #[test]
    fn test_cancelled_failed_is_failure() {
        let snapshot = StatusSnapshot::new("ORD123", "cancelled", "failed");
        assert_eq!(snapshot.resolve(), Resolution::Failed);
        assert_eq!(StatusView::from_snapshot(&snapshot), StatusView::Failed);
    }

    #[test]
    fn test_single_field_is_enough() {
        assert_eq!(StatusSnapshot::new("A", "", "paid").resolve(), Resolution::Success);
        assert_eq!(StatusSnapshot::new("A", "processing", "").resolve(), Resolution::Success);
        assert_eq!(StatusSnapshot::new("A", "cancelled", "").resolve(), Resolution::Failed);
        assert_eq!(StatusSnapshot::new("A", "", "PENDING ").resolve(), Resolution::Pending);
    }

    #[test]
    fn test_branch_order_when_fields_disagree() {
        // success is checked before pending, pending before failed
        assert_eq!(StatusSnapshot::new("A", "pending", "paid").resolve(), Resolution::Success);
        assert_eq!(StatusSnapshot::new("A", "pending", "failed").resolve(), Resolution::Pending);
    }

    #[test]
    fn test_empty_fields_are_inconclusive() {
        let snapshot = StatusSnapshot::new("A", "", "");
        assert_eq!(snapshot.resolve(), Resolution::Inconclusive);
        assert!(!snapshot.is_settled());
        assert_eq!(
            StatusView::from_snapshot(&snapshot),
            StatusView::Pending { redirect_url: None }
        );
    }

    #[test]
    fn test_unknown_value_settles() {
        let snapshot = StatusSnapshot::new("A", "shipped", "");
        assert_eq!(snapshot.resolve(), Resolution::Other("shipped".into()));
        assert!(snapshot.is_settled());
    }

    #[test]
    fn test_snapshot_from_order_falls_back_to_id() {
        let order = Order {
            id: "64f0c".into(),
            status: Some("pending".into()),
            ..Default::default()
        };
        let snapshot = StatusSnapshot::from(order);
        assert_eq!(snapshot.order_id, "64f0c");
        assert_eq!(snapshot.status.as_deref(), Some("pending"));
    }
}
