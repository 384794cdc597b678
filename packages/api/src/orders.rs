//! Orders, payments and consultation bookings, plus the status sources the
//! result pages poll.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use shop::envelope::{decode_list, decode_one};
use shop::models::{Appointment, Order, OrderItem, ShippingAddress};
use shop::{FetchOutcome, StatusSnapshot, StatusSource};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub shipping_cost: f64,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRequest {
    pub user_id: String,
    pub konsultan_id: String,
    pub date: String,
    pub time: String,
    pub total_amount: f64,
}

/// What the backend hands back after creating a payable order: our order id and
/// the gateway page to send the customer to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentSession {
    #[serde(default, alias = "orderId")]
    pub order_id: String,
    #[serde(default, alias = "snap_redirect_url", alias = "snapRedirectUrl")]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl ApiClient {
    pub async fn orders(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        let body = self.get("/api/orders", &[("user_id", user_id)]).await?;
        Ok(decode_list(body, &["orders"])?)
    }

    pub async fn create_payment(&self, request: &CheckoutRequest) -> Result<PaymentSession, ApiError> {
        let body = self
            .send(Method::POST, "/api/payment/create", request)
            .await?;
        Ok(decode_one(body, &["payment"])?.unwrap_or_default())
    }

    pub async fn book_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<PaymentSession, ApiError> {
        let body = self.send(Method::POST, "/api/appointment", request).await?;
        Ok(decode_one(body, &["appointment"])?.unwrap_or_default())
    }

    /// An empty body is read as "nothing known yet" rather than an error.
    pub async fn order_status(&self, order_id: &str) -> Result<StatusSnapshot, ApiError> {
        let body = self
            .get(&format!("/api/orders/{order_id}/status"), &[])
            .await?;
        let order: Option<Order> = decode_one(body, &["order"])?;
        Ok(order
            .map(StatusSnapshot::from)
            .unwrap_or_else(|| StatusSnapshot::new(order_id, "", "")))
    }

    pub async fn appointment_status(&self, order_id: &str) -> Result<StatusSnapshot, ApiError> {
        let body = self
            .get(&format!("/api/appointment/{order_id}/status"), &[])
            .await?;
        let appointment: Option<Appointment> = decode_one(body, &["appointment"])?;
        Ok(appointment
            .map(StatusSnapshot::from)
            .unwrap_or_else(|| StatusSnapshot::new(order_id, "", "")))
    }
}

fn outcome(result: Result<StatusSnapshot, ApiError>) -> FetchOutcome {
    match result {
        Ok(snapshot) => FetchOutcome::Found(snapshot),
        Err(ApiError::NotFound) => FetchOutcome::NotFound,
        Err(e) => FetchOutcome::Failed(e.to_string()),
    }
}

/// Polls `/api/orders/{order_id}/status`.
#[derive(Clone, Debug, Default)]
pub struct OrderStatus(pub ApiClient);

impl StatusSource for OrderStatus {
    async fn fetch_status(&self, order_id: &str) -> FetchOutcome {
        outcome(self.0.order_status(order_id).await)
    }
}

/// Polls `/api/appointment/{order_id}/status`.
#[derive(Clone, Debug, Default)]
pub struct AppointmentStatus(pub ApiClient);

impl StatusSource for AppointmentStatus {
    async fn fetch_status(&self, order_id: &str) -> FetchOutcome {
        outcome(self.0.appointment_status(order_id).await)
    }
}
