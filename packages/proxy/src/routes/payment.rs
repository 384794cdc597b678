use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{required, Inbound, Target};
use crate::state::ProxyState;

pub async fn create(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/payment/create")).await
}

/// Payment gateway webhook, relayed as-is.
pub async fn notification(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state
        .forward(inbound, Target::new("/api/payment/notification"))
        .await
}

/// `?order_id=` becomes a path segment on the backend.
pub async fn status(
    State(state): State<ProxyState>,
    Query(params): Query<HashMap<String, String>>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let order_id = required(params.get("order_id"), "order_id")?;
    state
        .forward(
            inbound,
            Target::new(format!("/api/payment/status/{order_id}")).with_query(""),
        )
        .await
}
