use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{required, segment, Inbound, Target};
use crate::state::ProxyState;

/// `GET` lists a user's orders and needs `user_id`; `POST` places an order.
pub async fn orders(
    State(state): State<ProxyState>,
    Query(params): Query<HashMap<String, String>>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    if inbound.method == Method::GET {
        required(params.get("user_id"), "user_id")?;
    }
    state.forward(inbound, Target::new("/api/orders")).await
}

pub async fn order_status(
    State(state): State<ProxyState>,
    Path(order_id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let order_id = segment(&order_id, "order_id")?;
    state
        .forward(inbound, Target::new(format!("/api/orders/{order_id}/status")))
        .await
}
