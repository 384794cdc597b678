use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{segment, Inbound, Target};
use crate::state::ProxyState;

pub async fn book(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/appointment")).await
}

pub async fn status(
    State(state): State<ProxyState>,
    Path(order_id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let order_id = segment(&order_id, "order_id")?;
    state
        .forward(
            inbound,
            Target::new(format!("/api/appointment/{order_id}/status")),
        )
        .await
}
