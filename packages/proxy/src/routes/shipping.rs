use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{required, Inbound, Target};
use crate::state::ProxyState;

pub async fn provinces(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/shipping/provinces")).await
}

pub async fn cities(
    State(state): State<ProxyState>,
    Query(params): Query<HashMap<String, String>>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    required(params.get("province_id"), "province_id")?;
    state.forward(inbound, Target::new("/api/shipping/cities")).await
}

pub async fn cost(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/shipping/cost")).await
}
