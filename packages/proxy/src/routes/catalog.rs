//! Read-only catalog and content routes: products, articles, consultants.
//! Query strings (`store_id`, `category`, ...) pass through untouched.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{segment, Inbound, Target};
use crate::state::ProxyState;

pub async fn products(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/products")).await
}

pub async fn product(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let id = segment(&id, "id")?;
    state.forward(inbound, Target::new(format!("/api/products/{id}"))).await
}

pub async fn articles(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/articles")).await
}

pub async fn article(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let id = segment(&id, "id")?;
    state.forward(inbound, Target::new(format!("/api/articles/{id}"))).await
}

pub async fn konsultan_list(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/konsultan")).await
}

pub async fn konsultan(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let id = segment(&id, "id")?;
    state.forward(inbound, Target::new(format!("/api/konsultan/{id}"))).await
}
