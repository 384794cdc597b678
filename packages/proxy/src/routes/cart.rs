//! Cart and wishlist routes. Listing either requires `user_id`.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use crate::error::ProxyError;
use crate::forward::{required, segment, Inbound, Target};
use crate::state::ProxyState;

pub async fn cart(
    State(state): State<ProxyState>,
    Query(params): Query<HashMap<String, String>>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    required(params.get("user_id"), "user_id")?;
    state.forward(inbound, Target::new("/api/cart")).await
}

pub async fn cart_add(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/cart/add")).await
}

pub async fn cart_update(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/cart/update")).await
}

pub async fn cart_remove(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let id = segment(&id, "id")?;
    state
        .forward(inbound, Target::new(format!("/api/cart/remove/{id}")))
        .await
}

pub async fn wishlist(
    State(state): State<ProxyState>,
    Query(params): Query<HashMap<String, String>>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    required(params.get("user_id"), "user_id")?;
    state.forward(inbound, Target::new("/api/wishlist")).await
}

pub async fn wishlist_add(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/api/wishlist/add")).await
}

pub async fn wishlist_remove(
    State(state): State<ProxyState>,
    Path(product_id): Path<String>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    let product_id = segment(&product_id, "product_id")?;
    state
        .forward(
            inbound,
            Target::new(format!("/api/wishlist/remove/{product_id}")),
        )
        .await
}
