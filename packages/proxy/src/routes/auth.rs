//! Session routes. All of them relay `Set-Cookie` so the backend's
//! `agromarfeed.sid` cookie reaches the browser, and none may be cached.

use axum::{extract::State, response::Response};

use crate::error::ProxyError;
use crate::forward::{Inbound, Target};
use crate::state::ProxyState;

pub async fn me(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/auth/me").session()).await
}

pub async fn login(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/auth/login").session()).await
}

pub async fn register(
    State(state): State<ProxyState>,
    inbound: Inbound,
) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/auth/register").session()).await
}

pub async fn logout(State(state): State<ProxyState>, inbound: Inbound) -> Result<Response, ProxyError> {
    state.forward(inbound, Target::new("/auth/logout").session()).await
}
