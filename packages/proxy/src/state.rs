use std::sync::Arc;

use crate::settings::Settings;

/// Shared by every proxy handler. Cloning is cheap: the client is reference
/// counted internally and the settings are behind an `Arc`.
#[derive(Clone)]
pub struct ProxyState {
    pub http: reqwest::Client,
    pub settings: Arc<Settings>,
}

impl ProxyState {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        // Redirects are relayed to the browser, not followed server-side.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }
}
