//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the [`SessionState`] signal and the [`ApiClient`] every
//! page uses. It loads the current user once when it mounts; pages refresh it after
//! signing in and clear it on logout.

use api::ApiClient;
use dioxus::prelude::*;
use shop::models::User;
use shop::SessionState;

/// Handle to the provider's state. Cheap to clone.
#[derive(Clone)]
pub struct SessionContext {
    state: Signal<SessionState>,
    api: ApiClient,
}

impl SessionContext {
    /// Current snapshot. Reading it subscribes the calling component.
    pub fn get(&self) -> SessionState {
        (self.state)()
    }

    /// Ask the backend who is signed in and store the answer.
    pub async fn load(&self) {
        let mut state = self.state;
        state.set(self.api.session().await);
    }

    /// [`Self::load`] in the background.
    pub fn refetch(&self) {
        let session = self.clone();
        spawn(async move { session.load().await });
    }

    pub fn set_user(&self, user: User) {
        let mut state = self.state;
        state.set(SessionState::signed_in(user));
    }

    /// Forget the user locally.
    pub fn clear(&self) {
        let mut state = self.state;
        state.set(SessionState::signed_out());
    }
}

/// Get the session. Re-renders the caller when the user changes.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Get the client for the proxy routes.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Wrap the app with this to make [`use_session`] and [`use_api`] available.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let api = use_context_provider(ApiClient::from_origin);
    let state = use_signal(SessionState::default);
    let session = use_context_provider(move || SessionContext {
        state,
        api: api.clone(),
    });

    // Fetch the current user on mount
    let _ = use_resource(move || {
        let session = session.clone();
        async move { session.load().await }
    });

    rsx! {
        {children}
    }
}

/// Send the browser somewhere with a full page load.
pub fn hard_navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("hard_navigate({}) ignored outside the browser", url);
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Keluar".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let api = use_api();

    let onclick = move |_| {
        let session = session.clone();
        let api = api.clone();
        async move {
            match api.logout().await {
                Ok(()) => {
                    session.clear();
                    hard_navigate("/login");
                }
                Err(e) => tracing::error!("Logout failed: {}", e),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
