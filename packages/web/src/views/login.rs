//! Login page view with email/password form.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    super::use_redirect_signed_in();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let session = session.clone();
        async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Masukkan email yang valid".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password wajib diisi".to_string()));
                return;
            }

            loading.set(true);
            match api.login(&LoginRequest { email: e, password: p }).await {
                Ok(Some(user)) => {
                    session.set_user(user);
                    nav.replace(Route::Home {});
                }
                // Some backends only set the cookie; ask who we are.
                Ok(None) => {
                    session.load().await;
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-green-800 font-bold text-[1.75rem]",
                "AgroMarFeed"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Masuk ke akun Anda"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "field",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Memproses..." } else { "Masuk" }
                }
            }

            p {
                class: "mt-6 text-neutral-600 text-[0.8125rem]",
                "Belum punya akun? "
                Link {
                    class: "text-green-700",
                    to: Route::Register {},
                    "Daftar"
                }
            }
        }
    }
}
