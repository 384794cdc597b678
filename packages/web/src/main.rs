use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AppointmentError, ArticleDetail, Articles, Cart, Home, KonsultanDetail, KonsultanList, Login,
    NotFound, Orders, PaymentError, PaymentPending, PaymentSuccess, ProductDetail, Products,
    Register, Shell, Wishlist,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/products")]
        Products {},
        #[route("/products/:id")]
        ProductDetail { id: String },
        #[route("/articles")]
        Articles {},
        #[route("/articles/:id")]
        ArticleDetail { id: String },
        #[route("/konsultan")]
        KonsultanList {},
        #[route("/konsultan/:id")]
        KonsultanDetail { id: String },
        #[route("/cart")]
        Cart {},
        #[route("/wishlist")]
        Wishlist {},
        #[route("/orders")]
        Orders {},
        #[route("/payment/success?:order_id")]
        PaymentSuccess { order_id: String },
        #[route("/payment/pending?:order_id")]
        PaymentPending { order_id: String },
        #[route("/payment/error?:order_id")]
        PaymentError { order_id: String },
        #[route("/appointment/error?:order_id")]
        AppointmentError { order_id: String },
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = proxy::Settings::new().expect("Failed to load settings");
    tracing::info!("Forwarding /api to {}", settings.backend.url);
    let state = proxy::ProxyState::new(settings).expect("Failed to build HTTP client");

    // Proxy routes first, then the Dioxus application
    let router = axum::Router::new()
        .merge(proxy::router(state))
        .serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::STOREFRONT_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
