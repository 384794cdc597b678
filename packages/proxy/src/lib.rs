//! Same-origin API proxy for the storefront.
//!
//! Every route under `/api` relays one request to the commerce backend and hands
//! the answer back unchanged. The browser only ever talks to this server, so the
//! backend's session cookie stays first-party.

pub mod error;
pub mod forward;
pub mod routes;
pub mod settings;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE, COOKIE},
        HeaderName, HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use error::ProxyError;
pub use settings::Settings;
pub use state::ProxyState;

use routes::{appointment, auth, cart, catalog, orders, payment, shipping};

fn cors(state: &ProxyState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            COOKIE,
            HeaderName::from_static(forward::BYPASS_HEADER),
        ])
}

/// All proxy routes, ready to merge into the application router.
pub fn router(state: ProxyState) -> Router {
    let cors = cors(&state);

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/products", get(catalog::products))
        .route("/api/products/{id}", get(catalog::product))
        .route("/api/articles", get(catalog::articles))
        .route("/api/articles/{id}", get(catalog::article))
        .route("/api/konsultan", get(catalog::konsultan_list))
        .route("/api/konsultan/{id}", get(catalog::konsultan))
        .route("/api/orders", get(orders::orders).post(orders::orders))
        .route("/api/orders/{order_id}/status", get(orders::order_status))
        .route("/api/payment/create", post(payment::create))
        .route("/api/payment/notification", post(payment::notification))
        .route("/api/payment/status", get(payment::status))
        .route("/api/appointment", post(appointment::book))
        .route(
            "/api/appointment/{order_id}/status",
            get(appointment::status),
        )
        .route("/api/cart", get(cart::cart))
        .route("/api/cart/add", post(cart::cart_add))
        .route("/api/cart/update", put(cart::cart_update))
        .route("/api/cart/remove/{id}", delete(cart::cart_remove))
        .route("/api/wishlist", get(cart::wishlist))
        .route("/api/wishlist/add", post(cart::wishlist_add))
        .route(
            "/api/wishlist/remove/{product_id}",
            delete(cart::wishlist_remove),
        )
        .route("/api/shipping/provinces", get(shipping::provinces))
        .route("/api/shipping/cities", get(shipping::cities))
        .route("/api/shipping/cost", post(shipping::cost))
        .layer(DefaultBodyLimit::max(forward::MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{
        body::Body,
        extract::{Path, RawQuery, State},
        http::{
            header::{AUTHORIZATION, CACHE_CONTROL, LOCATION, ORIGIN, REFERER, SET_COOKIE, USER_AGENT},
            HeaderMap, Request, StatusCode,
        },
        response::IntoResponse,
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    type Hits = Arc<AtomicUsize>;

    async fn order_status(State(hits): State<Hits>, Path(id): Path<String>) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        if id == "missing" {
            return (StatusCode::NOT_FOUND, Json(json!({ "message": "Order not found" })));
        }
        (
            StatusCode::OK,
            Json(json!({ "data": { "order_id": id, "payment_status": "paid" } })),
        )
    }

    async fn me(State(hits): State<Hits>, headers: HeaderMap) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        let cookie = headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            [(SET_COOKIE, "agromarfeed.sid=abc; Path=/; HttpOnly")],
            Json(json!({ "user": { "_id": "u1", "name": "Budi" }, "cookie": cookie })),
        )
    }

    async fn echo_query(State(hits): State<Hits>, RawQuery(query): RawQuery) -> Json<Value> {
        hits.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "query": query }))
    }

    async fn payment_status(State(hits): State<Hits>, Path(id): Path<String>) -> Json<Value> {
        hits.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "order_id": id }))
    }

    async fn html(State(hits): State<Hits>) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        (StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>")
    }

    async fn no_content(State(hits): State<Hits>) -> StatusCode {
        hits.fetch_add(1, Ordering::SeqCst);
        StatusCode::NO_CONTENT
    }

    async fn logout_redirect(State(hits): State<Hits>) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        (
            StatusCode::FOUND,
            [
                (LOCATION, "/login"),
                (SET_COOKIE, "agromarfeed.sid=; Path=/; Max-Age=0"),
            ],
            "Found. Redirecting to /login",
        )
    }

    async fn register_text(State(hits): State<Hits>) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        (
            [(SET_COOKIE, "agromarfeed.sid=new; Path=/; HttpOnly")],
            "Registered",
        )
    }

    /// Answer with every request header it received.
    async fn echo_headers(State(hits): State<Hits>, headers: HeaderMap) -> impl IntoResponse {
        hits.fetch_add(1, Ordering::SeqCst);
        let received: serde_json::Map<String, Value> = headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    Value::String(value.to_str().unwrap_or_default().to_string()),
                )
            })
            .collect();
        (
            [
                (SET_COOKIE, "tracker=1; Path=/"),
                (CACHE_CONTROL, "public, max-age=60"),
            ],
            Json(Value::Object(received)),
        )
    }

    async fn fallback(State(hits): State<Hits>) -> StatusCode {
        hits.fetch_add(1, Ordering::SeqCst);
        StatusCode::NOT_FOUND
    }

    /// Serve a fake backend on an ephemeral port.
    async fn spawn_backend() -> (String, Hits) {
        let hits = Hits::default();
        let app = Router::new()
            .route("/api/orders/{id}/status", get(order_status))
            .route("/auth/me", get(me))
            .route("/auth/logout", post(logout_redirect))
            .route("/auth/register", post(register_text))
            .route("/api/konsultan", get(echo_headers))
            .route("/api/products", get(echo_query))
            .route("/api/payment/status/{id}", get(payment_status))
            .route("/api/articles", get(html))
            .route("/api/cart/remove/{id}", delete(no_content))
            .fallback(fallback)
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), hits)
    }

    fn proxy(backend: &str) -> Router {
        router(ProxyState::new(Settings::for_backend(backend)).unwrap())
    }

    async fn call(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_status_and_body_pass_through() {
        let (backend, hits) = spawn_backend().await;

        let (status, _, body) = call(proxy(&backend), get_req("/api/orders/ORD1/status")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["order_id"], "ORD1");

        let (status, _, body) = call(proxy(&backend), get_req("/api/orders/missing/status")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Order not found");

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_query_passes_through() {
        let (backend, _) = spawn_backend().await;
        let (_, _, body) = call(
            proxy(&backend),
            get_req("/api/products?store_id=s1&category=pakan"),
        )
        .await;
        assert_eq!(body["query"], "store_id=s1&category=pakan");
    }

    #[tokio::test]
    async fn test_payment_status_moves_order_id_into_path() {
        let (backend, _) = spawn_backend().await;
        let (status, _, body) =
            call(proxy(&backend), get_req("/api/payment/status?order_id=ORD9")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["order_id"], "ORD9");
    }

    #[tokio::test]
    async fn test_missing_params_never_reach_backend() {
        let (backend, hits) = spawn_backend().await;

        for uri in [
            "/api/payment/status",
            "/api/payment/status?order_id=",
            "/api/cart",
            "/api/wishlist",
            "/api/orders",
            "/api/shipping/cities",
        ] {
            let (status, _, body) = call(proxy(&backend), get_req(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false);
            assert!(body["message"]
                .as_str()
                .unwrap()
                .starts_with("Missing required parameter"));
        }

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_posting_an_order_needs_no_user_id() {
        let (backend, hits) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/orders")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"items":[]}"#))
            .unwrap();
        let (status, _, _) = call(proxy(&backend), req).await;
        // the fake backend has no such route, so its 404 comes back
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_session_routes_relay_cookies() {
        let (backend, _) = spawn_backend().await;
        let req = Request::builder()
            .uri("/api/auth/me")
            .header(COOKIE, "agromarfeed.sid=old")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = call(proxy(&backend), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cookie"], "agromarfeed.sid=old");
        assert_eq!(
            headers.get(SET_COOKIE).unwrap(),
            "agromarfeed.sid=abc; Path=/; HttpOnly"
        );
        assert!(headers
            .get(axum::http::header::CACHE_CONTROL)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("no-store"));
    }

    #[tokio::test]
    async fn test_empty_body_keeps_status() {
        let (backend, _) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::DELETE)
            .uri("/api/cart/remove/item1")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = call(proxy(&backend), req).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_non_json_backend_body_is_an_error() {
        let (backend, _) = spawn_backend().await;
        let (status, _, body) = call(proxy(&backend), get_req("/api/articles")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_redirect_is_relayed_with_cookies() {
        let (backend, hits) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/logout")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, headers, body) = call(proxy(&backend), req).await;

        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers.get(LOCATION).unwrap(), "/login");
        assert_eq!(
            headers.get(SET_COOKIE).unwrap(),
            "agromarfeed.sid=; Path=/; Max-Age=0"
        );
        assert_eq!(body, Value::Null);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_session_answer_still_relays_cookies() {
        let (backend, _) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/register")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"budi@example.com"}"#))
            .unwrap();
        let (status, headers, body) = call(proxy(&backend), req).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(
            headers.get(SET_COOKIE).unwrap(),
            "agromarfeed.sid=new; Path=/; HttpOnly"
        );
        assert!(headers
            .get(CACHE_CONTROL)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("no-store"));
    }

    #[tokio::test]
    async fn test_only_allow_listed_headers_are_forwarded() {
        let (backend, _) = spawn_backend().await;
        let req = Request::builder()
            .uri("/api/konsultan")
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, "agromarfeed.sid=s1")
            .header(USER_AGENT, "storefront-test")
            .header(ORIGIN, "http://shop.test")
            .header(REFERER, "http://shop.test/konsultan")
            .header(forward::BYPASS_HEADER, "secret")
            .header(AUTHORIZATION, "Bearer nope")
            .header("x-other", "nope")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = call(proxy(&backend), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content-type"], "application/json");
        assert_eq!(body["cookie"], "agromarfeed.sid=s1");
        assert_eq!(body["user-agent"], "storefront-test");
        assert_eq!(body["origin"], "http://shop.test");
        assert_eq!(body["referer"], "http://shop.test/konsultan");
        assert_eq!(body[forward::BYPASS_HEADER], "secret");
        assert!(body.get("authorization").is_none());
        assert!(body.get("x-other").is_none());

        // not a session route: backend cookies and caching stay behind
        assert!(headers.get(SET_COOKIE).is_none());
        assert!(headers.get(CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let (backend, hits) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/cart/add")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(vec![b' '; forward::MAX_BODY_BYTES + 1]))
            .unwrap();
        let (status, _, body) = call(proxy(&backend), req).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["success"], false);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let (status, _, body) = call(
            proxy("http://127.0.0.1:1"),
            get_req("/api/orders/ORD1/status"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_cors_mirrors_origin_with_credentials() {
        let (backend, _) = spawn_backend().await;
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/products")
            .header(axum::http::header::ORIGIN, "http://localhost:3000")
            .header(axum::http::header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = proxy(&backend).oneshot(req).await.unwrap();
        let headers = response.headers();
        assert_eq!(
            headers
                .get(axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers
                .get(axum::http::header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }
}
