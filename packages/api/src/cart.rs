use reqwest::Method;
use serde::Serialize;
use shop::envelope::decode_list;
use shop::models::{CartItem, WishlistItem};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct CartAddRequest {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartUpdateRequest {
    pub user_id: String,
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishlistAddRequest {
    pub user_id: String,
    pub product_id: String,
}

impl ApiClient {
    pub async fn cart(&self, user_id: &str) -> Result<Vec<CartItem>, ApiError> {
        let body = self.get("/api/cart", &[("user_id", user_id)]).await?;
        Ok(decode_list(body, &["cart", "items"])?)
    }

    pub async fn add_to_cart(&self, request: &CartAddRequest) -> Result<(), ApiError> {
        self.send(Method::POST, "/api/cart/add", request).await?;
        Ok(())
    }

    pub async fn update_cart(&self, request: &CartUpdateRequest) -> Result<(), ApiError> {
        self.send(Method::PUT, "/api/cart/update", request).await?;
        Ok(())
    }

    pub async fn remove_from_cart(&self, item_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/cart/remove/{item_id}")).await?;
        Ok(())
    }

    pub async fn wishlist(&self, user_id: &str) -> Result<Vec<WishlistItem>, ApiError> {
        let body = self.get("/api/wishlist", &[("user_id", user_id)]).await?;
        Ok(decode_list(body, &["wishlist", "items"])?)
    }

    pub async fn add_to_wishlist(&self, request: &WishlistAddRequest) -> Result<(), ApiError> {
        self.send(Method::POST, "/api/wishlist/add", request).await?;
        Ok(())
    }

    pub async fn remove_from_wishlist(&self, product_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/wishlist/remove/{product_id}"))
            .await?;
        Ok(())
    }
}
