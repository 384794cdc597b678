use shop::envelope::{decode_list, decode_one};
use shop::models::{Article, Konsultan, Product};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn products(&self, store_id: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let query: Vec<(&str, &str)> = store_id.map(|id| ("store_id", id)).into_iter().collect();
        let body = self.get("/api/products", &query).await?;
        Ok(decode_list(body, &["products"])?)
    }

    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        let body = self.get(&format!("/api/products/{id}"), &[]).await?;
        decode_one(body, &["product"])?.ok_or(ApiError::NotFound)
    }

    pub async fn articles(&self) -> Result<Vec<Article>, ApiError> {
        let body = self.get("/api/articles", &[]).await?;
        Ok(decode_list(body, &["articles"])?)
    }

    pub async fn article(&self, id: &str) -> Result<Article, ApiError> {
        let body = self.get(&format!("/api/articles/{id}"), &[]).await?;
        decode_one(body, &["article"])?.ok_or(ApiError::NotFound)
    }

    pub async fn konsultan_list(&self) -> Result<Vec<Konsultan>, ApiError> {
        let body = self.get("/api/konsultan", &[]).await?;
        Ok(decode_list(body, &["konsultan"])?)
    }

    pub async fn konsultan(&self, id: &str) -> Result<Konsultan, ApiError> {
        let body = self.get(&format!("/api/konsultan/{id}"), &[]).await?;
        decode_one(body, &["konsultan"])?.ok_or(ApiError::NotFound)
    }
}
