use reqwest::Method;
use serde::Serialize;
use shop::envelope::decode_list;
use shop::models::{City, Province, ShippingCost};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct ShippingCostRequest {
    /// Destination city id.
    pub destination: String,
    /// Grams.
    pub weight: u32,
    pub courier: String,
}

impl ApiClient {
    pub async fn provinces(&self) -> Result<Vec<Province>, ApiError> {
        let body = self.get("/api/shipping/provinces", &[]).await?;
        Ok(decode_list(body, &["provinces"])?)
    }

    pub async fn cities(&self, province_id: &str) -> Result<Vec<City>, ApiError> {
        let body = self
            .get("/api/shipping/cities", &[("province_id", province_id)])
            .await?;
        Ok(decode_list(body, &["cities"])?)
    }

    pub async fn shipping_cost(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<Vec<ShippingCost>, ApiError> {
        let body = self
            .send(Method::POST, "/api/shipping/cost", request)
            .await?;
        Ok(decode_list(body, &["costs"])?)
    }
}
