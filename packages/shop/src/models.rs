//! # Backend DTOs for the storefront
//!
//! Every type here mirrors a JSON document emitted by the AgroMarFeed backend. The
//! backend owns all of these entities; the web tier only deserializes them, renders
//! them and passes them back unchanged. For that reason the types are deliberately
//! lenient:
//!
//! - `id` accepts the backend's `_id` alias.
//! - Optional strings, lists and flags tolerate both a missing key and an explicit
//!   `null` (see [`nullable`]).
//! - Monetary and rating fields accept numbers or numeric strings (see [`lenient_f64`]).
//! - Unknown keys are ignored.
//!
//! | Struct | Endpoint family |
//! |--------|-----------------|
//! | [`Product`] / [`WeightOption`] | `/api/products` |
//! | [`Article`] / [`Author`] | `/api/articles` |
//! | [`Konsultan`] / [`ScheduleSlot`] | `/api/konsultan` |
//! | [`Order`] / [`OrderItem`] / [`ShippingAddress`] | `/api/orders`, `/api/payment/*` |
//! | [`Appointment`] | `/api/appointment` |
//! | [`User`] / [`LinkedAccount`] / [`UserProfile`] / [`Address`] | `/api/auth/me` |
//! | [`CartItem`] / [`WishlistItem`] | `/api/cart`, `/api/wishlist` |
//! | [`Province`] / [`City`] / [`ShippingCost`] | `/api/shipping/*` |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `150000`, `150000.5`, `"150000"` or `null` (as 0).
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {s}"))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("expected number, got {other}"))),
    }
}

/// A selectable package size for a product, e.g. "25 kg".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightOption {
    #[serde(default, alias = "_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, alias = "value", deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

/// A feed product. `price` and `rating` are always present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "storeId")]
    pub store_id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default, alias = "physicalForm")]
    pub physical_form: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, alias = "bestSeller", deserialize_with = "nullable")]
    pub best_seller: bool,
    #[serde(default, alias = "specialOffer", deserialize_with = "nullable")]
    pub special_offer: bool,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub stock: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub weights: Vec<WeightOption>,
}

impl Product {
    /// Price of the given weight option, or the base price.
    pub fn price_for(&self, weight_id: Option<&str>) -> f64 {
        weight_id
            .and_then(|id| self.weights.iter().find(|w| w.id == id))
            .map(|w| w.price)
            .unwrap_or(self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A blog article. `content` is backend-provided HTML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    #[serde(default, alias = "publishedAt", alias = "date")]
    pub published_at: Option<String>,
    #[serde(default, alias = "author", deserialize_with = "nullable")]
    pub authors: Vec<Author>,
    #[serde(default, alias = "coverImage", alias = "image")]
    pub cover_image: Option<String>,
    #[serde(default, alias = "viewCount", deserialize_with = "nullable")]
    pub views: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Article {
    /// Plain-text excerpt of the HTML body, cut at a char boundary.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut text = String::with_capacity(self.content.len());
        let mut in_tag = false;
        for c in self.content.chars() {
            match c {
                '<' => in_tag = true,
                '>' => {
                    in_tag = false;
                    text.push(' ');
                }
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }
        let cut: String = collapsed.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub day: String,
    #[serde(default, deserialize_with = "nullable")]
    pub time: String,
}

/// A livestock consultant that can be booked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Konsultan {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, alias = "keahlian", deserialize_with = "nullable")]
    pub profession: String,
    #[serde(default, alias = "jadwal", deserialize_with = "nullable")]
    pub schedule: Vec<ScheduleSlot>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, alias = "image", alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(default, alias = "handledCases", deserialize_with = "nullable")]
    pub handled_cases: u32,
    #[serde(default = "default_true", alias = "isActive", deserialize_with = "nullable_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn nullable_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, alias = "productId", deserialize_with = "nullable")]
    pub product_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub quantity: u32,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default, alias = "recipientName", deserialize_with = "nullable")]
    pub recipient_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub province: String,
    #[serde(default, alias = "postalCode", deserialize_with = "nullable")]
    pub postal_code: String,
}

/// A product order. `status` and `payment_status` are backend enums kept as raw
/// strings; [`crate::status`] interprets them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, alias = "_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, alias = "orderId", deserialize_with = "nullable")]
    pub order_id: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<OrderItem>,
    #[serde(default, alias = "totalAmount", deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(default, alias = "shippingCost", deserialize_with = "lenient_f64")]
    pub shipping_cost: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "paymentStatus")]
    pub payment_status: Option<String>,
    #[serde(default, alias = "shippingAddress")]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default, alias = "customerName")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "customerEmail")]
    pub customer_email: Option<String>,
    #[serde(default, alias = "snapRedirectUrl")]
    pub snap_redirect_url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// A consultation booking. Shares the order status vocabulary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, alias = "_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, alias = "orderId", deserialize_with = "nullable")]
    pub order_id: String,
    #[serde(default, alias = "konsultanId")]
    pub konsultan_id: Option<String>,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, alias = "totalAmount", alias = "price", deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "paymentStatus")]
    pub payment_status: Option<String>,
    #[serde(default, alias = "snapRedirectUrl")]
    pub snap_redirect_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccount {
    #[serde(default, deserialize_with = "nullable")]
    pub provider: String,
    #[serde(default, alias = "providerId", alias = "provider_account_id", deserialize_with = "nullable")]
    pub provider_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "birthDate")]
    pub birth_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, alias = "recipientName", deserialize_with = "nullable")]
    pub recipient_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub province: String,
    #[serde(default, alias = "postalCode", deserialize_with = "nullable")]
    pub postal_code: String,
    #[serde(default, alias = "isDefault", deserialize_with = "nullable")]
    pub is_default: bool,
}

/// The authenticated customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, alias = "oauthAccounts", deserialize_with = "nullable")]
    pub accounts: Vec<LinkedAccount>,
    #[serde(default, alias = "user_detail", alias = "userDetail")]
    pub profile: Option<UserProfile>,
    #[serde(default, alias = "alamat", deserialize_with = "nullable")]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name if set, otherwise the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, alias = "_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, alias = "productId", deserialize_with = "nullable")]
    pub product_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub quantity: u32,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub product: Option<Product>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn display_name(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or(&self.product_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(default, alias = "_id", deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, alias = "productId", deserialize_with = "nullable")]
    pub product_id: String,
    #[serde(default)]
    pub product: Option<Product>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(alias = "province_id")]
    pub id: String,
    #[serde(alias = "province")]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(alias = "city_id")]
    pub id: String,
    #[serde(alias = "city_name")]
    pub name: String,
    #[serde(default)]
    pub province_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingCost {
    #[serde(default, deserialize_with = "nullable")]
    pub courier: String,
    #[serde(default, deserialize_with = "nullable")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
    #[serde(default)]
    pub etd: Option<String>,
}
