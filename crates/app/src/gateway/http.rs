//! HTTP client for the personalized menu backend.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rustc_hash::FxHashMap;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::warn;

use tableside::{
    coupons::{Coupon, CouponRule},
    menu::{Menu, MenuItem, MenuSection, Offer},
};

use crate::gateway::{
    MenuGateway,
    models::{AddonRecommendations, CartItemSnapshot, ComboSuggestion, DEFAULT_AI_PITCH, Nudge},
    normalize::{bool_field, normalize_item, rupee_field, string_field},
};

/// Configuration for connecting to the menu backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base address, e.g. `"http://localhost:8002"`.
    pub base_url: String,
}

/// [`MenuGateway`] implementation over plain HTTP.
///
/// Requests carry no timeout; a hung request leaves its slot empty rather
/// than failing the others.
#[derive(Debug, Clone)]
pub struct HttpMenuGateway {
    config: BackendConfig,
    http: Client,
}

/// Errors absorbed inside the gateway; never surfaced to callers.
#[derive(Debug, Error)]
enum GatewayError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response status {0}")]
    Status(StatusCode),
}

impl HttpMenuGateway {
    /// Create a new gateway from the given configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.http.get(self.url(path)).send().await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, GatewayError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MenuGateway for HttpMenuGateway {
    async fn fetch_menu(&self, email: &str) -> Menu {
        let body = json!({ "customer_email": email });

        match self.post_json::<Value>("/menu", &body).await {
            Ok(envelope) => {
                // Some backend builds wrap the payload in `menu`, some don't.
                let body = envelope.get("menu").unwrap_or(&envelope);

                menu_from_value(body)
            }
            Err(error) => {
                warn!("menu fetch failed: {error}");

                Menu::default()
            }
        }
    }

    async fn fetch_offers(&self) -> Vec<Offer> {
        match self.get_json::<OffersResponse>("/offers").await {
            Ok(response) => response.offers.into_iter().map(RawOffer::into_offer).collect(),
            Err(error) => {
                warn!("offers fetch failed: {error}");

                Vec::new()
            }
        }
    }

    async fn save_preferences(&self, email: &str, preferences: &Value) -> bool {
        let body = json!({ "email": email, "preferences": preferences });

        match self.post_json::<Value>("/auth/save-preferences", &body).await {
            Ok(_) => true,
            Err(error) => {
                warn!("saving preferences failed: {error}");

                false
            }
        }
    }

    async fn fetch_recommendations(&self, email: &str, item_id: &str) -> AddonRecommendations {
        let body = json!({ "customer_email": email, "item_id": item_id });

        match self.post_json::<AddonsResponse>("/item-addons", &body).await {
            Ok(response) => response.into_recommendations(),
            Err(error) => {
                warn!("add-on fetch failed: {error}");

                AddonRecommendations::default()
            }
        }
    }

    async fn pricing_strategy(&self, email: &str, cart: &[CartItemSnapshot]) -> Option<Nudge> {
        let body = json!({ "customer_email": email, "cart_items": cart });

        match self.post_json::<PricingResponse>("/pricing-strategy", &body).await {
            Ok(response) => response.pricing.and_then(|pricing| pricing.upsell_nudge),
            Err(error) => {
                warn!("pricing strategy fetch failed: {error}");

                None
            }
        }
    }

    async fn fetch_upsell_items(&self) -> FxHashMap<String, Vec<MenuItem>> {
        match self.get_json::<UpsellsResponse>("/upsell-items").await {
            Ok(response) => response
                .upsells
                .into_iter()
                .map(|(category, raw_items)| {
                    let items = raw_items
                        .iter()
                        .filter_map(|raw| normalize_item(raw, &category))
                        .collect();

                    (category, items)
                })
                .collect(),
            Err(error) => {
                warn!("upsell fetch failed: {error}");

                FxHashMap::default()
            }
        }
    }

    async fn fetch_coupons(&self) -> Vec<Coupon> {
        match self.get_json::<CouponsResponse>("/coupons").await {
            Ok(response) => response.coupons.into_iter().map(RawCoupon::into_coupon).collect(),
            Err(error) => {
                warn!("coupon fetch failed: {error}");

                Vec::new()
            }
        }
    }

    async fn generate_combos(&self, count: u32, email: &str) -> Vec<ComboSuggestion> {
        let body = json!({ "num_combos": count, "email": email });

        match self.post_json::<CombosResponse>("/generate-combos", &body).await {
            Ok(response) => response
                .combos
                .iter()
                .filter_map(combo_suggestion)
                .collect(),
            Err(error) => {
                warn!("combo generation failed: {error}");

                Vec::new()
            }
        }
    }
}

/// Build a [`ComboSuggestion`] from one loose combo payload.
fn combo_suggestion(raw: &Value) -> Option<ComboSuggestion> {
    let item = normalize_item(raw, "Combos")?;

    Some(ComboSuggestion {
        item,
        savings: rupee_field(raw, &["Savings"]).unwrap_or(0),
        discount_percent: rupee_field(raw, &["Discount_Percent"]),
        insight: string_field(raw, &["Insight"]).filter(|insight| !insight.is_empty()),
        is_personalized: bool_field(raw, &["Is_Personalized"]),
    })
}

#[derive(Debug, Deserialize)]
struct MenuBody {
    #[serde(default)]
    status: String,

    #[serde(default)]
    menu_sections: serde_json::Map<String, Value>,
}

/// Normalize a menu body into sections of typed items.
///
/// Anything other than a successful sectioned payload becomes an empty menu.
fn menu_from_value(value: &Value) -> Menu {
    let Ok(body) = serde_json::from_value::<MenuBody>(value.clone()) else {
        return Menu::default();
    };

    if body.status != "success" {
        return Menu::default();
    }

    let sections = body
        .menu_sections
        .into_iter()
        .map(|(name, raw_items)| {
            let items = raw_items
                .as_array()
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|raw| normalize_item(raw, &name))
                        .collect()
                })
                .unwrap_or_default();

            MenuSection { name, items }
        })
        .collect();

    Menu { sections }
}

#[derive(Debug, Deserialize)]
struct OffersResponse {
    #[serde(default)]
    offers: Vec<RawOffer>,
}

#[derive(Debug, Deserialize)]
struct RawOffer {
    #[serde(default)]
    id: Value,

    #[serde(default)]
    title: String,

    #[serde(default)]
    subtitle: String,

    #[serde(default)]
    discount: String,

    #[serde(rename = "bgColor", default)]
    bg_color: String,

    #[serde(default)]
    image: String,
}

impl RawOffer {
    fn into_offer(self) -> Offer {
        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };

        Offer {
            id,
            title: self.title,
            subtitle: self.subtitle,
            discount: self.discount,
            bg_color: self.bg_color,
            image: self.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AddonsResponse {
    smart_recommendations: Option<SmartRecommendations>,
}

#[derive(Debug, Deserialize)]
struct SmartRecommendations {
    #[serde(default)]
    add_ons: Vec<Value>,

    #[serde(default)]
    ai_pitch: String,
}

impl AddonsResponse {
    fn into_recommendations(self) -> AddonRecommendations {
        let Some(recommendations) = self.smart_recommendations else {
            return AddonRecommendations::default();
        };

        let add_ons = recommendations
            .add_ons
            .iter()
            .filter_map(|raw| normalize_item(raw, "Add-ons"))
            .collect();

        let ai_pitch = if recommendations.ai_pitch.is_empty() {
            String::from(DEFAULT_AI_PITCH)
        } else {
            recommendations.ai_pitch
        };

        AddonRecommendations { add_ons, ai_pitch }
    }
}

#[derive(Debug, Deserialize)]
struct PricingResponse {
    pricing: Option<PricingBody>,
}

#[derive(Debug, Deserialize)]
struct PricingBody {
    upsell_nudge: Option<Nudge>,
}

#[derive(Debug, Deserialize)]
struct UpsellsResponse {
    #[serde(default)]
    upsells: FxHashMap<String, Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct CouponsResponse {
    #[serde(default)]
    coupons: Vec<RawCoupon>,
}

#[derive(Debug, Deserialize)]
struct RawCoupon {
    #[serde(default)]
    id: Value,

    #[serde(default)]
    code: String,

    #[serde(default)]
    title: String,

    #[serde(default)]
    subtitle: String,

    #[serde(rename = "type", default = "default_rule")]
    rule: CouponRule,

    #[serde(rename = "discountAmount", default)]
    discount_amount: i64,

    #[serde(rename = "discountPercent", default)]
    discount_percent: i64,

    #[serde(rename = "minOrderValue", default)]
    min_order_value: i64,

    #[serde(default)]
    image: Option<String>,

    #[serde(rename = "bgColor", default)]
    bg_color: Option<String>,
}

fn default_rule() -> CouponRule {
    CouponRule::Other
}

impl RawCoupon {
    fn into_coupon(self) -> Coupon {
        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };

        Coupon {
            id,
            code: self.code,
            title: self.title,
            subtitle: self.subtitle,
            rule: self.rule,
            discount_amount: self.discount_amount,
            discount_percent: self.discount_percent,
            min_order_value: self.min_order_value,
            image: self.image,
            bg_color: self.bg_color,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CombosResponse {
    #[serde(default)]
    combos: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Nothing listens on the discard port, so every request fails fast with
    /// a connection error and must resolve to the documented default.
    fn unreachable_gateway() -> HttpMenuGateway {
        HttpMenuGateway::new(BackendConfig {
            base_url: String::from("http://127.0.0.1:9"),
        })
    }

    #[tokio::test]
    async fn fetch_menu_fails_soft_to_empty_menu() {
        let menu = unreachable_gateway().fetch_menu("guest@example.com").await;

        assert!(menu.is_empty());
    }

    #[tokio::test]
    async fn fetch_offers_fails_soft_to_empty_list() {
        assert!(unreachable_gateway().fetch_offers().await.is_empty());
    }

    #[tokio::test]
    async fn save_preferences_fails_soft_to_false() {
        let saved = unreachable_gateway()
            .save_preferences("guest@example.com", &json!({ "diet": "Pure Veg" }))
            .await;

        assert!(!saved);
    }

    #[tokio::test]
    async fn fetch_recommendations_fails_soft_to_default_pitch() {
        let recs = unreachable_gateway()
            .fetch_recommendations("guest@example.com", "i1")
            .await;

        assert!(recs.add_ons.is_empty());
        assert_eq!(recs.ai_pitch, DEFAULT_AI_PITCH);
    }

    #[tokio::test]
    async fn pricing_strategy_fails_soft_to_none() {
        let nudge = unreachable_gateway()
            .pricing_strategy("guest@example.com", &[])
            .await;

        assert!(nudge.is_none());
    }

    #[tokio::test]
    async fn fetch_upsell_items_fails_soft_to_empty_map() {
        assert!(unreachable_gateway().fetch_upsell_items().await.is_empty());
    }

    #[tokio::test]
    async fn fetch_coupons_fails_soft_to_empty_list() {
        assert!(unreachable_gateway().fetch_coupons().await.is_empty());
    }

    #[tokio::test]
    async fn generate_combos_fails_soft_to_empty_list() {
        assert!(
            unreachable_gateway()
                .generate_combos(2, "guest@example.com")
                .await
                .is_empty()
        );
    }

    #[test]
    fn menu_body_normalizes_sections() {
        let menu = menu_from_value(&json!({
            "status": "success",
            "menu_sections": {
                "Bread": [
                    { "Item_ID": "b1", "Item_Name": "Butter Naan", "Current_Price": 60 },
                    { "Item_Name": "no id, dropped" },
                ],
            },
        }));

        let section = menu.sections.first().unwrap();

        assert_eq!(section.name, "Bread");
        assert_eq!(section.items.len(), 1);
        assert_eq!(
            section.items.first().map(|item| item.category.as_str()),
            Some("Bread")
        );
    }

    #[test]
    fn menu_body_requires_success_status() {
        let menu = menu_from_value(&json!({
            "status": "error",
            "menu_sections": { "Bread": [{ "Item_ID": "b1" }] },
        }));

        assert!(menu.is_empty());
    }

    #[test]
    fn raw_coupon_maps_wire_fields() {
        let raw: RawCoupon = serde_json::from_value(json!({
            "id": 7,
            "code": "SAVE10",
            "type": "percent",
            "discountPercent": 10,
            "minOrderValue": 500,
        }))
        .unwrap();

        let coupon = raw.into_coupon();

        assert_eq!(coupon.id, "7");
        assert_eq!(coupon.rule, CouponRule::Percent);
        assert_eq!(coupon.discount_percent, 10);
        assert_eq!(coupon.min_order_value, 500);
    }

    #[test]
    fn combo_suggestion_extracts_extras() {
        let raw = json!({
            "Item_ID": "c9",
            "Item_Name": "Feast For Two",
            "Current_Price": 549,
            "Original_Price": 650,
            "Savings": 101,
            "Insight": "AI Pick",
            "Is_Personalized": true,
            "Combo_Items": ["Paneer Tikka", "Dal Makhani"],
        });

        let combo = combo_suggestion(&raw).unwrap();

        assert_eq!(combo.item.price, 549);
        assert_eq!(combo.item.original_price, Some(650));
        assert_eq!(combo.savings, 101);
        assert_eq!(combo.insight.as_deref(), Some("AI Pick"));
        assert!(combo.is_personalized);
        assert!(combo.item.flags.is_combo);
    }
}
