//! Info-asset marketplace and creator subscriptions (`/marketplace`).

use crate::{GatewayClient, GatewayError, ParseParamError};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Token,
    Nft,
}

impl FromStr for AssetType {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token" => Ok(AssetType::Token),
            "nft" => Ok(AssetType::Nft),
            _ => Err(ParseParamError::new("asset type", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateAssetRequest {
    pub asset_type: AssetType,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Price in TON.
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake_amount: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Recent,
    Popular,
    PriceAsc,
    PriceDesc,
}

impl FromStr for SortBy {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "recent" => Ok(SortBy::Recent),
            "popular" => Ok(SortBy::Popular),
            "price_asc" => Ok(SortBy::PriceAsc),
            "price_desc" => Ok(SortBy::PriceDesc),
            _ => Err(ParseParamError::new("sort order", s)),
        }
    }
}

/// Marketplace filters; `asset_type: None` browses every type.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct BrowseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Basic,
    Premium,
    Elite,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubscriptionRequest {
    pub creator_address: String,
    pub tier: SubscriptionTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorTimeframe {
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    OneWeek,
    #[serde(rename = "30d")]
    OneMonth,
    #[serde(rename = "all")]
    AllTime,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CreatorMetric {
    Revenue,
    Subscribers,
    Rating,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TopCreatorsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<CreatorTimeframe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<CreatorMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SalesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe_days: Option<u32>,
}

#[derive(Serialize)]
struct RatingQuery {
    rating: u8,
}

impl GatewayClient {
    pub async fn create_asset(&self, request: &CreateAssetRequest) -> Result<Value, GatewayError> {
        self.post(&["marketplace", "assets", "create"], request)
            .await
    }

    pub async fn browse_assets(&self, query: &BrowseQuery) -> Result<Value, GatewayError> {
        self.get_query(&["marketplace", "assets", "browse"], query)
            .await
    }

    pub async fn asset_details(&self, asset_id: &str) -> Result<Value, GatewayError> {
        self.get(&["marketplace", "assets", asset_id]).await
    }

    pub async fn purchase_asset(&self, asset_id: &str) -> Result<Value, GatewayError> {
        self.post_empty(&["marketplace", "assets", asset_id, "purchase"])
            .await
    }

    pub async fn subscribe(&self, request: &SubscriptionRequest) -> Result<Value, GatewayError> {
        self.post(&["marketplace", "subscriptions", "subscribe"], request)
            .await
    }

    pub async fn my_subscriptions(&self) -> Result<Value, GatewayError> {
        self.get(&["marketplace", "subscriptions", "my-subscriptions"])
            .await
    }

    pub async fn top_creators(&self, query: &TopCreatorsQuery) -> Result<Value, GatewayError> {
        self.get_query(&["marketplace", "creators", "top"], query)
            .await
    }

    pub async fn sales_analytics(&self, query: &SalesQuery) -> Result<Value, GatewayError> {
        self.get_query(&["marketplace", "analytics", "sales"], query)
            .await
    }

    /// Rates an asset from 1 to 5. The range is enforced by the backend.
    pub async fn rate_asset(&self, asset_id: &str, rating: u8) -> Result<Value, GatewayError> {
        self.post_query(
            &["marketplace", "assets", asset_id, "rate"],
            &RatingQuery { rating },
        )
        .await
    }
}
