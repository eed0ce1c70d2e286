//! On-chain and off-chain data feeds (`/data`).

use crate::{GatewayClient, GatewayError, ParseParamError};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Minimum value in TON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct WhaleAlertQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Telegram,
    All,
}

impl FromStr for SocialPlatform {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(SocialPlatform::Twitter),
            "telegram" => Ok(SocialPlatform::Telegram),
            "all" => Ok(SocialPlatform::All),
            _ => Err(ParseParamError::new("platform", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SocialSentimentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<SocialPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GithubActivityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LimitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl LimitQuery {
    pub fn new(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

impl GatewayClient {
    pub async fn transactions(&self, query: &TransactionQuery) -> Result<Value, GatewayError> {
        self.get_query(&["data", "on-chain", "transactions"], query)
            .await
    }

    pub async fn whale_alerts(&self, query: &WhaleAlertQuery) -> Result<Value, GatewayError> {
        self.get_query(&["data", "on-chain", "whale-alerts"], query)
            .await
    }

    pub async fn wallet_info(&self, address: &str) -> Result<Value, GatewayError> {
        self.get(&["data", "on-chain", "wallet", address]).await
    }

    pub async fn jetton_transfers(&self, query: &LimitQuery) -> Result<Value, GatewayError> {
        self.get_query(&["data", "on-chain", "jetton-transfers"], query)
            .await
    }

    pub async fn news(&self, query: &NewsQuery) -> Result<Value, GatewayError> {
        self.get_query(&["data", "off-chain", "news"], query).await
    }

    pub async fn social_sentiment(
        &self,
        query: &SocialSentimentQuery,
    ) -> Result<Value, GatewayError> {
        self.get_query(&["data", "off-chain", "social-sentiment"], query)
            .await
    }

    pub async fn github_activity(
        &self,
        query: &GithubActivityQuery,
    ) -> Result<Value, GatewayError> {
        self.get_query(&["data", "off-chain", "github-activity"], query)
            .await
    }

    pub async fn whale_behavior(&self, address: &str) -> Result<Value, GatewayError> {
        self.get(&["data", "analytics", "whale-behavior", address])
            .await
    }
}
