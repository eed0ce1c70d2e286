//! Market/wallet analysis, signals and anomaly detection (`/ai`).

use crate::{GatewayClient, GatewayError, ParseParamError};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct MarketAnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_on_chain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_off_chain: Option<bool>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WalletAnalysisRequest {
    pub address: String,
    /// Number of transactions to analyze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl WalletAnalysisRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            depth: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SignalQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_type: Option<String>,
    /// Between 0.0 and 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl FromStr for Severity {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(ParseParamError::new("severity", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AnomalyQuery {
    /// Up to 168 (one week).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionTimeframe {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    OneWeek,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PredictionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<PredictionTimeframe>,
}

impl GatewayClient {
    pub async fn analyze_market(
        &self,
        request: &MarketAnalysisRequest,
    ) -> Result<Value, GatewayError> {
        self.post(&["ai", "analyze", "market"], request).await
    }

    pub async fn analyze_wallet(
        &self,
        request: &WalletAnalysisRequest,
    ) -> Result<Value, GatewayError> {
        self.post(&["ai", "analyze", "wallet"], request).await
    }

    pub async fn recent_signals(&self, query: &SignalQuery) -> Result<Value, GatewayError> {
        self.get_query(&["ai", "signals", "recent"], query).await
    }

    pub async fn signal_types(&self) -> Result<Value, GatewayError> {
        self.get(&["ai", "signals", "types"]).await
    }

    pub async fn detect_anomalies(&self, query: &AnomalyQuery) -> Result<Value, GatewayError> {
        self.get_query(&["ai", "anomalies", "detect"], query).await
    }

    /// Forwards a whale transaction record as-is.
    pub async fn generate_whale_signal(&self, whale_tx: &Value) -> Result<Value, GatewayError> {
        self.post(&["ai", "signals", "generate", "whale"], whale_tx)
            .await
    }

    pub async fn generate_sentiment_signal(
        &self,
        sentiment: &Value,
    ) -> Result<Value, GatewayError> {
        self.post(&["ai", "signals", "generate", "sentiment"], sentiment)
            .await
    }

    pub async fn price_predictions(&self, query: &PredictionQuery) -> Result<Value, GatewayError> {
        self.get_query(&["ai", "predictions", "price"], query).await
    }
}
