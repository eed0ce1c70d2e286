//! Semantic search, entity lookup and text analysis (`/knowledge`).

use crate::data::LimitQuery;
use crate::{GatewayClient, GatewayError};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SemanticSearchRequest {
    pub query: String,
    /// Vector collection to search; the backend defaults to `Signal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SemanticSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            collection: None,
            limit: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TextRequest<'a> {
    pub text: &'a str,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct WalletEntityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_whale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TokenEntityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TrendingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GatewayClient {
    pub async fn semantic_search(
        &self,
        request: &SemanticSearchRequest,
    ) -> Result<Value, GatewayError> {
        self.post(&["knowledge", "search", "semantic"], request)
            .await
    }

    pub async fn wallets(&self, query: &WalletEntityQuery) -> Result<Value, GatewayError> {
        self.get_query(&["knowledge", "entities", "wallets"], query)
            .await
    }

    pub async fn tokens(&self, query: &TokenEntityQuery) -> Result<Value, GatewayError> {
        self.get_query(&["knowledge", "entities", "tokens"], query)
            .await
    }

    pub async fn protocols(&self, query: &LimitQuery) -> Result<Value, GatewayError> {
        self.get_query(&["knowledge", "entities", "protocols"], query)
            .await
    }

    pub async fn analyze_sentiment(&self, text: &str) -> Result<Value, GatewayError> {
        self.post(&["knowledge", "analyze", "sentiment"], &TextRequest { text })
            .await
    }

    pub async fn extract_entities(&self, text: &str) -> Result<Value, GatewayError> {
        self.post(&["knowledge", "analyze", "entities"], &TextRequest { text })
            .await
    }

    pub async fn summarize(&self, text: &str) -> Result<Value, GatewayError> {
        self.post(&["knowledge", "analyze", "summarize"], &TextRequest { text })
            .await
    }

    pub async fn trending_signals(&self, query: &TrendingQuery) -> Result<Value, GatewayError> {
        self.get_query(&["knowledge", "trending", "signals"], query)
            .await
    }

    pub async fn similar_transactions(
        &self,
        tx_hash: &str,
        query: &LimitQuery,
    ) -> Result<Value, GatewayError> {
        self.get_query(&["knowledge", "similar", "transactions", tx_hash], query)
            .await
    }
}
