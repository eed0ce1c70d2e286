//! Reputation scores, staking and the leaderboard (`/reputation`).

use crate::{GatewayClient, GatewayError, ParseParamError};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StakeRequest {
    pub signal_id: u64,
    /// Amount in TON.
    pub amount: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UnstakeRequest {
    pub amount: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    Reputation,
    Stake,
    Accuracy,
}

impl FromStr for LeaderboardMetric {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reputation" => Ok(LeaderboardMetric::Reputation),
            "stake" => Ok(LeaderboardMetric::Stake),
            "accuracy" => Ok(LeaderboardMetric::Accuracy),
            _ => Err(ParseParamError::new("leaderboard metric", s)),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LeaderboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<LeaderboardMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Serialize)]
struct VerifyQuery {
    is_correct: bool,
}

impl GatewayClient {
    pub async fn reputation(&self, address: &str) -> Result<Value, GatewayError> {
        self.get(&["reputation", address]).await
    }

    pub async fn stake(&self, request: &StakeRequest) -> Result<Value, GatewayError> {
        self.post(&["reputation", "stake"], request).await
    }

    pub async fn unstake(&self, request: &UnstakeRequest) -> Result<Value, GatewayError> {
        self.post(&["reputation", "unstake"], request).await
    }

    pub async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Value, GatewayError> {
        self.get_query(&["reputation", "leaderboard"], query).await
    }

    pub async fn badges(&self, address: &str) -> Result<Value, GatewayError> {
        self.get(&["reputation", "badges", address]).await
    }

    pub async fn global_stats(&self) -> Result<Value, GatewayError> {
        self.get(&["reputation", "stats", "global"]).await
    }

    pub async fn verify_signal(
        &self,
        signal_id: u64,
        is_correct: bool,
    ) -> Result<Value, GatewayError> {
        let id = signal_id.to_string();
        self.post_query(
            &["reputation", "verify-signal", &id],
            &VerifyQuery { is_correct },
        )
        .await
    }
}
