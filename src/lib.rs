//! Typed gateway client for the InfoFi REST backend.
//!
//! Every operation issues exactly one HTTP request against the configured
//! base URL and hands back the JSON body as-is. Responses are not validated;
//! the [`view`] module reads the handful of shapes the dashboard renders.

pub mod ai;
pub mod client;
pub mod config;
pub mod data;
pub mod knowledge;
pub mod marketplace;
pub mod reputation;
pub mod view;

pub use client::{GatewayClient, GatewayError};
pub use config::{ConfigError, GatewayConfig, LogLevel};

use thiserror::Error;

/// A string did not name a known value of an enumerated request parameter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseParamError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseParamError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
