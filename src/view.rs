//! Read models for the dashboard pages.
//!
//! Extraction is lenient: every field is optional, wrong types count as
//! absent, and records that are not JSON objects are skipped. Renderers fall
//! back to a placeholder line when there is nothing to show.

use serde_json::Value;
use std::fmt::Write;

pub const NO_SIGNALS: &str = "No signals available";
pub const NO_WHALE_ALERTS: &str = "No whale alerts";
pub const NO_LEADERBOARD: &str = "No leaderboard data";
pub const NO_ASSETS: &str = "No assets listed";
pub const NO_TRANSACTIONS: &str = "No transactions";
pub const NO_NEWS: &str = "No news";
pub const NO_RESULTS: &str = "No results";
pub const NO_ANOMALIES: &str = "No anomalies detected";
pub const NO_ANALYSIS: &str = "No analysis available";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    pub id: Option<String>,
    pub signal_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub confidence: Option<f64>,
    pub severity: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhaleAlert {
    pub hash: Option<String>,
    pub value_ton: Option<f64>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: Option<u64>,
    pub address: Option<String>,
    pub total_signals: Option<u64>,
    pub accuracy: Option<f64>,
    pub reputation_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Asset {
    pub id: Option<String>,
    pub title: Option<String>,
    pub asset_type: Option<String>,
    pub price: Option<f64>,
    pub creator: Option<String>,
}

impl Signal {
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            id: text(value, "id"),
            signal_type: text(value, "signal_type"),
            title: text(value, "title"),
            description: text(value, "description"),
            confidence: number(value, "confidence"),
            severity: text(value, "severity"),
            tags: value
                .get("tags")
                .and_then(Value::as_array)
                .map(|tags| tags.iter().filter_map(scalar).collect())
                .unwrap_or_default(),
        })
    }
}

impl WhaleAlert {
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            hash: text(value, "hash"),
            value_ton: number(value, "value_ton"),
            source: text(value, "source"),
            destination: text(value, "destination"),
            severity: text(value, "severity"),
        })
    }
}

impl LeaderboardEntry {
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            rank: value.get("rank").and_then(Value::as_u64),
            address: text(value, "address"),
            total_signals: value.get("total_signals").and_then(Value::as_u64),
            accuracy: number(value, "accuracy"),
            reputation_score: number(value, "reputation_score"),
        })
    }
}

impl Asset {
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object()?;
        Some(Self {
            id: text(value, "id").or_else(|| text(value, "asset_id")),
            title: text(value, "title"),
            asset_type: text(value, "asset_type").or_else(|| text(value, "type")),
            price: number(value, "price"),
            creator: text(value, "creator"),
        })
    }
}

/// Records under `key`, or the body itself when the backend returns a bare array.
fn records<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn signals(body: &Value) -> Vec<Signal> {
    records(body, "signals")
        .iter()
        .filter_map(Signal::from_value)
        .collect()
}

pub fn whale_alerts(body: &Value) -> Vec<WhaleAlert> {
    records(body, "alerts")
        .iter()
        .filter_map(WhaleAlert::from_value)
        .collect()
}

pub fn leaderboard(body: &Value) -> Vec<LeaderboardEntry> {
    records(body, "leaderboard")
        .iter()
        .filter_map(LeaderboardEntry::from_value)
        .collect()
}

pub fn assets(body: &Value) -> Vec<Asset> {
    records(body, "assets")
        .iter()
        .filter_map(Asset::from_value)
        .collect()
}

/// `body[key]` as display text, or [`NOT_AVAILABLE`].
pub fn field_or_placeholder(body: Option<&Value>, key: &str) -> String {
    body.and_then(|b| b.get(key))
        .and_then(scalar)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn render_signals(body: Option<&Value>) -> String {
    let rows = body.map(signals).unwrap_or_default();
    if rows.is_empty() {
        return NO_SIGNALS.to_string();
    }

    let mut out = String::new();
    for signal in rows {
        let _ = write!(
            out,
            "[{}] {}",
            signal.severity.as_deref().unwrap_or("info"),
            signal.title.as_deref().unwrap_or("Untitled signal"),
        );
        if let Some(confidence) = signal.confidence {
            let _ = write!(out, " ({:.0}% confidence)", confidence * 100.0);
        }
        if let Some(kind) = &signal.signal_type {
            let _ = write!(out, " <{}>", kind);
        }
        out.push('\n');
        if let Some(description) = &signal.description {
            let _ = writeln!(out, "    {}", description);
        }
        if !signal.tags.is_empty() {
            let _ = writeln!(out, "    #{}", signal.tags.join(" #"));
        }
    }
    out.truncate(out.trim_end().len());
    out
}

pub fn render_whale_alerts(body: Option<&Value>) -> String {
    let rows = body.map(whale_alerts).unwrap_or_default();
    if rows.is_empty() {
        return NO_WHALE_ALERTS.to_string();
    }

    rows.iter()
        .map(|alert| {
            format!(
                "[{}] {} TON  {} -> {}  ({})",
                alert.severity.as_deref().unwrap_or("unknown"),
                alert
                    .value_ton
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                shorten(alert.source.as_deref().unwrap_or(NOT_AVAILABLE)),
                shorten(alert.destination.as_deref().unwrap_or(NOT_AVAILABLE)),
                shorten(alert.hash.as_deref().unwrap_or(NOT_AVAILABLE)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_leaderboard(body: Option<&Value>) -> String {
    let rows = body.map(leaderboard).unwrap_or_default();
    if rows.is_empty() {
        return NO_LEADERBOARD.to_string();
    }

    let mut out = format!(
        "{:>4}  {:<16}  {:>7}  {:>8}  {:>10}",
        "#", "address", "signals", "accuracy", "reputation"
    );
    for (i, entry) in rows.iter().enumerate() {
        let rank = entry.rank.unwrap_or(i as u64 + 1);
        let _ = write!(
            out,
            "\n{:>4}  {:<16}  {:>7}  {:>8}  {:>10}",
            rank,
            shorten(entry.address.as_deref().unwrap_or(NOT_AVAILABLE)),
            entry
                .total_signals
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".into()),
            entry
                .accuracy
                .map(|a| format!("{:.1}%", a * 100.0))
                .unwrap_or_else(|| "-".into()),
            entry
                .reputation_score
                .map(|s| format!("{:.0}", s))
                .unwrap_or_else(|| "-".into()),
        );
    }
    out
}

pub fn render_assets(body: Option<&Value>) -> String {
    let rows = body.map(assets).unwrap_or_default();
    if rows.is_empty() {
        return NO_ASSETS.to_string();
    }

    rows.iter()
        .map(|asset| {
            format!(
                "{}  [{}] {}  {} TON  by {}",
                asset.id.as_deref().unwrap_or("-"),
                asset.asset_type.as_deref().unwrap_or("asset"),
                asset.title.as_deref().unwrap_or("Untitled"),
                asset
                    .price
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                shorten(asset.creator.as_deref().unwrap_or(NOT_AVAILABLE)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON for detail-style pages, or `placeholder` when nothing loaded.
pub fn render_json(body: Option<&Value>, placeholder: &str) -> String {
    match body {
        None | Some(Value::Null) => placeholder.to_string(),
        Some(body) => serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()),
    }
}

/// `EQD4FPq-PRDieyQKkizFTRtSDyucUIqrj0v_zXJmqaDp6_0t` -> `EQD4FP…p6_0t`.
pub fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}…{}", head, tail)
}

fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar)
}

fn number(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Strings, numbers and booleans as text; everything else is absent.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
