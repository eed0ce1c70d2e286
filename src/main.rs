use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use infofi_gateway::ai::{AnomalyQuery, MarketAnalysisRequest, Severity, SignalQuery};
use infofi_gateway::config::{CliOverrides, ENV_BASE_URL, ENV_LOG_LEVEL, build_config};
use infofi_gateway::data::{NewsQuery, TransactionQuery, WhaleAlertQuery};
use infofi_gateway::knowledge::SemanticSearchRequest;
use infofi_gateway::marketplace::{AssetType, BrowseQuery, SortBy};
use infofi_gateway::reputation::{LeaderboardMetric, LeaderboardQuery};
use infofi_gateway::{GatewayClient, GatewayError, view};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// InfoFi dashboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "infofi", version, about, long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long, env = ENV_BASE_URL)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recent signals, whale alerts and global reputation stats
    Dashboard,
    /// Recent AI signals
    Signals {
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
        #[arg(long)]
        signal_type: Option<String>,
        #[arg(long)]
        min_confidence: Option<f64>,
    },
    /// Whale alerts
    Whales {
        #[arg(long, default_value_t = 24)]
        hours: u32,
        #[arg(long)]
        min_value: Option<f64>,
    },
    /// Recent on-chain transactions
    Transactions {
        #[arg(short, long, default_value_t = 100)]
        limit: u32,
        #[arg(long)]
        min_value: Option<f64>,
    },
    /// Wallet details
    Wallet { address: String },
    /// Off-chain news feed
    News {
        #[arg(long, default_value_t = 24)]
        hours: u32,
        #[arg(long)]
        source: Option<String>,
    },
    /// Semantic search over the knowledge base
    Search {
        query: String,
        #[arg(long)]
        collection: Option<String>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Sentiment and entities for a piece of text
    Sentiment { text: String },
    /// Anomaly detection
    Anomalies {
        #[arg(long, default_value_t = 24)]
        hours: u32,
        #[arg(long)]
        severity: Option<Severity>,
    },
    /// AI market analysis
    Market {
        #[arg(long, default_value_t = 24)]
        hours: u32,
    },
    /// Browse the marketplace
    Assets {
        #[arg(long)]
        asset_type: Option<AssetType>,
        #[arg(long)]
        sort_by: Option<SortBy>,
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
    /// Asset details
    Asset { id: String },
    /// Reputation leaderboard
    Leaderboard {
        #[arg(long)]
        metric: Option<LeaderboardMetric>,
        #[arg(short, long, default_value_t = 50)]
        limit: u32,
    },
    /// Reputation of an address
    Reputation { address: String },
    /// Backend health
    Health,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&CliOverrides {
        config_file: args.config.clone(),
        base_url: args.base_url.clone(),
        log_level: args.log_level.clone(),
    })
    .context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    let client = GatewayClient::new(&config)?;
    tracing::info!(api = %client.base_url(), "gateway ready");

    run(&client, args.command).await
}

async fn run(client: &GatewayClient, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => {
            let signal_query = SignalQuery {
                limit: Some(10),
                ..Default::default()
            };
            let alert_query = WhaleAlertQuery::default();
            let (signals, alerts, stats) = futures::join!(
                client.recent_signals(&signal_query),
                client.whale_alerts(&alert_query),
                client.global_stats(),
            );

            let stats = loaded(stats, "global stats");
            println!("== Network ==");
            for key in ["total_creators", "total_signals", "total_staked", "average_accuracy"] {
                println!("{:>16}: {}", key, view::field_or_placeholder(stats.as_ref(), key));
            }
            println!("\n== Recent signals ==");
            println!("{}", view::render_signals(loaded(signals, "signals").as_ref()));
            println!("\n== Whale alerts ==");
            println!("{}", view::render_whale_alerts(loaded(alerts, "whale alerts").as_ref()));
        }
        Command::Signals {
            limit,
            signal_type,
            min_confidence,
        } => {
            let body = client
                .recent_signals(&SignalQuery {
                    limit: Some(limit),
                    signal_type,
                    min_confidence,
                })
                .await;
            println!("{}", view::render_signals(loaded(body, "signals").as_ref()));
        }
        Command::Whales { hours, min_value } => {
            let body = client
                .whale_alerts(&WhaleAlertQuery {
                    hours: Some(hours),
                    min_value,
                })
                .await;
            println!("{}", view::render_whale_alerts(loaded(body, "whale alerts").as_ref()));
        }
        Command::Transactions { limit, min_value } => {
            let body = client
                .transactions(&TransactionQuery {
                    limit: Some(limit),
                    min_value,
                })
                .await;
            let body = loaded(body, "transactions");
            println!("{}", view::render_json(body.as_ref(), view::NO_TRANSACTIONS));
        }
        Command::Wallet { address } => {
            let body = client
                .wallet_info(&address)
                .await
                .with_context(|| format!("Failed to load wallet {}", address))?;
            print_json(&body)?;
        }
        Command::News { hours, source } => {
            let body = client
                .news(&NewsQuery {
                    hours: Some(hours),
                    source,
                })
                .await;
            let body = loaded(body, "news");
            println!("{}", view::render_json(body.as_ref(), view::NO_NEWS));
        }
        Command::Search {
            query,
            collection,
            limit,
        } => {
            let body = client
                .semantic_search(&SemanticSearchRequest {
                    query,
                    collection,
                    limit,
                })
                .await;
            let body = loaded(body, "search results");
            println!("{}", view::render_json(body.as_ref(), view::NO_RESULTS));
        }
        Command::Sentiment { text } => {
            let (sentiment, entities) = futures::join!(
                client.analyze_sentiment(&text),
                client.extract_entities(&text),
            );
            println!("== Sentiment ==");
            let sentiment = loaded(sentiment, "sentiment");
            println!("{}", view::render_json(sentiment.as_ref(), view::NO_ANALYSIS));
            println!("\n== Entities ==");
            let entities = loaded(entities, "entities");
            println!("{}", view::render_json(entities.as_ref(), view::NO_ANALYSIS));
        }
        Command::Anomalies { hours, severity } => {
            let body = client
                .detect_anomalies(&AnomalyQuery {
                    timeframe_hours: Some(hours),
                    severity,
                })
                .await;
            let body = loaded(body, "anomalies");
            println!("{}", view::render_json(body.as_ref(), view::NO_ANOMALIES));
        }
        Command::Market { hours } => {
            let body = client
                .analyze_market(&MarketAnalysisRequest {
                    timeframe_hours: Some(hours),
                    ..Default::default()
                })
                .await;
            let body = loaded(body, "market analysis");
            println!("{}", view::render_json(body.as_ref(), view::NO_ANALYSIS));
        }
        Command::Assets {
            asset_type,
            sort_by,
            limit,
        } => {
            let body = client
                .browse_assets(&BrowseQuery {
                    asset_type,
                    sort_by,
                    limit: Some(limit),
                    ..Default::default()
                })
                .await;
            println!("{}", view::render_assets(loaded(body, "assets").as_ref()));
        }
        Command::Asset { id } => {
            let body = client
                .asset_details(&id)
                .await
                .with_context(|| format!("Failed to load asset {}", id))?;
            print_json(&body)?;
        }
        Command::Leaderboard { metric, limit } => {
            let body = client
                .leaderboard(&LeaderboardQuery {
                    metric,
                    limit: Some(limit),
                })
                .await;
            println!("{}", view::render_leaderboard(loaded(body, "leaderboard").as_ref()));
        }
        Command::Reputation { address } => {
            let body = client
                .reputation(&address)
                .await
                .with_context(|| format!("Failed to load reputation for {}", address))?;
            print_json(&body)?;
        }
        Command::Health => {
            let body = loaded(client.health().await, "health");
            println!("status:      {}", view::field_or_placeholder(body.as_ref(), "status"));
            println!("version:     {}", view::field_or_placeholder(body.as_ref(), "version"));
            println!("environment: {}", view::field_or_placeholder(body.as_ref(), "environment"));
        }
    }
    Ok(())
}

/// Pages show a placeholder instead of failing; detail lookups still error.
fn loaded(result: Result<Value, GatewayError>, what: &str) -> Option<Value> {
    match result {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!(error = %e, "could not load {}", what);
            None
        }
    }
}

fn print_json(body: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    fn env_of(id: &str) -> Option<String> {
        let command = Args::command();
        let arg = command.get_arguments().find(|a| a.get_id() == id)?;
        arg.get_env().and_then(OsStr::to_str).map(str::to_string)
    }

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_overrides_read_from_environment() {
        assert_eq!(env_of("base_url").as_deref(), Some(ENV_BASE_URL));
        assert_eq!(env_of("log_level").as_deref(), Some(ENV_LOG_LEVEL));
    }

    #[test]
    fn test_flag_wins_over_environment() {
        let args = Args::try_parse_from([
            "infofi",
            "--base-url",
            "http://gateway:9000",
            "--log-level",
            "debug",
            "health",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://gateway:9000"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Health));
    }
}
