//! Command-line driver: one subcommand per backend endpoint plus theme control.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::api::{
    ApiClient, ComparisonRequest, ForecastRequest, FundFilter, MarketRegime,
    RecommendationRequest, RiskTolerance, TopPerformersQuery, WhatIfRequest,
};
use crate::config::Config;
use crate::ui::theme::{FileStorage, ThemeSetting, ThemeStore};

#[derive(Debug, Parser)]
#[command(name = "fundscope", version, about = "Mutual fund dashboard client")]
pub struct Cli {
    /// Backend base URL (overrides config file and FUNDSCOPE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Backend liveness check
    Health,
    /// List asset management companies
    Amcs,
    /// List fund categories with fund counts
    Categories,
    /// Dashboard overview metrics
    Dashboard,
    /// Market-wide trend aggregates
    Trends,
    /// Descriptive statistics over all funds
    Descriptive,
    /// Correlations, distributions and category trends
    Enhanced,
    /// Search funds
    Funds {
        #[arg(long)]
        amc: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        risk_level: Option<u8>,
        #[arg(long)]
        min_rating: Option<u8>,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Fund recommendations for an amount and horizon
    Recommend {
        #[arg(long)]
        amount: i64,
        /// Horizon in years
        #[arg(long)]
        tenure: u32,
        #[arg(long, value_enum, default_value_t = RiskTolerance::Moderate)]
        risk: RiskTolerance,
        #[arg(long)]
        amc: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Predicted returns for one fund
    Forecast {
        fund_name: String,
        #[arg(long, default_value_t = 5)]
        horizon: u32,
    },
    /// Compare funds side by side
    Compare {
        #[arg(required = true)]
        funds: Vec<String>,
        /// Metric to compare (repeatable; defaults to returns, risk and expense ratio)
        #[arg(long = "metric")]
        metrics: Vec<String>,
    },
    /// Leaderboard by metric
    Top {
        #[arg(long, default_value = "return_3yr")]
        metric: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Live market condition indicator
    Market,
    /// Invest-now versus wait scenarios
    WhatIf {
        #[arg(required = true)]
        funds: Vec<String>,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value_t = 3)]
        years: u32,
        #[arg(long, value_enum)]
        regime: Option<MarketRegime>,
    },
    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set { value: ThemeSetting },
}

impl Cli {
    /// Load config from `--config` (or the default path), then apply `--api-url`.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

/// Execute `command`, writing JSON (or the theme name) to `out`.
pub async fn run(command: Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let client = ApiClient::from_config(&config.api)?;
    match command {
        Command::Theme { action } => run_theme(action, config, out),
        Command::Health => print_json(out, &client.health_check().await?),
        Command::Amcs => print_json(out, &client.get_amcs().await?),
        Command::Categories => print_json(out, &client.get_categories().await?),
        Command::Dashboard => print_json(out, &client.get_dashboard_data().await?),
        Command::Trends => print_json(out, &client.get_market_trends().await?),
        Command::Descriptive => print_json(out, &client.get_descriptive_analysis().await?),
        Command::Enhanced => print_json(out, &client.get_enhanced_analysis().await?),
        Command::Funds {
            amc,
            category,
            risk_level,
            min_rating,
            limit,
        } => {
            let filter = FundFilter {
                amc_name: amc,
                category,
                risk_level,
                min_rating,
                limit,
            };
            print_json(out, &client.filter_funds(&filter).await?)
        }
        Command::Recommend {
            amount,
            tenure,
            risk,
            amc,
            category,
        } => {
            let request = RecommendationRequest {
                amc_name: amc,
                category,
                amount,
                tenure,
                risk_tolerance: risk,
            };
            print_json(out, &client.get_recommendations(&request).await?)
        }
        Command::Forecast { fund_name, horizon } => {
            let request = ForecastRequest { fund_name, horizon };
            print_json(out, &client.get_forecast(&request).await?)
        }
        Command::Compare { funds, metrics } => {
            let mut request = ComparisonRequest::new(funds);
            if !metrics.is_empty() {
                request.metrics = metrics;
            }
            print_json(out, &client.compare_funds(&request).await?)
        }
        Command::Top {
            metric,
            category,
            limit,
        } => {
            let query = TopPerformersQuery::new(metric, category, limit);
            print_json(out, &client.get_top_performers(&query).await?)
        }
        Command::Market => print_json(out, &client.get_market_condition().await?),
        Command::WhatIf {
            funds,
            amount,
            years,
            regime,
        } => {
            let request = WhatIfRequest {
                fund_names: funds,
                investment_amount: amount,
                duration_years: years,
                market_regime: regime,
            };
            print_json(out, &client.run_what_if_simulation(&request).await?)
        }
    }
}

fn run_theme(action: ThemeAction, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let storage = FileStorage::new(config.theme.resolved_storage_dir());
    let store = ThemeStore::new(storage);
    let setting = match action {
        ThemeAction::Show => store.theme(),
        ThemeAction::Toggle => store.toggle(),
        ThemeAction::Set { value } => store.set(value),
    };
    writeln!(out, "{}", setting).context("Failed to write output")?;
    Ok(())
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    writeln!(out, "{}", rendered).context("Failed to write output")?;
    Ok(())
}
