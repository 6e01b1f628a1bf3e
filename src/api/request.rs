//! Typed request payloads. Field names match the backend's JSON exactly.

use clap::ValueEnum;
use serde::Serialize;

/// Investor risk appetite accepted by `/api/recommend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

/// Market regime override for the what-if simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarketRegime {
    Bull,
    Sideways,
    Volatile,
}

/// Search filter for `/api/funds`. Unset filters are omitted from the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
    pub limit: u32,
}

impl Default for FundFilter {
    fn default() -> Self {
        Self {
            amc_name: None,
            category: None,
            risk_level: None,
            min_rating: None,
            limit: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Amount to invest, in whole currency units.
    pub amount: i64,
    /// Investment horizon in years.
    pub tenure: u32,
    pub risk_tolerance: RiskTolerance,
}

impl RecommendationRequest {
    pub fn new(amount: i64, tenure: u32) -> Self {
        Self {
            amc_name: None,
            category: None,
            amount,
            tenure,
            risk_tolerance: RiskTolerance::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRequest {
    pub fund_name: String,
    /// Projection horizon in years; the backend projects monthly values for 1, 3 or 5.
    pub horizon: u32,
}

impl ForecastRequest {
    pub fn new(fund_name: impl Into<String>) -> Self {
        Self {
            fund_name: fund_name.into(),
            horizon: 5,
        }
    }
}

/// Metrics compared when the caller does not pick any.
pub const DEFAULT_COMPARISON_METRICS: &[&str] = &[
    "return_1yr",
    "return_3yr",
    "return_5yr",
    "risk_level",
    "expense_ratio",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRequest {
    pub fund_names: Vec<String>,
    pub metrics: Vec<String>,
}

impl ComparisonRequest {
    pub fn new(fund_names: Vec<String>) -> Self {
        Self {
            fund_names,
            metrics: DEFAULT_COMPARISON_METRICS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Leaderboard query for `/api/top-performers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPerformersQuery {
    pub metric: String,
    pub category: Option<String>,
    pub limit: u32,
}

impl Default for TopPerformersQuery {
    fn default() -> Self {
        Self {
            metric: "return_3yr".to_string(),
            category: None,
            limit: 10,
        }
    }
}

impl TopPerformersQuery {
    pub fn new(metric: impl Into<String>, category: Option<String>, limit: u32) -> Self {
        Self {
            metric: metric.into(),
            category,
            limit,
        }
    }

    /// Query pairs in wire order: `metric`, `limit`, then `category` if set.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("metric".to_string(), self.metric.clone()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIfRequest {
    pub fund_names: Vec<String>,
    pub investment_amount: f64,
    /// 1, 3 or 5 years.
    pub duration_years: u32,
    /// Detected by the backend when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_regime: Option<MarketRegime>,
}
