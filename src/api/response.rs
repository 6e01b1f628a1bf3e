//! Response shapes returned by the backend.
//!
//! Documented fields are typed and required, so a body that does not match
//! fails to decode instead of leaking into the caller. Every struct keeps the
//! keys it does not know in `extra`, so decoding never drops data.
//!
//! Fractional values are held as [`Number`] so an integer stays an integer on
//! re-encoding. Keys the backend may send as `null` or omit are read from
//! `extra` through accessors rather than typed as `Option`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A JSON object whose inner layout the client does not interpret.
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
    pub models_loaded: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmcList {
    pub amcs: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<CategoryCount>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub market_overview: JsonObject,
    /// Best fund per category, keyed by category name.
    pub top_performers: BTreeMap<String, JsonObject>,
    pub model_performance: JsonObject,
    pub last_updated: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    pub performance_distribution: JsonObject,
    pub risk_appetite: JsonObject,
    pub amc_market_share: JsonObject,
    pub category_aum: JsonObject,
    pub expense_trends: JsonObject,
    pub rating_distribution: JsonObject,
    pub sharpe_analysis: JsonObject,
    pub market_summary: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_funds: u64,
    pub unique_amcs: u64,
    pub data_points: u64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveAnalysis {
    pub summary: AnalysisSummary,
    pub category_distribution: JsonObject,
    pub risk_distribution: JsonObject,
    pub rating_distribution: JsonObject,
    pub return_statistics: JsonObject,
    pub top_performing_amcs: JsonObject,
    pub expense_analysis: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedAnalysis {
    pub correlation_analysis: JsonObject,
    pub category_trends: JsonObject,
    pub risk_return_analysis: JsonObject,
    pub expense_impact: JsonObject,
    pub age_performance: JsonObject,
    pub distribution_analysis: JsonObject,
    pub market_insights: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One fund row as returned by `/api/funds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    pub scheme_name: String,
    pub amc_name: String,
    pub return_1yr: Number,
    pub return_3yr: Number,
    pub return_5yr: Number,
    pub risk_level: i64,
    pub rating: i64,
    pub expense_ratio: Number,
    pub fund_size: Number,
    pub fund_age: Number,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundList {
    pub funds: Vec<FundRecord>,
    pub total_found: u64,
    pub filters_applied: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// `"success"` or `"partial_match"` when the requested AMC had no fit.
    pub status: String,
    /// Display-ready rows; the backend pre-formats most values as strings.
    pub recommendations: Vec<JsonObject>,
    pub investment_summary: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Recommendations {
    pub fn is_partial_match(&self) -> bool {
        self.status == "partial_match"
    }

    /// Human-readable note, absent or `null` on plain success.
    pub fn message(&self) -> Option<&str> {
        self.extra.get("message").and_then(Value::as_str)
    }

    pub fn diversification_analysis(&self) -> Option<&JsonObject> {
        self.extra
            .get("diversification_analysis")
            .and_then(Value::as_object)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub projected_value: Number,
    pub return_percentage: Number,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub fund_name: String,
    pub amc_name: String,
    pub current_metrics: JsonObject,
    /// Keyed by horizon, e.g. `"3_year"`.
    pub predictions: BTreeMap<String, JsonObject>,
    pub monthly_projections: Vec<MonthlyProjection>,
    pub forecast_horizon: u32,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One object per requested fund; unknown funds carry an `error` key.
    pub comparison: Vec<JsonObject>,
    pub metrics_compared: Vec<String>,
    pub total_funds: u64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFund {
    pub rank: u32,
    pub scheme_name: String,
    pub amc_name: String,
    pub metric_value: Number,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformers {
    pub metric: String,
    /// `"All"` when no category filter was applied.
    pub category: String,
    pub top_performers: Vec<RankedFund>,
    pub total_evaluated: u64,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCondition {
    pub ticker: String,
    pub condition: String,
    pub recommendation: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub wait_months: u32,
    pub market_regime: String,
    pub fund_results: Vec<JsonObject>,
    pub aggregate: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfSimulation {
    pub investment_amount: Number,
    pub duration_years: u32,
    pub market_regime: String,
    pub scenarios: Vec<Scenario>,
    pub summary: JsonObject,
    #[serde(flatten)]
    pub extra: JsonObject,
}
