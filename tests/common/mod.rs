//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]


use fundscope::api::{
    ApiClient, ApiError, ComparisonRequest, Endpoint, ForecastRequest, FundFilter, MarketRegime,
    RecommendationRequest, TopPerformersQuery, WhatIfRequest,
};
use fundscope::ui::theme::{PreferenceStorage, StorageError};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL that refuses connections.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Create a temporary config file pointing at `base_url`, with theme storage
/// inside the same temp dir.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let storage_dir = temp_dir.path().join("state");

    let content = format!(
        r#"[api]
base_url = "{}"

[theme]
storage_dir = "{}"

[logging]
filter = "off"
"#,
        base_url,
        storage_dir.display()
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Call the typed client method for `endpoint` with a representative
/// argument, re-encoding the typed result as JSON.
pub async fn call_typed(client: &ApiClient, endpoint: Endpoint) -> Result<Value, ApiError> {
    fn encode<T: serde::Serialize>(value: T) -> Value {
        serde_json::to_value(value).expect("typed response re-encodes")
    }

    Ok(match endpoint {
        Endpoint::Health => encode(client.health_check().await?),
        Endpoint::Amcs => encode(client.get_amcs().await?),
        Endpoint::Categories => encode(client.get_categories().await?),
        Endpoint::DashboardData => encode(client.get_dashboard_data().await?),
        Endpoint::MarketTrends => encode(client.get_market_trends().await?),
        Endpoint::DescriptiveAnalysis => encode(client.get_descriptive_analysis().await?),
        Endpoint::EnhancedAnalysis => encode(client.get_enhanced_analysis().await?),
        Endpoint::Funds => encode(
            client
                .filter_funds(&FundFilter {
                    category: Some("Equity".to_string()),
                    ..FundFilter::default()
                })
                .await?,
        ),
        Endpoint::Recommend => {
            encode(client.get_recommendations(&RecommendationRequest::new(100_000, 3)).await?)
        }
        Endpoint::Forecast => encode(
            client
                .get_forecast(&ForecastRequest::new("Axis Bluechip Fund"))
                .await?,
        ),
        Endpoint::CompareFunds => encode(
            client
                .compare_funds(&ComparisonRequest::new(vec![
                    "Axis Bluechip Fund".to_string(),
                    "HDFC Top 100 Fund".to_string(),
                ]))
                .await?,
        ),
        Endpoint::TopPerformers => encode(
            client
                .get_top_performers(&TopPerformersQuery::default())
                .await?,
        ),
        Endpoint::MarketCondition => encode(client.get_market_condition().await?),
        Endpoint::WhatIfSimulation => encode(
            client
                .run_what_if_simulation(&WhatIfRequest {
                    fund_names: vec!["Axis Bluechip Fund".to_string()],
                    investment_amount: 100_000.0,
                    duration_years: 3,
                    market_regime: Some(MarketRegime::Bull),
                })
                .await?,
        ),
    })
}

/// A realistic backend body for `endpoint`.
///
/// Bodies mix integer-valued and fractional numbers and carry explicit `null`
/// keys, as pandas-backed responses do.
pub fn sample_body(endpoint: Endpoint) -> Value {
    match endpoint {
        Endpoint::Health => json!({
            "message": "Mutual Fund AI/ML API is running",
            "status": "healthy",
            "models_loaded": true
        }),
        Endpoint::Amcs => json!({
            "amcs": ["Axis Mutual Fund", "HDFC Mutual Fund", "SBI Mutual Fund"]
        }),
        Endpoint::Categories => json!({
            "categories": [
                {"name": "Equity", "count": 412},
                {"name": "Debt", "count": 230},
                {"name": "Hybrid", "count": 118}
            ]
        }),
        Endpoint::DashboardData => json!({
            "market_overview": {
                "total_funds": 814,
                "total_amcs": 41,
                "avg_1yr_return": 14.21,
                "avg_3yr_return": 17.85,
                "avg_5yr_return": 13.02,
                "total_aum": 2451987.5
            },
            "top_performers": {
                "Equity": {
                    "fund_name": "Quant Small Cap Fund",
                    "amc_name": "Quant Mutual Fund",
                    "return_3yr": 45.3,
                    "risk_level": 6,
                    "rating": 5
                }
            },
            "model_performance": {
                "3_year_model": {"accuracy": "96.4%", "rmse": 2.303}
            },
            "last_updated": "2025-12-18"
        }),
        Endpoint::MarketTrends => json!({
            "performance_distribution": {"excellent": 40, "good": 310, "average": 280, "below_average": 184},
            "risk_appetite": {"conservative": 210, "moderate": 302, "aggressive": 302},
            "amc_market_share": {"SBI Mutual Fund": 341200.5},
            "category_aum": {"Equity": 1200450.25},
            "expense_trends": {"market_average": 1.12, "equity_avg": 1.31, "debt_avg": 0.71, "hybrid_avg": 1.05},
            "rating_distribution": {"5": 80, "4": 190},
            "sharpe_analysis": {"market_avg_sharpe": 1.08, "high_sharpe_funds": 140, "negative_sharpe_funds": 12},
            "market_summary": {"total_funds": 814, "total_aum": 2451987.5, "market_volatility": 12.4}
        }),
        Endpoint::DescriptiveAnalysis => json!({
            "summary": {"total_funds": 814, "unique_amcs": 41, "data_points": 22792},
            "category_distribution": {"Equity": 412, "Debt": 230},
            "risk_distribution": {"6": 301, "1": 120},
            "rating_distribution": {"5": 80},
            "return_statistics": {"1_year": {"mean": 14.21, "median": 13.9, "std": 8.1, "min": -4.2, "max": 61.5}},
            "top_performing_amcs": {"Quant Mutual Fund": 31.7},
            "expense_analysis": {"mean": 1.12, "median": 1.05, "low_cost_funds": 402, "high_cost_funds": 33}
        }),
        Endpoint::EnhancedAnalysis => json!({
            "correlation_analysis": {
                "correlation_matrix": {"return_1yr": {"return_3yr": 0.71}},
                "strong_correlations": [{"var1": "return_1yr", "var2": "return_3yr", "correlation": 0.71, "strength": "strong"}],
                "key_insights": ["Returns across horizons are positively correlated"]
            },
            "category_trends": {"Equity": {"count": 412, "avg_risk": 5.4}},
            "risk_return_analysis": {"risk_6": {"risk_level": 6, "fund_count": 301}},
            "expense_impact": {"low_cost": {"count": 402, "avg_expense": 0.54}},
            "age_performance": {"0-5_years": {"age_range": "0-5 years", "count": 220}},
            "distribution_analysis": {"return_1yr": {"mean": 14.21, "skewness": 0.8}},
            "market_insights": {"total_aum": 2451987.5, "avg_fund_age": 9.3, "high_performers_count": 121, "low_cost_funds_count": 402}
        }),
        Endpoint::Funds => json!({
            "funds": [{
                "scheme_name": "Axis Bluechip Fund",
                "amc_name": "Axis Mutual Fund",
                "return_1yr": 12.5,
                "return_3yr": 15.75,
                "return_5yr": 13,
                "risk_level": 4,
                "rating": 4,
                "expense_ratio": 0.55,
                "fund_size": 33245.5,
                "fund_age": 11.5,
                "sharpe_ratio": null
            }],
            "total_found": 1,
            "filters_applied": {"amc_name": null, "category": "Equity", "risk_level": null, "min_rating": null}
        }),
        Endpoint::Recommend => json!({
            "status": "success",
            "message": null,
            "recommendations": [{
                "rank": 1,
                "scheme_name": "Axis Bluechip Fund",
                "amc_name": "Axis Mutual Fund",
                "predicted_return": "16.42%",
                "suggested_allocation": "₹60,000",
                "min_sip": 500
            }],
            "investment_summary": {
                "total_amount": 100000,
                "investment_horizon": "3 year(s)",
                "risk_tolerance": "moderate",
                "category_preference": "Any"
            },
            "diversification_analysis": {
                "return_correlation": "Optimized for low correlation between funds"
            }
        }),
        Endpoint::Forecast => json!({
            "fund_name": "Axis Bluechip Fund",
            "amc_name": "Axis Mutual Fund",
            "current_metrics": {"risk_level": 4, "rating": 4, "expense_ratio": 0.55},
            "predictions": {
                "1_year": {"predicted_return": 12.9, "historical_return": 12.5, "confidence": "medium"},
                "3_year": {"predicted_return": 15.1, "historical_return": 15.75, "confidence": "high"}
            },
            "monthly_projections": [
                {"month": 1, "projected_value": 101, "return_percentage": 1},
                {"month": 2, "projected_value": 102.15, "return_percentage": 2.15}
            ],
            "forecast_horizon": 5
        }),
        Endpoint::CompareFunds => json!({
            "comparison": [
                {"fund_name": "Axis Bluechip Fund", "amc_name": "Axis Mutual Fund", "return_1yr": 12.5, "return_1yr_rank": 2},
                {"fund_name": "HDFC Top 100 Fund", "error": "Fund not found"}
            ],
            "metrics_compared": ["return_1yr", "return_3yr", "return_5yr", "risk_level", "expense_ratio"],
            "total_funds": 2
        }),
        Endpoint::TopPerformers => json!({
            "metric": "return_3yr",
            "category": "All",
            "top_performers": [{
                "rank": 1,
                "scheme_name": "Quant Small Cap Fund",
                "amc_name": "Quant Mutual Fund",
                "metric_value": 45,
                "return_1yr": 38.2,
                "risk_level": 6
            }],
            "total_evaluated": 814
        }),
        Endpoint::MarketCondition => json!({
            "ticker": "^NSEI",
            "current_price": 24310.55,
            "ema_12": 24280.1,
            "ema_21": 24190.4,
            "ema_diff_percent": 0.37,
            "condition": "bullish",
            "recommendation": "invest",
            "message": "EMA 12 above EMA 21",
            "crossover": null,
            "trend_strength": "weak",
            "timeframe": "4H"
        }),
        Endpoint::WhatIfSimulation => json!({
            "investment_amount": 100000,
            "duration_years": 3,
            "market_regime": "bull",
            "scenarios": [{
                "wait_months": 1,
                "market_regime": "bull",
                "fund_results": [{"fund_name": "Axis Bluechip Fund", "invest_now": {"profit": 52311.4}}],
                "aggregate": {"recommendation": "invest_now", "recommendation_strength": "strong"}
            }],
            "summary": {"general_recommendation": "invest_now"}
        }),
    }
}

/// Storage that fails every operation, as when the data dir is read-only.
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}
