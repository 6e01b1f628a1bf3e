//! Backend endpoint table and the immutable request value sent through it.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;

/// Every endpoint the backend exposes.
///
/// Paths are part of the wire contract. Do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Amcs,
    Categories,
    DashboardData,
    MarketTrends,
    DescriptiveAnalysis,
    EnhancedAnalysis,
    Funds,
    Recommend,
    Forecast,
    CompareFunds,
    TopPerformers,
    MarketCondition,
    WhatIfSimulation,
}

impl Endpoint {
    /// HTTP verb for this endpoint.
    pub fn method(&self) -> Method {
        match self {
            Self::Funds
            | Self::Recommend
            | Self::Forecast
            | Self::CompareFunds
            | Self::WhatIfSimulation => Method::POST,
            _ => Method::GET,
        }
    }

    /// Absolute path on the backend.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Health => "/",
            Self::Amcs => "/api/amcs",
            Self::Categories => "/api/categories",
            Self::DashboardData => "/api/dashboard-data",
            Self::MarketTrends => "/api/market-trends",
            Self::DescriptiveAnalysis => "/api/descriptive-analysis",
            Self::EnhancedAnalysis => "/api/enhanced-analysis",
            Self::Funds => "/api/funds",
            Self::Recommend => "/api/recommend",
            Self::Forecast => "/api/forecast",
            Self::CompareFunds => "/api/compare-funds",
            Self::TopPerformers => "/api/top-performers",
            Self::MarketCondition => "/api/market-condition",
            Self::WhatIfSimulation => "/api/what-if-simulation",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [Endpoint] {
        &[
            Self::Health,
            Self::Amcs,
            Self::Categories,
            Self::DashboardData,
            Self::MarketTrends,
            Self::DescriptiveAnalysis,
            Self::EnhancedAnalysis,
            Self::Funds,
            Self::Recommend,
            Self::Forecast,
            Self::CompareFunds,
            Self::TopPerformers,
            Self::MarketCondition,
            Self::WhatIfSimulation,
        ]
    }
}

/// One-shot request: endpoint, optional JSON payload, ordered query pairs.
///
/// Built once and never mutated after being handed to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    body: Option<Value>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            body: None,
            query: Vec::new(),
        }
    }

    /// Attach a JSON payload serialized from `payload`.
    pub fn with_body<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| {
            ApiError::InvalidRequest(format!(
                "Failed to encode payload for {}: {}",
                self.endpoint.path(),
                e
            ))
        })?;
        self.body = Some(body);
        Ok(self)
    }

    /// Append a query pair. Pairs are sent in insertion order.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}
