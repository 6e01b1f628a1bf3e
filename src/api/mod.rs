//! HTTP client for the fund analysis backend.
//!
//! One method per backend endpoint. Calls never retry; failures come back as
//! [`ApiError`] for the caller to render.

mod cancel;
mod client;
mod endpoint;
mod error;
pub mod request;
pub mod response;

pub use cancel::CancelToken;
pub use client::ApiClient;
pub use endpoint::{ApiRequest, Endpoint};
pub use error::{ApiError, TransportError};
pub use request::{
    ComparisonRequest, ForecastRequest, FundFilter, MarketRegime, RecommendationRequest,
    RiskTolerance, TopPerformersQuery, WhatIfRequest,
};
