use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::api::cancel::CancelToken;
use crate::api::endpoint::{ApiRequest, Endpoint};
use crate::api::error::{extract_detail, ApiError, TransportError};
use crate::api::request::{
    ComparisonRequest, ForecastRequest, FundFilter, RecommendationRequest, TopPerformersQuery,
    WhatIfRequest,
};
use crate::api::response::{
    AmcList, CategoryList, Comparison, DashboardData, DescriptiveAnalysis, EnhancedAnalysis,
    Forecast, FundList, HealthStatus, MarketCondition, MarketTrends, Recommendations,
    TopPerformers, WhatIfSimulation,
};
use crate::config::ApiConfig;

/// Typed client for the fund analysis backend.
///
/// Each call issues exactly one request. There is no retry, cache, timeout or
/// auth, and idle connections are not kept between calls. Cloning is cheap.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    cancel: Option<CancelToken>,
}

impl ApiClient {
    /// Build a client for `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            cancel: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A clone of this client whose requests resolve to `ApiError::Cancelled`
    /// once `token` fires.
    pub fn with_cancel(&self, token: CancelToken) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            cancel: Some(token),
        }
    }

    /// Absolute URL for `request`, including its query string.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, request.endpoint().path());
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !request.query().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in request.query() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send `request` and return the JSON body exactly as received.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(request)?;
        let endpoint = request.endpoint();
        let request_id = Uuid::new_v4();

        tracing::debug!(
            %request_id,
            method = %endpoint.method(),
            %url,
            "Sending backend request"
        );

        let exchange = self.exchange(request, url, request_id);
        let result = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(ApiError::Cancelled { path: endpoint.path() }),
                    result = exchange => result,
                }
            }
            None => exchange.await,
        };

        if let Err(e) = &result {
            tracing::debug!(
                %request_id,
                path = endpoint.path(),
                error_type = e.error_type(),
                "Backend request failed: {}",
                e
            );
        }

        result
    }

    async fn exchange(
        &self,
        request: &ApiRequest,
        url: Url,
        request_id: Uuid,
    ) -> Result<Value, ApiError> {
        let endpoint = request.endpoint();
        let method = endpoint.method();
        let path = endpoint.path();

        let mut builder = self.http.request(method.clone(), url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::network(method.clone(), path, e))?;

        let status = response.status();
        tracing::debug!(%request_id, status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                TransportError::from_status(method, path, status, extract_detail(&body)).into(),
            );
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::network(method, path, e))?;

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse { path, source: e })
    }

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let path = request.endpoint().path();
        let value = self.send(&request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse { path, source: e })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.call(ApiRequest::new(endpoint)).await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get(Endpoint::Health).await
    }

    pub async fn get_amcs(&self) -> Result<AmcList, ApiError> {
        self.get(Endpoint::Amcs).await
    }

    pub async fn get_categories(&self) -> Result<CategoryList, ApiError> {
        self.get(Endpoint::Categories).await
    }

    pub async fn get_dashboard_data(&self) -> Result<DashboardData, ApiError> {
        self.get(Endpoint::DashboardData).await
    }

    pub async fn get_market_trends(&self) -> Result<MarketTrends, ApiError> {
        self.get(Endpoint::MarketTrends).await
    }

    pub async fn get_descriptive_analysis(&self) -> Result<DescriptiveAnalysis, ApiError> {
        self.get(Endpoint::DescriptiveAnalysis).await
    }

    pub async fn get_enhanced_analysis(&self) -> Result<EnhancedAnalysis, ApiError> {
        self.get(Endpoint::EnhancedAnalysis).await
    }

    pub async fn filter_funds(&self, filter: &FundFilter) -> Result<FundList, ApiError> {
        self.call(ApiRequest::new(Endpoint::Funds).with_body(filter)?).await
    }

    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendations, ApiError> {
        self.call(ApiRequest::new(Endpoint::Recommend).with_body(request)?).await
    }

    pub async fn get_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ApiError> {
        self.call(ApiRequest::new(Endpoint::Forecast).with_body(request)?).await
    }

    pub async fn compare_funds(&self, request: &ComparisonRequest) -> Result<Comparison, ApiError> {
        self.call(ApiRequest::new(Endpoint::CompareFunds).with_body(request)?).await
    }

    pub async fn get_top_performers(
        &self,
        query: &TopPerformersQuery,
    ) -> Result<TopPerformers, ApiError> {
        self.call(top_performers_request(query)).await
    }

    pub async fn get_market_condition(&self) -> Result<MarketCondition, ApiError> {
        self.get(Endpoint::MarketCondition).await
    }

    pub async fn run_what_if_simulation(
        &self,
        request: &WhatIfRequest,
    ) -> Result<WhatIfSimulation, ApiError> {
        self.call(ApiRequest::new(Endpoint::WhatIfSimulation).with_body(request)?).await
    }
}

fn top_performers_request(query: &TopPerformersQuery) -> ApiRequest {
    query
        .to_pairs()
        .into_iter()
        .fold(ApiRequest::new(Endpoint::TopPerformers), |req, (key, value)| {
            req.with_query(key, value)
        })
}
