use std::future::Future;
use std::time::Duration;

use crate::endpoint::Endpoint;
use crate::error::FdcError;
use crate::model::{self, Food, FoodsPage, SearchResponse};
use crate::params::{FoodParams, ListParams, MAX_FDC_IDS, SearchParams, parse_fdc_id};
use crate::transport::HttpTransport;

/// Default base URI for all FDC API endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for `FdcClient`
///
/// Immutable for the client's lifetime once the client is constructed.
#[derive(Debug, Clone)]
pub struct FdcClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl FdcClientConfig {
    /// Create a configuration with the given API key and default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different base URL (e.g. a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Expects:
    /// - `FDC_API_KEY`: Data.gov API key (required)
    /// - `FDC_BASE_URL`: Base URL override (optional)
    pub fn from_env() -> Result<Self, FdcError> {
        let api_key = std::env::var("FDC_API_KEY")
            .map_err(|_| FdcError::Build("FDC_API_KEY not set".into()))?;
        let base_url =
            std::env::var("FDC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key).with_base_url(base_url))
    }
}

/// Client for the USDA Food Data Central API
///
/// Stateless beyond its immutable configuration; each operation is a single
/// request-response exchange with no retries or caching, so a shared client
/// is safe to use from multiple tasks concurrently.
pub struct FdcClient {
    transport: HttpTransport,
}

impl FdcClient {
    /// Create a client with the given API key and default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self, FdcError> {
        Self::from_config(FdcClientConfig::new(api_key))
    }

    /// Create a client from configuration
    pub fn from_config(config: FdcClientConfig) -> Result<Self, FdcError> {
        let transport = HttpTransport::new(config.base_url, config.api_key, config.timeout)?;
        Ok(Self { transport })
    }

    /// Get a food report for a single FDC id
    ///
    /// # Errors
    /// `InvalidArgument` if `id` is empty or not a number, or if `params`
    /// carries more than 25 nutrient numbers (no request is made in either
    /// case), `NotFound` if the remote API has no such food, `Remote` for
    /// other non-2xx statuses, `Decode` for malformed bodies.
    pub async fn get_food(&self, id: &str, params: &FoodParams) -> Result<Food, FdcError> {
        let fdc_id = parse_fdc_id(id)?;
        let query = params.to_query()?;
        let body = self.transport.get(&Endpoint::Food(fdc_id), &query).await?;
        let food: Food = model::decode(&body)?;
        food.ensure_valid()?;
        Ok(food)
    }

    /// Get food reports for up to 20 FDC ids in one request
    pub async fn get_foods(
        &self,
        ids: &[&str],
        params: &FoodParams,
    ) -> Result<Vec<Food>, FdcError> {
        if ids.is_empty() {
            return Err(FdcError::InvalidArgument(
                "at least one FDC id is required".to_string(),
            ));
        }
        if ids.len() > MAX_FDC_IDS {
            return Err(FdcError::InvalidArgument(format!(
                "at most {MAX_FDC_IDS} FDC ids per request, got {}",
                ids.len()
            )));
        }
        let parsed = ids
            .iter()
            .map(|id| parse_fdc_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        let joined = parsed
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut query = params.to_query()?;
        query.push(("fdcIds".to_string(), joined));
        let body = self.transport.get(&Endpoint::Foods, &query).await?;
        let foods: Vec<Food> = model::decode(&body)?;
        for food in &foods {
            food.ensure_valid()?;
        }
        Ok(foods)
    }

    /// Get one page of the full food listing, in abridged format
    pub async fn list_foods(&self, params: &ListParams) -> Result<FoodsPage, FdcError> {
        let query = params.to_query()?;
        let body = self.transport.get(&Endpoint::List, &query).await?;
        let foods: Vec<Food> = model::decode(&body)?;
        for food in &foods {
            food.ensure_valid()?;
        }
        let (page_number, page_size) = params.effective_page();
        Ok(FoodsPage::from_list(foods, page_number, page_size))
    }

    /// Search foods matching a query string
    ///
    /// # Errors
    /// `InvalidArgument` if `query` is empty (no request is made); otherwise
    /// the same contract as `list_foods`.
    pub async fn search_foods(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<FoodsPage, FdcError> {
        if query.trim().is_empty() {
            return Err(FdcError::InvalidArgument(
                "search query must not be empty".to_string(),
            ));
        }
        let mut pairs = params.to_query()?;
        pairs.push(("query".to_string(), query.to_string()));

        let body = self.transport.get(&Endpoint::Search, &pairs).await?;
        let resp: SearchResponse = model::decode(&body)?;
        for food in &resp.foods {
            food.ensure_valid()?;
        }
        Ok(resp.into_page(params.effective_page_size()))
    }

    /// Blocking version of `get_food` for sync contexts (e.g. build scripts)
    ///
    /// # Panics
    /// Panics when called from an async execution context; call it from sync
    /// code or inside `tokio::task::spawn_blocking`.
    pub fn get_food_blocking(&self, id: &str, params: &FoodParams) -> Result<Food, FdcError> {
        block_on(self.get_food(id, params))
    }

    /// Blocking version of `get_foods` for sync contexts
    ///
    /// # Panics
    /// Panics when called from an async execution context; call it from sync
    /// code or inside `tokio::task::spawn_blocking`.
    pub fn get_foods_blocking(
        &self,
        ids: &[&str],
        params: &FoodParams,
    ) -> Result<Vec<Food>, FdcError> {
        block_on(self.get_foods(ids, params))
    }

    /// Blocking version of `list_foods` for sync contexts
    ///
    /// # Panics
    /// Panics when called from an async execution context; call it from sync
    /// code or inside `tokio::task::spawn_blocking`.
    pub fn list_foods_blocking(&self, params: &ListParams) -> Result<FoodsPage, FdcError> {
        block_on(self.list_foods(params))
    }

    /// Blocking version of `search_foods` for sync contexts
    ///
    /// # Panics
    /// Panics when called from an async execution context; call it from sync
    /// code or inside `tokio::task::spawn_blocking`.
    pub fn search_foods_blocking(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<FoodsPage, FdcError> {
        block_on(self.search_foods(query, params))
    }
}

/// Drive a client future to completion from a sync context
///
/// Creates a temporary runtime when called from a plain sync context, or
/// reuses the runtime's handle from a `spawn_blocking` thread. Note
/// `Handle::block_on` panics on a runtime worker thread, so this must never
/// be reached from async code.
fn block_on<F, T>(fut: F) -> Result<T, FdcError>
where
    F: Future<Output = Result<T, FdcError>>,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle.block_on(fut),
        Err(_) => {
            // No runtime exists - create a temporary one
            tokio::runtime::Runtime::new()?.block_on(fut)
        }
    }
}
