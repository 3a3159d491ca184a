//! FDC Client Library
//!
//! Thin, typed client for the USDA Food Data Central (FDC) API
//! (<https://fdc.nal.usda.gov/api-guide.html>).
//!
//! Each operation is one HTTP GET request: the client attaches the API key
//! and query parameters, issues the request, and deserializes the JSON body
//! into typed records. There are no retries, no caching, and no state beyond
//! the immutable configuration, so a single client can be shared across
//! tasks.
//!
//! # Examples
//!
//! ## Async Usage
//!
//! ```no_run
//! use fdc_client::{FdcClient, FdcClientConfig, FoodParams, ListParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FdcClientConfig::from_env()?;
//! let client = FdcClient::from_config(config)?;
//!
//! let page = client
//!     .list_foods(&ListParams::new().page_size(5))
//!     .await?;
//! for food in &page.foods {
//!     println!("{}: {}", food.fdc_id, food.description);
//! }
//!
//! let food = client.get_food("534358", &FoodParams::new()).await?;
//! println!("{}", food.description);
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage (Build Scripts)
//!
//! ```no_run
//! use fdc_client::{FdcClient, SearchParams};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FdcClient::new("my-api-key")?;
//!
//! let page = client.search_foods_blocking("cheddar cheese", &SearchParams::new())?;
//! println!("{} foods match", page.total_hits.unwrap_or(0));
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoint;
mod error;
mod model;
mod params;
mod transport;

// Re-export public API
pub use client::{DEFAULT_BASE_URL, FdcClient, FdcClientConfig};
pub use error::FdcError;
pub use model::{Food, FoodNutrient, FoodsPage};
pub use params::{DataType, FoodParams, ListParams, ReportFormat, SearchParams, SortBy, SortOrder};

// Re-export commonly used types from dependencies
pub use http::StatusCode;
