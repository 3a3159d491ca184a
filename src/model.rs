use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::FdcError;

/// One nutrient entry of an abridged food report
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    /// FDC nutrient number, e.g. 303
    #[serde(default, alias = "nutrientNumber")]
    pub number: Option<String>,
    /// Nutrient name, e.g. "Iron, Fe"
    #[serde(default, alias = "nutrientName")]
    pub name: Option<String>,
    /// Measured amount in `unit_name` units
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit name, e.g. "mg"
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub derivation_code: Option<String>,
    #[serde(default)]
    pub derivation_description: Option<String>,
}

/// One food record as published by the FDC API
///
/// Immutable once decoded from a response. Fields that only apply to some
/// data sources (brand owner, NDB number, food code) are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub fdc_id: u64,
    pub description: String,
    /// Data source category, e.g. "Branded" or "SR Legacy"
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Brand owner; only applies to branded foods
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub gtin_upc: Option<String>,
    /// NDB number; only applies to Foundation and SR Legacy foods
    #[serde(default)]
    pub ndb_number: Option<u64>,
    /// Food code; only applies to survey foods
    #[serde(default)]
    pub food_code: Option<u64>,
    /// Search relevance score; only present on search results
    #[serde(default)]
    pub score: Option<f64>,
}

impl Food {
    /// Every food returned by the API must carry a usable identity
    pub(crate) fn ensure_valid(&self) -> Result<(), FdcError> {
        if self.fdc_id == 0 {
            return Err(FdcError::Decode(
                "food record has an empty fdcId".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(FdcError::Decode(format!(
                "food {} has an empty description",
                self.fdc_id
            )));
        }
        Ok(())
    }
}

/// One bounded slice of a larger food result set
///
/// List responses carry no totals on the wire, so `total_hits` and
/// `total_pages` are only populated for search results.
#[derive(Debug, Clone)]
pub struct FoodsPage {
    /// Foods in response order
    pub foods: Vec<Food>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_hits: Option<u64>,
    pub total_pages: Option<u32>,
}

impl FoodsPage {
    /// Build a page from the bare array returned by `/foods/list`
    pub(crate) fn from_list(foods: Vec<Food>, page_number: u32, page_size: u32) -> Self {
        Self {
            foods,
            page_number,
            page_size,
            total_hits: None,
            total_pages: None,
        }
    }
}

/// Wire shape of a `/foods/search` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) foods: Vec<Food>,
    pub(crate) total_hits: u64,
    pub(crate) current_page: u32,
    pub(crate) total_pages: u32,
}

impl SearchResponse {
    pub(crate) fn into_page(self, page_size: u32) -> FoodsPage {
        FoodsPage {
            foods: self.foods,
            page_number: self.current_page,
            page_size,
            total_hits: Some(self.total_hits),
            total_pages: Some(self.total_pages),
        }
    }
}

/// Decode a response body, mapping parse failures to `Decode`
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FdcError> {
    serde_json::from_slice(body).map_err(|e| FdcError::Decode(e.to_string()))
}
