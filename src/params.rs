use crate::error::FdcError;

/// Default page size applied by the remote API when none is requested
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 50;

/// Documented maximum page size; the remote service is authoritative, so
/// larger values are passed through with a warning rather than rejected
const DOCUMENTED_MAX_PAGE_SIZE: u32 = 200;

/// Maximum number of FDC ids accepted by the `/foods` endpoint
pub(crate) const MAX_FDC_IDS: usize = 20;

/// Maximum number of nutrient numbers accepted per food report request
pub(crate) const MAX_NUTRIENTS: usize = 25;

/// Level of detail for food reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Shortened set of food and nutrient elements (the remote default)
    Abridged,
    /// All available elements
    Full,
}

impl ReportFormat {
    fn as_wire(self) -> &'static str {
        match self {
            ReportFormat::Abridged => "abridged",
            ReportFormat::Full => "full",
        }
    }
}

/// FDC data source categories for food records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Foundation,
    /// USDA Standard Reference legacy data
    SrLegacy,
    Branded,
    /// Survey (FNDDS) data
    Survey,
}

impl DataType {
    fn as_wire(self) -> &'static str {
        match self {
            DataType::Foundation => "Foundation",
            DataType::SrLegacy => "SR Legacy",
            DataType::Branded => "Branded",
            DataType::Survey => "Survey (FNDDS)",
        }
    }
}

/// Fields results can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    DataType,
    Description,
    FdcId,
    PublishedDate,
}

impl SortBy {
    fn as_wire(self) -> &'static str {
        match self {
            SortBy::DataType => "dataType.keyword",
            SortBy::Description => "lowercaseDescription.keyword",
            SortBy::FdcId => "fdcId",
            SortBy::PublishedDate => "publishedDate",
        }
    }
}

/// Sort direction, only meaningful together with a `SortBy`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_wire(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters for `FdcClient::get_food` and `FdcClient::get_foods`
///
/// All fields are optional; omitted values fall back to the remote API's
/// defaults (abridged format, all nutrients).
#[derive(Debug, Clone, Default)]
pub struct FoodParams {
    format: Option<ReportFormat>,
    nutrients: Vec<u32>,
}

impl FoodParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abridged or full food reports
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Restrict the report to a nutrient number; may be called multiple
    /// times, up to 25 nutrients per request
    pub fn nutrient(mut self, number: u32) -> Self {
        self.nutrients.push(number);
        self
    }

    /// Render the parameters into query pairs, validating the nutrient limit
    pub(crate) fn to_query(&self) -> Result<Vec<(String, String)>, FdcError> {
        if self.nutrients.len() > MAX_NUTRIENTS {
            return Err(FdcError::InvalidArgument(format!(
                "at most {MAX_NUTRIENTS} nutrient numbers per request, got {}",
                self.nutrients.len()
            )));
        }
        let mut query = Vec::new();
        if let Some(format) = self.format {
            query.push(("format".to_string(), format.as_wire().to_string()));
        }
        if !self.nutrients.is_empty() {
            let joined = self
                .nutrients
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            query.push(("nutrients".to_string(), joined));
        }
        Ok(query)
    }
}

/// Parameters for `FdcClient::list_foods`
///
/// All fields are optional; omitted values fall back to the remote API's
/// defaults.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    data_type: Vec<DataType>,
    page_size: Option<u32>,
    page_number: Option<u32>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to a data type; may be called multiple times
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type.push(data_type);
        self
    }

    /// Maximum number of results per page
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Page number to retrieve, starting at 1
    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Render the parameters into query pairs, validating paging bounds
    pub(crate) fn to_query(&self) -> Result<Vec<(String, String)>, FdcError> {
        let mut query = Vec::new();
        push_paging(&mut query, self.page_size, self.page_number)?;
        push_data_type(&mut query, &self.data_type);
        push_sorting(&mut query, self.sort_by, self.sort_order);
        Ok(query)
    }

    /// Page metadata echoed into a `FoodsPage` for list responses
    pub(crate) fn effective_page(&self) -> (u32, u32) {
        (
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Parameters for `FdcClient::search_foods` (the search string itself is a
/// required argument of the call)
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    data_type: Vec<DataType>,
    page_size: Option<u32>,
    page_number: Option<u32>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
    brand_owner: Option<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to a data type; may be called multiple times
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type.push(data_type);
        self
    }

    /// Maximum number of results per page
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Page number to retrieve, starting at 1
    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Filter results by brand owner; only applies to branded foods
    pub fn brand_owner(mut self, brand: impl Into<String>) -> Self {
        self.brand_owner = Some(brand.into());
        self
    }

    /// Render the parameters into query pairs, validating paging bounds
    pub(crate) fn to_query(&self) -> Result<Vec<(String, String)>, FdcError> {
        let mut query = Vec::new();
        push_paging(&mut query, self.page_size, self.page_number)?;
        push_data_type(&mut query, &self.data_type);
        push_sorting(&mut query, self.sort_by, self.sort_order);
        if let Some(ref brand) = self.brand_owner {
            query.push(("brandOwner".to_string(), brand.clone()));
        }
        Ok(query)
    }

    /// Page metadata fallback when the search envelope omits it
    pub(crate) fn effective_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

fn push_paging(
    query: &mut Vec<(String, String)>,
    page_size: Option<u32>,
    page_number: Option<u32>,
) -> Result<(), FdcError> {
    if let Some(size) = page_size {
        if size < 1 {
            return Err(FdcError::InvalidArgument(
                "pageSize must be at least 1".to_string(),
            ));
        }
        if size > DOCUMENTED_MAX_PAGE_SIZE {
            tracing::warn!(page_size = size, "pageSize above the documented maximum of 200");
        }
        query.push(("pageSize".to_string(), size.to_string()));
    }
    if let Some(number) = page_number {
        if number < 1 {
            return Err(FdcError::InvalidArgument(
                "pageNumber must be at least 1".to_string(),
            ));
        }
        query.push(("pageNumber".to_string(), number.to_string()));
    }
    Ok(())
}

fn push_data_type(query: &mut Vec<(String, String)>, data_type: &[DataType]) {
    if !data_type.is_empty() {
        let joined = data_type
            .iter()
            .map(|dt| dt.as_wire())
            .collect::<Vec<_>>()
            .join(",");
        query.push(("dataType".to_string(), joined));
    }
}

fn push_sorting(
    query: &mut Vec<(String, String)>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
) {
    if let Some(sort) = sort_by {
        query.push(("sortBy".to_string(), sort.as_wire().to_string()));
        if let Some(order) = sort_order {
            query.push(("sortOrder".to_string(), order.as_wire().to_string()));
        }
    }
}

/// Validate a caller-supplied FDC id before any network call
pub(crate) fn parse_fdc_id(id: &str) -> Result<u64, FdcError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(FdcError::InvalidArgument("FDC id must not be empty".to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| FdcError::InvalidArgument(format!("'{trimmed}' is not a valid FDC id")))
}
