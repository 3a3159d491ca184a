/// FDC API endpoints addressed by this client
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Endpoint {
    /// Single food report: `/food/{fdcId}`
    Food(u64),
    /// Multiple food reports by id: `/foods`
    Foods,
    /// Paged listing of all foods: `/foods/list`
    List,
    /// Full-text food search: `/foods/search`
    Search,
}

impl Endpoint {
    /// Sub-path below the API base URL
    pub(crate) fn path(&self) -> String {
        match self {
            Endpoint::Food(fdc_id) => format!("food/{fdc_id}"),
            Endpoint::Foods => "foods".to_string(),
            Endpoint::List => "foods/list".to_string(),
            Endpoint::Search => "foods/search".to_string(),
        }
    }

    /// Human-readable resource label used in `NotFound` errors
    pub(crate) fn resource(&self) -> String {
        match self {
            Endpoint::Food(fdc_id) => format!("food {fdc_id}"),
            Endpoint::Foods => "foods".to_string(),
            Endpoint::List => "food list".to_string(),
            Endpoint::Search => "food search".to_string(),
        }
    }
}
