//! Async usage example for the FDC client
//!
//! To run this example:
//! ```bash
//! export FDC_API_KEY="your-key-here"  # sign up at https://fdc.nal.usda.gov/api-key-signup.html
//! cargo run --example async_usage
//! ```

use fdc_client::{
    DataType, FdcClient, FdcClientConfig, FoodParams, ListParams, ReportFormat, SearchParams,
    SortBy,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FdcClientConfig::from_env()?;
    let client = FdcClient::from_config(config)?;

    println!("=== Example 1: List Foods ===\n");

    let params = ListParams::new()
        .data_type(DataType::Foundation)
        .data_type(DataType::SrLegacy)
        .page_size(5)
        .sort_by(SortBy::Description);
    let page = client.list_foods(&params).await?;

    for food in &page.foods {
        println!("{}: {}", food.fdc_id, food.description);
    }

    println!("\n=== Example 2: Get Food by ID ===\n");

    let params = FoodParams::new().format(ReportFormat::Full).nutrient(203).nutrient(303);
    let food = client.get_food("534358", &params).await?;
    println!("{} ({})", food.description, food.data_type.as_deref().unwrap_or("?"));
    for nutrient in &food.food_nutrients {
        println!(
            "  {}: {} {}",
            nutrient.name.as_deref().unwrap_or("?"),
            nutrient.amount.unwrap_or(0.0),
            nutrient.unit_name.as_deref().unwrap_or(""),
        );
    }

    println!("\n=== Example 3: Search Foods ===\n");

    let params = SearchParams::new().page_size(10);
    let page = client.search_foods("cheddar cheese", &params).await?;

    println!(
        "{} hits across {} pages",
        page.total_hits.unwrap_or(0),
        page.total_pages.unwrap_or(0)
    );
    for food in &page.foods {
        println!("{}: {}", food.fdc_id, food.description);
    }

    Ok(())
}
