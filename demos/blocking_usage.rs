//! Blocking usage example for the FDC client
//!
//! Demonstrates the `_blocking` variants for sync contexts such as build
//! scripts, where no tokio runtime exists.
//!
//! To run this example:
//! ```bash
//! export FDC_API_KEY="your-key-here"
//! cargo run --example blocking_usage
//! ```

use fdc_client::{FdcClient, FdcClientConfig, FoodParams, ListParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FdcClientConfig::from_env()?;
    let client = FdcClient::from_config(config)?;

    let page = client.list_foods_blocking(&ListParams::new().page_size(5))?;
    for food in &page.foods {
        println!("{}: {}", food.fdc_id, food.description);
    }

    let foods = client.get_foods_blocking(&["534358", "373052"], &FoodParams::new())?;
    for food in &foods {
        println!("{}: {}", food.fdc_id, food.description);
    }

    Ok(())
}
