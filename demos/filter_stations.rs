use chargefind::{ChargeFind, ChargeFindError, FilterCriteria, PriceRange};
use std::env;

#[tokio::main]
async fn main() -> Result<(), ChargeFindError> {
    let client = ChargeFind::builder()
        .maybe_api_key(env::var("OCM_API_KEY").ok())
        .build();

    let catalog = client
        .stations()
        .country_code("IN")
        .max_results(500)
        .call()
        .await?;

    println!("Fetched {} stations", catalog.len());
    println!("Towns with stations: {:?}", catalog.towns());

    let criteria = FilterCriteria {
        min_rating: Some(4.0),
        price_range: Some(PriceRange::new(10.0, 18.0)),
        operational_only: true,
        ..Default::default()
    };
    let filtered = catalog.filter(&criteria);

    println!(
        "{} stations are operational, rated >= 4.0, at <= 18/kWh:",
        filtered.len()
    );
    for station in &filtered {
        println!(
            "  {} ({}) - {:.2}/kWh, {:.1} stars",
            station.title,
            station.town.as_deref().unwrap_or("unknown town"),
            station.price_per_kwh,
            station.avg_rating,
        );
    }

    Ok(())
}
