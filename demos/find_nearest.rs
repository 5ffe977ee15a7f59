use chargefind::{ChargeFind, ChargeFindError, LatLon};
use std::env;

#[tokio::main]
async fn main() -> Result<(), ChargeFindError> {
    let client = ChargeFind::builder()
        .maybe_api_key(env::var("OCM_API_KEY").ok())
        .build();

    // Kochi city center.
    let user = LatLon(9.9312, 76.2673);

    let (station, distance_km) = client
        .nearest_station()
        .country_code("IN")
        .location(user)
        .call()
        .await?;

    println!("Nearest station: {}", station.title);
    if let Some(town) = &station.town {
        println!("Town:            {town}");
    }
    println!("Distance:        {distance_km:.2} km");
    println!(
        "Status:          {}",
        if station.is_operational {
            "Operational"
        } else {
            "Offline"
        }
    );
    println!("Price (est.):    {:.2}/kWh", station.price_per_kwh);
    println!("Rating (est.):   {:.1}", station.avg_rating);

    Ok(())
}
