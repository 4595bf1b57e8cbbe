//! Parking management view: owners, parking spaces, bookings.

#![allow(clippy::print_stdout)] // this module IS the terminal view

use valet_client::Session;

use super::{table, yes_no};

/// Fetch the management collections and render them.
///
/// # Errors
///
/// Returns error if any of the fetches fails; collections that were
/// fetched before the failure keep their data in the session.
pub async fn render(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let owners = session.owners().fetch_all().await?;
    let spaces = session.spaces().fetch_all().await?;
    let bookings = session.bookings().fetch_all().await?;

    println!("Car owners ({})", owners.len());
    let rows: Vec<Vec<String>> = owners
        .iter()
        .map(|o| vec![o.id.to_string(), o.full_name.clone()])
        .collect();
    println!("{}", table(&["ID", "Full name"], &rows));

    println!("\nParking spaces ({})", spaces.len());
    let rows: Vec<Vec<String>> = spaces
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.number.clone(),
                yes_no(s.is_available).to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["ID", "Space", "Available"], &rows));

    println!("\nBookings ({})", bookings.len());
    let rows: Vec<Vec<String>> = bookings
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.car_id.to_string(),
                b.parking_space_id.to_string(),
                yes_no(b.is_paid).to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["ID", "Car", "Space", "Paid"], &rows));

    Ok(())
}
