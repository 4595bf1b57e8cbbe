//! Booking view: detailed bookings with car, space, and payment status.

#![allow(clippy::print_stdout)] // this module IS the terminal view

use valet_client::Session;

use super::{table, yes_no};

/// Fetch the detailed bookings and render them.
///
/// # Errors
///
/// Returns error if the fetch fails.
pub async fn render(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let bookings = session.bookings().fetch_all_detailed().await?;

    println!("Bookings ({})", bookings.len());
    let rows: Vec<Vec<String>> = bookings
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.car.number.clone(),
                b.car.owner.full_name.clone(),
                b.parking_space.number.clone(),
                yes_no(b.is_paid).to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["ID", "Car", "Owner", "Space", "Paid"], &rows));

    Ok(())
}
