//! Simple SDK Example
//!
//! Finds a free slot, books it, moves it and cancels it.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package tablebook-daemon
//!    ```
//!
//! 2. Run this example with a date inside the booking window:
//!    ```bash
//!    cargo run --package tablebook-sdk --example simple -- 2024-06-01
//!    ```

use tablebook_sdk::{ReservationInput, TablebookClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let date = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: simple <YYYY-MM-DD>"))?;

    println!("Tablebook SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = TablebookClient::connect("http://127.0.0.1:9530").await?;
    println!("   ✓ Connected\n");

    // 2. Look for a slot
    println!("2. Available times on {} for 4 guests...", date);
    let times = client.available_times(&date, 4).await?;
    println!("   {}\n", times.times.join("  "));

    let Some(time) = times.times.first().cloned() else {
        println!("   ⚠ Fully booked, nothing to do");
        return Ok(());
    };

    // 3. Book it
    println!("3. Booking {} {}...", date, time);
    let input = ReservationInput {
        date: date.clone(),
        time,
        guests: 4,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "5551234567".to_string(),
        special_requests: Some("Window seat".to_string()),
    };
    let reservation = client.create_reservation(input.clone(), None).await?;
    println!("   ✓ Reservation #{} confirmed\n", reservation.id);

    // 4. Grow the party; the server re-checks, ignoring this reservation
    println!("4. Changing party size to 6...");
    let bigger = ReservationInput { guests: 6, ..input };
    match client.update_reservation(reservation.id, bigger).await {
        Ok(updated) => println!("   ✓ Now {} guests\n", updated.guests),
        Err(e) if e.is_unavailable() => println!("   ⚠ No room for 6: {}\n", e),
        Err(e) => return Err(e.into()),
    }

    // 5. Cancel
    println!("5. Cancelling...");
    client.delete_reservation(reservation.id).await?;
    println!("   ✓ Cancelled");

    println!("\n✓ Example completed successfully!");

    Ok(())
}
