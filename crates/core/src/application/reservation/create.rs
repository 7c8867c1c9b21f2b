// Create Reservation Use Case

use crate::application::AvailabilityChecker;
use crate::domain::{Reservation, ReservationRequest, UserId};
use crate::error::Result;
use crate::port::ReservationRepository;
use tracing::{info, warn};

/// Check the requested slot, then persist.
///
/// The two steps are not atomic on their own; callers that need
/// serialization hold the date lock around this call.
///
/// # Arguments
///
/// * `reservations` - Reservation repository
/// * `checker` - Availability checker
/// * `req` - Guest payload
/// * `user_id` - Owner, if the booking was made by a signed-in user
pub async fn execute(
    reservations: &dyn ReservationRepository,
    checker: &AvailabilityChecker,
    req: ReservationRequest,
    user_id: Option<UserId>,
) -> Result<Reservation> {
    let verdict = checker.check(req.date, req.time, req.guests, None).await?;

    if let Err(e) = verdict.into_result(req.date, req.time, req.guests) {
        warn!(
            date = %req.date,
            time = %req.time,
            guests = req.guests,
            verdict = ?verdict,
            "Reservation rejected"
        );
        return Err(e);
    }

    let reservation = reservations.insert(&req, user_id).await?;

    info!(
        reservation_id = reservation.id,
        date = %reservation.date,
        time = %reservation.time,
        guests = reservation.guests,
        "Reservation created"
    );

    Ok(reservation)
}
