// Update Reservation Use Case

use crate::application::AvailabilityChecker;
use crate::domain::{Reservation, ReservationId, ReservationRequest};
use crate::error::{AppError, Result};
use crate::port::ReservationRepository;
use tracing::{debug, info, warn};

/// Re-check availability (only when the slot changed), then persist.
///
/// The reservation's own row is excluded from the check, so neither its old
/// nor its new slot counts against it. The owner is never changed.
pub async fn execute(
    reservations: &dyn ReservationRepository,
    checker: &AvailabilityChecker,
    existing: &Reservation,
    req: ReservationRequest,
) -> Result<Reservation> {
    let id = existing.id;

    if existing.slot_changed(&req) {
        let verdict = checker
            .check(req.date, req.time, req.guests, Some(id))
            .await?;

        if let Err(e) = verdict.into_result(req.date, req.time, req.guests) {
            warn!(
                reservation_id = id,
                date = %req.date,
                time = %req.time,
                guests = req.guests,
                verdict = ?verdict,
                "Reservation change rejected"
            );
            return Err(e);
        }
    } else {
        debug!(reservation_id = id, "Slot unchanged, skipping availability check");
    }

    let updated = reservations
        .update(id, &req)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!(
        reservation_id = id,
        date = %updated.date,
        time = %updated.time,
        guests = updated.guests,
        "Reservation updated"
    );

    Ok(updated)
}

pub(crate) fn not_found(id: ReservationId) -> AppError {
    AppError::NotFound(format!("Reservation {} not found", id))
}
