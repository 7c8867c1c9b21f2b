// Capacity models: weigh contending reservations against the table inventory

use crate::domain::{CapacityModel, Reservation, Table, TimeOfDay};
use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of an availability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    /// At least one eligible table is free
    Available { eligible: usize, occupied: usize },
    /// Nothing in the inventory can seat the party
    NoEligibleTable,
    /// Eligible tables exist but are all taken in this window
    Full { eligible: usize, occupied: usize },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    /// Turn a negative verdict into the matching capacity error
    pub fn into_result(self, date: NaiveDate, time: TimeOfDay, guests: u32) -> Result<()> {
        match self {
            Availability::Available { .. } => Ok(()),
            Availability::NoEligibleTable => Err(AppError::NoEligibleTable { guests }),
            Availability::Full { .. } => Err(AppError::CapacityConflict { date, time, guests }),
        }
    }
}

impl CapacityModel {
    /// Decide whether a party of `guests` fits alongside `contenders`.
    ///
    /// `contenders` must already be narrowed to the contention window.
    pub fn assess(&self, tables: &[Table], contenders: &[Reservation], guests: u32) -> Availability {
        let eligible: Vec<&Table> = tables.iter().filter(|t| t.can_seat(guests)).collect();
        if eligible.is_empty() {
            return Availability::NoEligibleTable;
        }

        // A contender counts only if some eligible table could hold it.
        // Eligible always contains the largest active table, so this equals
        // "fits any active table".
        let occupying: Vec<&Reservation> = contenders
            .iter()
            .filter(|r| eligible.iter().any(|t| t.capacity >= r.guests))
            .collect();

        let eligible_count = eligible.len();
        let occupied = occupying.len();

        let fits = match self {
            CapacityModel::Headcount => eligible_count > occupied,
            CapacityModel::TableMatching => {
                let mut parties: Vec<u32> = occupying.iter().map(|r| r.guests).collect();
                parties.push(guests);
                distinct_tables_suffice(tables, &parties)
            }
        };

        if fits {
            Availability::Available {
                eligible: eligible_count,
                occupied,
            }
        } else {
            Availability::Full {
                eligible: eligible_count,
                occupied,
            }
        }
    }
}

/// Every party can get its own active table with enough seats.
///
/// A party of size `s` may use any table with capacity >= `s`, so the usable
/// sets are nested and Hall's condition reduces to one count per party size.
fn distinct_tables_suffice(tables: &[Table], parties: &[u32]) -> bool {
    let mut capacities: Vec<u32> = tables
        .iter()
        .filter(|t| t.is_active)
        .map(|t| t.capacity)
        .collect();
    capacities.sort_unstable();

    let mut sizes = parties.to_vec();
    sizes.sort_unstable();
    sizes.dedup();

    sizes.into_iter().all(|size| {
        let demand = parties.iter().filter(|&&p| p >= size).count();
        let supply = capacities.len() - capacities.partition_point(|&c| c < size);
        demand <= supply
    })
}
