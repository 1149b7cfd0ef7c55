use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::VenueId;

/// A physical location with a capacity and a set of bookable time slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    pub capacity: u32,
    pub available_slots: Vec<TimeSlot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An hour-long bookable window. Slots carry no id of their own; identity is
/// positional (date + start time).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
}

impl TimeSlot {
    /// An unbooked slot covering `[hour, hour + 1)` on the given day.
    pub fn hourly(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            start_time: format!("{hour}:00"),
            end_time: format!("{}:00", hour + 1),
            is_booked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_slot_spans_one_hour() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let slot = TimeSlot::hourly(date, 9);
        assert_eq!(slot.start_time, "9:00");
        assert_eq!(slot.end_time, "10:00");
        assert!(!slot.is_booked);
    }

    #[test]
    fn identity_is_positional() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let slot = TimeSlot::hourly(date, 10);
        assert_eq!(slot, TimeSlot::hourly(date, 10));
        assert_ne!(slot, TimeSlot::hourly(date, 11));
        assert_ne!(slot, TimeSlot::hourly(date.succ_opt().unwrap(), 10));
    }
}
