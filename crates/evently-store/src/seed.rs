//! Fixed demo records loaded at process start.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use evently_core::{
    Event, EventId, Organizer, OrganizerId, Participant, ParticipantId, TimeSlot, Venue, VenueId,
};

use crate::store::Collections;

/// The demo data set: 4 events, 4 participants, 3 organizers, 3 venues.
pub fn collections() -> Collections {
    let now = Utc::now();
    let today = now.date_naive();

    Collections {
        events: vec![
            event(
                1,
                "Tech Conference 2023",
                "A conference exploring the latest technologies and innovations in the tech industry.",
                date(2023, 6, 15),
                Some(1),
                1,
                &[1, 2],
                Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2070&auto=format&fit=crop"),
                500,
                now,
            ),
            event(
                2,
                "Web Development Workshop",
                "Hands-on workshop teaching modern web development techniques.",
                date(2023, 7, 20),
                Some(2),
                2,
                &[3],
                Some("https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2070&auto=format&fit=crop"),
                50,
                now,
            ),
            event(
                3,
                "AI Summit",
                "Exploring the future of artificial intelligence and its implications.",
                date(2023, 8, 10),
                Some(1),
                1,
                &[],
                Some("https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?q=80&w=2070&auto=format&fit=crop"),
                300,
                now,
            ),
            event(
                4,
                "Startup Networking Night",
                "Connect with founders, investors, and industry experts.",
                date(2023, 9, 5),
                Some(3),
                3,
                &[1, 4],
                Some("https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=2032&auto=format&fit=crop"),
                100,
                now,
            ),
        ],
        participants: vec![
            participant(1, "John Doe", "john.doe@example.com", &[1, 4], now),
            participant(2, "Jane Smith", "jane.smith@example.com", &[1], now),
            participant(3, "Bob Johnson", "bob.johnson@example.com", &[2], now),
            participant(4, "Alice Brown", "alice.brown@example.com", &[4], now),
        ],
        organizers: vec![
            organizer(1, "TechEvents Inc", "contact@techevents.com", &[1, 3], now),
            organizer(2, "WebDev Academy", "info@webdevacademy.com", &[2], now),
            organizer(3, "Startup Hub", "connect@startuphub.com", &[4], now),
        ],
        venues: vec![
            venue(1, "Grand Conference Center", "123 Main St, City Center", 500, today, now),
            venue(2, "Tech Hub", "456 Innovation Ave, Tech District", 150, today, now),
            venue(3, "Startup Space", "789 Entrepreneur Blvd, Business Park", 100, today, now),
        ],
    }
}

/// 56 hourly slots: the next 7 days, 9:00-17:00, all unbooked.
fn next_week_slots(today: NaiveDate) -> Vec<TimeSlot> {
    (0..7)
        .flat_map(|day| {
            let slot_date = today + Duration::days(day);
            (9..17).map(move |hour| TimeSlot::hourly(slot_date, hour))
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Seed dates are fixed literals; a UTC calendar date is never ambiguous.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn event(
    seq: usize,
    title: &str,
    description: &str,
    date: DateTime<Utc>,
    venue_seq: Option<usize>,
    organizer_seq: usize,
    participant_seqs: &[usize],
    image: Option<&str>,
    capacity: u32,
    now: DateTime<Utc>,
) -> Event {
    Event {
        id: EventId::from_seq(seq),
        title: title.to_string(),
        description: description.to_string(),
        date,
        venue: venue_seq.map(VenueId::from_seq),
        organizer: OrganizerId::from_seq(organizer_seq),
        participants: participant_seqs.iter().map(|&s| ParticipantId::from_seq(s)).collect(),
        image: image.map(str::to_string),
        capacity,
        created_at: now,
        updated_at: now,
    }
}

fn participant(
    seq: usize,
    name: &str,
    email: &str,
    event_seqs: &[usize],
    now: DateTime<Utc>,
) -> Participant {
    Participant {
        id: ParticipantId::from_seq(seq),
        name: name.to_string(),
        email: email.to_string(),
        registered_events: event_seqs.iter().map(|&s| EventId::from_seq(s)).collect(),
        created_at: now,
        updated_at: now,
    }
}

fn organizer(
    seq: usize,
    name: &str,
    email: &str,
    event_seqs: &[usize],
    now: DateTime<Utc>,
) -> Organizer {
    Organizer {
        id: OrganizerId::from_seq(seq),
        name: name.to_string(),
        email: email.to_string(),
        managed_events: event_seqs.iter().map(|&s| EventId::from_seq(s)).collect(),
        created_at: now,
        updated_at: now,
    }
}

fn venue(
    seq: usize,
    name: &str,
    address: &str,
    capacity: u32,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Venue {
    Venue {
        id: VenueId::from_seq(seq),
        name: name.to_string(),
        address: address.to_string(),
        capacity,
        available_slots: next_week_slots(today),
        created_at: now,
        updated_at: now,
    }
}
