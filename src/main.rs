use anyhow::bail;
use clap::{Parser, Subcommand};

use evently_api::Api;
use evently_core::{EventId, NewParticipant, ParticipantId, VenueId};
use evently_store::Store;

#[derive(Parser)]
#[command(name = "evently", about = "Event management demo over the simulated API")]
struct Cli {
    /// Skip the simulated network latency.
    #[arg(long)]
    no_delay: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all events
    Events,
    /// Show one event
    Event { id: EventId },
    /// List all participants
    Participants,
    /// List all organizers
    Organizers,
    /// List venues and their slot availability
    Venues,
    /// Sign up a new participant and register them for an event
    Signup {
        event_id: EventId,
        name: String,
        email: String,
    },
    /// Register an existing participant for an event
    Register {
        event_id: EventId,
        participant_id: ParticipantId,
    },
    /// Unregister a participant from an event
    Unregister {
        event_id: EventId,
        participant_id: ParticipantId,
    },
    /// Assign a venue to an event
    AssignVenue {
        event_id: EventId,
        venue_id: VenueId,
    },
    /// Delete an event
    DeleteEvent { id: EventId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Demo store: seeded once per process, gone on exit.
    let store = Store::seeded();
    let api = if cli.no_delay {
        Api::without_delay(store)
    } else {
        Api::with_simulated_latency(store)
    };
    tracing::info!(simulated_latency = !cli.no_delay, "facade ready");

    match cli.command {
        Command::Events => {
            for event in api.list_events().await {
                let venue = event
                    .venue
                    .as_ref()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "unassigned".into());
                println!(
                    "{}  {}  {}  venue: {}  {}/{} registered",
                    event.id,
                    event.date.format("%Y-%m-%d"),
                    event.title,
                    venue,
                    event.participants.len(),
                    event.capacity,
                );
            }
        }
        Command::Event { id } => {
            let Some(event) = api.get_event(&id).await else {
                bail!("event {id} not found");
            };
            println!("{}  {}", event.id, event.title);
            println!("  {}", event.description);
            println!("  date: {}", event.date.format("%Y-%m-%d"));
            println!("  organizer: {}", event.organizer);
            match &event.venue {
                Some(venue) => println!("  venue: {venue}"),
                None => println!("  venue: unassigned"),
            }
            println!(
                "  registered: {}/{} ({} spots left)",
                event.participants.len(),
                event.capacity,
                event.spots_left(),
            );
            for participant_id in &event.participants {
                println!("    {participant_id}");
            }
        }
        Command::Participants => {
            for p in api.list_participants().await {
                println!(
                    "{}  {}  <{}>  {} event(s)",
                    p.id,
                    p.name,
                    p.email,
                    p.registered_events.len(),
                );
            }
        }
        Command::Organizers => {
            for o in api.list_organizers().await {
                println!(
                    "{}  {}  <{}>  manages {} event(s)",
                    o.id,
                    o.name,
                    o.email,
                    o.managed_events.len(),
                );
            }
        }
        Command::Venues => {
            for venue in api.list_venues().await {
                let free = venue.available_slots.iter().filter(|s| !s.is_booked).count();
                println!(
                    "{}  {}  {}  capacity {}  {}/{} slots free",
                    venue.id,
                    venue.name,
                    venue.address,
                    venue.capacity,
                    free,
                    venue.available_slots.len(),
                );
            }
        }
        Command::Signup {
            event_id,
            name,
            email,
        } => {
            let participant = api
                .create_participant(NewParticipant {
                    name,
                    email,
                    registered_events: vec![],
                })
                .await;
            println!("created {}", participant.id);
            if !api.register_for_event(&event_id, &participant.id).await {
                bail!("registration failed: event {event_id} not found");
            }
            println!("registered {} for {event_id}", participant.id);
        }
        Command::Register {
            event_id,
            participant_id,
        } => {
            if !api.register_for_event(&event_id, &participant_id).await {
                bail!("registration failed: unknown event or participant");
            }
            println!("registered {participant_id} for {event_id}");
        }
        Command::Unregister {
            event_id,
            participant_id,
        } => {
            if !api.unregister_from_event(&event_id, &participant_id).await {
                bail!("unregister failed: unknown event or participant");
            }
            println!("unregistered {participant_id} from {event_id}");
        }
        Command::AssignVenue { event_id, venue_id } => {
            if !api.assign_venue_to_event(&event_id, &venue_id).await {
                bail!("assignment failed: unknown event or venue");
            }
            println!("assigned {venue_id} to {event_id}");
        }
        Command::DeleteEvent { id } => {
            if !api.delete_event(&id).await {
                bail!("event {id} not found");
            }
            println!("deleted {id}");
        }
    }

    Ok(())
}
