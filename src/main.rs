use anyhow::{Context, Result};
use clap::Parser;
use hotel_reservation::reservation::{Hotel, ReservationError};

#[derive(Parser)]
#[command(name = "hotel_reservation")]
#[command(about = "Book hotel rooms with minimal travel time between them")]
struct Cli {
    /// Number of rooms for each booking, processed in order (1-5 each)
    #[arg(long, num_args = 1.., default_values_t = [1])]
    book: Vec<usize>,

    /// Rooms already occupied before booking, comma separated (e.g. 101,102,205)
    #[arg(long, value_delimiter = ',')]
    occupied: Vec<u32>,

    /// Start from a random occupancy instead of an empty hotel
    #[arg(long)]
    random: bool,

    /// Seed for the random occupancy
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the floor map
    #[arg(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let hotel = match cli.seed {
        Some(seed) => Hotel::new_with_seed(seed),
        None => Hotel::new(),
    };

    run(hotel, cli)
}

/// Apply the starting occupancy, then process each booking request in order
fn run(mut hotel: Hotel, cli: Cli) -> Result<()> {
    if cli.random {
        let occupied = hotel.randomize_occupancy();
        println!("Generated random occupancy: {} rooms occupied", occupied);
    }

    hotel
        .occupy(&cli.occupied)
        .context("Failed to mark occupied rooms")?;

    println!("Initial state:");
    print_state(&hotel, cli.no_map);

    for count in cli.book {
        match hotel.book(count) {
            Ok(booking) => {
                let rooms: Vec<String> = booking.rooms.iter().map(u32::to_string).collect();
                println!(
                    "Booked rooms: {} (travel time: {} min)",
                    rooms.join(", "),
                    booking.travel_time
                );
            }
            Err(e @ ReservationError::InfeasibleRequest { .. }) => println!("{}", e),
            Err(e) => return Err(e).with_context(|| format!("Failed to book {} rooms", count)),
        }
    }

    println!();
    println!("=== Final State ===");
    print_state(&hotel, cli.no_map);

    Ok(())
}

fn print_state(hotel: &Hotel, no_map: bool) {
    println!("{}", hotel.summary());
    if !no_map {
        print!("{}", hotel.draw_map());
    }
}
