use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hotel_reservation"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute hotel_reservation")
}

/// Test that a single booking on an empty hotel picks the rooms by the stairs
#[test]
fn test_default_booking_runs() {
    let output = run_cli(&["--book", "3"]);

    assert!(
        output.status.success(),
        "Booking failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Booked rooms: 101, 102, 103 (travel time: 2 min)"),
        "Missing booking line. stdout: {}",
        stdout
    );
    assert!(stdout.contains("=== Final State ==="));
    assert!(stdout.contains("Occupied: 3 / 97 | Available: 94"));
    assert!(stdout.contains("Floor  1 | * * * . . . . . . ."));
}

/// Test that several bookings are processed in order against occupied rooms
#[test]
fn test_bookings_with_occupied_rooms() {
    let output = run_cli(&["--occupied", "101,102", "--book", "2", "1", "--no-map"]);

    assert!(output.status.success(), "Booking failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Booked rooms: 103, 104 (travel time: 1 min)"));
    assert!(stdout.contains("Booked rooms: 105 (travel time: 0 min)"));
    assert!(stdout.contains("Occupied: 5 / 97"));
    assert!(!stdout.contains("Floor"), "Map printed despite --no-map");
}

/// Test that a seeded random occupancy is reported and reproducible
#[test]
fn test_seeded_random_occupancy() {
    let first = run_cli(&["--random", "--seed", "9", "--book", "5"]);
    let second = run_cli(&["--random", "--seed", "9", "--book", "5"]);

    assert!(first.status.success(), "Random run failed");
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("Generated random occupancy:"));
    assert_eq!(first.stdout, second.stdout);
}

/// Test that out-of-range input makes the process fail
#[test]
fn test_invalid_input_fails() {
    let bad_count = run_cli(&["--book", "6"]);
    assert!(!bad_count.status.success());
    assert!(String::from_utf8_lossy(&bad_count.stderr).contains("Invalid room count 6"));

    let bad_room = run_cli(&["--occupied", "1011"]);
    assert!(!bad_room.status.success());
    assert!(String::from_utf8_lossy(&bad_room.stderr).contains("Invalid room identifier: 1011"));
}
