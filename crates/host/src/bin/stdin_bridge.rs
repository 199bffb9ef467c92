//! Stdin observation bridge for the guidance loop.
//!
//! Stands in for the live fiducial tracker: marker sightings typed (or
//! piped) on stdin are published into the shared observation register while
//! the guidance loop ticks on the main thread. One line per sighting:
//!
//!   <marker> <x> <y> <z>    publish a sighting (e.g. "4 0.01 -0.02 0.2")
//!   none                    marker lost (clears the slot)
//!
//! Usage:
//!   cargo run -p pad_pilot_host --bin stdin_bridge -- [OPTIONS]
//!
//! Options:
//!   --plan <ZONES>       Landing zones in visit order (default: AD)
//!   --tick-ms <MS>       Tick period in milliseconds (default: 2000)
//!   --cue-hold-ms <MS>   Hold after each cue in milliseconds (default: 1000)

use std::env;
use std::io::{self, BufRead};
use std::process;
use std::thread;
use std::time::Duration;

use pad_pilot_core::guidance::{GuidanceMachine, ZoneId, ZoneTable};
use pad_pilot_core::pose::{MarkerId, MarkerTable, RawObservation};
use pad_pilot_host::{ConsoleAnnunciator, GuidanceRunner, ObservationRegister};

struct Args {
    plan: String,
    tick_ms: u64,
    cue_hold_ms: u64,
}

fn parse_args() -> Args {
    let mut args = Args {
        plan: "AD".to_string(),
        tick_ms: 2000,
        cue_hold_ms: 1000,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--plan" => {
                i += 1;
                args.plan = raw
                    .get(i)
                    .unwrap_or_else(|| {
                        eprintln!("Error: --plan requires a value");
                        process::exit(1);
                    })
                    .clone();
            }
            "--tick-ms" => {
                i += 1;
                args.tick_ms = parse_u64_arg(&raw, i, "tick-ms");
            }
            "--cue-hold-ms" => {
                i += 1;
                args.cue_hold_ms = parse_u64_arg(&raw, i, "cue-hold-ms");
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn parse_u64_arg(raw: &[String], i: usize, name: &str) -> u64 {
    raw.get(i)
        .unwrap_or_else(|| {
            eprintln!("Error: --{name} requires a value");
            process::exit(1);
        })
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Error: invalid value for --{name}");
            process::exit(1);
        })
}

fn print_usage() {
    eprintln!(
        "Usage: stdin_bridge [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --plan <ZONES>       Landing zones in visit order (default: AD)\n\
         \x20 --tick-ms <MS>       Tick period in milliseconds (default: 2000)\n\
         \x20 --cue-hold-ms <MS>   Hold after each cue in milliseconds (default: 1000)\n\
         \x20 -h, --help           Show this help"
    );
}

fn parse_plan(raw: &str) -> Vec<ZoneId> {
    let mut plan = Vec::new();
    for letter in raw.chars() {
        match letter.to_string().parse::<ZoneId>() {
            Ok(zone) => plan.push(zone),
            Err(_) => {
                eprintln!("Error: unknown zone letter '{letter}' in plan");
                process::exit(1);
            }
        }
    }
    plan
}

fn parse_observation(line: &str) -> Option<RawObservation> {
    let mut parts = line.split_whitespace();
    let marker = MarkerId(parts.next()?.parse().ok()?);
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(RawObservation::new(marker, x, y, z))
}

fn read_observations(register: ObservationRegister) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "none" {
            register.clear();
            continue;
        }
        match parse_observation(trimmed) {
            Some(observation) => register.publish(observation),
            None => log::warn!("ignoring unparseable observation line: {trimmed}"),
        }
    }
    // Stdin closed: leave the last sighting in place, the guidance loop
    // finishes the plan from whatever the tracker last reported.
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args();
    let plan = parse_plan(&args.plan);

    println!("=== pad_pilot stdin bridge ===");
    println!(
        "Plan: {}, tick: {} ms, cue hold: {} ms",
        args.plan, args.tick_ms, args.cue_hold_ms
    );
    println!("Enter sightings as \"<marker> <x> <y> <z>\", or \"none\" when the marker is lost.\n");

    let register = ObservationRegister::new();
    let reader = register.clone();
    thread::spawn(move || read_observations(reader));

    let machine = GuidanceMachine::new(MarkerTable::standard(), &ZoneTable::standard(), &plan)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });

    let mut annunciator = ConsoleAnnunciator::with_hold(Duration::from_millis(args.cue_hold_ms));
    let mut runner =
        GuidanceRunner::with_period(machine, register, Duration::from_millis(args.tick_ms));

    match runner.run(&mut annunciator) {
        Ok(()) => println!("Landing plan complete."),
        Err(e) => {
            eprintln!("Guidance aborted: {e}");
            process::exit(1);
        }
    }
}
