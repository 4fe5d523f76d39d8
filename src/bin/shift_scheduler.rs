//! Weekly shift scheduler: loads a roster JSON (and optionally a TOML
//! config), generates the schedule, and prints the table, summary, and
//! constraint validation.
//!
//! Usage: shift_scheduler [roster.json] [config.toml]

use std::env;
use std::path::Path;
use std::process;

use colored::Colorize;

use rideshare::scheduler::{Roster, Schedule, ScheduleConfig, ScheduleError};

const DEFAULT_ROSTER: &str = "data/employee_data.json";

fn main() {
    let args: Vec<String> = env::args().collect();
    let roster_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_ROSTER);
    let config_path = args.get(2).map(String::as_str);

    if let Err(err) = run(roster_path, config_path) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(roster_path: &str, config_path: Option<&str>) -> Result<(), ScheduleError> {
    let roster = Roster::load(Path::new(roster_path))?;
    println!(
        "Successfully loaded {} employees from {}",
        roster.len(),
        roster_path
    );

    let config = match config_path {
        Some(path) => ScheduleConfig::load(Path::new(path))?,
        None => ScheduleConfig::default(),
    };

    println!("{}", roster.render_input());

    println!("GENERATING SCHEDULE...");
    println!("{}", "-".repeat(40));
    let schedule = Schedule::generate(roster, &config)?;
    println!("Schedule generation completed!\n");

    println!("{}\n", schedule.render_table());
    println!("{}", schedule.render_summary());
    println!("{}", schedule.render_validation(&config));

    Ok(())
}
