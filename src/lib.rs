//! # rideshare
//!
//! A toy ride-sharing operation in three parts:
//!
//! ## Rides, drivers, and riders
//! - [`fare::RideClass`] — closed set of fare policies (Standard, Premium),
//!   each a flat per-mile rate
//! - [`ride::Ride`] — identity, route, distance, and the fare cached at
//!   construction
//! - [`driver::Driver`] / [`rider::Rider`] — aggregates holding shared
//!   handles to the rides they served or requested, with formatted reports
//!
//! ## Weekly shift scheduling
//! - [`scheduler::Roster`] — employees and their preferences, loaded from JSON
//! - [`scheduler::Schedule`] — deterministic generation plus constraint
//!   validation against a [`scheduler::ScheduleConfig`]
//!
//! ## Concurrent greeting pipeline
//! - [`pipeline::WorkerPool`] — a bounded channel drained by a fixed pool of
//!   worker threads
//!
//! Run the demos with `cargo run --bin ride_sharing_demo`,
//! `cargo run --bin shift_scheduler`, or `cargo run --bin data_pipeline`.

pub mod driver;
pub mod fare;
pub mod pipeline;
pub mod ride;
pub mod rider;
pub mod scheduler;
