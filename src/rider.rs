use std::fmt::Write as _;
use std::rc::Rc;

use thiserror::Error;

use crate::ride::Ride;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiderError {
    #[error("rider id must not be empty")]
    EmptyId,
}

/// A rider and the rides they have requested, newest last.
#[derive(Debug, Clone)]
pub struct Rider {
    id: String,
    name: String,
    requested_rides: Vec<Rc<Ride>>,
}

impl Rider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, RiderError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RiderError::EmptyId);
        }

        Ok(Self {
            id,
            name: name.into(),
            requested_rides: Vec::new(),
        })
    }

    /// Record a requested ride. Same append-only contract as
    /// [`crate::driver::Driver::add_ride`].
    pub fn request_ride(&mut self, ride: &Rc<Ride>) {
        self.requested_rides.push(Rc::clone(ride));
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ride_count(&self) -> usize {
        self.requested_rides.len()
    }

    pub fn rides(&self) -> &[Rc<Ride>] {
        &self.requested_rides
    }

    /// Formatted ride history, delegating each entry to [`Ride::details`].
    /// An empty history renders a message rather than an empty list.
    pub fn view_rides(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Ride History for {} ===", self.name);
        let _ = writeln!(out, "Rider ID: {}", self.id);
        let _ = write!(out, "Total Rides Requested: {}", self.requested_rides.len());

        if self.requested_rides.is_empty() {
            let _ = write!(out, "\nNo rides requested yet.");
        } else {
            let _ = write!(out, "\n\nRide Details:");
            for (i, ride) in self.requested_rides.iter().enumerate() {
                let _ = write!(out, "\n\n--- Ride {} ---\n{}", i + 1, ride.details());
            }
        }

        out
    }
}
