use std::fmt::Write as _;
use std::rc::Rc;

use thiserror::Error;

use crate::ride::Ride;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DriverError {
    #[error("driver id must not be empty")]
    EmptyId,

    #[error("rating must lie in 0.0..=5.0, got {0}")]
    RatingOutOfRange(f64),
}

/// A driver and the rides they have served.
///
/// Rides are held as shared handles: a ride stays alive as long as any
/// driver, rider, or the creating scope still holds it. The ride list is
/// append-only and the rating never changes after construction.
#[derive(Debug, Clone)]
pub struct Driver {
    id: String,
    name: String,
    rating: f64,
    assigned_rides: Vec<Rc<Ride>>,
}

impl Driver {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: f64,
    ) -> Result<Self, DriverError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DriverError::EmptyId);
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(DriverError::RatingOutOfRange(rating));
        }

        Ok(Self {
            id,
            name: name.into(),
            rating,
            assigned_rides: Vec::new(),
        })
    }

    /// Record a served ride.
    pub fn add_ride(&mut self, ride: &Rc<Ride>) {
        self.assigned_rides.push(Rc::clone(ride));
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn ride_count(&self) -> usize {
        self.assigned_rides.len()
    }

    pub fn rides(&self) -> &[Rc<Ride>] {
        &self.assigned_rides
    }

    /// Formatted driver report: identity, rating to two decimals, and the
    /// ids of every served ride.
    pub fn info(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Driver Information ===");
        let _ = writeln!(out, "Driver ID: {}", self.id);
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Rating: {:.2} / 5.0", self.rating);
        let _ = write!(out, "Total Rides Completed: {}", self.assigned_rides.len());

        if !self.assigned_rides.is_empty() {
            let _ = write!(out, "\n\nAssigned Rides:");
            for (i, ride) in self.assigned_rides.iter().enumerate() {
                let _ = write!(out, "\n  Ride {}: {}", i + 1, ride.id());
            }
        }

        out
    }
}
