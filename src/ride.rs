use std::fmt::Write as _;

use thiserror::Error;

use crate::fare::RideClass;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RideError {
    #[error("ride id must not be empty")]
    EmptyId,

    #[error("distance must be non-negative, got {0}")]
    NegativeDistance(f64),
}

/// A single ride: identity, route, distance, and the fare cached for it.
///
/// The fare is computed once at construction from the ride class and never
/// changes unless a caller recomputes it and writes it back with
/// [`Ride::set_fare`]. Distance is fixed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: String,
    pickup: String,
    dropoff: String,
    distance: f64,
    class: RideClass,
    fare_amount: f64,
}

impl Ride {
    /// Build a ride, rejecting empty ids and negative distances, and cache
    /// the fare for its class.
    pub fn new(
        class: RideClass,
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance: f64,
    ) -> Result<Self, RideError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RideError::EmptyId);
        }
        if distance < 0.0 {
            return Err(RideError::NegativeDistance(distance));
        }

        Ok(Self {
            id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance,
            class,
            fare_amount: class.fare(distance),
        })
    }

    pub fn standard(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance: f64,
    ) -> Result<Self, RideError> {
        Self::new(RideClass::Standard, id, pickup, dropoff, distance)
    }

    pub fn premium(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance: f64,
    ) -> Result<Self, RideError> {
        Self::new(RideClass::Premium, id, pickup, dropoff, distance)
    }

    /// Recompute the fare from distance and class. Pure; does not touch the
    /// cached amount.
    pub fn fare(&self) -> f64 {
        self.class.fare(self.distance)
    }

    /// Overwrite the cached fare amount.
    pub fn set_fare(&mut self, fare: f64) {
        self.fare_amount = fare;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pickup_location(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff_location(&self) -> &str {
        &self.dropoff
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn class(&self) -> RideClass {
        self.class
    }

    /// The fare cached at construction or by the last [`Ride::set_fare`].
    pub fn fare_amount(&self) -> f64 {
        self.fare_amount
    }

    /// Human-readable detail block, money and distance fixed to two decimals.
    pub fn details(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Ride Details ===");
        let _ = writeln!(out, "Ride ID: {}", self.id);
        let _ = writeln!(out, "Pickup Location: {}", self.pickup);
        let _ = writeln!(out, "Dropoff Location: {}", self.dropoff);
        let _ = writeln!(out, "Distance: {:.2} miles", self.distance);
        let _ = write!(out, "Fare: ${:.2}", self.fare_amount);
        out
    }
}
