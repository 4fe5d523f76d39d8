use std::fmt;

/// Fare policy for a ride.
///
/// The set of classes is closed and known up front, so the policy is an enum
/// rather than a trait object: each class carries a flat per-mile rate, and
/// the fare is that rate applied to the ride distance. Adding a class means
/// adding one arm and its rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideClass {
    Standard,
    Premium,
}

impl RideClass {
    pub const STANDARD_RATE_PER_MILE: f64 = 1.50;
    pub const PREMIUM_RATE_PER_MILE: f64 = 2.50;

    pub fn rate_per_mile(&self) -> f64 {
        match self {
            RideClass::Standard => Self::STANDARD_RATE_PER_MILE,
            RideClass::Premium => Self::PREMIUM_RATE_PER_MILE,
        }
    }

    /// Fare for a ride of `distance` miles under this class.
    pub fn fare(&self, distance: f64) -> f64 {
        distance * self.rate_per_mile()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RideClass::Standard => "Standard",
            RideClass::Premium => "Premium",
        }
    }
}

impl fmt::Display for RideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
