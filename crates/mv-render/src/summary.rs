//! Human-readable trip summary.

use std::fmt;

use mv_network::{Connection, Trip};

/// Delimiter between line or station names in a summary.
pub const NAME_DELIMITER: &str = ", ";

/// `Display` adapter over a resolved [`Trip`].
///
/// ```text
/// Route: Dakshineswar → Howrah Maidan
/// Distance: 5.13 km
/// Travel time: 10 minutes
/// No direct connection. Try changing at: Esplanade
/// ```
pub struct TripSummary<'a> {
    trip: &'a Trip,
}

impl<'a> TripSummary<'a> {
    pub fn new(trip: &'a Trip) -> Self {
        Self { trip }
    }

    /// The final line of the summary, describing how to get there.
    pub fn connection_line(&self) -> String {
        match &self.trip.connection {
            Connection::SameStation => "Source and destination are the same station.".to_owned(),
            Connection::Direct(lines) => format!("Direct: {}", lines.join(NAME_DELIMITER)),
            Connection::Interchange(stations) => format!(
                "No direct connection. Try changing at: {}",
                stations.join(NAME_DELIMITER)
            ),
            Connection::NoConnection => {
                "No direct connection and no single interchange found.".to_owned()
            }
        }
    }
}

impl fmt::Display for TripSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trip = self.trip;
        if trip.connection == Connection::SameStation {
            return f.write_str(&self.connection_line());
        }
        writeln!(f, "Route: {} → {}", trip.source, trip.destination)?;
        writeln!(f, "Distance: {:.2} km", trip.distance_km)?;
        writeln!(f, "Travel time: {} minutes", trip.minutes)?;
        f.write_str(&self.connection_line())
    }
}
