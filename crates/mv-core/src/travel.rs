//! Travel-time model.
//!
//! Travel time is estimated from straight-line distance at a constant
//! average speed:
//!
//! ```text
//! minutes = round_half_even(distance_km / avg_speed_kmh * 60)
//! ```
//!
//! Ties on an exact half minute round to the even neighbour (2.5 → 2,
//! 3.5 → 4), so estimates are stable against the `.5` boundaries that fall
//! out of round station spacings.

use crate::{CoreError, CoreResult};

/// Average metro speed used when nothing else is configured.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Converts distances to whole-minute travel estimates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelModel {
    /// Average speed including dwell time, km/h.  Always finite and `> 0`.
    avg_speed_kmh: f64,
}

impl TravelModel {
    /// Build a model with the given average speed.
    ///
    /// Returns [`CoreError::Config`] if the speed is not a finite positive
    /// number.
    pub fn new(avg_speed_kmh: f64) -> CoreResult<Self> {
        if !avg_speed_kmh.is_finite() || avg_speed_kmh <= 0.0 {
            return Err(CoreError::Config(format!(
                "average speed must be a positive number of km/h, got {avg_speed_kmh}"
            )));
        }
        Ok(Self { avg_speed_kmh })
    }

    pub fn avg_speed_kmh(&self) -> f64 {
        self.avg_speed_kmh
    }

    /// Estimated travel time in whole minutes.
    #[inline]
    pub fn minutes_for(&self, distance_km: f64) -> u32 {
        (distance_km / self.avg_speed_kmh * 60.0).round_ties_even() as u32
    }
}

impl Default for TravelModel {
    fn default() -> Self {
        Self { avg_speed_kmh: DEFAULT_SPEED_KMH }
    }
}
