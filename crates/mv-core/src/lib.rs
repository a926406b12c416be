//! `mv-core` — foundational types for the `metro_view` workspace.
//!
//! This crate is a dependency of every other `mv-*` crate.  It has no `mv-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `StationId`, `LineId`                            |
//! | [`geo`]    | `GeoPoint`, haversine distance, midpoint         |
//! | [`color`]  | `Rgb` display colour, `#RRGGBB` parsing          |
//! | [`travel`] | `TravelModel` (average speed → minutes)          |
//! | [`error`]  | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod error;
pub mod geo;
pub mod ids;
pub mod travel;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{LineId, StationId};
pub use travel::TravelModel;
