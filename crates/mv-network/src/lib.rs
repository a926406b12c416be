//! `mv-network` — metro dataset, route resolution, and dataset loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `Station`, `Line`, `MetroNetwork`, `MetroNetworkBuilder`   |
//! | [`resolver`] | `RouteResolver`, `Trip`, `Connection`                      |
//! | [`loader`]   | `load_network_csv`, `load_network_reader`                  |
//! | [`kolkata`]  | bundled Kolkata Metro tables                               |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Trip`/`Connection`. |

pub mod error;
pub mod kolkata;
pub mod loader;
pub mod network;
pub mod resolver;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{Line, MetroNetwork, MetroNetworkBuilder, Station};
pub use resolver::{Connection, RouteResolver, Trip};
