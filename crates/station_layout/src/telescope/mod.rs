//! Telescope model directories built from generated station layouts.
//!
//! Two model shapes are supported:
//! - [`RandomStationTelescope`]: many stations sharing a small pool of random
//!   layouts, with the layout assigned to each station shuffled.
//! - [`StationArray`]: a handful of named stations at fixed geographic positions,
//!   each with its own random layout.
//!
//! Both write one `layout.txt` per station directory using [`crate::export`].
pub mod random_stations;
pub mod station_array;

pub use random_stations::{RandomStationTelescope, TelescopeModel};
pub use station_array::{NamedStation, StationArray};

/// File name of a station's antenna layout inside its directory.
pub const LAYOUT_FILE_NAME: &str = "layout.txt";

/// Result of writing a model directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The target directory already existed and was left untouched.
    Skipped,
}
