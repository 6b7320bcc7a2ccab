#![forbid(unsafe_code)]
//! station_layout: random antenna layouts for radio-telescope stations, and the
//! telescope model directories built from them.
//!
//! Modules:
//! - sampling: grid-accelerated rejection sampling of points with a minimum separation
//! - layout: the generated point set and why sampling stopped
//! - export: delimited text output of layouts and coordinate tables
//! - telescope: random-station and named-station telescope model directories
//!
//! For examples, see the `station_layout_examples` crate.
pub mod error;
pub mod export;
pub mod layout;
pub mod sampling;
pub mod telescope;

/// Convenient re-exports for common types. Import with `use station_layout::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::export::{save_layout, save_rows, write_rows, DEFAULT_PRECISION};
    pub use crate::layout::{Layout, StopReason};
    pub use crate::sampling::random_layout::{
        DEFAULT_ANTENNA_COUNT, DEFAULT_MIN_SEPARATION, DEFAULT_STATION_RADIUS,
    };
    pub use crate::sampling::{CellGrid, RandomLayoutSampling};
    pub use crate::telescope::random_stations::DEFAULT_NUM_STATIONS;
    pub use crate::telescope::station_array::AA05_DIR_NAME;
    pub use crate::telescope::{
        NamedStation, RandomStationTelescope, StationArray, TelescopeModel, WriteOutcome,
    };
}
