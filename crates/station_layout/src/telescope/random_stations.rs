//! Telescope models whose stations reuse a pool of random layouts.
use std::fs;
use std::path::Path;

use rand::RngCore;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::export::save_layout;
use crate::layout::Layout;
use crate::sampling::{rand_index, RandomLayoutSampling};
use crate::telescope::{WriteOutcome, LAYOUT_FILE_NAME};

/// Stations in the full random-station telescope.
pub const DEFAULT_NUM_STATIONS: usize = 512;

/// `num_stations` stations, each using one of `num_layouts` distinct random layouts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomStationTelescope {
    pub num_stations: usize,
    /// Number of distinct station layouts to generate.
    pub num_layouts: usize,
    /// Sampler used for every station layout.
    pub station: RandomLayoutSampling,
}

impl RandomStationTelescope {
    /// Create a model with default 38 m stations.
    pub fn new(num_stations: usize, num_layouts: usize) -> Self {
        Self {
            num_stations,
            num_layouts,
            station: RandomLayoutSampling::default(),
        }
    }

    /// Sets the station layout sampler.
    pub fn with_station(mut self, station: RandomLayoutSampling) -> Self {
        self.station = station;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.num_stations > 0 && self.num_layouts == 0 {
            return Err(Error::InvalidParameter(
                "num_layouts must be > 0 when there are stations".into(),
            ));
        }
        self.station.validate()
    }

    /// Conventional directory name for this model.
    pub fn default_dir_name(&self) -> String {
        format!(
            "SKA1-LOW_SKO-0000422_Rev3_{:03}_different_38m_stations.tm",
            self.num_layouts
        )
    }

    /// Generate the layout pool and the shuffled station-to-layout assignment.
    ///
    /// Layouts are generated first, in order, then the assignment is shuffled, all
    /// from `rng`.
    pub fn build(&self, rng: &mut dyn RngCore) -> Result<TelescopeModel> {
        self.validate()?;

        let mut layouts = Vec::with_capacity(self.num_layouts);
        for _ in 0..self.num_layouts {
            layouts.push(self.station.generate(rng)?);
        }

        let mut station_types: Vec<usize> = (0..self.num_stations)
            .map(|i| i % self.num_layouts)
            .collect();
        shuffle(&mut station_types, rng);

        let truncated = layouts.iter().filter(|l| !l.is_complete()).count();
        if truncated > 0 {
            warn!(
                "{} of {} station layouts are short of {} antennas.",
                truncated, self.num_layouts, self.station.count
            );
        }
        info!(
            "Built telescope model: {} stations over {} layouts.",
            self.num_stations, self.num_layouts
        );

        Ok(TelescopeModel {
            layouts,
            station_types,
        })
    }
}

/// Generated layouts plus the layout index used by each station.
///
/// Only [`RandomStationTelescope::build`] creates models, so every station type
/// indexes a generated layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TelescopeModel {
    layouts: Vec<Layout>,
    station_types: Vec<usize>,
}

impl TelescopeModel {
    /// The distinct station layouts, in generation order.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// `station_types()[i]` indexes into [`Self::layouts`] for station `i`.
    pub fn station_types(&self) -> &[usize] {
        &self.station_types
    }

    pub fn num_stations(&self) -> usize {
        self.station_types.len()
    }

    /// Layout for station `index`.
    pub fn station_layout(&self, index: usize) -> Option<&Layout> {
        self.station_types
            .get(index)
            .and_then(|&t| self.layouts.get(t))
    }

    /// Number of stations assigned to each layout.
    pub fn type_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.layouts.len()];
        for &t in &self.station_types {
            counts[t] += 1;
        }
        counts
    }

    /// Directory name of station `index` using layout `station_type`.
    pub fn station_dir_name(index: usize, station_type: usize) -> String {
        format!("station{:03}-type{:03}", index, station_type)
    }

    /// Write one directory per station under `dir`.
    ///
    /// An existing `dir` is left untouched and reported as [`WriteOutcome::Skipped`].
    pub fn write(&self, dir: impl AsRef<Path>, precision: usize) -> Result<WriteOutcome> {
        let dir = dir.as_ref();
        if dir.exists() {
            warn!("{} already exists; skipping.", dir.display());
            return Ok(WriteOutcome::Skipped);
        }

        fs::create_dir_all(dir)?;
        for (index, &station_type) in self.station_types.iter().enumerate() {
            let station_dir = dir.join(Self::station_dir_name(index, station_type));
            fs::create_dir(&station_dir)?;
            save_layout(
                station_dir.join(LAYOUT_FILE_NAME),
                &self.layouts[station_type],
                precision,
            )?;
        }

        info!(
            "Wrote {} stations to {}; stations per layout: {:?}.",
            self.station_types.len(),
            dir.display(),
            self.type_counts()
        );
        Ok(WriteOutcome::Written)
    }
}

/// In-place Fisher-Yates shuffle, swapping from the back.
fn shuffle<T>(items: &mut [T], rng: &mut dyn RngCore) {
    for i in (1..items.len()).rev() {
        let j = rand_index(rng, i + 1);
        items.swap(i, j);
    }
}
