//! Random station layouts with a minimum antenna separation.
//!
//! Candidates are drawn uniformly from the station's bounding square and kept only
//! if they sit inside the station disk with a half-separation clearance ring and
//! are at least the minimum separation away from every point accepted so far. A
//! [`CellGrid`] restricts the separation check to points in nearby cells.
use std::time::{Duration, Instant};

use glam::DVec2;
use rand::RngCore;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::layout::{Layout, StopReason};
use crate::sampling::grid::CellGrid;
use crate::sampling::rand01;

/// Antennas per station in the default 38 m station.
pub const DEFAULT_ANTENNA_COUNT: usize = 256;
/// Station radius in metres.
pub const DEFAULT_STATION_RADIUS: f64 = 19.0;
/// Minimum antenna separation in metres.
pub const DEFAULT_MIN_SEPARATION: f64 = 1.5;

/// Rejection sampling of `count` points in a disk of `max_radius`, pairwise at least
/// `min_separation` apart.
///
/// Without a `timeout` or `max_attempts` the run only stops once `count` points are
/// placed, which never happens for requests denser than the disk can hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomLayoutSampling {
    /// Number of points to place.
    pub count: usize,
    /// Station radius in metres.
    pub max_radius: f64,
    /// Minimum distance between any two points in metres.
    pub min_separation: f64,
    /// Wall-clock limit, checked before every candidate.
    pub timeout: Option<Duration>,
    /// Limit on candidates drawn, accepted or not.
    pub max_attempts: Option<u64>,
}

impl Default for RandomLayoutSampling {
    fn default() -> Self {
        Self::new(
            DEFAULT_ANTENNA_COUNT,
            DEFAULT_STATION_RADIUS,
            DEFAULT_MIN_SEPARATION,
        )
    }
}

impl RandomLayoutSampling {
    /// Create a sampler with no timeout and no attempt budget.
    pub fn new(count: usize, max_radius: f64, min_separation: f64) -> Self {
        Self {
            count,
            max_radius,
            min_separation,
            timeout: None,
            max_attempts: None,
        }
    }

    /// Sets the wall-clock timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the candidate attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Validates the parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "max_radius must be finite and > 0, got {}",
                self.max_radius
            )));
        }
        if !self.min_separation.is_finite() || self.min_separation <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "min_separation must be finite and > 0, got {}",
                self.min_separation
            )));
        }

        Ok(())
    }

    /// Place up to `count` points, drawing candidates from `rng`.
    ///
    /// The same parameters and rng state always produce the same layout, in the same
    /// order. Fails only when the parameters are invalid; a run cut short by the
    /// timeout or attempt budget returns the points accepted so far.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Layout> {
        self.validate()?;

        let r_max = self.max_radius;
        let min_sep = self.min_separation;
        let margin = min_sep * 0.5;

        let mut grid = CellGrid::new(r_max, min_sep).with_capacity(self.count);
        debug!(
            "Station grid: {}x{} cells of {:.3} m, scanning {} cells around each candidate.",
            grid.size(),
            grid.size(),
            grid.cell_size(),
            grid.reach()
        );

        if self.count > 0
            && margin > r_max
            && self.timeout.is_none()
            && self.max_attempts.is_none()
        {
            warn!(
                "min_separation {} exceeds the station diameter {}; no point can be placed and sampling will not stop.",
                min_sep,
                2.0 * r_max
            );
        }

        let started = Instant::now();
        let mut points: Vec<DVec2> = Vec::with_capacity(self.count);
        let mut attempts: u64 = 0;
        let mut stop_reason = StopReason::Complete;

        while points.len() < self.count {
            if self.timeout.is_some_and(|t| started.elapsed() >= t) {
                stop_reason = StopReason::TimedOut;
                break;
            }
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                stop_reason = StopReason::AttemptsExhausted;
                break;
            }
            attempts += 1;

            let candidate = DVec2::new(
                rand01(rng) * 2.0 * r_max - r_max,
                rand01(rng) * 2.0 * r_max - r_max,
            );
            if candidate.length() + margin > r_max {
                continue;
            }

            let home = grid.cell_of(candidate);
            let crowded = grid
                .neighbors(home)
                .any(|i| candidate.distance(points[i]) < min_sep);
            if crowded {
                continue;
            }

            grid.insert(points.len(), candidate);
            points.push(candidate);
        }

        if stop_reason == StopReason::Complete {
            debug!(
                "Placed {} points after {} attempts.",
                points.len(),
                attempts
            );
        } else {
            warn!(
                "Station layout truncated ({:?}): placed {} of {} points after {} attempts.",
                stop_reason,
                points.len(),
                self.count,
                attempts
            );
        }

        Ok(Layout {
            points: points.into_iter().map(Into::into).collect(),
            requested: self.count,
            attempts,
            stop_reason,
        })
    }
}
