//! Generated station layouts.
use glam::DVec2;
use mint::Vector2;

/// Why a sampling run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The requested number of points was placed.
    Complete,
    /// The wall-clock timeout elapsed first.
    TimedOut,
    /// The candidate attempt budget ran out first.
    AttemptsExhausted,
}

/// Antenna positions accepted by one sampling run, in acceptance order.
///
/// Coordinates are metres relative to the station centre. A layout shorter than
/// the requested count is a valid result; check [`Layout::is_complete`] or
/// [`Layout::stop_reason`] to tell the cases apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Accepted positions.
    pub points: Vec<Vector2<f64>>,
    /// Number of points that were requested.
    pub requested: usize,
    /// Candidates drawn, accepted or not.
    pub attempts: u64,
    /// Whether the run placed every point or was cut short, and by which limit.
    pub stop_reason: StopReason,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every requested point was placed.
    pub fn is_complete(&self) -> bool {
        self.stop_reason == StopReason::Complete
    }

    /// Positions as `[x, y]` rows.
    pub fn rows(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().map(|p| [p.x, p.y])
    }

    /// Smallest distance between any two points, or `None` with fewer than two points.
    pub fn min_separation(&self) -> Option<f64> {
        let points: Vec<DVec2> = self.points.iter().map(|&p| DVec2::from(p)).collect();
        let mut min: Option<f64> = None;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d = a.distance(*b);
                if min.is_none_or(|m| d < m) {
                    min = Some(d);
                }
            }
        }
        min
    }

    /// Largest distance of any point from the station centre.
    pub fn max_radius(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|&p| DVec2::from(p).length())
            .max_by(f64::total_cmp)
    }
}
