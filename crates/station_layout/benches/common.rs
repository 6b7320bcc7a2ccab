use std::time::Duration;

use criterion::{Criterion, Throughput};

// A full 256-antenna station takes milliseconds and telescope builds take tens of
// milliseconds, so fewer, longer samples keep the run short without losing precision.
pub const SAMPLE_SIZE: usize = 10;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(5);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
        .noise_threshold(0.05)
}

/// Throughput in placed antennas; a run that places none still counts as one element.
pub fn antennas_throughput(antennas: usize) -> Throughput {
    Throughput::Elements(antennas.max(1) as u64)
}
