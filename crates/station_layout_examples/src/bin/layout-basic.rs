use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use station_layout::prelude::*;
use station_layout_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One 38 m station: 256 antennas at least 1.5 m apart.
    // The timeout only matters if the parameters are made denser than the disk allows.
    let sampling = RandomLayoutSampling::new(256, 19.0, 1.5).with_timeout(Duration::from_secs(30));
    let mut rng = StdRng::seed_from_u64(1);

    let layout = sampling.generate(&mut rng)?;
    if !layout.is_complete() {
        anyhow::bail!(
            "placed only {} of {} antennas ({:?})",
            layout.len(),
            layout.requested,
            layout.stop_reason
        );
    }

    info!(
        "Placed {} antennas in {} attempts; closest pair {:.3} m, outermost antenna at {:.3} m.",
        layout.len(),
        layout.attempts,
        layout.min_separation().unwrap_or(f64::NAN),
        layout.max_radius().unwrap_or(f64::NAN)
    );

    let out = "layout-basic.txt";
    save_layout(out, &layout, DEFAULT_PRECISION)?;
    info!("Wrote {}", out);
    Ok(())
}
