use rand::rngs::StdRng;
use rand::SeedableRng;
use station_layout::prelude::*;
use station_layout_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Every one of the 512 stations gets its own random 38 m layout.
    // Lower `num_layouts` to share layouts between stations.
    let num_layouts = 512;
    let telescope = RandomStationTelescope::new(DEFAULT_NUM_STATIONS, num_layouts);
    let mut rng = StdRng::seed_from_u64(10);

    let model = telescope.build(&mut rng)?;
    let dir = telescope.default_dir_name();

    match model.write(&dir, DEFAULT_PRECISION)? {
        WriteOutcome::Written => info!("Telescope model written to {}", dir),
        WriteOutcome::Skipped => info!("Left existing {} in place", dir),
    }
    Ok(())
}
