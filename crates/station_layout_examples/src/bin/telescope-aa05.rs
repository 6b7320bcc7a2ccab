use rand::rngs::StdRng;
use rand::SeedableRng;
use station_layout::prelude::*;
use station_layout_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let array = StationArray::aa05();
    let mut rng = StdRng::seed_from_u64(1);

    let layouts = array.write(AA05_DIR_NAME, DEFAULT_PRECISION, &mut rng)?;
    for (station, layout) in array.stations.iter().zip(&layouts) {
        info!(
            "{}: {} antennas, closest pair {:.3} m",
            station.name,
            layout.len(),
            layout.min_separation().unwrap_or(f64::NAN)
        );
    }
    Ok(())
}
