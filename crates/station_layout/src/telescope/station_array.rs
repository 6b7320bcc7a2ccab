//! Named stations at fixed geographic positions, each with its own random layout.
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use rand::RngCore;
use tracing::info;

use crate::error::{Error, Result};
use crate::export::{save_layout, save_rows};
use crate::layout::Layout;
use crate::sampling::RandomLayoutSampling;
use crate::telescope::LAYOUT_FILE_NAME;

/// Conventional directory name for the AA0.5 array.
pub const AA05_DIR_NAME: &str = "SKA1-LOW-AA0.5-v1.0.tm";

/// Station geographic positions, one `lon,lat` row per station.
pub const WGS84_LAYOUT_FILE_NAME: &str = "layout_wgs84.txt";

/// Telescope reference position, a single `lon,lat` row.
pub const POSITION_FILE_NAME: &str = "position.txt";

/// A station identified by name, positioned by WGS84 longitude and latitude in degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedStation {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl NamedStation {
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
        }
    }

    pub fn dir_name(&self) -> String {
        format!("station_{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationArray {
    /// Stations in output order; the first one is the telescope reference position.
    pub stations: Vec<NamedStation>,
    /// Sampler used for every station layout.
    pub station: RandomLayoutSampling,
}

impl StationArray {
    /// Create an array of `stations` with default 38 m station layouts.
    pub fn new(stations: Vec<NamedStation>) -> Self {
        Self {
            stations,
            station: RandomLayoutSampling::default(),
        }
    }

    /// The six AA0.5 stations, two per site.
    pub fn aa05() -> Self {
        Self::new(vec![
            NamedStation::new("s010-1", 116.69345390, -26.86371635),
            NamedStation::new("s010-2", 116.69365770, -26.86334071),
            NamedStation::new("s008-1", 116.72963910, -26.85615287),
            NamedStation::new("s008-2", 116.73007800, -26.85612864),
            NamedStation::new("s009-1", 116.74788540, -26.88080530),
            NamedStation::new("s009-2", 116.74733280, -26.88062234),
        ])
    }

    /// Sets the station layout sampler.
    pub fn with_station(mut self, station: RandomLayoutSampling) -> Self {
        self.station = station;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.stations.is_empty() {
            return Err(Error::InvalidParameter(
                "station array needs at least one station".into(),
            ));
        }

        let mut seen = HashSet::new();
        for s in &self.stations {
            if s.name.is_empty() {
                return Err(Error::InvalidParameter("station name must not be empty".into()));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(Error::InvalidParameter(format!(
                    "duplicate station name '{}'",
                    s.name
                )));
            }
            let on_globe = (-180.0..=180.0).contains(&s.longitude)
                && (-90.0..=90.0).contains(&s.latitude);
            if !on_globe {
                return Err(Error::InvalidParameter(format!(
                    "station '{}' has invalid position ({}, {})",
                    s.name, s.longitude, s.latitude
                )));
            }
        }

        self.station.validate()
    }

    /// Write the array's coordinate files and one generated layout per station under `dir`.
    ///
    /// `dir` may already exist; files inside it are overwritten. Layouts are generated
    /// from `rng` in station order and returned in the same order.
    pub fn write(
        &self,
        dir: impl AsRef<Path>,
        precision: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Layout>> {
        self.validate()?;
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        save_rows(
            dir.join(WGS84_LAYOUT_FILE_NAME),
            self.stations.iter().map(|s| [s.longitude, s.latitude]),
            precision,
        )?;
        let reference = &self.stations[0];
        save_rows(
            dir.join(POSITION_FILE_NAME),
            [[reference.longitude, reference.latitude]],
            precision,
        )?;

        let mut layouts = Vec::with_capacity(self.stations.len());
        for s in &self.stations {
            let started = Instant::now();
            let layout = self.station.generate(rng)?;
            info!(
                "Generated station {} layout in {:.2} s.",
                s.name,
                started.elapsed().as_secs_f64()
            );

            let station_dir = dir.join(s.dir_name());
            fs::create_dir_all(&station_dir)?;
            save_layout(station_dir.join(LAYOUT_FILE_NAME), &layout, precision)?;
            layouts.push(layout);
        }

        Ok(layouts)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::export::DEFAULT_PRECISION;

    fn small_station() -> RandomLayoutSampling {
        RandomLayoutSampling::new(12, 8.0, 1.5)
    }

    #[test]
    fn writes_coordinates_and_station_layouts() {
        let array = StationArray::aa05().with_station(small_station());
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(AA05_DIR_NAME);

        let layouts = array
            .write(&dir, DEFAULT_PRECISION, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(layouts.len(), 6);

        let wgs84 = fs::read_to_string(dir.join(WGS84_LAYOUT_FILE_NAME)).unwrap();
        let rows: Vec<&str> = wgs84.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "116.69345390,-26.86371635");
        assert_eq!(rows[5], "116.74733280,-26.88062234");

        let position = fs::read_to_string(dir.join(POSITION_FILE_NAME)).unwrap();
        assert_eq!(position, "116.69345390,-26.86371635\n");

        for (s, layout) in array.stations.iter().zip(&layouts) {
            let text = fs::read_to_string(dir.join(s.dir_name()).join(LAYOUT_FILE_NAME)).unwrap();
            assert_eq!(text.lines().count(), layout.len());
            assert_eq!(layout.len(), 12);
        }
    }

    #[test]
    fn rewriting_into_existing_directory_overwrites_files() {
        let array = StationArray::new(vec![NamedStation::new("a", 10.0, -20.0)])
            .with_station(small_station());
        let root = tempfile::tempdir().unwrap();

        let first = array
            .write(root.path(), 3, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let second = array
            .write(root.path(), 3, &mut StdRng::seed_from_u64(6))
            .unwrap();
        assert_ne!(first, second);

        let text = fs::read_to_string(root.path().join("station_a").join(LAYOUT_FILE_NAME)).unwrap();
        let first_row = text.lines().next().unwrap();
        let p = second[0].points[0];
        assert_eq!(first_row, format!("{:.3},{:.3}", p.x, p.y));
    }

    #[test]
    fn layouts_follow_station_order_from_shared_rng() {
        let stations = vec![
            NamedStation::new("a", 1.0, 1.0),
            NamedStation::new("b", 2.0, 2.0),
        ];
        let array = StationArray::new(stations).with_station(small_station());
        let root = tempfile::tempdir().unwrap();
        let layouts = array
            .write(root.path(), 4, &mut StdRng::seed_from_u64(8))
            .unwrap();

        let mut rng = StdRng::seed_from_u64(8);
        let a = small_station().generate(&mut rng).unwrap();
        let b = small_station().generate(&mut rng).unwrap();
        assert_eq!(layouts, vec![a, b]);
    }

    #[test]
    fn rejects_bad_station_lists() {
        let mut rng = StdRng::seed_from_u64(1);
        let root = tempfile::tempdir().unwrap();

        let empty = StationArray::new(Vec::new());
        assert!(matches!(
            empty.write(root.path(), 2, &mut rng),
            Err(Error::InvalidParameter(_))
        ));

        let duplicate = StationArray::new(vec![
            NamedStation::new("x", 0.0, 0.0),
            NamedStation::new("x", 1.0, 1.0),
        ]);
        assert!(matches!(duplicate.validate(), Err(Error::InvalidParameter(_))));

        let off_globe = StationArray::new(vec![NamedStation::new("y", 0.0, 95.0)]);
        assert!(matches!(off_globe.validate(), Err(Error::InvalidParameter(_))));

        let wrapped = StationArray::new(vec![NamedStation::new("z", 181.0, 0.0)]);
        assert!(matches!(wrapped.validate(), Err(Error::InvalidParameter(_))));

        let not_a_number = StationArray::new(vec![NamedStation::new("n", f64::NAN, 0.0)]);
        assert!(matches!(not_a_number.validate(), Err(Error::InvalidParameter(_))));

        let edge = StationArray::new(vec![NamedStation::new("e", -180.0, 90.0)]);
        assert!(edge.validate().is_ok());

        let unnamed = StationArray::new(vec![NamedStation::new("", 0.0, 0.0)]);
        assert!(matches!(unnamed.validate(), Err(Error::InvalidParameter(_))));
    }
}
