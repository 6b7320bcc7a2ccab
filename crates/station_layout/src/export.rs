//! Delimited text output for layouts and coordinate tables.
//!
//! Every row is written as `x,y` with a fixed number of decimals and a trailing
//! newline, which is the layout file format telescope model directories expect.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::layout::Layout;

/// Decimal places used when none are given.
pub const DEFAULT_PRECISION: usize = 8;

/// Write `rows` to `writer` as comma-separated pairs.
pub fn write_rows<W, I>(writer: &mut W, rows: I, precision: usize) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = [f64; 2]>,
{
    for [x, y] in rows {
        writeln!(writer, "{:.*},{:.*}", precision, x, precision, y)?;
    }
    Ok(())
}

/// Write `rows` to a new file at `path`, replacing any existing file.
pub fn save_rows<I>(path: impl AsRef<Path>, rows: I, precision: usize) -> Result<()>
where
    I: IntoIterator<Item = [f64; 2]>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_rows(&mut writer, rows, precision)?;
    writer.flush()?;
    Ok(())
}

/// Write a layout's points to `path`.
pub fn save_layout(path: impl AsRef<Path>, layout: &Layout, precision: usize) -> Result<()> {
    save_rows(path, layout.rows(), precision)
}

#[cfg(test)]
mod tests {
    use mint::Vector2;

    use super::*;
    use crate::layout::StopReason;

    #[test]
    fn rows_use_fixed_precision() {
        let mut out = Vec::new();
        write_rows(&mut out, [[1.5, -2.25], [0.0, 1.0 / 3.0]], 3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.500,-2.250\n0.000,0.333\n");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut out = Vec::new();
        write_rows(&mut out, std::iter::empty(), DEFAULT_PRECISION).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn save_layout_writes_one_line_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.txt");
        let layout = Layout {
            points: vec![Vector2 { x: 1.0, y: 2.0 }, Vector2 { x: -3.5, y: 0.125 }],
            requested: 2,
            attempts: 2,
            stop_reason: StopReason::Complete,
        };

        save_layout(&path, &layout, DEFAULT_PRECISION).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1.00000000,2.00000000\n-3.50000000,0.12500000\n");
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("layout.txt");
        let err = save_rows(&path, [[0.0, 0.0]], 2).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
