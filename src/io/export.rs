//! Export sampled curve points to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or plotting scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::fit::unit_space;

/// Write `n` evenly spaced samples as `t,x,y` rows.
pub fn write_samples<W: Write>(mut writer: W, curve: &Curve, n: usize) -> Result<(), CurveError> {
    let ts = unit_space(n);
    let points = curve.value_at_many(&ts);

    writeln!(writer, "t,x,y")?;
    for (i, t) in ts.iter().enumerate() {
        writeln!(writer, "{t:.10},{:.10},{:.10}", points[(i, 0)], points[(i, 1)])?;
    }
    Ok(())
}

/// Write sampled points to a CSV file.
pub fn write_samples_csv(path: &Path, curve: &Curve, n: usize) -> Result<(), CurveError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_samples(&mut writer, curve, n)?;
    writer.flush()?;
    Ok(())
}
