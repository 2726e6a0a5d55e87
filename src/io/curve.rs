//! Read/write curve JSON files.
//!
//! Curve JSON is the portable representation of a curve:
//! - degree + control points (row order)
//! - optional fit quality when the curve came out of a fit
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::curve::Curve;
use crate::domain::{CurveFile, FitQuality, Point};
use crate::error::CurveError;

impl Curve {
    /// The JSON schema view of this curve, with optional fit diagnostics.
    pub fn to_file(&self, fit: Option<FitQuality>) -> CurveFile {
        CurveFile {
            degree: self.degree(),
            control_points: self.control_points().iter().map(|p| [p.x, p.y]).collect(),
            fit,
        }
    }
}

impl TryFrom<CurveFile> for Curve {
    type Error = CurveError;

    fn try_from(file: CurveFile) -> Result<Self, Self::Error> {
        if file.control_points.len() != file.degree.saturating_add(1) {
            return Err(CurveError::invalid(
                "curve file",
                format!(
                    "degree {} does not match {} control points",
                    file.degree,
                    file.control_points.len()
                ),
            ));
        }
        Curve::new(
            file.control_points
                .iter()
                .map(|&[x, y]| Point::new(x, y))
                .collect(),
        )
    }
}

/// Serialize a curve (and optional fit quality) as pretty JSON.
pub fn write_curve<W: Write>(
    writer: W,
    curve: &Curve,
    fit: Option<FitQuality>,
) -> Result<(), CurveError> {
    serde_json::to_writer_pretty(writer, &curve.to_file(fit))?;
    Ok(())
}

/// Parse a curve JSON document.
pub fn read_curve<R: Read>(reader: R) -> Result<(Curve, Option<FitQuality>), CurveError> {
    let file: CurveFile = serde_json::from_reader(reader)?;
    let fit = file.fit;
    Ok((Curve::try_from(file)?, fit))
}

/// Write a curve JSON file.
pub fn write_curve_json(
    path: &Path,
    curve: &Curve,
    fit: Option<FitQuality>,
) -> Result<(), CurveError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_curve(&mut writer, curve, fit)?;
    writer.flush()?;
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<(Curve, Option<FitQuality>), CurveError> {
    read_curve(BufReader::new(File::open(path)?))
}
