use crate::Error;
use csv::{ReaderBuilder, Trim, Writer};
use serde::Deserialize;
use skypath::prelude::{BodyPosition, NormalizedRecord};
use std::path::Path;

/// One row of a raw position table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPosition {
    pub date: String,
    pub ra_hours: f64,
    pub dec_deg: f64,
}

impl RawPosition {
    pub fn normalize(&self) -> NormalizedRecord {
        NormalizedRecord::from_hours(&self.date, self.ra_hours, self.dec_deg)
    }
}

pub fn write_positions<P: AsRef<Path>>(positions: &[BodyPosition], path: P) -> Result<(), Error> {
    let mut w = Writer::from_path(path)?;
    w.write_record(&["date", "ra_hours", "dec_deg"])?;
    for position in positions.iter() {
        w.write_record(&[
            &position.time.label,
            &position.ra_hours.to_string(),
            &position.dec_deg.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Parses a raw position table, rows are kept in file order.
pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<RawPosition>, Error> {
    let mut r = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let mut positions = Vec::new();
    for row in r.deserialize() {
        let position: RawPosition = row?;
        positions.push(position);
    }
    Ok(positions)
}

pub fn write_normalized<P: AsRef<Path>>(
    records: &[NormalizedRecord],
    path: P,
) -> Result<(), Error> {
    let mut w = Writer::from_path(path)?;
    w.write_record(&["date", "ra_deg", "dec_deg"])?;
    for record in records.iter() {
        w.write_record(&[
            &record.date,
            &record.ra_deg.to_string(),
            &record.dec_deg.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
