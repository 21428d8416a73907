//! Body positions and their normalized (plottable) form
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ephemeris::ApparentPosition, time::TimePoint};

/// Converts right ascension hours to degrees.
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

/// Wraps an angle into [0, 360). Total over all finite inputs,
/// idempotent, and exact (identity) on values already within range.
/// ```
/// use skypath::prelude::wrap_degrees;
/// assert_eq!(wrap_degrees(358.5), 358.5);
/// assert_eq!(wrap_degrees(363.0), 3.0);
/// assert_eq!(wrap_degrees(-1.5), 358.5);
/// assert_eq!(wrap_degrees(-720.0), 0.0);
/// ```
pub fn wrap_degrees(angle: f64) -> f64 {
    // fmod is exact: only the negative branch may round
    let wrapped = angle % 360.0;
    if wrapped < 0.0 {
        let wrapped = wrapped + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        // also folds -0.0
        wrapped + 0.0
    }
}

/// Apparent position of a body at a given [TimePoint], as returned
/// by the ephemeris.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPosition {
    /// Sampled instant
    pub time: TimePoint,
    /// Right ascension, in hours
    pub ra_hours: f64,
    /// Declination, in degrees
    pub dec_deg: f64,
}

impl BodyPosition {
    /// Builds a new [BodyPosition] at `time`
    pub fn new(time: TimePoint, position: ApparentPosition) -> Self {
        Self {
            time,
            ra_hours: position.ra_hours,
            dec_deg: position.dec_deg,
        }
    }

    /// Converts Self to [NormalizedRecord]: right ascension in degrees,
    /// wrapped within [0, 360). Never fails.
    pub fn normalize(&self) -> NormalizedRecord {
        NormalizedRecord::from_hours(&self.time.label, self.ra_hours, self.dec_deg)
    }
}

/// [NormalizedRecord] is one point of the sky path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedRecord {
    /// Calendar date label
    pub date: String,
    /// Right ascension, in degrees, within [0, 360)
    pub ra_deg: f64,
    /// Declination, in degrees
    pub dec_deg: f64,
}

impl NormalizedRecord {
    /// Builds [NormalizedRecord] from right ascension expressed in hours,
    /// which may lie out of the [0, 24) range.
    pub fn from_hours(date: &str, ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            date: date.to_string(),
            ra_deg: wrap_degrees(hours_to_degrees(ra_hours)),
            dec_deg,
        }
    }
}
