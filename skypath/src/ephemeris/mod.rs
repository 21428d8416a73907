//! Ephemeris oracle: apparent geocentric coordinates of a [Body].
use std::{fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{body::Body, error::ConfigError, position::wrap_degrees, time::TimePoint};

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
mod almanac;

#[cfg(feature = "nav")]
pub use almanac::AlmanacEphemeris;

#[cfg(feature = "nav")]
use anise::errors::AlmanacError;

/// Ephemeris related errors
#[derive(Error, Debug)]
pub enum EphemerisError {
    /// Requested instant is not covered, or ephemeris data is missing.
    #[error("{body} ephemeris unavailable: {reason}")]
    Unavailable { body: Body, reason: String },
    /// Degenerated geometry (observer and target coincide)
    #[error("undefined direction: null position vector")]
    NullVector,
    #[cfg(feature = "nav")]
    #[error("failed to load ephemeris: {0}")]
    Loading(#[from] AlmanacError),
}

/// Apparent equatorial coordinates returned by an [Ephemeris]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ApparentPosition {
    /// Right ascension, in hours, within [0, 24)
    pub ra_hours: f64,
    /// Declination, in degrees, within [-90, 90]
    pub dec_deg: f64,
}

impl ApparentPosition {
    /// Builds a new [ApparentPosition]
    pub fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Self { ra_hours, dec_deg }
    }

    /// Builds [ApparentPosition] from a cartesian direction,
    /// expressed in an equatorial frame (any unit).
    /// ```
    /// use skypath::prelude::ApparentPosition;
    /// let pos = ApparentPosition::from_cartesian(0.0, -1.0, 0.0)
    ///     .unwrap();
    /// assert!((pos.ra_hours - 18.0).abs() < 1.0E-12);
    /// assert!(pos.dec_deg.abs() < 1.0E-12);
    /// ```
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Result<Self, EphemerisError> {
        let r = (x.powi(2) + y.powi(2) + z.powi(2)).sqrt();
        if r == 0.0 || !r.is_finite() {
            return Err(EphemerisError::NullVector);
        }
        let ra_deg = wrap_degrees(y.atan2(x).to_degrees());
        let dec_deg = (z / r).clamp(-1.0, 1.0).asin().to_degrees();
        Ok(Self {
            ra_hours: ra_deg / 15.0,
            dec_deg,
        })
    }
}

/// [Ephemeris] is the oracle that resolves the apparent
/// geocentric position of a [Body] at a given [TimePoint].
/// Implementations are read only: one configured ephemeris dataset
/// serves the whole sweep.
pub trait Ephemeris {
    /// Returns apparent right ascension (hours) and declination (degrees)
    /// of `body` at `time`.
    fn resolve(&self, body: Body, time: &TimePoint) -> Result<ApparentPosition, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn resolve(&self, body: Body, time: &TimePoint) -> Result<ApparentPosition, EphemerisError> {
        (**self).resolve(body, time)
    }
}

/// Ephemeris dataset identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum EphemerisSource {
    /// JPL DE440s, retrieved (and cached) from the NYX cloud
    #[default]
    De440s,
    /// Local SPK (.bsp) kernel
    Kernel(PathBuf),
}

impl FromStr for EphemerisSource {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(ConfigError::EphemerisSource(s.to_string())),
            "de440s" | "jpl" => Ok(Self::De440s),
            _ => Ok(Self::Kernel(PathBuf::from(trimmed))),
        }
    }
}

impl TryFrom<String> for EphemerisSource {
    type Error = ConfigError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<EphemerisSource> for String {
    fn from(source: EphemerisSource) -> String {
        source.to_string()
    }
}

impl Display for EphemerisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::De440s => write!(f, "de440s"),
            Self::Kernel(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn cartesian_to_equatorial() {
        let pos = ApparentPosition::from_cartesian(1.0, 0.0, 0.0).unwrap();
        assert_eq!(pos, ApparentPosition::new(0.0, 0.0));

        let pos = ApparentPosition::from_cartesian(0.0, 2.0, 0.0).unwrap();
        assert!((pos.ra_hours - 6.0).abs() < 1.0E-12);

        let pos = ApparentPosition::from_cartesian(-3.0, 0.0, 0.0).unwrap();
        assert!((pos.ra_hours - 12.0).abs() < 1.0E-12);

        let pos = ApparentPosition::from_cartesian(0.0, 0.0, 5.0).unwrap();
        assert!((pos.dec_deg - 90.0).abs() < 1.0E-12);

        let pos = ApparentPosition::from_cartesian(1.0, 0.0, -1.0).unwrap();
        assert!((pos.dec_deg + 45.0).abs() < 1.0E-12);

        // slightly below the X axis: close to 24h, never 24h
        let pos = ApparentPosition::from_cartesian(1.0, -1.0E-6, 0.0).unwrap();
        assert!(pos.ra_hours < 24.0 && pos.ra_hours > 23.99);

        assert!(matches!(
            ApparentPosition::from_cartesian(0.0, 0.0, 0.0),
            Err(EphemerisError::NullVector)
        ));
    }
    #[test]
    fn ephemeris_source() {
        assert_eq!(
            EphemerisSource::from_str("de440s"),
            Ok(EphemerisSource::De440s)
        );
        assert_eq!(EphemerisSource::from_str("JPL"), Ok(EphemerisSource::De440s));
        assert_eq!(
            EphemerisSource::from_str("/data/de440.bsp"),
            Ok(EphemerisSource::Kernel(PathBuf::from("/data/de440.bsp")))
        );
        assert!(EphemerisSource::from_str("  ").is_err());
        assert_eq!(EphemerisSource::default().to_string(), "de440s");
    }
}
