//! Sweep configuration
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    body::Body,
    ephemeris::EphemerisSource,
    error::{ConfigError, RangeError},
    resolver::FailurePolicy,
    time::TimeSampler,
};

/// [SweepConfig] fully describes one run: which bodies,
/// which time window, which ephemeris dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Bodies to resolve, one sky path each
    pub bodies: Vec<Body>,
    /// First sampled date (`YYYY-MM-DD` or any [hifitime::Epoch] description)
    pub start: String,
    /// Window end, excluded
    pub end: String,
    /// Sampling step, in days
    pub step_days: f64,
    /// Ephemeris dataset, identical for the whole run
    pub ephemeris: EphemerisSource,
    /// Drop unresolved points instead of aborting
    pub skip_gaps: bool,
}

impl Default for SweepConfig {
    /// Mars 2024-2025 opposition
    fn default() -> Self {
        Self {
            bodies: vec![Body::Mars],
            start: "2024-06-01".to_string(),
            end: "2026-01-16".to_string(),
            step_days: 7.0,
            ephemeris: EphemerisSource::default(),
            skip_gaps: false,
        }
    }
}

impl SweepConfig {
    /// Jupiter 2023-2026 oppositions
    pub fn jupiter() -> Self {
        Self {
            bodies: vec![Body::Jupiter],
            start: "2023-06-01".to_string(),
            end: "2027-01-16".to_string(),
            step_days: 5.0,
            ..Default::default()
        }
    }

    /// Returns preset [SweepConfig] for given body name.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().as_str() {
            "mars" => Ok(Self::default()),
            "jupiter" => Ok(Self::jupiter()),
            _ => Err(ConfigError::UnknownBody(name.to_string())),
        }
    }

    /// Builds the [TimeSampler] described by Self
    pub fn sampler(&self) -> Result<TimeSampler, RangeError> {
        TimeSampler::from_dates(&self.start, &self.end, self.step_days)
    }

    /// [FailurePolicy] described by Self
    pub fn policy(&self) -> FailurePolicy {
        if self.skip_gaps {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn presets() {
        let mars = SweepConfig::preset("Mars").unwrap();
        assert_eq!(mars, SweepConfig::default());
        let sampler = mars.sampler().unwrap();
        assert_eq!(sampler.step_days(), 7.0);
        assert_eq!(mars.policy(), FailurePolicy::Abort);

        let jupiter = SweepConfig::preset("jupiter").unwrap();
        assert_eq!(jupiter.bodies, vec![Body::Jupiter]);
        assert_eq!(jupiter.step_days, 5.0);
        // 2023-06-01 to 2027-01-16: 1325 days
        assert_eq!(jupiter.sampler().unwrap().len(), 265);

        assert_eq!(
            SweepConfig::preset("pluto"),
            Err(ConfigError::UnknownBody("pluto".to_string()))
        );
    }
    #[test]
    fn invalid_window() {
        let cfg = SweepConfig {
            start: "2024-02-01".to_string(),
            end: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert_eq!(cfg.sampler(), Err(RangeError::EmptyRange));
    }
    #[cfg(feature = "serde")]
    #[test]
    fn config_serdes() {
        let content = r#"
            {
                "bodies": ["jupiter", "saturn"],
                "start": "2023-06-01",
                "step_days": 5.0,
                "skip_gaps": true
            }"#;
        let cfg: SweepConfig = serde_json::from_str(content).unwrap();
        assert_eq!(cfg.bodies, vec![Body::Jupiter, Body::Saturn]);
        assert_eq!(cfg.start, "2023-06-01");
        assert_eq!(cfg.end, "2026-01-16");
        assert_eq!(cfg.ephemeris, EphemerisSource::De440s);
        assert_eq!(cfg.policy(), FailurePolicy::Skip);

        let content = r#"{ "ephemeris": "/opt/kernels/de440.bsp" }"#;
        let cfg: SweepConfig = serde_json::from_str(content).unwrap();
        assert_eq!(
            cfg.ephemeris,
            EphemerisSource::Kernel("/opt/kernels/de440.bsp".into())
        );
        assert_eq!(cfg.bodies, vec![Body::Mars]);
    }
}
