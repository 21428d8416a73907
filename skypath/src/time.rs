//! Time sampling, in Julian Date.
use std::{fmt::Display, str::FromStr};

use hifitime::{Duration, Epoch, Unit};

use crate::error::RangeError;

/// One sampled instant: continuous Julian Date plus its calendar label.
#[derive(Debug, Clone, PartialEq)]
pub struct TimePoint {
    /// Instant, expressed in UTC
    pub epoch: Epoch,
    /// Julian Date (UTC), in days
    pub jd: f64,
    /// Calendar label, `YYYY-MM-DD HH:MM:SS.sss` (UTC)
    pub label: String,
}

impl From<Epoch> for TimePoint {
    fn from(epoch: Epoch) -> Self {
        Self {
            epoch,
            jd: epoch.to_jde_utc_days(),
            label: iso_label(epoch),
        }
    }
}

impl Display for TimePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (JD {:.5})", self.label, self.jd)
    }
}

/// Formats given [Epoch] as `YYYY-MM-DD HH:MM:SS.sss` (UTC).
fn iso_label(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, ns) = epoch.to_gregorian_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
        y,
        m,
        d,
        hh,
        mm,
        ss,
        ns / 1_000_000
    )
}

/// Parses a calendar date. Accepts `YYYY-MM-DD` (midnight UTC)
/// and any other description [Epoch] knows how to parse.
pub fn parse_date(s: &str) -> Result<Epoch, RangeError> {
    let s = s.trim();
    let items: Vec<&str> = s.split('-').collect();
    if items.len() == 3 {
        if let (Ok(y), Ok(m), Ok(d)) = (
            items[0].parse::<i32>(),
            items[1].parse::<u8>(),
            items[2].parse::<u8>(),
        ) {
            return Epoch::maybe_from_gregorian_utc(y, m, d, 0, 0, 0, 0)
                .map_err(|_| RangeError::DateParsing(s.to_string()));
        }
    }
    Epoch::from_str(s).map_err(|_| RangeError::DateParsing(s.to_string()))
}

/// [TimeSampler] describes the half-open time window `[start, end)`,
/// sampled every `step`. It is cheap to clone and may be iterated
/// as many times as needed: every iteration yields the same [TimePoint]s.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSampler {
    start: Epoch,
    end: Epoch,
    step: Duration,
}

impl TimeSampler {
    /// Builds a new [TimeSampler] from `start` (included) to `end`
    /// (excluded, even when a step lands exactly on it), every `step_days`.
    pub fn new(start: Epoch, end: Epoch, step_days: f64) -> Result<Self, RangeError> {
        if !step_days.is_finite() || step_days <= 0.0 {
            return Err(RangeError::NonPositiveStep(step_days));
        }
        let step = Duration::from_days(step_days);
        if step.total_nanoseconds() <= 0 {
            return Err(RangeError::StepTooSmall(step_days));
        }
        if start >= end {
            return Err(RangeError::EmptyRange);
        }
        Ok(Self { start, end, step })
    }

    /// Builds a new [TimeSampler] from calendar date descriptions.
    /// ```
    /// use skypath::prelude::*;
    /// let sampler = TimeSampler::from_dates("2024-01-01", "2024-01-11", 5.0)
    ///     .unwrap();
    /// assert_eq!(sampler.len(), 2);
    /// ```
    pub fn from_dates(start: &str, end: &str, step_days: f64) -> Result<Self, RangeError> {
        Self::new(parse_date(start)?, parse_date(end)?, step_days)
    }

    /// First sampled instant
    pub fn start(&self) -> Epoch {
        self.start
    }

    /// Window end (excluded)
    pub fn end(&self) -> Epoch {
        self.end
    }

    /// Sampling step
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Sampling step, in days
    pub fn step_days(&self) -> f64 {
        self.step.to_unit(Unit::Day)
    }

    /// Number of [TimePoint]s, that is ceil((end - start) / step)
    pub fn len(&self) -> usize {
        let span = (self.end - self.start).total_nanoseconds();
        let step = self.step.total_nanoseconds();
        ((span + step - 1) / step) as usize
    }

    /// Always false: a valid [TimeSampler] holds one point at least
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `n`th [TimePoint], if it lies within the window.
    pub fn nth_point(&self, n: usize) -> Option<TimePoint> {
        if n < self.len() {
            Some(TimePoint::from(offset(self.start, self.step, n)))
        } else {
            None
        }
    }

    /// Iterates over all [TimePoint]s in chronological order.
    /// Point `n` is `start + n * step`, exact to the nanosecond,
    /// so rounding never accumulates along the window.
    pub fn iter(&self) -> impl Iterator<Item = TimePoint> + Clone {
        let (start, step) = (self.start, self.step);
        (0..self.len()).map(move |n| TimePoint::from(offset(start, step, n)))
    }
}

/// `start + n * step`
fn offset(start: Epoch, step: Duration, n: usize) -> Epoch {
    start + Duration::from_total_nanoseconds(step.total_nanoseconds() * n as i128)
}
