#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate strum_macros;

#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod annotation;
pub mod body;
pub mod config;
pub mod ephemeris;
pub mod position;
pub mod resolver;
pub mod time;

mod error;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        annotation::annotation_indices,
        body::Body,
        config::SweepConfig,
        ephemeris::{ApparentPosition, Ephemeris, EphemerisError, EphemerisSource},
        error::{ConfigError, Error, RangeError},
        position::{hours_to_degrees, wrap_degrees, BodyPosition, NormalizedRecord},
        resolver::{FailurePolicy, Resolver},
        time::{parse_date, TimePoint, TimeSampler},
    };

    #[cfg(feature = "nav")]
    #[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
    pub use crate::ephemeris::AlmanacEphemeris;

    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
}

pub use error::Error;

use prelude::{Body, Ephemeris, NormalizedRecord, Resolver, TimeSampler};

/// Samples `sampler` and resolves every [TimePoint](crate::time::TimePoint)
/// against `ephemeris` for `body`, returning the normalized sky path
/// in chronological order. Aborts on the first failed lookup.
pub fn sky_path<E: Ephemeris>(
    ephemeris: &E,
    body: Body,
    sampler: &TimeSampler,
) -> Result<Vec<NormalizedRecord>, Error> {
    Resolver::new(ephemeris, body).normalized(sampler.iter())
}
