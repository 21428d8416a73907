//! Position resolution: TimePoint sequence to BodyPosition sequence
use crate::{
    body::Body,
    ephemeris::Ephemeris,
    error::Error,
    position::{BodyPosition, NormalizedRecord},
    time::TimePoint,
};

/// What to do when the ephemeris fails to resolve one [TimePoint]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort on first failure: a gap would render a misleading arc.
    #[default]
    Abort,
    /// Drop the failing [TimePoint] and carry on. Gaps are reported
    /// as warnings when the "log" feature is enabled.
    Skip,
}

/// [Resolver] resolves the apparent positions of one [Body],
/// strictly in chronological order, against one [Ephemeris].
pub struct Resolver<'a, E: Ephemeris> {
    body: Body,
    ephemeris: &'a E,
    policy: FailurePolicy,
}

impl<'a, E: Ephemeris> Resolver<'a, E> {
    /// Builds a new [Resolver] that aborts on first failure
    pub fn new(ephemeris: &'a E, body: Body) -> Self {
        Self {
            body,
            ephemeris,
            policy: FailurePolicy::default(),
        }
    }

    /// Copies and returns Self with updated [FailurePolicy]
    pub fn with_policy(&self, policy: FailurePolicy) -> Self {
        Self {
            body: self.body,
            ephemeris: self.ephemeris,
            policy,
        }
    }

    /// [Body] being resolved
    pub fn body(&self) -> Body {
        self.body
    }

    /// Resolves a single [TimePoint].
    pub fn resolve_one(&self, time: TimePoint) -> Result<BodyPosition, Error> {
        match self.ephemeris.resolve(self.body, &time) {
            Ok(position) => {
                #[cfg(feature = "log")]
                debug!(
                    "{} - {}: ra={:.6}h dec={:.6}°",
                    self.body, time, position.ra_hours, position.dec_deg
                );
                Ok(BodyPosition::new(time, position))
            },
            Err(source) => Err(Error::PositionLookup { time, source }),
        }
    }

    /// Resolves all [TimePoint]s, preserving their order.
    /// With [FailurePolicy::Abort], the first failure is returned
    /// and identifies the failing [TimePoint].
    pub fn resolve<I: IntoIterator<Item = TimePoint>>(
        &self,
        times: I,
    ) -> Result<Vec<BodyPosition>, Error> {
        let times = times.into_iter();
        let mut positions = Vec::with_capacity(times.size_hint().0);
        for time in times {
            match self.resolve_one(time) {
                Ok(position) => positions.push(position),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        #[cfg(feature = "log")]
                        warn!("skipping point: {}", e);
                    },
                },
            }
        }
        Ok(positions)
    }

    /// Resolves and normalizes all [TimePoint]s, preserving their order.
    pub fn normalized<I: IntoIterator<Item = TimePoint>>(
        &self,
        times: I,
    ) -> Result<Vec<NormalizedRecord>, Error> {
        Ok(self
            .resolve(times)?
            .iter()
            .map(|position| position.normalize())
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ephemeris::{ApparentPosition, EphemerisError};
    use crate::time::TimeSampler;

    struct Linear;

    impl Ephemeris for Linear {
        fn resolve(&self, _: Body, t: &TimePoint) -> Result<ApparentPosition, EphemerisError> {
            Ok(ApparentPosition::new((t.jd % 24.0).abs(), 1.0))
        }
    }

    #[test]
    fn chronological_order() {
        let sampler = TimeSampler::from_dates("2024-01-01", "2024-03-01", 1.0).unwrap();
        let resolver = Resolver::new(&Linear, Body::Jupiter);
        assert_eq!(resolver.body(), Body::Jupiter);

        let positions = resolver.resolve(sampler.iter()).unwrap();
        assert_eq!(positions.len(), sampler.len());
        for (position, time) in positions.iter().zip(sampler.iter()) {
            assert_eq!(position.time, time);
        }
        let normalized = resolver.normalized(sampler.iter()).unwrap();
        assert_eq!(normalized.len(), positions.len());
        for (record, position) in normalized.iter().zip(positions.iter()) {
            assert_eq!(record.date, position.time.label);
        }
    }
}
