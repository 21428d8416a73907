use anise::{
    almanac::metaload::MetaFile,
    constants::frames::{
        EARTH_J2000, JUPITER_BARYCENTER_J2000, MARS_BARYCENTER_J2000, MERCURY_J2000, MOON_J2000,
        NEPTUNE_BARYCENTER_J2000, PLUTO_BARYCENTER_J2000, SATURN_BARYCENTER_J2000, SUN_J2000,
        URANUS_BARYCENTER_J2000, VENUS_J2000,
    },
    prelude::{Aberration, Almanac, Frame},
};

use super::{ApparentPosition, Ephemeris, EphemerisError, EphemerisSource};
use crate::{body::Body, time::TimePoint};

/// [Ephemeris] backed by an ANISE [Almanac].
/// Positions are light time and stellar aberration corrected,
/// observed from the Earth center in the J2000 (ICRF) equatorial frame.
pub struct AlmanacEphemeris {
    almanac: Almanac,
}

impl AlmanacEphemeris {
    /// Returns [MetaFile] for anise DE440s.bsp
    fn nyx_anise_de440s_bsp() -> MetaFile {
        MetaFile {
            crc32: Some(1921414410),
            uri: String::from("http://public-data.nyxspace.com/anise/de440s.bsp"),
        }
    }

    /// Loads the ephemeris dataset described by [EphemerisSource].
    /// [EphemerisSource::De440s] requires internet access on first
    /// deployment, ANISE caches it afterwards.
    pub fn new(source: EphemerisSource) -> Result<Self, EphemerisError> {
        let almanac = Almanac::default();
        let almanac = match &source {
            EphemerisSource::De440s => almanac.load_from_metafile(Self::nyx_anise_de440s_bsp())?,
            EphemerisSource::Kernel(path) => almanac.load(&path.to_string_lossy())?,
        };
        #[cfg(feature = "log")]
        info!("ephemeris \"{}\" has been loaded", source);
        Ok(Self { almanac })
    }

    fn frame(body: Body) -> Frame {
        match body {
            Body::Sun => SUN_J2000,
            Body::Moon => MOON_J2000,
            Body::Mercury => MERCURY_J2000,
            Body::Venus => VENUS_J2000,
            Body::Mars => MARS_BARYCENTER_J2000,
            Body::Jupiter => JUPITER_BARYCENTER_J2000,
            Body::Saturn => SATURN_BARYCENTER_J2000,
            Body::Uranus => URANUS_BARYCENTER_J2000,
            Body::Neptune => NEPTUNE_BARYCENTER_J2000,
            Body::Pluto => PLUTO_BARYCENTER_J2000,
        }
    }
}

impl Ephemeris for AlmanacEphemeris {
    fn resolve(&self, body: Body, time: &TimePoint) -> Result<ApparentPosition, EphemerisError> {
        let state = self
            .almanac
            .transform(Self::frame(body), EARTH_J2000, time.epoch, Aberration::LT_S)
            .map_err(|e| EphemerisError::Unavailable {
                body,
                reason: e.to_string(),
            })?;
        ApparentPosition::from_cartesian(state.radius_km.x, state.radius_km.y, state.radius_km.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Epoch;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;
    #[test]
    fn body_frames() {
        let mut ids = HashSet::new();
        for body in Body::iter() {
            let frame = AlmanacEphemeris::frame(body);
            assert!(ids.insert(frame.ephemeris_id), "{} frame is not unique", body);
        }
        assert!(!ids.contains(&EARTH_J2000.ephemeris_id));
    }
    #[test]
    fn empty_almanac() {
        let ephemeris = AlmanacEphemeris {
            almanac: Almanac::default(),
        };
        let t = TimePoint::from(Epoch::from_gregorian_utc_at_midnight(2024, 6, 1));
        match ephemeris.resolve(Body::Mars, &t) {
            Err(EphemerisError::Unavailable { body, .. }) => assert_eq!(body, Body::Mars),
            other => panic!("expecting unavailable ephemeris, got {:?}", other),
        }
    }
}
