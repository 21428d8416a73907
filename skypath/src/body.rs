//! Solar system bodies
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solar system [Body] whose apparent geocentric path we may sample.
/// ```
/// use std::str::FromStr;
/// use skypath::prelude::Body;
/// assert_eq!(Body::from_str("Jupiter"), Ok(Body::Jupiter));
/// assert_eq!(Body::from_str("mars"), Ok(Body::Mars));
/// assert_eq!(Body::Saturn.to_string(), "saturn");
/// ```
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    #[default]
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}
