//! Static catalog of Northeast Indian states and the districts offered for assessment.
//!
//! The catalog constrains which `location` strings a caller may submit. It is
//! data, not logic: nothing here is computed.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A state and the districts selectable within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub state: &'static str,
    pub districts: &'static [&'static str],
}

pub const NE_LOCATIONS: &[Region] = &[
    Region {
        state: "Assam",
        districts: &["Guwahati", "Dibrugarh", "Silchar", "Jorhat", "Tezpur"],
    },
    Region {
        state: "Meghalaya",
        districts: &["Shillong", "Tura", "Jowai", "Nongpoh"],
    },
    Region {
        state: "Manipur",
        districts: &["Imphal", "Churachandpur", "Thoubal"],
    },
    Region {
        state: "Mizoram",
        districts: &["Aizawl", "Lunglei", "Champhai"],
    },
    Region {
        state: "Nagaland",
        districts: &["Kohima", "Dimapur", "Mokokchung"],
    },
    Region {
        state: "Tripura",
        districts: &["Agartala", "Udaipur", "Dharmanagar"],
    },
    Region {
        state: "Arunachal Pradesh",
        districts: &["Itanagar", "Tawang", "Pasighat"],
    },
    Region {
        state: "Sikkim",
        districts: &["Gangtok", "Namchi", "Geyzing"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("unknown state: {0}")]
    UnknownState(String),
    #[error("district {district:?} is not listed under {state}")]
    UnknownDistrict { state: String, district: String },
    #[error("expected \"District, State\", got {0:?}")]
    Malformed(String),
}

/// Look up a state by name, ignoring case and surrounding whitespace.
pub fn find_state(name: &str) -> Option<&'static Region> {
    let name = name.trim();
    NE_LOCATIONS
        .iter()
        .find(|r| r.state.eq_ignore_ascii_case(name))
}

impl Region {
    /// Catalog spelling of `name` if it is one of this state's districts.
    pub fn district(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.districts
            .iter()
            .copied()
            .find(|d| d.eq_ignore_ascii_case(name))
    }
}

/// A district/state pair known to the catalog.
///
/// Always holds catalog spelling, so two locations built from differently
/// cased input compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    state: &'static str,
    district: &'static str,
}

impl Location {
    pub fn new(state: &str, district: &str) -> Result<Self, LocationError> {
        let region = find_state(state)
            .ok_or_else(|| LocationError::UnknownState(state.trim().to_string()))?;
        let district = region
            .district(district)
            .ok_or_else(|| LocationError::UnknownDistrict {
                state: region.state.to_string(),
                district: district.trim().to_string(),
            })?;
        Ok(Self {
            state: region.state,
            district,
        })
    }

    /// Parse the `"District, State"` form used on the wire and in prompts.
    pub fn parse(s: &str) -> Result<Self, LocationError> {
        let (district, state) = s
            .split_once(',')
            .ok_or_else(|| LocationError::Malformed(s.to_string()))?;
        if district.trim().is_empty() || state.trim().is_empty() {
            return Err(LocationError::Malformed(s.to_string()));
        }
        Self::new(state, district)
    }

    pub fn state(&self) -> &'static str {
        self.state
    }

    pub fn district(&self) -> &'static str {
        self.district
    }
}

impl Default for Location {
    /// First district of the first state.
    fn default() -> Self {
        let region = &NE_LOCATIONS[0];
        Self {
            state: region.state,
            district: region.districts[0],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.district, self.state)
    }
}

impl std::str::FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_states() {
        assert_eq!(NE_LOCATIONS.len(), 8);
        let total: usize = NE_LOCATIONS.iter().map(|r| r.districts.len()).sum();
        assert_eq!(total, 27);
        assert!(NE_LOCATIONS.iter().all(|r| !r.districts.is_empty()));
    }

    #[test]
    fn find_state_ignores_case() {
        let region = find_state("  arunachal pradesh ").unwrap();
        assert_eq!(region.state, "Arunachal Pradesh");
        assert!(find_state("Kerala").is_none());
    }

    #[test]
    fn parse_normalises_spelling() {
        let loc = Location::parse("guwahati,ASSAM").unwrap();
        assert_eq!(loc.to_string(), "Guwahati, Assam");
        assert_eq!(loc, Location::new("Assam", "Guwahati").unwrap());
    }

    #[test]
    fn district_must_belong_to_state() {
        let err = Location::new("Sikkim", "Shillong").unwrap_err();
        assert_eq!(
            err,
            LocationError::UnknownDistrict {
                state: "Sikkim".into(),
                district: "Shillong".into(),
            }
        );
    }

    #[test]
    fn parse_rejects_missing_comma() {
        assert!(matches!(
            Location::parse("Guwahati Assam"),
            Err(LocationError::Malformed(_))
        ));
        assert!(matches!(
            Location::parse(", Assam"),
            Err(LocationError::Malformed(_))
        ));
    }

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(Location::default().to_string(), "Guwahati, Assam");
    }

    #[test]
    fn location_serializes_as_string() {
        let loc = Location::new("Meghalaya", "Tura").unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"Tura, Meghalaya\"");
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
        assert!(serde_json::from_str::<Location>("\"Paris, France\"").is_err());
    }
}
