//! Environmental readings submitted for assessment.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::regions::Location;

/// Slider bounds offered to callers. The assessment client does not enforce them.
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = 10.0..=45.0;
pub const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 20.0..=100.0;
pub const RAINFALL_RANGE_MM: RangeInclusive<f64> = 0.0..=300.0;

/// Temperature slider step, in °C.
pub const TEMPERATURE_STEP_C: f64 = 0.5;

/// One environmental reading: where, and what the weather is doing there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalInput {
    /// `"District, State"`.
    pub location: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm_24h: f64,
}

impl EnvironmentalInput {
    pub fn new(
        location: Location,
        temperature_c: f64,
        humidity_pct: f64,
        rainfall_mm_24h: f64,
    ) -> Self {
        Self {
            location: location.to_string(),
            temperature_c,
            humidity_pct,
            rainfall_mm_24h,
        }
    }

    /// Copy with every reading pulled into its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            location: self.location.clone(),
            temperature_c: clamp(self.temperature_c, &TEMPERATURE_RANGE_C),
            humidity_pct: clamp(self.humidity_pct, &HUMIDITY_RANGE_PCT),
            rainfall_mm_24h: clamp(self.rainfall_mm_24h, &RAINFALL_RANGE_MM),
        }
    }
}

impl Default for EnvironmentalInput {
    fn default() -> Self {
        Self::new(Location::default(), 28.0, 75.0, 15.0)
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}
