// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Measurement systems and feet/meter conversion
//!
//! Dimensions are always stored in feet. Metric values are derived on
//! demand when rendering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Meters in one foot (international foot)
pub const FEET_TO_METERS: f64 = 0.3048;

/// Display mode of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementSystem {
    /// Feet and square feet
    #[default]
    Imperial,
    /// Meters and square meters
    Metric,
}

impl MeasurementSystem {
    /// The other measurement system
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MeasurementSystem::Imperial => MeasurementSystem::Metric,
            MeasurementSystem::Metric => MeasurementSystem::Imperial,
        }
    }

    /// True for meters and square meters
    #[inline]
    pub fn is_metric(self) -> bool {
        self == MeasurementSystem::Metric
    }
}

/// Convert a length in feet to meters
#[inline]
pub fn feet_to_meters(feet: u32) -> f64 {
    f64::from(feet) * FEET_TO_METERS
}

/// Convert an area in square feet to square meters
#[inline]
pub fn square_feet_to_square_meters(square_feet: u64) -> f64 {
    square_feet as f64 * FEET_TO_METERS * FEET_TO_METERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_toggle_round_trip() {
        let mode = MeasurementSystem::default();
        assert_eq!(mode, MeasurementSystem::Imperial);
        assert_eq!(mode.toggled(), MeasurementSystem::Metric);
        assert_eq!(mode.toggled().toggled(), mode);
        assert!(mode.toggled().is_metric());
    }

    #[test]
    fn test_length_conversion() {
        assert_relative_eq!(feet_to_meters(0), 0.0);
        assert_relative_eq!(feet_to_meters(1), 0.3048);
        assert_relative_eq!(feet_to_meters(10), 3.048, epsilon = 1e-12);
    }

    #[test]
    fn test_area_conversion() {
        assert_relative_eq!(square_feet_to_square_meters(0), 0.0);
        assert_relative_eq!(square_feet_to_square_meters(1), 0.09290304, epsilon = 1e-12);
        assert_relative_eq!(square_feet_to_square_meters(200), 18.580608, epsilon = 1e-9);
    }
}
