// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A functional space with fixed dimensions.
//!
//! Two units are equal when they serve the same function (case-sensitive)
//! and cover the same area in square feet, even if the dimensions differ:
//! a 4' x 6' office equals a 2' x 12' office.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{feet_to_meters, MeasurementSystem};

/// A unit of space on a floor, dimensioned in feet.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    function: String,
    width: u32,
    length: u32,
    measurement: MeasurementSystem,
}

impl Unit {
    /// Creates a unit displayed in imperial measurements.
    pub fn new(function: impl Into<String>, width: u32, length: u32) -> Self {
        Self {
            function: function.into(),
            width,
            length,
            measurement: MeasurementSystem::Imperial,
        }
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Width in feet.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Length in feet.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Current display mode.
    #[inline]
    pub fn measurement(&self) -> MeasurementSystem {
        self.measurement
    }

    #[inline]
    pub fn area_in_square_feet(&self) -> u64 {
        u64::from(self.width) * u64::from(self.length)
    }

    #[inline]
    pub fn area_in_square_meters(&self) -> f64 {
        feet_to_meters(self.width) * feet_to_meters(self.length)
    }

    /// Switches the display between feet and meters. Stored dimensions
    /// stay in feet.
    pub fn toggle_measurement(&mut self) {
        self.measurement = self.measurement.toggled();
    }

    /// Compact form used in floor listings, always in feet.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} sq ft ({}' by {}')",
            self.function,
            self.area_in_square_feet(),
            self.width,
            self.length
        )
    }
}

/// A clone is a fresh unit built from function and dimensions, so it
/// always starts in imperial mode.
impl Clone for Unit {
    fn clone(&self) -> Self {
        Self::new(self.function.clone(), self.width, self.length)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
            && self.area_in_square_feet() == other.area_in_square_feet()
    }
}

impl Eq for Unit {}

// Must agree with PartialEq: function and area only.
impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.function.hash(state);
        self.area_in_square_feet().hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.measurement {
            MeasurementSystem::Imperial => write!(
                f,
                "A unit of {} square feet ({}' wide and {}' long) functioning as {}",
                self.area_in_square_feet(),
                self.width,
                self.length,
                self.function
            ),
            MeasurementSystem::Metric => write!(
                f,
                "A unit of {:.2} square meters ({:.2} m wide and {:.2} m long) functioning as {}",
                self.area_in_square_meters(),
                feet_to_meters(self.width),
                feet_to_meters(self.length),
                self.function
            ),
        }
    }
}
