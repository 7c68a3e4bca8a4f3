// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capacity-bounded floor plans.
//!
//! A floor owns up to [`MAX_UNITS_PER_FLOOR`] units whose combined area never
//! exceeds the floor's maximum capacity. Units keep their insertion order for
//! display, but floor equality ignores it.

use std::fmt;

use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::unit::Unit;

/// Maximum number of units a single floor can hold.
pub const MAX_UNITS_PER_FLOOR: usize = 20;

/// A floor plan with a fixed capacity in square feet.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "FloorRecord")
)]
pub struct Floor {
    max_capacity: u64,
    units: Vec<Unit>,
}

/// Serialized floor, checked against capacity and unit limit on load.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FloorRecord {
    max_capacity: u64,
    units: Vec<Unit>,
}

#[cfg(feature = "serde")]
impl TryFrom<FloorRecord> for Floor {
    type Error = Error;

    fn try_from(record: FloorRecord) -> Result<Self> {
        let mut floor = Floor::new(record.max_capacity);
        for unit in &record.units {
            floor.add_unit(unit.function(), unit.width(), unit.length())?;
        }
        Ok(floor)
    }
}

impl Floor {
    /// Creates an empty floor with the given capacity in square feet.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            max_capacity,
            units: Vec::with_capacity(MAX_UNITS_PER_FLOOR),
        }
    }

    #[inline]
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Sum of the areas of all units on this floor.
    pub fn utilized_space(&self) -> u64 {
        self.units.iter().map(Unit::area_in_square_feet).sum()
    }

    pub fn remaining_space(&self) -> u64 {
        self.max_capacity.saturating_sub(self.utilized_space())
    }

    /// Units in insertion order.
    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Adds a new unit if its area fits in the remaining space.
    ///
    /// A unit that exactly fills the remaining space is accepted. On error
    /// the floor is left unchanged.
    pub fn add_unit(&mut self, function: impl Into<String>, width: u32, length: u32) -> Result<()> {
        let unit = Unit::new(function, width, length);
        let requested = unit.area_in_square_feet();
        let remaining = self.remaining_space();

        if requested > remaining {
            tracing::debug!(
                function = unit.function(),
                requested,
                remaining,
                "Rejected unit: insufficient floor space"
            );
            return Err(Error::InsufficientSpace {
                requested,
                remaining,
            });
        }

        if self.units.len() >= MAX_UNITS_PER_FLOOR {
            tracing::debug!(
                function = unit.function(),
                max = MAX_UNITS_PER_FLOOR,
                "Rejected unit: floor unit limit reached"
            );
            return Err(Error::UnitLimitReached {
                max: MAX_UNITS_PER_FLOOR,
            });
        }

        tracing::debug!(
            function = unit.function(),
            area = requested,
            remaining = remaining - requested,
            "Added unit to floor"
        );
        self.units.push(unit);
        Ok(())
    }

    /// Number of units on this floor equal to `unit`.
    ///
    /// Always at least 1 when `unit` is itself on this floor.
    pub fn number_of_equal_units(&self, unit: &Unit) -> usize {
        self.units.iter().filter(|u| *u == unit).count()
    }

    /// Occurrences of each distinct unit, keyed by function and area.
    fn unit_counts(&self) -> FxHashMap<&Unit, usize> {
        let mut counts: FxHashMap<&Unit, usize> = FxHashMap::default();
        for unit in &self.units {
            *counts.entry(unit).or_default() += 1;
        }
        counts
    }
}

/// Floors are equal when their capacities match and they hold the same
/// multiset of units, regardless of insertion order.
impl PartialEq for Floor {
    fn eq(&self, other: &Self) -> bool {
        self.max_capacity == other.max_capacity
            && self.units.len() == other.units.len()
            && self.unit_counts() == other.unit_counts()
    }
}

impl Eq for Floor {}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let utilized = self.utilized_space();
        let listing: Vec<String> = self.units.iter().map(Unit::summary).collect();

        write!(
            f,
            "Floor's utilized space is {} sq ft ({} sq ft remaining): [{}]",
            utilized,
            self.max_capacity.saturating_sub(utilized),
            listing.join(", ")
        )
    }
}
