// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building blueprint composed of floor plans.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::floor::Floor;

/// Upper bound on the floor slots reserved up front by [`Blueprint::new`].
const PREALLOCATED_FLOORS: usize = 64;

/// A building blueprint holding up to `max_floors` floor plans.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BlueprintRecord")
)]
pub struct Blueprint {
    max_floors: usize,
    floors: Vec<Floor>,
}

/// Serialized blueprint, checked against the floor limit on load.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BlueprintRecord {
    max_floors: usize,
    floors: Vec<Floor>,
}

#[cfg(feature = "serde")]
impl TryFrom<BlueprintRecord> for Blueprint {
    type Error = Error;

    fn try_from(record: BlueprintRecord) -> Result<Self> {
        let mut blueprint = Blueprint::new(record.max_floors);
        for floor in record.floors {
            blueprint.add_floor_plan(floor)?;
        }
        Ok(blueprint)
    }
}

impl Blueprint {
    /// Creates an empty blueprint.
    pub fn new(max_floors: usize) -> Self {
        Self {
            max_floors,
            floors: Vec::with_capacity(max_floors.min(PREALLOCATED_FLOORS)),
        }
    }

    #[inline]
    pub fn max_floors(&self) -> usize {
        self.max_floors
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Appends a floor plan, taking ownership of it.
    pub fn add_floor_plan(&mut self, floor: Floor) -> Result<()> {
        if self.floors.len() >= self.max_floors {
            tracing::debug!(
                max_floors = self.max_floors,
                "Rejected floor plan: blueprint floor limit reached"
            );
            return Err(Error::FloorLimitReached {
                max: self.max_floors,
            });
        }

        tracing::debug!(
            floor = self.floors.len() + 1,
            max_floors = self.max_floors,
            utilized = floor.utilized_space(),
            "Added floor plan"
        );
        self.floors.push(floor);
        Ok(())
    }

    /// Returns independent copies of all floors in insertion order.
    ///
    /// Changes made to the returned floors never reach the blueprint.
    pub fn floors(&self) -> Vec<Floor> {
        self.floors.clone()
    }

    /// Share of `max_floors` already laid out, in percent.
    pub fn completion_percentage(&self) -> f64 {
        if self.max_floors == 0 {
            return 0.0;
        }
        self.floors.len() as f64 / self.max_floors as f64 * 100.0
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:.1}` alone rounds ties to even; the report rounds half up.
        let percentage = (self.completion_percentage() * 10.0).round() / 10.0;
        write!(
            f,
            "{:.1} percents of building blueprint completed ({} out of {} floors)",
            percentage,
            self.floors.len(),
            self.max_floors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn furnished_floor() -> Floor {
        let mut floor = Floor::new(500);
        floor.add_unit("office", 10, 10).unwrap();
        floor
    }

    #[test]
    fn new_blueprint_is_empty() {
        let bp = Blueprint::new(3);
        assert_eq!(bp.max_floors(), 3);
        assert_eq!(bp.floor_count(), 0);
        assert!(bp.floors().is_empty());
        assert_eq!(
            bp.to_string(),
            "0.0 percents of building blueprint completed (0 out of 3 floors)"
        );
    }

    #[test]
    fn one_of_three_floors() {
        let mut bp = Blueprint::new(3);
        bp.add_floor_plan(Floor::new(500)).unwrap();
        assert_relative_eq!(bp.completion_percentage(), 100.0 / 3.0, epsilon = 1e-9);
        assert_eq!(
            bp.to_string(),
            "33.3 percents of building blueprint completed (1 out of 3 floors)"
        );
    }

    #[test]
    fn full_blueprint() {
        let mut bp = Blueprint::new(2);
        bp.add_floor_plan(Floor::new(500)).unwrap();
        bp.add_floor_plan(Floor::new(700)).unwrap();
        assert_eq!(
            bp.to_string(),
            "100.0 percents of building blueprint completed (2 out of 2 floors)"
        );
    }

    #[test]
    fn percentage_ties_round_half_up() {
        let mut bp = Blueprint::new(16);
        bp.add_floor_plan(Floor::new(100)).unwrap();
        assert_eq!(
            bp.to_string(),
            "6.3 percents of building blueprint completed (1 out of 16 floors)"
        );

        for _ in 0..4 {
            bp.add_floor_plan(Floor::new(100)).unwrap();
        }
        assert_eq!(
            bp.to_string(),
            "31.3 percents of building blueprint completed (5 out of 16 floors)"
        );
    }

    #[test]
    fn percentage_rounds_to_nearest_tenth() {
        let mut bp = Blueprint::new(6);
        bp.add_floor_plan(Floor::new(100)).unwrap();
        assert_eq!(
            bp.to_string(),
            "16.7 percents of building blueprint completed (1 out of 6 floors)"
        );
        let mut bp = Blueprint::new(7);
        bp.add_floor_plan(Floor::new(100)).unwrap();
        assert_eq!(
            bp.to_string(),
            "14.3 percents of building blueprint completed (1 out of 7 floors)"
        );
    }

    #[test]
    fn huge_floor_limit_does_not_preallocate() {
        let mut bp = Blueprint::new(usize::MAX);
        bp.add_floor_plan(Floor::new(100)).unwrap();
        assert_eq!(bp.floor_count(), 1);
        assert_eq!(bp.max_floors(), usize::MAX);
    }

    #[test]
    fn floor_limit_is_enforced() {
        let mut bp = Blueprint::new(1);
        bp.add_floor_plan(Floor::new(500)).unwrap();
        assert_eq!(
            bp.add_floor_plan(Floor::new(500)),
            Err(Error::FloorLimitReached { max: 1 })
        );
        assert_eq!(bp.floor_count(), 1);
    }

    #[test]
    fn zero_capacity_blueprint() {
        let mut bp = Blueprint::new(0);
        assert!(bp.add_floor_plan(Floor::new(100)).is_err());
        assert_eq!(
            bp.to_string(),
            "0.0 percents of building blueprint completed (0 out of 0 floors)"
        );
    }

    #[test]
    fn floors_preserve_order() {
        let mut bp = Blueprint::new(3);
        bp.add_floor_plan(Floor::new(100)).unwrap();
        bp.add_floor_plan(Floor::new(200)).unwrap();
        let capacities: Vec<u64> = bp.floors().iter().map(Floor::max_capacity).collect();
        assert_eq!(capacities, vec![100, 200]);
    }

    #[test]
    fn floors_returns_copies() {
        let mut bp = Blueprint::new(3);
        bp.add_floor_plan(furnished_floor()).unwrap();

        let mut floors = bp.floors();
        floors[0].add_unit("lab", 5, 5).unwrap();
        floors.push(Floor::new(900));

        let fresh = bp.floors();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].utilized_space(), 100);
        assert_eq!(fresh[0], furnished_floor());
        assert_ne!(fresh[0], floors[0]);
    }

    #[test]
    fn clone_is_deep() {
        let mut original = Blueprint::new(3);
        original.add_floor_plan(furnished_floor()).unwrap();

        let mut copy = original.clone();
        copy.add_floor_plan(Floor::new(200)).unwrap();

        assert_eq!(original.floor_count(), 1);
        assert_eq!(copy.floor_count(), 2);
        assert_eq!(copy.max_floors(), 3);
        assert_eq!(copy.floors()[0], original.floors()[0]);
    }
}
