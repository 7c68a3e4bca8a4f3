// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planner configuration loaded from environment variables.

/// Largest blueprint the planner will lay out.
pub const MAX_PLANNED_FLOORS: usize = 200;

/// Planner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of floors in the blueprint, at most [`MAX_PLANNED_FLOORS`].
    pub max_floors: usize,
    /// Capacity of each floor in square feet.
    pub floor_capacity: u64,
    /// Render units in meters instead of feet.
    pub metric: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let requested_floors = lookup("PLANNER_MAX_FLOORS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(3);
        if requested_floors > MAX_PLANNED_FLOORS {
            tracing::warn!(
                requested = requested_floors,
                max = MAX_PLANNED_FLOORS,
                "PLANNER_MAX_FLOORS too large, clamping"
            );
        }

        Self {
            max_floors: requested_floors.min(MAX_PLANNED_FLOORS),
            floor_capacity: lookup("PLANNER_FLOOR_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(500),
            metric: lookup("PLANNER_METRIC")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
