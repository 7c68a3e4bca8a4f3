// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blueprint-Lite Planner - lays out a sample building blueprint.
//!
//! Fills one floor per configured level with a fixed program of units,
//! skipping units that no longer fit, and logs each floor and the overall
//! blueprint progress.
//!
//! # Environment
//!
//! - `PLANNER_MAX_FLOORS` - floors in the blueprint (default 3, at most 200)
//! - `PLANNER_FLOOR_CAPACITY` - floor capacity in sq ft (default 500)
//! - `PLANNER_METRIC` - render units in meters (default false)
//! - `RUST_LOG` - log filter

use anyhow::Result;
use blueprint_lite_core::{Blueprint, Error, Floor};

mod config;

use config::Config;

/// Units requested on every floor, in order: (function, width, length).
const FLOOR_PROGRAM: &[(&str, u32, u32)] = &[
    ("lobby", 10, 12),
    ("office", 10, 10),
    ("office", 5, 20),
    ("meeting room", 8, 10),
    ("storage", 6, 6),
    ("kitchen", 9, 9),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,blueprint_lite_core=debug".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        max_floors = config.max_floors,
        floor_capacity = config.floor_capacity,
        metric = config.metric,
        "Starting blueprint planner"
    );

    let blueprint = plan(&config)?;

    for (level, floor) in blueprint.floors().into_iter().enumerate() {
        tracing::info!(level, "{}", floor);
        for unit in floor.units() {
            let mut unit = unit.clone();
            if config.metric {
                unit.toggle_measurement();
            }
            tracing::info!(level, "{}", unit);
        }
    }
    tracing::info!("{}", blueprint);

    Ok(())
}

/// Builds a blueprint with one furnished floor per level.
fn plan(config: &Config) -> Result<Blueprint> {
    let mut blueprint = Blueprint::new(config.max_floors);

    for _ in 0..config.max_floors {
        let mut floor = Floor::new(config.floor_capacity);
        for &(function, width, length) in FLOOR_PROGRAM {
            match floor.add_unit(function, width, length) {
                Ok(()) => {}
                Err(err @ (Error::InsufficientSpace { .. } | Error::UnitLimitReached { .. })) => {
                    tracing::warn!(function, error = %err, "Skipping unit");
                }
                Err(err) => return Err(err.into()),
            }
        }
        blueprint.add_floor_plan(floor)?;
    }

    Ok(blueprint)
}
