// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Blueprint-Lite Core
//!
//! In-memory data model for building blueprints.
//!
//! ## Overview
//!
//! Three entities compose hierarchically:
//!
//! - **[`Blueprint`]**: holds floor plans up to a fixed floor count
//! - **[`Floor`]**: holds units up to a fixed capacity in square feet
//! - **[`Unit`]**: a functional space with fixed width and length, rendered
//!   in imperial or metric measurements
//!
//! Each level exclusively owns its children. Reading floors out of a
//! blueprint always yields independent copies.
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprint_lite_core::{Blueprint, Error, Floor};
//!
//! let mut floor = Floor::new(500);
//! floor.add_unit("office", 10, 10)?;
//! floor.add_unit("office", 20, 20)?;
//! assert!(matches!(
//!     floor.add_unit("lobby", 1, 1),
//!     Err(Error::InsufficientSpace { .. })
//! ));
//!
//! let mut blueprint = Blueprint::new(3);
//! blueprint.add_floor_plan(floor)?;
//! assert_eq!(
//!     blueprint.to_string(),
//!     "33.3 percents of building blueprint completed (1 out of 3 floors)"
//! );
//! # Ok::<(), blueprint_lite_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the model types

pub mod blueprint;
pub mod error;
pub mod floor;
pub mod measurement;
pub mod unit;

pub use blueprint::Blueprint;
pub use error::{Error, Result};
pub use floor::{Floor, MAX_UNITS_PER_FLOOR};
pub use measurement::{
    feet_to_meters, square_feet_to_square_meters, MeasurementSystem, FEET_TO_METERS,
};
pub use unit::Unit;
