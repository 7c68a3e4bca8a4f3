// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for blueprint operations.

/// Result type alias for blueprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested unit does not fit in the floor's remaining space.
    #[error("unit area exceeds max capacity: {requested} sq ft requested, {remaining} sq ft remaining")]
    InsufficientSpace { requested: u64, remaining: u64 },

    /// The floor already holds its maximum number of units.
    #[error("floor already holds the maximum of {max} units")]
    UnitLimitReached { max: usize },

    /// The blueprint already holds its maximum number of floors.
    #[error("blueprint already holds the maximum of {max} floors")]
    FloorLimitReached { max: usize },
}
