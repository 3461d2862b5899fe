// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with array-factor calculations.

use thiserror::Error;

use crate::coord::BroadcastError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactorError {
    #[error("Got {got} weights, but the array has {expected} elements")]
    WeightCount { expected: usize, got: usize },

    #[error("The wavelength must be finite and non-zero, but got {0}")]
    InvalidWavelength(f64),

    #[error(transparent)]
    Shape(#[from] BroadcastError),

    #[error("The power floor must be finite and no more than 0 dB, but got {0}")]
    InvalidFloor(f64),
}
