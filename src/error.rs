// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all phased-array-related errors.

use thiserror::Error;

use crate::{
    coord::BroadcastError, factor::FactorError, geometry::GeometryError, layout::LayoutError,
};

/// Every error this crate can produce. Each module has its own, more specific
/// error type; this wraps them so callers can use `?` across modules.
#[derive(Error, Debug)]
pub enum PhasedArrayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Factor(#[from] FactorError),

    #[error(transparent)]
    Broadcast(#[from] BroadcastError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
