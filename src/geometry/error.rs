// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with building array geometries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("An array geometry needs at least one element")]
    NoElements,

    #[error("Element spacing must be finite and positive, but got {spacing}")]
    InvalidSpacing { spacing: f64 },
}
