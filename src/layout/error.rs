// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading and writing array configs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unrecognised array config format '{got}'. Supported formats: {supported}")]
    UnknownFormat { got: String, supported: String },

    #[error("The wavelength must be finite and non-zero, but got {0}")]
    InvalidWavelength(f64),

    #[error("Couldn't decode toml structure:\n{0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Couldn't encode toml structure: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Couldn't decode or encode json structure: {0}")]
    Json(#[from] serde_json::Error),
}
