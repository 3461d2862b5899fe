// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array configurations that can be written in toml or json.
//!
//! An [`ArrayConfig`] describes an array's layout, the wavelength it is used
//! at and (optionally) a direction to steer toward. For example, in toml:
//!
//! ```toml
//! wavelength = 2.0
//!
//! [layout]
//! type = "planar"
//! spacing_x = 1.0
//! spacing_y = 1.0
//! count_x = 8
//! count_y = 8
//!
//! [steer]
//! theta = 0.2618
//! phi = 0.7854
//! ```
//!
//! Nothing here touches the filesystem; callers hand over the contents.

mod error;

pub use error::LayoutError;

use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use vec1::Vec1;

use crate::{
    c64,
    coord::ThetaPhi,
    factor::FactorError,
    geometry::{ArrayGeometry, Element, GeometryError},
};

/// Supported config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ConfigFormat {
    #[strum(serialize = "toml")]
    Toml,

    #[strum(serialize = "json")]
    Json,
}

impl ConfigFormat {
    /// Get the format associated with a file extension (e.g. "toml" or
    /// "JSON").
    pub fn from_extension(extension: &str) -> Result<ConfigFormat, LayoutError> {
        ConfigFormat::from_str(&extension.to_lowercase()).map_err(|_| {
            LayoutError::UnknownFormat {
                got: extension.to_string(),
                supported: ConfigFormat::iter().join(", "),
            }
        })
    }
}

/// How the elements of an array are laid out. The uniform-linear and planar
/// layouts match [`ArrayGeometry::uniform_linear`] and
/// [`ArrayGeometry::planar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArrayLayout {
    UniformLinear {
        spacing: f64,
        count: usize,
    },

    Planar {
        spacing_x: f64,
        spacing_y: f64,
        count_x: usize,
        count_y: usize,
    },

    /// Explicit (x, y, z) positions, in element order.
    Elements { positions: Vec1<[f64; 3]> },
}

impl ArrayLayout {
    pub fn build(&self) -> Result<ArrayGeometry, GeometryError> {
        match self {
            ArrayLayout::UniformLinear { spacing, count } => {
                ArrayGeometry::uniform_linear(*spacing, *count)
            }
            ArrayLayout::Planar {
                spacing_x,
                spacing_y,
                count_x,
                count_y,
            } => ArrayGeometry::planar(*spacing_x, *spacing_y, *count_x, *count_y),
            ArrayLayout::Elements { positions } => ArrayGeometry::new(
                positions
                    .as_slice()
                    .iter()
                    .map(|&[x, y, z]| Element::new(x, y, z)),
            ),
        }
    }
}

/// An array layout, the wavelength it operates at and an optional steering
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrayConfig {
    /// The wavelength, in the same unit as the element positions.
    pub wavelength: f64,

    pub layout: ArrayLayout,

    /// The direction to steer the main beam toward \[radians\]. If this isn't
    /// given, all elements are weighted equally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steer: Option<ThetaPhi>,
}

impl ArrayConfig {
    /// Parse a config from the contents of a toml or json document.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<ArrayConfig, LayoutError> {
        debug!("Parsing {format} array config");
        let config: ArrayConfig = match format {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        };

        if config.wavelength == 0.0 || !config.wavelength.is_finite() {
            return Err(LayoutError::InvalidWavelength(config.wavelength));
        }
        debug!(
            "Array config: wavelength {}, layout {:?}, steer {:?}",
            config.wavelength, config.layout, config.steer
        );
        Ok(config)
    }

    /// Write this config as a toml or json document.
    pub fn serialise(&self, format: ConfigFormat) -> Result<String, LayoutError> {
        let s = match format {
            ConfigFormat::Toml => toml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(s)
    }

    pub fn geometry(&self) -> Result<ArrayGeometry, GeometryError> {
        self.layout.build()
    }

    /// Get the weights for `geometry` described by this config; steering
    /// weights if there's a steering direction, otherwise all ones.
    pub fn weights(&self, geometry: &ArrayGeometry) -> Result<Array1<c64>, FactorError> {
        match self.steer {
            Some(ThetaPhi { theta, phi }) => {
                geometry.steering_weights(self.wavelength, theta, phi)
            }
            None => Ok(Array1::ones(geometry.len())),
        }
    }
}
