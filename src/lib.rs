// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Array factor and beam steering for arbitrary antenna arrays.

An [`ArrayGeometry`] holds the positions of each radiating element. Given a
wavelength, a weight per element and one or more (θ, ϕ) directions, the
geometry can compute its complex far-field array factor, as well as the
weights that steer the main beam toward a chosen direction. All angles are in
radians, and element positions share a length unit with the wavelength.
 */

pub mod constants;
pub mod coord;
mod error;
pub mod factor;
pub mod geometry;
pub mod layout;
pub(crate) mod math;

// Re-exports.
pub use coord::{
    angles_radius_to_xyz, angles_to_uv, uv_to_angles, BroadcastError, ThetaPhi, UV, XYZ,
};
pub use error::PhasedArrayError;
pub use factor::{normalised_power_db, FactorError};
pub use geometry::{ArrayGeometry, Element, ElementPattern, GeometryError};
pub use layout::{ArrayConfig, ArrayLayout, ConfigFormat, LayoutError};

/// Double-precision complex numbers, used for weights and array factors.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex<f64>;
