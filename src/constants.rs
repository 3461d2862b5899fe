// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Array factors are summed over many
elements, and single-precision phases lose accuracy quickly as positions grow
relative to the wavelength.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// The gain of an omnidirectional element in every direction [linear units].
pub const OMNIDIRECTIONAL_GAIN: f64 = 1.0;

/// Normalised power below this value is clipped when converting an array
/// factor to decibels \[dB\].
pub const DEFAULT_POWER_FLOOR_DB: f64 = -100.0;
