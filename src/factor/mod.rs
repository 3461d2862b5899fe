// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array-factor calculations.
//!
//! For an element at position **p**ᵢ and a far-field direction (θ, ϕ) with unit
//! vector **r̂** = (sinθ cosϕ, sinθ sinϕ, cosθ), the path-length difference is
//! Δᵢ = **p**ᵢ · **r̂**. The array factor with weights wᵢ at wavelength λ is
//!
//! F(θ, ϕ) = Σᵢ wᵢ exp(j k Δᵢ), where k = 2π / λ.
//!
//! Steering weights are wᵢ = exp(-j k Δᵢ(θ₀, ϕ₀)), so every term of the sum at
//! (θ₀, ϕ₀) is 1 and the factor there is N. Both use the same Δᵢ.
//!
//! Embedded element patterns are assumed to be omnidirectional, except by
//! [`ArrayGeometry::array_factor_with_element_patterns`].

mod error;

pub use error::FactorError;

use log::trace;
use ndarray::{prelude::*, Data, IxDyn, Zip};

use crate::{
    c64,
    constants::TAU,
    coord::{co_broadcast, uv_to_angles, ThetaPhi, XYZ},
    geometry::ArrayGeometry,
    math::cexp,
};

impl ArrayGeometry {
    /// Get the path-length difference of each element for each direction
    /// (θ, ϕ). The result has shape (N, ...), where N is the number of
    /// elements and ... is the broadcast shape of `theta` and `phi`. Units are
    /// the same as the element positions.
    pub fn path_length_difference<S1, S2, D1, D2>(
        &self,
        theta: &ArrayBase<S1, D1>,
        phi: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<f64>, FactorError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let (theta, phi) = co_broadcast(theta, phi)?;
        Ok(self.path_length_difference_inner(theta, phi))
    }

    /// Calculate the array factor for each direction (θ, ϕ). The result has
    /// the broadcast shape of `theta` and `phi`; if both are 0-dimensional, so
    /// is the result.
    ///
    /// `weights` must have one value per element, in element order.
    pub fn array_factor<S, S1, S2, D1, D2>(
        &self,
        wavelength: f64,
        weights: &ArrayBase<S, Ix1>,
        theta: &ArrayBase<S1, D1>,
        phi: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<c64>, FactorError>
    where
        S: Data,
        S::Elem: Copy + Into<c64>,
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let weights = self.validate_weights(weights)?;
        let k = wavenumber(wavelength)?;
        let (theta, phi) = co_broadcast(theta, phi)?;
        Ok(self.array_factor_inner(k, &weights, theta, phi, false))
    }

    /// Calculate the array factor in a single direction (θ, ϕ).
    pub fn array_factor_at<S>(
        &self,
        wavelength: f64,
        weights: &ArrayBase<S, Ix1>,
        theta: f64,
        phi: f64,
    ) -> Result<c64, FactorError>
    where
        S: Data,
        S::Elem: Copy + Into<c64>,
    {
        let af = self.array_factor(wavelength, weights, &arr0(theta), &arr0(phi))?;
        Ok(af[IxDyn(&[])])
    }

    /// Calculate the array factor with each element's pattern gain gᵢ(θ, ϕ)
    /// multiplied into its term, i.e. F = Σᵢ wᵢ gᵢ(θ, ϕ) exp(j k Δᵢ). With
    /// omnidirectional elements, this is identical to
    /// [`ArrayGeometry::array_factor`].
    pub fn array_factor_with_element_patterns<S, S1, S2, D1, D2>(
        &self,
        wavelength: f64,
        weights: &ArrayBase<S, Ix1>,
        theta: &ArrayBase<S1, D1>,
        phi: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<c64>, FactorError>
    where
        S: Data,
        S::Elem: Copy + Into<c64>,
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let weights = self.validate_weights(weights)?;
        let k = wavenumber(wavelength)?;
        let (theta, phi) = co_broadcast(theta, phi)?;
        Ok(self.array_factor_inner(k, &weights, theta, phi, true))
    }

    /// Calculate the array factor for directions given as direction cosines
    /// (u, v). Every (u, v) must be on or inside the unit disk; see
    /// [`crate::coord`].
    pub fn array_factor_uv<S, S1, S2, D1, D2>(
        &self,
        wavelength: f64,
        weights: &ArrayBase<S, Ix1>,
        u: &ArrayBase<S1, D1>,
        v: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<c64>, FactorError>
    where
        S: Data,
        S::Elem: Copy + Into<c64>,
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let weights = self.validate_weights(weights)?;
        let k = wavenumber(wavelength)?;
        let (theta, phi) = uv_to_angles(u, v)?;
        Ok(self.array_factor_inner(k, &weights, theta.view(), phi.view(), false))
    }

    /// Get the weights that steer the main beam to the direction (θ₀, ϕ₀). Used
    /// as the weights of [`ArrayGeometry::array_factor`] at the same
    /// wavelength, the array factor at (θ₀, ϕ₀) is N (the number of elements).
    pub fn steering_weights(
        &self,
        wavelength: f64,
        theta: f64,
        phi: f64,
    ) -> Result<Array1<c64>, FactorError> {
        let k = wavenumber(wavelength)?;
        let theta = arr0(theta).into_dyn();
        let phi = arr0(phi).into_dyn();
        let delta = self.path_length_difference_inner(theta.view(), phi.view());
        Ok(delta.iter().map(|&delta| cexp(-k * delta)).collect())
    }

    fn validate_weights<S>(&self, weights: &ArrayBase<S, Ix1>) -> Result<Vec<c64>, FactorError>
    where
        S: Data,
        S::Elem: Copy + Into<c64>,
    {
        if weights.len() != self.len() {
            return Err(FactorError::WeightCount {
                expected: self.len(),
                got: weights.len(),
            });
        }
        Ok(weights.iter().map(|&w| w.into()).collect())
    }

    /// `theta` and `phi` must already have the same shape.
    fn path_length_difference_inner(
        &self,
        theta: ArrayViewD<f64>,
        phi: ArrayViewD<f64>,
    ) -> ArrayD<f64> {
        let directions = Zip::from(&theta)
            .and(&phi)
            .map_collect(|&theta, &phi| ThetaPhi { theta, phi }.direction_vector());

        let mut shape = Vec::with_capacity(directions.ndim() + 1);
        shape.push(self.len());
        shape.extend_from_slice(directions.shape());
        let mut delta = ArrayD::zeros(IxDyn(&shape));
        for (mut delta_i, position) in delta
            .outer_iter_mut()
            .zip(self.positions().axis_iter(Axis(1)))
        {
            let position = XYZ {
                x: position[0],
                y: position[1],
                z: position[2],
            };
            Zip::from(&mut delta_i)
                .and(&directions)
                .for_each(|delta, &r_hat| *delta = position.dot(r_hat));
        }
        delta
    }

    /// `theta` and `phi` must already have the same shape, and `weights` must
    /// have one value per element.
    fn array_factor_inner(
        &self,
        k: f64,
        weights: &[c64],
        theta: ArrayViewD<f64>,
        phi: ArrayViewD<f64>,
        use_element_patterns: bool,
    ) -> ArrayD<c64> {
        trace!(
            "Array factor over {} elements and {} directions with shape {:?} (k = {k})",
            self.len(),
            theta.len(),
            theta.shape()
        );

        let delta = self.path_length_difference_inner(theta.view(), phi.view());
        let mut af = ArrayD::zeros(theta.raw_dim());
        for ((&weight, delta_i), element) in weights
            .iter()
            .zip(delta.outer_iter())
            .zip(self.elements())
        {
            if use_element_patterns {
                let pattern = element.pattern();
                Zip::from(&mut af)
                    .and(&delta_i)
                    .and(&theta)
                    .and(&phi)
                    .for_each(|af, &delta, &theta, &phi| {
                        *af += weight * pattern.gain(theta, phi) * cexp(k * delta);
                    });
            } else {
                Zip::from(&mut af)
                    .and(&delta_i)
                    .for_each(|af, &delta| *af += weight * cexp(k * delta));
            }
        }
        af
    }
}

/// Convert an array factor to normalised power in decibels, i.e.
/// 20 log₁₀|F| minus its maximum, so the peak is 0 dB. Values below
/// `floor_db` (which must be finite and no more than 0) are set to
/// `floor_db`; a factor that is zero everywhere is entirely `floor_db`.
///
/// [`crate::constants::DEFAULT_POWER_FLOOR_DB`] is a reasonable floor.
pub fn normalised_power_db<S, D>(
    af: &ArrayBase<S, D>,
    floor_db: f64,
) -> Result<Array<f64, D>, FactorError>
where
    S: Data<Elem = c64>,
    D: Dimension,
{
    if !floor_db.is_finite() || floor_db > 0.0 {
        return Err(FactorError::InvalidFloor(floor_db));
    }

    let mut power_db = af.mapv(|f| 20.0 * f.norm().log10());
    let max = power_db.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        power_db.fill(floor_db);
        return Ok(power_db);
    }
    power_db.mapv_inplace(|p| (p - max).max(floor_db));
    Ok(power_db)
}

fn wavenumber(wavelength: f64) -> Result<f64, FactorError> {
    if wavelength == 0.0 || !wavelength.is_finite() {
        return Err(FactorError::InvalidWavelength(wavelength));
    }
    Ok(TAU / wavelength)
}
