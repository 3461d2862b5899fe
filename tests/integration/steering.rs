// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;

use phased_array::{
    angles_to_uv, c64, constants::DEFAULT_POWER_FLOOR_DB, normalised_power_db, ArrayGeometry,
    FactorError, PhasedArrayError,
};

use super::*;

#[test]
fn ula_sweep() -> Result<(), PhasedArrayError> {
    let geometry = ArrayGeometry::uniform_linear(1.0, 8)?;
    let weights = Array1::<f64>::ones(8);
    let theta = degrees(-90.0, 90.0, 300);
    let phi = Array1::<f64>::zeros(300);

    let af = geometry.array_factor(2.0, &weights, &theta, &phi)?;
    assert_eq!(af.shape(), &[300]);

    let boresight = geometry.array_factor_at(2.0, &weights, 0.0, 0.0)?;
    assert_abs_diff_eq!(boresight.norm(), 8.0);
    Ok(())
}

#[test]
fn planar_grid() -> Result<(), PhasedArrayError> {
    let geometry = ArrayGeometry::planar(1.0, 1.0, 8, 8)?;
    let weights = Array1::<f64>::ones(64);
    let theta = degrees(-90.0, 90.0, 300);
    let phi = theta.clone();
    let (theta_grid, phi_grid) = meshgrid(theta.view(), phi.view());

    let af = geometry.array_factor(2.0, &weights, &theta_grid, &phi_grid)?;
    assert_eq!(af.shape(), theta_grid.shape());

    let power = normalised_power_db(&af, DEFAULT_POWER_FLOOR_DB)?;
    assert_eq!(power.shape(), theta_grid.shape());
    let max = power.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_abs_diff_eq!(max, 0.0);
    assert!(power.iter().all(|&p| p >= DEFAULT_POWER_FLOOR_DB));
    Ok(())
}

#[test]
fn steering_ula_and_planar() -> Result<(), PhasedArrayError> {
    for (geometry, theta0, phi0) in [
        (ArrayGeometry::uniform_linear(1.0, 8)?, 30.0_f64, 0.0_f64),
        (ArrayGeometry::planar(1.0, 1.0, 8, 8)?, 15.0, 45.0),
    ] {
        let (theta0, phi0) = (theta0.to_radians(), phi0.to_radians());
        let weights = geometry.steering_weights(2.0, theta0, phi0)?;
        let af = geometry.array_factor_at(2.0, &weights, theta0, phi0)?;
        assert_abs_diff_eq!(af.re, geometry.len() as f64, epsilon = 1e-10);
        assert_abs_diff_eq!(af.im, 0.0, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn steered_planar_peak_in_uv() -> Result<(), PhasedArrayError> {
    // The steered beam should peak at the direction cosines of the target.
    let geometry = ArrayGeometry::planar(1.0, 1.0, 8, 8)?;
    let target = (0.3, 0.9);
    let weights = geometry.steering_weights(2.0, target.0, target.1)?;
    let (u0, v0) = angles_to_uv(&arr0(target.0), &arr0(target.1))?;

    let u = Array::linspace(-0.7, 0.7, 141);
    let v = u.view().insert_axis(Axis(1));
    let af = geometry.array_factor_uv(2.0, &weights, &u, &v)?;
    let (i_max, f_max) = af
        .indexed_iter()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
        .unwrap();
    let (v_max, u_max) = (v[[i_max[0], 0]], u[i_max[1]]);
    assert_abs_diff_eq!(u_max, u0[IxDyn(&[])], epsilon = 0.01);
    assert_abs_diff_eq!(v_max, v0[IxDyn(&[])], epsilon = 0.01);
    assert!(f_max.norm() > 60.0);
    Ok(())
}

#[test]
fn errors_surface_through_crate_error() {
    let geometry = ArrayGeometry::uniform_linear(1.0, 8).unwrap();
    let weights = Array1::<c64>::ones(7);
    let result: Result<_, PhasedArrayError> = geometry
        .array_factor_at(2.0, &weights, 0.0, 0.0)
        .map_err(Into::into);
    assert!(matches!(
        result,
        Err(PhasedArrayError::Factor(FactorError::WeightCount {
            expected: 8,
            got: 7
        }))
    ));

    let result = ArrayGeometry::new(vec![]).map_err(PhasedArrayError::from);
    assert!(matches!(result, Err(PhasedArrayError::Geometry(_))));
}
