// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Coordinate transforms between spherical angles (θ, ϕ), direction cosines
(u, v) and Cartesian offsets (x, y, z).

θ is the polar angle measured from the z-axis (boresight) and ϕ is the azimuth
measured from the x-axis toward the y-axis. All angles are in radians.

The scalar types ([`ThetaPhi`], [`UV`], [`XYZ`]) do the actual maths. The free
functions apply them element-wise over ndarray arrays of any dimension, with
numpy-style broadcasting of their inputs; a 0-dimensional array is treated as
a scalar.

# Domain restrictions

* At θ = 0 (and θ = π), u = v = 0 and ϕ cannot be recovered; [`UV::to_theta_phi`]
  reports ϕ = atan2(0, 0) = 0 there.
* [`UV::to_theta_phi`] uses arcsin, so it only recovers θ in [0, π/2] (the
  upper hemisphere). A direction at θ in (π/2, π] comes back as π - θ.
* (u, v) must lie on or inside the unit disk. Outside it, θ is NaN. No
  clamping is done; callers must keep their direction cosines valid.
 */

mod error;

pub use error::BroadcastError;

use ndarray::{prelude::*, Data, IxDyn, Zip};
use serde::{Deserialize, Serialize};

use crate::math::broadcast_shape;

/// A direction in spherical angles. All units are in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThetaPhi {
    /// Polar angle from the z-axis \[radians\]
    pub theta: f64,
    /// Azimuth from the x-axis \[radians\]
    pub phi: f64,
}

impl ThetaPhi {
    pub fn new(theta: f64, phi: f64) -> ThetaPhi {
        ThetaPhi { theta, phi }
    }

    /// Get the direction cosines of this direction, i.e. u = sin(θ)cos(ϕ) and
    /// v = sin(θ)sin(ϕ).
    pub fn to_uv(self) -> UV {
        let s_theta = self.theta.sin();
        let (s_phi, c_phi) = self.phi.sin_cos();
        UV {
            u: s_theta * c_phi,
            v: s_theta * s_phi,
        }
    }

    /// Get the Cartesian coordinates of the point `r` away from the origin in
    /// this direction.
    pub fn to_xyz(self, r: f64) -> XYZ {
        let UV { u, v } = self.to_uv();
        XYZ {
            x: r * u,
            y: r * v,
            z: r * self.theta.cos(),
        }
    }

    /// The unit vector pointing in this direction.
    pub fn direction_vector(self) -> XYZ {
        self.to_xyz(1.0)
    }
}

/// Direction cosines. There are no units (i.e. dimensionless).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UV {
    pub u: f64,
    pub v: f64,
}

impl UV {
    /// Convert these direction cosines back to spherical angles. θ is in
    /// [0, π/2] and ϕ is in (-π, π].
    ///
    /// This is only defined on or inside the unit disk (u² + v² <= 1); outside
    /// of it θ is NaN. See the module documentation.
    pub fn to_theta_phi(self) -> ThetaPhi {
        ThetaPhi {
            theta: self.u.hypot(self.v).asin(),
            phi: self.v.atan2(self.u),
        }
    }
}

/// Cartesian (x,y,z) coordinates. The units are whatever length unit the
/// caller uses, but element positions must share a unit with the wavelength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XYZ {
    pub fn dot(self, other: XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

/// Convert (θ, ϕ) to direction cosines (u, v), element-wise.
pub fn angles_to_uv<S1, S2, D1, D2>(
    theta: &ArrayBase<S1, D1>,
    phi: &ArrayBase<S2, D2>,
) -> Result<(ArrayD<f64>, ArrayD<f64>), BroadcastError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let (theta, phi) = co_broadcast(theta, phi)?;
    let mut u = ArrayD::zeros(theta.raw_dim());
    let mut v = ArrayD::zeros(theta.raw_dim());
    Zip::from(&mut u)
        .and(&mut v)
        .and(&theta)
        .and(&phi)
        .for_each(|u, v, &theta, &phi| {
            let uv = ThetaPhi { theta, phi }.to_uv();
            *u = uv.u;
            *v = uv.v;
        });
    Ok((u, v))
}

/// Convert direction cosines (u, v) to (θ, ϕ), element-wise. Every (u, v)
/// must be on or inside the unit disk; see the module documentation.
pub fn uv_to_angles<S1, S2, D1, D2>(
    u: &ArrayBase<S1, D1>,
    v: &ArrayBase<S2, D2>,
) -> Result<(ArrayD<f64>, ArrayD<f64>), BroadcastError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let (u, v) = co_broadcast(u, v)?;
    let mut theta = ArrayD::zeros(u.raw_dim());
    let mut phi = ArrayD::zeros(u.raw_dim());
    Zip::from(&mut theta)
        .and(&mut phi)
        .and(&u)
        .and(&v)
        .for_each(|theta, phi, &u, &v| {
            let tp = UV { u, v }.to_theta_phi();
            *theta = tp.theta;
            *phi = tp.phi;
        });
    Ok((theta, phi))
}

/// Convert (θ, ϕ) and a radius `r` to Cartesian (x, y, z), element-wise.
#[allow(clippy::type_complexity)]
pub fn angles_radius_to_xyz<S1, S2, S3, D1, D2, D3>(
    theta: &ArrayBase<S1, D1>,
    phi: &ArrayBase<S2, D2>,
    r: &ArrayBase<S3, D3>,
) -> Result<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>), BroadcastError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    let (theta, phi) = co_broadcast(theta, phi)?;
    let (theta, r) = co_broadcast(&theta, r)?;
    // `theta` may have grown; `phi` needs to follow it.
    let phi = phi
        .broadcast(theta.raw_dim())
        .ok_or_else(|| BroadcastError::new(phi.shape(), theta.shape()))?;

    let mut x = ArrayD::zeros(theta.raw_dim());
    let mut y = ArrayD::zeros(theta.raw_dim());
    let mut z = ArrayD::zeros(theta.raw_dim());
    Zip::from(&mut x)
        .and(&mut y)
        .and(&mut z)
        .and(&theta)
        .and(&phi)
        .and(&r)
        .for_each(|x, y, z, &theta, &phi, &r| {
            let xyz = ThetaPhi { theta, phi }.to_xyz(r);
            *x = xyz.x;
            *y = xyz.y;
            *z = xyz.z;
        });
    Ok((x, y, z))
}

/// Broadcast two arrays against each other, returning dynamic-dimensional
/// views with identical shapes.
pub(crate) fn co_broadcast<'a, S1, S2, D1, D2>(
    a: &'a ArrayBase<S1, D1>,
    b: &'a ArrayBase<S2, D2>,
) -> Result<(ArrayViewD<'a, f64>, ArrayViewD<'a, f64>), BroadcastError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let err = || BroadcastError::new(a.shape(), b.shape());
    let shape = broadcast_shape(a.shape(), b.shape()).ok_or_else(err)?;
    let a_view = a.broadcast(IxDyn(&shape)).ok_or_else(err)?;
    let b_view = b.broadcast(IxDyn(&shape)).ok_or_else(err)?;
    Ok((a_view, b_view))
}
