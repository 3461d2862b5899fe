// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod config;
mod steering;

use ndarray::prelude::*;

/// Like numpy's `meshgrid`.
fn meshgrid(a: ArrayView1<f64>, b: ArrayView1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (b.len(), a.len());
    (
        Array2::from_shape_fn(shape, |(_, j)| a[j]),
        Array2::from_shape_fn(shape, |(i, _)| b[i]),
    )
}

fn degrees(start: f64, end: f64, n: usize) -> Array1<f64> {
    Array::linspace(start, end, n).mapv(f64::to_radians)
}
