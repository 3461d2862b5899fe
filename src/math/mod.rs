// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::c64;

/// Complex exponential. The argument is assumed to be purely imaginary.
///
/// This function doesn't actually use complex numbers; it just returns the real
/// and imag components from Euler's formula (i.e. e^{ix} = cos{x} + i sin{x}).
///
/// # Examples
///
/// `assert_abs_diff_eq!(cexp(PI), c64::new(-1.0, 0.0));`
#[inline]
pub(crate) fn cexp(x: f64) -> c64 {
    let (im, re) = x.sin_cos();
    c64::new(re, im)
}

/// Get the numpy-style broadcast of two shapes. Shapes are aligned on their
/// trailing axes; each pair of axis lengths must be equal, or one of them must
/// be 1. `None` is returned if the shapes are incompatible.
pub(crate) fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut shape = vec![0; ndim];
    for (i_axis, out) in shape.iter_mut().enumerate() {
        // Count from the back; missing leading axes act like length-1 axes.
        let len_a = axis_len_from_back(a, ndim - i_axis - 1);
        let len_b = axis_len_from_back(b, ndim - i_axis - 1);
        *out = match (len_a, len_b) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => return None,
        };
    }
    Some(shape)
}

fn axis_len_from_back(shape: &[usize], from_back: usize) -> usize {
    if from_back < shape.len() {
        shape[shape.len() - from_back - 1]
    } else {
        1
    }
}
