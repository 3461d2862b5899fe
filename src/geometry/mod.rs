// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The positions (and embedded patterns) of each element in an antenna array.
//!
//! The order of elements given to an [`ArrayGeometry`] is kept for its
//! lifetime; weight vectors passed to the array factor are positional and must
//! follow the same order.

mod error;

pub use error::GeometryError;

use std::{fmt, sync::Arc};

use itertools::iproduct;
use log::debug;
use ndarray::prelude::*;
use vec1::Vec1;

use crate::{constants::OMNIDIRECTIONAL_GAIN, coord::XYZ};

/// The radiation pattern of a single element, as a function of (θ, ϕ)
/// \[radians\], giving a gain in linear units.
///
/// The array factor itself never consults this; it is only used by
/// [`ArrayGeometry::array_factor_with_element_patterns`].
#[derive(Clone)]
pub struct ElementPattern(Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>);

impl ElementPattern {
    pub fn new<F>(pattern: F) -> ElementPattern
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        ElementPattern(Arc::new(pattern))
    }

    /// A pattern with unit gain in every direction.
    pub fn omnidirectional() -> ElementPattern {
        ElementPattern::new(|_, _| OMNIDIRECTIONAL_GAIN)
    }

    /// Evaluate the pattern in the direction (θ, ϕ).
    pub fn gain(&self, theta: f64, phi: f64) -> f64 {
        (self.0)(theta, phi)
    }
}

impl Default for ElementPattern {
    fn default() -> Self {
        ElementPattern::omnidirectional()
    }
}

impl fmt::Debug for ElementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ElementPattern(..)")
    }
}

/// A single radiating element.
#[derive(Clone, Debug)]
pub struct Element {
    position: XYZ,
    pattern: ElementPattern,
}

impl Element {
    /// An omnidirectional element at (x, y, z).
    pub fn new(x: f64, y: f64, z: f64) -> Element {
        Element {
            position: XYZ { x, y, z },
            pattern: ElementPattern::default(),
        }
    }

    pub fn with_pattern(x: f64, y: f64, z: f64, pattern: ElementPattern) -> Element {
        Element {
            position: XYZ { x, y, z },
            pattern,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn position(&self) -> XYZ {
        self.position
    }

    pub fn pattern(&self) -> &ElementPattern {
        &self.pattern
    }
}

impl From<XYZ> for Element {
    fn from(xyz: XYZ) -> Self {
        Element::new(xyz.x, xyz.y, xyz.z)
    }
}

/// An ordered, non-empty, immutable collection of array elements.
///
/// Alongside the elements, the positions are kept as a (3, N) matrix; row 0 is
/// x, row 1 is y and row 2 is z, and column `i` belongs to element `i`.
#[derive(Clone, Debug)]
pub struct ArrayGeometry {
    elements: Vec1<Element>,
    positions: Array2<f64>,
}

impl ArrayGeometry {
    /// Create a geometry from elements. The order of the elements is kept.
    pub fn new<I>(elements: I) -> Result<ArrayGeometry, GeometryError>
    where
        I: IntoIterator<Item = Element>,
    {
        let elements = Vec1::try_from_vec(elements.into_iter().collect())
            .map_err(|_| GeometryError::NoElements)?;

        let mut positions = Array2::zeros((3, elements.len()));
        for (mut column, element) in positions
            .axis_iter_mut(Axis(1))
            .zip(elements.as_slice())
        {
            column[0] = element.x();
            column[1] = element.y();
            column[2] = element.z();
        }
        debug!("Created an array geometry with {} elements", elements.len());

        Ok(ArrayGeometry {
            elements,
            positions,
        })
    }

    /// A uniform linear array of `count` elements along the x-axis, spaced by
    /// `spacing`, with the first element at the origin.
    pub fn uniform_linear(spacing: f64, count: usize) -> Result<ArrayGeometry, GeometryError> {
        validate_spacing(spacing)?;
        Self::new((0..count).map(|i| Element::new(i as f64 * spacing, 0.0, 0.0)))
    }

    /// A rectangular grid of `count_x` × `count_y` elements on the xy-plane,
    /// with the first element at the origin.
    ///
    /// The elements are in row-major order; the element at index
    /// `i * count_y + j` is at `(i * spacing_x, j * spacing_y, 0)`.
    pub fn planar(
        spacing_x: f64,
        spacing_y: f64,
        count_x: usize,
        count_y: usize,
    ) -> Result<ArrayGeometry, GeometryError> {
        validate_spacing(spacing_x)?;
        validate_spacing(spacing_y)?;
        Self::new(
            iproduct!(0..count_x, 0..count_y)
                .map(|(i, j)| Element::new(i as f64 * spacing_x, j as f64 * spacing_y, 0.0)),
        )
    }

    /// The number of elements. This is never 0.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.as_slice().get(index)
    }

    /// The (3, N) position matrix.
    pub fn positions(&self) -> ArrayView2<f64> {
        self.positions.view()
    }

    pub fn x(&self) -> ArrayView1<f64> {
        self.positions.row(0)
    }

    pub fn y(&self) -> ArrayView1<f64> {
        self.positions.row(1)
    }

    pub fn z(&self) -> ArrayView1<f64> {
        self.positions.row(2)
    }
}

fn validate_spacing(spacing: f64) -> Result<(), GeometryError> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidSpacing { spacing })
    }
}
