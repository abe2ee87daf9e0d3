// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types reported by the scaler.

use core::fmt;

/// One of the two chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal (abscissa) axis.
    X,
    /// The vertical (ordinate) axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors returned by [`AxisScaler`](crate::AxisScaler) queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleError {
    /// The extent has zero width or height (or the drawable area is empty),
    /// so there is no data/pixel mapping to use.
    ///
    /// Renderers should treat this as "nothing to show".
    DegenerateGeometry,
    /// Label thinning found no tick within half an interval of zero.
    ///
    /// This means the extent or interval computation upstream went wrong; the
    /// current frame should not be drawn with the partial result.
    MissingZeroTick {
        /// The axis whose tick list has no zero reference.
        axis: Axis,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry => {
                f.write_str("chart geometry is degenerate (zero extent or empty viewport)")
            }
            Self::MissingZeroTick { axis } => {
                write!(f, "no tick near zero on the {axis} axis")
            }
        }
    }
}

impl core::error::Error for ScaleError {}
