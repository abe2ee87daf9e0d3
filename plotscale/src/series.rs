// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data series.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;

use crate::style::SeriesStyle;

/// An ordered sequence of `(x, y)` points drawn as a connected line.
///
/// Cloning a `Series` shares the underlying points. The scaler identifies a
/// registered series by that shared allocation, not by its contents.
#[derive(Clone, Debug)]
pub struct Series(Arc<[Point]>);

impl Series {
    /// Wraps a point buffer.
    pub fn new(points: impl Into<Arc<[Point]>>) -> Self {
        Self(points.into())
    }

    /// Builds a series from `(x, y)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let points: Vec<Point> = pairs.into_iter().map(Point::from).collect();
        Self::new(points)
    }

    /// The points, in order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if both handles share the same point buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A registered series together with its draw style.
#[derive(Clone, Debug)]
pub struct SeriesEntry {
    /// The shared data.
    pub series: Series,
    /// How to draw it.
    pub style: SeriesStyle,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn identity_follows_the_shared_buffer() {
        let a = Series::from_pairs([(0.0, 1.0), (2.0, 3.0)]);
        let same = a.clone();
        let equal_contents = Series::from_pairs([(0.0, 1.0), (2.0, 3.0)]);
        assert!(a.ptr_eq(&same), "clones share points");
        assert!(!a.ptr_eq(&equal_contents), "equal contents are a distinct series");
        assert_eq!(a.points(), equal_contents.points());
    }
}
