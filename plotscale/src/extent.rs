// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space bounding box that always contains the origin.

use kurbo::Point;

use crate::series::Series;

/// The bounding min/max of all series, always including `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest x, at most `0`.
    pub x_min: f64,
    /// Largest x, at least `0`.
    pub x_max: f64,
    /// Smallest y, at most `0`.
    pub y_min: f64,
    /// Largest y, at least `0`.
    pub y_max: f64,
}

impl Extent {
    /// The extent of no data at all: just the origin.
    pub const ORIGIN: Self = Self {
        x_min: 0.0,
        x_max: 0.0,
        y_min: 0.0,
        y_max: 0.0,
    };

    /// Scans every point of every series once.
    ///
    /// Empty series contribute nothing.
    pub fn of_series<'a>(series: impl IntoIterator<Item = &'a Series>) -> Self {
        let mut extent = Self::ORIGIN;
        for s in series {
            for p in s.points() {
                extent.include(*p);
            }
        }
        extent
    }

    /// Grows the extent to cover `p`.
    pub fn include(&mut self, p: Point) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
    }

    /// `x_max - x_min`.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// `y_max - y_min`.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns `true` if either dimension is zero, leaving no scale to derive.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Returns `true` if `p` lies inside (or on the edge of) the extent.
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::ORIGIN
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn extent_is_seeded_at_the_origin() {
        let s = Series::from_pairs([(3.0, 4.0), (5.0, 9.0)]);
        let e = Extent::of_series([&s]);
        assert_eq!(e.x_min, 0.0);
        assert_eq!(e.x_max, 5.0);
        assert_eq!(e.y_min, 0.0);
        assert_eq!(e.y_max, 9.0);
        assert!(e.contains(Point::ORIGIN));
    }

    #[test]
    fn extent_covers_every_quadrant_seen() {
        let a = Series::from_pairs([(-2.0, 1.0)]);
        let b = Series::from_pairs([(4.0, -7.0), (1.0, 1.0)]);
        let empty = Series::from_pairs([]);
        let e = Extent::of_series([&a, &empty, &b]);
        assert_eq!((e.x_min, e.x_max, e.y_min, e.y_max), (-2.0, 4.0, -7.0, 1.0));
        assert!(!e.is_degenerate());
    }

    #[test]
    fn single_axis_data_is_degenerate() {
        let on_x_axis = Series::from_pairs([(1.0, 0.0), (5.0, 0.0)]);
        assert!(Extent::of_series([&on_x_axis]).is_degenerate());
        assert!(Extent::of_series(core::iter::empty()).is_degenerate());
    }
}
