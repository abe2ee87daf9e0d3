// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One recompute pass: extent, scale factors, origin, intervals and ticks.

use kurbo::{Affine, Point};

use crate::config::{AxisTickConfig, TickConfig, Viewport};
use crate::error::{Axis, ScaleError};
use crate::extent::Extent;
use crate::nice::round_nice;
use crate::series::Series;
use crate::ticks::{AxisTicks, TickSet};

/// Pixels per data unit on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    /// Horizontal pixels per data unit.
    pub x: f64,
    /// Vertical pixels per data unit.
    pub y: f64,
}

impl ScaleFactors {
    /// Fits `extent` into the drawable part of `viewport`.
    ///
    /// With `xy_ratio`, whichever factor exceeds the ratio is reduced so that
    /// `x / y == xy_ratio`; factors are never increased, so the data never
    /// overflows the viewport.
    ///
    /// Returns `None` for a degenerate extent or an empty drawable area.
    pub fn fit(extent: &Extent, viewport: &Viewport, xy_ratio: Option<f64>) -> Option<Self> {
        if extent.is_degenerate() {
            return None;
        }
        let mut x = viewport.drawable_width() / extent.width();
        let mut y = viewport.drawable_height() / extent.height();
        if !(x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()) {
            return None;
        }
        if let Some(ratio) = xy_ratio {
            if x > ratio * y {
                x = ratio * y;
            } else if y > x / ratio {
                y = x / ratio;
            }
        }
        Some(Self { x, y })
    }
}

/// Derived chart geometry, valid until the next mutation of the scaler.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Viewport the geometry was computed for.
    pub viewport: Viewport,
    /// Data extent, always containing the origin.
    pub extent: Extent,
    /// Scale factors, or `None` when the geometry is degenerate.
    pub scale: Option<ScaleFactors>,
    /// Pixel position of data `(0, 0)`.
    pub origin: Point,
    /// Ticks on both axes, empty when degenerate.
    pub ticks: TickSet,
}

impl Geometry {
    /// Runs the full pass over `series`.
    ///
    /// A degenerate extent is not an error: the result has no scale and no
    /// ticks, and the origin sits at the padding corner.
    pub fn compute<'a>(
        series: impl IntoIterator<Item = &'a Series>,
        viewport: Viewport,
        config: &TickConfig,
    ) -> Result<Self, ScaleError> {
        let extent = Extent::of_series(series);
        let Some(scale) = ScaleFactors::fit(&extent, &viewport, config.effective_xy_ratio())
        else {
            return Ok(Self {
                viewport,
                extent,
                scale: None,
                origin: Point::new(viewport.padding, viewport.height - viewport.padding),
                ticks: TickSet::default(),
            });
        };

        let origin = Point::new(
            -extent.x_min * scale.x + viewport.padding,
            viewport.height - (-extent.y_min * scale.y + viewport.padding),
        );

        let x_interval = resolve_interval(&config.x, scale.x);
        let y_interval = resolve_interval(&config.y, scale.y);

        // Visible data range: project the viewport edges back through the mapping.
        let x_lo = -origin.x / scale.x;
        let x_hi = (viewport.width - origin.x) / scale.x;
        let y_lo = (origin.y - viewport.height) / scale.y;
        let y_hi = origin.y / scale.y;

        let ticks = TickSet {
            abscissa: AxisTicks::generate(
                Axis::X,
                x_lo,
                x_hi,
                x_interval,
                config.x.effective_label_frequency(),
            )?,
            ordinate: AxisTicks::generate(
                Axis::Y,
                y_lo,
                y_hi,
                y_interval,
                config.y.effective_label_frequency(),
            )?,
        };

        Ok(Self {
            viewport,
            extent,
            scale: Some(scale),
            origin,
            ticks,
        })
    }

    /// Returns `true` if there is no usable data/pixel mapping.
    pub fn is_degenerate(&self) -> bool {
        self.scale.is_none()
    }

    /// The data-to-pixel mapping as an affine transform (y flipped).
    pub fn data_to_pixels(&self) -> Result<Affine, ScaleError> {
        let scale = self.scale.ok_or(ScaleError::DegenerateGeometry)?;
        Ok(Affine::new([
            scale.x,
            0.0,
            0.0,
            -scale.y,
            self.origin.x,
            self.origin.y,
        ]))
    }

    /// Maps a data-space point to pixel space.
    pub fn to_pixels(&self, p: Point) -> Result<Point, ScaleError> {
        let scale = self.scale.ok_or(ScaleError::DegenerateGeometry)?;
        Ok(Point::new(
            self.origin.x + p.x * scale.x,
            self.origin.y - p.y * scale.y,
        ))
    }

    /// Maps a pixel-space point back to data space.
    pub fn to_data(&self, p: Point) -> Result<Point, ScaleError> {
        let scale = self.scale.ok_or(ScaleError::DegenerateGeometry)?;
        Ok(Point::new(
            (p.x - self.origin.x) / scale.x,
            (self.origin.y - p.y) / scale.y,
        ))
    }
}

/// Explicit interval if configured, otherwise the nice interval nearest to the
/// data span covered by `target_pixels`.
fn resolve_interval(config: &AxisTickConfig, pixels_per_unit: f64) -> f64 {
    if let Some(interval) = config.explicit_interval() {
        return interval;
    }
    if !(config.target_pixels.is_finite() && config.target_pixels > 0.0) {
        return 0.0;
    }
    round_nice(config.target_pixels / pixels_per_unit)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn ramp() -> Series {
        Series::from_pairs([(0.0, 0.0), (10.0, 10.0)])
    }

    #[test]
    fn independent_scales_fill_the_viewport() {
        let e = Extent {
            x_min: -10.0,
            x_max: 30.0,
            y_min: 0.0,
            y_max: 5.0,
        };
        let vp = Viewport::new(440.0, 120.0).with_padding(20.0);
        let k = ScaleFactors::fit(&e, &vp, None).unwrap();
        assert_eq!(k.x, 10.0);
        assert_eq!(k.y, 16.0);
    }

    #[test]
    fn ratio_lock_only_shrinks() {
        let e = Extent {
            x_min: 0.0,
            x_max: 100.0,
            y_min: 0.0,
            y_max: 50.0,
        };
        let vp = Viewport::new(400.0, 400.0);
        let k = ScaleFactors::fit(&e, &vp, Some(1.0)).unwrap();
        assert_eq!(k.x, k.y);
        assert_eq!(k.x, 4.0);

        let k = ScaleFactors::fit(&e, &vp, Some(0.5)).unwrap();
        assert_eq!(k.x, 4.0);
        assert_eq!(k.y, 8.0);
        let k = ScaleFactors::fit(&e, &vp, Some(4.0)).unwrap();
        assert_eq!(k.x / k.y, 4.0);
        assert!(k.x <= 4.0 && k.y <= 8.0, "{k:?}");
    }

    #[test]
    fn padding_larger_than_the_viewport_is_degenerate() {
        let e = Extent {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        let vp = Viewport::new(100.0, 100.0).with_padding(60.0);
        assert_eq!(ScaleFactors::fit(&e, &vp, None), None);
    }

    #[test]
    fn origin_tracks_negative_minimums() {
        let s = Series::from_pairs([(-5.0, -5.0), (5.0, 5.0)]);
        let g = Geometry::compute([&s], Viewport::new(200.0, 200.0), &TickConfig::default())
            .unwrap();
        assert_eq!(g.origin, Point::new(100.0, 100.0));
    }

    #[test]
    fn degenerate_geometry_puts_the_origin_at_the_padding_corner() {
        let vp = Viewport::new(200.0, 100.0).with_padding(10.0);
        let g = Geometry::compute(core::iter::empty(), vp, &TickConfig::default()).unwrap();
        assert!(g.is_degenerate());
        assert_eq!(g.origin, Point::new(10.0, 90.0));
        assert!(g.ticks.is_empty());
        assert_eq!(g.to_pixels(Point::ORIGIN), Err(ScaleError::DegenerateGeometry));
        assert_eq!(g.to_data(Point::ORIGIN), Err(ScaleError::DegenerateGeometry));
    }

    #[test]
    fn auto_interval_rounds_the_target_span() {
        // 300 px over 10 units: 30 px/unit, so 50 px is 1.67 units -> 1.5.
        let s = ramp();
        let g = Geometry::compute([&s], Viewport::new(300.0, 300.0), &TickConfig::default())
            .unwrap();
        assert_eq!(g.ticks.abscissa.interval, 1.5);
        assert_eq!(g.ticks.ordinate.interval, 1.5);
    }

    #[test]
    fn affine_agrees_with_to_pixels() {
        let s = Series::from_pairs([(-3.0, 2.0), (7.0, -4.0)]);
        let g = Geometry::compute(
            [&s],
            Viewport::new(640.0, 480.0).with_padding(32.0),
            &TickConfig::default(),
        )
        .unwrap();
        let affine = g.data_to_pixels().unwrap();
        for p in [Point::new(-3.0, 2.0), Point::new(7.0, -4.0), Point::new(1.5, 0.25)] {
            let a = affine * p;
            let b = g.to_pixels(p).unwrap();
            assert!((a - b).hypot() < 1e-9, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn y_ticks_use_the_y_extent() {
        // Wide but short data: a y bound built from the x length would run far
        // past the top edge.
        let s = Series::from_pairs([(0.0, 0.0), (100.0, 2.0)]);
        let g = Geometry::compute(
            [&s],
            Viewport::new(500.0, 200.0),
            &TickConfig::default().with_interval(0.5),
        )
        .unwrap();
        let max_y = g
            .ticks
            .ordinate
            .ticks
            .iter()
            .map(|t| t.value)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max_y <= 2.5, "ordinate ran to {max_y}");
    }
}
