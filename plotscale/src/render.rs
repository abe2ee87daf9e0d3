// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart render pass.
//!
//! Emits gridlines, the two axes through the origin, tick marks, tick labels
//! and finally the series polylines. Everything is expressed in viewport
//! pixels and then mapped through the scaler's [`Positionable`] transform.

use kurbo::{Affine, BezPath, Point};

use crate::capability::{
    Positionable, RenderTarget, Renderable, TextAnchor, TextBaseline, TextRun,
};
use crate::error::ScaleError;
use crate::geometry::Geometry;
use crate::scaler::AxisScaler;
use crate::style::{ChartStyle, StrokeStyle};
use crate::ticks::format_tick;
use crate::z_order;

impl Renderable for AxisScaler {
    fn render(&mut self, target: &mut dyn RenderTarget) -> Result<(), ScaleError> {
        self.recompute()?;
        let geometry = self
            .cached_geometry()
            .ok_or(ScaleError::DegenerateGeometry)?;
        let data_to_pixels = geometry.data_to_pixels()?;
        let mut painter = Painter {
            target,
            transform: self.transform(),
        };

        painter.guides(geometry, self.style());

        let to_surface = painter.transform * data_to_pixels;
        for entry in self.series_in_draw_order() {
            let points = entry.series.points();
            if points.len() < 2 {
                continue;
            }
            let mut path = BezPath::new();
            path.move_to(to_surface * points[0]);
            for p in &points[1..] {
                path.line_to(to_surface * *p);
            }
            painter
                .target
                .stroke(&path, &entry.style.stroke, z_order::SERIES_STROKE);
        }
        Ok(())
    }
}

struct Painter<'t> {
    target: &'t mut dyn RenderTarget,
    transform: Affine,
}

impl Painter<'_> {
    fn line(&mut self, from: Point, to: Point, style: &StrokeStyle, z_index: i32) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        path.apply_affine(self.transform);
        self.target.stroke(&path, style, z_index);
    }

    fn label(
        &mut self,
        pos: Point,
        text: &str,
        anchor: TextAnchor,
        baseline: TextBaseline,
        style: &ChartStyle,
    ) {
        self.target.text(
            &TextRun {
                pos: self.transform * pos,
                text,
                anchor,
                baseline,
                font_size: style.label_font_size,
                fill: &style.label_fill,
            },
            z_order::TICK_LABELS,
        );
    }

    /// Grid, axes, tick marks and labels for a non-degenerate geometry.
    fn guides(&mut self, geometry: &Geometry, style: &ChartStyle) {
        let Some(scale) = geometry.scale else {
            return;
        };
        let origin = geometry.origin;
        let (width, height) = (geometry.viewport.width, geometry.viewport.height);
        let abscissa = &geometry.ticks.abscissa;
        let ordinate = &geometry.ticks.ordinate;
        let px = |v: f64| origin.x + v * scale.x;
        let py = |v: f64| origin.y - v * scale.y;

        if let Some(grid) = &style.grid {
            for tick in &abscissa.ticks {
                let x = px(tick.value);
                self.line(
                    Point::new(x, 0.0),
                    Point::new(x, height),
                    &grid.stroke,
                    z_order::GRID_LINES,
                );
            }
            for tick in &ordinate.ticks {
                let y = py(tick.value);
                self.line(
                    Point::new(0.0, y),
                    Point::new(width, y),
                    &grid.stroke,
                    z_order::GRID_LINES,
                );
            }
        }

        self.line(
            Point::new(0.0, origin.y),
            Point::new(width, origin.y),
            &style.axis,
            z_order::AXIS_RULES,
        );
        self.line(
            Point::new(origin.x, 0.0),
            Point::new(origin.x, height),
            &style.axis,
            z_order::AXIS_RULES,
        );

        let half = 0.5 * style.ticks.length;
        let label_offset = half + style.ticks.label_padding;

        for tick in &abscissa.ticks {
            let x = px(tick.value);
            self.line(
                Point::new(x, origin.y - half),
                Point::new(x, origin.y + half),
                &style.ticks.stroke,
                z_order::TICK_MARKS,
            );
            if tick.labeled {
                let text = format_tick(tick.value, abscissa.interval);
                self.label(
                    Point::new(x, origin.y + label_offset),
                    &text,
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                    style,
                );
            }
        }

        for tick in &ordinate.ticks {
            let y = py(tick.value);
            self.line(
                Point::new(origin.x - half, y),
                Point::new(origin.x + half, y),
                &style.ticks.stroke,
                z_order::TICK_MARKS,
            );
            if tick.labeled {
                let text = format_tick(tick.value, ordinate.interval);
                self.label(
                    Point::new(origin.x - label_offset, y),
                    &text,
                    TextAnchor::End,
                    TextBaseline::Middle,
                    style,
                );
            }
        }
    }
}
