// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-facing styling.
//!
//! None of these values affect geometry. Changing them never invalidates the
//! scaler's computed extent, scale or ticks.

use peniko::Brush;
use peniko::color::palette::css;

/// Default stroke width for the two axis lines.
pub const DEFAULT_AXIS_STROKE_WIDTH: f64 = 1.0;
/// Default tick mark length, measured across the axis.
pub const DEFAULT_TICK_LENGTH: f64 = 20.0;
/// Default tick mark stroke width.
pub const DEFAULT_TICK_STROKE_WIDTH: f64 = 3.0;
/// Default gridline stroke width.
pub const DEFAULT_GRID_STROKE_WIDTH: f64 = 1.0;
/// Default tick label font size.
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 12.0;
/// Default gap between the end of a tick mark and its label.
pub const DEFAULT_LABEL_PADDING: f64 = 4.0;
/// Default stroke width for series lines.
pub const DEFAULT_SERIES_STROKE_WIDTH: f64 = 2.0;

/// A paint + width pair for stroked paths (axes, ticks, gridlines, series).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, DEFAULT_AXIS_STROKE_WIDTH)
    }
}

/// Tick mark styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMarkStyle {
    /// Mark length in pixels, centered on the axis line.
    pub length: f64,
    /// Stroke for the mark.
    pub stroke: StrokeStyle,
    /// Gap between the end of the mark and its label.
    pub label_padding: f64,
}

impl Default for TickMarkStyle {
    fn default() -> Self {
        Self {
            length: DEFAULT_TICK_LENGTH,
            stroke: StrokeStyle::solid(css::BLACK, DEFAULT_TICK_STROKE_WIDTH),
            label_padding: DEFAULT_LABEL_PADDING,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: DEFAULT_GRID_STROKE_WIDTH,
            },
        }
    }
}

/// Everything the render pass needs besides geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Stroke for the two axis lines through the origin.
    pub axis: StrokeStyle,
    /// Tick mark styling.
    pub ticks: TickMarkStyle,
    /// Gridlines at every tick, or `None` for no grid.
    pub grid: Option<GridStyle>,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl ChartStyle {
    /// Sets the axis stroke.
    pub fn with_axis(mut self, axis: StrokeStyle) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the tick mark style.
    pub fn with_ticks(mut self, ticks: TickMarkStyle) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Disable gridlines.
    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        let axis = StrokeStyle::default();
        Self {
            label_fill: axis.brush.clone(),
            axis,
            ticks: TickMarkStyle::default(),
            grid: Some(GridStyle::default()),
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
        }
    }
}

/// Per-series draw style.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Line stroke.
    pub stroke: StrokeStyle,
    /// Series with a higher priority are drawn first; equal priorities keep
    /// insertion order.
    pub overlay_priority: f64,
}

impl SeriesStyle {
    /// Creates a style with the given stroke and priority.
    pub fn new(stroke: StrokeStyle, overlay_priority: f64) -> Self {
        Self {
            stroke,
            overlay_priority,
        }
    }

    /// Convenience for a solid line.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64, overlay_priority: f64) -> Self {
        Self::new(StrokeStyle::solid(brush, stroke_width), overlay_priority)
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, DEFAULT_SERIES_STROKE_WIDTH, 0.0)
    }
}
