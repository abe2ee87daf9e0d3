// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful axis scaler.
//!
//! [`AxisScaler`] owns the chart inputs (series, viewport, tick configuration)
//! and caches the [`Geometry`] derived from them. Mutators only invalidate the
//! cache; the pass runs lazily, once, before the next geometry query or draw.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Point};
use smallvec::SmallVec;

use crate::capability::Positionable;
use crate::config::{TickConfig, Viewport};
use crate::error::ScaleError;
use crate::geometry::{Geometry, ScaleFactors};
use crate::series::{Series, SeriesEntry};
use crate::style::{ChartStyle, SeriesStyle};

/// Cached geometry state.
#[derive(Clone, Debug, Default)]
enum GeometryState {
    /// Inputs changed since the last pass.
    #[default]
    Dirty,
    /// Geometry matches the current inputs.
    Clean(Geometry),
}

impl GeometryState {
    fn clean(&self) -> Option<&Geometry> {
        match self {
            Self::Clean(geometry) => Some(geometry),
            Self::Dirty => None,
        }
    }
}

/// Turns data series plus display configuration into chart geometry.
///
/// # Examples
///
/// ```
/// use kurbo::Point;
/// use plotscale::{AxisScaler, Series, SeriesStyle, TickConfig};
///
/// let mut scaler = AxisScaler::new();
/// scaler.set_viewport(300.0, 300.0);
/// scaler.add_series(
///     Series::from_pairs([(0.0, 0.0), (10.0, 10.0)]),
///     SeriesStyle::default(),
/// );
/// scaler.set_tick_config(TickConfig::default().with_interval(5.0));
///
/// let (xs, ys) = scaler.tick_positions().unwrap();
/// assert_eq!(xs, [0.0, 5.0, 10.0]);
/// assert_eq!(ys, [0.0, 5.0, 10.0]);
///
/// let px = scaler.to_pixels(Point::new(5.0, 5.0)).unwrap();
/// assert_eq!(px, Point::new(150.0, 150.0));
/// ```
#[derive(Clone, Debug)]
pub struct AxisScaler {
    series: SmallVec<[SeriesEntry; 4]>,
    viewport: Viewport,
    tick_config: TickConfig,
    style: ChartStyle,
    transform: Affine,
    state: GeometryState,
}

impl AxisScaler {
    /// Creates a scaler with the default viewport, no series and automatic ticks.
    pub fn new() -> Self {
        Self {
            series: SmallVec::new(),
            viewport: Viewport::DEFAULT,
            tick_config: TickConfig::default(),
            style: ChartStyle::default(),
            transform: Affine::IDENTITY,
            state: GeometryState::Dirty,
        }
    }

    /// Registers a series.
    ///
    /// Series are kept in draw order: descending `overlay_priority`, insertion
    /// order among equals.
    pub fn add_series(&mut self, series: Series, style: SeriesStyle) {
        let priority = style.overlay_priority;
        let at = self
            .series
            .partition_point(|e| e.style.overlay_priority.total_cmp(&priority).is_ge());
        self.series.insert(at, SeriesEntry { series, style });
        self.mark_dirty();
    }

    /// Unregisters `series` by identity. Returns `true` if it was registered.
    pub fn remove_series(&mut self, series: &Series) -> bool {
        let Some(index) = self.series.iter().position(|e| e.series.ptr_eq(series)) else {
            return false;
        };
        self.series.remove(index);
        self.mark_dirty();
        true
    }

    /// Unregisters every series.
    pub fn clear_series(&mut self) {
        if self.series.is_empty() {
            return;
        }
        self.series.clear();
        self.mark_dirty();
    }

    /// Number of registered series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Registered series in draw order (highest overlay priority first).
    pub fn series_in_draw_order(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.series.iter()
    }

    /// Sets the viewport size in pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if self.viewport.width == width && self.viewport.height == height {
            return;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        self.mark_dirty();
    }

    /// Sets the padding in pixels.
    pub fn set_padding(&mut self, padding: f64) {
        if self.viewport.padding == padding {
            return;
        }
        self.viewport.padding = padding;
        self.mark_dirty();
    }

    /// The current viewport (including padding).
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The current padding.
    pub fn padding(&self) -> f64 {
        self.viewport.padding
    }

    /// Replaces the tick configuration.
    pub fn set_tick_config(&mut self, config: TickConfig) {
        self.tick_config = config;
        self.mark_dirty();
    }

    /// The current tick configuration.
    pub fn tick_config(&self) -> &TickConfig {
        &self.tick_config
    }

    /// Replaces the renderer styling. Geometry is unaffected.
    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    /// The current renderer styling.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Returns `true` if the next query will run a recompute pass.
    pub fn is_dirty(&self) -> bool {
        matches!(self.state, GeometryState::Dirty)
    }

    /// Brings the cached geometry up to date. Does nothing when already clean.
    ///
    /// On error the scaler stays dirty.
    pub fn recompute(&mut self) -> Result<(), ScaleError> {
        if !self.is_dirty() {
            return Ok(());
        }
        let geometry = Geometry::compute(
            self.series.iter().map(|e| &e.series),
            self.viewport,
            &self.tick_config,
        )
        .inspect_err(|err| log::debug!("chart recompute failed: {err}"))?;
        match geometry.scale {
            Some(scale) => log::debug!(
                "chart recomputed: {} series, extent {:?}, scale ({}, {}), origin ({}, {}), \
                 {} x ticks every {}, {} y ticks every {}",
                self.series.len(),
                geometry.extent,
                scale.x,
                scale.y,
                geometry.origin.x,
                geometry.origin.y,
                geometry.ticks.abscissa.ticks.len(),
                geometry.ticks.abscissa.interval,
                geometry.ticks.ordinate.ticks.len(),
                geometry.ticks.ordinate.interval,
            ),
            None => log::debug!(
                "chart recomputed: {} series, degenerate extent {:?}",
                self.series.len(),
                geometry.extent,
            ),
        }
        self.state = GeometryState::Clean(geometry);
        Ok(())
    }

    /// Recomputes if needed and returns the current geometry.
    pub fn geometry(&mut self) -> Result<&Geometry, ScaleError> {
        self.recompute()?;
        // A successful recompute always leaves the state clean.
        self.state.clean().ok_or(ScaleError::DegenerateGeometry)
    }

    /// The geometry from the last pass, or `None` if inputs changed since.
    pub fn cached_geometry(&self) -> Option<&Geometry> {
        self.state.clean()
    }

    /// Maps a data-space point to viewport pixels.
    pub fn to_pixels(&mut self, p: Point) -> Result<Point, ScaleError> {
        self.geometry()?.to_pixels(p)
    }

    /// Maps a viewport pixel back to data space.
    pub fn to_data(&mut self, p: Point) -> Result<Point, ScaleError> {
        self.geometry()?.to_data(p)
    }

    /// Current abscissa and ordinate tick values. Both are empty when the
    /// geometry is degenerate.
    pub fn tick_positions(&mut self) -> Result<(Vec<f64>, Vec<f64>), ScaleError> {
        let ticks = &self.geometry()?.ticks;
        Ok((ticks.abscissa.values(), ticks.ordinate.values()))
    }

    /// Pixel position of data `(0, 0)`.
    pub fn axis_origin(&mut self) -> Result<Point, ScaleError> {
        Ok(self.geometry()?.origin)
    }

    /// Current scale factors, or `None` when the geometry is degenerate.
    pub fn scale_factors(&mut self) -> Result<Option<ScaleFactors>, ScaleError> {
        Ok(self.geometry()?.scale)
    }

    fn mark_dirty(&mut self) {
        if !self.is_dirty() {
            log::trace!("chart geometry invalidated");
        }
        self.state = GeometryState::Dirty;
    }
}

impl Default for AxisScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Positionable for AxisScaler {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }
}
