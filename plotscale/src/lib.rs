// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Automatic axis scaling and "nice" tick placement for 2D line charts.
//!
//! The center of this crate is [`AxisScaler`]:
//! - it takes registered [`Series`], a [`Viewport`] and a [`TickConfig`],
//! - derives a data [`Extent`] that always contains the origin,
//! - fits it into the viewport (optionally with a locked aspect ratio),
//! - and places ticks on human-friendly intervals from [`NICE_INTERVALS`].
//!
//! Geometry is recomputed lazily: mutators only mark the scaler dirty, and the
//! next query (or [`Renderable::render`]) runs one pass.
//!
//! Drawing goes through the narrow [`RenderTarget`] trait, so the crate has no
//! opinion about the output surface. Text shaping is out of scope; labels are
//! emitted as unshaped strings with an anchor and baseline.
//!
//! ```
//! use plotscale::{AxisScaler, Series, SeriesStyle, TickConfig, Viewport};
//!
//! let mut scaler = AxisScaler::new();
//! scaler.set_viewport(400.0, 400.0);
//! scaler.set_tick_config(TickConfig::default().with_xy_ratio(1.0));
//! scaler.add_series(
//!     Series::from_pairs([(0.0, 0.0), (100.0, 50.0)]),
//!     SeriesStyle::default(),
//! );
//!
//! let k = scaler.scale_factors().unwrap().unwrap();
//! assert_eq!(k.x, k.y);
//! assert_eq!(scaler.viewport(), Viewport::new(400.0, 400.0));
//! ```

#![no_std]

extern crate alloc;

mod capability;
mod config;
mod error;
mod extent;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod nice;
mod render;
mod scaler;
mod series;
mod style;
mod ticks;
mod z_order;

pub use capability::{
    Positionable, RenderTarget, Renderable, TextAnchor, TextBaseline, TextRun,
};
pub use config::{
    AxisTickConfig, DEFAULT_LABEL_FREQUENCY, DEFAULT_PADDING, DEFAULT_TARGET_PIXELS,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, TickConfig, Viewport,
};
pub use error::{Axis, ScaleError};
pub use extent::Extent;
pub use geometry::{Geometry, ScaleFactors};
pub use nice::{NICE_INTERVALS, next_nice, round_nice};
pub use scaler::AxisScaler;
pub use series::{Series, SeriesEntry};
pub use style::{
    ChartStyle, DEFAULT_AXIS_STROKE_WIDTH, DEFAULT_GRID_STROKE_WIDTH, DEFAULT_LABEL_FONT_SIZE,
    DEFAULT_LABEL_PADDING, DEFAULT_SERIES_STROKE_WIDTH, DEFAULT_TICK_LENGTH,
    DEFAULT_TICK_STROKE_WIDTH, GridStyle, SeriesStyle, StrokeStyle, TickMarkStyle,
};
pub use ticks::{
    AxisTicks, MAX_TICKS_PER_AXIS, Tick, TickSet, coarsen_interval, format_tick, label_mask,
    tick_values,
};
pub use z_order::*;
