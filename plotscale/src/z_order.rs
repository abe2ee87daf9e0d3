// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for primitives emitted by the chart render pass.
//!
//! Renderers should sort by `z_index` with a stable sort so that primitives
//! sharing a layer keep their emission order (series rely on this for
//! overlay priority).

/// Gridlines drawn behind everything else.
pub const GRID_LINES: i32 = -50;
/// The two axis lines through the origin.
pub const AXIS_RULES: i32 = -10;
/// Tick marks along the axes.
pub const TICK_MARKS: i32 = -5;
/// Series polylines.
pub const SERIES_STROKE: i32 = 10;
/// Tick labels, kept readable above the data.
pub const TICK_LABELS: i32 = 40;
