// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaler configuration values.
//!
//! Configuration is plain data: callers build a value (starting from the
//! named defaults) and hand it to the scaler. Sentinel inputs such as a
//! negative interval or a zero ratio mean "derive automatically" rather than
//! being rejected.

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 300.0;
/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 300.0;
/// Default padding (pixels) kept free on every side of the viewport.
pub const DEFAULT_PADDING: f64 = 0.0;
/// Default on-screen spacing between ticks, used when no explicit interval is set.
pub const DEFAULT_TARGET_PIXELS: f64 = 50.0;
/// Default label frequency: every tick is labeled.
pub const DEFAULT_LABEL_FREQUENCY: usize = 1;

/// The rectangular drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Margin in pixels reserved on each side (for axis labels).
    pub padding: f64,
}

impl Viewport {
    /// The default 300x300 viewport without padding.
    pub const DEFAULT: Self = Self {
        width: DEFAULT_VIEWPORT_WIDTH,
        height: DEFAULT_VIEWPORT_HEIGHT,
        padding: DEFAULT_PADDING,
    };

    /// Creates a viewport with the default padding.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_PADDING,
        }
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Width left for data after removing padding on both sides.
    pub fn drawable_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height left for data after removing padding on both sides.
    pub fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How ticks are chosen and labeled along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTickConfig {
    /// Explicit spacing between ticks in data units.
    ///
    /// `None` derives the spacing from [`AxisTickConfig::target_pixels`].
    pub interval: Option<f64>,
    /// Desired on-screen spacing between ticks, in pixels.
    pub target_pixels: f64,
    /// Every `label_frequency`-th tick, counted from zero, carries a label.
    ///
    /// `0` is treated as `1`.
    pub label_frequency: usize,
}

impl AxisTickConfig {
    /// Automatic intervals at [`DEFAULT_TARGET_PIXELS`], every tick labeled.
    pub const DEFAULT: Self = Self {
        interval: None,
        target_pixels: DEFAULT_TARGET_PIXELS,
        label_frequency: DEFAULT_LABEL_FREQUENCY,
    };

    /// Sets an explicit tick interval.
    ///
    /// Non-positive or non-finite values select automatic intervals instead.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = (interval.is_finite() && interval > 0.0).then_some(interval);
        self
    }

    /// Sets the desired on-screen tick spacing.
    pub fn with_target_pixels(mut self, target_pixels: f64) -> Self {
        self.target_pixels = target_pixels;
        self
    }

    /// Sets the label frequency.
    pub fn with_label_frequency(mut self, label_frequency: usize) -> Self {
        self.label_frequency = label_frequency;
        self
    }

    /// The explicit interval, if one is set and usable.
    pub fn explicit_interval(&self) -> Option<f64> {
        self.interval.filter(|i| i.is_finite() && *i > 0.0)
    }

    /// The label frequency with the `0` sentinel mapped to `1`.
    pub fn effective_label_frequency(&self) -> usize {
        self.label_frequency.max(1)
    }
}

impl Default for AxisTickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tick configuration for both axes plus an optional aspect ratio lock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickConfig {
    /// Abscissa tick settings.
    pub x: AxisTickConfig,
    /// Ordinate tick settings.
    pub y: AxisTickConfig,
    /// Locked ratio between the x and y scale factors (`xk / yk`).
    ///
    /// `None` lets each axis fill the viewport independently.
    pub xy_ratio: Option<f64>,
}

impl TickConfig {
    /// Builds a configuration from flat values, as a configuration loader would
    /// supply them.
    ///
    /// Non-positive intervals select automatic intervals, and a non-positive
    /// ratio disables the aspect lock.
    pub fn from_parts(
        x_interval: f64,
        y_interval: f64,
        xy_ratio: f64,
        target_pixels_x: f64,
        target_pixels_y: f64,
        label_frequency_x: usize,
        label_frequency_y: usize,
    ) -> Self {
        Self {
            x: AxisTickConfig::DEFAULT
                .with_interval(x_interval)
                .with_target_pixels(target_pixels_x)
                .with_label_frequency(label_frequency_x),
            y: AxisTickConfig::DEFAULT
                .with_interval(y_interval)
                .with_target_pixels(target_pixels_y)
                .with_label_frequency(label_frequency_y),
            xy_ratio: None,
        }
        .with_xy_ratio(xy_ratio)
    }

    /// Uses the same explicit interval on both axes.
    pub fn with_interval(mut self, interval: f64) -> Self {
        self.x = self.x.with_interval(interval);
        self.y = self.y.with_interval(interval);
        self
    }

    /// Locks the `xk / yk` ratio. Non-positive or non-finite values unlock it.
    pub fn with_xy_ratio(mut self, ratio: f64) -> Self {
        self.xy_ratio = (ratio.is_finite() && ratio > 0.0).then_some(ratio);
        self
    }

    /// The ratio lock, if one is set and usable.
    pub fn effective_xy_ratio(&self) -> Option<f64> {
        self.xy_ratio.filter(|r| r.is_finite() && *r > 0.0)
    }
}
