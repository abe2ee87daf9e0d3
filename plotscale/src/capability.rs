// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrow capability traits for chart components.
//!
//! A chart is something that can be drawn ([`Renderable`]) and something that
//! can be placed on a host surface ([`Positionable`]). The two are independent:
//! neither has anything to do with how the chart computes its geometry.

use kurbo::{Affine, BezPath, Point};
use peniko::Brush;

use crate::error::ScaleError;
use crate::style::StrokeStyle;

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical alignment of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is at the top of the text.
    Hanging,
    /// The anchor is at the vertical middle of the text.
    Middle,
}

/// A single line of text to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun<'a> {
    /// Anchor point in surface coordinates.
    pub pos: Point,
    /// The text.
    pub text: &'a str,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill paint.
    pub fill: &'a Brush,
}

/// A drawing surface that chart components emit primitives into.
///
/// Primitives arrive in paint order within each `z_index`; surfaces that
/// reorder should sort stably by `z_index`. Coordinates are surface pixels
/// with y growing downward.
pub trait RenderTarget {
    /// Strokes `path`.
    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle, z_index: i32);

    /// Draws a single line of text.
    fn text(&mut self, run: &TextRun<'_>, z_index: i32);
}

/// Something that can draw itself into a [`RenderTarget`].
pub trait Renderable {
    /// Emits this component's primitives into `target`.
    ///
    /// Takes `&mut self` so implementations can bring cached state up to date
    /// first.
    fn render(&mut self, target: &mut dyn RenderTarget) -> Result<(), ScaleError>;
}

/// Something that can be placed on a host surface with a 2D transform.
pub trait Positionable {
    /// The component-to-surface transform.
    fn transform(&self) -> Affine;

    /// Replaces the component-to-surface transform.
    fn set_transform(&mut self, transform: Affine);

    /// Places the component's top-left corner at `pos`, discarding any scale or
    /// rotation in the current transform.
    fn set_position(&mut self, pos: Point) {
        self.set_transform(Affine::translate(pos.to_vec2()));
    }

    /// Where the component's top-left corner lands on the surface.
    fn position(&self) -> Point {
        self.transform() * Point::ORIGIN
    }
}
