// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG render target for `plotscale_demo`.

use std::fmt;

use kurbo::{BezPath, Rect};
use peniko::Brush;
use plotscale::{RenderTarget, StrokeStyle, TextAnchor, TextBaseline, TextRun};

#[derive(Debug)]
enum Primitive {
    Stroke {
        path: BezPath,
        brush: Brush,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        baseline: TextBaseline,
        font_size: f64,
        fill: Brush,
    },
}

/// Collects chart primitives and serializes them as one SVG document.
#[derive(Debug)]
pub(crate) struct SvgTarget {
    view_box: Rect,
    background: Option<Brush>,
    items: Vec<(i32, Primitive)>,
}

impl SvgTarget {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            background: None,
            items: Vec::new(),
        }
    }

    pub(crate) fn with_background(mut self, brush: impl Into<Brush>) -> Self {
        self.background = Some(brush.into());
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');

        if let Some(bg) = &self.background {
            out.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
                vb.x0,
                vb.y0,
                vb.width(),
                vb.height(),
                Paint::new("fill", bg),
            ));
        }

        // Stable, so primitives sharing a layer keep their emission order.
        let mut order: Vec<&(i32, Primitive)> = self.items.iter().collect();
        order.sort_by_key(|(z, _)| *z);

        for (_z, item) in order {
            match item {
                Primitive::Stroke {
                    path,
                    brush,
                    stroke_width,
                } => {
                    out.push_str(&format!(
                        "<path d=\"{}\" fill=\"none\"{} stroke-width=\"{stroke_width}\"/>\n",
                        path.to_svg(),
                        Paint::new("stroke", brush),
                    ));
                }
                Primitive::Text {
                    x,
                    y,
                    text,
                    anchor,
                    baseline,
                    font_size,
                    fill,
                } => {
                    let baseline = match baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Hanging => "hanging",
                    };
                    out.push_str(&format!(
                        r#"<text x="{x}" y="{y}" font-size="{font_size}" dominant-baseline="{baseline}""#
                    ));
                    out.push_str(match anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    out.push_str(&format!(
                        "{}>{}</text>\n",
                        Paint::new("fill", fill),
                        XmlText(text)
                    ));
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

impl RenderTarget for SvgTarget {
    fn stroke(&mut self, path: &BezPath, style: &StrokeStyle, z_index: i32) {
        self.items.push((
            z_index,
            Primitive::Stroke {
                path: path.clone(),
                brush: style.brush.clone(),
                stroke_width: style.stroke_width,
            },
        ));
    }

    fn text(&mut self, run: &TextRun<'_>, z_index: i32) {
        self.items.push((
            z_index,
            Primitive::Text {
                x: run.pos.x,
                y: run.pos.y,
                text: run.text.to_string(),
                anchor: run.anchor,
                baseline: run.baseline,
                font_size: run.font_size,
                fill: run.fill.clone(),
            },
        ));
    }
}

/// A paint attribute (`fill` or `stroke`), plus its opacity when translucent.
struct Paint<'a> {
    attr: &'a str,
    brush: &'a Brush,
}

impl<'a> Paint<'a> {
    fn new(attr: &'a str, brush: &'a Brush) -> Self {
        Self { attr, brush }
    }
}

impl fmt::Display for Paint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attr = self.attr;
        // Only solid paints map onto a plain SVG color.
        let Brush::Solid(color) = self.brush else {
            return write!(f, " {attr}=\"none\"");
        };
        let rgba = color.to_rgba8();
        write!(f, " {attr}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b)?;
        if rgba.a < u8::MAX {
            write!(f, " {attr}-opacity=\"{}\"", f64::from(rgba.a) / 255.0)?;
        }
        Ok(())
    }
}

/// Text content with the XML special characters replaced by entities.
struct XmlText<'a>(&'a str);

impl fmt::Display for XmlText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(at) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..at])?;
            let entity = match rest.as_bytes()[at] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = &rest[at + 1..];
        }
        f.write_str(rest)
    }
}
