// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Charts a few sampled functions (and optionally a pair file) with `plotscale`.
//!
//! Usage: `plotscale_demo [PAIRS_FILE]`. Set `RUST_LOG=debug` to see the
//! scaler's recompute passes.

mod sample;
mod svg;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use kurbo::{Point, Rect};
use log::info;
use peniko::color::palette::css;
use plotscale::{AxisScaler, Positionable, Renderable, SeriesStyle, TickConfig};

use crate::sample::{read_pairs, sample_fn, write_pairs};
use crate::svg::SvgTarget;

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 800.0;
const PADDING: f64 = 100.0;
const MARGIN: f64 = 20.0;
const OUTPUT: &str = "plotscale_demo.svg";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_module_path(false)
        .init();

    let mut scaler = AxisScaler::new();
    scaler.set_viewport(WIDTH, HEIGHT);
    scaler.set_padding(PADDING);
    scaler.set_tick_config(TickConfig::from_parts(-1.0, -1.0, 0.0, 60.0, 60.0, 2, 2));

    let curves: [(fn(f64) -> f64, SeriesStyle); 3] = [
        (|x| x.powf(0.75), SeriesStyle::solid(css::BLUE, 3.0, 3.0)),
        (f64::sqrt, SeriesStyle::solid(css::RED, 3.0, 2.0)),
        (|x| x.powf(0.4), SeriesStyle::solid(css::BLACK, 3.0, 1.0)),
    ];
    for (f, style) in curves {
        scaler.add_series(sample_fn(0.0, 500.0, 0.2, f), style);
    }

    if let Some(path) = std::env::args().nth(1) {
        let series = read_pairs(BufReader::new(File::open(&path)?))?;
        info!("read {} points from {path}", series.len());
        if log::log_enabled!(log::Level::Debug) {
            let mut echo = Vec::new();
            write_pairs(&mut echo, &series)?;
            log::debug!("{path}:\n{}", String::from_utf8_lossy(&echo));
        }
        scaler.add_series(series, SeriesStyle::solid(css::DARK_GREEN, 2.0, 4.0));
    }

    scaler.set_position(Point::new(MARGIN, MARGIN));
    let view = Rect::new(0.0, 0.0, WIDTH + 2.0 * MARGIN, HEIGHT + 2.0 * MARGIN);
    let mut target = SvgTarget::new(view).with_background(css::WHITE);
    scaler.render(&mut target)?;

    let (xs, ys) = scaler.tick_positions()?;
    info!(
        "{} series, {} x ticks, {} y ticks, {} primitives",
        scaler.series_count(),
        xs.len(),
        ys.len(),
        target.len()
    );

    std::fs::write(OUTPUT, target.to_svg_string())?;
    info!("wrote {OUTPUT}");
    Ok(())
}
