#![allow(clippy::cast_possible_truncation)]

use anyhow::{anyhow, Error as AnyError};
use dike::{geo::BoundingRect, Profile};
use log::{info, warn};
use plotters::{coord::Shift, prelude::*};
use std::{fs, ops::Range, path::Path};
use textplots::{Chart, Plot, Shape};

const PROFILE_COLOR: RGBColor = RGBColor(0x03, 0xa9, 0xfc);

/// Plotting window around a profile.
struct Extent {
    x: Range<f64>,
    y: Range<f64>,
    /// Lowest point of the profile.
    ground: f64,
}

impl Extent {
    fn of(profile: &Profile) -> Result<Self, AnyError> {
        if profile
            .points()
            .iter()
            .any(|point| !point.x().is_finite() || !point.y().is_finite())
        {
            return Err(anyhow!("cannot plot a profile with non-finite points"));
        }
        let rect = profile
            .line_string()
            .bounding_rect()
            .ok_or_else(|| anyhow!("cannot plot an empty profile"))?;
        let (min, max) = (rect.min(), rect.max());
        let (x, y) = (padded(min.x, max.x), padded(min.y, max.y));
        if ![x.start, x.end, y.start, y.end]
            .iter()
            .all(|bound| bound.is_finite())
        {
            return Err(anyhow!("cannot plot a profile with a non-finite extent"));
        }
        Ok(Self {
            x,
            y,
            ground: min.y,
        })
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let margin = ((hi - lo) * 0.05).max(1.0);
    (lo - margin)..(hi + margin)
}

/// Renders `profile` to `path`, replacing any existing file.
pub fn to_file(profile: &Profile, path: &Path, size: (u32, u32)) -> Result<(), AnyError> {
    let extent = Extent::of(profile)?;

    if path.is_file() {
        warn!("replacing {}", path.display());
        fs::remove_file(path)?;
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let is_svg = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));
    let rendered = if is_svg {
        draw(SVGBackend::new(path, size).into_drawing_area(), profile, &extent)
            .map_err(|err| err.to_string())
    } else {
        draw(BitMapBackend::new(path, size).into_drawing_area(), profile, &extent)
            .map_err(|err| err.to_string())
    };
    rendered.map_err(|err| anyhow!("failed to render {}: {err}", path.display()))?;

    info!("{} written to {}", profile.variant(), path.display());
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    profile: &Profile,
    extent: &Extent,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart =
        ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(extent.x.clone(), extent.y.clone())?;

    let outline: Vec<(f64, f64)> = profile.points().iter().map(|point| point.x_y()).collect();

    chart.draw_series(std::iter::once(Polygon::new(
        outline.clone(),
        PROFILE_COLOR.mix(0.2).filled(),
    )))?;
    chart.draw_series(LineSeries::new(
        [(extent.x.start, extent.ground), (extent.x.end, extent.ground)],
        BLACK.stroke_width(1),
    ))?;
    chart.draw_series(LineSeries::new(outline, PROFILE_COLOR.stroke_width(3)))?;

    root.present()?;
    Ok(())
}

/// Plots `profile` to the terminal.
pub fn to_terminal(profile: &Profile) -> Result<(), AnyError> {
    let extent = Extent::of(profile)?;
    let plot_data: Vec<(f32, f32)> = profile
        .points()
        .iter()
        .map(|point| (point.x() as f32, point.y() as f32))
        .collect();
    println!("{}", profile.variant());
    Chart::new_with_y_range(
        200,
        80,
        extent.x.start as f32,
        extent.x.end as f32,
        extent.y.start as f32,
        extent.y.end as f32,
    )
    .lineplot(&Shape::Lines(&plot_data))
    .display();
    Ok(())
}
