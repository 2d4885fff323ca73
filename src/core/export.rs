//! Headless display surface: draws frames with plotters and writes them to
//! PNG or SVG files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::error::{Result, RocketError};
use crate::core::frame::{CURVE_LABEL, Frame, FrameSink, SpritePlacement, VERTEX_LABEL};
use crate::core::sprite::RocketSprite;

pub const EXPORT_SIZE: (u32, u32) = (700, 500);
/// Upright sprite height on exported frames.
pub const SPRITE_HEIGHT_PX: u32 = 44;

const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const VERTEX_COLOR: RGBColor = RGBColor(255, 127, 14);
const GRID_COLOR: RGBColor = RGBColor(225, 229, 235);
const PLAIN_GRID: (usize, usize) = (10, 7);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Whether titles, axis labels and the legend are drawn. Text needs a
/// system font; `Plain` renders geometry only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartText {
    Full,
    Plain,
}

fn plot_err(err: impl std::fmt::Display) -> RocketError {
    RocketError::Plot(err.to_string())
}

/// Blends the turned sprite onto `root`, centered on `center` in backend
/// pixels. Fully transparent pixels are skipped so the chart shows through.
fn draw_sprite<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    sprite: &RocketSprite,
    placement: &SpritePlacement,
    center: (i32, i32),
) -> Result<()> {
    let turned = sprite.rotated(placement);
    let left = center.0 - (turned.width() / 2) as i32;
    let top = center.1 - (turned.height() / 2) as i32;
    for (x, y, px) in turned.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        root.draw_pixel(
            (left + x as i32, top + y as i32),
            &RGBAColor(r, g, b, f64::from(a) / 255.0),
        )
        .map_err(plot_err)?;
    }
    Ok(())
}

pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame<'_>,
    sprite: &RocketSprite,
    text: ChartText,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let with_text = text == ChartText::Full;
    let mut builder = ChartBuilder::on(root);
    builder.margin(12);
    if with_text {
        builder
            .caption(frame.title, ("sans-serif", 22))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(0f64..frame.window.x_max, 0f64..frame.window.y_max)
        .map_err(plot_err)?;

    if with_text {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(frame.x_label).y_desc(frame.y_label);
        if !frame.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(plot_err)?;
    } else if frame.show_grid {
        // The mesh helper lays out tick labels, which needs a font.
        let (x_max, y_max) = (frame.window.x_max, frame.window.y_max);
        let verticals = (0..=PLAIN_GRID.0).map(|i| {
            let x = x_max * i as f64 / PLAIN_GRID.0 as f64;
            PathElement::new(vec![(x, 0.0), (x, y_max)], GRID_COLOR)
        });
        let horizontals = (0..=PLAIN_GRID.1).map(|i| {
            let y = y_max * i as f64 / PLAIN_GRID.1 as f64;
            PathElement::new(vec![(0.0, y), (x_max, y)], GRID_COLOR)
        });
        chart
            .draw_series(verticals.chain(horizontals))
            .map_err(plot_err)?;
    }

    for (idx, segment) in frame.trajectory.segments().into_iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(segment, CURVE_COLOR.stroke_width(2)))
            .map_err(plot_err)?;
        if idx == 0 {
            series.label(CURVE_LABEL).legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], CURVE_COLOR.stroke_width(2))
            });
        }
    }

    chart
        .draw_series(std::iter::once(Circle::new(
            (frame.vertex.time_s, frame.vertex.height_m),
            5,
            VERTEX_COLOR.filled(),
        )))
        .map_err(plot_err)?
        .label(VERTEX_LABEL)
        .legend(|(x, y)| Circle::new((x + 10, y), 5, VERTEX_COLOR.filled()));

    if let Some(placement) = frame.sprite {
        let center = chart.backend_coord(&placement.center);
        draw_sprite(root, sprite, &placement, center)?;
    }

    if with_text && frame.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

pub fn save_png(
    path: &Path,
    frame: &Frame<'_>,
    sprite: &RocketSprite,
    text: ChartText,
) -> Result<()> {
    let root = BitMapBackend::new(path, EXPORT_SIZE).into_drawing_area();
    draw_frame(&root, frame, sprite, text)
}

pub fn save_svg(
    path: &Path,
    frame: &Frame<'_>,
    sprite: &RocketSprite,
    text: ChartText,
) -> Result<()> {
    let root = SVGBackend::new(path, EXPORT_SIZE).into_drawing_area();
    draw_frame(&root, frame, sprite, text)
}

pub fn save(
    path: &Path,
    frame: &Frame<'_>,
    sprite: &RocketSprite,
    format: ImageFormat,
    text: ChartText,
) -> Result<()> {
    match format {
        ImageFormat::Png => save_png(path, frame, sprite, text)?,
        ImageFormat::Svg => save_svg(path, frame, sprite, text)?,
    }
    info!(path = %path.display(), "frame written");
    Ok(())
}

/// `rocket_20260117_093005.png` style name for a single snapshot.
pub fn snapshot_name(now: DateTime<Local>, format: ImageFormat) -> String {
    format!(
        "rocket_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Writes every frame it is shown as `frame_000.png`, `frame_001.png`, ...
pub struct ImageSequence<'s> {
    dir: PathBuf,
    sprite: &'s RocketSprite,
    format: ImageFormat,
    text: ChartText,
    written: Vec<PathBuf>,
}

impl<'s> ImageSequence<'s> {
    pub fn new(
        dir: impl Into<PathBuf>,
        sprite: &'s RocketSprite,
        format: ImageFormat,
        text: ChartText,
    ) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            sprite,
            format,
            text,
            written: Vec::new(),
        })
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for ImageSequence<'_> {
    type Error = RocketError;

    fn show(&mut self, frame: &Frame<'_>) -> Result<()> {
        let path = self.dir.join(format!(
            "frame_{:03}.{}",
            self.written.len(),
            self.format.extension()
        ));
        save(&path, frame, self.sprite, self.format, self.text)?;
        self.written.push(path);
        Ok(())
    }
}
