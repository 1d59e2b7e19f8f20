//! Chart of a normal density with a shaded interval.

use crate::stats::{Interval, Normal};
use anyhow::{Context, Result};
use plotly::color::{NamedColor, Rgba};
use plotly::common::{Fill, Font, Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use std::path::PathBuf;

/// How many standard deviations the curve extends on each side of the mean.
pub const SPAN_SDS: f64 = 4.0;

/// `n` evenly spaced points from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            xs[n - 1] = end;
            xs
        }
    }
}

/// A density sampled on a regular grid.
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn sample(normal: &Normal, start: f64, end: f64, n: usize) -> Self {
        let xs = linspace(start, end, n);
        let ys = xs.iter().map(|&x| normal.pdf(x)).collect();
        log::debug!("sampled {} points of the density on [{}, {}]", n, start, end);
        Self { xs, ys }
    }

    /// The density over the part of `interval` that falls inside `[start, end]`.
    /// Empty when the two do not overlap.
    pub fn clipped(normal: &Normal, interval: &Interval, start: f64, end: f64, n: usize) -> Self {
        let lo = interval.lower().max(start);
        let hi = interval.upper().min(end);
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            log::debug!(
                "interval [{}, {}] is outside [{}, {}]",
                interval.lower(),
                interval.upper(),
                start,
                end
            );
            return Self {
                xs: Vec::new(),
                ys: Vec::new(),
            };
        }
        Self::sample(normal, lo, hi, n)
    }
}

pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: usize,
    pub fill_points: usize,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Normal Distribution".to_owned(),
            x_label: "x".to_owned(),
            y_label: "Probability density".to_owned(),
            points: 1000,
            fill_points: 100,
        }
    }
}

pub enum Output {
    /// Open the chart in the default browser
    Show,
    Html(PathBuf),
}

pub fn chart(normal: &Normal, interval: &Interval, spec: &ChartSpec) -> Plot {
    let (start, end) = normal.span(SPAN_SDS);
    let curve = Curve::sample(normal, start, end, spec.points);
    let fill = Curve::clipped(normal, interval, start, end, spec.fill_points);
    let (a, b) = (interval.lower(), interval.upper());

    let pdf_line = Scatter::new(curve.xs, curve.ys)
        .name("PDF of the normal distribution")
        .mode(Mode::Lines)
        .line(Line::new().color(NamedColor::Blue).width(2.0));
    let area = Scatter::new(fill.xs, fill.ys)
        .name(format!("Area = P({:?} ≤ X ≤ {:?})", a, b).as_str())
        .mode(Mode::Lines)
        .line(Line::new().color(NamedColor::Orange))
        .fill(Fill::ToZeroY)
        .fill_color(Rgba::new(255, 165, 0, 0.6));

    let layout = Layout::new()
        .width(1000)
        .height(600)
        .title(Title::new(&spec.title).font(Font::new().size(16)))
        .x_axis(
            Axis::new()
                .title(Title::new(&spec.x_label).font(Font::new().size(12)))
                .show_grid(true)
                .grid_color(Rgba::new(128, 128, 128, 0.6)),
        )
        .y_axis(
            Axis::new()
                .title(Title::new(&spec.y_label).font(Font::new().size(12)))
                .show_grid(true)
                .grid_color(Rgba::new(128, 128, 128, 0.6)),
        )
        .show_legend(true);

    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot.add_trace(pdf_line);
    plot.add_trace(area);
    plot
}

pub fn render(plot: &Plot, output: &Output) -> Result<()> {
    match output {
        Output::Show => {
            log::info!("Opening chart in the browser");
            plot.show();
        }
        Output::Html(path) => {
            std::fs::write(path, plot.to_html())
                .with_context(|| format!("writing chart to {:?}", path))?;
            log::info!("Chart written to {:?}", path);
        }
    }
    Ok(())
}

#[test]
fn test_linspace_endpoints() {
    let xs = linspace(0.5, 4.5, 1000);
    assert_eq!(xs.len(), 1000);
    assert_eq!(xs[0], 0.5);
    assert_eq!(xs[999], 4.5);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_linspace_degenerate() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    assert_eq!(linspace(2.0, 2.0, 3), vec![2.0, 2.0, 2.0]);
}
