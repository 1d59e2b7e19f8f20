use anyhow::{Context, Result};
use argh::FromArgs;
use normprob::plot::{chart, render, ChartSpec, Output};
use normprob::report::Report;
use normprob::stats::{Interval, Normal};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Probability that a normal variable falls in an interval, with a chart of its density.
struct Config {
    #[argh(option, short = 'm', default = "default_mean()")]
    /// mean of the distribution
    pub mean: f64,

    #[argh(option, short = 's', default = "default_std_dev()")]
    /// standard deviation of the distribution
    pub std_dev: f64,

    #[argh(option, short = 'a', default = "default_lower()")]
    /// lower bound of the interval
    pub lower: f64,

    #[argh(option, short = 'b', default = "default_upper()")]
    /// upper bound of the interval
    pub upper: f64,

    #[argh(option, default = "String::from(\"s\")")]
    /// unit appended to values in the report
    pub unit: String,

    #[argh(option, default = "String::from(\"Server Response Time\")")]
    /// what the variable measures
    pub title: String,

    #[argh(option, default = "String::from(\"Response time (seconds)\")")]
    /// label of the horizontal axis
    pub x_label: String,

    #[argh(option, default = "default_points()")]
    /// number of points sampled along the density curve
    pub points: usize,

    #[argh(option, short = 'o')]
    /// write the chart to this html file instead of opening it
    pub output: Option<PathBuf>,

    #[argh(switch)]
    /// do not draw the chart
    pub no_plot: bool,
}

fn default_mean() -> f64 {
    2.5
}

fn default_std_dev() -> f64 {
    0.5
}

fn default_lower() -> f64 {
    2.0
}

fn default_upper() -> f64 {
    3.0
}

fn default_points() -> usize {
    1000
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config: Config = argh::from_env();
    let normal = Normal::new(config.mean, config.std_dev).context("invalid distribution")?;
    let interval = Interval::new(config.lower, config.upper).context("invalid interval")?;

    let report = Report::new(&config.title, &config.unit, normal, interval);
    print!("{}", report);

    if config.no_plot {
        return Ok(());
    }
    let spec = ChartSpec {
        title: format!("Normal Distribution of {}", config.title),
        x_label: config.x_label.clone(),
        points: config.points,
        ..Default::default()
    };
    let plot = chart(&normal, &interval, &spec);
    let output = match config.output {
        Some(path) => Output::Html(path),
        None => Output::Show,
    };
    render(&plot, &output)
}
