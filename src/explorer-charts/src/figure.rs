use crate::{ChartError, render};

/// A chart description. Building one does no drawing; [`Figure::to_svg`]
/// renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: XAxis,
    pub plot: Plot,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum XAxis {
    #[default]
    Numeric,
    /// Category `i` sits at `x = i`.
    Categories(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    Lines {
        series: Vec<Series>,
        markers: bool,
    },
    Scatter(Vec<Series>),
    /// One bar per category, segments stacked in order.
    StackedBars(Vec<Stack>),
    /// Stacked counts over `edges.len() - 1` bins.
    StackedHistogram {
        edges: Vec<f64>,
        stacks: Vec<Stack>,
    },
    Candlestick(Vec<Ohlc>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ohlc {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

impl Stack {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl Figure {
    pub const DEFAULT_SIZE: (u32, u32) = (800, 500);

    pub fn new(title: impl Into<String>, plot: Plot) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_axis: XAxis::Numeric,
            plot,
        }
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.x_axis = XAxis::Categories(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories(&self) -> Option<&[String]> {
        match &self.x_axis {
            XAxis::Numeric => None,
            XAxis::Categories(c) => Some(c),
        }
    }

    /// Names shown in the legend, in drawing order.
    pub fn legend(&self) -> Vec<&str> {
        match &self.plot {
            Plot::Lines { series, .. } | Plot::Scatter(series) => {
                series.iter().map(|s| s.name.as_str()).collect()
            }
            Plot::StackedBars(stacks) | Plot::StackedHistogram { stacks, .. } => {
                stacks.iter().map(|s| s.name.as_str()).collect()
            }
            Plot::Candlestick(_) => Vec::new(),
        }
    }

    /// `(x_min, x_max, y_min, y_max)` covering everything drawn, padded so
    /// marks never sit on the frame. Degenerate spans are widened.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let category_span = |n: usize| (-0.5, n.max(1) as f64 - 0.5);

        let (x, y) = match &self.plot {
            Plot::Lines { series, .. } | Plot::Scatter(series) => {
                let points = series.iter().flat_map(|s| s.points.iter());
                let xs = span(points.clone().map(|p| p.0));
                let ys = span(points.map(|p| p.1));
                let x = match self.categories() {
                    Some(c) => category_span(c.len()),
                    None => pad(xs),
                };
                (x, pad(ys))
            }
            Plot::StackedBars(stacks) => {
                let n = self.categories().map_or(0, <[String]>::len);
                let top = stacked_max(stacks, n);
                (category_span(n), (0.0, top_margin(top)))
            }
            Plot::StackedHistogram { edges, stacks } => {
                let x = match (edges.first(), edges.last()) {
                    (Some(lo), Some(hi)) if lo < hi => (*lo, *hi),
                    _ => (0.0, 1.0),
                };
                let top = stacked_max(stacks, edges.len().saturating_sub(1));
                (x, (0.0, top_margin(top)))
            }
            Plot::Candlestick(candles) => {
                let n = self.categories().map_or(candles.len(), <[String]>::len);
                let ys = span(candles.iter().flat_map(|c| [c.low, c.high]));
                (category_span(n), pad(ys))
            }
        };

        (x.0, x.1, y.0, y.1)
    }

    pub fn to_svg(&self) -> Result<String, ChartError> {
        let (width, height) = Self::DEFAULT_SIZE;
        self.to_svg_sized(width, height)
    }

    pub fn to_svg_sized(&self, width: u32, height: u32) -> Result<String, ChartError> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidSize { width, height });
        }
        render::svg(self, width, height)
    }
}

fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut span: Option<(f64, f64)> = None;
    for v in values.filter(|v| v.is_finite()) {
        span = Some(match span {
            None => (v, v),
            Some((lo, hi)) => (f64::min(lo, v), f64::max(hi, v)),
        });
    }
    span
}

fn pad(span: Option<(f64, f64)>) -> (f64, f64) {
    match span {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let margin = (hi - lo) * 0.05;
            (lo - margin, hi + margin)
        }
    }
}

fn top_margin(top: f64) -> f64 {
    if top > 0.0 { top * 1.05 } else { 1.0 }
}

fn stacked_max(stacks: &[Stack], n: usize) -> f64 {
    (0..n)
        .map(|i| {
            stacks
                .iter()
                .filter_map(|s| s.values.get(i))
                .filter(|v| v.is_finite())
                .sum::<f64>()
        })
        .fold(0.0, f64::max)
}
