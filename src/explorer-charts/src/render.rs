use plotters::{
    coord::{Shift, cartesian::Cartesian2d, types::RangedCoordf64},
    prelude::*,
};

use crate::{ChartError, Figure, Plot, Series, Stack};

/// Series colours, picked by index and wrapped.
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

const MAX_X_LABELS: usize = 12;

type DrawResult = Result<(), Box<dyn std::error::Error>>;
type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn color(i: usize) -> RGBColor {
    PALETTE[i % PALETTE.len()]
}

pub(crate) fn svg(figure: &Figure, width: u32, height: u32) -> Result<String, ChartError> {
    let failed = |e: Box<dyn std::error::Error>| ChartError::Render {
        title: figure.title.clone(),
        reason: e.to_string(),
    };

    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, (width, height)).into_drawing_area();
        draw(figure, &root).map_err(failed)?;
        root.present().map_err(|e| failed(e.into()))?;
    }

    Ok(out)
}

fn draw(figure: &Figure, root: &DrawingArea<SVGBackend<'_>, Shift>) -> DrawResult {
    root.fill(&WHITE)?;

    let (x0, x1, y0, y1) = figure.bounds();
    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let categories = figure.categories();
    let category_label = |x: &f64| category_at(categories.unwrap_or_default(), *x);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .light_line_style(&WHITE);
    if let Some(categories) = categories {
        mesh.x_labels(categories.len().clamp(1, MAX_X_LABELS) + 1)
            .x_label_formatter(&category_label);
    }
    mesh.draw()?;

    match &figure.plot {
        Plot::Lines { series, markers } => draw_lines(&mut chart, series, *markers)?,
        Plot::Scatter(series) => draw_scatter(&mut chart, series)?,
        Plot::StackedBars(stacks) => {
            let n = categories.map_or(0, <[String]>::len);
            let slots = (0..n).map(|i| (i as f64 - 0.4, i as f64 + 0.4)).collect::<Vec<_>>();
            draw_stacks(&mut chart, stacks, &slots)?;
        }
        Plot::StackedHistogram { edges, stacks } => {
            let slots = edges.windows(2).map(|e| (e[0], e[1])).collect::<Vec<_>>();
            draw_stacks(&mut chart, stacks, &slots)?;
        }
        Plot::Candlestick(candles) => {
            let width = candle_width(root, candles.len());
            chart.draw_series(candles.iter().map(|c| {
                CandleStick::new(
                    c.x,
                    c.open,
                    c.high,
                    c.low,
                    c.close,
                    GREEN.filled(),
                    RED.filled(),
                    width,
                )
            }))?;
        }
    }

    if figure.legend().len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;
    }

    Ok(())
}

fn draw_lines(chart: &mut Chart<'_, '_>, series: &[Series], markers: bool) -> DrawResult {
    for (i, s) in series.iter().enumerate() {
        let c = color(i);
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), c.stroke_width(2)))?
            .label(s.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], c.stroke_width(2)));

        if markers {
            chart.draw_series(s.points.iter().map(|&p| Circle::new(p, 4, c.filled())))?;
        }
    }
    Ok(())
}

fn draw_scatter(chart: &mut Chart<'_, '_>, series: &[Series]) -> DrawResult {
    for (i, s) in series.iter().enumerate() {
        let c = color(i);
        chart
            .draw_series(s.points.iter().map(|&p| Circle::new(p, 3, c.mix(0.7).filled())))?
            .label(s.name.as_str())
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, c.filled()));
    }
    Ok(())
}

/// Stacks `stacks` bottom-up inside each `(left, right)` slot.
fn draw_stacks(chart: &mut Chart<'_, '_>, stacks: &[Stack], slots: &[(f64, f64)]) -> DrawResult {
    let mut base = vec![0.0; slots.len()];

    for (i, stack) in stacks.iter().enumerate() {
        let c = color(i);
        let bars = slots
            .iter()
            .zip(base.iter_mut())
            .zip(&stack.values)
            .filter(|(_, value)| value.is_finite() && **value > 0.0)
            .map(|(((left, right), bottom), value)| {
                let top = *bottom + value;
                let bar = Rectangle::new([(*left, *bottom), (*right, top)], c.filled());
                *bottom = top;
                bar
            })
            .collect::<Vec<_>>();

        chart
            .draw_series(bars)?
            .label(stack.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], c.filled()));
    }
    Ok(())
}

fn candle_width(root: &DrawingArea<SVGBackend<'_>, Shift>, n: usize) -> u32 {
    let (width, _) = root.dim_in_pixel();
    ((width as usize * 6 / 10) / n.max(1)).clamp(2, 15) as u32
}

fn category_at(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ohlc;

    fn line_figure() -> Figure {
        Figure::new(
            "Average Sleep Efficiency by Age Group",
            Plot::Lines {
                series: vec![Series::new(
                    "Sleep efficiency",
                    vec![(0.0, 0.71), (1.0, 0.78), (2.0, 0.8), (3.0, 0.82)],
                )],
                markers: true,
            },
        )
        .with_labels("Age Group", "Average Sleep Efficiency")
        .with_categories(["Young", "Younger Adult", "Middle Aged", "Older"])
    }

    #[test]
    fn renders_svg_document_with_text() {
        let svg = line_figure().to_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Average Sleep Efficiency by Age Group"));
        assert!(svg.contains("Age Group"));
        assert!(svg.contains("Younger Adult"));
    }

    #[test]
    fn renders_every_plot_kind() {
        let stacks = vec![Stack::new("No", vec![0.3, 0.6]), Stack::new("Yes", vec![0.7, 0.4])];
        let figures = [
            line_figure(),
            Figure::new(
                "scatter",
                Plot::Scatter(vec![
                    Series::new("Female", vec![(0.8, 0.0), (0.9, 25.0)]),
                    Series::new("Male", vec![(0.6, 50.0)]),
                ]),
            ),
            Figure::new("bars", Plot::StackedBars(stacks.clone()))
                .with_categories(["<0.6", "0.9–1.0"]),
            Figure::new(
                "hist",
                Plot::StackedHistogram {
                    edges: vec![0.0, 0.5, 1.0],
                    stacks,
                },
            ),
            Figure::new(
                "candles",
                Plot::Candlestick(vec![Ohlc {
                    x: 0.0,
                    open: 100.0,
                    high: 103.0,
                    low: 97.0,
                    close: 101.0,
                }]),
            )
            .with_categories(["2025-01-01"]),
        ];

        for figure in figures {
            let svg = figure.to_svg().unwrap();
            assert!(svg.contains("<svg"), "{}", figure.title);
            assert!(svg.contains(&figure.title));
        }
    }

    #[test]
    fn legend_lists_stack_names() {
        let figure = Figure::new(
            "Sleep Efficiency vs Smoking Status (Proportions)",
            Plot::StackedBars(vec![
                Stack::new("non-smoker share", vec![1.0]),
                Stack::new("smoker share", vec![0.0]),
            ]),
        )
        .with_categories(["0.8–0.9"]);
        let svg = figure.to_svg().unwrap();
        assert!(svg.contains("non-smoker share"));
        assert!(svg.contains("smoker share"));
    }

    #[test]
    fn category_labels_only_on_integer_ticks() {
        let categories = vec!["a".to_string(), "b".to_string()];
        assert_eq!(category_at(&categories, 0.0), "a");
        assert_eq!(category_at(&categories, 1.0000000001), "b");
        assert_eq!(category_at(&categories, 0.5), "");
        assert_eq!(category_at(&categories, -1.0), "");
        assert_eq!(category_at(&categories, 2.0), "");
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(color(0), color(PALETTE.len()));
    }
}
