//! The placeholder model demo: three text fields, one button, two charts.
//! The models here only produce random data and are meant to be swapped
//! for real ones.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::NaiveDate;
use explorer_algos::{CandleGenerator, RandomWalk, date_range};
use explorer_charts::{Figure, Ohlc, Plot, Series};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;
use thiserror::Error;

use crate::html::{document, escape};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest range, in days, a single run may cover.
pub const MAX_DAYS: i64 = 3660;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid {field} date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
    #[error("date range covers {days} days, at most {MAX_DAYS} are allowed")]
    RangeTooLong { days: i64 },
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DemoError> {
    let invalid = |source| DemoError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    };
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(invalid)
}

/// Random-walk "price prediction" line chart.
pub fn predict_price<R>(dates: &[NaiveDate], ticker: &str, rng: &mut R) -> Figure
where
    R: Rng + ?Sized,
{
    let predictions = RandomWalk::default().predict(dates, rng);
    let points = predictions
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();

    Figure::new(
        format!("Dummy Predicted Prices for {ticker}"),
        Plot::Lines {
            series: vec![Series::new("Prediction", points)],
            markers: false,
        },
    )
    .with_labels("Date", "Prediction")
    .with_categories(date_labels(dates))
}

/// Synthetic OHLC chart.
pub fn candlestick<R>(dates: &[NaiveDate], rng: &mut R) -> Figure
where
    R: Rng + ?Sized,
{
    let candles = CandleGenerator
        .generate(dates, rng)
        .into_iter()
        .enumerate()
        .map(|(i, c)| Ohlc {
            x: i as f64,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
        })
        .collect();

    Figure::new("Dummy Candlestick Chart", Plot::Candlestick(candles))
        .with_labels("Date", "Price")
        .with_categories(date_labels(dates))
}

fn date_labels(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect()
}

/// Runs both placeholder models over the inclusive date range. An end
/// before the start yields empty charts.
pub fn run_demo<R>(
    start: &str,
    end: &str,
    ticker: &str,
    rng: &mut R,
) -> Result<(Figure, Figure), DemoError>
where
    R: Rng + ?Sized,
{
    let start = parse_date("start", start)?;
    let end = parse_date("end", end)?;

    let days = (end - start).num_days() + 1;
    if days > MAX_DAYS {
        return Err(DemoError::RangeTooLong { days });
    }

    let dates = date_range(start, end);

    Ok((predict_price(&dates, ticker, rng), candlestick(&dates, rng)))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunParams {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub ticker: String,
}

#[derive(Debug, Clone, Default)]
pub struct DemoState {
    /// Fixed seed for reproducible charts; fresh entropy per request otherwise.
    pub seed: Option<u64>,
}

pub fn router(state: DemoState) -> Router {
    Router::new()
        .route("/", get(form))
        .route("/run", get(run))
        .with_state(Arc::new(state))
}

async fn form() -> Html<String> {
    Html(page(&RunParams::default(), None))
}

async fn run(
    State(state): State<Arc<DemoState>>,
    Query(params): Query<RunParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut rng = match state.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (line, candles) = run_demo(&params.start, &params.end, &params.ticker, &mut rng)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let charts = tokio::task::spawn_blocking(move || {
        [line.to_svg(), candles.to_svg()]
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|charts| charts.map_err(|e| e.to_string()))
    .map_err(|e| {
        error!("{}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e)
    })?;

    info!(
        "demo run for {:?} from {} to {}",
        params.ticker, params.start, params.end
    );
    Ok(Html(page(&params, Some(&charts))))
}

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 960px; color: #222; }
form { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-end; margin-bottom: 1.5rem; }
label { display: flex; flex-direction: column; font-size: 0.85rem; gap: 0.3rem; }
input { padding: 0.4rem 0.6rem; border: 1px solid #ccc; border-radius: 4px; }
button { padding: 0.5rem 1.2rem; border: none; border-radius: 4px; background: #f97316; color: white; font-size: 1rem; cursor: pointer; }
.plot { margin-bottom: 1.5rem; }
.plot h3 { font-size: 0.9rem; color: #555; }
"#;

fn page(params: &RunParams, charts: Option<&[String]>) -> String {
    let field = |name: &str, label: &str, placeholder: &str, value: &str| {
        format!(
            r#"<label>{label}<input name="{name}" placeholder="{placeholder}" value="{}" /></label>"#,
            escape(value)
        )
    };

    let mut body = String::from(
        r#"<h2>📈 ML Model Demo App (Placeholder Version)</h2>
<p>Enter dates and a stock ticker. The app generates <strong>fake predictions</strong>.
Students will later replace the placeholder ML functions.</p>
<form action="/run" method="get">
"#,
    );
    body.push_str(&field(
        "start",
        "Start Date (YYYY-MM-DD)",
        "2025-01-01",
        &params.start,
    ));
    body.push_str(&field(
        "end",
        "End Date (YYYY-MM-DD)",
        "2025-02-01",
        &params.end,
    ));
    body.push_str(&field("ticker", "Ticker", "AAPL", &params.ticker));
    body.push_str("\n<button type=\"submit\">Run Example</button>\n</form>\n");

    if let Some(charts) = charts {
        let labels = ["Predicted Line Plot", "Dummy Candlestick Plot"];
        for (label, svg) in labels.iter().zip(charts) {
            body.push_str(&format!(
                "<div class=\"plot\">\n<h3>{label}</h3>\n{svg}\n</div>\n"
            ));
        }
    }

    document("ML Demo App", STYLE, &body)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use tower::ServiceExt as _;

    use super::*;

    #[test]
    fn run_demo_builds_both_figures() {
        let mut rng = StdRng::seed_from_u64(3);
        let (line, candles) = run_demo("2025-01-01", "2025-02-01", "AAPL", &mut rng).unwrap();

        assert_eq!(line.title, "Dummy Predicted Prices for AAPL");
        assert_eq!(candles.title, "Dummy Candlestick Chart");
        assert_eq!(line.categories().map(<[String]>::len), Some(32));

        let Plot::Candlestick(bars) = &candles.plot else {
            panic!("expected candlestick plot");
        };
        assert_eq!(bars.len(), 32);
        assert!(
            bars.iter()
                .all(|b| b.low < b.open.min(b.close) && b.high > b.open.max(b.close))
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = run_demo("01/01/2025", "2025-02-01", "AAPL", &mut rng).unwrap_err();
        assert!(matches!(err, DemoError::InvalidDate { field: "start", .. }));

        let err = run_demo("2025-01-01", "", "AAPL", &mut rng).unwrap_err();
        assert!(err.to_string().contains("invalid end date"));
    }

    #[test]
    fn reversed_range_gives_empty_charts() {
        let mut rng = StdRng::seed_from_u64(3);
        let (line, candles) = run_demo("2025-02-01", "2025-01-01", "AAPL", &mut rng).unwrap();
        assert_eq!(line.categories().map(<[String]>::len), Some(0));
        assert!(matches!(&candles.plot, Plot::Candlestick(bars) if bars.is_empty()));
        assert!(line.to_svg().is_ok());
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn form_has_three_fields_and_button() {
        let (status, body) = fetch(router(DemoState::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"name="start""#));
        assert!(body.contains(r#"name="end""#));
        assert!(body.contains(r#"name="ticker""#));
        assert!(body.contains("Run Example"));
        assert!(!body.contains("<svg"));
    }

    #[tokio::test]
    async fn run_renders_two_charts() {
        let app = router(DemoState { seed: Some(11) });
        let (status, body) = fetch(app, "/run?start=2025-01-01&end=2025-01-10&ticker=MSFT").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<svg").count(), 2);
        assert!(body.contains("Predicted Line Plot"));
        assert!(body.contains("Dummy Candlestick Plot"));
        assert!(body.contains("Dummy Predicted Prices for MSFT"));
        assert!(body.contains(r#"value="MSFT""#));
    }

    #[tokio::test]
    async fn run_with_bad_date_is_bad_request() {
        let app = router(DemoState::default());
        let (status, body) = fetch(app, "/run?start=soon&end=2025-01-10&ticker=MSFT").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid start date"));
    }

    #[test]
    fn range_is_capped() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = run_demo("1900-01-01", "2100-01-01", "AAPL", &mut rng).unwrap_err();
        assert!(matches!(err, DemoError::RangeTooLong { days: 73050 }));

        // ten years and change is the longest accepted range
        let (line, _) = run_demo("2015-01-01", "2025-01-07", "AAPL", &mut rng).unwrap();
        assert_eq!(line.categories().map(<[String]>::len), Some(3660));
    }

    #[tokio::test]
    async fn huge_range_is_bad_request() {
        let app = router(DemoState { seed: Some(1) });
        let (status, body) = fetch(app, "/run?start=0001-01-01&end=9999-12-31&ticker=X").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("at most 3660"));
        assert!(!body.contains("<svg"));
    }
}
