//! Placeholder "models" that stand in for trained predictors. They only
//! produce random series shaped like the real output would be.

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::StandardNormal;

/// Every calendar day from `start` to `end`, both included.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub date: NaiveDate,
    pub value: f64,
}

/// Cumulative sum of standard-normal steps on top of a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct RandomWalk {
    pub level: f64,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self { level: 100.0 }
    }
}

impl RandomWalk {
    pub fn predict<R>(&self, dates: &[NaiveDate], rng: &mut R) -> Vec<Prediction>
    where
        R: Rng + ?Sized,
    {
        let mut total = 0.0;
        dates
            .iter()
            .map(|&date| {
                let step: f64 = rng.sample(StandardNormal);
                total += step;
                Prediction {
                    date,
                    value: total + self.level,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Synthetic OHLC bars.
///
/// open ~ U(90, 110), close = open + N(0, 2), and the wicks extend 1 to 3
/// past the body on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandleGenerator;

impl CandleGenerator {
    const OPEN_RANGE: std::ops::Range<f64> = 90.0..110.0;
    const CLOSE_STD: f64 = 2.0;
    const WICK_RANGE: std::ops::Range<f64> = 1.0..3.0;

    pub fn generate<R>(&self, dates: &[NaiveDate], rng: &mut R) -> Vec<Candle>
    where
        R: Rng + ?Sized,
    {
        dates
            .iter()
            .map(|&date| {
                let open = rng.random_range(Self::OPEN_RANGE);
                let noise: f64 = rng.sample(StandardNormal);
                let close = open + noise * Self::CLOSE_STD;
                let high = open.max(close) + rng.random_range(Self::WICK_RANGE);
                let low = open.min(close) - rng.random_range(Self::WICK_RANGE);

                Candle {
                    date,
                    open,
                    high,
                    low,
                    close,
                }
            })
            .collect()
    }
}
