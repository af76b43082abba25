pub(crate) mod buckets;
pub use buckets::{AgeGroup, SleepEfficiencyBin, bedtime_hour};

pub(crate) mod derived;
pub use derived::{DerivedRecord, derive};

pub(crate) mod summary;
pub use summary::{
    ColumnSummary, CrossTab, StackedHistogram, group_means, mean_by_value, sturges_bins,
};

pub(crate) mod placeholder;
pub use placeholder::{Candle, CandleGenerator, Prediction, RandomWalk, date_range};

pub mod helpers;
