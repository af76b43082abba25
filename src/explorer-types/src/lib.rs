mod error;
pub use error::DatasetError;

pub mod sleep;
pub use sleep::{Gender, SleepRecord, SmokingStatus};

mod dataset;
pub use dataset::SleepDataset;
