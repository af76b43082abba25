use explorer_types::{SleepDataset, SleepRecord};

use crate::{AgeGroup, SleepEfficiencyBin, bedtime_hour};

/// A dataset row together with the columns the report derives from it.
#[derive(Debug, Clone, Copy)]
pub struct DerivedRecord<'a> {
    pub record: &'a SleepRecord,
    pub age_group: AgeGroup,
    pub efficiency_bin: Option<SleepEfficiencyBin>,
    pub bedtime_hour: f64,
}

impl<'a> DerivedRecord<'a> {
    pub fn from_record(record: &'a SleepRecord) -> Self {
        Self {
            record,
            age_group: AgeGroup::from_age(record.age),
            efficiency_bin: SleepEfficiencyBin::from_efficiency(record.sleep_efficiency),
            bedtime_hour: bedtime_hour(record.bedtime.time()),
        }
    }
}

pub fn derive(dataset: &SleepDataset) -> Vec<DerivedRecord<'_>> {
    dataset
        .records()
        .iter()
        .map(DerivedRecord::from_record)
        .collect()
}
