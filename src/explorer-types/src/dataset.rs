use std::{fs::File, io::Read, path::Path};

use crate::{DatasetError, SleepRecord};

/// The loaded sleep dataset. Rows are never mutated after loading; derived
/// columns are computed alongside the records instead of appended to them.
#[derive(Debug, Clone, Default)]
pub struct SleepDataset {
    records: Vec<SleepRecord>,
}

impl SleepDataset {
    pub fn new(records: Vec<SleepRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = reader
            .deserialize::<SleepRecord>()
            .enumerate()
            .map(|(i, record)| {
                record.map_err(|source| DatasetError::InvalidRecord { row: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[SleepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` rows, or all of them when the dataset is shorter.
    pub fn head(&self, n: usize) -> &[SleepRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, SmokingStatus};

    const SAMPLE: &str = "\
ID,Age,Gender,Bedtime,Wakeup time,Sleep duration,Sleep efficiency,REM sleep percentage,Deep sleep percentage,Light sleep percentage,Awakenings,Caffeine consumption,Alcohol consumption,Smoking status,Exercise frequency
1,65,Female,2021-03-06 01:00:00,2021-03-06 07:00:00,6.0,0.88,18,70,12,0.0,0.0,0.0,Yes,3.0
2,69,Male,2021-12-05 02:00:00,2021-12-05 09:00:00,7.0,0.66,19,28,53,3.0,0.0,3.0,Yes,3.0
3,40,Female,2021-05-25 21:30:00,2021-05-25 05:30:00,8.0,0.89,20,70,10,1.0,,0.0,No,
";

    #[test]
    fn loads_rows_and_optional_cells() {
        let dataset = SleepDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);

        let third = &dataset.records()[2];
        assert_eq!(third.gender, Gender::Female);
        assert_eq!(third.smoking_status, SmokingStatus::No);
        assert_eq!(third.caffeine_consumption, None);
        assert_eq!(third.exercise_frequency, None);
        assert_eq!(third.bedtime.format("%H:%M").to_string(), "21:30");
    }

    #[test]
    fn head_is_clamped() {
        let dataset = SleepDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.head(2).len(), 2);
        assert_eq!(dataset.head(10).len(), 3);
        assert!(SleepDataset::default().head(5).is_empty());
    }

    #[test]
    fn malformed_row_reports_position() {
        let broken = SAMPLE.replace("0.66", "not-a-number");
        let err = SleepDataset::from_reader(broken.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = SleepDataset::from_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
