use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of `Sleep_Efficiency.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SleepRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Bedtime", deserialize_with = "timestamp")]
    pub bedtime: NaiveDateTime,
    #[serde(rename = "Wakeup time", deserialize_with = "timestamp")]
    pub wakeup_time: NaiveDateTime,
    #[serde(rename = "Sleep duration")]
    pub sleep_duration: f64,
    #[serde(rename = "Sleep efficiency")]
    pub sleep_efficiency: f64,
    #[serde(rename = "REM sleep percentage")]
    pub rem_sleep_percentage: f64,
    #[serde(rename = "Deep sleep percentage")]
    pub deep_sleep_percentage: f64,
    #[serde(rename = "Light sleep percentage")]
    pub light_sleep_percentage: f64,
    #[serde(rename = "Awakenings")]
    pub awakenings: Option<f64>,
    #[serde(rename = "Caffeine consumption")]
    pub caffeine_consumption: Option<f64>,
    #[serde(rename = "Alcohol consumption")]
    pub alcohol_consumption: Option<f64>,
    #[serde(rename = "Smoking status")]
    pub smoking_status: SmokingStatus,
    #[serde(rename = "Exercise frequency")]
    pub exercise_frequency: Option<f64>,
}

impl SleepRecord {
    /// Header names in file order.
    pub const COLUMNS: [&'static str; 15] = [
        "ID",
        "Age",
        "Gender",
        "Bedtime",
        "Wakeup time",
        "Sleep duration",
        "Sleep efficiency",
        "REM sleep percentage",
        "Deep sleep percentage",
        "Light sleep percentage",
        "Awakenings",
        "Caffeine consumption",
        "Alcohol consumption",
        "Smoking status",
        "Exercise frequency",
    ];

    /// Cells in [`Self::COLUMNS`] order, formatted for display. Missing values are empty.
    pub fn cells(&self) -> Vec<String> {
        let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        vec![
            self.id.to_string(),
            self.age.to_string(),
            self.gender.to_string(),
            self.bedtime.format(TIMESTAMP_FORMAT).to_string(),
            self.wakeup_time.format(TIMESTAMP_FORMAT).to_string(),
            self.sleep_duration.to_string(),
            self.sleep_efficiency.to_string(),
            self.rem_sleep_percentage.to_string(),
            self.deep_sleep_percentage.to_string(),
            self.light_sleep_percentage.to_string(),
            optional(self.awakenings),
            optional(self.caffeine_consumption),
            optional(self.alcohol_consumption),
            self.smoking_status.to_string(),
            optional(self.exercise_frequency),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum SmokingStatus {
    No,
    Yes,
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => f.write_str("Female"),
            Gender::Male => f.write_str("Male"),
        }
    }
}

impl Display for SmokingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmokingStatus::No => f.write_str("No"),
            SmokingStatus::Yes => f.write_str("Yes"),
        }
    }
}

fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_dataset_spelling() {
        assert_eq!(Gender::Female.to_string(), "Female");
        assert_eq!(SmokingStatus::Yes.to_string(), "Yes");
    }

    #[test]
    fn deserializes_from_csv_headers() {
        let data = "\
ID,Age,Gender,Bedtime,Wakeup time,Sleep duration,Sleep efficiency,REM sleep percentage,\
Deep sleep percentage,Light sleep percentage,Awakenings,Caffeine consumption,\
Alcohol consumption,Smoking status,Exercise frequency
3,40,Female,2021-05-25 21:30:00,2021-05-26 05:30:00,8.0,0.89,20,70,10,1.0,,0.0,No,3.0
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records = reader
            .deserialize::<SleepRecord>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.smoking_status, SmokingStatus::No);
        assert_eq!(record.bedtime.to_string(), "2021-05-25 21:30:00");
        assert_eq!(record.caffeine_consumption, None);
        assert_eq!(record.exercise_frequency, Some(3.0));
    }

    #[test]
    fn cells_follow_column_order() {
        let record = SleepRecord {
            id: 7,
            age: 30,
            gender: Gender::Male,
            bedtime: NaiveDateTime::parse_from_str("2021-03-06 01:00:00", TIMESTAMP_FORMAT)
                .unwrap(),
            wakeup_time: NaiveDateTime::parse_from_str("2021-03-06 07:00:00", TIMESTAMP_FORMAT)
                .unwrap(),
            sleep_duration: 6.0,
            sleep_efficiency: 0.88,
            rem_sleep_percentage: 18.0,
            deep_sleep_percentage: 70.0,
            light_sleep_percentage: 12.0,
            awakenings: None,
            caffeine_consumption: Some(0.0),
            alcohol_consumption: Some(0.0),
            smoking_status: SmokingStatus::Yes,
            exercise_frequency: Some(3.0),
        };

        let cells = record.cells();
        assert_eq!(cells.len(), SleepRecord::COLUMNS.len());
        assert_eq!(cells[0], "7");
        assert_eq!(cells[3], "2021-03-06 01:00:00");
        assert_eq!(cells[10], "");
        assert_eq!(cells[13], "Yes");
    }
}
