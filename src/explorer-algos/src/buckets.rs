use std::fmt::Display;

use chrono::{NaiveTime, Timelike};

/// Age ranges, inclusive on both ends, checked in order.
const AGE_RANGES: [(u32, u32, AgeGroup); 4] = [
    (9, 21, AgeGroup::Young),
    (22, 34, AgeGroup::YoungerAdult),
    (35, 47, AgeGroup::MiddleAged),
    (48, 69, AgeGroup::Older),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Young,
    YoungerAdult,
    MiddleAged,
    Older,
    Unknown,
}

impl AgeGroup {
    /// First range containing `age`, or [`AgeGroup::Unknown`].
    pub fn from_age(age: u32) -> Self {
        AGE_RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&age))
            .map(|(_, _, group)| *group)
            .unwrap_or(AgeGroup::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Young => "Young",
            AgeGroup::YoungerAdult => "Younger Adult",
            AgeGroup::MiddleAged => "Middle Aged",
            AgeGroup::Older => "Older",
            AgeGroup::Unknown => "Unknown",
        }
    }
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sleep efficiency bins over the edges `[0, 0.6, 0.7, 0.8, 0.9, 1.0]`.
/// Each bin is open on the left and closed on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SleepEfficiencyBin {
    Below60,
    From60To70,
    From70To80,
    From80To90,
    From90To100,
}

impl SleepEfficiencyBin {
    pub const EDGES: [f64; 6] = [0.0, 0.6, 0.7, 0.8, 0.9, 1.0];

    pub const ALL: [SleepEfficiencyBin; 5] = [
        SleepEfficiencyBin::Below60,
        SleepEfficiencyBin::From60To70,
        SleepEfficiencyBin::From70To80,
        SleepEfficiencyBin::From80To90,
        SleepEfficiencyBin::From90To100,
    ];

    /// `None` for anything outside `(0, 1]`, NaN included.
    pub fn from_efficiency(value: f64) -> Option<Self> {
        Self::EDGES
            .windows(2)
            .position(|edge| value > edge[0] && value <= edge[1])
            .map(|i| Self::ALL[i])
    }

    pub fn label(self) -> &'static str {
        match self {
            SleepEfficiencyBin::Below60 => "<0.6",
            SleepEfficiencyBin::From60To70 => "0.6–0.7",
            SleepEfficiencyBin::From70To80 => "0.7–0.8",
            SleepEfficiencyBin::From80To90 => "0.8–0.9",
            SleepEfficiencyBin::From90To100 => "0.9–1.0",
        }
    }
}

impl Display for SleepEfficiencyBin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bedtime as a fractional 12-hour clock value, flipped negative past 6 so
/// evening bedtimes sit left of early-morning ones on a plot axis.
///
/// 23:00 -> -11.0, 22:30 -> -10.5, 01:00 -> 1.0, 06:00 -> 6.0.
/// The result always lies in `(-12, -6) ∪ [0, 6]`.
pub fn bedtime_hour(time: NaiveTime) -> f64 {
    let hour = (time.hour() % 12) as f64 + time.minute() as f64 / 60.0;
    if hour > 6.0 { -hour } else { hour }
}
