use std::{collections::BTreeMap, fmt::Display};

use explorer_algos::{
    ColumnSummary, CrossTab, DerivedRecord, StackedHistogram, group_means, mean_by_value,
    sturges_bins,
};
use explorer_charts::{Figure, Plot, Series, Stack};
use explorer_types::{Gender, SleepDataset, SleepRecord};

use super::{CaptionedTable, Section, commentary as text};
use crate::html::Table;

pub const HEAD_ROWS: usize = 5;

type Column = (&'static str, fn(&SleepRecord) -> Option<f64>);

/// Numeric columns summarized in the preview section, in file order.
const NUMERIC_COLUMNS: [Column; 11] = [
    ("ID", |r| Some(f64::from(r.id))),
    ("Age", |r| Some(f64::from(r.age))),
    ("Sleep duration", |r| Some(r.sleep_duration)),
    ("Sleep efficiency", |r| Some(r.sleep_efficiency)),
    ("REM sleep percentage", |r| Some(r.rem_sleep_percentage)),
    ("Deep sleep percentage", |r| Some(r.deep_sleep_percentage)),
    ("Light sleep percentage", |r| Some(r.light_sleep_percentage)),
    ("Awakenings", |r| r.awakenings),
    ("Caffeine consumption", |r| r.caffeine_consumption),
    ("Alcohol consumption", |r| r.alcohol_consumption),
    ("Exercise frequency", |r| r.exercise_frequency),
];

fn stat(v: f64) -> String {
    format!("{v:.3}")
}

pub fn preview(dataset: &SleepDataset) -> Section {
    let mut head = Table::new(Vec::from(SleepRecord::COLUMNS.map(String::from)));
    for record in dataset.head(HEAD_ROWS) {
        head.push_row(record.cells());
    }

    Section::new(text::PREVIEW_HEADING)
        .table(text::PREVIEW_HEAD_CAPTION, head)
        .table(text::PREVIEW_DESCRIBE_CAPTION, describe(dataset.records()))
}

/// Statistics as rows, columns as columns.
pub fn describe(records: &[SleepRecord]) -> Table {
    let summaries = NUMERIC_COLUMNS
        .iter()
        .map(|(_, value)| {
            let values = records.iter().filter_map(value).collect::<Vec<_>>();
            ColumnSummary::describe(&values)
        })
        .collect::<Vec<_>>();

    let mut headers = vec![String::new()];
    headers.extend(NUMERIC_COLUMNS.iter().map(|(name, _)| name.to_string()));
    let mut table = Table::new(headers);

    let rows: [(&str, fn(&ColumnSummary) -> String); 8] = [
        ("count", |s| s.count.to_string()),
        ("mean", |s| stat(s.mean)),
        ("std", |s| s.std.map_or_else(|| "NaN".to_string(), stat)),
        ("min", |s| stat(s.min)),
        ("25%", |s| stat(s.q25)),
        ("50%", |s| stat(s.median)),
        ("75%", |s| stat(s.q75)),
        ("max", |s| stat(s.max)),
    ];

    for (label, cell) in rows {
        let mut row = vec![label.to_string()];
        row.extend(summaries.iter().map(|summary| match summary {
            Some(s) => cell(s),
            None if label == "count" => "0".to_string(),
            None => "NaN".to_string(),
        }));
        table.push_row(row);
    }

    table
}

pub fn smoking(derived: &[DerivedRecord<'_>]) -> Section {
    let tab = CrossTab::proportions(
        derived
            .iter()
            .filter_map(|d| d.efficiency_bin.map(|bin| (bin, d.record.smoking_status))),
    );

    let mut headers = vec!["Sleep efficiency bin".to_string()];
    headers.extend(tab.columns.iter().map(ToString::to_string));
    let mut table = Table::new(headers);
    for (bin, values) in tab.rows.iter().zip(&tab.values) {
        let mut row = vec![bin.to_string()];
        row.extend(values.iter().map(|v| stat(*v)));
        table.push_row(row);
    }

    let stacks = tab
        .columns
        .iter()
        .enumerate()
        .map(|(c, status)| {
            let values = tab.values.iter().map(|row| row[c]).collect();
            Stack::new(status.to_string(), values)
        })
        .collect();

    let figure = Figure::new(
        "Sleep Efficiency vs Smoking Status (Proportions)",
        Plot::StackedBars(stacks),
    )
    .with_labels("Sleep Efficiency Bin", "Proportion")
    .with_categories(tab.rows.iter().map(ToString::to_string));

    Section::new(text::SMOKING_HEADING)
        .intro(text::SMOKING_INTRO)
        .table(text::SMOKING_CAPTION, table)
        .figure(figure)
        .note(text::SMOKING_NOTE)
}

pub fn age_groups(derived: &[DerivedRecord<'_>]) -> Section {
    let by_group = |d: &DerivedRecord<'_>| (d.age_group, d.record.sleep_efficiency);
    let means = group_means(derived.iter().map(by_group));
    let points = means
        .iter()
        .enumerate()
        .map(|(i, (_, mean))| (i as f64, *mean))
        .collect();

    let figure = Figure::new(
        "Average Sleep Efficiency by Age Group",
        Plot::Lines {
            series: vec![Series::new("Sleep efficiency", points)],
            markers: true,
        },
    )
    .with_labels("Age Group", "Average Sleep Efficiency")
    .with_categories(means.iter().map(|(group, _)| group.label()));

    Section::new(text::AGE_HEADING)
        .intro(text::AGE_INTRO)
        .figure(figure)
        .note(text::AGE_NOTE)
}

pub fn bedtime(derived: &[DerivedRecord<'_>]) -> Section {
    let by_hour = |d: &DerivedRecord<'_>| (d.bedtime_hour, d.record.sleep_efficiency);
    let means = mean_by_value(derived.iter().map(by_hour));
    let figure = Figure::new(
        "Sleep Efficiency vs. Bedtime",
        Plot::Lines {
            series: vec![Series::new("Sleep efficiency", means)],
            markers: false,
        },
    )
    .with_labels("Bedtime (transformed hours)", "Sleep Efficiency");

    Section::new(text::BEDTIME_HEADING)
        .intro(text::BEDTIME_INTRO)
        .figure(figure)
        .note(text::BEDTIME_NOTE)
}

pub fn exercise(dataset: &SleepDataset) -> Section {
    let means = mean_by_value(
        dataset
            .records()
            .iter()
            .filter_map(|r| r.exercise_frequency.map(|f| (f, r.sleep_efficiency))),
    );
    let figure = Figure::new(
        "Sleep Efficiency vs Exercise Frequency",
        Plot::Lines {
            series: vec![Series::new("Sleep efficiency", means)],
            markers: false,
        },
    )
    .with_labels("Exercise Frequency", "Sleep Efficiency");

    Section::new(text::EXERCISE_HEADING)
        .figure(figure)
        .note(text::EXERCISE_NOTE)
}

/// One scatter series per gender, skipping rows where `point` has no value.
fn by_gender<F>(records: &[SleepRecord], point: F) -> Vec<Series>
where
    F: Fn(&SleepRecord) -> Option<(f64, f64)>,
{
    let mut groups: BTreeMap<Gender, Vec<(f64, f64)>> = BTreeMap::new();
    for record in records {
        if let Some(p) = point(record) {
            groups.entry(record.gender).or_default().push(p);
        }
    }

    groups
        .into_iter()
        .map(|(gender, points)| Series::new(gender.to_string(), points))
        .collect()
}

pub fn caffeine(dataset: &SleepDataset) -> Section {
    let series = by_gender(dataset.records(), |r| {
        r.caffeine_consumption.map(|c| (r.sleep_efficiency, c))
    });
    let figure = Figure::new(
        "Caffeine Consumption vs Sleep Efficiency",
        Plot::Scatter(series),
    )
    .with_labels("Sleep efficiency", "Caffeine consumption");

    Section::new(text::CAFFEINE_HEADING)
        .figure(figure)
        .note(text::CAFFEINE_NOTE)
}

pub fn rem_sleep(dataset: &SleepDataset) -> Section {
    let series = by_gender(dataset.records(), |r| {
        r.caffeine_consumption.map(|c| (c, r.rem_sleep_percentage))
    });
    let figure = Figure::new(
        "REM Sleep Percentage vs Caffeine Consumption",
        Plot::Scatter(series),
    )
    .with_labels("Caffeine consumption", "REM sleep percentage");

    Section::new(text::REM_HEADING)
        .figure(figure)
        .note(text::REM_NOTE)
}

fn histogram<G: Display>(title: &str, hist: StackedHistogram<G>) -> Figure {
    let stacks = hist
        .groups
        .iter()
        .map(|(group, counts)| {
            let counts = counts.iter().map(|&c| c as f64).collect();
            Stack::new(group.to_string(), counts)
        })
        .collect();

    Figure::new(
        title,
        Plot::StackedHistogram {
            edges: hist.edges,
            stacks,
        },
    )
}

pub fn bedtime_by_age(derived: &[DerivedRecord<'_>]) -> Section {
    let hist = StackedHistogram::new(
        derived.iter().map(|d| (d.age_group, d.bedtime_hour)),
        sturges_bins(derived.len()),
    );
    let figure = histogram("Distribution of Bedtime by Age Group", hist)
        .with_labels("Bedtime (transformed hours)", "Count");

    Section::new(text::AGE_BEDTIME_HEADING)
        .figure(figure)
        .note(text::AGE_BEDTIME_NOTE)
}

pub fn gender(dataset: &SleepDataset) -> Section {
    let records = dataset.records();
    let bins = sturges_bins(records.len());

    let efficiency = StackedHistogram::new(
        records.iter().map(|r| (r.gender, r.sleep_efficiency)),
        bins,
    );
    let duration = StackedHistogram::new(
        records.iter().map(|r| (r.gender, r.sleep_duration)),
        bins,
    );

    let efficiency = histogram("Sleep Efficiency by Gender", efficiency)
        .with_labels("Sleep Efficiency", "Count");
    let duration = histogram("Sleep Duration by Gender", duration)
        .with_labels("Sleep Duration (hours)", "Count");

    Section::new(text::GENDER_HEADING)
        .figure(efficiency)
        .figure(duration)
        .note(text::GENDER_NOTE)
}

pub fn conclusion() -> Section {
    Section::new(text::CONCLUSION_HEADING).intro(text::CONCLUSION)
}

impl Section {
    fn new(heading: &'static str) -> Self {
        Self {
            heading,
            intro: None,
            tables: Vec::new(),
            figures: Vec::new(),
            note: None,
        }
    }

    fn intro(mut self, html: &'static str) -> Self {
        self.intro = Some(html);
        self
    }

    fn table(mut self, caption: &'static str, table: Table) -> Self {
        self.tables.push(CaptionedTable { caption, table });
        self
    }

    fn figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    fn note(mut self, html: &'static str) -> Self {
        self.note = Some(html);
        self
    }
}
