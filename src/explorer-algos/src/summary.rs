use std::collections::{BTreeMap, BTreeSet};

use crate::helpers::stats::{mean, quantile, sample_std};

/// Cross-tabulation of a row key against a column key, normalized per row.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab<R, C> {
    pub rows: Vec<R>,
    pub columns: Vec<C>,
    /// `values[row][column]`, each non-empty row summing to 1.
    pub values: Vec<Vec<f64>>,
}

impl<R, C> CrossTab<R, C>
where
    R: Ord + Clone,
    C: Ord + Clone,
{
    pub fn proportions<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, C)>,
    {
        let mut counts: BTreeMap<R, BTreeMap<C, usize>> = BTreeMap::new();
        let mut columns = BTreeSet::new();

        for (row, column) in pairs {
            columns.insert(column.clone());
            *counts.entry(row).or_default().entry(column).or_default() += 1;
        }

        let columns = columns.into_iter().collect::<Vec<_>>();
        let (rows, values) = counts
            .into_iter()
            .map(|(row, cells)| {
                let total = cells.values().sum::<usize>() as f64;
                let proportions = columns
                    .iter()
                    .map(|c| cells.get(c).copied().unwrap_or_default() as f64 / total)
                    .collect::<Vec<_>>();
                (row, proportions)
            })
            .unzip();

        Self {
            rows,
            columns,
            values,
        }
    }
}

/// Mean value per categorical key, keys ascending.
pub fn group_means<K, I>(pairs: I) -> Vec<(K, f64)>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }

    groups
        .into_iter()
        .map(|(key, values)| (key, mean(&values)))
        .collect()
}

/// Mean `y` for each distinct `x`, sorted by `x`. Pairs with a NaN `x` are dropped.
pub fn mean_by_value<I>(pairs: I) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut pairs = pairs
        .into_iter()
        .filter(|(x, _)| !x.is_nan())
        .collect::<Vec<_>>();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut sums: Vec<(f64, f64, usize)> = Vec::new();
    for (x, y) in pairs {
        match sums.last_mut() {
            Some((last, sum, count)) if *last == x => {
                *sum += y;
                *count += 1;
            }
            _ => sums.push((x, y, 1)),
        }
    }

    sums.into_iter()
        .map(|(x, sum, count)| (x, sum / count as f64))
        .collect()
}

/// Summary statistics of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// `None` for an empty column. NaN values are ignored.
    pub fn describe(values: &[f64]) -> Option<Self> {
        let mut sorted = values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);

        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let mean = mean(&sorted);

        Some(Self {
            count: sorted.len(),
            mean,
            std: sample_std(&sorted, mean),
            min,
            q25: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q75: quantile(&sorted, 0.75)?,
            max,
        })
    }
}

/// Bin count from Sturges' rule, at least 1.
pub fn sturges_bins(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        (n as f64).log2().ceil() as usize + 1
    }
}

/// Equal-width histogram shared by several groups, for stacked plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedHistogram<G> {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    /// Per-group counts, one per bin, groups ascending.
    pub groups: Vec<(G, Vec<usize>)>,
}

impl<G: Ord> StackedHistogram<G> {
    /// Bins span the min/max over every group. The last bin is closed on the
    /// right so the maximum is counted. NaN values are skipped.
    pub fn new<I>(pairs: I, bins: usize) -> Self
    where
        I: IntoIterator<Item = (G, f64)>,
    {
        let bins = bins.max(1);
        let pairs = pairs
            .into_iter()
            .filter(|(_, v)| !v.is_nan())
            .collect::<Vec<_>>();

        let Some((min, max)) = pairs.iter().fold(None, |acc: Option<(f64, f64)>, (_, v)| {
            Some(acc.map_or((*v, *v), |(lo, hi)| (lo.min(*v), hi.max(*v))))
        }) else {
            return Self {
                edges: Vec::new(),
                groups: Vec::new(),
            };
        };

        let (min, max, bins) = if min == max {
            (min - 0.5, max + 0.5, 1)
        } else {
            (min, max, bins)
        };
        let width = (max - min) / bins as f64;
        let edges = (0..=bins).map(|i| min + width * i as f64).collect();

        let mut groups: BTreeMap<G, Vec<usize>> = BTreeMap::new();
        for (group, value) in pairs {
            let idx = (((value - min) / width).floor() as usize).min(bins - 1);
            groups.entry(group).or_insert_with(|| vec![0; bins])[idx] += 1;
        }

        Self {
            edges,
            groups: groups.into_iter().collect(),
        }
    }
}
