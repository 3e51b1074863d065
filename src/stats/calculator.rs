//! Statistics Calculator Module
//! Descriptive statistics, histogram binning and per-category aggregation.

use statrs::statistics::{Data, Median, Statistics};
use std::collections::HashMap;

/// One equal-width histogram bin, `[start, end)` except the last which is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Mean of the numeric values sharing one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub label: String,
    pub count: usize,
    pub mean: f64,
}

/// Stateless statistics over already-extracted values.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Arithmetic mean; NaN for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        values.iter().mean()
    }

    /// Median (average of the two middle values for even counts); NaN when empty.
    pub fn median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        Data::new(values.to_vec()).median()
    }

    /// Sample standard deviation (n - 1 denominator); NaN for fewer than two values.
    pub fn std_dev(values: &[f64]) -> f64 {
        values.iter().std_dev()
    }

    /// Bin values into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// A constant sample is spread over `[v - 0.5, v + 0.5]`.
    pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Vec::new();
        }

        let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let step = (max - min) / bins as f64;
        let mut result: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                start: min + i as f64 * step,
                end: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * step
                },
                count: 0,
            })
            .collect();

        for v in finite {
            let idx = (((v - min) / step).floor() as usize).min(bins - 1);
            result[idx].count += 1;
        }

        result
    }

    /// Mean of `values` per distinct label, in first-appearance order.
    ///
    /// Rows missing either the label or the value are skipped.
    pub fn group_means(labels: &[Option<String>], values: &[Option<f64>]) -> Vec<GroupMean> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut sums: Vec<(String, f64, usize)> = Vec::new();

        for (label, value) in labels.iter().zip(values.iter()) {
            let (Some(label), Some(value)) = (label, value) else {
                continue;
            };
            let idx = *index.entry(label.as_str()).or_insert_with(|| {
                sums.push((label.clone(), 0.0, 0));
                sums.len() - 1
            });
            sums[idx].1 += value;
            sums[idx].2 += 1;
        }

        sums.into_iter()
            .map(|(label, sum, count)| GroupMean {
                label,
                count,
                mean: sum / count as f64,
            })
            .collect()
    }
}
