use crate::data::model::{Column, Observation};
use crate::error::{OutlierError, Result};

/// Descriptive statistics of the whole column plus the current split sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; undefined for fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
    pub outlier_count: usize,
    pub inlier_count: usize,
}

impl StatisticsRecord {
    /// `(label, formatted value)` rows in display order.
    pub fn table_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("count", self.count.to_string()),
            ("mean", format!("{:.4}", self.mean)),
            (
                "std",
                self.std.map_or_else(|| "NaN".to_string(), |s| format!("{s:.4}")),
            ),
            ("min", format!("{:.4}", self.min)),
            ("25%", format!("{:.4}", self.p25)),
            ("50%", format!("{:.4}", self.p50)),
            ("75%", format!("{:.4}", self.p75)),
            ("max", format!("{:.4}", self.max)),
            ("Outlier Count", self.outlier_count.to_string()),
            ("Inlier Count", self.inlier_count.to_string()),
        ]
    }
}

/// Summarize `column`, taking the mean from the classifier instead of
/// recomputing it.
pub fn summarize(
    column: &Column,
    outliers: &[Observation],
    inliers: &[Observation],
    mean: f64,
) -> Result<StatisticsRecord> {
    let mut sorted: Vec<f64> = column.observations().map(|o| o.value).collect();
    if sorted.is_empty() {
        return Err(OutlierError::EmptyColumn {
            column: column.name.clone(),
        });
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let std = (count > 1).then(|| {
        let center = sorted.iter().sum::<f64>() / count as f64;
        let ss: f64 = sorted.iter().map(|v| (v - center).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    Ok(StatisticsRecord {
        count,
        mean,
        std,
        min: sorted[0],
        p25: percentile(&sorted, 25.0),
        p50: percentile(&sorted, 50.0),
        p75: percentile(&sorted, 75.0),
        max: sorted[count - 1],
        outlier_count: outliers.len(),
        inlier_count: inliers.len(),
    })
}

/// Percentile `p` (0..=100) of sorted, non-empty data, linearly interpolated
/// between the two closest ranks.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    let last = sorted.len() - 1;
    let rank = p / 100.0 * last as f64;
    let lo = rank.floor() as usize;
    if lo >= last {
        return sorted[last];
    }
    let fraction = rank - lo as f64;
    sorted[lo] + (sorted[lo + 1] - sorted[lo]) * fraction
}
