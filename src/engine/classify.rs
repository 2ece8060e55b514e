use crate::data::model::{Column, Observation};
use crate::error::{OutlierError, Result};

// ---------------------------------------------------------------------------
// ThresholdPair
// ---------------------------------------------------------------------------

/// Inclusive `[lower, upper]` range defining inliers.
///
/// Construction does not check `lower <= upper`; [`classify`] does, so that a
/// caller dragging two independent sliders gets an explicit error instead of a
/// silently swapped range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPair {
    pub lower: f64,
    pub upper: f64,
}

impl ThresholdPair {
    pub fn new(lower: f64, upper: f64) -> Self {
        ThresholdPair { lower, upper }
    }

    /// The pair covering the whole column, i.e. nothing excluded.
    pub fn spanning(column: &Column) -> Result<Self> {
        let (lower, upper) = column.range().ok_or_else(|| OutlierError::EmptyColumn {
            column: column.name.clone(),
        })?;
        Ok(ThresholdPair { lower, upper })
    }

    pub fn validate(&self) -> Result<()> {
        // Also rejects NaN bounds.
        if self.lower <= self.upper {
            Ok(())
        } else {
            Err(OutlierError::InvalidThreshold {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }

    /// Strict on both ends: a value equal to a bound is an inlier.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Result of one classification pass over a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub inliers: Vec<Observation>,
    pub outliers: Vec<Observation>,
    /// Arithmetic mean over every non-missing row, independent of thresholds.
    pub mean: f64,
    /// Rows left out because their value is missing.
    pub missing: usize,
}

impl Classification {
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.outliers.iter().map(|o| o.row).collect()
    }
}

/// Split the non-missing rows of `column` into inliers and outliers.
///
/// Missing rows cannot be compared with a threshold and are excluded from
/// both subsets and from the mean.
pub fn classify(column: &Column, thresholds: ThresholdPair) -> Result<Classification> {
    let mut inliers = Vec::new();
    let mut outliers = Vec::new();
    let mut sum = 0.0;

    for obs in column.observations() {
        sum += obs.value;
        if thresholds.is_outlier(obs.value) {
            outliers.push(obs);
        } else {
            inliers.push(obs);
        }
    }

    let count = inliers.len() + outliers.len();
    if count == 0 {
        return Err(OutlierError::EmptyColumn {
            column: column.name.clone(),
        });
    }
    thresholds.validate()?;

    Ok(Classification {
        inliers,
        outliers,
        mean: sum / count as f64,
        missing: column.len() - count,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    fn values(obs: &[Observation]) -> Vec<f64> {
        obs.iter().map(|o| o.value).collect()
    }

    #[test]
    fn splits_on_thresholds() {
        let col = Column::from_values("c", &[1.0, 2.0, 3.0, 100.0]);
        let result = classify(&col, ThresholdPair::new(1.0, 3.0)).unwrap();
        assert_eq!(values(&result.inliers), vec![1.0, 2.0, 3.0]);
        assert_eq!(values(&result.outliers), vec![100.0]);
        assert_eq!(result.outliers[0].row, 3);
        assert_relative_eq!(result.mean, 26.5);
    }

    #[test]
    fn degenerate_range_keeps_equal_values() {
        let col = Column::from_values("c", &[5.0, 5.0, 5.0]);
        let result = classify(&col, ThresholdPair::new(5.0, 5.0)).unwrap();
        assert_eq!(values(&result.inliers), vec![5.0, 5.0, 5.0]);
        assert!(result.outliers.is_empty());
        assert_relative_eq!(result.mean, 5.0);
    }

    #[test]
    fn empty_column_is_rejected() {
        let col = Column::from_values("c", &[]);
        let err = classify(&col, ThresholdPair::new(0.0, 1.0)).unwrap_err();
        assert!(matches!(err, OutlierError::EmptyColumn { column } if column == "c"));
    }

    #[test]
    fn all_missing_column_is_rejected() {
        let col = Column::new("c", vec![None, None]);
        let err = classify(&col, ThresholdPair::new(0.0, 1.0)).unwrap_err();
        assert!(matches!(err, OutlierError::EmptyColumn { .. }));
        assert!(ThresholdPair::spanning(&col).is_err());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let col = Column::from_values("c", &[1.0, 2.0]);
        let err = classify(&col, ThresholdPair::new(10.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            OutlierError::InvalidThreshold { lower, upper } if lower == 10.0 && upper == 1.0
        ));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let col = Column::from_values("c", &[1.0]);
        assert!(classify(&col, ThresholdPair::new(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn full_range_has_no_outliers() {
        let col = Column::from_values("c", &[-5.0, 0.0, 5.0, 10.0]);
        let thresholds = ThresholdPair::spanning(&col).unwrap();
        assert_eq!(thresholds, ThresholdPair::new(-5.0, 10.0));

        let result = classify(&col, thresholds).unwrap();
        assert!(result.outliers.is_empty());
        assert_eq!(values(&result.inliers), vec![-5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn thresholds_outside_data_range_are_accepted() {
        let col = Column::from_values("c", &[1.0, 2.0, 3.0]);
        let result = classify(&col, ThresholdPair::new(-100.0, 100.0)).unwrap();
        assert_eq!(result.inliers.len(), 3);

        let result = classify(&col, ThresholdPair::new(50.0, 60.0)).unwrap();
        assert_eq!(result.outliers.len(), 3);
    }

    #[test]
    fn missing_rows_are_excluded() {
        let col = Column::new("c", vec![Some(1.0), None, Some(10.0), None]);
        let result = classify(&col, ThresholdPair::new(0.0, 5.0)).unwrap();
        assert_eq!(result.missing, 2);
        assert_eq!(result.inliers, vec![Observation { row: 0, value: 1.0 }]);
        assert_eq!(result.outliers, vec![Observation { row: 2, value: 10.0 }]);
        assert_eq!(result.outlier_rows(), vec![2]);
        assert_relative_eq!(result.mean, 5.5);
    }

    fn column_strategy() -> impl Strategy<Value = Column> {
        prop::collection::vec(prop::option::weighted(0.9, -1e6..1e6f64), 1..60)
            .prop_filter("needs a value", |v| v.iter().any(Option::is_some))
            .prop_map(|v| Column::new("p", v))
    }

    fn thresholds_strategy() -> impl Strategy<Value = ThresholdPair> {
        (-1e6..1e6f64, 0.0..1e6f64).prop_map(|(lo, width)| ThresholdPair::new(lo, lo + width))
    }

    proptest! {
        #[test]
        fn partition_is_complete_and_ordered(col in column_strategy(), t in thresholds_strategy()) {
            let result = classify(&col, t).unwrap();
            let mut merged: Vec<Observation> = result
                .inliers
                .iter()
                .chain(result.outliers.iter())
                .copied()
                .collect();
            merged.sort_by_key(|o| o.row);
            let expected: Vec<Observation> = col.observations().collect();
            prop_assert_eq!(merged, expected);
            prop_assert!(result.inliers.windows(2).all(|w| w[0].row < w[1].row));
            prop_assert!(result.outliers.windows(2).all(|w| w[0].row < w[1].row));
            prop_assert_eq!(result.missing, col.missing_count());
        }

        #[test]
        fn bounds_are_inliers(col in column_strategy()) {
            let obs: Vec<Observation> = col.observations().collect();
            let pick = obs[obs.len() / 2].value;
            let result = classify(&col, ThresholdPair::new(pick, pick)).unwrap();
            prop_assert!(result.inliers.iter().all(|o| o.value == pick));
            prop_assert!(result.outliers.iter().all(|o| o.value != pick));
            prop_assert!(!result.inliers.is_empty());
        }

        #[test]
        fn widening_never_adds_outliers(
            col in column_strategy(),
            t in thresholds_strategy(),
            grow_lo in 0.0..1e5f64,
            grow_hi in 0.0..1e5f64,
        ) {
            let narrow = classify(&col, t).unwrap();
            let wide = classify(&col, ThresholdPair::new(t.lower - grow_lo, t.upper + grow_hi)).unwrap();
            prop_assert!(wide.outliers.len() <= narrow.outliers.len());
            prop_assert!(wide.outliers.iter().all(|o| narrow.outliers.contains(o)));
        }

        #[test]
        fn mean_ignores_thresholds(col in column_strategy(), a in thresholds_strategy(), b in thresholds_strategy()) {
            let first = classify(&col, a).unwrap();
            let second = classify(&col, b).unwrap();
            prop_assert_eq!(first.mean, second.mean);
        }

        #[test]
        fn classification_is_idempotent(col in column_strategy(), t in thresholds_strategy()) {
            prop_assert_eq!(classify(&col, t).unwrap(), classify(&col, t).unwrap());
        }
    }
}
