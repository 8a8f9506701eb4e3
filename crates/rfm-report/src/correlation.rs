//! Pearson correlation among the three ordinal scores

use rfm_core::{Metric, SegmentedCustomer};
use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt;

/// Sample Pearson correlation of two equally long columns
///
/// NaN when there are fewer than two observations or either column has zero
/// variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let sx = x.iter().std_dev();
    let sy = y.iter().std_dev();
    if sx == 0.0 || sy == 0.0 || !sx.is_finite() || !sy.is_finite() {
        return f64::NAN;
    }

    x.iter().covariance(y.iter()) / (sx * sy)
}

/// Symmetric 3x3 correlation matrix over Recency, Frequency and Monetary scores
///
/// Rows and columns follow [`Metric::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Number of customers the matrix was computed from
    pub observations: usize,
    pub values: [[f64; 3]; 3],
}

impl CorrelationMatrix {
    /// Correlate the score columns of a set of customers
    pub fn from_customers<'a, I>(customers: I) -> Self
    where
        I: IntoIterator<Item = &'a SegmentedCustomer>,
    {
        let mut columns: [Vec<f64>; 3] = Default::default();
        for c in customers {
            for (column, metric) in columns.iter_mut().zip(Metric::ALL) {
                column.push(f64::from(c.scores.score(metric)));
            }
        }
        Self::from_columns(&columns)
    }

    fn from_columns(columns: &[Vec<f64>; 3]) -> Self {
        let mut values = [[f64::NAN; 3]; 3];
        for i in 0..3 {
            for j in i..3 {
                let r = if i == j {
                    // 1.0 only where the column actually varies
                    if pearson(&columns[i], &columns[i]).is_nan() {
                        f64::NAN
                    } else {
                        1.0
                    }
                } else {
                    pearson(&columns[i], &columns[j])
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            observations: columns[0].len(),
            values,
        }
    }

    /// Correlation between two scores
    pub fn get(&self, a: Metric, b: Metric) -> f64 {
        self.values[metric_index(a)][metric_index(b)]
    }

    /// True when no entry is defined
    pub fn is_undefined(&self) -> bool {
        self.values.iter().flatten().all(|v| v.is_nan())
    }
}

fn metric_index(metric: Metric) -> usize {
    match metric {
        Metric::Recency => 0,
        Metric::Frequency => 1,
        Metric::Monetary => 2,
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>16}", "")?;
        for metric in Metric::ALL {
            write!(f, " {:>14}", metric.score_name())?;
        }
        writeln!(f)?;
        for (row, metric) in self.values.iter().zip(Metric::ALL) {
            write!(f, "{:>16}", metric.score_name())?;
            for v in row {
                write!(f, " {v:>14.3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
