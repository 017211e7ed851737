//! Weighted linear scoring over personnel performance features.
//!
//! `score = income * w_income + invoice_count * w_invoices
//!        + working_hours * w_hours + expense * w_expense + bias`
//!
//! Weights are supplied by the caller (hand-tuned or fitted elsewhere);
//! nothing is learned here.

use serde::{Deserialize, Serialize};

use super::ScoringProvider;
use crate::source::PersonnelRecord;

/// Feature weights of a [`LinearScore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearWeights {
    pub income: f64,
    pub invoice_count: f64,
    pub working_hours: f64,
    pub expense: f64,
    pub bias: f64,
}

impl Default for LinearWeights {
    /// Net contribution per record: income counts, expense subtracts.
    fn default() -> Self {
        Self {
            income: 1.0,
            invoice_count: 0.0,
            working_hours: 0.0,
            expense: -1.0,
            bias: 0.0,
        }
    }
}

impl LinearWeights {
    /// Builds weights from `[income, invoice_count, working_hours, expense, bias]`.
    pub fn from_array(values: &[f64; 5]) -> Self {
        let [income, invoice_count, working_hours, expense, bias] = *values;
        Self {
            income,
            invoice_count,
            working_hours,
            expense,
            bias,
        }
    }
}

/// Scores a record as a weighted sum of its features.
#[derive(Debug, Clone, Default)]
pub struct LinearScore {
    weights: LinearWeights,
}

impl LinearScore {
    pub fn new(weights: LinearWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &LinearWeights {
        &self.weights
    }
}

impl ScoringProvider for LinearScore {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn score(&self, record: &PersonnelRecord) -> f64 {
        let w = &self.weights;
        record.income * w.income
            + record.invoice_count * w.invoice_count
            + record.working_hours * w.working_hours
            + record.expense * w.expense
            + w.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tests::record;

    #[test]
    fn test_default_weights_net_income() {
        // 600 - 100
        let s = LinearScore::default().score(&record(None));
        assert!((s - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = LinearScore::new(LinearWeights::from_array(&[0.0, 2.0, 1.0, 0.0, 0.5]));
        // 20 * 2 + 5 * 1 + 0.5
        assert!((scorer.score(&record(None)) - 45.5).abs() < 1e-10);
        assert_eq!(scorer.name(), "linear");
    }

    #[test]
    fn test_ignores_precomputed_score() {
        let scorer = LinearScore::default();
        assert!(
            (scorer.score(&record(Some(1e6))) - scorer.score(&record(None))).abs() < 1e-10
        );
    }
}
