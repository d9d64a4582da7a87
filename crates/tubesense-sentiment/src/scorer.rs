//! Reduction of per-comment labels to a video score.

use tubesense_core::ScoreFormula;

use crate::types::{ScoreResult, SentimentLabel};

/// Running per-label counts for one video.
///
/// The reduction is commutative, so labels may be recorded in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl ScoreTally {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Freezes the counts into a [`ScoreResult`] using `formula`.
    #[must_use]
    pub fn finish(self, formula: ScoreFormula) -> ScoreResult {
        let total = self.total();
        let score = match formula {
            ScoreFormula::Normalized => normalized_score(self.positive, self.negative, total),
            ScoreFormula::NetDifference => net_score(self.positive, self.negative),
        };
        ScoreResult {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
            total,
            score,
            formula,
        }
    }
}

impl FromIterator<SentimentLabel> for ScoreTally {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut tally = Self::default();
        for label in iter {
            tally.record(label);
        }
        tally
    }
}

impl ScoreResult {
    /// Counts `labels` and scores them with `formula`.
    pub fn from_labels<I>(labels: I, formula: ScoreFormula) -> Self
    where
        I: IntoIterator<Item = SentimentLabel>,
    {
        labels.into_iter().collect::<ScoreTally>().finish(formula)
    }
}

/// `round(((positive - negative + total) / (2 * total)) * 10)`, rounding
/// halves up.
///
/// Returns `0` when `total == 0`. Computed in integers, so there is no
/// floating point drift at `.5` boundaries. Counts that exceed `total` are
/// clamped so the result always lies in `0..=10`.
#[must_use]
pub fn normalized_score(positive: usize, negative: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    let total = total as u128;
    let positive = (positive as u128).min(total);
    let negative = (negative as u128).min(total);

    // 10 * (p - n + t) / (2t) == 5 * (p - n + t) / t; round half up.
    let numerator = 5 * (positive + total - negative);
    let rounded = (2 * numerator + total) / (2 * total);
    i64::try_from(rounded.min(10)).unwrap_or(10)
}

/// `positive - negative`, signed and unbounded.
#[must_use]
pub fn net_score(positive: usize, negative: usize) -> i64 {
    let positive = i64::try_from(positive).unwrap_or(i64::MAX);
    let negative = i64::try_from(negative).unwrap_or(i64::MAX);
    positive.saturating_sub(negative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use SentimentLabel::{Negative, Neutral, Positive};

    #[test]
    fn mixed_labels_scenario() {
        let result = ScoreResult::from_labels(
            [Positive, Positive, Negative, Neutral, Neutral],
            ScoreFormula::Normalized,
        );
        assert_eq!(result.positive, 2);
        assert_eq!(result.negative, 1);
        assert_eq!(result.neutral, 2);
        assert_eq!(result.total, 5);
        assert_eq!(result.score, 6);
    }

    #[test]
    fn empty_input_scores_zero() {
        let result = ScoreResult::from_labels([], ScoreFormula::Normalized);
        assert_eq!(result.total, 0);
        assert_eq!(result.score, 0);

        let result = ScoreResult::from_labels([], ScoreFormula::NetDifference);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn counts_always_sum_to_input_length() {
        let labels: Vec<SentimentLabel> = (0..37)
            .map(|i| match i % 3 {
                0 => Positive,
                1 => Neutral,
                _ => Negative,
            })
            .collect();
        let result = ScoreResult::from_labels(labels.iter().copied(), ScoreFormula::Normalized);
        assert_eq!(
            result.positive + result.neutral + result.negative,
            labels.len()
        );
        assert_eq!(result.total, labels.len());
    }

    #[test]
    fn normalized_score_stays_within_bounds() {
        for total in 1..=30usize {
            for positive in 0..=total {
                for negative in 0..=(total - positive) {
                    let score = normalized_score(positive, negative, total);
                    assert!(
                        (0..=10).contains(&score),
                        "p={positive} n={negative} t={total} gave {score}"
                    );
                }
            }
        }
    }

    #[test]
    fn normalized_score_extremes() {
        assert_eq!(normalized_score(10, 0, 10), 10);
        assert_eq!(normalized_score(0, 10, 10), 0);
        assert_eq!(normalized_score(0, 0, 10), 5);
    }

    #[test]
    fn normalized_score_rounds_half_up() {
        // (1 - 0 + 2) / 4 * 10 = 7.5
        assert_eq!(normalized_score(1, 0, 2), 8);
        // (0 - 1 + 2) / 4 * 10 = 2.5
        assert_eq!(normalized_score(0, 1, 2), 3);
        // (1 - 0 + 4) / 8 * 10 = 6.25
        assert_eq!(normalized_score(1, 0, 4), 6);
    }

    #[test]
    fn normalized_score_clamps_inconsistent_counts() {
        assert_eq!(normalized_score(50, 0, 10), 10);
        assert_eq!(normalized_score(0, 50, 10), 0);
    }

    #[test]
    fn net_difference_formula_is_signed() {
        let result = ScoreResult::from_labels(
            [Negative, Negative, Negative, Positive],
            ScoreFormula::NetDifference,
        );
        assert_eq!(result.score, -2);
        assert_eq!(result.formula, ScoreFormula::NetDifference);
        assert_eq!(net_score(120, 20), 100);
    }

    #[test]
    fn tally_is_order_independent() {
        let forward = [Positive, Negative, Neutral, Positive]
            .into_iter()
            .collect::<ScoreTally>();
        let backward = [Positive, Neutral, Negative, Positive]
            .into_iter()
            .rev()
            .collect::<ScoreTally>();
        assert_eq!(forward, backward);
    }
}
