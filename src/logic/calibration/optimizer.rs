//! Threshold Optimizer
//!
//! Grid search over alert thresholds against ground truth, maximizing F1.
//! Ties keep the lowest threshold scanned.

use serde::{Deserialize, Serialize};

use super::ground_truth::LabeledObservation;
use crate::constants::{
    BASELINE_THRESHOLD, FALLBACK_THRESHOLD, GRID_END_CENTS, GRID_START_CENTS, TIER2_CEILING,
    TIER2_OFFSET,
};
use crate::logic::detection::{checked_score, LocationScorer};
use crate::logic::error::{SentinelError, SentinelResult};

/// Calibration outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRecommendation {
    /// F1 at the baseline threshold (0.85)
    pub current_f1: f64,

    /// Best F1 found on the grid
    pub new_f1: f64,

    pub recommended_tier1_threshold: f64,
    pub recommended_tier2_threshold: f64,
}

/// Confusion counts for one threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confusion {
    pub true_positive: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_negative: usize,
}

impl Confusion {
    pub fn tally(labels: &[bool], scores: &[f64], threshold: f64) -> Self {
        let mut c = Confusion::default();
        for (&actual, &score) in labels.iter().zip(scores) {
            match (score >= threshold, actual) {
                (true, true) => c.true_positive += 1,
                (true, false) => c.false_positive += 1,
                (false, true) => c.false_negative += 1,
                (false, false) => c.true_negative += 1,
            }
        }
        c
    }

    /// Harmonic mean of precision and recall; 0 when either is undefined or 0
    pub fn f1(&self) -> f64 {
        if self.true_positive == 0 {
            return 0.0;
        }
        let tp2 = 2.0 * self.true_positive as f64;
        tp2 / (tp2 + self.false_positive as f64 + self.false_negative as f64)
    }
}

/// F1 of `score >= threshold` predictions against `labels`
pub fn f1_score(labels: &[bool], scores: &[f64], threshold: f64) -> f64 {
    Confusion::tally(labels, scores, threshold).f1()
}

/// Candidate thresholds 0.10, 0.11, ..., 0.98.
///
/// Built from integer hundredths so every candidate is the nearest f64 to its
/// decimal value.
pub fn candidate_thresholds() -> impl Iterator<Item = f64> {
    (GRID_START_CENTS..=GRID_END_CENTS).map(|cents| cents as f64 / 100.0)
}

/// Tier 2 recommendation derived from Tier 1
pub fn tier2_for(tier1: f64) -> f64 {
    (tier1 + TIER2_OFFSET).min(TIER2_CEILING)
}

/// Recommend thresholds for `observations`, scoring each location with
/// `scorer`. Any score outside [0, 1] aborts the search.
pub fn optimize<S>(
    observations: &[LabeledObservation],
    scorer: &S,
) -> SentinelResult<ThresholdRecommendation>
where
    S: LocationScorer + ?Sized,
{
    if observations.is_empty() {
        return Err(SentinelError::InsufficientData);
    }

    let labels: Vec<bool> = observations.iter().map(LabeledObservation::is_bloom).collect();
    let scores = observations
        .iter()
        .map(|obs| checked_score(scorer.score_location(&obs.location)))
        .collect::<SentinelResult<Vec<f64>>>()?;

    let current_f1 = f1_score(&labels, &scores, BASELINE_THRESHOLD);

    let mut best_f1 = 0.0;
    let mut best_threshold = FALLBACK_THRESHOLD;
    for threshold in candidate_thresholds() {
        let f1 = f1_score(&labels, &scores, threshold);
        if f1 > best_f1 {
            best_f1 = f1;
            best_threshold = threshold;
        }
    }

    tracing::debug!(
        samples = observations.len(),
        current_f1,
        best_f1,
        best_threshold,
        "Threshold search complete"
    );

    Ok(ThresholdRecommendation {
        current_f1,
        new_f1: best_f1,
        recommended_tier1_threshold: best_threshold,
        recommended_tier2_threshold: tier2_for(best_threshold),
    })
}
