//! TOPSIS Scorer - Closeness-to-ideal scoring and ranking of alternatives.

use serde::{Deserialize, Serialize};

use super::{Criteria, DecisionMatrix, RankingMethod};
use crate::domain::foundation::TopsisError;

/// Ideal best and worst value of each weighted criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distance of one alternative to both ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Separation {
    pub to_best: f64,
    pub to_worst: f64,
}

/// Score and rank of one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    /// Relative closeness to the ideal solution, in [0, 1].
    pub score: f64,
    /// 1 is best.
    pub rank: u32,
}

/// Scores and ranks, index-aligned with the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    entries: Vec<ScoredAlternative>,
}

impl ScoreResult {
    /// Combines index-aligned scores and ranks.
    pub fn new(scores: Vec<f64>, ranks: Vec<u32>) -> Self {
        let entries = scores
            .into_iter()
            .zip(ranks)
            .map(|(score, rank)| ScoredAlternative { score, rank })
            .collect();
        Self { entries }
    }

    /// Returns the scored entries in row order.
    pub fn entries(&self) -> &[ScoredAlternative] {
        &self.entries
    }

    /// Returns the scores in row order.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Returns the ranks in row order.
    pub fn ranks(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.rank).collect()
    }

    /// Returns the row indices holding rank 1.
    pub fn best_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.rank == 1)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every intermediate stage of a TOPSIS run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    pub normalized: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
    pub ideal: IdealPoints,
    pub separations: Vec<Separation>,
    pub result: ScoreResult,
}

/// TOPSIS scoring functions.
///
/// All reductions run sequentially in row order, so identical inputs give
/// bit-identical outputs.
pub struct TopsisScorer;

impl TopsisScorer {
    /// Scores and ranks every alternative in the matrix.
    ///
    /// # Errors
    /// - `InvalidShape` if criteria and matrix disagree on the criterion count
    /// - `DegenerateColumn` if a criterion column is all zero
    /// - `DegenerateRow` if an alternative sits on both ideal points
    /// - `ScoreOverflow` if weights are too large for the distances to be finite
    pub fn score(
        matrix: &DecisionMatrix,
        criteria: &Criteria,
        method: RankingMethod,
    ) -> Result<ScoreResult, TopsisError> {
        Ok(Self::analyze(matrix, criteria, method)?.result)
    }

    /// Runs all stages and keeps their outputs.
    pub fn analyze(
        matrix: &DecisionMatrix,
        criteria: &Criteria,
        method: RankingMethod,
    ) -> Result<TopsisAnalysis, TopsisError> {
        criteria.ensure_matches(matrix)?;

        let normalized = Self::normalize(matrix)?;
        let weighted = Self::apply_weights(&normalized, criteria)?;
        let ideal = Self::ideal_points(&weighted, criteria)?;
        let separations = Self::separations(&weighted, &ideal)?;
        let scores = Self::closeness(&separations, matrix)?;
        let ranks = method.assign(&scores);

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            ideal,
            separations,
            result: ScoreResult::new(scores, ranks),
        })
    }

    /// Divides each value by the Euclidean norm of its column.
    ///
    /// Each column is first scaled by its largest magnitude, so values near
    /// the ends of the `f64` range normalize without overflow or underflow.
    ///
    /// # Errors
    /// `DegenerateColumn` when every value of a column is zero.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, TopsisError> {
        let alternatives = matrix.alternatives();
        let mut columns = Vec::with_capacity(matrix.criterion_count());

        for (column, name) in matrix.criteria().iter().enumerate() {
            let scale = max_magnitude(alternatives.iter().map(|a| a.values[column]));
            if scale == 0.0 {
                return Err(TopsisError::degenerate_column(name.clone()));
            }
            let unit_norm = alternatives
                .iter()
                .map(|a| {
                    let v = a.values[column] / scale;
                    v * v
                })
                .sum::<f64>()
                .sqrt();
            columns.push((scale, unit_norm));
        }

        Ok(alternatives
            .iter()
            .map(|a| {
                a.values
                    .iter()
                    .zip(&columns)
                    .map(|(v, (scale, unit_norm))| (v / scale) / unit_norm)
                    .collect()
            })
            .collect())
    }

    /// Multiplies each normalized value by its criterion weight.
    ///
    /// # Errors
    /// `InvalidShape` when a row's width differs from the criteria count.
    pub fn apply_weights(
        normalized: &[Vec<f64>],
        criteria: &Criteria,
    ) -> Result<Vec<Vec<f64>>, TopsisError> {
        ensure_width(normalized, criteria.len(), "normalized")?;

        Ok(normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(criteria.weights())
                    .map(|(v, w)| v * w.value())
                    .collect()
            })
            .collect())
    }

    /// Picks each column's best and worst weighted value by impact direction.
    ///
    /// # Errors
    /// `InvalidShape` when `weighted` is empty or a row's width differs from
    /// the criteria count.
    pub fn ideal_points(
        weighted: &[Vec<f64>],
        criteria: &Criteria,
    ) -> Result<IdealPoints, TopsisError> {
        if weighted.is_empty() {
            return Err(TopsisError::invalid_shape(
                "weighted matrix must have at least one row",
            ));
        }
        ensure_width(weighted, criteria.len(), "weighted")?;

        let mut best = Vec::with_capacity(criteria.len());
        let mut worst = Vec::with_capacity(criteria.len());

        for (column, impact) in criteria.impacts().iter().enumerate() {
            let (max, min) = weighted.iter().map(|row| row[column]).fold(
                (f64::NEG_INFINITY, f64::INFINITY),
                |(max, min), v| (max.max(v), min.min(v)),
            );
            let (b, w) = impact.ideal_pair(max, min);
            best.push(b);
            worst.push(w);
        }

        Ok(IdealPoints { best, worst })
    }

    /// Computes each row's Euclidean distance to the ideal best and worst points.
    ///
    /// # Errors
    /// `InvalidShape` when a row or an ideal point differs in width.
    pub fn separations(
        weighted: &[Vec<f64>],
        ideal: &IdealPoints,
    ) -> Result<Vec<Separation>, TopsisError> {
        if ideal.best.len() != ideal.worst.len() {
            return Err(TopsisError::invalid_shape(format!(
                "ideal best has {} values but ideal worst has {}",
                ideal.best.len(),
                ideal.worst.len()
            )));
        }
        ensure_width(weighted, ideal.best.len(), "weighted")?;

        Ok(weighted
            .iter()
            .map(|row| Separation {
                to_best: euclidean(row, &ideal.best),
                to_worst: euclidean(row, &ideal.worst),
            })
            .collect())
    }

    /// Computes `to_worst / (to_best + to_worst)` for each row.
    ///
    /// # Errors
    /// - `InvalidShape` when there is not one separation per alternative
    /// - `DegenerateRow` when both distances of a row are zero
    /// - `ScoreOverflow` when a distance is infinite, so no score in [0, 1] exists
    pub fn closeness(
        separations: &[Separation],
        matrix: &DecisionMatrix,
    ) -> Result<Vec<f64>, TopsisError> {
        if separations.len() != matrix.alternative_count() {
            return Err(TopsisError::invalid_shape(format!(
                "{} separations for {} alternatives",
                separations.len(),
                matrix.alternative_count()
            )));
        }

        separations
            .iter()
            .zip(matrix.labels())
            .map(|(s, label)| {
                let scale = s.to_best.max(s.to_worst);
                if scale == 0.0 {
                    return Err(TopsisError::degenerate_row(label));
                }
                // Dividing by the larger distance keeps the sum finite.
                let (best, worst) = (s.to_best / scale, s.to_worst / scale);
                let score = worst / (best + worst);
                if (0.0..=1.0).contains(&score) {
                    Ok(score)
                } else {
                    Err(TopsisError::score_overflow(label))
                }
            })
            .collect()
    }
}

fn ensure_width(rows: &[Vec<f64>], width: usize, stage: &str) -> Result<(), TopsisError> {
    match rows.iter().position(|row| row.len() != width) {
        Some(index) => Err(TopsisError::invalid_shape(format!(
            "{} row {} has {} values, expected {}",
            stage,
            index + 1,
            rows[index].len(),
            width
        ))),
        None => Ok(()),
    }
}

fn max_magnitude(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |max, v| max.max(v.abs()))
}

/// Euclidean distance, scaled by the largest difference before squaring.
fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let scale = max_magnitude(a.iter().zip(b).map(|(x, y)| x - y));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    let sum = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (x - y) / scale;
            d * d
        })
        .sum::<f64>();
    scale * sum.sqrt()
}
