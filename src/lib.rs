//! Pairwise alignment of two symbol sequences by dynamic programming.
//!
//! Three engines share the fill-forward, trace-backward pattern:
//! [`LcsEngine`] (longest common subsequence), [`GlobalAlignmentEngine`]
//! (Needleman-Wunsch, linear gaps) and [`LocalAffineEngine`] (Gotoh, affine
//! gaps, floored at zero). Each call allocates its own tables and is pure.
//! [`PairwiseAligner`] wraps them with precondition checks.

use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod cli;
pub mod config;
pub mod global;
pub mod lcs;
pub mod local_affine;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use alignment_mode::{AlignmentMode, AlignmentParams};
pub use config::{parse_weight, AlignerConfig};
pub use global::GlobalAlignmentEngine;
pub use lcs::{LcsEngine, LcsResult};
pub use local_affine::{AffineState, AffineTables, LocalAffineEngine};
pub use matrix::ScoreMatrix;
pub use scoring::{AffineScoring, AlignmentStats, LinearScoring, Position, Score};
pub use traceback::{AlignmentResult, TracebackOperation};

pub const DEFAULT_GAP_CHAR: char = '-';
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("please enter a valid number for {name}, got `{value}`")]
    InvalidParameter { name: &'static str, value: String },
    #[error("{name} must be a finite number")]
    NonFiniteParameter { name: &'static str },
    #[error("Sequence too large: {0}")]
    SequenceTooLarge(usize),
    #[error("{name} is too large in magnitude for sequences of this length")]
    ScoreOverflow { name: &'static str },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Text sequence split into Unicode scalar values, one symbol per `char`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Result of [`PairwiseAligner::align`], shaped by the mode that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentOutcome<T> {
    Lcs(LcsResult<T>),
    Global(AlignmentResult<i64, T>),
    LocalAffine(AlignmentResult<f64, T>),
}

#[derive(Debug, Clone, Default)]
pub struct PairwiseAligner {
    config: AlignerConfig,
}

impl PairwiseAligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    fn check_lengths(&self, n: usize, m: usize) -> Result<(), AlignerError> {
        let longest = n.max(m);
        if longest > self.config.max_sequence_len() {
            return Err(AlignerError::SequenceTooLarge(longest));
        }
        Ok(())
    }

    pub fn lcs<T: PartialEq + Clone>(&self, v: &[T], w: &[T]) -> Result<LcsResult<T>, AlignerError> {
        self.check_lengths(v.len(), w.len())?;
        Ok(LcsEngine::new().compute(v, w))
    }

    pub fn global<S: Score, T: PartialEq + Clone>(
        &self,
        v: &[T],
        w: &[T],
        scoring: LinearScoring<S>,
    ) -> Result<AlignmentResult<S, T>, AlignerError> {
        self.check_lengths(v.len(), w.len())?;
        if let Some(name) = scoring.non_finite() {
            return Err(AlignerError::NonFiniteParameter { name });
        }
        if let Some(name) = scoring.overflowing(v.len() + w.len()) {
            return Err(AlignerError::ScoreOverflow { name });
        }
        Ok(GlobalAlignmentEngine::new(scoring).compute(v, w))
    }

    pub fn local_affine<S: Score, T: PartialEq + Clone>(
        &self,
        v: &[T],
        w: &[T],
        scoring: AffineScoring<S>,
    ) -> Result<AlignmentResult<S, T>, AlignerError> {
        self.check_lengths(v.len(), w.len())?;
        if let Some(name) = scoring.non_finite() {
            return Err(AlignerError::NonFiniteParameter { name });
        }
        if let Some(name) = scoring.overflowing(v.len() + w.len()) {
            return Err(AlignerError::ScoreOverflow { name });
        }
        Ok(LocalAffineEngine::new(scoring).compute(v, w))
    }

    /// Runs the engine selected by `params`.
    pub fn align<T: PartialEq + Clone>(
        &self,
        v: &[T],
        w: &[T],
        params: &AlignmentParams,
    ) -> Result<AlignmentOutcome<T>, AlignerError> {
        params.check_finite()?;
        debug!("{} alignment of {}x{} symbols", params.mode(), v.len(), w.len());

        let outcome = match *params {
            AlignmentParams::Lcs => AlignmentOutcome::Lcs(self.lcs(v, w)?),
            AlignmentParams::Global(scoring) => AlignmentOutcome::Global(self.global(v, w, scoring)?),
            AlignmentParams::LocalAffine(scoring) => {
                AlignmentOutcome::LocalAffine(self.local_affine(v, w, scoring)?)
            }
        };
        Ok(outcome)
    }

    /// Renders an alignment's two rows with the configured gap character.
    pub fn render<S, T: Copy + Into<char>>(
        &self,
        result: &AlignmentResult<S, T>,
    ) -> (String, String) {
        result.render(self.config.gap_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wrapper() {
        let seq = Sequence::from("ACGT");
        assert_eq!(seq.symbols(), ['A', 'C', 'G', 'T']);
        assert_eq!(seq.len(), 4);
        assert!(Sequence::new("").is_empty());
    }

    #[test]
    fn sequence_symbols_are_chars() {
        let seq = Sequence::new("Äé");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.symbols(), ['Ä', 'é']);
    }

    #[test]
    fn rejects_oversized_sequences() {
        let config = AlignerConfig::new().with_max_sequence_len(3).unwrap();
        let aligner = PairwiseAligner::new(config);
        assert!(matches!(
            aligner.lcs(b"ACGT", b"A"),
            Err(AlignerError::SequenceTooLarge(4))
        ));
        assert!(aligner.lcs(b"ACG", b"ACG").is_ok());
    }

    #[test]
    fn rejects_non_finite_weights() {
        let aligner = PairwiseAligner::default();
        let result = aligner.global(b"A", b"A", LinearScoring::new(1.0, f64::INFINITY, -1.0));
        assert!(matches!(
            result,
            Err(AlignerError::NonFiniteParameter { name: "mismatch" })
        ));
    }

    #[test]
    fn rejects_weights_that_would_overflow() {
        let aligner = PairwiseAligner::default();
        let result = aligner.global(b"AA", b"", LinearScoring::new(1i64, -1, i64::MIN));
        assert!(matches!(result, Err(AlignerError::ScoreOverflow { name: "gap" })));

        let scoring = AffineScoring::new(i64::MAX / 4, -1, -3, -1);
        let result = aligner.local_affine(b"AAAA", b"AAAA", scoring);
        assert!(matches!(result, Err(AlignerError::ScoreOverflow { name: "match" })));

        let huge = i64::MAX / 8;
        let result = aligner.global(b"AA", b"AA", LinearScoring::new(huge, -huge, -huge)).unwrap();
        assert_eq!(result.score, 2 * huge);
    }

    #[test]
    fn dispatches_on_params() {
        let aligner = PairwiseAligner::default();
        let outcome = aligner
            .align(
                b"AAA",
                b"AAA",
                &AlignmentParams::LocalAffine(AffineScoring::new(2.0, -1.0, -5.0, -2.0)),
            )
            .unwrap();
        match outcome {
            AlignmentOutcome::LocalAffine(result) => assert_eq!(result.score, 6.0),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn renders_with_configured_gap() {
        let aligner = PairwiseAligner::new(AlignerConfig::new().with_gap_char('_').unwrap());
        let result = aligner.global(b"", b"AB", LinearScoring::new(1, -1, -2)).unwrap();
        assert_eq!(aligner.render(&result), ("__".to_string(), "AB".to_string()));
    }
}
