//! Local alignment with affine gap costs (Gotoh), floored at zero.
//!
//! Three co-indexed tables track the best score of an alignment of prefixes
//! `v[..i]` and `w[..j]` by the kind of column it ends in:
//!
//! * `M` ends in a match/mismatch column,
//! * `X` ends in `v[i - 1]` against a gap (vertical),
//! * `Y` ends in a gap against `w[j - 1]` (horizontal).
//!
//! Every cell is clamped at zero so a fresh alignment may start anywhere. The
//! reported alignment always ends in `M`.

use log::{debug, trace};

use crate::matrix::ScoreMatrix;
use crate::scoring::{AffineScoring, Position, Score};
use crate::traceback::{AlignmentBuilder, AlignmentResult};

/// Table the traceback is currently walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffineState {
    /// `M`
    Match,
    /// `X`: symbol of `v` against a gap.
    GapInW,
    /// `Y`: gap against a symbol of `w`.
    GapInV,
}

/// Filled `M`, `X`, `Y` tables and the best `M` cell.
#[derive(Debug, Clone)]
pub struct AffineTables<S> {
    pub m: ScoreMatrix<S>,
    pub x: ScoreMatrix<S>,
    pub y: ScoreMatrix<S>,
    pub best_score: S,
    pub best_position: Position,
}

impl<S: Score> AffineTables<S> {
    fn new(n: usize, m: usize) -> Self {
        Self {
            m: ScoreMatrix::for_lengths(n, m),
            x: ScoreMatrix::for_lengths(n, m),
            y: ScoreMatrix::for_lengths(n, m),
            best_score: S::ZERO,
            best_position: Position::default(),
        }
    }

    pub fn table(&self, state: AffineState) -> &ScoreMatrix<S> {
        match state {
            AffineState::Match => &self.m,
            AffineState::GapInW => &self.x,
            AffineState::GapInV => &self.y,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LocalAffineEngine<S> {
    scoring: AffineScoring<S>,
}

impl<S: Score> LocalAffineEngine<S> {
    pub fn new(scoring: AffineScoring<S>) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &AffineScoring<S> {
        &self.scoring
    }

    /// Forward pass in row-major order.
    ///
    /// The best `M` cell is replaced only by a strictly larger value, so the
    /// first maximum in scan order wins. When nothing scores above zero the
    /// best cell stays at the origin.
    pub fn fill<T: PartialEq>(&self, v: &[T], w: &[T]) -> AffineTables<S> {
        let AffineScoring {
            gap_open,
            gap_extend,
            ..
        } = self.scoring;
        let mut t = AffineTables::new(v.len(), w.len());

        for i in 1..=v.len() {
            for j in 1..=w.len() {
                let x = S::ZERO
                    .max_of(t.x.get(i - 1, j) + gap_extend)
                    .max_of(t.m.get(i - 1, j) + gap_open);
                t.x.set(i, j, x);

                let y = S::ZERO
                    .max_of(t.y.get(i, j - 1) + gap_extend)
                    .max_of(t.m.get(i, j - 1) + gap_open);
                t.y.set(i, j, y);

                let sub = self.scoring.substitution(&v[i - 1], &w[j - 1]);
                let m = S::ZERO
                    .max_of(t.m.get(i - 1, j - 1) + sub)
                    .max_of(t.x.get(i - 1, j - 1) + sub)
                    .max_of(t.y.get(i - 1, j - 1) + sub);
                t.m.set(i, j, m);

                if m > t.best_score {
                    t.best_score = m;
                    t.best_position = Position::new(i, j);
                }
            }
        }
        t
    }

    /// Best-scoring local alignment. The aligned rows cover exactly the
    /// substrings `v[start.i..end.i]` and `w[start.j..end.j]`.
    pub fn compute<T: PartialEq + Clone>(&self, v: &[T], w: &[T]) -> AlignmentResult<S, T> {
        let t = self.fill(v, w);
        let AffineScoring {
            gap_open,
            gap_extend,
            ..
        } = self.scoring;

        let mut builder = AlignmentBuilder::new(v, w);
        let end = t.best_position;
        let (mut i, mut j) = (end.i, end.j);
        let mut state = AffineState::Match;

        while i > 0 && j > 0 {
            let current = t.table(state).get(i, j);
            if current == S::ZERO {
                trace!("local traceback hit a zero {:?} cell at ({}, {})", state, i, j);
                break;
            }

            match state {
                AffineState::Match => {
                    let sub = self.scoring.substitution(&v[i - 1], &w[j - 1]);
                    let previous = [AffineState::Match, AffineState::GapInW, AffineState::GapInV]
                        .into_iter()
                        .find(|&from| current == t.table(from).get(i - 1, j - 1) + sub);
                    let Some(previous) = previous else {
                        trace!("local traceback found no predecessor at ({}, {})", i, j);
                        break;
                    };
                    builder.diagonal(i, j);
                    i -= 1;
                    j -= 1;
                    state = previous;
                }
                AffineState::GapInW => {
                    if current != t.x.get(i - 1, j) + gap_extend {
                        debug_assert!(current == t.m.get(i - 1, j) + gap_open);
                        state = AffineState::Match;
                    }
                    builder.vertical(i);
                    i -= 1;
                }
                AffineState::GapInV => {
                    if current != t.y.get(i, j - 1) + gap_extend {
                        debug_assert!(current == t.m.get(i, j - 1) + gap_open);
                        state = AffineState::Match;
                    }
                    builder.horizontal(j);
                    j -= 1;
                }
            }
        }

        debug!(
            "local affine alignment of {}x{} symbols scored {} ending at ({}, {})",
            v.len(),
            w.len(),
            t.best_score,
            end.i,
            end.j
        );
        builder.finish(t.best_score, Position::new(i, j), end)
    }
}
