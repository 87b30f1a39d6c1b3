//! Needleman-Wunsch global alignment with a linear gap cost.

use log::{debug, trace};

use crate::matrix::ScoreMatrix;
use crate::scoring::{LinearScoring, Position, Score};
use crate::traceback::{AlignmentBuilder, AlignmentResult};

#[derive(Debug, Clone, Copy)]
pub struct GlobalAlignmentEngine<S> {
    scoring: LinearScoring<S>,
}

impl<S: Score> GlobalAlignmentEngine<S> {
    pub fn new(scoring: LinearScoring<S>) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &LinearScoring<S> {
        &self.scoring
    }

    /// Forward pass over `(n + 1) x (m + 1)` cells.
    ///
    /// The first row and column hold running sums of the gap penalty, which is
    /// `i * gap` for integer scores and the same additions the traceback
    /// repeats for real scores.
    pub fn fill<T: PartialEq>(&self, v: &[T], w: &[T]) -> ScoreMatrix<S> {
        let gap = self.scoring.gap;
        let mut s: ScoreMatrix<S> = ScoreMatrix::for_lengths(v.len(), w.len());

        for i in 1..=v.len() {
            s.set(i, 0, s.get(i - 1, 0) + gap);
        }
        for j in 1..=w.len() {
            s.set(0, j, s.get(0, j - 1) + gap);
        }

        for i in 1..=v.len() {
            for j in 1..=w.len() {
                let diagonal = s.get(i - 1, j - 1) + self.scoring.substitution(&v[i - 1], &w[j - 1]);
                let vertical = s.get(i - 1, j) + gap;
                let horizontal = s.get(i, j - 1) + gap;
                s.set(i, j, diagonal.max_of(vertical).max_of(horizontal));
            }
        }
        s
    }

    /// Aligns all of `v` against all of `w`.
    ///
    /// Ties during traceback resolve diagonal first, then vertical (symbol of
    /// `v` against a gap), then horizontal.
    pub fn compute<T: PartialEq + Clone>(&self, v: &[T], w: &[T]) -> AlignmentResult<S, T> {
        let s = self.fill(v, w);
        let (n, m) = (v.len(), w.len());
        let score = s.get(n, m);
        let gap = self.scoring.gap;

        let mut builder = AlignmentBuilder::new(v, w);
        let (mut i, mut j) = (n, m);
        while i > 0 || j > 0 {
            let current = s.get(i, j);
            if i > 0
                && j > 0
                && current == s.get(i - 1, j - 1) + self.scoring.substitution(&v[i - 1], &w[j - 1])
            {
                builder.diagonal(i, j);
                i -= 1;
                j -= 1;
            } else if i > 0 && (j == 0 || current == s.get(i - 1, j) + gap) {
                builder.vertical(i);
                i -= 1;
            } else {
                builder.horizontal(j);
                j -= 1;
            }
        }
        trace!("global traceback reached the origin");

        debug!("global alignment of {}x{} symbols scored {}", n, m, score);
        builder.finish(score, Position::new(0, 0), Position::new(n, m))
    }
}
