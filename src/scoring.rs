use std::fmt::{Debug, Display};
use std::ops::Add;

use crate::traceback::TracebackOperation;

/// Numeric type a scoring table is accumulated in.
///
/// One engine call uses a single `Score` type for the forward pass and for the
/// equality checks of the traceback, so recomputed values compare exactly.
pub trait Score: Copy + PartialOrd + Add<Output = Self> + Debug + Display {
    const ZERO: Self;

    fn is_finite(self) -> bool;

    /// True when any sum of `terms` values drawn from `[0, self]` (or
    /// `[self, 0]`) stays representable.
    fn spans(self, terms: usize) -> bool;

    /// Larger of the two; keeps `self` on ties.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_int_score {
    ($($t:ty),*) => {
        $(impl Score for $t {
            const ZERO: Self = 0;

            #[inline]
            fn is_finite(self) -> bool {
                true
            }

            fn spans(self, terms: usize) -> bool {
                <$t>::try_from(terms)
                    .ok()
                    .and_then(|terms| self.checked_mul(terms))
                    .is_some()
            }
        })*
    };
}

macro_rules! impl_float_score {
    ($($t:ty),*) => {
        $(impl Score for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn spans(self, _terms: usize) -> bool {
                true
            }
        })*
    };
}

impl_int_score!(i32, i64, usize);
impl_float_score!(f32, f64);

/// Weights for the linear gap model (Needleman-Wunsch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScoring<S> {
    pub match_score: S,
    pub mismatch: S,
    pub gap: S,
}

impl<S: Score> LinearScoring<S> {
    pub fn new(match_score: S, mismatch: S, gap: S) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> S {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Name of the first non-finite weight, if any.
    pub fn non_finite(&self) -> Option<&'static str> {
        [
            ("match", self.match_score),
            ("mismatch", self.mismatch),
            ("gap", self.gap),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }

    /// Name of the first weight whose multiple over a path of `columns`
    /// cells would overflow `S`.
    pub fn overflowing(&self, columns: usize) -> Option<&'static str> {
        [
            ("match", self.match_score),
            ("mismatch", self.mismatch),
            ("gap", self.gap),
        ]
        .into_iter()
        .find(|(_, value)| !value.spans(columns))
        .map(|(name, _)| name)
    }
}

/// Weights for the affine gap model (Gotoh). A gap run of length `k` costs
/// `gap_open + (k - 1) * gap_extend`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineScoring<S> {
    pub match_score: S,
    pub mismatch: S,
    pub gap_open: S,
    pub gap_extend: S,
}

impl<S: Score> AffineScoring<S> {
    pub fn new(match_score: S, mismatch: S, gap_open: S, gap_extend: S) -> Self {
        Self {
            match_score,
            mismatch,
            gap_open,
            gap_extend,
        }
    }

    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> S {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    pub fn non_finite(&self) -> Option<&'static str> {
        [
            ("match", self.match_score),
            ("mismatch", self.mismatch),
            ("gap-open", self.gap_open),
            ("gap-extend", self.gap_extend),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }

    pub fn overflowing(&self, columns: usize) -> Option<&'static str> {
        [
            ("match", self.match_score),
            ("mismatch", self.mismatch),
            ("gap-open", self.gap_open),
            ("gap-extend", self.gap_extend),
        ]
        .into_iter()
        .find(|(_, value)| !value.spans(columns))
        .map(|(name, _)| name)
    }
}

/// Cell coordinate in a scoring table: `i` indexes prefixes of `v`, `j` of `w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    /// Columns with a gap on either side.
    pub gaps: u32,
    /// Maximal runs of consecutive gap columns on the same side.
    pub gap_opens: u32,
    pub length: u32,
}

impl AlignmentStats {
    pub fn from_operations(operations: &[TracebackOperation]) -> Self {
        let mut stats = operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
                }
                acc.length += 1;
                acc
            });

        let mut previous = None;
        for &op in operations {
            if op.is_gap() && previous != Some(op) {
                stats.gap_opens += 1;
            }
            previous = Some(op);
        }
        stats
    }

    /// Fraction of columns that are matches; 0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.matches as f64 / self.length as f64
        }
    }
}
