use crate::scoring::{AlignmentStats, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Gap in `v` against a symbol of `w` (horizontal move).
    Insertion,
    /// Symbol of `v` against a gap in `w` (vertical move).
    Deletion,
}

impl TracebackOperation {
    pub fn is_gap(self) -> bool {
        matches!(self, Self::Insertion | Self::Deletion)
    }
}

/// One optimal alignment of `v` against `w`.
///
/// `aligned_v` and `aligned_w` have equal length; `None` marks a gap and never
/// appears at the same column in both rows. `start_position`..`end_position`
/// is the span of the table the traceback walked, i.e. `v[start.i..end.i]`
/// and `w[start.j..end.j]` are the aligned substrings.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult<S, T> {
    pub score: S,
    pub aligned_v: Vec<Option<T>>,
    pub aligned_w: Vec<Option<T>>,
    pub operations: Vec<TracebackOperation>,
    pub start_position: Position,
    pub end_position: Position,
}

impl<S, T> AlignmentResult<S, T> {
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn stats(&self) -> AlignmentStats {
        AlignmentStats::from_operations(&self.operations)
    }
}

impl<S, T: Clone> AlignmentResult<S, T> {
    /// Row `v` with gaps dropped.
    pub fn ungapped_v(&self) -> Vec<T> {
        self.aligned_v.iter().flatten().cloned().collect()
    }

    /// Row `w` with gaps dropped.
    pub fn ungapped_w(&self) -> Vec<T> {
        self.aligned_w.iter().flatten().cloned().collect()
    }
}

impl<S, T: Copy + Into<char>> AlignmentResult<S, T> {
    /// Both rows as text, with `gap` in gap columns. Works for byte and
    /// `char` symbols alike.
    pub fn render(&self, gap: char) -> (String, String) {
        (
            render_row(&self.aligned_v, gap),
            render_row(&self.aligned_w, gap),
        )
    }
}

fn render_row<T: Copy + Into<char>>(row: &[Option<T>], gap: char) -> String {
    row.iter()
        .map(|column| column.map_or(gap, Into::into))
        .collect()
}

/// Collects alignment columns while walking a table backwards.
///
/// Columns are pushed in reverse order and flipped once by `finish`.
pub(crate) struct AlignmentBuilder<'a, T> {
    v: &'a [T],
    w: &'a [T],
    aligned_v: Vec<Option<T>>,
    aligned_w: Vec<Option<T>>,
    operations: Vec<TracebackOperation>,
}

impl<'a, T: PartialEq + Clone> AlignmentBuilder<'a, T> {
    pub fn new(v: &'a [T], w: &'a [T]) -> Self {
        let capacity = v.len() + w.len();
        Self {
            v,
            w,
            aligned_v: Vec::with_capacity(capacity),
            aligned_w: Vec::with_capacity(capacity),
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Column pairing `v[i - 1]` with `w[j - 1]`.
    pub fn diagonal(&mut self, i: usize, j: usize) {
        let (a, b) = (&self.v[i - 1], &self.w[j - 1]);
        self.operations.push(if a == b {
            TracebackOperation::Match
        } else {
            TracebackOperation::Mismatch
        });
        self.aligned_v.push(Some(a.clone()));
        self.aligned_w.push(Some(b.clone()));
    }

    /// Column pairing `v[i - 1]` with a gap.
    pub fn vertical(&mut self, i: usize) {
        self.operations.push(TracebackOperation::Deletion);
        self.aligned_v.push(Some(self.v[i - 1].clone()));
        self.aligned_w.push(None);
    }

    /// Column pairing a gap with `w[j - 1]`.
    pub fn horizontal(&mut self, j: usize) {
        self.operations.push(TracebackOperation::Insertion);
        self.aligned_v.push(None);
        self.aligned_w.push(Some(self.w[j - 1].clone()));
    }

    pub fn finish<S>(mut self, score: S, start: Position, end: Position) -> AlignmentResult<S, T> {
        self.aligned_v.reverse();
        self.aligned_w.reverse();
        self.operations.reverse();

        AlignmentResult {
            score,
            aligned_v: self.aligned_v,
            aligned_w: self.aligned_w,
            operations: self.operations,
            start_position: start,
            end_position: end,
        }
    }
}
