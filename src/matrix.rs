use crate::scoring::Score;

/// Dense row-major scoring table of `(n + 1) x (m + 1)` cells.
///
/// Dimensions are fixed at construction. All cells start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix<S> {
    data: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: Score> ScoreMatrix<S> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![S::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Table sized for aligning sequences of length `n` and `m`.
    pub fn for_lengths(n: usize, m: usize) -> Self {
        Self::new(n + 1, m + 1)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_for_prefix_lengths() {
        let matrix = ScoreMatrix::<i64>::for_lengths(3, 0);
        assert_eq!(matrix.rows(), 4);
        assert_eq!(matrix.cols(), 1);
        assert!(matrix.iter().all(|&v| v == 0));
    }

    #[test]
    fn row_major_addressing() {
        let mut matrix = ScoreMatrix::<f64>::new(2, 3);
        matrix.set(1, 2, 4.5);
        matrix.set(0, 1, -1.0);
        assert_eq!(matrix.get(1, 2), 4.5);
        assert_eq!(matrix.get(0, 1), -1.0);
        assert_eq!(matrix.get(1, 1), 0.0);
        assert_eq!(matrix.iter().count(), 6);
    }
}
