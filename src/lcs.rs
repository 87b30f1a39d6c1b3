//! Longest common subsequence over a single prefix-length table.

use log::debug;

use crate::matrix::ScoreMatrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsResult<T> {
    pub length: usize,
    pub subsequence: Vec<T>,
}

/// LCS with unit scoring: +1 per matched symbol, 0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsEngine;

impl LcsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Forward pass. `s[i][j]` is the LCS length of `v[..i]` and `w[..j]`.
    pub fn fill<T: PartialEq>(&self, v: &[T], w: &[T]) -> ScoreMatrix<usize> {
        let mut s: ScoreMatrix<usize> = ScoreMatrix::for_lengths(v.len(), w.len());

        for i in 1..=v.len() {
            for j in 1..=w.len() {
                let value = if v[i - 1] == w[j - 1] {
                    s.get(i - 1, j - 1) + 1
                } else {
                    s.get(i - 1, j).max(s.get(i, j - 1))
                };
                s.set(i, j, value);
            }
        }
        s
    }

    /// Walks back from `(n, m)`. On a mismatch the walk moves up only when the
    /// upper cell is strictly larger, otherwise left.
    pub fn compute<T: PartialEq + Clone>(&self, v: &[T], w: &[T]) -> LcsResult<T> {
        let s = self.fill(v, w);
        let length = s.get(v.len(), w.len());

        let mut subsequence = Vec::with_capacity(length);
        let (mut i, mut j) = (v.len(), w.len());
        while i > 0 && j > 0 {
            if v[i - 1] == w[j - 1] {
                subsequence.push(v[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if s.get(i - 1, j) > s.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        subsequence.reverse();

        debug!("LCS of {}x{} symbols has length {}", v.len(), w.len(), length);
        LcsResult {
            length,
            subsequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence(needle: &[u8], haystack: &[u8]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|c| rest.any(|h| h == c))
    }

    #[test]
    fn classic_pair() {
        let result = LcsEngine::new().compute(b"ACADB", b"CBDA");
        assert_eq!(result.length, 2);
        assert_eq!(result.subsequence.len(), 2);
        assert!(is_subsequence(&result.subsequence, b"ACADB"));
        assert!(is_subsequence(&result.subsequence, b"CBDA"));
    }

    #[test]
    fn tie_break_prefers_left_move() {
        // AD, CA, CB and CD are all optimal; equal neighbours step left.
        let result = LcsEngine::new().compute(b"ACADB", b"CBDA");
        assert_eq!(result.subsequence, b"CB".to_vec());
    }

    #[test]
    fn symmetric_length() {
        let engine = LcsEngine::new();
        let pairs: [(&[u8], &[u8]); 3] = [
            (b"AGGTAB", b"GXTXAYB"),
            (b"ACADB", b"CBDA"),
            (b"XMJYAUZ", b"MZJAWXU"),
        ];
        for (v, w) in pairs {
            let forward = engine.compute(v, w);
            let backward = engine.compute(w, v);
            assert_eq!(forward.length, backward.length);
            assert!(is_subsequence(&backward.subsequence, v));
            assert!(is_subsequence(&backward.subsequence, w));
        }
    }

    #[test]
    fn known_lengths() {
        let engine = LcsEngine::new();
        let result = engine.compute(b"AGGTAB", b"GXTXAYB");
        assert_eq!(result.length, 4);
        assert_eq!(result.subsequence, b"GTAB".to_vec());
        assert_eq!(engine.compute(b"XMJYAUZ", b"MZJAWXU").length, 4);
    }

    #[test]
    fn length_bounded_by_shorter_input() {
        let engine = LcsEngine::new();
        let result = engine.compute(b"AAAA", b"AA");
        assert_eq!(result.length, 2);
        assert_eq!(result.subsequence, b"AA".to_vec());
        assert!(engine.compute(b"ABC", b"ABC").length <= 3);
    }

    #[test]
    fn no_common_symbol() {
        let result = LcsEngine::new().compute(b"ABC", b"XYZ");
        assert_eq!(result.length, 0);
        assert!(result.subsequence.is_empty());
    }

    #[test]
    fn empty_inputs() {
        let engine = LcsEngine::new();
        let empty: &[u8] = b"";
        assert_eq!(engine.compute(empty, b"ABC").length, 0);
        assert_eq!(engine.compute(b"ABC", empty).length, 0);
        let both = engine.compute(empty, empty);
        assert_eq!(both.length, 0);
        assert!(both.subsequence.is_empty());
    }

    #[test]
    fn works_on_tokens() {
        let v = ["the", "quick", "brown", "fox"];
        let w = ["a", "quick", "red", "fox"];
        let result = LcsEngine::new().compute(&v, &w);
        assert_eq!(result.subsequence, vec!["quick", "fox"]);
    }

    #[test]
    fn table_base_cases_are_zero() {
        let s = LcsEngine::new().fill(b"AB", b"ABC");
        assert!((0..s.rows()).all(|i| s.get(i, 0) == 0));
        assert!((0..s.cols()).all(|j| s.get(0, j) == 0));
        assert_eq!(s.get(2, 3), 2);
    }

    #[test]
    fn deterministic() {
        let engine = LcsEngine::new();
        assert_eq!(
            engine.compute(b"GCATGCU", b"GATTACA"),
            engine.compute(b"GCATGCU", b"GATTACA")
        );
    }
}
