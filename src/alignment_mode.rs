use std::fmt;

use crate::scoring::{AffineScoring, LinearScoring};
use crate::AlignerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Longest common subsequence
    Lcs,
    /// Needleman-Wunsch
    Global,
    /// Gotoh, floored at zero
    LocalAffine,
}

impl AlignmentMode {
    pub fn name(&self) -> &'static str {
        match self {
            AlignmentMode::Lcs => "lcs",
            AlignmentMode::Global => "global",
            AlignmentMode::LocalAffine => "local",
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode together with the weights it needs. Global weights are integers
/// and local affine weights are reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentParams {
    Lcs,
    Global(LinearScoring<i64>),
    LocalAffine(AffineScoring<f64>),
}

impl AlignmentParams {
    pub fn mode(&self) -> AlignmentMode {
        match self {
            AlignmentParams::Lcs => AlignmentMode::Lcs,
            AlignmentParams::Global(_) => AlignmentMode::Global,
            AlignmentParams::LocalAffine(_) => AlignmentMode::LocalAffine,
        }
    }

    pub(crate) fn check_finite(&self) -> Result<(), AlignerError> {
        let name = match self {
            AlignmentParams::Lcs => None,
            AlignmentParams::Global(scoring) => scoring.non_finite(),
            AlignmentParams::LocalAffine(scoring) => scoring.non_finite(),
        };
        match name {
            Some(name) => Err(AlignerError::NonFiniteParameter { name }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_subcommands() {
        assert_eq!(AlignmentMode::Lcs.to_string(), "lcs");
        assert_eq!(AlignmentMode::Global.to_string(), "global");
        assert_eq!(AlignmentMode::LocalAffine.name(), "local");
    }

    #[test]
    fn params_report_mode() {
        assert_eq!(AlignmentParams::Lcs.mode(), AlignmentMode::Lcs);
        assert_eq!(
            AlignmentParams::Global(LinearScoring::new(1, -1, -2)).mode(),
            AlignmentMode::Global
        );
    }

    #[test]
    fn non_finite_local_weight_rejected() {
        let params = AlignmentParams::LocalAffine(AffineScoring::new(1.0, -1.0, f64::NAN, -1.0));
        assert!(matches!(
            params.check_finite(),
            Err(AlignerError::NonFiniteParameter { name: "gap-open" })
        ));
        assert!(AlignmentParams::Lcs.check_finite().is_ok());
    }
}
