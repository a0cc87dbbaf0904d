use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collaborator::Assemble;
use crate::error::NormError;

/// [`ScalarReducer`] の設定。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReducerConfig {
    /// 組立値がこの大きさまでの負値なら丸め誤差として 0 に丸める。
    pub negative_tolerance: f64,
}

impl ReducerConfig {
    pub const DEFAULT_NEGATIVE_TOLERANCE: f64 = 1e-12;
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            negative_tolerance: Self::DEFAULT_NEGATIVE_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReducerConfigError {
    #[error("negative tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// 積分式を組み立てて平方根をとる最終段。
///
/// 組立値 `v` に対して
/// - `v >= 0` なら `sqrt(v)`
/// - `-tol <= v < 0` なら 0（相殺誤差）
/// - `v < -tol` または非有限なら [`NormError::NumericalDomain`]
///
/// 組立の失敗は再試行せず [`NormError::Assembly`] としてそのまま返す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarReducer {
    tolerance: f64,
}

impl ScalarReducer {
    pub fn new(config: ReducerConfig) -> Result<Self, ReducerConfigError> {
        let tol = config.negative_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(ReducerConfigError::InvalidTolerance(tol));
        }
        Ok(Self { tolerance: tol })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn reduce<F, S>(&self, assembler: &S, form: &F) -> Result<f64, NormError<S::Error>>
    where
        S: Assemble<F>,
    {
        let value = assembler.assemble(form, None).map_err(NormError::Assembly)?;
        debug!(value, "assembled squared norm");
        self.close(value)
    }

    /// 組立値に平方根の閉じ変換を適用する。
    pub fn close<E>(&self, value: f64) -> Result<f64, NormError<E>> {
        if !value.is_finite() || value < -self.tolerance {
            return Err(NormError::NumericalDomain {
                value,
                tolerance: self.tolerance,
            });
        }
        if value < 0.0 {
            debug!(value, tolerance = self.tolerance, "clamping cancellation error to zero");
            return Ok(0.0);
        }
        Ok(value.sqrt())
    }
}

impl Default for ScalarReducer {
    fn default() -> Self {
        Self {
            tolerance: ReducerConfig::DEFAULT_NEGATIVE_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedAssembler, SymForm, SymbolicError};

    fn reduce(value: f64) -> Result<f64, NormError<SymbolicError>> {
        ScalarReducer::default().reduce(&FixedAssembler::returning(value), &SymForm::default())
    }

    #[test]
    fn takes_square_root() {
        assert!((reduce(4.0).unwrap() - 2.0).abs() < 1e-15);
        assert_eq!(reduce(0.0).unwrap(), 0.0);
    }

    #[test]
    fn clamps_small_negative_to_zero() {
        assert_eq!(reduce(-1e-13).unwrap(), 0.0);
        assert_eq!(reduce(-1e-12).unwrap(), 0.0);
    }

    #[test]
    fn rejects_negative_beyond_tolerance() {
        let err = reduce(-1e-6).unwrap_err();
        assert!(matches!(
            err,
            NormError::NumericalDomain { value, tolerance } if value == -1e-6 && tolerance == 1e-12
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(reduce(f64::NAN), Err(NormError::NumericalDomain { .. })));
        assert!(matches!(reduce(f64::INFINITY), Err(NormError::NumericalDomain { .. })));
    }

    #[test]
    fn assembly_failure_passes_through() {
        let assembler = FixedAssembler::failing();
        let err = ScalarReducer::default()
            .reduce(&assembler, &SymForm::default())
            .unwrap_err();
        assert!(matches!(err, NormError::Assembly(SymbolicError::Quadrature)));
        assert_eq!(assembler.calls.get(), 1);
    }

    #[test]
    fn custom_tolerance() {
        let reducer = ScalarReducer::new(ReducerConfig {
            negative_tolerance: 1e-6,
        })
        .unwrap();
        assert_eq!(reducer.close::<SymbolicError>(-1e-7).unwrap(), 0.0);
        assert!(reducer.close::<SymbolicError>(-1e-5).is_err());
    }

    #[test]
    fn rejects_invalid_tolerance() {
        for tol in [-1.0, f64::NAN, f64::INFINITY] {
            let err = ScalarReducer::new(ReducerConfig {
                negative_tolerance: tol,
            });
            assert!(err.is_err(), "tolerance {tol} accepted");
        }
    }
}
