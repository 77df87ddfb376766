use thiserror::Error;

use crate::parse::ParseError;
use crate::types::{ConfigError, EvalError};

/// Unified error type covering formula compilation, rule configuration,
/// and evaluation.
///
/// Returned by the entry points that cross layers, such as
/// [`RequirementBuilder::build()`](crate::RequirementBuilder::build).
#[derive(Debug, Error)]
pub enum ReqwhenError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
