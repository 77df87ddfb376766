mod compose;
mod error;
mod evaluate;
mod parse;
mod types;

pub use compose::compose;
pub use error::ReqwhenError;
pub use evaluate::{evaluate, evaluate_predicates};
pub use parse::{compile, Location, ParseError};
pub use types::{
    slot, ConfigError, Context, EvalError, FieldResolver, Formula, Relation, RelationOp,
    Requirement, RequirementBuilder, TargetSpec, Value,
};
