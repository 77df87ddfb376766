use thiserror::Error;

use super::relation::RelationOp;

/// Mistakes in a rule's declaration, caught when the rule is built.
///
/// These are programming errors by the rule author, not runtime data
/// issues, and are surfaced as hard failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("mismatched rule arity: {fields} fields, {targets} targets, {operators} operators")]
    MismatchedArity {
        fields: usize,
        targets: usize,
        operators: usize,
    },

    #[error("unknown relational operator `{token}`")]
    UnknownOperator { token: String },

    #[error("a requirement needs at least one relation")]
    NoRelations,

    #[error("{relations} relations declared but no formula to combine them")]
    MissingFormula { relations: usize },

    #[error("formula references slot {{{index}}} but only {relations} relations are declared")]
    SlotOutOfRange { index: usize, relations: usize },
}

/// Runtime failures while evaluating a requirement against a field resolver.
///
/// Nothing here is downgraded to a default boolean: an unresolvable field,
/// a slot beyond the predicate count, and an operator applied to values it
/// cannot order are all surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("field '{field}' does not resolve on the validated object")]
    FieldNotFound { field: String },

    #[error("formula references slot {{{index}}} but only {slots} predicate results were supplied")]
    SlotOutOfRange { index: usize, slots: usize },

    #[error("operator {op} cannot compare {left} and {right}")]
    IncompatibleComparison {
        op: RelationOp,
        left: &'static str,
        right: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_arity_message() {
        let err = ConfigError::MismatchedArity {
            fields: 2,
            targets: 1,
            operators: 2,
        };
        assert_eq!(
            err.to_string(),
            "mismatched rule arity: 2 fields, 1 targets, 2 operators"
        );
    }

    #[test]
    fn unknown_operator_message() {
        let err = ConfigError::UnknownOperator {
            token: "=".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown relational operator `=`");
    }

    #[test]
    fn config_slot_out_of_range_message() {
        let err = ConfigError::SlotOutOfRange {
            index: 2,
            relations: 2,
        };
        assert_eq!(
            err.to_string(),
            "formula references slot {2} but only 2 relations are declared"
        );
    }

    #[test]
    fn field_not_found_message() {
        let err = EvalError::FieldNotFound {
            field: "Country".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "field 'Country' does not resolve on the validated object"
        );
    }

    #[test]
    fn incompatible_comparison_message() {
        let err = EvalError::IncompatibleComparison {
            op: RelationOp::Gt,
            left: "bool",
            right: "bool",
        };
        assert_eq!(err.to_string(), "operator > cannot compare bool and bool");
    }
}
