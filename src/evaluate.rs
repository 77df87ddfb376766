use crate::types::{EvalError, FieldResolver, Formula, Relation, TargetSpec};

/// Compute one boolean per relation, index-aligned with the input slice.
///
/// For each relation the dependent field is resolved first, so an
/// unresolvable name reports [`EvalError::FieldNotFound`] even under a
/// wildcard target. A wildcard then short-circuits to `true` regardless of
/// the operator; a field reference resolves the named field through the
/// same path and compares against its current value.
///
/// Results are computed fresh on every call; nothing is cached.
///
/// # Errors
///
/// [`EvalError::FieldNotFound`] for an unresolvable dependent or referenced
/// field, [`EvalError::IncompatibleComparison`] for an operator applied to
/// values it cannot compare.
pub fn evaluate_predicates<R: FieldResolver>(
    relations: &[Relation],
    case_sensitive: bool,
    resolver: &R,
) -> Result<Vec<bool>, EvalError> {
    relations
        .iter()
        .map(|relation| evaluate_relation(relation, case_sensitive, resolver))
        .collect()
}

fn evaluate_relation<R: FieldResolver>(
    relation: &Relation,
    case_sensitive: bool,
    resolver: &R,
) -> Result<bool, EvalError> {
    let runtime = resolver
        .resolve(&relation.field)
        .ok_or_else(|| EvalError::FieldNotFound {
            field: relation.field.clone(),
        })?;

    let comparand = match &relation.target {
        TargetSpec::Wildcard => return Ok(true),
        TargetSpec::FieldRef(name) => {
            resolver
                .resolve(name)
                .ok_or_else(|| EvalError::FieldNotFound {
                    field: name.clone(),
                })?
        }
        TargetSpec::Literal(value) => value.clone(),
    };

    runtime.compare(relation.op, &comparand, case_sensitive)
}

/// Reduce a compiled formula over the predicate results.
///
/// Purely functional; identical inputs always produce identical results.
/// Both operands of `And`/`Or` are evaluated unconditionally so that a
/// slot-range violation on either side surfaces no matter what the other
/// side evaluates to.
///
/// # Errors
///
/// [`EvalError::SlotOutOfRange`] when the formula references a slot index
/// at or beyond `slots.len()`.
pub fn evaluate(formula: &Formula, slots: &[bool]) -> Result<bool, EvalError> {
    match formula {
        Formula::Slot(index) => slots
            .get(*index)
            .copied()
            .ok_or(EvalError::SlotOutOfRange {
                index: *index,
                slots: slots.len(),
            }),
        Formula::Not(inner) => Ok(!evaluate(inner, slots)?),
        Formula::And(a, b) => {
            let a = evaluate(a, slots)?;
            let b = evaluate(b, slots)?;
            Ok(a && b)
        }
        Formula::Or(a, b) => {
            let a = evaluate(a, slots)?;
            let b = evaluate(b, slots)?;
            Ok(a || b)
        }
    }
}
