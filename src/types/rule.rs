use std::fmt;

use super::error::{ConfigError, EvalError};
use super::formula::Formula;
use super::relation::{Relation, RelationOp, TargetSpec};
use super::resolver::FieldResolver;
use crate::error::ReqwhenError;

/// A declared conditional-requirement rule: "the annotated field is required
/// when this condition over other fields holds".
///
/// Built once per declaration via [`RequirementBuilder`] or
/// [`Requirement::from_parts`]; the formula string is compiled at build time
/// and the resulting AST reused across evaluations. Immutable after
/// construction and safe to share across threads behind `Arc`.
///
/// The single-relation shape carries no formula and answers with slot 0
/// directly; the multi-relation shape combines its slots through the
/// formula. Both funnel through the same predicate pipeline.
///
/// # Example
///
/// ```
/// use reqwhen::{Context, Requirement, RelationOp};
///
/// let requirement = Requirement::builder()
///     .relation("Age", RelationOp::Ge, 18_i64)
///     .relation_eq("Country", "US")
///     .formula("{0} && {1}")
///     .build()
///     .unwrap();
///
/// let ctx = Context::new().set("Age", 20_i64).set("Country", "US");
/// assert!(requirement.is_met(&ctx).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Requirement {
    relations: Vec<Relation>,
    case_sensitive: bool,
    formula: Option<Formula>,
}

impl Requirement {
    #[must_use]
    pub fn builder() -> RequirementBuilder {
        RequirementBuilder::default()
    }

    /// Build from the declaration layer's parallel arrays: one dependent
    /// field name, target, and operator per relation. An empty `operators`
    /// slice means every relation uses the default `Eq`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MismatchedArity`] when the arrays disagree in length,
    /// plus every validation performed by [`RequirementBuilder::build`].
    pub fn from_parts(
        fields: &[&str],
        targets: Vec<TargetSpec>,
        operators: &[RelationOp],
        case_sensitive: bool,
        formula: Option<&str>,
    ) -> Result<Self, ReqwhenError> {
        if fields.len() != targets.len()
            || (!operators.is_empty() && operators.len() != fields.len())
        {
            return Err(ConfigError::MismatchedArity {
                fields: fields.len(),
                targets: targets.len(),
                operators: operators.len(),
            }
            .into());
        }

        let mut builder = Requirement::builder();
        for (i, (field, target)) in fields.iter().zip(targets).enumerate() {
            let op = operators.get(i).copied().unwrap_or_default();
            builder = builder.relation(*field, op, target);
        }
        if let Some(text) = formula {
            builder = builder.formula(text);
        }
        if !case_sensitive {
            builder = builder.case_insensitive();
        }
        builder.build()
    }

    /// Whether the requirement condition currently holds.
    ///
    /// Resolves every relation to a boolean slot, then folds the formula
    /// over the slots; without a formula the single relation's result is
    /// the answer. The domain decision "condition not met means the field
    /// is valid regardless" belongs to the host, one layer above.
    ///
    /// # Errors
    ///
    /// Any [`EvalError`] from predicate resolution or formula reduction.
    pub fn is_met<R: FieldResolver>(&self, resolver: &R) -> Result<bool, EvalError> {
        let slots =
            crate::evaluate::evaluate_predicates(&self.relations, self.case_sensitive, resolver)?;
        match &self.formula {
            Some(formula) => formula.evaluate(&slots),
            None => slots
                .first()
                .copied()
                .ok_or(EvalError::SlotOutOfRange { index: 0, slots: 0 }),
        }
    }

    /// Human-readable rendering of the condition for error messages.
    #[must_use]
    pub fn express(&self) -> String {
        crate::compose::compose(&self.relations, self.formula.as_ref())
    }

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[must_use]
    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.express())
    }
}

/// Consuming builder for [`Requirement`].
///
/// Relations are appended in slot order: the first call defines `{0}`, the
/// second `{1}`, and so on. Comparisons are case-sensitive unless
/// [`case_insensitive`](RequirementBuilder::case_insensitive) is called.
#[derive(Debug, Default)]
pub struct RequirementBuilder {
    relations: Vec<Relation>,
    case_insensitive: bool,
    formula: Option<String>,
}

impl RequirementBuilder {
    /// Append a relation for the next slot.
    #[must_use]
    pub fn relation(
        mut self,
        field: &str,
        op: RelationOp,
        target: impl Into<TargetSpec>,
    ) -> Self {
        self.relations.push(Relation::new(field, op, target));
        self
    }

    /// Append an equality relation for the next slot.
    #[must_use]
    pub fn relation_eq(self, field: &str, target: impl Into<TargetSpec>) -> Self {
        self.relation(field, RelationOp::Eq, target)
    }

    /// Set the boolean formula combining the slots. Compiled at build time.
    #[must_use]
    pub fn formula(mut self, text: &str) -> Self {
        self.formula = Some(text.to_owned());
        self
    }

    /// Fold both sides of string equality comparisons before comparing.
    #[must_use]
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Validate the declaration and compile the formula.
    ///
    /// # Errors
    ///
    /// [`ParseError`](crate::ParseError) for a malformed formula;
    /// [`ConfigError::NoRelations`] for an empty declaration;
    /// [`ConfigError::MissingFormula`] when several relations have no
    /// formula to combine them; [`ConfigError::SlotOutOfRange`] when the
    /// formula references a slot with no relation.
    pub fn build(self) -> Result<Requirement, ReqwhenError> {
        if self.relations.is_empty() {
            return Err(ConfigError::NoRelations.into());
        }

        let formula = match &self.formula {
            Some(text) => Some(crate::parse::compile(text)?),
            None => None,
        };

        match &formula {
            Some(formula) => {
                let max_slot = formula.max_slot();
                if max_slot >= self.relations.len() {
                    return Err(ConfigError::SlotOutOfRange {
                        index: max_slot,
                        relations: self.relations.len(),
                    }
                    .into());
                }
            }
            None => {
                if self.relations.len() > 1 {
                    return Err(ConfigError::MissingFormula {
                        relations: self.relations.len(),
                    }
                    .into());
                }
            }
        }

        Ok(Requirement {
            relations: self.relations,
            case_sensitive: !self.case_insensitive,
            formula,
        })
    }
}
