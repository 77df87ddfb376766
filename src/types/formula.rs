use std::fmt;
use std::ops::Not;

/// Compiled boolean-formula AST.
///
/// Leaves are positional [`Slot`](Formula::Slot) references into the
/// per-relation predicate results computed at evaluation time. The tree is
/// immutable pure data: safe to share across threads and reuse across
/// evaluations. Produced by [`compile`](crate::compile) or built directly
/// with [`slot`] and the combinator methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// The boolean computed for the dependent field at this position.
    Slot(usize),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

/// Build a slot-reference leaf.
#[must_use]
pub fn slot(index: usize) -> Formula {
    Formula::Slot(index)
}

impl Formula {
    #[must_use]
    pub fn and(self, other: Formula) -> Formula {
        Formula::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: Formula) -> Formula {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// Evaluate against the predicate results, one boolean per slot.
    ///
    /// Both operands of `And`/`Or` are always evaluated so a slot-range
    /// violation surfaces regardless of the other side's value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::SlotOutOfRange`](crate::EvalError::SlotOutOfRange)
    /// when the formula references a slot beyond `slots.len()`.
    pub fn evaluate(&self, slots: &[bool]) -> Result<bool, crate::types::EvalError> {
        crate::evaluate::evaluate(self, slots)
    }

    /// The highest slot index referenced anywhere in the tree.
    #[must_use]
    pub fn max_slot(&self) -> usize {
        match self {
            Formula::Slot(index) => *index,
            Formula::Not(inner) => inner.max_slot(),
            Formula::And(a, b) | Formula::Or(a, b) => a.max_slot().max(b.max_slot()),
        }
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::Not(Box::new(self))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Slot(index) => write!(f, "{{{index}}}"),
            Formula::Not(inner) => match **inner {
                // The grammar has no grouping operator, so a negated binary
                // node cannot round-trip; parenthesize for readability.
                Formula::And(..) | Formula::Or(..) => write!(f, "!({inner})"),
                _ => write!(f, "!{inner}"),
            },
            Formula::And(a, b) => {
                fmt_and_operand(f, a)?;
                write!(f, " && ")?;
                fmt_and_operand(f, b)
            }
            Formula::Or(a, b) => write!(f, "{a} || {b}"),
        }
    }
}

/// Write an `&&` operand, parenthesizing `||` children which bind looser.
fn fmt_and_operand(f: &mut fmt::Formatter<'_>, node: &Formula) -> fmt::Result {
    match node {
        Formula::Or(..) => write!(f, "({node})"),
        _ => write!(f, "{node}"),
    }
}
