use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use super::value::Value;

/// Relational operators supported in predicate comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationOp {
    #[default]
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl fmt::Display for RelationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationOp::Eq => write!(f, "=="),
            RelationOp::Ne => write!(f, "!="),
            RelationOp::Gt => write!(f, ">"),
            RelationOp::Ge => write!(f, ">="),
            RelationOp::Lt => write!(f, "<"),
            RelationOp::Le => write!(f, "<="),
        }
    }
}

impl FromStr for RelationOp {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "==" => Ok(RelationOp::Eq),
            "!=" => Ok(RelationOp::Ne),
            ">" => Ok(RelationOp::Gt),
            ">=" => Ok(RelationOp::Ge),
            "<" => Ok(RelationOp::Lt),
            "<=" => Ok(RelationOp::Le),
            other => Err(ConfigError::UnknownOperator {
                token: other.to_owned(),
            }),
        }
    }
}

/// What a dependent field's runtime value is compared against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSpec {
    /// A fixed comparison value.
    Literal(Value),
    /// Matches unconditionally, regardless of the operator. Used when only
    /// the field's participation in the formula matters, not its value.
    Wildcard,
    /// Dereference another field at evaluation time and compare against its
    /// current value instead of a constant.
    FieldRef(String),
}

impl TargetSpec {
    /// Interpret a declaration-layer target string: `"*"` is the wildcard,
    /// `"[Name]"` dereferences the field `Name`, anything else is a string
    /// literal.
    #[must_use]
    pub fn parse(text: &str) -> TargetSpec {
        if text == "*" {
            TargetSpec::Wildcard
        } else if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
            TargetSpec::FieldRef(text[1..text.len() - 1].to_owned())
        } else {
            TargetSpec::Literal(Value::String(text.to_owned()))
        }
    }
}

impl From<Value> for TargetSpec {
    fn from(v: Value) -> Self {
        TargetSpec::Literal(v)
    }
}

impl From<i64> for TargetSpec {
    fn from(v: i64) -> Self {
        TargetSpec::Literal(Value::Int(v))
    }
}

impl From<f64> for TargetSpec {
    fn from(v: f64) -> Self {
        TargetSpec::Literal(Value::Float(v))
    }
}

impl From<bool> for TargetSpec {
    fn from(v: bool) -> Self {
        TargetSpec::Literal(Value::Bool(v))
    }
}

impl From<&str> for TargetSpec {
    fn from(v: &str) -> Self {
        TargetSpec::Literal(Value::String(v.to_owned()))
    }
}

impl From<String> for TargetSpec {
    fn from(v: String) -> Self {
        TargetSpec::Literal(Value::String(v))
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSpec::Literal(value) => write!(f, "{value}"),
            TargetSpec::Wildcard => write!(f, "*"),
            TargetSpec::FieldRef(name) => write!(f, "[{name}]"),
        }
    }
}

/// One dependent-field condition: compare `field`'s runtime value against
/// `target` using `op`. A requirement holds an ordered list of these; the
/// formula's slot indices refer to positions in that list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    pub field: String,
    pub op: RelationOp,
    pub target: TargetSpec,
}

impl Relation {
    pub fn new(field: impl Into<String>, op: RelationOp, target: impl Into<TargetSpec>) -> Self {
        Self {
            field: field.into(),
            op,
            target: target.into(),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} {} {}", self.field, self.op, self.target)
    }
}
