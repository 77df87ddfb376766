use std::fmt;

use super::error::EvalError;
use super::relation::RelationOp;

/// Runtime value of a dependent field or comparison target.
///
/// `Null` models a field that resolves but currently holds no value (an
/// unset optional), which is distinct from a field name that does not
/// resolve at all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// An explicitly absent value.
    Null,
}

impl Value {
    /// Compare this value to another using the given operator.
    ///
    /// Mixed Int/Float operands are widened to `f64` before comparing.
    /// String equality folds both sides to lowercase when `case_sensitive`
    /// is false; string ordering is always ordinal. Booleans and `Null`
    /// support equality only, and equality across disjoint types is plain
    /// inequality rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::IncompatibleComparison`] when an ordering
    /// operator is applied to operands that have no ordering: booleans,
    /// `Null`, or values of different types.
    pub fn compare(
        &self,
        op: RelationOp,
        other: &Value,
        case_sensitive: bool,
    ) -> Result<bool, EvalError> {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                Ok(compare_numeric(op, self.widen(), other.widen()))
            }
            (Value::String(a), Value::String(b)) => Ok(compare_strings(op, a, b, case_sensitive)),
            (Value::Bool(a), Value::Bool(b)) => match op {
                RelationOp::Eq => Ok(a == b),
                RelationOp::Ne => Ok(a != b),
                _ => Err(self.incompatible(op, other)),
            },
            (Value::Null, Value::Null) => match op {
                RelationOp::Eq => Ok(true),
                RelationOp::Ne => Ok(false),
                _ => Err(self.incompatible(op, other)),
            },
            _ => match op {
                // Disjoint types (Null among them) are never equal.
                RelationOp::Eq => Ok(false),
                RelationOp::Ne => Ok(true),
                _ => Err(self.incompatible(op, other)),
            },
        }
    }

    /// Widen a numeric value to `f64`. Callers guarantee Int or Float.
    #[allow(clippy::cast_precision_loss)]
    fn widen(&self) -> f64 {
        match self {
            Value::Int(v) => *v as f64,
            Value::Float(v) => *v,
            _ => f64::NAN,
        }
    }

    fn incompatible(&self, op: RelationOp, other: &Value) -> EvalError {
        EvalError::IncompatibleComparison {
            op,
            left: self.type_name(),
            right: other.type_name(),
        }
    }

    /// Short type label used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Null => "null",
        }
    }
}

fn compare_numeric(op: RelationOp, a: f64, b: f64) -> bool {
    match op {
        RelationOp::Eq => a == b,
        RelationOp::Ne => a != b,
        RelationOp::Gt => a > b,
        RelationOp::Ge => a >= b,
        RelationOp::Lt => a < b,
        RelationOp::Le => a <= b,
    }
}

fn compare_strings(op: RelationOp, a: &str, b: &str, case_sensitive: bool) -> bool {
    match op {
        RelationOp::Eq | RelationOp::Ne => {
            let eq = if case_sensitive {
                a == b
            } else {
                a.to_lowercase() == b.to_lowercase()
            };
            (op == RelationOp::Eq) == eq
        }
        RelationOp::Gt => a > b,
        RelationOp::Ge => a >= b,
        RelationOp::Lt => a < b,
        RelationOp::Le => a <= b,
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{v}'"),
            Value::Null => write!(f, "null"),
        }
    }
}
