use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::value::Value;

/// Capability for resolving a dependent field's current value by name.
///
/// Supplied by the host; the engine never inspects object layout itself.
/// Works identically whether the host uses reflection-style lookup, a
/// generated accessor table, or a plain mapping. `resolve` must be a pure
/// read: no mutation of shared state during evaluation.
///
/// Returning `None` means the field name does not exist on the validated
/// object and surfaces as a
/// [`FieldNotFound`](crate::EvalError::FieldNotFound) error. A field that
/// exists but holds no value resolves to `Some(Value::Null)`.
pub trait FieldResolver {
    fn resolve(&self, name: &str) -> Option<Value>;
}

impl<S: BuildHasher> FieldResolver for HashMap<String, Value, S> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl FieldResolver for BTreeMap<String, Value> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<F> FieldResolver for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn resolve(&self, name: &str) -> Option<Value> {
        (self)(name)
    }
}

/// Map-backed [`FieldResolver`] for hosts without their own object model.
///
/// Field names are dot-separated paths like `"user.profile.age"`, stored in
/// nested maps so a whole subtree can be populated piecewise.
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, ContextValue>,
}

#[derive(Debug, Clone)]
enum ContextValue {
    Leaf(Value),
    Nested(HashMap<String, ContextValue>),
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at a dot-separated path. Creates intermediate nested maps
    /// as needed. `None`-style absent values are stored as [`Value::Null`]
    /// via the `Option` conversion.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    pub fn insert(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        Self::insert_recursive(&mut self.data, &segments, value);
    }

    /// Look up a value by dot-separated path.
    /// Returns `None` if the path does not exist or points to a nested map.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments: Vec<&str> = path.split('.').collect();
        Self::get_recursive(&self.data, &segments)
    }

    fn insert_recursive(map: &mut HashMap<String, ContextValue>, segments: &[&str], value: Value) {
        match segments {
            [] => {}
            [last] => {
                map.insert((*last).to_owned(), ContextValue::Leaf(value));
            }
            [first, rest @ ..] => {
                let entry = map
                    .entry((*first).to_owned())
                    .or_insert_with(|| ContextValue::Nested(HashMap::new()));
                match entry {
                    ContextValue::Nested(nested) => {
                        Self::insert_recursive(nested, rest, value);
                    }
                    ContextValue::Leaf(_) => {
                        let mut nested = HashMap::new();
                        Self::insert_recursive(&mut nested, rest, value);
                        *entry = ContextValue::Nested(nested);
                    }
                }
            }
        }
    }

    fn get_recursive<'a>(
        map: &'a HashMap<String, ContextValue>,
        segments: &[&str],
    ) -> Option<&'a Value> {
        match segments {
            [] => None,
            [last] => match map.get(*last)? {
                ContextValue::Leaf(v) => Some(v),
                ContextValue::Nested(_) => None,
            },
            [first, rest @ ..] => match map.get(*first)? {
                ContextValue::Nested(nested) => Self::get_recursive(nested, rest),
                ContextValue::Leaf(_) => None,
            },
        }
    }
}

impl FieldResolver for Context {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}
