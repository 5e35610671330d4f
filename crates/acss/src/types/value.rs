//! Structured style values.
//!
//! Declarations arrive as already-structured key/value data (there is no CSS
//! text parser here). A value is either a plain literal, an ordered fallback
//! list, or a condition set mapping pseudo/at-rule keys to nested values.

/// The condition key that carries the unconditional branch of a condition set.
pub const DEFAULT_KEY: &str = "default";

/// A structured style value.
///
/// `Conditional` entries are ordered and may nest arbitrarily, e.g. a media
/// query containing a `:hover` branch. The key `"default"` marks the branch
/// that applies when no condition matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single concrete CSS value, e.g. `"10px"` or `"rgb(0 0 0 / 0.5)"`.
    Literal(String),
    /// An ordered fallback chain, first-preferred (e.g. `sticky` with a
    /// `-webkit-sticky` fallback). Every entry is a concrete value.
    Fallbacks(Vec<String>),
    /// An ordered set of `(condition key, value)` branches. Keys are either
    /// the default marker or selector tokens starting with `:` or `@`.
    Conditional(Vec<(String, Value)>),
}

impl Value {
    /// Convenience constructor for a literal value.
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }

    /// Convenience constructor for a fallback chain.
    pub fn fallbacks<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Fallbacks(values.into_iter().map(Into::into).collect())
    }

    /// Convenience constructor for a condition set.
    pub fn conditional<I, S>(branches: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Value::Conditional(
            branches
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

/// An ordered list of `(property, value)` pairs, property names in canonical
/// dash form. Produced once by an external collection step and compiled once;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    pub entries: Vec<(String, Value)>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property/value pair, preserving declaration order.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.push((property.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<P: Into<String>, V: Into<Value>> FromIterator<(P, V)> for Declaration {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        Declaration {
            entries: iter
                .into_iter()
                .map(|(p, v)| (p.into(), v.into()))
                .collect(),
        }
    }
}
