//! Shorthand-property expansion strategies.
//!
//! A shorthand declaration (`margin: 10px 20px`) cannot become one atomic
//! class without deciding how it interacts with longhand declarations of the
//! same box. Three interchangeable strategies exist, chosen once at compiler
//! construction:
//!
//! - [`Strategy::Accept`]: the shorthand passes through as one class, and
//!   every longhand it subsumes is explicitly unset so a previously declared
//!   longhand stops applying.
//! - [`Strategy::Flatten`]: the shorthand is fully expanded into longhand
//!   classes via per-property value parsing.
//! - [`Strategy::Forbid`]: ambiguous shorthands are rejected outright with
//!   the safe longhand replacements named in the error.
//!
//! All strategies are pure functions over their inputs; there is no shared
//! state and nothing to configure beyond the variant itself.

pub mod accept;
pub mod flatten;
pub mod forbid;
pub mod tables;

use std::str::FromStr;

use crate::error::AcssError;
use crate::types::Value;

/// One expanded output of [`Strategy::expand_declaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A concrete value for the resulting property.
    Value(String),
    /// An explicit unset marker: the property must stop applying.
    Unset,
}

/// One expanded branch of [`Strategy::expand_conditions`]: either a (possibly
/// still nested) value or an explicit unset marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expanded {
    Value(Value),
    Unset,
}

/// The closed set of shorthand strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Accept,
    Flatten,
    Forbid,
}

impl FromStr for Strategy {
    type Err = AcssError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "accept" => Ok(Strategy::Accept),
            "flatten" => Ok(Strategy::Flatten),
            "forbid" => Ok(Strategy::Forbid),
            other => Err(AcssError::Configuration(other.to_string())),
        }
    }
}

impl Strategy {
    /// Expands one plain `(property, value)` declaration into an ordered list
    /// of concrete property declarations.
    pub fn expand_declaration(
        &self,
        property: &str,
        value: &str,
    ) -> Result<Vec<(String, Expansion)>, AcssError> {
        match self {
            Strategy::Accept => Ok(accept::expand(property, value)),
            Strategy::Flatten => Ok(flatten::expand(property, value)),
            Strategy::Forbid => forbid::expand(property, value),
        }
    }

    /// Validates a property without expanding it. Used for values (fallback
    /// chains) whose shape a strategy passes through but whose property must
    /// still clear the Forbid denylist.
    pub fn check_property(&self, property: &str) -> Result<(), AcssError> {
        match self {
            Strategy::Forbid => forbid::check(property),
            _ => Ok(()),
        }
    }

    /// The longhands that must stop applying when `property` is declared with
    /// a value the strategy passes through whole. Only Accept keeps the
    /// shorthand as-is, so only Accept invalidates.
    pub fn invalidated_longhands(&self, property: &str) -> &'static [&'static str] {
        match self {
            Strategy::Accept => accept::subsumed_longhands(property),
            _ => &[],
        }
    }

    /// Expands a condition set's values independently and re-groups the
    /// results by resulting property. Property order is first-seen; condition
    /// order within each property follows the input.
    pub fn expand_conditions(
        &self,
        property: &str,
        branches: &[(String, Value)],
    ) -> Result<Vec<(String, Vec<(String, Expanded)>)>, AcssError> {
        match self {
            Strategy::Accept => Ok(accept::expand_conditions(property, branches)),
            Strategy::Flatten => flatten::expand_conditions(property, branches),
            Strategy::Forbid => {
                forbid::check(property)?;
                Ok(vec![(
                    property.to_string(),
                    branches
                        .iter()
                        .map(|(cond, value)| (cond.clone(), Expanded::Value(value.clone())))
                        .collect(),
                )])
            }
        }
    }
}

/// Groups `(property, condition, branch)` triples by property, preserving
/// first-seen property order and per-property condition order.
pub(crate) fn group_by_property(
    triples: impl IntoIterator<Item = (String, String, Expanded)>,
) -> Vec<(String, Vec<(String, Expanded)>)> {
    let mut grouped: Vec<(String, Vec<(String, Expanded)>)> = Vec::new();
    for (property, condition, branch) in triples {
        match grouped.iter_mut().find(|(p, _)| *p == property) {
            Some((_, branches)) => branches.push((condition, branch)),
            None => grouped.push((property, vec![(condition, branch)])),
        }
    }
    grouped
}
