//! Declaration compilation.
//!
//! The [`Compiler`] turns one [`Declaration`] into a [`CompiledStyle`]:
//! classify each value, expand shorthands per the configured strategy,
//! flatten conditionals (rewriting overlapping width queries on the way),
//! split the flat selectors, normalize leaf values, assign priorities, and
//! hash identities.
//!
//! The compiler is pure and synchronous: identical input always yields
//! byte-identical output, nothing is read or written, and no state is shared,
//! so one `Compiler` can be used from many threads without locking. Failures
//! abort the whole declaration; partial output is never returned.
//!
//! ## Submodules
//!
//! - [`classify`]: condition classification and recursive flattening
//! - [`media`]: the width-range rewrite for overlapping media queries
//! - [`selector`]: flat condition string decomposition
//! - [`format`]: leaf-value normalization
//! - [`priority`]: total-ordering priority assignment
//! - [`hash`]: content-addressed identity hashing

pub mod classify;
pub mod format;
pub mod hash;
pub mod media;
pub mod priority;
pub mod selector;

use log::{debug, trace};

use crate::error::AcssError;
use crate::shorthand::{Expanded, Expansion, Strategy};
use crate::types::value::DEFAULT_KEY;
use crate::types::{AtomicClass, CompiledStyle, CssValue, Declaration, PropEntry, Value};

pub use format::{ValueFormatter, default_formatter};

/// How a downstream emitter should separate priority bands. Emission-only:
/// the choice never changes priorities or identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerMode {
    /// One stylesheet, rules ordered by priority.
    #[default]
    Priority,
    /// `@layer` blocks, one per priority band.
    CascadeLayers,
}

/// Compiler configuration. Always an explicit value handed to
/// [`Compiler::new`], never ambient state, so differently-configured
/// compilers can coexist in one process.
#[derive(Debug, Clone)]
pub struct CompilerOptions {
    /// Shorthand expansion strategy.
    pub strategy: Strategy,
    /// Class-name prefix prepended to every identity hash.
    pub prefix: String,
    /// Downstream emission mode; carried through, not interpreted here.
    pub layering: LayerMode,
    /// Leaf-value normalizer applied before hashing.
    pub formatter: ValueFormatter,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            prefix: "x".to_string(),
            layering: LayerMode::default(),
            formatter: default_formatter,
        }
    }
}

impl CompilerOptions {
    /// Builds options from a strategy selector string
    /// (`accept` | `flatten` | `forbid`).
    pub fn from_selector(selector: &str) -> Result<Self, AcssError> {
        Ok(Self {
            strategy: selector.parse()?,
            ..Self::default()
        })
    }
}

/// Compiles declarations into atomic classes. Cheap to construct, `Send +
/// Sync`, freely shared across compilation units.
#[derive(Debug, Clone)]
pub struct Compiler {
    options: CompilerOptions,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles one declaration into its ordered atomic class set and merge
    /// fragment. Fails fast on the first invalid entry.
    pub fn compile(&self, declaration: &Declaration) -> Result<CompiledStyle, AcssError> {
        debug!(
            "compiling declaration with {} entries (strategy {:?})",
            declaration.len(),
            self.options.strategy
        );
        let mut compiled = CompiledStyle::default();

        for (property, value) in &declaration.entries {
            match value {
                Value::Literal(literal) => {
                    for (prop, expansion) in self
                        .options
                        .strategy
                        .expand_declaration(property, literal)?
                    {
                        match expansion {
                            Expansion::Value(v) => {
                                self.emit(&prop, &CssValue::Single(v), None, &mut compiled)?;
                            }
                            Expansion::Unset => {
                                trace!("unset {}", prop);
                                compiled.props.set(prop, PropEntry::Removed);
                            }
                        }
                    }
                }
                Value::Fallbacks(list) => {
                    // Fallback chains have no per-token grammar, so the chain
                    // passes through whole; the strategy still decides which
                    // subsumed longhands stop applying.
                    self.options.strategy.check_property(property)?;
                    self.emit(
                        property,
                        &CssValue::Fallbacks(list.clone()),
                        None,
                        &mut compiled,
                    )?;
                    for longhand in self.options.strategy.invalidated_longhands(property) {
                        trace!("unset {}", longhand);
                        compiled.props.set(*longhand, PropEntry::Removed);
                    }
                }
                Value::Conditional(branches) => {
                    classify::check_condition_keys(property, branches)?;
                    for (prop, conditions) in self
                        .options
                        .strategy
                        .expand_conditions(property, branches)?
                    {
                        self.compile_conditional(&prop, conditions, &mut compiled)?;
                    }
                }
            }
        }

        debug!(
            "compiled {} classes, {} prop keys",
            compiled.classes.len(),
            compiled.props.len()
        );
        Ok(compiled)
    }

    fn compile_conditional(
        &self,
        property: &str,
        conditions: Vec<(String, Expanded)>,
        compiled: &mut CompiledStyle,
    ) -> Result<(), AcssError> {
        // Unset branches bypass flattening: they become removed keys directly.
        let mut value_branches: Vec<(String, Value)> = Vec::new();
        let mut unset_keys: Vec<String> = Vec::new();
        for (condition, expanded) in conditions {
            match expanded {
                Expanded::Value(value) => value_branches.push((condition, value)),
                Expanded::Unset => {
                    let key = if condition == DEFAULT_KEY {
                        property.to_string()
                    } else {
                        format!("{}{}", property, condition)
                    };
                    unset_keys.push(key);
                }
            }
        }

        if !value_branches.is_empty() {
            let conditional = Value::Conditional(value_branches);
            for entry in classify::flatten(property, &conditional, None)? {
                self.emit(property, &entry.value, entry.selector.as_deref(), compiled)?;
            }
        }
        for key in unset_keys {
            trace!("unset {}", key);
            compiled.props.set(key, PropEntry::Removed);
        }
        Ok(())
    }

    /// Builds one atomic class and records it in the class list (identity
    /// de-duplicated) and the merge fragment (exact key, last write wins).
    fn emit(
        &self,
        property: &str,
        value: &CssValue,
        flat_selector: Option<&str>,
        compiled: &mut CompiledStyle,
    ) -> Result<(), AcssError> {
        let normalized = self.normalize(property, value);
        let parts = selector::split_flat_selector(flat_selector.unwrap_or(""));

        let hash_value = match &normalized {
            CssValue::Single(s) => Value::Literal(s.clone()),
            CssValue::Fallbacks(list) => Value::Fallbacks(list.clone()),
        };
        let identity = hash::identity_for(
            &self.options.prefix,
            property,
            &hash_value,
            parts.pseudo_classes.as_deref(),
            parts.pseudo_element.as_deref(),
            parts.at_rule.as_deref(),
        )?;

        let priority = priority::priority(
            property,
            parts.pseudo_classes.as_deref(),
            parts.pseudo_element.as_deref(),
            parts.at_rule.as_deref(),
        );

        let key = match flat_selector {
            Some(selector) => format!("{}{}", property, selector),
            None => property.to_string(),
        };
        trace!("emit {} -> {} (priority {})", key, identity, priority);
        compiled.props.set(key, PropEntry::Present(identity.clone()));

        if compiled.classes.iter().any(|c| c.identity == identity) {
            return Ok(());
        }
        compiled.classes.push(AtomicClass {
            identity,
            property: property.to_string(),
            value: normalized,
            selector_suffix: parts.pseudo_classes,
            pseudo_element: parts.pseudo_element,
            at_rule: parts.at_rule,
            priority,
        });
        Ok(())
    }

    fn normalize(&self, property: &str, value: &CssValue) -> CssValue {
        let formatter = self.options.formatter;
        match value {
            CssValue::Single(s) => CssValue::Single(formatter(property, s)),
            CssValue::Fallbacks(list) => CssValue::Fallbacks(
                list.iter().map(|v| formatter(property, v)).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler() -> Compiler {
        Compiler::new(CompilerOptions::default())
    }

    #[test]
    fn plain_declaration_compiles_to_one_class_per_property() {
        let mut declaration = Declaration::new();
        declaration.push("color", "red").push("display", "flex");
        let compiled = compiler().compile(&declaration).unwrap();

        assert_eq!(compiled.classes.len(), 2);
        assert_eq!(compiled.props.len(), 2);
        assert!(matches!(
            compiled.props.get("color"),
            Some(PropEntry::Present(_))
        ));
    }

    #[test]
    fn identical_rules_share_one_class() {
        let mut declaration = Declaration::new();
        declaration.push("color", "red").push("color", "red");
        let compiled = compiler().compile(&declaration).unwrap();

        assert_eq!(compiled.classes.len(), 1);
        assert_eq!(compiled.props.len(), 1);
    }

    #[test]
    fn conditional_keys_stay_independent() {
        let mut declaration = Declaration::new();
        declaration.push(
            "color",
            Value::conditional([
                ("default", Value::literal("red")),
                (":hover", Value::literal("blue")),
            ]),
        );
        let compiled = compiler().compile(&declaration).unwrap();

        assert_eq!(compiled.classes.len(), 2);
        assert!(compiled.props.contains_key("color"));
        assert!(compiled.props.contains_key("color:hover"));
    }

    #[test]
    fn compile_is_deterministic() {
        let mut declaration = Declaration::new();
        declaration.push("margin", "10px 20px").push(
            "color",
            Value::conditional([
                ("default", Value::literal("red")),
                ("@media (min-width: 1000px)", Value::literal("blue")),
            ]),
        );
        let a = compiler().compile(&declaration).unwrap();
        let b = compiler().compile(&declaration).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn failure_returns_no_partial_output() {
        let mut declaration = Declaration::new();
        declaration.push("color", "red").push(
            "background-color",
            Value::conditional([("oops".to_string(), Value::literal("blue"))]),
        );
        let result = compiler().compile(&declaration);
        assert!(result.is_err());
    }
}
