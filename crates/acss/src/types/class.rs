//! The atomic class record.

/// A concrete, flattened CSS value: either a single literal or an ordered
/// fallback chain (first-preferred). Conditional values never reach this type;
/// flattening resolves them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssValue {
    Single(String),
    Fallbacks(Vec<String>),
}

impl CssValue {
    /// The canonical string form used for hashing and comparison.
    /// Fallback chains join with `", "` so that ordering is significant.
    pub fn canonical(&self) -> String {
        match self {
            CssValue::Single(s) => s.clone(),
            CssValue::Fallbacks(list) => list.join(", "),
        }
    }
}

/// One single-purpose CSS rule, content-addressed by its fields.
///
/// Two declarations that normalize to the same
/// `(property, value, selector_suffix, at_rule)` tuple always share one
/// `identity`; any difference in any field yields a different identity. This
/// is what makes atomic classes cacheable across builds and de-duplicable
/// within one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicClass {
    /// Stable short identifier: configured prefix + base36 hash.
    pub identity: String,
    /// The base property this rule sets, canonical dash form.
    pub property: String,
    /// The normalized value (single literal or fallback chain).
    pub value: CssValue,
    /// Pseudo-class suffix (e.g. `":hover"` or `":hover:active"`), if any.
    pub selector_suffix: Option<String>,
    /// Pseudo-element (e.g. `"::before"`), if any.
    pub pseudo_element: Option<String>,
    /// Enclosing at-rule (e.g. `"@media (min-width: 1000px)"`), if any.
    pub at_rule: Option<String>,
    /// Total-ordering sort key for downstream emission. Higher values are
    /// emitted later, so more contextual rules win regardless of source order.
    pub priority: u32,
}
