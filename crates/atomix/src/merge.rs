//! Runtime composition of resolved style fragments.
//!
//! Each fragment is a pre-resolved [`PropertyMap`] (symbolic reference lookup
//! happens elsewhere) plus any inline custom-property assignments carried by
//! dynamic references. Merging folds fragments left to right with exact-key,
//! last-write-wins semantics: `"color"` and `"color:hover"` are independent
//! keys and never interact, and an explicit removed marker keeps its key out
//! of the result. Overwrites move the key to the end of the map; this is
//! observable in the rendered class-attribute order (and pinned by tests) but
//! has no effect on cascade correctness, which priorities govern downstream.
//!
//! The fold is pure and synchronous: it completes or it doesn't get called;
//! there is nothing to cancel and nothing shared to lock.

use acss::types::{PropEntry, PropertyMap};
use log::trace;
use smallvec::SmallVec;

/// One resolved class reference: the properties it sets and the inline
/// custom-property values a dynamic reference carries alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleFragment {
    pub props: PropertyMap,
    pub inline: Vec<(String, String)>,
}

impl StyleFragment {
    pub fn new(props: PropertyMap) -> Self {
        Self {
            props,
            inline: Vec::new(),
        }
    }

    pub fn with_inline(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inline.push((name.into(), value.into()));
        self
    }
}

/// The rendered result of one composition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedStyle {
    /// Space-joined, order-preserving, de-duplicated class identities.
    pub class_attribute: String,
    /// Semicolon-joined `name:value` pairs, absent when nothing is inline.
    pub style_attribute: Option<String>,
}

/// Folds fragments left to right into one final property map and inline
/// style, then renders both. The optional `style_override` is merged after
/// every fragment, so the caller always wins.
pub fn merge(
    fragments: &[StyleFragment],
    style_override: Option<&[(String, String)]>,
) -> MergedStyle {
    let mut props = PropertyMap::new();
    let mut inline: Vec<(String, String)> = Vec::new();

    for fragment in fragments {
        for (key, entry) in fragment.props.iter() {
            trace!("merge {} <- {:?}", key, entry);
            props.set(key, entry.clone());
        }
        for (name, value) in &fragment.inline {
            set_inline(&mut inline, name, value);
        }
    }
    if let Some(overrides) = style_override {
        for (name, value) in overrides {
            set_inline(&mut inline, name, value);
        }
    }

    MergedStyle {
        class_attribute: render_classes(&props),
        style_attribute: render_inline(&inline),
    }
}

/// Exact-key last-write-wins with the same move-to-end policy as the
/// property map.
fn set_inline(inline: &mut Vec<(String, String)>, name: &str, value: &str) {
    inline.retain(|(n, _)| n != name);
    inline.push((name.to_string(), value.to_string()));
}

fn render_classes(props: &PropertyMap) -> String {
    let mut seen: SmallVec<[&str; 8]> = SmallVec::new();
    for (_, entry) in props.iter() {
        if let PropEntry::Present(identity) = entry {
            if !seen.contains(&identity.as_str()) {
                seen.push(identity.as_str());
            }
        }
    }
    seen.join(" ")
}

fn render_inline(inline: &[(String, String)]) -> Option<String> {
    if inline.is_empty() {
        return None;
    }
    Some(
        inline
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value))
            .collect::<Vec<_>>()
            .join(";"),
    )
}
