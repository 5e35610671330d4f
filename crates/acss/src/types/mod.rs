pub mod class;
pub mod props;
pub mod value;

pub use class::{AtomicClass, CssValue};
pub use props::{PropEntry, PropertyMap};
pub use value::{Declaration, Value};

/// The result of compiling one [`Declaration`].
///
/// `classes` is the ordered set of atomic rules to emit; `props` is the
/// property-to-identity fragment fed to the runtime merger. The two differ in
/// one way: explicit unset markers produced by the Accept shorthand strategy
/// appear only in `props` (as [`PropEntry::Removed`]), never as classes.
///
/// A single declared property may contribute several entries to both sides,
/// via shorthand expansion and conditional flattening, so neither length is
/// tied to the declaration's length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledStyle {
    /// Atomic classes in emission order, de-duplicated by identity.
    pub classes: Vec<AtomicClass>,
    /// The merge-model fragment, including explicit unset markers.
    pub props: PropertyMap,
}

impl CompiledStyle {
    /// Looks up a compiled class by its base property and flat condition key.
    pub fn class_for(&self, key: &str) -> Option<&AtomicClass> {
        match self.props.get(key) {
            Some(PropEntry::Present(identity)) => {
                self.classes.iter().find(|c| c.identity == *identity)
            }
            _ => None,
        }
    }
}
