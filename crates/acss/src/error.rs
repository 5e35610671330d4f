//! Error types for atomic-class compilation.
//!
//! Every error here is raised at compile time, at the declaration-to-class
//! boundary. The runtime merger never fails; a declaration that compiles is
//! safe to merge and render.

use thiserror::Error;

/// Errors that can occur while compiling a declaration into atomic classes.
///
/// The compiler fails fast: the first error aborts the whole declaration and
/// no partial output is returned.
///
/// # Examples
///
/// ```rust
/// use acss::shorthand::Strategy;
///
/// let result: Result<Strategy, _> = "expand".parse();
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum AcssError {
    /// An unknown shorthand strategy selector was supplied.
    ///
    /// Valid selectors are `accept`, `flatten`, and `forbid`.
    #[error("unknown shorthand strategy `{0}` (expected accept, flatten, or forbid)")]
    Configuration(String),

    /// A denylisted shorthand property was declared under the Forbid strategy.
    ///
    /// The message names the safe longhand replacements.
    #[error(
        "shorthand property `{property}` is not allowed; declare {} instead",
        replacements.join(", ")
    )]
    ShorthandForbidden {
        property: String,
        replacements: Vec<&'static str>,
    },

    /// A conditional value's keys could not be classified.
    ///
    /// This occurs when a condition set mixes selector keys (`:hover`,
    /// `@media ...`) with plain keys and carries no `default` entry.
    #[error("ambiguous value shape for `{property}`: condition keys mix selectors with plain values")]
    AmbiguousValueShape { property: String },

    /// The identity hasher was fed a value it cannot canonicalize.
    ///
    /// Conditional values must be flattened to leaves before hashing; hitting
    /// this from the compiler indicates an internal invariant violation.
    #[error("cannot canonicalize value for `{property}`: conditional value reached the hasher")]
    UnknownIdentityInput { property: String },
}
