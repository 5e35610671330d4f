//! # ACSS - Atomic CSS Compiler
//!
//! A compile-time atomic-CSS core: structured style declarations go in,
//! a minimal, deterministic, content-addressed set of single-purpose CSS
//! rules comes out. This crate provides:
//!
//! - **Compilation**: Turn a [`Declaration`](types::Declaration) into an
//!   ordered [`CompiledStyle`](types::CompiledStyle) of atomic classes
//! - **Flattening**: Resolve nested conditional values (pseudo-classes,
//!   pseudo-elements, at-rules) into concrete selector/value pairs
//! - **Shorthand strategies**: Accept, Flatten, or Forbid shorthand
//!   properties, chosen per compiler
//! - **Priorities & identities**: Stable sort keys and content-addressed
//!   class names that survive incremental and parallel builds
//!
//! ## Quick Start
//!
//! ```rust
//! use acss::compiler::{Compiler, CompilerOptions};
//! use acss::types::{Declaration, Value};
//!
//! let mut declaration = Declaration::new();
//! declaration.push("color", "red");
//! declaration.push(
//!     "font-size",
//!     Value::conditional([
//!         ("default", Value::literal("1rem")),
//!         ("@media (min-width: 1000px)", Value::literal("1.25rem")),
//!     ]),
//! );
//!
//! let compiler = Compiler::new(CompilerOptions::default());
//! let compiled = compiler.compile(&declaration).expect("valid declaration");
//! assert_eq!(compiled.classes.len(), 3);
//! ```
//!
//! ## Determinism
//!
//! Compilation is pure: identical declarations always produce byte-identical
//! classes, priorities, and identities, across threads and across builds.
//! Identities are MurmurHash2-based and content-addressed, so two builds that
//! never exchange state still agree on every class name.
//!
//! ## Modules
//!
//! - [`compiler`]: compilation pipeline and configuration
//! - [`shorthand`]: the three shorthand expansion strategies
//! - [`types`]: declarations, values, atomic classes, property maps
//! - [`error`]: the compile-time error taxonomy

pub mod compiler;
pub mod error;
pub mod shorthand;
pub mod types;

pub use compiler::{Compiler, CompilerOptions, LayerMode};
pub use error::AcssError;
pub use shorthand::Strategy;
pub use types::{AtomicClass, CompiledStyle, Declaration, PropEntry, PropertyMap, Value};
