//! Atomic-CSS toolkit: compile-time core plus runtime composition.
//!
//! This crate re-exports the two workspace members:
//!
//! - [`acss`]: compiles structured style declarations into deterministic,
//!   content-addressed atomic classes
//! - [`atomix`]: merges resolved class references into final
//!   `class`/`style` attributes at runtime

pub use acss;
pub use atomix;
