//! Fluent CSS selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector values** - immutable accumulation of selector text, one
//!   part at a time, with branching-safe chains
//! - **Canonical ordering** - element < id < class < attribute <
//!   pseudo-class < pseudo-element, enforced on every append
//! - **Uniqueness** - element, id, and pseudo-element at most once per
//!   selector
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - descendant, child, next-sibling, and subsequent-sibling joining of
//!     two finished selectors
//!
//! # Not Implemented
//!
//! - Parsing CSS text into selectors (this crate only builds)
//! - Validation of attribute or pseudo-class value syntax
//! - Specificity calculation
//! - DOM matching
//!
//! # Examples
//!
//! ```
//! use wombat_selector::{Combinator, combine, element, id};
//!
//! let link = element("a").attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.as_str(), r#"a[href$=".png"]:focus"#);
//!
//! let nested = combine(&element("div"), Combinator::Child, &id("x"));
//! assert_eq!(nested.render(), "div > #x");
//! # Ok::<(), wombat_selector::SelectorError>(())
//! ```

/// Combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Error types for selector construction.
pub mod error;
/// Selector part kinds and their canonical ordering.
pub mod part;
/// Immutable selector values and the fluent building facade.
pub mod selector;

// Re-exports for convenience
pub use combinator::Combinator;
pub use error::SelectorError;
pub use part::PartKind;
pub use selector::{
    Selector, attribute, class, combine, element, id, pseudo_class, pseudo_element,
};
