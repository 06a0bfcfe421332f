//! Error types for selector construction.
//!
//! Both errors signal a programming mistake in the way a selector chain was
//! written, not a recoverable runtime condition. They are raised before any
//! state is written, so the selector value the failed call was made on stays
//! valid and reusable.

use thiserror::Error;

/// A structural rule violated while appending a selector part.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A second element, id, or pseudo-element part was appended to a chain
    /// that already contains one.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector.")]
    DuplicatePart,

    /// A part was appended whose canonical rank is lower than the rank of
    /// the most recently appended part.
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element.")]
    OutOfOrder,
}
