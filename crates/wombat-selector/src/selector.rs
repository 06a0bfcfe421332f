//! Immutable selector values and the fluent building facade.
//!
//! A [`Selector`] accumulates the textual form of a CSS selector. Every
//! append operation takes the value by reference and returns a new value
//! with the part added, so independent chains never share state and any
//! intermediate value can be branched into several chains.
//!
//! Two structural rules are enforced on every append:
//!
//! - parts must follow the canonical order element < id < class < attribute
//!   < pseudo-class < pseudo-element (equal ranks may repeat);
//! - element, id, and pseudo-element may each occur at most once.
//!
//! Violations return [`SelectorError`] and leave the receiver untouched.

use std::fmt;

use serde::Serialize;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::part::PartKind;

/// An in-progress or finished CSS selector expression.
///
/// Start a chain with one of the entry points ([`element`], [`id`],
/// [`class`], [`attribute`], [`pseudo_class`], [`pseudo_element`], or
/// [`combine`]), extend it with the methods of the same names, and finish
/// with [`Selector::render`].
///
/// # Examples
///
/// ```
/// use wombat_selector::element;
///
/// let selector = element("div").id("main")?.class("container")?;
/// assert_eq!(selector.render(), "div#main.container");
/// # Ok::<(), wombat_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// Accumulated selector text.
    text: String,
    /// Kind of the most recently appended part, `None` for a fresh value.
    last: Option<PartKind>,
    /// Single-occurrence flag for the element part.
    seen_element: bool,
    /// Single-occurrence flag for the id part.
    seen_id: bool,
    /// Single-occurrence flag for the pseudo-element part.
    seen_pseudo_element: bool,
}

impl Selector {
    /// Append an element (type) part, rank 0. The value is taken verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if the chain already has an element
    /// part; [`SelectorError::OutOfOrder`] if any part of higher rank was
    /// already appended.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Element, name)
    }

    /// Append an id part as `#value`, rank 1.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if the chain already has an id part;
    /// [`SelectorError::OutOfOrder`] if any part of higher rank was already
    /// appended.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Id, name)
    }

    /// Append a class part as `.value`, rank 2. Classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any part of higher rank was already
    /// appended.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Class, name)
    }

    /// Append an attribute part as `[value]`, rank 3. The value is the raw
    /// attribute expression (e.g. `href$=".png"`) and is not validated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any part of higher rank was already
    /// appended.
    pub fn attribute(&self, expression: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Attribute, expression)
    }

    /// Append a pseudo-class part as `:value`, rank 4. Pseudo-classes may
    /// repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any part of higher rank was already
    /// appended.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoClass, name)
    }

    /// Append a pseudo-element part as `::value`, rank 5.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if the chain already has a
    /// pseudo-element part.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoElement, name)
    }

    /// Append a part of any kind. The per-kind methods delegate here, so the
    /// ordering and uniqueness rules live in one place.
    ///
    /// The duplicate check runs first, then the order check; nothing is
    /// written before both pass, so on failure `self` is still a valid chain
    /// to continue from.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if `kind` is single-occurrence and
    /// already present; [`SelectorError::OutOfOrder`] if `kind.rank()` is
    /// lower than the rank of the most recently appended part.
    pub fn append(&self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.seen(kind) {
            return Err(SelectorError::DuplicatePart);
        }
        if self.last.is_some_and(|last| last.rank() > kind.rank()) {
            return Err(SelectorError::OutOfOrder);
        }
        Ok(self.extended(kind, value))
    }

    /// Finish the chain and yield the accumulated text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wombat_selector::element;
    ///
    /// assert_eq!(element("a").pseudo_class("focus")?.render(), "a:focus");
    /// # Ok::<(), wombat_selector::SelectorError>(())
    /// ```
    #[must_use]
    pub fn render(self) -> String {
        self.text
    }

    /// The accumulated text without consuming the value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether no part has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Kind of the most recently appended part, `None` for a fresh value.
    #[must_use]
    pub const fn last_kind(&self) -> Option<PartKind> {
        self.last
    }

    /// Has a single-occurrence part of `kind` been appended?
    const fn seen(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.seen_element,
            PartKind::Id => self.seen_id,
            PartKind::PseudoElement => self.seen_pseudo_element,
            _ => false,
        }
    }

    /// Copy this value with `kind`/`value` written. Callers have already
    /// validated the append.
    fn extended(&self, kind: PartKind, value: &str) -> Self {
        let mut next = self.clone();
        next.text.push_str(kind.prefix());
        next.text.push_str(value);
        next.text.push_str(kind.suffix());
        next.last = Some(kind);
        match kind {
            PartKind::Element => next.seen_element = true,
            PartKind::Id => next.seen_id = true,
            PartKind::PseudoElement => next.seen_pseudo_element = true,
            _ => {}
        }
        next
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Start a chain with an element (type) part.
#[must_use]
pub fn element(name: &str) -> Selector {
    Selector::default().extended(PartKind::Element, name)
}

/// Start a chain with an id part (`#value`).
#[must_use]
pub fn id(name: &str) -> Selector {
    Selector::default().extended(PartKind::Id, name)
}

/// Start a chain with a class part (`.value`).
#[must_use]
pub fn class(name: &str) -> Selector {
    Selector::default().extended(PartKind::Class, name)
}

/// Start a chain with an attribute part (`[value]`).
#[must_use]
pub fn attribute(expression: &str) -> Selector {
    Selector::default().extended(PartKind::Attribute, expression)
}

/// Start a chain with a pseudo-class part (`:value`).
#[must_use]
pub fn pseudo_class(name: &str) -> Selector {
    Selector::default().extended(PartKind::PseudoClass, name)
}

/// Start a chain with a pseudo-element part (`::value`).
#[must_use]
pub fn pseudo_element(name: &str) -> Selector {
    Selector::default().extended(PartKind::PseudoElement, name)
}

/// Join two selectors with a combinator.
///
/// The composite text is `"<a> <token> <b>"` with exactly one space on each
/// side of the combinator token, whatever the token is. The result carries
/// fresh ordering and uniqueness state, so it can be combined again.
///
/// # Examples
///
/// ```
/// use wombat_selector::{Combinator, combine, element, id};
///
/// let selector = combine(&element("div"), Combinator::Child, &id("x"));
/// assert_eq!(selector.render(), "div > #x");
/// ```
#[must_use]
pub fn combine(a: &Selector, combinator: Combinator, b: &Selector) -> Selector {
    Selector {
        text: format!("{a} {combinator} {b}"),
        ..Selector::default()
    }
}
