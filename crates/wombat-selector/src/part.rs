//! Selector part kinds and their canonical ordering.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) defines several
//! kinds of simple selector. When written as a compound selector they appear
//! in a conventional order (type selector first, then id, classes, attribute
//! selectors, pseudo-classes, and finally pseudo-elements), and this module
//! assigns each kind its rank in that order.

use serde::Serialize;
use strum_macros::Display;

/// The kind of a single selector part.
///
/// Declaration order is the canonical order, so the derived `Ord` agrees
/// with [`PartKind::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `a`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// An attribute condition wrapped in square brackets. The expression
    /// between the brackets is taken verbatim.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A colon followed by the pseudo-class name.
    ///
    /// Examples: `:hover`, `:focus`, `:nth-child(2)`
    PseudoClass,

    /// [§ 14 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "The syntax of a pseudo-element is '::' (two U+003A COLON characters)
    /// followed by the name of the pseudo-element."
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl PartKind {
    /// Position of this kind in the canonical order, 0 through 5.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether this kind may appear at most once in a selector.
    ///
    /// An element has one type, one id, and at most one pseudo-element;
    /// classes, attribute conditions, and pseudo-classes may repeat.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Characters written before the part's value.
    pub(crate) const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Characters written after the part's value.
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}
