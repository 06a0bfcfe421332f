//! Combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use serde::Serialize;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The token joining the two sides of [`combine`](crate::selector::combine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors. A selector of the form 'A B' represents an element B that
    /// is an arbitrary descendant of some ancestor element A."
    ///
    /// Its token is the space character; `combine` pads it with one space on
    /// each side like any other token.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The CSS punctuation for this combinator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
