//! Saved decks of token templates.
//!
//! A deck captures the composition of a board, not its counts: each
//! template is a stat-line snapshot (name, abilities, power/toughness,
//! colors) with no amounts, tap state, or counters. Loading a deck
//! rebuilds each stack from its template at a fixed default amount.

use crate::color::ColorSet;
use crate::stack::TokenStack;

/// An immutable stat-line snapshot of a stack, used as a restart recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TokenTemplate {
    pub name: String,
    pub abilities: String,
    pub power_toughness: String,
    pub colors: ColorSet,
}

impl TokenTemplate {
    /// Captures the four descriptive fields of a stack, discarding
    /// amount, tap state, counters, and summoning sickness.
    pub fn from_stack(stack: &TokenStack) -> Self {
        Self {
            name: stack.name.clone(),
            abilities: stack.abilities.clone(),
            power_toughness: stack.power_toughness.clone(),
            colors: stack.colors,
        }
    }

    /// Builds a fresh stack from this template. Counters start empty and
    /// summoning sickness follows normal construction rules.
    pub fn to_stack(&self, amount: i64, enter_tapped: bool) -> TokenStack {
        TokenStack::new(
            self.name.clone(),
            self.abilities.clone(),
            self.power_toughness.clone(),
            self.colors,
            amount,
            enter_tapped,
            true,
        )
    }
}

impl From<&TokenStack> for TokenTemplate {
    fn from(stack: &TokenStack) -> Self {
        Self::from_stack(stack)
    }
}

/// A named, ordered collection of token templates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Deck {
    pub name: String,
    pub templates: Vec<TokenTemplate>,
}

impl Deck {
    /// Name used when a deck is saved without one.
    pub const DEFAULT_NAME: &'static str = "Untitled Deck";

    /// Creates a deck, substituting [`Deck::DEFAULT_NAME`] for an empty name.
    pub fn new(name: impl Into<String>, templates: Vec<TokenTemplate>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                Self::DEFAULT_NAME.to_string()
            } else {
                name
            },
            templates,
        }
    }

    /// Decodes a persisted template list. Corrupt data degrades to an
    /// empty list: a deck with undecodable templates behaves as an empty
    /// deck, it never propagates a fatal error.
    #[cfg(feature = "serialization")]
    pub fn decode_templates(json: &str) -> Vec<TokenTemplate> {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Encodes this deck's templates for persistence.
    #[cfg(feature = "serialization")]
    pub fn encode_templates(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.templates)
    }
}
