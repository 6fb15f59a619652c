//! Token stack tracking for tabletop Magic: The Gathering play.
//!
//! The core model is the [`TokenStack`]: a group of identical tokens
//! tracked in aggregate (amount, tapped count, summoning-sick count)
//! with a counter ledger that applies the +1/+1 / -1/-1 annihilation
//! rule. Stacks live on a [`Board`] addressed by [`StackId`]; decks of
//! [`TokenTemplate`]s save and restore board composition.
//!
//! Every count mutation clamps rather than fails: a tabletop aid never
//! crashes or blocks on bad input.

pub mod board;
pub mod catalog;
pub mod color;
pub mod counter;
pub mod deck;
pub mod ids;
pub mod settings;
pub mod stack;

pub use board::{Board, BoardError, DECK_LOAD_AMOUNT, WrathMode};
pub use catalog::{
    CatalogError, Category, CounterCatalog, CounterDefinition, TokenCatalog, TokenDefinition,
};
pub use color::{Color, ColorSet};
pub use counter::{CounterEntry, CounterKind, CounterLedger};
pub use deck::{Deck, TokenTemplate};
pub use ids::StackId;
pub use settings::{MULTIPLIER_MAX, MULTIPLIER_MIN, Settings, parse_count};
pub use stack::{SplitError, TokenStack};
