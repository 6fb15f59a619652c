//! The board: single authoritative store of every token stack in play.
//!
//! Stacks are owned here and addressed by [`StackId`]; callers borrow
//! through `get`/`get_mut` instead of holding aliased references.
//! Iteration order is creation order, which doubles as display order.

use crate::deck::{Deck, TokenTemplate};
use crate::ids::StackId;
use crate::stack::{SplitError, TokenStack};

/// Amount every stack restored from a deck template starts at. Decks
/// capture composition, not counts.
pub const DECK_LOAD_AMOUNT: i64 = 1;

/// How a board wipe treats the stacks themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrathMode {
    /// Zero out every stack's counts but keep the stacks on the board.
    ResetCounts,
    /// Delete every stack outright.
    DestroyAll,
}

/// Errors for board operations addressed at a specific stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// No stack with this ID is on the board.
    StackNotFound(StackId),
    /// The stack exists but the split request was invalid.
    Split(SplitError),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::StackNotFound(id) => {
                write!(f, "No stack {id} on the board")
            }
            BoardError::Split(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Split(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SplitError> for BoardError {
    fn from(err: SplitError) -> Self {
        BoardError::Split(err)
    }
}

/// All stacks currently in play, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Board {
    stacks: Vec<TokenStack>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Stacks in creation (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenStack> {
        self.stacks.iter()
    }

    pub fn get(&self, id: StackId) -> Option<&TokenStack> {
        self.stacks.iter().find(|stack| stack.id() == id)
    }

    pub fn get_mut(&mut self, id: StackId) -> Option<&mut TokenStack> {
        self.stacks.iter_mut().find(|stack| stack.id() == id)
    }

    /// Puts a stack into play, returning its ID.
    pub fn spawn(&mut self, stack: TokenStack) -> StackId {
        let id = stack.id();
        self.stacks.push(stack);
        id
    }

    /// Removes a stack from play.
    pub fn remove(&mut self, id: StackId) -> Option<TokenStack> {
        let index = self.stacks.iter().position(|stack| stack.id() == id)?;
        Some(self.stacks.remove(index))
    }

    /// Splits `take` tokens off the identified stack into a new stack,
    /// which joins the board at the end of display order. Returns the
    /// new stack's ID.
    pub fn split_stack(
        &mut self,
        id: StackId,
        take: u32,
        tapped_first: bool,
    ) -> Result<StackId, BoardError> {
        let stack = self.get_mut(id).ok_or(BoardError::StackNotFound(id))?;
        let split_off = stack.split(take, tapped_first)?;
        Ok(self.spawn(split_off))
    }

    /// Board wipe, in the chosen mode.
    pub fn wrath(&mut self, mode: WrathMode) {
        match mode {
            WrathMode::ResetCounts => {
                for stack in &mut self.stacks {
                    stack.clear_counts();
                }
            }
            WrathMode::DestroyAll => self.stacks.clear(),
        }
    }

    /// Untaps every stack.
    pub fn untap_all(&mut self) {
        for stack in &mut self.stacks {
            stack.set_tapped(0);
        }
    }

    /// Clears summoning sickness on every stack. Independent of the
    /// display toggle; the tracked counts are what reset.
    pub fn clear_summoning_sickness(&mut self) {
        for stack in &mut self.stacks {
            stack.set_summoning_sick(0);
        }
    }

    /// Captures the current board as a named deck of templates, in
    /// display order.
    pub fn save_deck(&self, name: impl Into<String>) -> Deck {
        Deck::new(name, self.stacks.iter().map(TokenTemplate::from).collect())
    }

    /// Replaces the board with the deck's composition: every current
    /// stack is deleted, then one stack per template is created at
    /// [`DECK_LOAD_AMOUNT`], untapped.
    pub fn load_deck(&mut self, deck: &Deck) {
        self.stacks.clear();
        for template in &deck.templates {
            self.spawn(template.to_stack(DECK_LOAD_AMOUNT, false));
        }
    }
}
