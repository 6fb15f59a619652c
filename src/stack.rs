//! The token stack: the mutable unit of game state.
//!
//! A stack is a group of identical tokens tracked in aggregate: a total
//! `amount`, how many of those are `tapped`, and how many still have
//! summoning sickness. Every count mutation clamps immediately so that
//! `0 <= tapped <= amount` and `0 <= summoning_sick <= amount` hold after
//! each assignment; bad input clamps, it never errors.

use std::time::SystemTime;

use crate::color::ColorSet;
use crate::counter::CounterLedger;
use crate::ids::StackId;

/// A stack of identical tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TokenStack {
    id: StackId,
    pub name: String,
    /// Free-text rules text.
    pub abilities: String,
    /// Free-form power/toughness text; not always numeric (may be "*/*").
    pub power_toughness: String,
    pub colors: ColorSet,
    amount: u32,
    tapped: u32,
    summoning_sick: u32,
    counters: CounterLedger,
    /// Set once at construction; used only for stable display ordering.
    created_at: SystemTime,
}

impl TokenStack {
    /// Creates a new stack. A negative `amount` clamps to 0. If
    /// `enter_tapped`, every token starts tapped; if `apply_sickness`,
    /// every token starts summoning-sick.
    pub fn new(
        name: impl Into<String>,
        abilities: impl Into<String>,
        power_toughness: impl Into<String>,
        colors: ColorSet,
        amount: i64,
        enter_tapped: bool,
        apply_sickness: bool,
    ) -> Self {
        let amount = clamp_count(amount);
        Self {
            id: StackId::new(),
            name: name.into(),
            abilities: abilities.into(),
            power_toughness: power_toughness.into(),
            colors,
            amount,
            tapped: if enter_tapped { amount } else { 0 },
            summoning_sick: if apply_sickness { amount } else { 0 },
            counters: CounterLedger::new(),
            created_at: SystemTime::now(),
        }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn tapped(&self) -> u32 {
        self.tapped
    }

    pub fn untapped(&self) -> u32 {
        self.amount - self.tapped
    }

    pub fn summoning_sick(&self) -> u32 {
        self.summoning_sick
    }

    pub fn counters(&self) -> &CounterLedger {
        &self.counters
    }

    /// Sets the total amount, clamping negatives to 0. Lowering the
    /// amount cascade-clamps `tapped` and `summoning_sick`; those two
    /// never affect `amount` in return.
    pub fn set_amount(&mut self, amount: i64) {
        self.amount = clamp_count(amount);
        self.tapped = self.tapped.min(self.amount);
        self.summoning_sick = self.summoning_sick.min(self.amount);
    }

    /// Sets the tapped count, clamped to `[0, amount]`.
    pub fn set_tapped(&mut self, tapped: i64) {
        self.tapped = clamp_count(tapped).min(self.amount);
    }

    /// Sets the summoning-sick count, clamped to `[0, amount]`.
    pub fn set_summoning_sick(&mut self, summoning_sick: i64) {
        self.summoning_sick = clamp_count(summoning_sick).min(self.amount);
    }

    /// Removes a single token. When every remaining token is tapped, a
    /// tapped one leaves: the tapped count is decremented before the
    /// amount so the board never shows a tapped token vanishing to the
    /// cascade clamp.
    pub fn remove_one(&mut self) {
        if self.amount == 0 {
            return;
        }
        if self.amount - self.tapped == 0 {
            self.tapped -= 1;
        }
        self.set_amount(self.amount as i64 - 1);
    }

    /// Adds `count` tokens. New tokens always enter summoning-sick;
    /// whether the sickness indicator is shown is a display setting, the
    /// tracking is unconditional.
    pub fn add_tokens(&mut self, count: u32) {
        self.amount = self.amount.saturating_add(count);
        self.summoning_sick = self.summoning_sick.saturating_add(count).min(self.amount);
    }

    /// Removes up to `count` tokens; over-large requests clamp to the
    /// current amount.
    pub fn remove_tokens(&mut self, count: u32) {
        let removed = count.min(self.amount);
        if self.amount - self.tapped < removed {
            // More tapped tokens than will survive; the survivors stay tapped.
            self.tapped = self.amount - removed;
        }
        self.set_amount((self.amount - removed) as i64);
    }

    /// Taps up to `count` untapped tokens.
    pub fn tap(&mut self, count: u32) {
        self.tapped = self.tapped.saturating_add(count).min(self.amount);
    }

    /// Untaps up to `count` tapped tokens.
    pub fn untap(&mut self, count: u32) {
        self.tapped = self.tapped.saturating_sub(count);
    }

    /// Doubles the stack. The newly created half enters summoning-sick
    /// like any other added tokens.
    pub fn double(&mut self) {
        self.add_tokens(self.amount);
    }

    /// Zeroes amount, tapped, and summoning-sick while keeping the stack
    /// (and its counters) on the board.
    pub fn clear_counts(&mut self) {
        self.amount = 0;
        self.tapped = 0;
        self.summoning_sick = 0;
    }

    /// True if this stack represents an emblem rather than creatures.
    pub fn is_emblem(&self) -> bool {
        self.name.to_lowercase().contains("emblem")
            || self.abilities.to_lowercase().contains("emblem")
    }

    // === Counters ===

    /// Adds a named counter. Returns false (and changes nothing) for an
    /// empty name or zero amount.
    pub fn add_counter(&mut self, name: &str, amount: u32) -> bool {
        self.counters.add_named(name, amount)
    }

    /// Removes a named counter. Returns false if no counter of that name
    /// is present.
    pub fn remove_counter(&mut self, name: &str, amount: u32) -> bool {
        self.counters.remove_named(name, amount)
    }

    /// Places +1/+1 (positive) or -1/-1 (negative) counters, annihilating
    /// opposing pairs first.
    pub fn add_power_toughness_counters(&mut self, delta: i64) {
        self.counters.add_power_toughness(delta);
    }

    /// Net +1/+1 counter effect.
    pub fn net_plus_one_counters(&self) -> i64 {
        self.counters.net_plus_one()
    }

    /// True if the raw power/toughness text is two integers separated by
    /// a slash, i.e. counters can modify it numerically.
    pub fn can_be_modified_by_counters(&self) -> bool {
        parse_power_toughness(&self.power_toughness).is_some()
    }

    /// True if counters currently change the displayed power/toughness.
    pub fn is_power_toughness_modified(&self) -> bool {
        self.net_plus_one_counters() != 0
    }

    /// Power/toughness with counter modifications applied. Numeric "P/T"
    /// text has the net counter effect added to both halves; non-numeric
    /// text (like "*/*") is suffixed with the net effect instead.
    pub fn formatted_power_toughness(&self) -> String {
        let net = self.net_plus_one_counters();
        if net == 0 {
            return self.power_toughness.clone();
        }
        if let Some((power, toughness)) = parse_power_toughness(&self.power_toughness) {
            return format!("{}/{}", power + net, toughness + net);
        }
        if net > 0 {
            format!("{} (+{net}/+{net})", self.power_toughness)
        } else {
            format!("{} ({net}/{net})", self.power_toughness)
        }
    }

    // === Splitting ===

    /// Splits off `take` tokens into a new, independent stack.
    ///
    /// With `tapped_first` the new stack receives tapped tokens
    /// preferentially, otherwise untapped ones. The total amount and
    /// total tapped count are conserved across the two halves; summoning
    /// sickness is reset on both. The new stack copies the descriptive
    /// fields and the counter ledger by value and gets a fresh identity.
    ///
    /// `take` must leave at least one token in the original
    /// (`1 <= take <= amount - 1`), otherwise an error is returned and
    /// nothing changes.
    pub fn split(&mut self, take: u32, tapped_first: bool) -> Result<TokenStack, SplitError> {
        if take == 0 {
            return Err(SplitError::NothingRequested);
        }
        if take >= self.amount {
            return Err(SplitError::WouldEmptyOriginal {
                requested: take,
                amount: self.amount,
            });
        }

        let new_tapped = if tapped_first {
            take.min(self.tapped)
        } else {
            let available_untapped = self.amount - self.tapped;
            take - take.min(available_untapped)
        };

        let split_off = TokenStack {
            id: StackId::new(),
            name: self.name.clone(),
            abilities: self.abilities.clone(),
            power_toughness: self.power_toughness.clone(),
            colors: self.colors,
            amount: take,
            tapped: new_tapped,
            summoning_sick: 0,
            counters: self.counters.clone(),
            created_at: SystemTime::now(),
        };

        self.amount -= take;
        self.tapped -= new_tapped;
        self.summoning_sick = 0;

        Ok(split_off)
    }
}

/// Clamps a signed count to `u32` range; negatives become 0.
fn clamp_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// Parses "P/T" text as two integers, e.g. "2/2" or "-1/3".
/// Returns None for anything else ("*/*", "1+*/2", empty text).
fn parse_power_toughness(text: &str) -> Option<(i64, i64)> {
    let (power, toughness) = text.split_once('/')?;
    Some((
        power.trim().parse().ok()?,
        toughness.trim().parse().ok()?,
    ))
}

/// A split request that would violate the split preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// A split must take at least one token.
    NothingRequested,
    /// Taking `requested` tokens from a stack of `amount` would leave the
    /// original empty (or is outright impossible).
    WouldEmptyOriginal { requested: u32, amount: u32 },
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::NothingRequested => {
                write!(f, "A split must take at least one token")
            }
            SplitError::WouldEmptyOriginal { requested, amount } => {
                write!(
                    f,
                    "Cannot split {requested} tokens off a stack of {amount}: \
                     the original stack must keep at least one token"
                )
            }
        }
    }
}

impl std::error::Error for SplitError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn saprolings(amount: i64) -> TokenStack {
        TokenStack::new(
            "Saproling",
            "",
            "1/1",
            ColorSet::GREEN,
            amount,
            false,
            true,
        )
    }

    #[test]
    fn test_new_clamps_negative_amount() {
        let stack = saprolings(-3);
        assert_eq!(stack.amount(), 0);
        assert_eq!(stack.tapped(), 0);
        assert_eq!(stack.summoning_sick(), 0);
    }

    #[test]
    fn test_new_enter_tapped_and_sick() {
        let stack = TokenStack::new("Ogre", "", "3/3", ColorSet::RED, 4, true, true);
        assert_eq!(stack.amount(), 4);
        assert_eq!(stack.tapped(), 4);
        assert_eq!(stack.summoning_sick(), 4);
    }

    #[test]
    fn test_set_amount_cascades_onto_tapped_and_sick() {
        let mut stack = saprolings(10);
        stack.set_tapped(6);
        assert_eq!(stack.summoning_sick(), 10);

        stack.set_amount(4);
        assert_eq!(stack.amount(), 4);
        assert_eq!(stack.tapped(), 4);
        assert_eq!(stack.summoning_sick(), 4);

        stack.set_amount(-5);
        assert_eq!(stack.amount(), 0);
        assert_eq!(stack.tapped(), 0);
    }

    #[test]
    fn test_set_tapped_clamps_to_amount() {
        let mut stack = saprolings(3);
        stack.set_tapped(99);
        assert_eq!(stack.tapped(), 3);
        stack.set_tapped(-1);
        assert_eq!(stack.tapped(), 0);
        // Tapped assignments never move the amount.
        assert_eq!(stack.amount(), 3);
    }

    #[test]
    fn test_clamp_invariant_over_mutation_sequence() {
        let mut stack = saprolings(5);
        let ops: [(&str, i64); 8] = [
            ("amount", 1_000_000),
            ("tapped", 999_999),
            ("sick", i64::MAX),
            ("amount", 3),
            ("tapped", -7),
            ("amount", -1),
            ("sick", 2),
            ("amount", 10),
        ];
        for (field, value) in ops {
            match field {
                "amount" => stack.set_amount(value),
                "tapped" => stack.set_tapped(value),
                _ => stack.set_summoning_sick(value),
            }
            assert!(stack.tapped() <= stack.amount());
            assert!(stack.summoning_sick() <= stack.amount());
        }
    }

    #[test]
    fn test_remove_one_prefers_untapped() {
        let mut stack = saprolings(3);
        stack.set_tapped(2);
        stack.remove_one();
        assert_eq!((stack.amount(), stack.tapped()), (2, 2));
    }

    #[test]
    fn test_remove_one_takes_tapped_when_all_tapped() {
        let mut stack = saprolings(3);
        stack.set_tapped(3);
        stack.remove_one();
        assert_eq!((stack.amount(), stack.tapped()), (2, 2));
        stack.remove_one();
        stack.remove_one();
        assert_eq!((stack.amount(), stack.tapped()), (0, 0));
        // Removing from an empty stack is a no-op.
        stack.remove_one();
        assert_eq!(stack.amount(), 0);
    }

    #[test]
    fn test_add_tokens_enter_summoning_sick() {
        let mut stack = saprolings(2);
        stack.set_summoning_sick(0);
        stack.add_tokens(3);
        assert_eq!(stack.amount(), 5);
        assert_eq!(stack.summoning_sick(), 3);
    }

    #[test]
    fn test_remove_tokens_clamps_and_keeps_survivors_tapped() {
        let mut stack = saprolings(5);
        stack.set_tapped(4);
        stack.remove_tokens(3);
        assert_eq!((stack.amount(), stack.tapped()), (2, 2));

        stack.remove_tokens(99);
        assert_eq!((stack.amount(), stack.tapped()), (0, 0));
    }

    #[test]
    fn test_tap_untap_clamp() {
        let mut stack = saprolings(4);
        stack.tap(10);
        assert_eq!(stack.tapped(), 4);
        stack.untap(1);
        assert_eq!(stack.tapped(), 3);
        assert_eq!(stack.untapped(), 1);
        stack.untap(50);
        assert_eq!(stack.tapped(), 0);
    }

    #[test]
    fn test_double() {
        let mut stack = saprolings(3);
        stack.set_summoning_sick(0);
        stack.double();
        assert_eq!(stack.amount(), 6);
        assert_eq!(stack.summoning_sick(), 3);
    }

    #[test]
    fn test_clear_counts_keeps_counters() {
        let mut stack = saprolings(4);
        stack.set_tapped(2);
        stack.add_counter("Charge", 2);
        stack.clear_counts();
        assert_eq!(stack.amount(), 0);
        assert_eq!(stack.tapped(), 0);
        assert_eq!(stack.summoning_sick(), 0);
        assert_eq!(stack.counters().len(), 1);
    }

    #[test]
    fn test_is_emblem() {
        let emblem = TokenStack::new(
            "Elspeth Emblem",
            "Creatures you control get +1/+1.",
            "",
            ColorSet::WHITE,
            1,
            false,
            false,
        );
        assert!(emblem.is_emblem());
        assert!(!saprolings(1).is_emblem());
    }

    #[test]
    fn test_formatted_power_toughness_numeric() {
        let mut stack = saprolings(1);
        assert_eq!(stack.formatted_power_toughness(), "1/1");
        assert!(stack.can_be_modified_by_counters());

        stack.add_power_toughness_counters(2);
        assert_eq!(stack.formatted_power_toughness(), "3/3");
        assert!(stack.is_power_toughness_modified());

        stack.add_power_toughness_counters(-4);
        assert_eq!(stack.formatted_power_toughness(), "-1/-1");
    }

    #[test]
    fn test_formatted_power_toughness_non_numeric() {
        let mut stack = TokenStack::new("Hydra", "", "*/*", ColorSet::GREEN, 1, false, true);
        assert!(!stack.can_be_modified_by_counters());
        assert_eq!(stack.formatted_power_toughness(), "*/*");

        stack.add_power_toughness_counters(2);
        assert_eq!(stack.formatted_power_toughness(), "*/* (+2/+2)");

        stack.add_power_toughness_counters(-5);
        assert_eq!(stack.formatted_power_toughness(), "*/* (-3/-3)");
    }

    #[test]
    fn test_split_tapped_first() {
        let mut stack = saprolings(10);
        stack.set_tapped(4);

        let split_off = stack.split(3, true).unwrap();
        assert_eq!((split_off.amount(), split_off.tapped()), (3, 3));
        assert_eq!((stack.amount(), stack.tapped()), (7, 1));
    }

    #[test]
    fn test_split_untapped_first() {
        let mut stack = saprolings(10);
        stack.set_tapped(4);

        let split_off = stack.split(3, false).unwrap();
        assert_eq!((split_off.amount(), split_off.tapped()), (3, 0));
        assert_eq!((stack.amount(), stack.tapped()), (7, 4));
    }

    #[test]
    fn test_split_resets_summoning_sickness_on_both_halves() {
        let mut stack = saprolings(6);
        assert_eq!(stack.summoning_sick(), 6);

        let split_off = stack.split(2, false).unwrap();
        assert_eq!(stack.summoning_sick(), 0);
        assert_eq!(split_off.summoning_sick(), 0);
    }

    #[test]
    fn test_split_copies_counters_by_value() {
        let mut stack = saprolings(4);
        stack.add_counter("Charge", 2);
        stack.add_power_toughness_counters(1);

        let mut split_off = stack.split(1, false).unwrap();
        assert_ne!(split_off.id(), stack.id());
        assert_eq!(split_off.counters(), stack.counters());

        // Fully independent afterward.
        split_off.add_counter("Charge", 5);
        assert_eq!(
            stack.counters().amount_of(&crate::CounterKind::named("Charge")),
            2
        );
    }

    #[test]
    fn test_split_rejects_bad_requests() {
        let mut stack = saprolings(3);
        assert_eq!(stack.split(0, false), Err(SplitError::NothingRequested));
        assert_eq!(
            stack.split(3, false),
            Err(SplitError::WouldEmptyOriginal {
                requested: 3,
                amount: 3
            })
        );
        assert_eq!(stack.amount(), 3);
    }
}
