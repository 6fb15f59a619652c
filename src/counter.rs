//! Counter ledger for token stacks.
//!
//! All counters on a stack live in one ordered ledger keyed by
//! [`CounterKind`]. The +1/+1 and -1/-1 kinds are special: placing one
//! while the other is present annihilates pairs first (state-based
//! action for opposing counters), so at most one of the two is ever
//! nonzero after an add.

/// The kind of a counter on a token stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CounterKind {
    PlusOnePlusOne,
    MinusOneMinusOne,
    /// Any other counter, identified by its display name ("Charge", "Oil", ...).
    Named(String),
}

impl CounterKind {
    /// Create a named counter kind.
    pub fn named(name: impl Into<String>) -> Self {
        CounterKind::Named(name.into())
    }

    /// Returns true for the paired power/toughness kinds.
    pub fn is_power_toughness(&self) -> bool {
        matches!(
            self,
            CounterKind::PlusOnePlusOne | CounterKind::MinusOneMinusOne
        )
    }

    /// Display label for this kind.
    pub fn label(&self) -> &str {
        match self {
            CounterKind::PlusOnePlusOne => "+1/+1",
            CounterKind::MinusOneMinusOne => "-1/-1",
            CounterKind::Named(name) => name,
        }
    }
}

/// One ledger entry: a counter kind and how many of it are on the stack.
///
/// An entry's amount is always at least 1; entries that reach zero are
/// removed from the ledger, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CounterEntry {
    pub kind: CounterKind,
    pub amount: u32,
}

/// Ordered counter ledger for a single stack.
///
/// Entries keep their first-insertion order; adding to an existing kind
/// increments it in place, new kinds append to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CounterLedger {
    entries: Vec<CounterEntry>,
}

impl CounterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct counter kinds on the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CounterEntry> {
        self.entries.iter()
    }

    /// Named entries only (excludes the paired power/toughness kinds),
    /// in insertion order.
    pub fn named(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().filter_map(|entry| match &entry.kind {
            CounterKind::Named(name) => Some((name.as_str(), entry.amount)),
            _ => None,
        })
    }

    /// Current amount of the given kind (0 if absent).
    pub fn amount_of(&self, kind: &CounterKind) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.kind == *kind)
            .map(|entry| entry.amount)
            .unwrap_or(0)
    }

    /// Current +1/+1 counter count.
    pub fn plus_one(&self) -> u32 {
        self.amount_of(&CounterKind::PlusOnePlusOne)
    }

    /// Current -1/-1 counter count.
    pub fn minus_one(&self) -> u32 {
        self.amount_of(&CounterKind::MinusOneMinusOne)
    }

    /// Net +1/+1 effect: +1/+1 count minus -1/-1 count.
    pub fn net_plus_one(&self) -> i64 {
        self.plus_one() as i64 - self.minus_one() as i64
    }

    /// Adds a named counter. Fails (returning false, changing nothing)
    /// for an empty name or a zero amount.
    pub fn add_named(&mut self, name: &str, amount: u32) -> bool {
        if name.is_empty() || amount == 0 {
            return false;
        }
        self.put(CounterKind::named(name), amount);
        true
    }

    /// Removes up to `amount` of a named counter. Fails (returning false)
    /// if no counter of that name is present; an entry decremented to
    /// zero is deleted from the ledger.
    pub fn remove_named(&mut self, name: &str, amount: u32) -> bool {
        let kind = CounterKind::named(name);
        if self.amount_of(&kind) == 0 {
            return false;
        }
        self.take(&kind, amount);
        true
    }

    /// Places +1/+1 counters (positive `delta`) or -1/-1 counters
    /// (negative `delta`), annihilating against the opposing kind first.
    ///
    /// After any call at most one of the two paired kinds is nonzero.
    pub fn add_power_toughness(&mut self, delta: i64) {
        if delta > 0 {
            let reduction = delta.min(self.minus_one() as i64);
            self.take(&CounterKind::MinusOneMinusOne, reduction as u32);
            self.put(CounterKind::PlusOnePlusOne, saturate(delta - reduction));
        } else if delta < 0 {
            let abs_delta = delta.unsigned_abs().min(u64::from(u32::MAX)) as i64;
            let reduction = abs_delta.min(self.plus_one() as i64);
            self.take(&CounterKind::PlusOnePlusOne, reduction as u32);
            self.put(CounterKind::MinusOneMinusOne, saturate(abs_delta - reduction));
        }
    }

    fn put(&mut self, kind: CounterKind, amount: u32) {
        if amount == 0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.kind == kind) {
            entry.amount = entry.amount.saturating_add(amount);
        } else {
            self.entries.push(CounterEntry { kind, amount });
        }
    }

    fn take(&mut self, kind: &CounterKind, amount: u32) {
        if amount == 0 {
            return;
        }
        if let Some(index) = self.entries.iter().position(|entry| entry.kind == *kind) {
            let entry = &mut self.entries[index];
            entry.amount = entry.amount.saturating_sub(amount);
            if entry.amount == 0 {
                self.entries.remove(index);
            }
        }
    }
}

fn saturate(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
