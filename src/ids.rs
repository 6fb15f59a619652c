use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for auto-incrementing stack IDs (starts at 1, 0 is reserved).
static STACK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique token stack identifier, monotonically increasing.
///
/// Never reused: a stack split off from another gets a fresh ID, and the
/// two halves are fully independent afterward. The board addresses stacks
/// by this ID rather than by aliased references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StackId(pub u64);

impl StackId {
    /// Create a new stack ID with auto-incrementing counter.
    pub fn new() -> Self {
        Self(STACK_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Create a stack ID from a specific value (for when you need explicit control).
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

impl Default for StackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
