use derive_more::Display;

/// How a counter view-model handles a decrement that would take the count
/// below zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Display)]
pub enum DecrementPolicy {
    /// Apply every decrement. Keeping the count non-negative is left to the
    /// presenter, which disables the decrement control at zero. A
    /// programmatic trigger that bypasses the disabled control still lowers
    /// the count below zero.
    #[default]
    #[display(fmt = "trust-control")]
    TrustControl,

    /// Ignore decrements while the count is zero or lower. Ignored
    /// decrements publish nothing.
    #[display(fmt = "floor-at-zero")]
    FloorAtZero,
}

impl DecrementPolicy {
    /// The count after one decrement, or `None` if the decrement is ignored.
    #[must_use]
    pub fn decrement(self, count: i64) -> Option<i64> {
        match self {
            DecrementPolicy::TrustControl => Some(count.saturating_sub(1)),
            DecrementPolicy::FloorAtZero if count <= 0 => None,
            DecrementPolicy::FloorAtZero => Some(count - 1),
        }
    }
}
