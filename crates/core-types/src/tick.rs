use core::fmt;

/// A value of the logical clock supplied by the environment.
///
/// Ticks are expected to be monotonically non-decreasing across calls,
/// but the engine only ever compares them against the deadline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tick(u64);

impl Tick {
    /// The origin of the logical clock.
    pub const ZERO: Self = Self(0);

    /// The largest representable tick.
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(tick: u64) -> Self {
        Self(tick)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Move this tick `span` ticks forward, stopping at [`Tick::MAX`].
    pub const fn saturating_add(self, span: u64) -> Self {
        Self(self.0.saturating_add(span))
    }

    /// Move this tick `span` ticks backward, or `None` if that would go below zero.
    pub const fn checked_sub(self, span: u64) -> Option<Self> {
        match self.0.checked_sub(span) {
            Some(tick) => Some(Self(tick)),
            None => None,
        }
    }

    /// Whether a deadline set at `self` has elapsed at time `now`.
    pub fn has_elapsed(&self, now: Tick) -> bool {
        now >= *self
    }
}

impl From<u64> for Tick {
    fn from(tick: u64) -> Self {
        Self::new(tick)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
