/// Number of ticks between opening the vote and its deadline.
pub const DEFAULT_VOTING_PERIOD: u64 = 280;

/// How participant registrations are counted.
///
/// The count is both the value returned when registering a participant
/// and the divisor used for the quorum threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RegistrationCount {
    /// Count distinct participant identities.
    /// Registering the same identity again overwrites it without changing the count.
    #[default]
    Distinct,

    /// Count every registration call, even when it overwrites an existing participant.
    /// Repeated registrations of one identity inflate the quorum threshold.
    Cumulative,
}

/// Parameters of a ballot engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Number of ticks the vote stays open, counted from the moment voting opens.
    pub voting_period: u64,

    /// How participant registrations are counted.
    pub registration_count: RegistrationCount,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            voting_period: DEFAULT_VOTING_PERIOD,
            registration_count: RegistrationCount::default(),
        }
    }
}
