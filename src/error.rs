//! Error taxonomy shared by the codec, validator, split and combine layers.
//!
//! Every failure is a distinct variant so callers can tell corruption apart
//! from insufficiency: [`Error::NotEnoughGroups`] and
//! [`Error::NotEnoughMemberShards`] mean the shards are fine and the user
//! should supply more of them, while the structural variants mean the
//! candidate set can never reconstruct anything.

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the SSKR core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Secret is below the minimum strength.
    #[error("secret is below the minimum strength")]
    SecretTooShort,

    /// Secret is above the maximum strength.
    #[error("secret is above the maximum strength")]
    SecretTooLong,

    /// Secret byte length must be even.
    #[error("secret length is not even")]
    SecretLengthNotEven,

    /// No groups were provided, or more than the hard group bound.
    #[error("invalid number of groups")]
    InvalidGroupLength,

    /// Group threshold is zero or exceeds the number of groups.
    #[error("group threshold exceeds group count")]
    InvalidGroupThreshold,

    /// A group declares an out-of-range member count.
    #[error("invalid member count for group")]
    InvalidGroupCount,

    /// A member threshold is zero, exceeds its group's member count, or
    /// disagrees across shards claiming the same group.
    #[error("invalid member threshold")]
    InvalidMemberThreshold,

    /// A 1-of-m group with m > 1 offers no security and is rejected.
    #[error("threshold-1 group must have exactly one member")]
    InvalidSingletonMember,

    /// Serialized shard is shorter than the minimum encoding.
    #[error("not enough serialized bytes for a shard")]
    NotEnoughSerializedBytes,

    /// Reserved header bits were nonzero.
    #[error("reserved shard bits are not zero")]
    InvalidReservedBits,

    /// Destination buffer cannot hold the serialized output.
    #[error("insufficient space in output buffer")]
    InsufficientSpace,

    /// Combine was called with no shards at all.
    #[error("empty shard set")]
    EmptyShardSet,

    /// Shards in a combine set disagree on identifier, group threshold,
    /// group count or value length.
    #[error("shards do not belong to the same split")]
    InvalidShardSet,

    /// Two shards claim the same member slot within one group.
    #[error("duplicate member index within a group")]
    DuplicateMemberIndex,

    /// Correct shards, but fewer distinct groups than the group threshold.
    #[error("not enough groups: need {required}, have {present}")]
    NotEnoughGroups { required: u8, present: usize },

    /// Correct shards, but a present group is short of its member threshold.
    #[error("not enough member shards in group {group_index}: need {required}, have {present}")]
    NotEnoughMemberShards {
        group_index: u8,
        required: u8,
        present: usize,
    },

    /// The underlying secret-sharing primitive reported a failure.
    #[error("secret sharing backend: {0}")]
    SecretSharing(&'static str),
}
