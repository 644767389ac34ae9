//! `GroupDescriptor` — validated member threshold and count for one group

use crate::error::{Error, Result};
use crate::shard::MAX_MEMBER_COUNT;

/// Member threshold and member count for a single group.
///
/// Enforces the per-group invariants at construction: both values in
/// 1..=16, threshold no greater than count, and a threshold of 1 only for
/// singleton groups (a 1-of-m group with m > 1 would let any single member
/// recover the group share, so it is rejected outright).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
    member_threshold: u8,
    member_count: u8,
}

impl GroupDescriptor {
    /// Creates a new group descriptor.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGroupCount`] if `member_count` is outside
    /// 1..=16, [`Error::InvalidMemberThreshold`] if `member_threshold` is
    /// zero or exceeds `member_count`, or
    /// [`Error::InvalidSingletonMember`] for a 1-of-m group with m > 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sskr::{Error, GroupDescriptor};
    ///
    /// let group = GroupDescriptor::new(2, 3)?;
    /// assert_eq!(group.member_threshold(), 2);
    /// assert_eq!(group.member_count(), 3);
    ///
    /// // 1-of-1 is the only threshold-1 shape allowed
    /// assert!(GroupDescriptor::new(1, 1).is_ok());
    /// assert_eq!(GroupDescriptor::new(1, 3), Err(Error::InvalidSingletonMember));
    ///
    /// assert_eq!(GroupDescriptor::new(4, 3), Err(Error::InvalidMemberThreshold));
    /// # Ok::<(), sskr::Error>(())
    /// ```
    pub fn new(member_threshold: u8, member_count: u8) -> Result<Self> {
        if member_count < 1 || usize::from(member_count) > MAX_MEMBER_COUNT {
            return Err(Error::InvalidGroupCount);
        }
        if member_threshold < 1 || member_threshold > member_count {
            return Err(Error::InvalidMemberThreshold);
        }
        if member_threshold == 1 && member_count > 1 {
            return Err(Error::InvalidSingletonMember);
        }
        Ok(Self {
            member_threshold,
            member_count,
        })
    }

    /// Member shards required to reconstruct this group's share.
    #[must_use]
    pub fn member_threshold(&self) -> u8 {
        self.member_threshold
    }

    /// Total member shards produced for this group.
    #[must_use]
    pub fn member_count(&self) -> u8 {
        self.member_count
    }
}
