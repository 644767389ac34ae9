//! Group-level configuration validation

use crate::error::{Error, Result};
use crate::shard::MAX_GROUP_COUNT;

use super::GroupDescriptor;

/// Validates a group configuration and returns the total number of shards
/// a split of it will produce.
///
/// This is a pure function with no side effects. [`crate::split`] re-runs
/// it internally, but it is exposed so callers can size output buffers
/// before any secret material is touched. Per-group invariants (member
/// threshold, singleton rule) are already enforced by
/// [`GroupDescriptor::new`], so only the group-level shape is checked here.
///
/// # Errors
/// Returns [`Error::InvalidGroupLength`] if `groups` is empty or exceeds
/// the 16-group bound, or [`Error::InvalidGroupThreshold`] if
/// `group_threshold` is zero or exceeds the number of groups.
///
/// # Examples
///
/// ```rust
/// use sskr::{GroupDescriptor, count_shards};
///
/// let groups = [GroupDescriptor::new(2, 3)?, GroupDescriptor::new(3, 5)?];
/// assert_eq!(count_shards(2, &groups)?, 8);
/// # Ok::<(), sskr::Error>(())
/// ```
pub fn count_shards(group_threshold: u8, groups: &[GroupDescriptor]) -> Result<u16> {
    if groups.is_empty() || groups.len() > MAX_GROUP_COUNT {
        return Err(Error::InvalidGroupLength);
    }
    if group_threshold < 1 || usize::from(group_threshold) > groups.len() {
        return Err(Error::InvalidGroupThreshold);
    }
    Ok(groups.iter().map(|g| u16::from(g.member_count())).sum())
}
