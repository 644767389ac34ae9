//! Combine orchestration: a candidate set of shards back into the secret.

use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::shard::Shard;
use crate::sss;

/// Working aggregation of all shards claiming one group index.
///
/// Groups are collected in first-seen order while scanning the unordered
/// candidate set; the struct lives only for the duration of one combine.
struct MemberGroup<'a> {
    group_index: u8,
    member_threshold: u8,
    members: Vec<(u8, &'a [u8])>,
}

/// Decodes serialized shards and reconstructs the master secret.
///
/// Any decode failure fails the whole attempt; there is no best-effort
/// partial recovery.
///
/// # Errors
/// [`Error::EmptyShardSet`] for an empty candidate list, any
/// [`Shard::decode`] error, or any error from [`combine_shards`].
pub fn combine<T: AsRef<[u8]>>(serialized_shards: &[T]) -> Result<Zeroizing<Vec<u8>>> {
    if serialized_shards.is_empty() {
        return Err(Error::EmptyShardSet);
    }

    let mut shards = Vec::with_capacity(serialized_shards.len());
    for source in serialized_shards {
        shards.push(Shard::decode(source.as_ref())?);
    }

    combine_shards(&shards)
}

/// Reconstructs the master secret from already-decoded shards.
///
/// The first shard establishes the expected identifier, group threshold,
/// group count and value length; every other shard must match exactly.
/// Shards are then bucketed by group index, each present group's share is
/// recovered from `member_threshold` of its members, and the master secret
/// is recovered across `group_threshold` group shares. Which
/// threshold-satisfying subset is used does not affect the result.
///
/// Intermediate group shares live in zeroizing buffers and are wiped on
/// every return path.
///
/// # Errors
/// [`Error::EmptyShardSet`], [`Error::InvalidShardSet`],
/// [`Error::InvalidMemberThreshold`], [`Error::DuplicateMemberIndex`],
/// [`Error::NotEnoughGroups`], [`Error::NotEnoughMemberShards`], or
/// [`Error::SecretSharing`] from the recovery primitive.
pub fn combine_shards(shards: &[Shard]) -> Result<Zeroizing<Vec<u8>>> {
    let Some(first) = shards.first() else {
        return Err(Error::EmptyShardSet);
    };

    let identifier = first.identifier();
    let group_threshold = first.group_threshold();
    let group_count = first.group_count();
    let secret_len = first.value().len();

    let mut groups: Vec<MemberGroup<'_>> = Vec::new();
    for shard in shards {
        if shard.identifier() != identifier
            || shard.group_threshold() != group_threshold
            || shard.group_count() != group_count
            || shard.value().len() != secret_len
        {
            return Err(Error::InvalidShardSet);
        }

        match groups
            .iter_mut()
            .find(|g| g.group_index == shard.group_index())
        {
            Some(group) => {
                if shard.member_threshold() != group.member_threshold {
                    return Err(Error::InvalidMemberThreshold);
                }
                if group
                    .members
                    .iter()
                    .any(|&(index, _)| index == shard.member_index())
                {
                    return Err(Error::DuplicateMemberIndex);
                }
                group.members.push((shard.member_index(), shard.value()));
            }
            None => groups.push(MemberGroup {
                group_index: shard.group_index(),
                member_threshold: shard.member_threshold(),
                members: vec![(shard.member_index(), shard.value())],
            }),
        }
    }

    if groups.len() < usize::from(group_threshold) {
        return Err(Error::NotEnoughGroups {
            required: group_threshold,
            present: groups.len(),
        });
    }

    // recover each present group's share, then the master secret across them
    let mut group_shares: Vec<(u8, Zeroizing<Vec<u8>>)> = Vec::with_capacity(groups.len());
    for group in &groups {
        let required = usize::from(group.member_threshold);
        if group.members.len() < required {
            return Err(Error::NotEnoughMemberShards {
                group_index: group.group_index,
                required: group.member_threshold,
                present: group.members.len(),
            });
        }

        let share = sss::recover_secret(group.member_threshold, &group.members[..required])?;
        group_shares.push((group.group_index, share));
    }

    let outer: Vec<(u8, &[u8])> = group_shares[..usize::from(group_threshold)]
        .iter()
        .map(|(index, share)| (*index, share.as_slice()))
        .collect();

    sss::recover_secret(group_threshold, &outer)
}
