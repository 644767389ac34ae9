//! Split orchestration: one master secret into a full set of shards.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::domain::{GroupDescriptor, count_shards};
use crate::error::{Error, Result};
use crate::shard::{METADATA_LENGTH_BYTES, Shard, check_secret_length};
use crate::sss;

/// Splits `master_secret` into shards using a two-level threshold scheme.
///
/// The secret is first split across the groups with `group_threshold`, then
/// each group share is split across that group's members. Every shard
/// carries a shared random identifier drawn from `rng`. Output is ordered by
/// ascending group index, then ascending member index.
///
/// All intermediate share buffers are held in zeroizing storage and wiped
/// when they go out of scope, on success and failure alike.
///
/// # Errors
/// Returns a secret-length error (see [`check_secret_length`]), a group
/// configuration error (see [`count_shards`]), or
/// [`Error::SecretSharing`] if the underlying primitive fails.
pub fn split<R: RngCore + CryptoRng>(
    group_threshold: u8,
    groups: &[GroupDescriptor],
    master_secret: &[u8],
    rng: &mut R,
) -> Result<Vec<Shard>> {
    check_secret_length(master_secret.len())?;
    let total_shards = count_shards(group_threshold, groups)?;

    let mut identifier_bytes = [0u8; 2];
    rng.fill_bytes(&mut identifier_bytes);
    let identifier = u16::from_be_bytes(identifier_bytes);

    let group_count =
        u8::try_from(groups.len()).unwrap_or_else(|_| unreachable!("at most 16 groups"));
    let group_shares = sss::split_secret(group_threshold, group_count, master_secret, rng)?;

    let mut shards = Vec::with_capacity(usize::from(total_shards));
    for (i, (group, group_share)) in groups.iter().zip(group_shares.iter()).enumerate() {
        let group_index = u8::try_from(i).unwrap_or_else(|_| unreachable!("at most 16 groups"));
        let member_shares = sss::split_secret(
            group.member_threshold(),
            group.member_count(),
            group_share,
            rng,
        )?;

        for (j, value) in member_shares.into_iter().enumerate() {
            let member_index =
                u8::try_from(j).unwrap_or_else(|_| unreachable!("at most 16 members"));
            shards.push(Shard::new(
                identifier,
                group_threshold,
                group_count,
                group_index,
                group.member_threshold(),
                member_index,
                value,
            ));
        }
    }

    Ok(shards)
}

/// Number of output bytes [`split_into`] needs for a given configuration.
///
/// Every shard serializes to `5 + secret_len` bytes.
///
/// # Errors
/// Same validation errors as [`split`].
pub fn serialized_capacity(
    group_threshold: u8,
    groups: &[GroupDescriptor],
    secret_len: usize,
) -> Result<usize> {
    check_secret_length(secret_len)?;
    let total_shards = count_shards(group_threshold, groups)?;
    Ok(usize::from(total_shards) * (METADATA_LENGTH_BYTES + secret_len))
}

/// Splits `master_secret` and serializes every shard contiguously into
/// `output`, returning the number of shards written.
///
/// Capacity is checked before any secret material is processed, so an
/// undersized buffer never receives a partial write. Should a later
/// serialization step fail regardless, the entire output buffer is zeroed
/// before the error is returned.
///
/// # Errors
/// [`Error::InsufficientSpace`] if `output` cannot hold all shards, plus
/// every error [`split`] can return.
pub fn split_into<R: RngCore + CryptoRng>(
    group_threshold: u8,
    groups: &[GroupDescriptor],
    master_secret: &[u8],
    rng: &mut R,
    output: &mut [u8],
) -> Result<usize> {
    let needed = serialized_capacity(group_threshold, groups, master_secret.len())?;
    if output.len() < needed {
        return Err(Error::InsufficientSpace);
    }

    let shards = split(group_threshold, groups, master_secret, rng)?;

    let mut written = 0;
    for shard in &shards {
        match shard.encode_into(&mut output[written..]) {
            Ok(bytes) => written += bytes,
            Err(err) => {
                // leave no partial secret behind
                output.zeroize();
                return Err(err);
            }
        }
    }

    Ok(shards.len())
}
