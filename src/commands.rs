use anyhow::{Context, Result, bail};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::domain::GroupDescriptor;
use crate::{combine, split};

/// Split a hex-encoded master secret into hex-encoded serialized shards.
///
/// # Errors
/// Returns an error if the secret is not valid hex or the split itself
/// fails (secret length, group configuration).
pub fn split_secret_hex(
    secret_hex: &str,
    group_threshold: u8,
    groups: &[GroupDescriptor],
) -> Result<Vec<String>> {
    let master_secret = Zeroizing::new(
        hex::decode(secret_hex.trim()).context("master secret is not valid hex")?,
    );

    let shards = split::split(group_threshold, groups, &master_secret, &mut OsRng)
        .context("failed to split master secret")?;

    Ok(shards
        .iter()
        .map(|shard| hex::encode(shard.to_bytes()))
        .collect())
}

/// Combine hex-encoded serialized shards back into the hex-encoded secret.
///
/// # Errors
/// Returns an error if any shard is not valid hex, or if decoding or
/// recombination fails.
pub fn combine_shards_hex(shard_strings: &[String]) -> Result<String> {
    if shard_strings.is_empty() {
        bail!("No shards provided");
    }

    let mut serialized = Vec::with_capacity(shard_strings.len());
    for (idx, shard_hex) in shard_strings.iter().enumerate() {
        let bytes = Zeroizing::new(
            hex::decode(shard_hex.trim())
                .with_context(|| format!("shard #{} is not valid hex", idx + 1))?,
        );
        serialized.push(bytes);
    }

    let secret = combine::combine(&serialized).context("failed to combine shards")?;
    Ok(hex::encode(&secret))
}
