//! Shard structure and its fixed-layout byte encoding.
//!
//! A serialized shard is a 5-byte metadata header followed by the share
//! value. The header packs all group/member bookkeeping into nibbles:
//!
//! ```text
//! byte 0..2   identifier (16 bits, big-endian)
//! byte 2      group-threshold - 1 (high nibble) | group-count - 1 (low nibble)
//! byte 3      group-index (high nibble)         | member-threshold - 1 (low nibble)
//! byte 4      reserved, MUST be zero (high nibble) | member-index (low nibble)
//! ```
//!
//! Thresholds and counts are stored minus one so the 1..=16 range fits a
//! nibble; indices are stored as-is (0..=15). The layout is a compatibility
//! surface and must be reproduced bit-exactly.

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Length of the packed metadata header.
pub const METADATA_LENGTH_BYTES: usize = 5;

/// Minimum master secret length in bytes (128-bit strength).
pub const MIN_STRENGTH_BYTES: usize = 16;

/// Maximum master secret length in bytes (256-bit strength).
pub const MAX_STRENGTH_BYTES: usize = 32;

/// Smallest well-formed serialized shard.
pub const MIN_SERIALIZED_LENGTH_BYTES: usize = METADATA_LENGTH_BYTES + MIN_STRENGTH_BYTES;

/// Hard upper bound on the number of groups in one split.
pub const MAX_GROUP_COUNT: usize = 16;

/// Hard upper bound on the number of members in one group.
pub const MAX_MEMBER_COUNT: usize = 16;

/// Validates a secret length for both splitting and shard decoding.
///
/// The two-level split feeds the secret through the finite-field primitive
/// twice, which requires an even byte length.
///
/// # Errors
/// Returns [`Error::SecretTooShort`], [`Error::SecretTooLong`] or
/// [`Error::SecretLengthNotEven`].
pub fn check_secret_length(len: usize) -> Result<()> {
    if len < MIN_STRENGTH_BYTES {
        return Err(Error::SecretTooShort);
    }
    if len > MAX_STRENGTH_BYTES {
        return Err(Error::SecretTooLong);
    }
    if len % 2 != 0 {
        return Err(Error::SecretLengthNotEven);
    }
    Ok(())
}

/// One output unit of a split: packed metadata plus a share value.
///
/// All shards produced by a single split share the same `identifier`,
/// `group_threshold`, `group_count` and value length. The share value is
/// held in [`Zeroizing`] storage and wiped when the shard is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Shard {
    identifier: u16,
    group_threshold: u8,
    group_count: u8,
    group_index: u8,
    member_threshold: u8,
    member_index: u8,
    value: Zeroizing<Vec<u8>>,
}

impl Shard {
    pub(crate) fn new(
        identifier: u16,
        group_threshold: u8,
        group_count: u8,
        group_index: u8,
        member_threshold: u8,
        member_index: u8,
        value: Zeroizing<Vec<u8>>,
    ) -> Self {
        Self {
            identifier,
            group_threshold,
            group_count,
            group_index,
            member_threshold,
            member_index,
            value,
        }
    }

    /// Random tag binding all shards of one split operation together.
    #[must_use]
    pub fn identifier(&self) -> u16 {
        self.identifier
    }

    /// Number of groups required to reconstruct the secret.
    #[must_use]
    pub fn group_threshold(&self) -> u8 {
        self.group_threshold
    }

    /// Total number of groups in the originating split.
    #[must_use]
    pub fn group_count(&self) -> u8 {
        self.group_count
    }

    /// Which group this shard belongs to (0-based).
    #[must_use]
    pub fn group_index(&self) -> u8 {
        self.group_index
    }

    /// Member shards required within this shard's group.
    #[must_use]
    pub fn member_threshold(&self) -> u8 {
        self.member_threshold
    }

    /// Which member within the group this shard is (0-based).
    #[must_use]
    pub fn member_index(&self) -> u8 {
        self.member_index
    }

    /// The share value bytes.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Serialized length of this shard: header plus value.
    #[must_use]
    pub fn serialized_len(&self) -> usize {
        METADATA_LENGTH_BYTES + self.value.len()
    }

    /// Packs this shard into `destination`, returning the bytes written.
    ///
    /// # Errors
    /// Returns [`Error::InsufficientSpace`] if `destination` is too small.
    /// Nothing is written in that case.
    pub fn encode_into(&self, destination: &mut [u8]) -> Result<usize> {
        let len = self.serialized_len();
        if destination.len() < len {
            return Err(Error::InsufficientSpace);
        }

        destination[0..2].copy_from_slice(&self.identifier.to_be_bytes());
        destination[2] = (((self.group_threshold - 1) & 0xf) << 4) | ((self.group_count - 1) & 0xf);
        destination[3] = ((self.group_index & 0xf) << 4) | ((self.member_threshold - 1) & 0xf);
        destination[4] = self.member_index & 0xf;
        destination[METADATA_LENGTH_BYTES..len].copy_from_slice(&self.value);

        Ok(len)
    }

    /// Serializes this shard into a freshly allocated zeroizing buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(vec![0u8; self.serialized_len()]);
        // cannot fail: the buffer is sized exactly
        let _ = self.encode_into(&mut bytes);
        bytes
    }

    /// Reconstructs a shard from its serialized form.
    ///
    /// Only structural fields are checked here; cross-shard consistency is
    /// the combine layer's job.
    ///
    /// # Errors
    /// Returns [`Error::NotEnoughSerializedBytes`] if `source` is below the
    /// minimum encoding, [`Error::InvalidGroupThreshold`] if the decoded
    /// group threshold exceeds the group count,
    /// [`Error::InvalidReservedBits`] if the reserved nibble is nonzero, or
    /// a secret-length error if the value length is out of range.
    pub fn decode(source: &[u8]) -> Result<Self> {
        if source.len() < MIN_SERIALIZED_LENGTH_BYTES {
            return Err(Error::NotEnoughSerializedBytes);
        }

        let group_threshold = (source[2] >> 4) + 1;
        let group_count = (source[2] & 0xf) + 1;
        if group_threshold > group_count {
            return Err(Error::InvalidGroupThreshold);
        }
        if source[4] >> 4 != 0 {
            return Err(Error::InvalidReservedBits);
        }

        let value = &source[METADATA_LENGTH_BYTES..];
        check_secret_length(value.len())?;

        Ok(Self {
            identifier: u16::from_be_bytes([source[0], source[1]]),
            group_threshold,
            group_count,
            group_index: source[3] >> 4,
            member_threshold: (source[3] & 0xf) + 1,
            member_index: source[4] & 0xf,
            value: Zeroizing::new(value.to_vec()),
        })
    }
}
