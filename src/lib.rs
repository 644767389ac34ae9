//! Sharded Secret Key Recovery (SSKR).
//!
//! Splits a master secret into shards using a two-level threshold scheme
//! (an outer threshold across groups, an inner threshold across each
//! group's members) and reconstructs it from any sufficient subset. The
//! shard byte layout is a fixed compatibility format; see [`shard`].
//!
//! Randomness is injected by the caller, and every buffer that holds
//! secret material is wiped via [`zeroize`] before it is released.
//!
//! ```rust
//! use rand::rngs::OsRng;
//! use sskr::{GroupDescriptor, combine, split};
//!
//! # fn main() -> sskr::Result<()> {
//! let secret = [7u8; 16];
//! let groups = [GroupDescriptor::new(2, 3)?];
//!
//! let shards = split(1, &groups, &secret, &mut OsRng)?;
//! let serialized: Vec<_> = shards.iter().map(|s| s.to_bytes()).collect();
//!
//! // any 2 of the 3 shards recover the secret
//! let recovered = combine(&serialized[1..])?;
//! assert_eq!(&recovered[..], &secret);
//! # Ok(())
//! # }
//! ```

pub mod combine;
pub mod domain;
pub mod error;
pub mod shard;
pub mod split;
mod sss;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;

pub use combine::{combine, combine_shards};
pub use domain::{GroupDescriptor, count_shards};
pub use error::{Error, Result};
pub use shard::{
    MAX_GROUP_COUNT, MAX_MEMBER_COUNT, MAX_STRENGTH_BYTES, METADATA_LENGTH_BYTES,
    MIN_SERIALIZED_LENGTH_BYTES, MIN_STRENGTH_BYTES, Shard, check_secret_length,
};
pub use split::{serialized_capacity, split, split_into};
