//! Property tests for the shard byte codec

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sskr::{Error, GroupDescriptor, METADATA_LENGTH_BYTES, Shard, split};

/// A freshly split shard, built from random but valid parameters
#[derive(Clone, Debug)]
struct ArbitraryShard(Shard);

impl Arbitrary for ArbitraryShard {
    fn arbitrary(g: &mut Gen) -> Self {
        let secret_len = 16 + 2 * (usize::arbitrary(g) % 9); // 16..=32, even
        let mut secret = vec![0u8; secret_len];
        for byte in &mut secret {
            *byte = u8::arbitrary(g);
        }

        let member_count = (u8::arbitrary(g) % 5) + 2; // 2..=6
        let member_threshold = (u8::arbitrary(g) % (member_count - 1)) + 2;
        let group = GroupDescriptor::new(member_threshold, member_count).expect("valid descriptor");

        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let mut shards = split(1, &[group], &secret, &mut rng).expect("valid split");

        let pick = usize::arbitrary(g) % shards.len();
        ArbitraryShard(shards.swap_remove(pick))
    }
}

/// decode(encode(shard)) == shard for every valid shard
#[quickcheck]
fn prop_codec_round_trip(shard: ArbitraryShard) -> bool {
    let ArbitraryShard(shard) = shard;
    let bytes = shard.to_bytes();

    if bytes.len() != METADATA_LENGTH_BYTES + shard.value().len() {
        return false;
    }

    match Shard::decode(&bytes) {
        Ok(decoded) => decoded == shard,
        Err(_) => false,
    }
}

/// Any nonzero reserved bit is rejected on decode
#[quickcheck]
fn prop_reserved_bits_rejected(shard: ArbitraryShard, bit: u8) -> bool {
    let ArbitraryShard(shard) = shard;
    let mut bytes = shard.to_bytes();

    bytes[4] |= 1 << (4 + (bit % 4));
    Shard::decode(&bytes) == Err(Error::InvalidReservedBits)
}

/// Truncating below the minimum serialized length is rejected
#[quickcheck]
fn prop_truncated_shard_rejected(shard: ArbitraryShard, cut: u8) -> bool {
    let ArbitraryShard(shard) = shard;
    let bytes = shard.to_bytes();

    let keep = usize::from(cut) % 21; // anything below 5 + 16
    Shard::decode(&bytes[..keep]) == Err(Error::NotEnoughSerializedBytes)
}
