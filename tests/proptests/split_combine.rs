//! Property tests for split/combine workflows

use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sskr::{Error, GroupDescriptor, Shard, combine_shards, count_shards, split};

/// Wrapper for valid master secrets (even length, 16..=32 bytes)
#[derive(Clone, Debug)]
struct ValidSecret(Vec<u8>);

impl Arbitrary for ValidSecret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 16 + 2 * (usize::arbitrary(g) % 9); // 16..=32, even
        let mut bytes = vec![0u8; len];
        for byte in &mut bytes {
            *byte = u8::arbitrary(g);
        }
        ValidSecret(bytes)
    }
}

/// Wrapper for valid group configurations (group threshold + descriptors)
#[derive(Clone, Debug)]
struct ValidGroupConfig {
    group_threshold: u8,
    groups: Vec<GroupDescriptor>,
}

impl Arbitrary for ValidGroupConfig {
    fn arbitrary(g: &mut Gen) -> Self {
        // keep configurations small enough that splitting stays fast
        let group_count = (u8::arbitrary(g) % 4) + 1; // 1..=4

        let groups = (0..group_count)
            .map(|_| {
                let member_count = (u8::arbitrary(g) % 5) + 1; // 1..=5
                // the singleton rule forbids 1-of-m for m > 1
                let member_threshold = if member_count == 1 {
                    1
                } else {
                    (u8::arbitrary(g) % (member_count - 1)) + 2 // 2..=member_count
                };
                GroupDescriptor::new(member_threshold, member_count).expect("valid descriptor")
            })
            .collect();

        let group_threshold = (u8::arbitrary(g) % group_count) + 1; // 1..=group_count

        ValidGroupConfig {
            group_threshold,
            groups,
        }
    }
}

/// First `group_threshold` groups, each cut down to its member threshold
fn threshold_subset(shards: &[Shard], group_threshold: u8) -> Vec<Shard> {
    let mut groups_seen: Vec<u8> = Vec::new();
    let mut selected = Vec::new();

    for shard in shards {
        if !groups_seen.contains(&shard.group_index()) {
            groups_seen.push(shard.group_index());
        }
        let position = groups_seen
            .iter()
            .position(|&index| index == shard.group_index())
            .expect("just inserted");

        if position < usize::from(group_threshold)
            && shard.member_index() < shard.member_threshold()
        {
            selected.push(shard.clone());
        }
    }

    selected
}

/// Splitting and combining every produced shard recovers the secret, and
/// the shard count matches `count_shards`
#[quickcheck]
fn prop_split_combine_round_trip(secret: ValidSecret, config: ValidGroupConfig, seed: u64) -> bool {
    let ValidSecret(secret) = secret;
    let mut rng = StdRng::seed_from_u64(seed);

    let Ok(shards) = split(config.group_threshold, &config.groups, &secret, &mut rng) else {
        return false;
    };

    let expected = count_shards(config.group_threshold, &config.groups).unwrap();
    if shards.len() != usize::from(expected) {
        return false;
    }

    match combine_shards(&shards) {
        Ok(recovered) => recovered[..] == secret[..],
        Err(_) => false,
    }
}

/// Any exactly-threshold-satisfying subset recovers the secret
#[quickcheck]
fn prop_threshold_subset_recovers(secret: ValidSecret, config: ValidGroupConfig, seed: u64) -> bool {
    let ValidSecret(secret) = secret;
    let mut rng = StdRng::seed_from_u64(seed);

    let shards = split(config.group_threshold, &config.groups, &secret, &mut rng).unwrap();
    let subset = threshold_subset(&shards, config.group_threshold);

    match combine_shards(&subset) {
        Ok(recovered) => recovered[..] == secret[..],
        Err(_) => false,
    }
}

/// Dropping one member below a group's threshold fails with
/// NotEnoughMemberShards, never with a wrong secret
#[quickcheck]
fn prop_below_member_threshold_fails(
    secret: ValidSecret,
    config: ValidGroupConfig,
    seed: u64,
) -> TestResult {
    let ValidSecret(secret) = secret;
    let mut rng = StdRng::seed_from_u64(seed);

    let shards = split(config.group_threshold, &config.groups, &secret, &mut rng).unwrap();
    let subset = threshold_subset(&shards, config.group_threshold);

    // find a selected group that actually needs more than one member
    let Some(victim) = subset
        .iter()
        .find(|s| s.member_threshold() > 1)
        .map(|s| (s.group_index(), s.member_index()))
    else {
        return TestResult::discard();
    };

    let short: Vec<Shard> = subset
        .iter()
        .filter(|s| (s.group_index(), s.member_index()) != victim)
        .cloned()
        .collect();

    match combine_shards(&short) {
        Err(Error::NotEnoughMemberShards { group_index, .. }) => {
            TestResult::from_bool(group_index == victim.0)
        }
        _ => TestResult::failed(),
    }
}

/// Supplying fewer distinct groups than the group threshold fails with
/// NotEnoughGroups
#[quickcheck]
fn prop_below_group_threshold_fails(
    secret: ValidSecret,
    config: ValidGroupConfig,
    seed: u64,
) -> TestResult {
    if config.group_threshold < 2 {
        return TestResult::discard();
    }

    let ValidSecret(secret) = secret;
    let mut rng = StdRng::seed_from_u64(seed);

    let shards = split(config.group_threshold, &config.groups, &secret, &mut rng).unwrap();
    let subset = threshold_subset(&shards, config.group_threshold - 1);

    TestResult::from_bool(matches!(
        combine_shards(&subset),
        Err(Error::NotEnoughGroups { .. })
    ))
}
