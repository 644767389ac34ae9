//! Adapter over the single-level Shamir primitive.
//!
//! The SSKR layer consumes secret sharing as an abstract
//! split/recover capability; this module maps that onto `blahaj`.
//! The backend evaluates the secret at x = 0, so member or group index `i`
//! corresponds to x-coordinate `i + 1`.

use blahaj::{Share, Sharks};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Splits `secret` into `share_count` share values with the given recovery
/// threshold, in index order (index 0 first).
pub(crate) fn split_secret<R: RngCore + CryptoRng>(
    threshold: u8,
    share_count: u8,
    secret: &[u8],
    rng: &mut R,
) -> Result<Vec<Zeroizing<Vec<u8>>>> {
    let sharks = Sharks(threshold);
    let mut values = Vec::with_capacity(usize::from(share_count));

    for share in sharks.dealer_rng(secret, rng).take(usize::from(share_count)) {
        let bytes = Zeroizing::new(Vec::from(&share));
        // first byte is the dealer-assigned x-coordinate; the rest is the value
        values.push(Zeroizing::new(bytes[1..].to_vec()));
    }

    if values.len() != usize::from(share_count) {
        return Err(Error::SecretSharing("dealer produced too few shares"));
    }
    Ok(values)
}

/// Recovers a secret from `(index, value)` pairs.
///
/// The caller is responsible for supplying at least `threshold` pairs with
/// distinct indices; the backend re-checks both.
pub(crate) fn recover_secret(
    threshold: u8,
    members: &[(u8, &[u8])],
) -> Result<Zeroizing<Vec<u8>>> {
    let mut shares = Vec::with_capacity(members.len());
    for &(index, value) in members {
        let mut bytes = Zeroizing::new(Vec::with_capacity(1 + value.len()));
        bytes.push(index + 1);
        bytes.extend_from_slice(value);

        let share = Share::try_from(bytes.as_slice()).map_err(Error::SecretSharing)?;
        shares.push(share);
    }

    // the backend's recover error borrows the Sharks value, so it cannot
    // be propagated as-is
    let recovered = Sharks(threshold)
        .recover(&shares)
        .map_err(|_| Error::SecretSharing("recovery failed"))?;
    Ok(Zeroizing::new(recovered))
}
