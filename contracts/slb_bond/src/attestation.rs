//! Device attestation for impact measurements.
//!
//! A reading is authentic when its digest was produced for the exact
//! (device, reporter, values) tuple. The reporter half of the binding is the
//! address that registered the device, so a digest computed for any other
//! reporter, device or value fails the check.

use soroban_sdk::{log, xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::storage::{get_device_reporter, KpiVector};

/// SHA-256 over `xdr(device_id) || xdr(reporter) || be128(v1) || be128(v2) || be128(v3)`.
pub fn attestation_digest(
    env: &Env,
    device_id: &String,
    reporter: &Address,
    values: &KpiVector,
) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.append(&device_id.clone().to_xdr(env));
    payload.append(&reporter.clone().to_xdr(env));
    payload.extend_from_array(&values.0.to_be_bytes());
    payload.extend_from_array(&values.1.to_be_bytes());
    payload.extend_from_array(&values.2.to_be_bytes());

    env.crypto().sha256(&payload).into()
}

/// Recompute the digest for the registered reporter of `device_id` and
/// compare. Unregistered devices never verify.
pub fn check_device(env: &Env, device_id: &String, digest: &BytesN<32>, values: &KpiVector) -> bool {
    match get_device_reporter(env, device_id) {
        Some(reporter) => attestation_digest(env, device_id, &reporter, values) == *digest,
        None => {
            log!(env, "attestation: unregistered device", device_id.clone());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_digest_is_deterministic() {
        let env = Env::default();
        let reporter = Address::generate(&env);
        let device = String::from_str(&env, "123");

        let first = attestation_digest(&env, &device, &reporter, &(1, 2, 3));
        let second = attestation_digest(&env, &device, &reporter, &(1, 2, 3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_digest_binds_every_field() {
        let env = Env::default();
        let reporter = Address::generate(&env);
        let other = Address::generate(&env);
        let device = String::from_str(&env, "123");
        let base = attestation_digest(&env, &device, &reporter, &(1, 2, 3));

        assert_ne!(
            base,
            attestation_digest(&env, &String::from_str(&env, "124"), &reporter, &(1, 2, 3))
        );
        assert_ne!(base, attestation_digest(&env, &device, &other, &(1, 2, 3)));
        assert_ne!(base, attestation_digest(&env, &device, &reporter, &(1, 2, 4)));
        assert_ne!(base, attestation_digest(&env, &device, &reporter, &(3, 2, 1)));
    }
}
