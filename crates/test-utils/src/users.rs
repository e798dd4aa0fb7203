use alloy::{
    primitives::Address,
    signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
};
use std::sync::LazyLock;

/// Test signers used in tests.
pub static TEST_SIGNERS: LazyLock<[PrivateKeySigner; 10]> = LazyLock::new(|| {
    core::array::from_fn(|i| {
        PrivateKeySigner::from(SigningKey::from_slice(&[i as u8 + 1; 32]).unwrap())
    })
});

/// Test users used in tests. Addresses corresponding to [`TEST_SIGNERS`].
pub static TEST_USERS: LazyLock<[Address; 10]> =
    LazyLock::new(|| TEST_SIGNERS.each_ref().map(|s| s.address()));

/// The account that makes and takes orders in the scenario tests.
pub static ALEX: LazyLock<Address> = LazyLock::new(|| TEST_USERS[0]);

/// A second account, used as the recipient of matched sell orders.
pub static ALEX_2: LazyLock<Address> = LazyLock::new(|| TEST_USERS[1]);
