//! Test utilities for the OpenSea SDK: funded users, fixture assets, an
//! in-memory marketplace and chain, and order assertions.

pub mod assertions;
pub mod fixtures;
pub mod mocks;
pub mod users;

pub use opensea_constants::test_utils as test_constants;

/// Install a `tracing` subscriber that honors `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
