//! Solidity bindings for the Wyvern v2 exchange contracts and the ERC-20,
//! ERC-721 and ERC-1155 token interfaces used by OpenSea orders.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{
    IERC1155, IERC20, IERC721, ProxyRegistry, WyvernAtomicizer, WyvernExchange,
};
