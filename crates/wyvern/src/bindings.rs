#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, Bytes, U256};

mod exchange {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface WyvernExchange {
            function validateOrderParameters_(
                address[7] addrs,
                uint256[9] uints,
                uint8 feeMethod,
                uint8 side,
                uint8 saleKind,
                uint8 howToCall,
                bytes callData,
                bytes replacementPattern,
                bytes staticExtradata
            ) external view returns (bool);

            function validateOrder_(
                address[7] addrs,
                uint256[9] uints,
                uint8 feeMethod,
                uint8 side,
                uint8 saleKind,
                uint8 howToCall,
                bytes callData,
                bytes replacementPattern,
                bytes staticExtradata,
                uint8 v,
                bytes32 r,
                bytes32 s
            ) external view returns (bool);

            function cancelledOrFinalized(bytes32 hash) external view returns (bool);
        }
    );
}
pub use exchange::WyvernExchange;

mod atomicizer {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface WyvernAtomicizer {
            function atomicize(
                address[] addrs,
                uint256[] values,
                uint256[] calldataLengths,
                bytes calldatas
            ) external;
        }
    );

    impl WyvernAtomicizer::atomicizeCall {
        /// Build an atomicize call from `(target, calldata)` pairs, each sent
        /// with zero value.
        pub fn from_calls(calls: &[(Address, Bytes)]) -> Self {
            let addrs = calls.iter().map(|(target, _)| *target).collect();
            let values = vec![U256::ZERO; calls.len()];
            let calldata_lengths = calls.iter().map(|(_, data)| U256::from(data.len())).collect();
            let calldatas =
                calls.iter().flat_map(|(_, data)| data.iter().copied()).collect::<Vec<u8>>();
            Self { addrs, values, calldataLengths: calldata_lengths, calldatas: calldatas.into() }
        }

        /// Byte offset, within the selector-prefixed ABI encoding of this
        /// call, at which the concatenated `calldatas` begin.
        pub fn calldatas_offset(&self) -> usize {
            // selector, four head words, then three dynamic arrays of
            // `len` words each preceded by a length word, then the length
            // word of `calldatas`.
            let n = self.addrs.len();
            4 + 4 * 32 + 3 * (32 + 32 * n) + 32
        }
    }
}
pub use atomicizer::WyvernAtomicizer;

mod registry {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface ProxyRegistry {
            function proxies(address owner) external view returns (address);
            function registerProxy() external returns (address);
        }
    );
}
pub use registry::ProxyRegistry;

mod erc20 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface IERC20 {
            function balanceOf(address owner) external view returns (uint256);
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function transferFrom(address from, address to, uint256 amount) external returns (bool);
        }
    );
}
pub use erc20::IERC20;

mod erc721 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface IERC721 {
            function ownerOf(uint256 tokenId) external view returns (address);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function setApprovalForAll(address operator, bool approved) external;
            function transferFrom(address from, address to, uint256 tokenId) external;
        }
    );
}
pub use erc721::IERC721;

mod erc1155 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface IERC1155 {
            function balanceOf(address owner, uint256 id) external view returns (uint256);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function setApprovalForAll(address operator, bool approved) external;
            function safeTransferFrom(
                address from,
                address to,
                uint256 id,
                uint256 value,
                bytes data
            ) external;
        }
    );
}
pub use erc1155::IERC1155;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn atomicize_offset_points_at_calldatas() {
        let first = Bytes::from(vec![0xaa; 100]);
        let second = Bytes::from(vec![0xbb; 196]);
        let call = WyvernAtomicizer::atomicizeCall::from_calls(&[
            (Address::repeat_byte(1), first.clone()),
            (Address::repeat_byte(2), second.clone()),
        ]);
        let encoded = call.abi_encode();
        let offset = call.calldatas_offset();

        assert_eq!(&encoded[offset..offset + 100], first.as_ref());
        assert_eq!(&encoded[offset + 100..offset + 296], second.as_ref());
        // the length word right before the content
        assert_eq!(U256::from_be_slice(&encoded[offset - 32..offset]), U256::from(296));
    }

    #[test]
    fn atomicize_lengths_and_values() {
        let call = WyvernAtomicizer::atomicizeCall::from_calls(&[
            (Address::repeat_byte(1), Bytes::from(vec![1; 4])),
            (Address::repeat_byte(2), Bytes::from(vec![2; 8])),
        ]);
        assert_eq!(call.calldataLengths, vec![U256::from(4), U256::from(8)]);
        assert!(call.values.iter().all(|v| v.is_zero()));
        assert_eq!(call.calldatas.len(), 12);
    }

    #[test]
    fn erc721_and_erc20_transfer_from_share_a_selector() {
        assert_eq!(IERC721::transferFromCall::SELECTOR, IERC20::transferFromCall::SELECTOR);
        assert_ne!(IERC1155::safeTransferFromCall::SELECTOR, IERC721::transferFromCall::SELECTOR);
    }
}
