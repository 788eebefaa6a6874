//! Renders token transfers into the `data` field grammar.
//!
//! ```text
//! DCDTTransfer@<identifier>@<amount>
//! DCDTNFTTransfer@<identifier>@<nonce>@<amount>@<receiver>
//! MultiDCDTNFTTransfer@<receiver>@<count>(@<identifier>@<nonce>@<amount>)*
//! ```
//!
//! Every argument is hex, see [`crate::codec`]. Identifiers are reduced to
//! their collection form first, so `NFT-123456-0a` and `NFT-123456` encode
//! the same way. The nonce always comes from [`Token::nonce`], and a nonce
//! suffix that disagrees with it is rejected.

use crate::address::Address;
use crate::codec;
use crate::tokens::{Token, TokenComputer, TokenError, TokenTransfer};

/// Function name of a single fungible transfer.
pub const DCDT_TRANSFER: &str = "DCDTTransfer";

/// Function name of a single NFT / SFT transfer.
pub const DCDT_NFT_TRANSFER: &str = "DCDTNFTTransfer";

/// Function name of a multi-token transfer.
pub const MULTI_DCDT_NFT_TRANSFER: &str = "MultiDCDTNFTTransfer";

/// Builds the argument lists of the transfer built-in functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenTransfersDataBuilder {
    token_computer: TokenComputer,
}

impl TokenTransfersDataBuilder {
    /// Creates a builder backed by `token_computer`.
    pub fn new(token_computer: TokenComputer) -> Self {
        Self { token_computer }
    }

    /// `DCDTTransfer@<identifier>@<amount>`, as separate parts.
    pub fn build_args_for_dcdt_transfer(
        &self,
        transfer: &TokenTransfer,
    ) -> Result<Vec<String>, TokenError> {
        Ok(vec![
            DCDT_TRANSFER.to_string(),
            self.encode_identifier(&transfer.token)?,
            codec::encode_biguint(&transfer.amount),
        ])
    }

    /// `DCDTNFTTransfer@<identifier>@<nonce>@<amount>@<receiver>`, as
    /// separate parts.
    pub fn build_args_for_single_dcdt_nft_transfer(
        &self,
        transfer: &TokenTransfer,
        receiver: &Address,
    ) -> Result<Vec<String>, TokenError> {
        Ok(vec![
            DCDT_NFT_TRANSFER.to_string(),
            self.encode_identifier(&transfer.token)?,
            self.token_computer.nonce_to_hex(transfer.token.nonce),
            codec::encode_biguint(&transfer.amount),
            codec::encode_address(receiver),
        ])
    }

    /// `MultiDCDTNFTTransfer@<receiver>@<count>` followed by one
    /// `<identifier>@<nonce>@<amount>` triple per transfer, in input order.
    pub fn build_args_for_multi_dcdt_nft_transfer(
        &self,
        receiver: &Address,
        transfers: &[TokenTransfer],
    ) -> Result<Vec<String>, TokenError> {
        let mut args = Vec::with_capacity(3 + transfers.len() * 3);
        args.push(MULTI_DCDT_NFT_TRANSFER.to_string());
        args.push(codec::encode_address(receiver));
        args.push(codec::encode_u64(transfers.len() as u64));

        for transfer in transfers {
            args.push(self.encode_identifier(&transfer.token)?);
            args.push(self.token_computer.nonce_to_hex(transfer.token.nonce));
            args.push(codec::encode_biguint(&transfer.amount));
        }

        Ok(args)
    }

    fn encode_identifier(&self, token: &Token) -> Result<String, TokenError> {
        let parts = self
            .token_computer
            .parse_extended_identifier_parts(&token.identifier)?;
        if parts.nonce != 0 && parts.nonce != token.nonce {
            return Err(TokenError::invalid_identifier(
                &token.identifier,
                "nonce suffix disagrees with token nonce",
            ));
        }
        Ok(codec::encode_str(&format!(
            "{}-{}",
            parts.ticker, parts.random_sequence
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOB_HEX: &str = "8049d639e5a6980d1cd2392abcce41029cda74a1563523a202f09641cc2618f8";

    fn bob() -> Address {
        Address::new_from_hex(BOB_HEX, "moa").unwrap()
    }

    fn builder() -> TokenTransfersDataBuilder {
        TokenTransfersDataBuilder::new(TokenComputer::new())
    }

    #[test]
    fn fungible_transfer_args() {
        let transfer = TokenTransfer::new(Token::fungible("FOO-123456"), 1_000_000u64);
        let args = builder().build_args_for_dcdt_transfer(&transfer).unwrap();
        assert_eq!(args, ["DCDTTransfer", "464f4f2d313233343536", "0f4240"]);
    }

    #[test]
    fn nft_transfer_args() {
        let transfer = TokenTransfer::new(Token::new("NFT-123456", 10), 1u64);
        let args = builder()
            .build_args_for_single_dcdt_nft_transfer(&transfer, &bob())
            .unwrap();
        assert_eq!(
            args,
            ["DCDTNFTTransfer", "4e46542d313233343536", "0a", "01", BOB_HEX]
        );
    }

    #[test]
    fn extended_identifier_encodes_as_collection() {
        let plain = TokenTransfer::new(Token::new("NFT-123456", 10), 1u64);
        let extended = TokenTransfer::new(Token::new("NFT-123456-0a", 10), 1u64);
        assert_eq!(
            builder().build_args_for_single_dcdt_nft_transfer(&plain, &bob()),
            builder().build_args_for_single_dcdt_nft_transfer(&extended, &bob()),
        );
    }

    #[test]
    fn conflicting_nonce_suffix_rejected() {
        let fungible = TokenTransfer::new(Token::new("NFT-123456-0a", 0), 1u64);
        let err = builder().build_args_for_dcdt_transfer(&fungible).unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidIdentifier {
                identifier: "NFT-123456-0a".to_string(),
                reason: "nonce suffix disagrees with token nonce".to_string(),
            }
        );

        let other_nonce = TokenTransfer::new(Token::new("NFT-123456-0a", 5), 1u64);
        assert!(builder()
            .build_args_for_single_dcdt_nft_transfer(&other_nonce, &bob())
            .is_err());
        assert!(builder()
            .build_args_for_multi_dcdt_nft_transfer(&bob(), &[other_nonce])
            .is_err());
    }

    #[test]
    fn multi_transfer_args_keep_order() {
        let transfers = [
            TokenTransfer::new(Token::new("NFT-123456", 10), 1u64),
            TokenTransfer::new(Token::fungible("FOO-123456"), 256u64),
        ];
        let args = builder()
            .build_args_for_multi_dcdt_nft_transfer(&bob(), &transfers)
            .unwrap();
        assert_eq!(
            codec::join_args(&args),
            format!(
                "MultiDCDTNFTTransfer@{}@02@4e46542d313233343536@0a@01@464f4f2d313233343536@@0100",
                BOB_HEX
            )
        );
    }

    #[test]
    fn malformed_identifier_propagates() {
        let transfer = TokenTransfer::new(Token::fungible("not-valid"), 1u64);
        assert!(matches!(
            builder().build_args_for_dcdt_transfer(&transfer),
            Err(TokenError::InvalidIdentifier { .. })
        ));
    }
}
