//! Identifier normalisation.
//!
//! Token identifiers come in two shapes:
//!
//! ```text
//! FOO-123456        collection / fungible identifier: TICKER-random
//! NFT-123456-0a     extended identifier: TICKER-random-noncehex
//! ```
//!
//! The ticker is 3 to 10 uppercase alphanumerics, the random sequence is
//! exactly six lowercase hex characters, and the nonce suffix is the minimal
//! big-endian hex of the instance nonce.

use super::types::{Token, TokenError, TokenIdentifierParts};
use crate::codec;

const MIN_TICKER_LENGTH: usize = 3;
const MAX_TICKER_LENGTH: usize = 10;
const RANDOM_SEQUENCE_LENGTH: usize = 6;
const MAX_NONCE_HEX_LENGTH: usize = 16;

/// Stateless helper that splits, validates, and renders token identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenComputer;

impl TokenComputer {
    /// Creates a computer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` for fungible tokens (nonce zero).
    pub fn is_fungible(&self, token: &Token) -> bool {
        token.nonce == 0
    }

    /// Splits `TICKER-random` on its rightmost hyphen.
    pub fn identifier_parts(&self, identifier: &str) -> Result<(String, String), TokenError> {
        let (ticker, random) = identifier
            .rsplit_once('-')
            .ok_or_else(|| TokenError::invalid_identifier(identifier, "missing '-' separator"))?;
        check_ticker(identifier, ticker)?;
        check_random_sequence(identifier, random)?;
        Ok((ticker.to_string(), random.to_string()))
    }

    /// Validates a collection identifier without splitting it.
    pub fn ensure_identifier_has_correct_structure(
        &self,
        identifier: &str,
    ) -> Result<(), TokenError> {
        self.identifier_parts(identifier).map(|_| ())
    }

    /// Minimal big-endian hex of a nonce; empty for zero.
    pub fn nonce_to_hex(&self, nonce: u64) -> String {
        codec::encode_u64(nonce)
    }

    /// Splits an identifier, with or without a nonce suffix.
    pub fn parse_extended_identifier_parts(
        &self,
        identifier: &str,
    ) -> Result<TokenIdentifierParts, TokenError> {
        let parts: Vec<&str> = identifier.split('-').collect();
        match parts.as_slice() {
            [ticker, random] => {
                check_ticker(identifier, ticker)?;
                check_random_sequence(identifier, random)?;
                Ok(TokenIdentifierParts {
                    ticker: ticker.to_string(),
                    random_sequence: random.to_string(),
                    nonce: 0,
                })
            }
            [ticker, random, nonce] => {
                check_ticker(identifier, ticker)?;
                check_random_sequence(identifier, random)?;
                Ok(TokenIdentifierParts {
                    ticker: ticker.to_string(),
                    random_sequence: random.to_string(),
                    nonce: parse_nonce_hex(identifier, nonce)?,
                })
            }
            _ => Err(TokenError::invalid_identifier(
                identifier,
                "expected TICKER-random or TICKER-random-nonce",
            )),
        }
    }

    /// `NFT-123456-0a` -> `NFT-123456`.
    pub fn extract_identifier_from_extended_identifier(
        &self,
        identifier: &str,
    ) -> Result<String, TokenError> {
        let parts = self.parse_extended_identifier_parts(identifier)?;
        Ok(format!("{}-{}", parts.ticker, parts.random_sequence))
    }

    /// `NFT-123456-0a` -> `10`; zero when there is no nonce suffix.
    pub fn extract_nonce_from_extended_identifier(
        &self,
        identifier: &str,
    ) -> Result<u64, TokenError> {
        Ok(self.parse_extended_identifier_parts(identifier)?.nonce)
    }

    /// `FOO-123456` -> `FOO`.
    pub fn extract_ticker_from_identifier(&self, identifier: &str) -> Result<String, TokenError> {
        Ok(self.parse_extended_identifier_parts(identifier)?.ticker)
    }

    /// `("NFT-123456", 10)` -> `NFT-123456-0a`. A zero nonce leaves the
    /// identifier as is.
    pub fn compute_extended_identifier_from_identifier_and_nonce(
        &self,
        identifier: &str,
        nonce: u64,
    ) -> Result<String, TokenError> {
        self.ensure_identifier_has_correct_structure(identifier)?;
        if nonce == 0 {
            return Ok(identifier.to_string());
        }
        Ok(format!("{}-{}", identifier, self.nonce_to_hex(nonce)))
    }

    /// Extended identifier of `token`.
    pub fn compute_extended_identifier(&self, token: &Token) -> Result<String, TokenError> {
        self.compute_extended_identifier_from_identifier_and_nonce(&token.identifier, token.nonce)
    }

    /// Inverse of [`parse_extended_identifier_parts`](Self::parse_extended_identifier_parts).
    pub fn compute_extended_identifier_from_parts(&self, parts: &TokenIdentifierParts) -> String {
        let identifier = format!("{}-{}", parts.ticker, parts.random_sequence);
        if parts.nonce == 0 {
            identifier
        } else {
            format!("{}-{}", identifier, self.nonce_to_hex(parts.nonce))
        }
    }
}

fn check_ticker(identifier: &str, ticker: &str) -> Result<(), TokenError> {
    if !(MIN_TICKER_LENGTH..=MAX_TICKER_LENGTH).contains(&ticker.len()) {
        return Err(TokenError::invalid_identifier(
            identifier,
            format!(
                "ticker must have between {} and {} characters",
                MIN_TICKER_LENGTH, MAX_TICKER_LENGTH
            ),
        ));
    }
    if !ticker
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return Err(TokenError::invalid_identifier(
            identifier,
            "ticker must be uppercase alphanumeric",
        ));
    }
    Ok(())
}

fn check_random_sequence(identifier: &str, random: &str) -> Result<(), TokenError> {
    let is_lower_hex = random
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if random.len() != RANDOM_SEQUENCE_LENGTH || !is_lower_hex {
        return Err(TokenError::invalid_identifier(
            identifier,
            format!(
                "random sequence must be {} lowercase hex characters",
                RANDOM_SEQUENCE_LENGTH
            ),
        ));
    }
    Ok(())
}

fn parse_nonce_hex(identifier: &str, nonce: &str) -> Result<u64, TokenError> {
    if nonce.is_empty()
        || nonce.len() > MAX_NONCE_HEX_LENGTH
        || !nonce.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(TokenError::invalid_identifier(
            identifier,
            "nonce suffix must be 1 to 16 hex characters",
        ));
    }
    u64::from_str_radix(nonce, 16)
        .map_err(|e| TokenError::invalid_identifier(identifier, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer() -> TokenComputer {
        TokenComputer::new()
    }

    #[test]
    fn fungibility_follows_nonce() {
        assert!(computer().is_fungible(&Token::fungible("FOO-123456")));
        assert!(!computer().is_fungible(&Token::new("NFT-123456", 1)));
    }

    #[test]
    fn identifier_parts_split_on_hyphen() {
        let (ticker, random) = computer().identifier_parts("FOO-123456").unwrap();
        assert_eq!(ticker, "FOO");
        assert_eq!(random, "123456");

        let (ticker, random) = computer().identifier_parts("REWA-000000").unwrap();
        assert_eq!(ticker, "REWA");
        assert_eq!(random, "000000");
    }

    #[test]
    fn malformed_identifiers_rejected() {
        for bad in [
            "FOO",
            "FOO123456",
            "FO-123456",
            "TOOLONGTICKER-123456",
            "foo-123456",
            "FOO-12345",
            "FOO-1234567",
            "FOO-ABCDEF",
            "FOO-12345g",
            "-123456",
            "FOO-",
        ] {
            assert!(
                matches!(
                    computer().identifier_parts(bad),
                    Err(TokenError::InvalidIdentifier { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn identifier_parts_rejects_extended_identifier() {
        assert!(computer().identifier_parts("NFT-123456-0a").is_err());
    }

    #[test]
    fn nonce_hex_is_minimal() {
        assert_eq!(computer().nonce_to_hex(0), "");
        assert_eq!(computer().nonce_to_hex(10), "0a");
        assert_eq!(computer().nonce_to_hex(4096), "1000");
    }

    #[test]
    fn extended_identifier_parsing() {
        let parts = computer()
            .parse_extended_identifier_parts("NFT-123456-0a")
            .unwrap();
        assert_eq!(
            parts,
            TokenIdentifierParts {
                ticker: "NFT".to_string(),
                random_sequence: "123456".to_string(),
                nonce: 10,
            }
        );
        assert_eq!(computer().compute_extended_identifier_from_parts(&parts), "NFT-123456-0a");

        let fungible = computer()
            .parse_extended_identifier_parts("FOO-123456")
            .unwrap();
        assert_eq!(fungible.nonce, 0);
        assert_eq!(computer().compute_extended_identifier_from_parts(&fungible), "FOO-123456");
    }

    #[test]
    fn extended_identifier_extraction() {
        let c = computer();
        assert_eq!(
            c.extract_identifier_from_extended_identifier("NFT-123456-0a").unwrap(),
            "NFT-123456"
        );
        assert_eq!(c.extract_nonce_from_extended_identifier("NFT-123456-0a").unwrap(), 10);
        assert_eq!(c.extract_nonce_from_extended_identifier("FOO-123456").unwrap(), 0);
        assert_eq!(c.extract_ticker_from_identifier("TEST-987654").unwrap(), "TEST");
    }

    #[test]
    fn extended_identifier_rejects_bad_nonce() {
        let c = computer();
        assert!(c.parse_extended_identifier_parts("NFT-123456-").is_err());
        assert!(c.parse_extended_identifier_parts("NFT-123456-xyz").is_err());
        assert!(c
            .parse_extended_identifier_parts("NFT-123456-00112233445566778899")
            .is_err());
        assert!(c.parse_extended_identifier_parts("A-B-C-D").is_err());
    }

    #[test]
    fn compute_extended_identifier() {
        let c = computer();
        assert_eq!(
            c.compute_extended_identifier(&Token::new("NFT-123456", 10)).unwrap(),
            "NFT-123456-0a"
        );
        assert_eq!(
            c.compute_extended_identifier(&Token::fungible("FOO-123456")).unwrap(),
            "FOO-123456"
        );
        assert!(c
            .compute_extended_identifier_from_identifier_and_nonce("bad", 1)
            .is_err());
    }
}
