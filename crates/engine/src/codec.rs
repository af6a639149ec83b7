//! Continuation token codec
//!
//! A continuation token is the transport-safe encoding of the exact byte
//! sequence of the last term a page emitted. Both directions use URL-safe
//! no-padding base64, so `decode(encode(b)) == b` holds for every byte
//! sequence.
//!
//! Earlier generations of this read path encoded URL-safe but decoded with
//! the standard alphabet, silently mis-decoding any token whose payload
//! produced `-` or `_`. Tokens minted by that encoder were URL-safe and
//! remain decodable here; raw standard-alphabet tokens are rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use entropy_core::{Error, Result};

/// Encode a raw term key as a transport-safe continuation token
pub fn encode_continuation(key: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(key)
}

/// Decode a continuation token back to the raw term key it was minted from
///
/// # Errors
///
/// Returns `Error::MalformedContinuation` if the token is not valid
/// URL-safe no-padding base64.
pub fn decode_continuation(token: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| Error::MalformedContinuation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip_simple_key() {
        let key = b"1 p1 A B K2 h3";
        let token = encode_continuation(key);
        assert_eq!(decode_continuation(&token).unwrap(), key);
    }

    #[test]
    fn test_token_is_url_safe_and_unpadded() {
        // 0xfb 0xff encodes to "+/8=" under the standard alphabet
        let token = encode_continuation(&[0xfb, 0xff]);
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
        assert_eq!(token, "-_8");
    }

    #[test]
    fn test_round_trip_alphabet_boundary_bytes() {
        // These payloads produce '-'/'_' in the token, exactly the bytes
        // the legacy standard-alphabet decoder mangled.
        let key: Vec<u8> = vec![0xfb, 0xef, 0xff, 0x00, 0x3e, 0x3f];
        let token = encode_continuation(&key);
        assert_eq!(decode_continuation(&token).unwrap(), key);
    }

    #[test]
    fn test_standard_alphabet_token_rejected() {
        // A legacy caller handing us raw standard-alphabet base64 gets a
        // decode error instead of silently wrong bytes.
        let err = decode_continuation("+/8=").unwrap_err();
        assert!(matches!(
            err,
            entropy_core::Error::MalformedContinuation(_)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(decode_continuation("not!!a!!token").is_err());
    }

    #[test]
    fn test_empty_token_decodes_to_empty_key() {
        assert_eq!(decode_continuation("").unwrap(), Vec::<u8>::new());
    }

    proptest! {
        #[test]
        fn prop_round_trip_all_byte_sequences(
            key in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let token = encode_continuation(&key);
            prop_assert_eq!(decode_continuation(&token).unwrap(), key);
        }
    }
}
