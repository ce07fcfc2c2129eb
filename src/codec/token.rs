//! Token encoding: snapshot -> bincode -> base64url (no padding).
//!
//! The output only uses `[A-Za-z0-9_-]`, so it can go into a query
//! parameter verbatim.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use bincode::Options;

use super::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::core::RankError;

fn bincode_options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new().with_limit(limit)
}

/// Encode a snapshot into a URL-safe token.
pub fn encode_token(snapshot: &Snapshot) -> Result<String, RankError> {
    let bytes = bincode_options(u64::MAX)
        .serialize(snapshot)
        .map_err(|e| RankError::TokenDecode(format!("encode: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a token, rejecting anything longer than `max_len` characters.
pub fn decode_token(token: &str, max_len: usize) -> Result<Snapshot, RankError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RankError::TokenDecode("empty token".to_string()));
    }
    if token.len() > max_len {
        return Err(RankError::TokenDecode(format!(
            "token length {} exceeds limit {}",
            token.len(),
            max_len
        )));
    }

    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    // Decoded data can never legitimately exceed its own byte length.
    let snapshot: Snapshot = bincode_options(bytes.len() as u64).deserialize(&bytes)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(RankError::TokenDecode(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::snapshot::CardSnapshot;
    use crate::core::CardId;

    fn sample() -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            cards: vec![
                CardSnapshot { id: CardId::new(0), current_rank: 3, final_rank: None },
                CardSnapshot { id: CardId::new(1), current_rank: 1, final_rank: Some(1) },
            ],
            current_card_index: Some(1),
            round_number: Some(2),
            ended: Some(false),
        }
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_token(&sample()).unwrap();
        assert!(!token.is_empty());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_decode_matches() {
        let token = encode_token(&sample()).unwrap();
        assert_eq!(decode_token(&token, 1024).unwrap(), sample());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode_token("not*base64!", 1024).unwrap_err();
        assert!(matches!(err, RankError::TokenDecode(_)));
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let token = encode_token(&sample()).unwrap();
        let cut = &token[..token.len() / 2];
        assert!(decode_token(cut, 1024).is_err());
    }

    #[test]
    fn test_decode_rejects_long_token() {
        let token = encode_token(&sample()).unwrap();
        assert!(decode_token(&token, 4).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let mut snap = sample();
        snap.version = 99;
        let token = encode_token(&snap).unwrap();
        assert!(decode_token(&token, 1024).is_err());
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(decode_token("", 1024).is_err());
        assert!(decode_token("   ", 1024).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_trailing_field() {
        // `ended: Some(false)` is the last two bytes: option tag and value.
        let mut bytes = bincode_options(u64::MAX).serialize(&sample()).unwrap();
        bytes.truncate(bytes.len() - 2);
        let token = URL_SAFE_NO_PAD.encode(bytes);

        assert!(decode_token(&token, 1024).is_err());
    }
}
