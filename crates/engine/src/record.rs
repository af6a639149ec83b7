//! Entropy record decoder
//!
//! A term's UTF-8 text is six space-separated fields in fixed order:
//!
//! ```text
//! vsn partition bucket_type bucket_name key hash
//! ```
//!
//! `partition` is compared without any further decoding (the cheap filter
//! the cursor applies to every live term). The three bucket/key fields are
//! plain text for `vsn == 1` and standard-alphabet base64 for every other
//! version. The dispatch is a closed two-branch check, not a table of known
//! versions, so an unrecognized future version falls into the decode
//! branch. `hash` is already base64 and is forwarded unmodified.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use entropy_core::{EntropyRecord, Error, Result, Term};

/// Number of space-separated fields in an entropy term
const TERM_FIELD_COUNT: usize = 6;

/// The split-but-undecoded fields of one entropy term
///
/// Splitting is cheap and done once per live term; the version-specific
/// decoding in [`TermFields::decode`] only runs for terms that pass the
/// partition filter.
#[derive(Debug, Clone, Copy)]
pub struct TermFields<'a> {
    raw: &'a str,
    /// Encoding version, not yet parsed
    pub vsn: &'a str,
    /// Partition identifier, plain text in every version
    pub partition: &'a str,
    bucket_type: &'a str,
    bucket_name: &'a str,
    key: &'a str,
    hash: &'a str,
}

impl<'a> TermFields<'a> {
    /// Split term text into its six fields
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedTerm` if the text does not have exactly
    /// six space-separated fields.
    pub fn parse(text: &'a str) -> Result<Self> {
        let fields: Vec<&str> = text.split(' ').collect();
        if fields.len() != TERM_FIELD_COUNT {
            return Err(Error::MalformedTerm {
                term: text.to_string(),
                reason: format!(
                    "expected {TERM_FIELD_COUNT} fields, found {}",
                    fields.len()
                ),
            });
        }
        Ok(TermFields {
            raw: text,
            vsn: fields[0],
            partition: fields[1],
            bucket_type: fields[2],
            bucket_name: fields[3],
            key: fields[4],
            hash: fields[5],
        })
    }

    /// Fully decode these fields into an entropy record
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedTerm` for a non-numeric version, invalid
    /// base64 in a bucket/key field, or decoded bytes that are not UTF-8.
    pub fn decode(&self) -> Result<EntropyRecord> {
        let vsn: i32 = self.vsn.parse().map_err(|_| self.malformed(format!(
            "non-numeric version '{}'",
            self.vsn
        )))?;

        let (bucket_type, bucket_name, key) = match vsn {
            1 => (
                self.bucket_type.to_string(),
                self.bucket_name.to_string(),
                self.key.to_string(),
            ),
            _ => (
                self.decode_base64_part(self.bucket_type)?,
                self.decode_base64_part(self.bucket_name)?,
                self.decode_base64_part(self.key)?,
            ),
        };

        Ok(EntropyRecord {
            vsn,
            bucket_type,
            bucket_name,
            key,
            hash: self.hash.to_string(),
        })
    }

    fn decode_base64_part(&self, part: &str) -> Result<String> {
        let bytes = STANDARD
            .decode(part)
            .map_err(|e| self.malformed(format!("invalid base64 field '{part}': {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| self.malformed(format!("field '{part}' decoded to non-UTF-8 bytes: {e}")))
    }

    fn malformed(&self, reason: String) -> Error {
        Error::MalformedTerm {
            term: self.raw.to_string(),
            reason,
        }
    }
}

/// Decode a full term into an entropy record in one step
///
/// Convenience for callers outside the cursor loop (which splits and
/// filters before decoding).
///
/// # Errors
///
/// Returns `Error::MalformedTerm` on non-UTF-8 term bytes or any of the
/// failures described on [`TermFields`].
pub fn decode_term(term: &Term) -> Result<EntropyRecord> {
    TermFields::parse(term.text()?)?.decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_six_fields() {
        let fields = TermFields::parse("1 p1 A B K1 h1").unwrap();
        assert_eq!(fields.vsn, "1");
        assert_eq!(fields.partition, "p1");
        assert_eq!(fields.bucket_type, "A");
        assert_eq!(fields.bucket_name, "B");
        assert_eq!(fields.key, "K1");
        assert_eq!(fields.hash, "h1");
    }

    #[test]
    fn test_parse_rejects_too_few_fields() {
        let err = TermFields::parse("1 p1 A B").unwrap_err();
        assert!(err.to_string().contains("expected 6 fields, found 4"));
    }

    #[test]
    fn test_parse_rejects_too_many_fields() {
        assert!(TermFields::parse("1 p1 A B K1 h1 extra").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert!(TermFields::parse("").is_err());
    }

    #[test]
    fn test_vsn1_fields_pass_through_unchanged() {
        // For vsn=1 no base64 transform is applied, even to text that
        // happens to be valid base64.
        let record = TermFields::parse("1 p1 dHlwZQ== bucket key h1")
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(record.vsn, 1);
        assert_eq!(record.bucket_type, "dHlwZQ==");
        assert_eq!(record.bucket_name, "bucket");
        assert_eq!(record.key, "key");
        assert_eq!(record.hash, "h1");
    }

    #[test]
    fn test_other_vsn_base64_decodes_fields() {
        // "dHlwZQ==" = "type", "YnVja2V0" = "bucket", "a2V5" = "key"
        let record = TermFields::parse("2 p1 dHlwZQ== YnVja2V0 a2V5 aGFzaA==")
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(record.vsn, 2);
        assert_eq!(record.bucket_type, "type");
        assert_eq!(record.bucket_name, "bucket");
        assert_eq!(record.key, "key");
        // hash is forwarded as-is, never decoded
        assert_eq!(record.hash, "aGFzaA==");
    }

    #[test]
    fn test_unknown_future_vsn_takes_decode_branch() {
        // The dispatch is ==1 vs everything else, so vsn 7 decodes
        let record = TermFields::parse("7 p1 dHlwZQ== YnVja2V0 a2V5 h")
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(record.vsn, 7);
        assert_eq!(record.bucket_type, "type");
    }

    #[test]
    fn test_vsn_zero_takes_decode_branch() {
        let record = TermFields::parse("0 p1 dHlwZQ== YnVja2V0 a2V5 h")
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(record.vsn, 0);
        assert_eq!(record.key, "key");
    }

    #[test]
    fn test_non_numeric_vsn_is_decode_error() {
        let err = TermFields::parse("x p1 A B K1 h1")
            .unwrap()
            .decode()
            .unwrap_err();
        assert!(err.to_string().contains("non-numeric version"));
    }

    #[test]
    fn test_invalid_base64_field_is_decode_error() {
        let err = TermFields::parse("2 p1 !!! YnVja2V0 a2V5 h")
            .unwrap()
            .decode()
            .unwrap_err();
        assert!(err.to_string().contains("invalid base64 field"));
    }

    #[test]
    fn test_decode_term_end_to_end() {
        let term = Term::from("1 p1 A B K1 h1");
        let record = decode_term(&term).unwrap();
        assert_eq!(record.vsn, 1);
        assert_eq!(record.key, "K1");
    }

    #[test]
    fn test_decode_term_rejects_invalid_utf8() {
        let term = Term::from_bytes(vec![0xff, 0xfe, 0xfd]);
        assert!(decode_term(&term).is_err());
    }
}
