//! DNS stamp (`sdns://`) decoding.
//!
//! Wire layout of a DoH stamp after base64url decoding:
//!
//! ```text
//! [protocol: 1][props: 8][LP address][VLP hashes][LP hostname][LP path]
//! ```
//!
//! LP is a one-byte length followed by that many bytes. VLP is a run of LP
//! segments whose length byte carries a continuation flag in the high bit.

mod cursor;

pub use cursor::ByteCursor;

use crate::{StampDescriptor, StampError, DEFAULT_DOH_PATH, PROTOCOL_DOH};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Prefix every stamp starts with.
pub const STAMP_PREFIX: &str = "sdns://";

/// Standard alphabet that accepts missing padding and stray trailing bits.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a single `sdns://` stamp.
///
/// Stamps for protocols other than DoH decode successfully but carry only
/// their protocol id, so callers can tell "not DoH" apart from "malformed".
pub fn decode_stamp(stamp: &str) -> Result<StampDescriptor, StampError> {
    let payload = stamp
        .strip_prefix(STAMP_PREFIX)
        .ok_or(StampError::MissingPrefix)?
        .trim();
    if payload.is_empty() {
        return Err(StampError::Empty);
    }

    let bytes = decode_base64url(payload)?;
    let mut cursor = ByteCursor::new(&bytes);

    let protocol = cursor.read_u8().ok_or(StampError::EmptyPayload)?;
    if protocol != PROTOCOL_DOH {
        return Ok(StampDescriptor::other(protocol));
    }

    let props = u64::from_le_bytes(cursor.read_array::<8>()?);
    let address = cursor.read_lp();
    // Hashes are skipped, not verified.
    let _hashes = cursor.read_vlp();
    let hostname = cursor.read_lp();
    let mut path = cursor.read_lp();
    if path.is_empty() {
        path = DEFAULT_DOH_PATH.to_string();
    }

    Ok(StampDescriptor {
        protocol,
        props,
        address,
        hostname,
        path,
    })
}

/// Translate base64url to the standard alphabet, pad, and decode.
fn decode_base64url(payload: &str) -> Result<Vec<u8>, StampError> {
    let mut b64: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let pad = (4 - b64.len() % 4) % 4;
    b64.extend(std::iter::repeat('=').take(pad));

    LENIENT_BASE64
        .decode(b64.as_bytes())
        .map_err(|e| StampError::InvalidBase64(e.to_string()))
}

/// Stamp encoder used to build test fixtures.
#[cfg(test)]
pub(crate) mod fixtures {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn push_lp(out: &mut Vec<u8>, value: &str) {
        out.push(u8::try_from(value.len()).unwrap());
        out.extend_from_slice(value.as_bytes());
    }

    /// Raw DoH stamp bytes with the given hash segments.
    pub fn doh_bytes(address: &str, hashes: &[&[u8]], hostname: &str, path: &str) -> Vec<u8> {
        let mut out = vec![crate::PROTOCOL_DOH];
        out.extend_from_slice(&7u64.to_le_bytes());
        push_lp(&mut out, address);
        if hashes.is_empty() {
            out.push(0);
        }
        for (i, hash) in hashes.iter().enumerate() {
            let mut len = u8::try_from(hash.len()).unwrap();
            if i + 1 < hashes.len() {
                len |= 0x80;
            }
            out.push(len);
            out.extend_from_slice(hash);
        }
        push_lp(&mut out, hostname);
        push_lp(&mut out, path);
        out
    }

    /// Wrap raw bytes as an `sdns://` string.
    pub fn wrap(bytes: &[u8]) -> String {
        format!("sdns://{}", URL_SAFE_NO_PAD.encode(bytes))
    }

    /// DoH stamp with a single 32-byte hash.
    pub fn doh_stamp(address: &str, hostname: &str, path: &str) -> String {
        wrap(&doh_bytes(address, &[&[0x5a; 32]], hostname, path))
    }
}
