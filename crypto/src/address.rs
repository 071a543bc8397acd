//! Network-scoped wallet addresses.
//!
//! Address format: `sv_` + base32(public_key, 52 chars) + base32(checksum, 8 chars)
//!
//! Checksum: first 5 bytes of Blake2b-256(domain || protocol_magic || public_key).
//! The public key is visible in the address, but only the network it was
//! derived for accepts the checksum.
//! Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz` (avoids ambiguous chars).
//! Total address length: 3 (prefix) + 52 + 8 = 63 characters.

use seedvault_types::{ProtocolMagic, PublicKey, WalletAddress};

use crate::hash::blake2b_256_multi;

/// Base32 alphabet (32 chars, avoids visually ambiguous 0/O, 2/Z, l/I, v).
const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Expected length of the encoded part (after `sv_`): 52 pubkey + 8 checksum.
const ENCODED_LEN: usize = 60;
/// Number of base32 characters for the public key (256 bits → ceil(256/5) = 52).
const PUBKEY_CHARS: usize = 52;

const ADDRESS_DOMAIN: &[u8] = b"seedvault-address";

/// Encode a byte slice as base32.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    // Remaining bits (padded with zeros on the right).
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode a base32 string into a fixed-size byte array. Returns `None` on
/// invalid characters, wrong length or non-zero padding bits, so every
/// array has exactly one accepted encoding. Zero-allocation.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            if pos == N {
                return None;
            }
            result[pos] = (buffer >> bits_in_buffer) as u8;
            pos += 1;
        }
    }

    if pos < N {
        return None;
    }
    // Trailing bits must be the zero padding `encode_base32` writes.
    if buffer & ((1u64 << bits_in_buffer) - 1) != 0 {
        return None;
    }
    Some(result)
}

fn checksum(public_key: &[u8; 32], magic: ProtocolMagic) -> [u8; 5] {
    let hash = blake2b_256_multi(&[ADDRESS_DOMAIN, &magic.to_le_bytes(), public_key]);
    let mut out = [0u8; 5];
    out.copy_from_slice(&hash[..5]);
    out
}

/// Derive the address of a public key on the given network.
pub fn derive_address(public_key: &PublicKey, magic: ProtocolMagic) -> WalletAddress {
    let pubkey_encoded = encode_base32(public_key.as_bytes());
    let checksum_encoded = encode_base32(&checksum(public_key.as_bytes(), magic));
    WalletAddress::from_encoded(&format!("{pubkey_encoded}{checksum_encoded}"))
}

/// Extract the public key from an address, if it is well-formed and its
/// checksum matches `magic`.
pub fn decode_address(address: &str, magic: ProtocolMagic) -> Option<PublicKey> {
    let encoded = address.strip_prefix(WalletAddress::PREFIX)?;
    if encoded.len() != ENCODED_LEN {
        return None;
    }

    let pubkey_encoded = encoded.get(..PUBKEY_CHARS)?;
    let checksum_encoded = encoded.get(PUBKEY_CHARS..)?;

    let pubkey_bytes: [u8; 32] = decode_base32_fixed(pubkey_encoded)?;
    let checksum_bytes: [u8; 5] = decode_base32_fixed(checksum_encoded)?;

    if checksum_bytes != checksum(&pubkey_bytes, magic) {
        return None;
    }

    Some(PublicKey(pubkey_bytes))
}

/// Validate that an address is well-formed and belongs to the given network.
pub fn validate_address(address: &str, magic: ProtocolMagic) -> bool {
    decode_address(address, magic).is_some()
}
