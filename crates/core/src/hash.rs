//! String hashes
//!
//! `djb2`, `cyrb53` and `murmur_mix` are fast non-cryptographic hashes. They
//! are fine for bucketing and quick fingerprints and must never be used for
//! passwords, signatures or integrity checks. They operate on UTF-16 code
//! units with 32-bit wrapping arithmetic, so a digest matches the one a
//! browser computes for the same string.
//!
//! `md5` and `sha256` are provided for file-style checksums.

use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashDigest {
    pub name: String,
    pub value: String,
    pub cryptographic: bool,
}

/// djb2: `hash * 33 + unit`, 32 bits, 8 hex digits.
pub fn djb2(input: &str) -> String {
    let hash = input.encode_utf16().fold(5381u32, |hash, unit| {
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(unit))
    });
    format!("{hash:08x}")
}

/// cyrb53: two 32-bit lanes folded into a 53-bit value, 13 hex digits.
pub fn cyrb53(input: &str) -> String {
    let mut h1: u32 = 0xdeadbeef;
    let mut h2: u32 = 0x41c6ce57;

    for unit in input.encode_utf16() {
        let ch = u32::from(unit);
        h1 = (h1 ^ ch).wrapping_mul(0x85ebca77);
        h2 = (h2 ^ ch).wrapping_mul(0xc2b2ae3d);
    }

    h1 ^= (h1 ^ (h2 >> 15)).wrapping_mul(0x735a2d97);
    h2 ^= (h2 ^ (h1 >> 15)).wrapping_mul(0xcaf649a9);
    h1 ^= h2 >> 16;
    h2 ^= h1 >> 16;

    let value = 2_097_152u64 * u64::from(h2) + u64::from(h1 >> 11);
    format!("{value:013x}")
}

/// Seeded Murmur-style mix producing a 53-bit value, 16 hex digits.
pub fn murmur_mix(input: &str, seed: u32) -> String {
    let mut h1: u32 = 0xdeadbeef ^ seed;
    let mut h2: u32 = 0x41c6ce57 ^ seed;

    for unit in input.encode_utf16() {
        let ch = u32::from(unit);
        h1 = (h1 ^ ch).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ ch).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507);
    h1 ^= (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507);
    h2 ^= (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    let value = (u64::from(h2 & 0x1f_ffff) << 32) + u64::from(h1);
    format!("{value:016x}")
}

pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

pub fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn digest(name: &str, value: String, cryptographic: bool) -> HashDigest {
    HashDigest {
        name: name.to_string(),
        value,
        cryptographic,
    }
}

/// The five non-cryptographic digests, in display order.
pub fn generate_hashes(input: &str) -> Vec<HashDigest> {
    vec![
        digest("DJB2", djb2(input), false),
        digest("CYRB53", cyrb53(input), false),
        digest("MurmurHash3-like", murmur_mix(input, 0), false),
        digest("Custom Hash 1", murmur_mix(input, 42), false),
        digest("Custom Hash 2", murmur_mix(input, 137), false),
    ]
}

/// The non-cryptographic digests followed by MD5 and SHA-256.
pub fn generate_all_hashes(input: &str) -> Vec<HashDigest> {
    let mut hashes = generate_hashes(input);
    hashes.push(digest("MD5", md5_hex(input), true));
    hashes.push(digest("SHA-256", sha256_hex(input), true));
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // djb2 tests
    // ============================================================================

    #[test]
    fn test_djb2_empty_is_seed() {
        assert_eq!(djb2(""), "00001505");
    }

    #[test]
    fn test_djb2_single_char() {
        // 5381 * 33 + 97
        assert_eq!(djb2("a"), format!("{:08x}", 5381u32 * 33 + 97));
    }

    #[test]
    fn test_djb2_wraps_to_32_bits() {
        let long = "x".repeat(1000);
        assert_eq!(djb2(&long).len(), 8);
    }

    // ============================================================================
    // cyrb53 / murmur_mix tests
    // ============================================================================

    #[test]
    fn test_cyrb53_is_deterministic_and_fixed_width() {
        let a = cyrb53("hello");
        assert_eq!(a, cyrb53("hello"));
        assert_eq!(a.len(), 13);
        assert_ne!(a, cyrb53("hellp"));
    }

    #[test]
    fn test_cyrb53_fits_in_53_bits() {
        for input in ["", "a", "hello world", "ünïcödé ✓"] {
            let value = u64::from_str_radix(&cyrb53(input), 16).unwrap();
            assert!(value < (1u64 << 53));
        }
    }

    #[test]
    fn test_murmur_mix_seed_changes_digest() {
        assert_ne!(murmur_mix("hello", 0), murmur_mix("hello", 42));
        assert_eq!(murmur_mix("hello", 42), murmur_mix("hello", 42));
    }

    #[test]
    fn test_murmur_mix_fixed_width_and_53_bits() {
        let digest = murmur_mix("some input", 137);
        assert_eq!(digest.len(), 16);
        let value = u64::from_str_radix(&digest, 16).unwrap();
        assert!(value < (1u64 << 53));
    }

    #[test]
    fn test_hashes_use_utf16_units() {
        // An astral character is two UTF-16 units, so it differs from a single BMP char.
        assert_ne!(djb2("😀"), djb2("a"));
        assert_eq!(djb2("😀"), {
            let units: Vec<u16> = "😀".encode_utf16().collect();
            let h = units
                .iter()
                .fold(5381u32, |h, u| h.wrapping_mul(33).wrapping_add(u32::from(*u)));
            format!("{h:08x}")
        });
    }

    // ============================================================================
    // cryptographic digests
    // ============================================================================

    #[test]
    fn test_md5_known_value() {
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_sha256_known_value() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_generate_hashes_labels() {
        let names: Vec<String> = generate_hashes("x").into_iter().map(|h| h.name).collect();
        assert_eq!(
            names,
            vec![
                "DJB2",
                "CYRB53",
                "MurmurHash3-like",
                "Custom Hash 1",
                "Custom Hash 2"
            ]
        );
        let all = generate_all_hashes("x");
        assert_eq!(all.len(), 7);
        assert!(all[5].cryptographic && all[6].cryptographic);
    }
}
