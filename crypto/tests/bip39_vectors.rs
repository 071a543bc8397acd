//! BIP39 reference vectors and single-word corruption checks.

use seedvault_crypto::{
    derive_seed, entropy_to_mnemonic, mnemonic_to_entropy, validate_mnemonic, CryptoError,
};
use seedvault_types::Entropy;

/// (phrase, entropy hex) pairs from the BIP39 reference vectors.
const VECTORS: [(&str, &str); 6] = [
    (
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        "00000000000000000000000000000000",
    ),
    (
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
    ),
    (
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        "80808080808080808080808080808080",
    ),
    (
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        "ffffffffffffffffffffffffffffffff",
    ),
    (
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        "000000000000000000000000000000000000000000000000",
    ),
    (
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ),
];

const LEGAL_WINNER: &str =
    "legal winner thank year wave sausage worth useful legal winner thank yellow";

#[test]
fn phrases_decode_to_reference_entropy() {
    for (phrase, entropy_hex) in VECTORS {
        let entropy = mnemonic_to_entropy(phrase).unwrap();
        assert_eq!(hex::encode(entropy.as_bytes()), entropy_hex, "phrase: {phrase}");
    }
}

#[test]
fn reference_entropy_encodes_to_phrases() {
    for (phrase, entropy_hex) in VECTORS {
        let entropy = Entropy::from_bytes(hex::decode(entropy_hex).unwrap()).unwrap();
        let encoded = entropy_to_mnemonic(&entropy).unwrap();
        assert_eq!(encoded.as_str(), phrase);
        let words = phrase.split_whitespace().count();
        assert!(validate_mnemonic(phrase, words));
    }
}

#[test]
fn longer_phrases_fail_the_default_word_count() {
    for (phrase, _) in &VECTORS[4..] {
        assert!(!validate_mnemonic(phrase, 12));
    }
}

/// One substitution per position, each checked to break the 4-bit checksum.
#[test]
fn single_word_substitutions_are_rejected() {
    let substitutions = [
        "lemon", "winter", "that", "yellow", "way", "save", "wreck", "useless", "legend",
        "winter", "that", "you",
    ];
    let words: Vec<&str> = LEGAL_WINNER.split_whitespace().collect();
    for (i, replacement) in substitutions.iter().enumerate() {
        let mut altered = words.clone();
        altered[i] = replacement;
        let altered = altered.join(" ");
        assert!(!validate_mnemonic(&altered, 12), "position {i}: {altered}");
        assert!(matches!(
            derive_seed(&altered),
            Err(CryptoError::InvalidPhrase(_))
        ));
    }
}

/// A 12-word phrase carries only 4 checksum bits, so roughly one substitution
/// in sixteen still validates. Such a phrase is a different wallet.
#[test]
fn checksum_collision_decodes_to_different_entropy() {
    let collided = LEGAL_WINNER.replacen("legal", "legend", 1);
    assert!(validate_mnemonic(&collided, 12));
    let original = mnemonic_to_entropy(LEGAL_WINNER).unwrap();
    let other = mnemonic_to_entropy(&collided).unwrap();
    assert_ne!(original.as_bytes(), other.as_bytes());
}
