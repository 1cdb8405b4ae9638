//! Sealed payload: passphrase-keyed container for the calibration set
//!
//! Format: "LPO1." + base64(salt[16] || tag[16] || ciphertext)
//! - key:       k = SHA-256(salt || passphrase), then KDF_ROUNDS × k = SHA-256(k || salt)
//! - keystream: block i = SHA-256(k || "lpo-stream" || i as u64 BE), XOR
//! - tag:       SHA-256(k || "lpo-tag" || ciphertext)[..16]
//!
//! Anyone running the scorer ends up holding the constants, so this only
//! keeps them out of plain sight. It is not a confidentiality boundary.

use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Sha256, Digest};
use thiserror::Error;
use crate::{KDF_ROUNDS, PAYLOAD_PREFIX};

const SALT_LEN: usize = 16;
const TAG_LEN: usize = 16;
const STREAM_LABEL: &[u8] = b"lpo-stream";
const TAG_LABEL: &[u8] = b"lpo-tag";

/// Shipped payload; opens under "LPO2025" to {"minFactor":1.26076,"maxFactor":1.39}
pub const DEFAULT_PAYLOAD: &str =
    "LPO1.XB6afQOy9EhuDZGjx/UrGC/SX9HB8/r6a5nQCCXrn94Ksm711hIPvmbWgfJH1HnjVqz4KC7nrfNB0iUkmJQmTkBPDzwTwg==";

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("payload is missing the LPO1. prefix")]
    UnknownFormat,

    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload truncated ({0} bytes)")]
    Truncated(usize),

    #[error("invalid key")]
    TagMismatch,

    #[error("plaintext is not UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Decrypt primitive the access gate delegates to
pub trait Decryptor: Send + Sync {
    /// Recover plaintext from `payload` with `credential` as key material
    fn decrypt(&self, payload: &str, credential: &str) -> Result<String, CipherError>;
}

/// Default decrypt primitive for "LPO1." payloads
#[derive(Debug, Default, Clone, Copy)]
pub struct SealedPayload;

impl SealedPayload {
    pub fn new() -> Self {
        Self
    }

    /// Seal with a time-seeded salt
    pub fn seal(&self, plaintext: &str, passphrase: &str) -> String {
        self.seal_with_salt(plaintext, passphrase, time_salt())
    }

    /// Deterministic seal
    pub fn seal_with_salt(&self, plaintext: &str, passphrase: &str, salt: [u8; SALT_LEN]) -> String {
        let key = derive_key(passphrase, &salt);
        let mut body = plaintext.as_bytes().to_vec();
        apply_keystream(&key, &mut body);
        let tag = tag(&key, &body);

        let mut raw = Vec::with_capacity(SALT_LEN + TAG_LEN + body.len());
        raw.extend_from_slice(&salt);
        raw.extend_from_slice(&tag);
        raw.extend_from_slice(&body);
        format!("{}{}", PAYLOAD_PREFIX, STANDARD.encode(raw))
    }

    /// Open a payload
    pub fn open(&self, payload: &str, passphrase: &str) -> Result<String, CipherError> {
        let encoded = payload
            .trim()
            .strip_prefix(PAYLOAD_PREFIX)
            .ok_or(CipherError::UnknownFormat)?;
        let raw = STANDARD.decode(encoded)?;
        if raw.len() < SALT_LEN + TAG_LEN {
            return Err(CipherError::Truncated(raw.len()));
        }

        let (salt, rest) = raw.split_at(SALT_LEN);
        let (expected_tag, body) = rest.split_at(TAG_LEN);
        let key = derive_key(passphrase, salt);
        if tag(&key, body)[..] != expected_tag[..] {
            return Err(CipherError::TagMismatch);
        }

        let mut plain = body.to_vec();
        apply_keystream(&key, &mut plain);
        Ok(String::from_utf8(plain)?)
    }
}

impl Decryptor for SealedPayload {
    fn decrypt(&self, payload: &str, credential: &str) -> Result<String, CipherError> {
        self.open(payload, credential)
    }
}

/// Passphrase + salt → 32-byte key
fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; 32] {
    let mut key = sha256(&[salt, passphrase.as_bytes()]);
    for _ in 0..KDF_ROUNDS {
        key = sha256(&[&key, salt]);
    }
    key
}

/// XOR `data` in place with the key's SHA-256 counter stream
fn apply_keystream(key: &[u8; 32], data: &mut [u8]) {
    for (i, chunk) in data.chunks_mut(32).enumerate() {
        let block = sha256(&[key, STREAM_LABEL, &(i as u64).to_be_bytes()]);
        for (byte, k) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= k;
        }
    }
}

fn tag(key: &[u8; 32], ciphertext: &[u8]) -> [u8; TAG_LEN] {
    let digest = sha256(&[key, TAG_LABEL, ciphertext]);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&digest[..TAG_LEN]);
    tag
}

/// SHA-256 over concatenated parts
fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Salt from the clock; uniqueness is all that matters here
fn time_salt() -> [u8; SALT_LEN] {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let digest = sha256(&[&nanos.to_le_bytes()]);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&digest[..SALT_LEN]);
    salt
}

// =============================================================================
// TESTS
// =============================================================================
