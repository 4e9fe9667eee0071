//! Random keypair generation and account address derivation.
//!
//! The address is Keccak-256 over the 64-byte uncompressed public key
//! (SEC1 prefix byte stripped), last 20 bytes, rendered as lowercase
//! `0x`-prefixed hex. Target lists must use the same representation.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use sha3::{Digest, Keccak256};

use crate::error::{ColliderError, Result};

/// Redraw budget for candidate bytes the curve rejects. Rejection has
/// probability ~2^-128 per draw, so exhausting this means the RNG is broken.
const MAX_REDRAWS: u32 = 10_000;

/// One generated keypair with its derived account address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    /// Secret scalar, 64 hex digits, no prefix.
    pub secret_hex: String,
    /// Derived account address, lowercase `0x` + 40 hex digits.
    pub address: String,
    /// Uncompressed SEC1 public key, 130 hex digits, `04` prefix included.
    pub public_hex: String,
}

impl Keypair {
    pub fn from_secret_key(secret: &SecretKey) -> Self {
        let point = secret.public_key().to_encoded_point(false);
        let digest = Keccak256::digest(&point.as_bytes()[1..]);

        Self {
            secret_hex: hex::encode(secret.to_bytes()),
            address: format!("0x{}", hex::encode(&digest[12..])),
            public_hex: hex::encode(point.as_bytes()),
        }
    }

    /// Deterministic derivation from raw secret bytes. Returns `None` when
    /// the bytes fall outside the valid scalar range (zero or >= curve order).
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let secret = SecretKey::from_slice(bytes).ok()?;
        Some(Self::from_secret_key(&secret))
    }
}

/// Source of fresh keypairs for a worker loop.
pub trait KeyProducer: Send {
    fn produce(&self) -> Result<Keypair>;
}

/// Producer backed by OS entropy. Every call draws fresh secret bytes;
/// nothing is reused across calls.
pub struct RandomKeyProducer;

impl KeyProducer for RandomKeyProducer {
    fn produce(&self) -> Result<Keypair> {
        let mut buf = [0u8; 32];
        let mut redraws = 0u32;

        loop {
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| ColliderError::Entropy(e.to_string()))?;

            match SecretKey::from_slice(&buf) {
                Ok(secret) => return Ok(Keypair::from_secret_key(&secret)),
                Err(_) => {
                    redraws += 1;
                    if redraws > MAX_REDRAWS {
                        return Err(ColliderError::Entropy(format!(
                            "drew {} invalid scalars in a row",
                            redraws
                        )));
                    }
                }
            }
        }
    }
}
