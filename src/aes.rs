//! The AES-CBC-MAC primitive (component B) and the `Key` handle.
//!
//! The FFX round function (component C) is built entirely on top of a
//! single operation: encrypt a sequence of 16-byte blocks under AES-128
//! in CBC mode, chained from some starting value, and keep only the
//! last ciphertext block. With an all-zero starting value this is the
//! classical AES-CBC-MAC; with the precomputed block `P'` as the
//! starting value, it is the per-round MAC used by the round function.
//! Both are the same primitive, parameterized on the chaining seed.

use aes::cipher::{BlockEncryptMut, BlockSizeUser, KeyIvInit};

use crate::error::{Error, Result};

const BLOCK_SIZE: usize = 16;

/// A 128-bit AES key.
///
/// The core consumes exactly 16 bytes of key material. If more are
/// supplied, only the first 16 are used; supplying fewer is a fatal
/// argument error.
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; 16]);

impl Key {
    /// Build a key from raw bytes, using only the first 16 if more are
    /// given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 16 {
            return Err(Error::illegal(format!(
                "invalid key length; need at least 16 bytes, got {}",
                bytes.len()
            )));
        }

        let mut k = [0u8; 16];
        k.copy_from_slice(&bytes[..16]);
        Ok(Key(k))
    }

    pub(crate) fn bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

/// AES-128 CBC-MAC over an arbitrary starting chaining value.
#[derive(Clone)]
pub(crate) struct Cipher {
    key: [u8; 16],
}

impl Cipher {
    pub fn new(key: &Key) -> Result<Self> {
        if aes::Aes128::block_size() != BLOCK_SIZE {
            // Unreachable for AES-128, kept for parity with the
            // defensive checks the rest of the core performs on its
            // own invariants.
            return Err(Error::SecurityFailure(
                "unexpected AES block size".to_string(),
            ));
        }

        Ok(Cipher { key: *key.bytes() })
    }

    /// AES-CBC-MAC of `data` (whose length must be a positive multiple
    /// of the AES block size) seeded with the chaining value `seed`.
    /// Returns the final ciphertext block.
    pub fn cbc_mac(&self, seed: &[u8; 16], data: &[u8]) -> Result<[u8; 16]> {
        if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
            return Err(Error::SecurityFailure(format!(
                "CBC-MAC input length must be a positive multiple of {}, got {}",
                BLOCK_SIZE,
                data.len()
            )));
        }

        let mut enc = cbc::Encryptor::<aes::Aes128>::new(
            (&self.key).into(),
            seed.into(),
        );

        let mut out = [0u8; BLOCK_SIZE];
        for block in data.chunks_exact(BLOCK_SIZE) {
            enc.encrypt_block_b2b_mut(block.into(), (&mut out).into());
        }

        Ok(out)
    }

    /// Single-block AES encryption, i.e. CBC-MAC of one block seeded
    /// with the all-zero chaining value.
    pub fn encrypt_block(&self, block: &[u8; 16]) -> Result<[u8; 16]> {
        self.cbc_mac(&[0u8; 16], block)
    }
}
