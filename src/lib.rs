//! A keyed, tweakable format-preserving cipher over arbitrary integer
//! domains, built on the alternating-Feistel (FFX) construction with
//! AES-128 CBC-MAC as the round function.
//!
//! The crate is organized as a small pipeline:
//!
//! - [`message_space`] — maps domain elements to dense integer ranks
//!   and back (component A).
//! - [`aes`] — the AES-128 CBC-MAC primitive the round function is
//!   built on (component B).
//! - `ffx` (private) — the Feistel round schedule and round function
//!   (component C).
//! - [`cipher`] — cycle-walks the Feistel network to confine it to an
//!   arbitrary-sized domain, and exposes the public encrypt/decrypt
//!   API (component D).
//!
//! # Example
//!
//! ```
//! use fpe_core::{FfxIntegerCipher, IntegerMessageSpace, Key};
//!
//! let cipher = FfxIntegerCipher::new(IntegerMessageSpace::new(999999).unwrap()).unwrap();
//! let key = Key::from_bytes(&[0u8; 16]).unwrap();
//!
//! let ciphertext = cipher.encrypt(&123456.into(), &key, b"tweak").unwrap();
//! let plaintext = cipher.decrypt(&ciphertext, &key, b"tweak").unwrap();
//! assert_eq!(plaintext, 123456.into());
//! ```

mod aes;
mod cipher;
mod error;
mod ffx;
mod message_space;

pub use aes::Key;
pub use cipher::FfxIntegerCipher;
pub use error::{Error, Result};
pub use message_space::{IntegerMessageSpace, IntegerRangeMessageSpace, MessageSpace};
