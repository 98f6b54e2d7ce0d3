//! `FFXIntegerCipher`: the cycle-walking wrapper (component D) glued to
//! a message space.
//!
//! This is the type callers construct and use. It validates its
//! message space once at construction (bit length in `[8, 128]`), then
//! on every `encrypt`/`decrypt` call: ranks the input against the
//! message space, repeatedly drives the alternating-Feistel network
//! (component C) until the result lands back inside the domain, and
//! unranks the result.

use num_bigint::BigUint;

use crate::aes::{Cipher, Key};
use crate::error::{Error, Result};
use crate::ffx::{self, FeistelParams, MAX_BIT_LENGTH, MAX_TWEAK_LEN, MIN_BIT_LENGTH};
use crate::message_space::MessageSpace;

/// Cycle-walking is expected to converge in at most ~2 iterations on
/// average (the domain always occupies at least half of the `n`-bit
/// range); this cap exists only to bound latency against a
/// pathologically broken round function and should never be reached.
const MAX_CYCLE_WALK_ITERATIONS: u32 = 1000;

/// A keyed, tweakable bijection on the domain of a [`MessageSpace`].
pub struct FfxIntegerCipher<M: MessageSpace> {
    message_space: M,
    n: u32,
    order: BigUint,
}

impl<M: MessageSpace> FfxIntegerCipher<M> {
    /// Build a cipher over `message_space`.
    ///
    /// Fails with [`Error::IllegalArgument`] if the order's bit length
    /// is outside `[8, 128]`.
    pub fn new(message_space: M) -> Result<Self> {
        let order = message_space.order().clone();
        let n = order.bits() as u32;

        if !(MIN_BIT_LENGTH..=MAX_BIT_LENGTH).contains(&n) {
            return Err(Error::illegal(format!(
                "unsupported message space; bit length of order must be between {MIN_BIT_LENGTH} and {MAX_BIT_LENGTH}, got {n}"
            )));
        }

        Ok(FfxIntegerCipher {
            message_space,
            n,
            order,
        })
    }

    pub fn message_space(&self) -> &M {
        &self.message_space
    }

    /// Encrypt `plaintext`, returning a ciphertext in the same domain.
    pub fn encrypt(
        &self,
        plaintext: &M::Element,
        key: &Key,
        tweak: &[u8],
    ) -> Result<M::Element> {
        let x = self.message_space.rank(plaintext)?;
        let y = self.cycle_walk(&x, key, tweak, ffx::feistel_encrypt)?;
        self.message_space.unrank(&y)
    }

    /// Decrypt `ciphertext`, returning the plaintext that encrypts to it
    /// under the same key and tweak.
    pub fn decrypt(
        &self,
        ciphertext: &M::Element,
        key: &Key,
        tweak: &[u8],
    ) -> Result<M::Element> {
        let y = self.message_space.rank(ciphertext)?;
        let x = self.cycle_walk(&y, key, tweak, ffx::feistel_decrypt)?;
        self.message_space.unrank(&x)
    }

    fn cycle_walk(
        &self,
        input: &BigUint,
        key: &Key,
        tweak: &[u8],
        step: fn(&Cipher, &FeistelParams, &[u8], u128) -> Result<u128>,
    ) -> Result<BigUint> {
        self.validate_tweak(tweak)?;

        let cipher = Cipher::new(key).map_err(Error::surface)?;
        let params = FeistelParams::new(&cipher, self.n, tweak).map_err(Error::surface)?;

        let mut x: u128 = input
            .clone()
            .try_into()
            .map_err(|_| Error::illegal("rank does not fit in 128 bits"))?;

        for _ in 0..MAX_CYCLE_WALK_ITERATIONS {
            x = step(&cipher, &params, tweak, x).map_err(Error::surface)?;
            if BigUint::from(x) < self.order {
                return Ok(BigUint::from(x));
            }
        }

        Err(Error::IterationLimitExceeded)
    }

    fn validate_tweak(&self, tweak: &[u8]) -> Result<()> {
        if tweak.len() > MAX_TWEAK_LEN {
            return Err(Error::illegal(format!(
                "tweak too long; must be at most {MAX_TWEAK_LEN} bytes, got {}",
                tweak.len()
            )));
        }
        Ok(())
    }
}
