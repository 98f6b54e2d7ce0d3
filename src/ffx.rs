//! The FFX round function and alternating-Feistel driver (component C).
//!
//! This is the bulk of the core: given a bit length `n` (derived from a
//! message space's order), it precomputes the per-construction block
//! `P'`, runs `r` Feistel rounds over two halves of the `n`-bit input,
//! and recombines them. Halves are kept as plain `u64`s with explicit
//! shifting/masking rather than a general bitset, since `n <= 128`
//! bounds each half to 64 bits — this avoids any allocation on the hot
//! path (see the Design Notes on bitset handling).

use crate::aes::{Cipher, Key};
use crate::error::{Error, Result};

/// FFX wire constants, baked into the precomputed block `P`.
const VERSION: u8 = 1;
const METHOD: u8 = 2; // alternating Feistel
const ADDITION: u8 = 0; // bitwise XOR
const RADIX: u8 = 2; // binary alphabet

/// Largest tweak length this core admits (see Open Questions: the
/// `tweakLen mod 256` field in `P` is lossless only up to 255 bytes).
pub(crate) const MAX_TWEAK_LEN: usize = 255;

/// The minimum and maximum domain bit lengths `FFXIntegerCipher` accepts.
pub(crate) const MIN_BIT_LENGTH: u32 = 8;
pub(crate) const MAX_BIT_LENGTH: u32 = 128;

/// The round count for a domain of bit length `n`, a step function of
/// `n`.
fn round_count(n: u32) -> Result<u32> {
    match n {
        32..=u32::MAX => Ok(12),
        20..=31 => Ok(18),
        14..=19 => Ok(24),
        10..=13 => Ok(30),
        8..=9 => Ok(36),
        _ => Err(Error::illegal(format!(
            "domain too small; bit length {n} is below the minimum of {MIN_BIT_LENGTH}"
        ))),
    }
}

fn mask(width: u32) -> u64 {
    if width == 0 {
        0
    } else if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Parameters fixed once per message-space bit length: the split point,
/// round count, and the AES-encrypted precomputed block `P'`.
pub(crate) struct FeistelParams {
    n: u32,
    split: u32,
    r: u32,
    p_prime: [u8; 16],
}

impl FeistelParams {
    /// Derive the Feistel parameters for a domain whose order has bit
    /// length `n`, under the given key and tweak.
    pub fn new(cipher: &Cipher, n: u32, tweak: &[u8]) -> Result<Self> {
        debug_assert!((MIN_BIT_LENGTH..=MAX_BIT_LENGTH).contains(&n));

        let split = (n + 1) / 2;
        let r = round_count(n)?;

        // P = [0x00, VERS, METHOD, ADDITION, RADIX, n, split, r,
        //      0,0,0,0,0,0,0, tweakLen mod 256]
        let mut p = [0u8; 16];
        p[1] = VERSION;
        p[2] = METHOD;
        p[3] = ADDITION;
        p[4] = RADIX;
        p[5] = n as u8;
        p[6] = split as u8;
        p[7] = r as u8;
        p[15] = (tweak.len() % 256) as u8;

        let p_prime = cipher.encrypt_block(&p)?;

        Ok(FeistelParams {
            n,
            split,
            r,
            p_prime,
        })
    }
}

/// Pad length for the tweak component of `Q`:
/// `pad = ((-tweakLen - 9) mod 16 + 16) mod 16`.
fn tweak_pad_len(tweak_len: usize) -> usize {
    (-(tweak_len as i64) - 9).rem_euclid(16) as usize
}

/// Build `Q = paddedB || paddedTweak` for round `i` and evaluate the
/// round function, returning the top `width` bits of the resulting
/// 128-bit MAC.
fn round_function(
    cipher: &Cipher,
    p_prime: &[u8; 16],
    tweak: &[u8],
    b: u64,
    round: u32,
    width: u32,
) -> Result<u64> {
    let padded_b = b.to_le_bytes();

    let pad = tweak_pad_len(tweak.len());
    let mut padded_tweak = vec![0u8; 1 + tweak.len() + pad];
    padded_tweak[..tweak.len()].copy_from_slice(tweak);
    let last = padded_tweak.len() - 1;
    padded_tweak[last] = (round % 256) as u8;

    let mut q = Vec::with_capacity(padded_b.len() + padded_tweak.len());
    q.extend_from_slice(&padded_b);
    q.extend_from_slice(&padded_tweak);
    debug_assert_eq!(q.len() % 16, 0);

    let mac = cipher.cbc_mac(p_prime, &q)?;

    // Bit 0 of the bitset is the LSB of byte 0, i.e. the 16 bytes pack
    // a 128-bit value in little-endian order. The returned bits are
    // the top `width` bits of that value.
    let v = u128::from_le_bytes(mac);
    Ok(((v >> (128 - width)) & ((1u128 << width) - 1)) as u64)
}

/// Run the alternating-Feistel network forward over an `n`-bit value.
pub(crate) fn feistel_encrypt(
    cipher: &Cipher,
    params: &FeistelParams,
    tweak: &[u8],
    x: u128,
) -> Result<u128> {
    let rsplit = params.n - params.split;

    let mut a = ((x >> rsplit) as u64) & mask(params.split);
    let mut b = (x as u64) & mask(rsplit);
    let mut aw = params.split;
    let mut bw = rsplit;

    for i in 0..params.r {
        let f = round_function(cipher, &params.p_prime, tweak, b, i, aw)?;
        a = (a ^ f) & mask(aw);
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut aw, &mut bw);
    }

    Ok(((a as u128) << bw) | (b as u128))
}

/// Run the alternating-Feistel network in reverse over an `n`-bit value.
pub(crate) fn feistel_decrypt(
    cipher: &Cipher,
    params: &FeistelParams,
    tweak: &[u8],
    y: u128,
) -> Result<u128> {
    let rsplit = params.n - params.split;

    let mut a = ((y >> rsplit) as u64) & mask(params.split);
    let mut b = (y as u64) & mask(rsplit);
    let mut aw = params.split;
    let mut bw = rsplit;

    for i in (0..params.r).rev() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut aw, &mut bw);
        let f = round_function(cipher, &params.p_prime, tweak, b, i, aw)?;
        a = (a ^ f) & mask(aw);
    }

    Ok(((a as u128) << bw) | (b as u128))
}
