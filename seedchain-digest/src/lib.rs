#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]
//! Digest backends and the constructions built on them.
//!
//! * [`sha2`]: SHA-2 implementations of [`Digest`]
//! * [`mac`]: HMAC over any [`Digest`]
//! * [`pbkdf2`]: PBKDF2-HMAC, the default [`KeyDerivation`][seedchain_primitives::kdf::KeyDerivation]

extern crate alloc;

use seedchain_primitives::{digest::Digest, error::Result};
use seedchain_secret::SecretBuf;

pub mod mac;
pub mod pbkdf2;
#[cfg(feature = "sha2")]
pub mod sha2;

/// Hashes `bytes` as one message and returns the output in a fresh [`SecretBuf`].
pub fn digest<D: Digest + ?Sized>(digest: &mut D, bytes: &[u8]) -> Result<SecretBuf> {
    let mut out = SecretBuf::zeroed(digest.output_len());
    digest.compute_hash(bytes, out.get_mut_nonsecret())?;

    Ok(out)
}
