use seedchain_primitives::digest::Digest;
use seedchain_primitives::error::{Error, ErrorKind, Result};
use seedchain_primitives::kdf::KeyDerivation;
use seedchain_secret::SecretBuf;

use crate::mac::Hmac;

/// PBKDF2 (RFC 8018) with HMAC as the pseudorandom function.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pbkdf2;

impl KeyDerivation for Pbkdf2 {
    fn derive(
        &mut self,
        digest: &mut dyn Digest,
        iterations: u32,
        salt: &[u8],
        passphrase: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        pbkdf2(digest, iterations, salt, passphrase, out)
    }
}

/// Fills `out` with PBKDF2-HMAC output for `passphrase` and `salt`.
///
/// Fails with [`ErrorKind::InvalidInput`] if `iterations` is zero.
pub fn pbkdf2(
    digest: &mut dyn Digest,
    iterations: u32,
    salt: &[u8],
    passphrase: &[u8],
    out: &mut [u8],
) -> Result<()> {
    if iterations == 0 {
        return Err(Error::new_with_message(
            ErrorKind::InvalidInput,
            "PBKDF2 iteration count must be positive",
        ));
    }

    tracing::debug!(iterations, output_len = out.len(), "deriving key with PBKDF2");

    let mut mac = Hmac::new_with_key(digest, passphrase)?;
    let hlen = mac.output_len();

    let mut prev = SecretBuf::zeroed(hlen);
    let mut next = SecretBuf::zeroed(hlen);
    let mut block = SecretBuf::zeroed(hlen);

    for (i, chunk) in out.chunks_mut(hlen).enumerate() {
        let index = u32::try_from(i + 1).map_err(|_| {
            Error::new_with_message(ErrorKind::InvalidInput, "requested PBKDF2 output is too long")
        })?;

        mac.mac_into(&[salt, &index.to_be_bytes()], prev.get_mut_nonsecret())?;
        block
            .get_mut_nonsecret()
            .copy_from_slice(prev.get_nonsecret());

        for _ in 1..iterations {
            mac.mac_into(&[prev.get_nonsecret()], next.get_mut_nonsecret())?;
            core::mem::swap(&mut prev, &mut next);
            for (t, u) in block.get_mut_nonsecret().iter_mut().zip(prev.get_nonsecret()) {
                *t ^= u;
            }
        }

        let len = chunk.len();
        chunk.copy_from_slice(&block.get_nonsecret()[..len]);
    }

    Ok(())
}
