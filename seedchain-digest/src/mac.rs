use seedchain_primitives::digest::{Digest, check_output_len};
use seedchain_primitives::error::{Error, ErrorKind, Result};
use seedchain_secret::SecretBuf;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC (RFC 2104) keyed once and evaluated any number of times over a borrowed [`Digest`].
///
/// The padded keys are held in [`SecretBuf`]s and zeroed when the [`Hmac`] is dropped.
pub struct Hmac<'d> {
    digest: &'d mut dyn Digest,
    ipad_key: SecretBuf,
    opad_key: SecretBuf,
    inner: SecretBuf,
}

impl<'d> Hmac<'d> {
    /// Keys a new MAC. Keys longer than the digest's block length are hashed first.
    pub fn new_with_key(digest: &'d mut dyn Digest, key: &[u8]) -> Result<Self> {
        let block_len = digest.block_len();
        let output_len = digest.output_len();

        if output_len == 0 || block_len < output_len {
            return Err(Error::new_with_message(
                ErrorKind::InvalidInput,
                "HMAC requires a digest whose block length is at least its output length",
            ));
        }

        let mut ipad_key = SecretBuf::zeroed(block_len);
        if key.len() > block_len {
            digest.compute_hash(key, &mut ipad_key.get_mut_nonsecret()[..output_len])?;
        } else {
            ipad_key.get_mut_nonsecret()[..key.len()].copy_from_slice(key);
        }

        let mut opad_key = ipad_key.clone();
        ipad_key.get_mut_nonsecret().iter_mut().for_each(|b| *b ^= IPAD);
        opad_key.get_mut_nonsecret().iter_mut().for_each(|b| *b ^= OPAD);

        Ok(Self {
            digest,
            ipad_key,
            opad_key,
            inner: SecretBuf::zeroed(output_len),
        })
    }

    pub fn output_len(&self) -> usize {
        self.inner.len()
    }

    /// Computes the MAC of the concatenation of `message` into `out`.
    pub fn mac_into(&mut self, message: &[&[u8]], out: &mut [u8]) -> Result<()> {
        check_output_len(&*self.digest, out)?;

        self.digest.reset()?;
        self.digest.update(self.ipad_key.get_nonsecret())?;
        for part in message {
            self.digest.update(part)?;
        }
        self.digest.finish_into(self.inner.get_mut_nonsecret())?;

        self.digest.update(self.opad_key.get_nonsecret())?;
        self.digest.update(self.inner.get_nonsecret())?;
        self.digest.finish_into(out)
    }
}
