use crate::error::{Error, ErrorKind, Result};

/// A hash primitive that can be driven through a trait object.
///
/// Implementations have a fixed [`output_len`][Digest::output_len] for their lifetime.
/// A generator uses the output length as the size of its seed buffer.
pub trait Digest {
    /// The number of bytes produced by [`Digest::finish_into`].
    fn output_len(&self) -> usize;

    /// The size of the internal compression block, in bytes.
    ///
    /// This is the block length used to pad keys by [HMAC](https://www.rfc-editor.org/rfc/rfc2104).
    fn block_len(&self) -> usize;

    /// Absorbs `bytes` into the running state.
    fn update(&mut self, bytes: &[u8]) -> Result<()>;

    /// Finalizes the running state into `out` and leaves the digest ready for a new message.
    ///
    /// `out` must be exactly [`output_len`][Digest::output_len] bytes long.
    fn finish_into(&mut self, out: &mut [u8]) -> Result<()>;

    /// Discards any absorbed input.
    fn reset(&mut self) -> Result<()>;

    /// Hashes `bytes` as a single message, independent of any previously absorbed input.
    fn compute_hash(&mut self, bytes: &[u8], out: &mut [u8]) -> Result<()> {
        self.reset()?;
        self.update(bytes)?;
        self.finish_into(out)
    }

    /// Releases the digest. Only called by a generator that owns the digest.
    fn dispose(&mut self) -> Result<()> {
        self.reset()
    }
}

impl<D: Digest + ?Sized> Digest for &mut D {
    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    fn block_len(&self) -> usize {
        (**self).block_len()
    }

    fn update(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).update(bytes)
    }

    fn finish_into(&mut self, out: &mut [u8]) -> Result<()> {
        (**self).finish_into(out)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn compute_hash(&mut self, bytes: &[u8], out: &mut [u8]) -> Result<()> {
        (**self).compute_hash(bytes, out)
    }

    fn dispose(&mut self) -> Result<()> {
        (**self).dispose()
    }
}

/// Checks that `out` can receive the output of `digest`.
pub fn check_output_len<D: Digest + ?Sized>(digest: &D, out: &[u8]) -> Result<()> {
    if out.len() == digest.output_len() {
        Ok(())
    } else {
        Err(Error::new_with_message(
            ErrorKind::InvalidInput,
            "output buffer does not match the digest output length",
        ))
    }
}
