use crate::error::Result;

/// A source of random bytes.
///
/// Deterministic generators implement this as well as system entropy sources.
pub trait CsRand {
    fn next_bytes(&mut self, bytes: &mut [u8]) -> Result<()>;
}

impl<R: CsRand + ?Sized> CsRand for &mut R {
    fn next_bytes(&mut self, bytes: &mut [u8]) -> Result<()> {
        (**self).next_bytes(bytes)
    }
}
