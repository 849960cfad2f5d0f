use crate::digest::Digest;
use crate::error::Result;

/// A password-based key derivation function.
///
/// `derive` must be a deterministic function of `digest`'s algorithm, `iterations`, `salt` and `passphrase`,
/// filling the whole of `out`.
pub trait KeyDerivation {
    fn derive(
        &mut self,
        digest: &mut dyn Digest,
        iterations: u32,
        salt: &[u8],
        passphrase: &[u8],
        out: &mut [u8],
    ) -> Result<()>;
}

impl<K: KeyDerivation + ?Sized> KeyDerivation for &mut K {
    fn derive(
        &mut self,
        digest: &mut dyn Digest,
        iterations: u32,
        salt: &[u8],
        passphrase: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        (**self).derive(digest, iterations, salt, passphrase, out)
    }
}
