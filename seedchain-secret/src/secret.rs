use alloc::vec::Vec;

use seedchain_primitives::cmp::bytes_eq_secure;
use zeroize::Zeroize;

/// [`SecretBuf`] is an owned, heap allocated byte buffer holding secret material.
///
/// The contents are overwritten with zeroes when the buffer is dropped, and can be zeroed
/// early with [`SecretBuf::zero`]. Zeroing is best effort: copies made by the caller through
/// [`SecretBuf::get_nonsecret`] are not tracked.
///
/// # Trait Implementations
///
/// [`PartialEq`] and [`Eq`] perform a bytewise comparison using [`bytes_eq_secure`].
/// Buffers of different lengths compare unequal.
///
/// [`Clone`] copies the bytes into a fresh allocation. Both copies are zeroed independently.
///
/// [`core::fmt::Debug`] prints the length of the buffer but never the contents.
pub struct SecretBuf(Vec<u8>);

impl SecretBuf {
    /// Creates a buffer of `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self(alloc::vec![0; len])
    }

    /// Takes ownership of `bytes`.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Copies `bytes` into a new buffer.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the inner bytes, bypassing [`SecretBuf`].
    ///
    /// Note: This is not an `unsafe` method but may not be what you want. Anything copied out of the
    /// returned slice is not zeroed when `self` is dropped.
    pub fn get_nonsecret(&self) -> &[u8] {
        &self.0
    }

    /// Gets the inner bytes mutably, bypassing [`SecretBuf`].
    pub fn get_mut_nonsecret(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Overwrites every byte with zero, keeping the length.
    pub fn zero(&mut self) {
        self.0.as_mut_slice().zeroize();
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().fold(0u8, |acc, b| acc | b) == 0
    }
}

impl Drop for SecretBuf {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Zeroize for SecretBuf {
    fn zeroize(&mut self) {
        self.zero();
    }
}

impl Clone for SecretBuf {
    fn clone(&self) -> Self {
        Self::copy_from_slice(&self.0)
    }
}

impl From<Vec<u8>> for SecretBuf {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}

impl PartialEq for SecretBuf {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && bytes_eq_secure(&self.0, &other.0)
    }
}

impl Eq for SecretBuf {}

impl core::fmt::Debug for SecretBuf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct SecretField;

        impl core::fmt::Debug for SecretField {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("_")
            }
        }
        f.debug_struct("SecretBuf")
            .field("len", &self.len())
            .field("bytes", &SecretField)
            .finish()
    }
}
