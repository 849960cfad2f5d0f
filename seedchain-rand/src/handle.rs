use alloc::boxed::Box;

use seedchain_primitives::digest::Digest;

/// The digest a generator hashes its seed buffer with.
///
/// The variant records who is responsible for the digest's lifecycle:
/// an [`Owned`][DigestHandle::Owned] digest is [disposed][Digest::dispose] when the generator is torn down,
/// a [`Borrowed`][DigestHandle::Borrowed] one is left exactly as the generator last used it.
pub enum DigestHandle<'a> {
    Owned(Box<dyn Digest + Send + 'a>),
    Borrowed(&'a mut (dyn Digest + Send)),
}

impl<'a> DigestHandle<'a> {
    /// Hands ownership of `digest` to the generator.
    pub fn owned<D: Digest + Send + 'a>(digest: D) -> Self {
        Self::Owned(Box::new(digest))
    }

    /// Lends `digest` to the generator for `'a`.
    pub fn borrowed(digest: &'a mut (dyn Digest + Send)) -> Self {
        Self::Borrowed(digest)
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    pub fn get(&self) -> &(dyn Digest + Send) {
        match self {
            Self::Owned(digest) => &**digest,
            Self::Borrowed(digest) => &**digest,
        }
    }

    pub fn get_mut(&mut self) -> &mut (dyn Digest + Send) {
        match self {
            Self::Owned(digest) => &mut **digest,
            Self::Borrowed(digest) => &mut **digest,
        }
    }
}

impl core::fmt::Debug for DigestHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = match self {
            Self::Owned(_) => "Owned",
            Self::Borrowed(_) => "Borrowed",
        };
        f.debug_struct("DigestHandle")
            .field("kind", &kind)
            .field("output_len", &self.get().output_len())
            .finish()
    }
}
