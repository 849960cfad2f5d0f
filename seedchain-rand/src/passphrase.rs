use seedchain_digest::pbkdf2::Pbkdf2;
use seedchain_primitives::error::{Error, ErrorKind, Result};
use seedchain_primitives::kdf::KeyDerivation;
use seedchain_primitives::rand::CsRand;
use seedchain_secret::SecretBuf;

use crate::bounded;
use crate::handle::DigestHandle;

/// The PBKDF2 iteration count used when none is given.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Parameters for deriving a generator's initial seed.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct DerivationParams {
    iterations: u32,
}

impl DerivationParams {
    pub const fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Sets the key derivation work factor. Zero is rejected when the generator is constructed.
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for DerivationParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `parent` with its first byte incremented (wrapping).
///
/// This is the whole of the difference between a generator's seed buffer and that of its branch.
pub fn perturb_seed(parent: &SecretBuf) -> SecretBuf {
    let mut child = parent.clone();
    if let Some(first) = child.get_mut_nonsecret().first_mut() {
        *first = first.wrapping_add(1);
    }
    child
}

/// A deterministic generator seeded from a passphrase.
///
/// The generator holds a seed buffer exactly as long as its digest's output. Values are read from the
/// buffer one byte at a time, most significant byte first; when the buffer is exhausted it is replaced by
/// its own hash. The output therefore depends only on the passphrase, the salt, the iteration count and
/// the digest algorithm.
///
/// ## Teardown
/// Dropping the generator (or calling [`close`][PassphraseRng::close]) zeroes the seed buffer and, if the
/// digest is [owned][DigestHandle::Owned], disposes it. Errors raised by the digest while resetting or
/// disposing are never returned from those operations; the first one is kept and can be collected with
/// [`take_suppressed_error`][PassphraseRng::take_suppressed_error] or from [`close`][PassphraseRng::close].
///
/// ## Concurrency
/// Every extraction takes `&mut self`, so one generator is only ever driven from one place at a time.
/// Branches share no state with their parent and may be moved to other threads.
pub struct PassphraseRng<'a> {
    seed: SecretBuf,
    cursor: usize,
    digest: DigestHandle<'a>,
    suppressed: Option<Error>,
    torn_down: bool,
}

impl<'a> PassphraseRng<'a> {
    /// Derives a generator with PBKDF2 and [`DEFAULT_ITERATIONS`].
    pub fn new(digest: DigestHandle<'a>, passphrase: &[u8], salt: &[u8]) -> Result<Self> {
        Self::with_params(digest, passphrase, salt, &DerivationParams::new())
    }

    /// Derives a generator with PBKDF2 and the given parameters.
    pub fn with_params(
        digest: DigestHandle<'a>,
        passphrase: &[u8],
        salt: &[u8],
        params: &DerivationParams,
    ) -> Result<Self> {
        Self::with_kdf(digest, &mut Pbkdf2, passphrase, salt, params.iterations())
    }

    /// Derives a generator with an arbitrary key derivation function.
    ///
    /// `kdf` is asked for exactly one digest output worth of bytes. If it fails, the error is returned as
    /// [`ErrorKind::Initialization`] (with the original error as its source) and no generator exists:
    /// the partially derived seed is zeroed and an owned digest is disposed.
    pub fn with_kdf<K: KeyDerivation + ?Sized>(
        digest: DigestHandle<'a>,
        kdf: &mut K,
        passphrase: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> Result<Self> {
        let seed_len = digest.get().output_len();
        let mut this = Self::from_parts(digest, SecretBuf::zeroed(seed_len));
        if seed_len == 0 {
            return Err(Error::new_with_message(
                ErrorKind::InvalidInput,
                "digest output length must be non-zero",
            ));
        }

        kdf.derive(
            this.digest.get_mut(),
            iterations,
            salt,
            passphrase,
            this.seed.get_mut_nonsecret(),
        )
        .map_err(Error::initialization)?;

        tracing::debug!(
            seed_len,
            iterations,
            owned = this.digest.is_owned(),
            "derived passphrase seed"
        );

        Ok(this)
    }

    /// Builds a generator directly from a seed buffer, skipping key derivation.
    ///
    /// The seed must be as long as the digest output.
    pub fn from_seed(digest: DigestHandle<'a>, seed: SecretBuf) -> Result<Self> {
        let output_len = digest.get().output_len();
        let this = Self::from_parts(digest, seed);

        if this.seed.is_empty() || this.seed.len() != output_len {
            return Err(Error::new_with_message(
                ErrorKind::InvalidInput,
                "seed length must equal the non-zero digest output length",
            ));
        }

        Ok(this)
    }

    fn from_parts(digest: DigestHandle<'a>, seed: SecretBuf) -> Self {
        Self {
            seed,
            cursor: 0,
            digest,
            suppressed: None,
            torn_down: false,
        }
    }

    /// The length of the seed buffer, which is the output length of the digest.
    pub fn seed_len(&self) -> usize {
        self.seed.len()
    }

    /// Whether this generator disposes its digest on teardown.
    pub fn owns_digest(&self) -> bool {
        self.digest.is_owned()
    }

    fn refill(&mut self) -> Result<()> {
        let digest = self.digest.get_mut();
        let mut next = SecretBuf::zeroed(digest.output_len());
        digest.compute_hash(self.seed.get_nonsecret(), next.get_mut_nonsecret())?;

        if next.is_empty() {
            return Err(Error::new_with_message(
                ErrorKind::InvalidData,
                "digest produced an empty block",
            ));
        }

        // The old buffer is zeroed as it is dropped
        self.seed = next;
        self.cursor = 0;

        tracing::trace!(seed_len = self.seed.len(), "refilled seed buffer");
        Ok(())
    }

    fn next_byte(&mut self) -> Result<u8> {
        if self.cursor == self.seed.len() {
            self.refill()?;
        }

        let byte = self.seed.get_nonsecret()[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    /// Reads the next four stream bytes as a big-endian integer.
    ///
    /// The buffer is refilled between bytes if needed, so one value can span two seed blocks.
    pub fn next_u32(&mut self) -> Result<u32> {
        let mut word = [0u8; 4];
        for byte in &mut word {
            *byte = self.next_byte()?;
        }
        Ok(u32::from_be_bytes(word))
    }

    /// Same stream bytes as [`next_u32`][PassphraseRng::next_u32], reinterpreted as signed.
    pub fn next_i32(&mut self) -> Result<i32> {
        self.next_u32().map(|v| v as i32)
    }

    /// Two [`next_u32`][PassphraseRng::next_u32] words, the first one drawn being the high half.
    ///
    /// This equals the next eight stream bytes read as a big-endian integer.
    pub fn next_u64(&mut self) -> Result<u64> {
        let high = self.next_u32()?;
        let low = self.next_u32()?;
        Ok((u64::from(high) << 32) | u64::from(low))
    }

    pub fn next_i64(&mut self) -> Result<i64> {
        self.next_u64().map(|v| v as i64)
    }

    /// Fills `bytes` with words from [`next_u32`][PassphraseRng::next_u32], each copied big-endian.
    ///
    /// If `bytes.len()` is not a multiple of four, the final word is truncated to the bytes that remain and
    /// the rest of it is discarded. Two calls therefore continue each other's stream only when the first
    /// length is a multiple of four.
    pub fn fill_bytes(&mut self, bytes: &mut [u8]) -> Result<()> {
        let mut chunks = bytes.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32()?.to_be_bytes());
        }

        let rem = chunks.into_remainder();

        if !rem.is_empty() {
            let val = self.next_u32()?.to_be_bytes();
            let len = rem.len();

            rem.copy_from_slice(&val[..len]);
        }

        Ok(())
    }

    /// Draws a value in `0..=max`.
    ///
    /// Draws [`bounded::byte_width(max)`][bounded::byte_width] bytes through
    /// [`fill_bytes`][PassphraseRng::fill_bytes] (so a whole word is consumed), reads them little-endian and
    /// [narrows][bounded::narrow] the result into range. The distribution is biased toward small values.
    pub fn next_bounded_u64(&mut self, max: u64) -> Result<u64> {
        let width = bounded::byte_width(max);
        loop {
            // Bytes past `width` stay zero
            let mut bytes = [0u8; 8];
            self.fill_bytes(&mut bytes[..width])?;

            if let Some(value) = bounded::narrow(u64::from_le_bytes(bytes), max, width) {
                return Ok(value);
            }

            tracing::trace!(max, width, "candidate did not narrow into range, redrawing");
        }
    }

    /// Draws a value in `0..=max`. See [`next_bounded_u64`][PassphraseRng::next_bounded_u64].
    ///
    /// Fails with [`ErrorKind::InvalidBound`] if `max` is negative.
    pub fn next_bounded(&mut self, max: i64) -> Result<i64> {
        let max = u64::try_from(max).map_err(|_| {
            Error::new_with_message(ErrorKind::InvalidBound, "upper bound must not be negative")
        })?;

        // The result is at most `max`, which came from an `i64`
        self.next_bounded_u64(max).map(|v| v as i64)
    }

    /// Draws a value in `min..=max` by drawing from `0..=max` until the result is at least `min`.
    ///
    /// There is no limit on the number of draws. Because [`next_bounded`][PassphraseRng::next_bounded] favours
    /// small values, a `min` close to `max` can take many draws; a caller choosing the bounds from untrusted
    /// input can use this to make the call slow.
    ///
    /// Fails with [`ErrorKind::InvalidBound`] if `max` is negative or `min > max`.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::new_with_message(
                ErrorKind::InvalidBound,
                "lower bound must not exceed upper bound",
            ));
        }

        loop {
            let value = self.next_bounded(max)?;
            if value >= min {
                return Ok(value);
            }
        }
    }

    /// Creates an independent generator from the current seed buffer.
    ///
    /// The branch gets a copy of the buffer with its first byte incremented (see [`perturb_seed`]), reads it
    /// from the start, and hashes with `digest`. `self` is not advanced. `digest` must have the same output
    /// length as this generator's digest.
    pub fn branch<'b>(&self, digest: DigestHandle<'b>) -> Result<PassphraseRng<'b>> {
        let branch = PassphraseRng::from_seed(digest, perturb_seed(&self.seed))?;

        tracing::debug!(
            seed_len = branch.seed_len(),
            owned = branch.owns_digest(),
            "branched generator"
        );

        Ok(branch)
    }

    /// Zeroes the seed buffer and resets the digest.
    ///
    /// This does not rewind the stream: the derived seed is gone, and the generator continues from an
    /// all-zero buffer. Re-derive the generator to replay its output.
    pub fn reset(&mut self) {
        self.seed.zero();
        if let Err(e) = self.digest.get_mut().reset() {
            self.record_suppressed("reset", e);
        }

        tracing::debug!("reset generator");
    }

    /// Returns the first error suppressed by [`reset`][PassphraseRng::reset] or teardown, if any.
    pub fn take_suppressed_error(&mut self) -> Option<Error> {
        self.suppressed.take()
    }

    /// Tears the generator down now and returns the first suppressed error, if any.
    pub fn close(mut self) -> Option<Error> {
        self.teardown();
        self.suppressed.take()
    }

    fn record_suppressed(&mut self, during: &'static str, err: Error) {
        tracing::warn!(during, error = %err, "suppressed digest error");
        if self.suppressed.is_none() {
            self.suppressed = Some(err);
        }
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.seed.zero();

        let disposed = match &mut self.digest {
            DigestHandle::Owned(digest) => digest.dispose(),
            DigestHandle::Borrowed(_) => Ok(()),
        };
        if let Err(e) = disposed {
            self.record_suppressed("dispose", e);
        }
    }

    #[cfg(test)]
    pub(crate) fn seed_bytes(&self) -> &[u8] {
        self.seed.get_nonsecret()
    }
}

impl Drop for PassphraseRng<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl CsRand for PassphraseRng<'_> {
    fn next_bytes(&mut self, bytes: &mut [u8]) -> Result<()> {
        self.fill_bytes(bytes)
    }
}

impl core::fmt::Debug for PassphraseRng<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PassphraseRng")
            .field("seed", &self.seed)
            .field("cursor", &self.cursor)
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use seedchain_primitives::digest::{Digest, check_output_len};
    use seedchain_primitives::error::{Error, ErrorKind, Result};
    use seedchain_primitives::kdf::KeyDerivation;
    use seedchain_secret::SecretBuf;

    use super::{DerivationParams, PassphraseRng, perturb_seed};
    use crate::handle::DigestHandle;

    /// Output byte `i` is input byte `i` plus one, over a `LEN` byte block.
    #[derive(Default)]
    struct IncrementDigest<const LEN: usize> {
        pending: Vec<u8>,
        resets: Arc<AtomicUsize>,
        disposals: Arc<AtomicUsize>,
        fail_reset: bool,
        fail_dispose: bool,
    }

    impl<const LEN: usize> Digest for IncrementDigest<LEN> {
        fn output_len(&self) -> usize {
            LEN
        }

        fn block_len(&self) -> usize {
            LEN.max(8)
        }

        fn update(&mut self, bytes: &[u8]) -> Result<()> {
            self.pending.extend_from_slice(bytes);
            Ok(())
        }

        fn finish_into(&mut self, out: &mut [u8]) -> Result<()> {
            check_output_len(&*self, out)?;
            for (i, o) in out.iter_mut().enumerate() {
                *o = self.pending.get(i).copied().unwrap_or(i as u8).wrapping_add(1);
            }
            self.pending.clear();
            Ok(())
        }

        fn reset(&mut self) -> Result<()> {
            self.resets.fetch_add(1, Ordering::SeqCst);
            self.pending.clear();
            if self.fail_reset {
                Err(Error::other_with_message("reset failed"))
            } else {
                Ok(())
            }
        }

        fn dispose(&mut self) -> Result<()> {
            self.disposals.fetch_add(1, Ordering::SeqCst);
            if self.fail_dispose {
                Err(Error::other_with_message("dispose failed"))
            } else {
                Ok(())
            }
        }
    }

    struct FailingKdf;

    impl KeyDerivation for FailingKdf {
        fn derive(
            &mut self,
            _: &mut dyn Digest,
            _: u32,
            _: &[u8],
            _: &[u8],
            out: &mut [u8],
        ) -> Result<()> {
            out.fill(0xAA);
            Err(Error::new_with_message(ErrorKind::Unsupported, "no derivation"))
        }
    }

    struct CountingKdf;

    impl KeyDerivation for CountingKdf {
        fn derive(
            &mut self,
            _: &mut dyn Digest,
            _: u32,
            _: &[u8],
            _: &[u8],
            out: &mut [u8],
        ) -> Result<()> {
            for (i, o) in out.iter_mut().enumerate() {
                *o = i as u8;
            }
            Ok(())
        }
    }

    fn counting_rng<const LEN: usize>(digest: IncrementDigest<LEN>) -> PassphraseRng<'static> {
        PassphraseRng::with_kdf(
            DigestHandle::owned(digest),
            &mut CountingKdf,
            b"passphrase",
            b"salt",
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_words_straddle_refill() {
        let mut rng = counting_rng(IncrementDigest::<6>::default());
        assert_eq!(rng.next_u32().unwrap(), 0x0001_0203);
        // bytes 4 and 5, then the refilled block [1, 2, 3, 4, 5, 6]
        assert_eq!(rng.next_u32().unwrap(), 0x0405_0102);
        assert_eq!(rng.next_u32().unwrap(), 0x0304_0506);
        assert_eq!(rng.next_u32().unwrap(), 0x0203_0405);
    }

    #[test]
    fn test_u64_high_word_first() {
        let mut rng = counting_rng(IncrementDigest::<8>::default());
        assert_eq!(rng.next_u64().unwrap(), 0x0001_0203_0405_0607);
        assert_eq!(rng.next_i64().unwrap(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_fill_bytes_truncates_final_word() {
        let mut rng = counting_rng(IncrementDigest::<8>::default());
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes).unwrap();
        assert_eq!(bytes, [0, 1, 2, 3, 4, 5]);
        // bytes 6 and 7 were discarded with the truncated word
        assert_eq!(rng.next_u32().unwrap(), 0x0102_0304);
    }

    #[test]
    fn test_bounded_reads_little_endian() {
        let mut rng = counting_rng(IncrementDigest::<8>::default());
        // word 00 01 02 03, two bytes used: 0x0100
        assert_eq!(rng.next_bounded(0xFFFF).unwrap(), 0x0100);
        // word 04 05 06 07, one byte used
        assert_eq!(rng.next_bounded(0xFF).unwrap(), 0x04);
    }

    #[test]
    fn test_bounded_narrows_by_shifting() {
        let mut rng = counting_rng(IncrementDigest::<8>::default());
        rng.next_u32().unwrap();
        // word 04 05 06 07, candidate 0x0504 = 1284 -> 642 -> 321 -> 160
        assert_eq!(rng.next_bounded(300).unwrap(), 160);
    }

    #[test]
    fn test_negative_bound() {
        let mut rng = counting_rng(IncrementDigest::<8>::default());
        let err = rng.next_bounded(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBound);
        let err = rng.next_in_range(5, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBound);
        let err = rng.next_in_range(-5, -4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBound);
        // no stream bytes were consumed
        assert_eq!(rng.next_u32().unwrap(), 0x0001_0203);
    }

    #[test]
    fn test_reset_zeroes_seed() {
        let resets = Arc::new(AtomicUsize::new(0));
        let digest = IncrementDigest::<6> {
            resets: resets.clone(),
            ..Default::default()
        };
        let mut rng = counting_rng(digest);
        assert_eq!(rng.next_u32().unwrap(), 0x0001_0203);
        let before = resets.load(Ordering::SeqCst);

        rng.reset();

        assert!(rng.seed_bytes().iter().all(|&b| b == 0));
        assert_eq!(resets.load(Ordering::SeqCst), before + 1);
        // two zero bytes remain, then hash([0; 6]) = [1; 6]
        assert_eq!(rng.next_u32().unwrap(), 0x0000_0101);
        assert!(rng.take_suppressed_error().is_none());
    }

    #[test]
    fn test_reset_failure_is_recorded() {
        let digest = IncrementDigest::<6> {
            fail_reset: true,
            ..Default::default()
        };
        let mut rng = PassphraseRng::from_seed(
            DigestHandle::owned(digest),
            SecretBuf::copy_from_slice(&[9; 6]),
        )
        .unwrap();

        rng.reset();

        assert!(rng.seed_bytes().iter().all(|&b| b == 0));
        let err = rng.take_suppressed_error().expect("reset error is recorded");
        assert_eq!(err.message(), Some("reset failed"));
        assert!(rng.take_suppressed_error().is_none());
    }

    #[test]
    fn test_close_disposes_owned_digest() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let digest = IncrementDigest::<6> {
            disposals: disposals.clone(),
            fail_dispose: true,
            ..Default::default()
        };
        let rng = counting_rng(digest);

        let err = rng.close().expect("dispose error is reported");
        assert_eq!(err.message(), Some("dispose failed"));
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_disposes_owned_digest_once() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let digest = IncrementDigest::<6> {
            disposals: disposals.clone(),
            ..Default::default()
        };
        drop(counting_rng(digest));
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_borrowed_digest_is_not_disposed() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let mut digest = IncrementDigest::<6> {
            disposals: disposals.clone(),
            ..Default::default()
        };
        {
            let rng = PassphraseRng::with_kdf(
                DigestHandle::borrowed(&mut digest),
                &mut CountingKdf,
                b"",
                b"",
                1,
            )
            .unwrap();
            assert!(!rng.owns_digest());
            assert!(rng.close().is_none());
        }
        assert_eq!(disposals.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failed_derivation_releases_owned_digest() {
        let disposals = Arc::new(AtomicUsize::new(0));
        let digest = IncrementDigest::<6> {
            disposals: disposals.clone(),
            ..Default::default()
        };

        let err = PassphraseRng::with_kdf(
            DigestHandle::owned(digest),
            &mut FailingKdf,
            b"passphrase",
            b"salt",
            1,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Initialization);
        let cause = err.downcast::<Error>().expect("derivation error is the source");
        assert_eq!(cause.kind(), ErrorKind::Unsupported);
        assert_eq!(disposals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_iterations_is_initialization_error() {
        let err = PassphraseRng::with_params(
            DigestHandle::owned(seedchain_digest::sha2::Sha256::new()),
            b"passphrase",
            b"salt",
            &DerivationParams::new().with_iterations(0),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization);
    }

    #[test]
    fn test_empty_digest_rejected() {
        let err = counting_rng_result::<0>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    fn counting_rng_result<const LEN: usize>() -> Result<PassphraseRng<'static>> {
        PassphraseRng::with_kdf(
            DigestHandle::owned(IncrementDigest::<LEN>::default()),
            &mut CountingKdf,
            b"",
            b"",
            1,
        )
    }

    #[test]
    fn test_from_seed_length_mismatch() {
        let err = PassphraseRng::from_seed(
            DigestHandle::owned(IncrementDigest::<6>::default()),
            SecretBuf::zeroed(5),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_perturb_seed_wraps() {
        let parent = SecretBuf::copy_from_slice(&[0xFF, 1, 2]);
        let child = perturb_seed(&parent);
        assert_eq!(child.get_nonsecret(), &[0x00, 1, 2]);
        assert_eq!(parent.get_nonsecret(), &[0xFF, 1, 2]);
    }

    #[test]
    fn test_branch_copies_current_block() {
        let mut parent = counting_rng(IncrementDigest::<6>::default());
        parent.next_u32().unwrap();
        parent.next_u32().unwrap();
        // parent now holds [1, 2, 3, 4, 5, 6] with cursor 2

        let mut branch = parent
            .branch(DigestHandle::owned(IncrementDigest::<6>::default()))
            .unwrap();
        assert_eq!(branch.seed_bytes(), &[2, 2, 3, 4, 5, 6]);
        assert_eq!(branch.next_u32().unwrap(), 0x0202_0304);

        // the parent is untouched by the branch
        assert_eq!(parent.seed_bytes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(parent.next_u32().unwrap(), 0x0304_0506);
    }

    #[test]
    fn test_branch_digest_length_mismatch() {
        let parent = counting_rng(IncrementDigest::<6>::default());
        let err = parent
            .branch(DigestHandle::owned(IncrementDigest::<8>::default()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
