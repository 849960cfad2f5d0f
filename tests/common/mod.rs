#![allow(dead_code)]

use seedchain::digest::{Digest, check_output_len};
use seedchain::error::Result;

/// Installs a `tracing` subscriber honouring `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A 64 byte digest whose output depends only on the first byte of the message:
/// `out[j] = 3 * j ^ message[0]`, with an empty message treated as a zero first byte.
#[derive(Clone, Debug, Default)]
pub struct FirstByteDigest {
    first: Option<u8>,
}

impl Digest for FirstByteDigest {
    fn output_len(&self) -> usize {
        64
    }

    fn block_len(&self) -> usize {
        64
    }

    fn update(&mut self, bytes: &[u8]) -> Result<()> {
        if self.first.is_none() {
            self.first = bytes.first().copied();
        }
        Ok(())
    }

    fn finish_into(&mut self, out: &mut [u8]) -> Result<()> {
        check_output_len(&*self, out)?;
        let first = self.first.take().unwrap_or(0);
        for (j, o) in out.iter_mut().enumerate() {
            *o = (3 * j as u8) ^ first;
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.first = None;
        Ok(())
    }
}
