use seedchain_primitives::error::{Error, ErrorKind, Result};
use seedchain_primitives::rand::CsRand;
use seedchain_secret::SecretBuf;

/// The operating system's entropy source.
///
/// Suitable for choosing the salt of a [`PassphraseRng`][crate::PassphraseRng]; the generator itself never
/// reads system entropy.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsRandom;

impl CsRand for OsRandom {
    fn next_bytes(&mut self, bytes: &mut [u8]) -> Result<()> {
        cfg_match::cfg_match! {
            any(unix, windows) =>
                getrandom::fill(bytes).map_err(|e| {
                    if let Some(e) = e.raw_os_error() {
                        Error::from_raw_os_error(e)
                    } else {
                        match e {
                            getrandom::Error::UNSUPPORTED => Error::new_with_message(ErrorKind::Unsupported, "getrandom is not supported on this target"),
                            getrandom::Error::UNEXPECTED | getrandom::Error::ERRNO_NOT_POSITIVE => Error::new_with_message(ErrorKind::__Internal, "getrandom reported an internal error"),
                            _ => Error::new_with_message(ErrorKind::__Uncategorized, "getrandom reported other error"),
                        }
                    }
                }),
            _ => {
                let _ = bytes;
                Err(Error::new_with_message(ErrorKind::Unsupported, "no system entropy source on this target"))
            }
        }
    }
}

/// Draws a fresh salt of `len` bytes from [`OsRandom`].
pub fn generate_salt(len: usize) -> Result<SecretBuf> {
    let mut salt = SecretBuf::zeroed(len);
    OsRandom.next_bytes(salt.get_mut_nonsecret())?;

    tracing::debug!(len, "generated salt");
    Ok(salt)
}
