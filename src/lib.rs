#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(feature = "nightly-docs", feature(doc_cfg))]
#![deny(unsafe_code)]
//! Deterministic random streams derived from a passphrase.
//!
//! ```
//! use seedchain::digest::sha2::Sha256;
//! use seedchain::rand::{DerivationParams, DigestHandle, PassphraseRng};
//!
//! # fn main() -> seedchain::error::Result<()> {
//! let params = DerivationParams::new().with_iterations(1000);
//! let mut a = PassphraseRng::with_params(DigestHandle::owned(Sha256::new()), b"hunter2", b"salt", &params)?;
//! let mut b = PassphraseRng::with_params(DigestHandle::owned(Sha256::new()), b"hunter2", b"salt", &params)?;
//!
//! assert_eq!(a.next_u64()?, b.next_u64()?);
//! let die = a.next_in_range(1, 6)?;
//! assert!((1..=6).contains(&die));
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! * `std` (default): Enables operations that require use of the `std` crate
//! * `os-rand` (default): Enables [`rand::system::os::OsRandom`] for picking salts
//! * `error-track_caller`: Records where each [`error::Error`] was constructed

pub use seedchain_primitives::{cmp, error, kdf};

/// Digests and the key derivation built on them.
pub mod digest {
    pub use seedchain_digest::*;
    pub use seedchain_primitives::digest::*;
}

/// The passphrase-seeded generator and byte source traits.
pub mod rand {
    pub use seedchain_primitives::rand::*;
    pub use seedchain_rand::*;
}

pub mod secret {
    pub use seedchain_secret::*;
}
