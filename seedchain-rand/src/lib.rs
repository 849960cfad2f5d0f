#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]
//! Passphrase-seeded deterministic random streams.
//!
//! The central type is [`PassphraseRng`]: a generator whose entire output is fixed by a passphrase, a salt,
//! an iteration count and the [`Digest`][seedchain_primitives::digest::Digest] it is given.
//! It derives a seed block with a password-based key derivation function, hands out the bytes of that
//! block, and replaces the block with its own hash whenever it runs dry.
//!
//! This is a source of *reproducible* randomness (test vectors, key material that must be re-derivable
//! from a passphrase). It is not a substitute for system entropy. Use [`system::os::OsRandom`] to pick salts.
//!
//! # Features
//! * `std`: Enables operations that require use of the `std` crate
//! * `os-rand` (default): Enables [`system::os::OsRandom`], backed by the `getrandom` crate on unix and windows
//!
//! # Known properties of the stream
//! * Ranged draws narrow an out-of-range candidate by shifting it right instead of redrawing it.
//!   This is cheap and always terminates, but it is not uniform: small values are favoured.
//!   See [`bounded`].
//! * The hash chain mixes in no counter or domain separation tag. A [`branch`][PassphraseRng::branch]
//!   is separated from its parent only by the one byte perturbation of its seed copy.

extern crate alloc;

pub mod bounded;
pub mod handle;
pub mod passphrase;
#[cfg(feature = "os-rand")]
pub mod system;
pub mod traits;

pub use handle::DigestHandle;
pub use passphrase::{DEFAULT_ITERATIONS, DerivationParams, PassphraseRng, perturb_seed};
