#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(feature = "nightly-docs", feature(doc_cfg))]
#![deny(unsafe_code)]
//! Shared building blocks for the seedchain crates.
//!
//! This crate holds the seams between the generator and its collaborators:
//! the [`Digest`][digest::Digest] oracle, the [`KeyDerivation`][kdf::KeyDerivation] step,
//! the [`CsRand`][rand::CsRand] byte source, and the common [`Error`][error::Error] type.
//!
//! # Features
//! * `alloc`: Allows errors to carry boxed payloads (including a source [`Error`][error::Error])
//! * `std`: Enables conversions to and from [`std::io::Error`]
//! * `error-track_caller`: Records the location each [`Error`][error::Error] was constructed at

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cmp;
pub mod digest;
pub mod error;
pub mod kdf;
pub mod rand;
