//! Generators backed by the platform.

pub mod os;
