use seedchain_primitives::digest::{Digest, check_output_len};
use seedchain_primitives::error::Result;
use ::sha2::digest::generic_array::GenericArray;

macro_rules! def_sha2 {
    ($(#[$meta:meta])* $name:ident => $inner:ty, block = $block:literal) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name($inner);

        impl $name {
            pub fn new() -> Self {
                Self(<$inner as ::sha2::Digest>::new())
            }
        }

        impl Digest for $name {
            fn output_len(&self) -> usize {
                <$inner as ::sha2::Digest>::output_size()
            }

            fn block_len(&self) -> usize {
                $block
            }

            fn update(&mut self, bytes: &[u8]) -> Result<()> {
                ::sha2::Digest::update(&mut self.0, bytes);
                Ok(())
            }

            fn finish_into(&mut self, out: &mut [u8]) -> Result<()> {
                check_output_len(&*self, out)?;
                ::sha2::Digest::finalize_into_reset(&mut self.0, GenericArray::from_mut_slice(out));
                Ok(())
            }

            fn reset(&mut self) -> Result<()> {
                ::sha2::Digest::reset(&mut self.0);
                Ok(())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(::core::stringify!($name))
            }
        }
    };
}

def_sha2!(Sha224 => ::sha2::Sha224, block = 64);
def_sha2!(
    /// SHA-256. A generator seeded with this digest has a 32 byte seed buffer.
    Sha256 => ::sha2::Sha256, block = 64
);
def_sha2!(Sha384 => ::sha2::Sha384, block = 128);
def_sha2!(
    /// SHA-512. A generator seeded with this digest has a 64 byte seed buffer.
    Sha512 => ::sha2::Sha512, block = 128
);
