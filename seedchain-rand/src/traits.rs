pub use seedchain_primitives::rand::CsRand;
use seedchain_primitives::error::Result;
use seedchain_secret::SecretBuf;

/// The trait for producing values from a random byte sequence
pub trait Generate {
    fn fill_from_sequence<R: CsRand + ?Sized>(&mut self, rand: &mut R) -> Result<()>;

    fn new_from_sequence<R: CsRand + ?Sized>(rand: &mut R) -> Result<Self>
    where
        Self: Sized + bytemuck::Zeroable,
    {
        let mut val = <Self as bytemuck::Zeroable>::zeroed();
        val.fill_from_sequence(rand)?;

        Ok(val)
    }
}

impl<const N: usize> Generate for [u8; N] {
    fn fill_from_sequence<R: CsRand + ?Sized>(&mut self, rand: &mut R) -> Result<()> {
        rand.next_bytes(self)
    }
}

impl Generate for [u8] {
    fn fill_from_sequence<R: CsRand + ?Sized>(&mut self, rand: &mut R) -> Result<()> {
        rand.next_bytes(self)
    }
}

impl Generate for SecretBuf {
    fn fill_from_sequence<R: CsRand + ?Sized>(&mut self, rand: &mut R) -> Result<()> {
        rand.next_bytes(self.get_mut_nonsecret())
    }
}

macro_rules! impl_generate_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Generate for $ty {
                /// Reads `size_of::<Self>()` bytes as a big-endian integer.
                fn fill_from_sequence<R: CsRand + ?Sized>(&mut self, rand: &mut R) -> Result<()> {
                    let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                    rand.next_bytes(&mut bytes)?;
                    *self = <$ty>::from_be_bytes(bytes);
                    Ok(())
                }
            }
        )*
    };
}

impl_generate_int!(u16, u32, u64, u128);
