use crate::RandomBit;
use rand::Rng;

/// Adapts any [`rand::Rng`] into a [`RandomBit`].
///
/// Use this with a seeded generator when jittered keys must be reproducible.
///
/// # Example
/// ```
/// use fracdex::{KeyGenerator, RngBits};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut a = KeyGenerator::with_rng(RngBits(StdRng::seed_from_u64(7)));
/// let mut b = KeyGenerator::with_rng(RngBits(StdRng::seed_from_u64(7)));
/// assert_eq!(
///     a.generate_key_between(None, None).unwrap(),
///     b.generate_key_between(None, None).unwrap(),
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct RngBits<R>(pub R);

impl<R: Rng> RandomBit for RngBits<R> {
    fn random_bit(&mut self) -> bool {
        self.0.random()
    }
}
