use crate::RandomBit;
use rand::{Rng, rng};

/// Draws jitter bits from the thread-local RNG (`rand::rng()`).
///
/// The generator behind it is ChaCha-based and reseeds itself, so bits are
/// unpredictable across processes, which is exactly what decorrelates
/// independent writers.
///
/// Nothing is stored in this type: every call looks up the current thread's
/// generator. It is therefore `Copy`, `Send` and `Sync` even though the
/// underlying `ThreadRng` is not.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandomBit for ThreadRandom {
    fn random_bit(&mut self) -> bool {
        rng().random()
    }
}
