/// A source of random bits for jittered key generation.
///
/// This abstraction allows you to plug in a real random source, a seeded one
/// for reproducible output, or a scripted sequence in tests. Any
/// `FnMut() -> bool` closure is a `RandomBit`.
///
/// # Example
/// ```
/// use fracdex::RandomBit;
///
/// let mut flip = false;
/// let mut alternate = move || {
///     flip = !flip;
///     flip
/// };
/// assert!(alternate.random_bit());
/// assert!(!alternate.random_bit());
/// ```
pub trait RandomBit {
    /// Returns a uniformly distributed boolean.
    fn random_bit(&mut self) -> bool;
}

impl<F> RandomBit for F
where
    F: FnMut() -> bool,
{
    fn random_bit(&mut self) -> bool {
        self()
    }
}
