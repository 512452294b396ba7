#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "std")]
use crate::ThreadRandom;
use crate::{Digits, Error, GeneratorConfig, RandomBit, Result, key_between, keys_between};

/// Default number of jitter rounds. Two independent callers targeting the
/// same gap collide with probability of roughly `2^-30`.
pub const DEFAULT_JITTER_BITS: u32 = 30;

/// Generates order keys between two optional bounds, with jitter.
///
/// Every call first computes the deterministic key for the gap, then runs
/// `jitter_bits` rounds of random narrowing: each round keeps either the lower
/// or the upper half of the remaining interval and recomputes the key inside
/// it. Independent generators working on the same gap therefore land on
/// different keys with overwhelming probability, at the cost of a few extra
/// characters per key.
///
/// The generator holds no state besides its configuration and bit source.
///
/// ## Recommended When
/// - Several clients may insert into the same position without coordination
///
/// ## See Also
/// - [`key_between`] and [`keys_between`] for the deterministic variants
///
/// # Example
/// ```
/// use fracdex::KeyGenerator;
///
/// let mut generator = KeyGenerator::new();
/// let first = generator.generate_key_between(None, None).unwrap();
/// let second = generator
///     .generate_key_between(Some(first.as_str()), None)
///     .unwrap();
/// assert!(first < second);
/// ```
#[derive(Clone, Debug)]
pub struct KeyGenerator<R>
where
    R: RandomBit,
{
    digits: Digits,
    jitter_bits: u32,
    rng: R,
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl KeyGenerator<ThreadRandom> {
    /// Creates a generator with the base-62 alphabet, [`DEFAULT_JITTER_BITS`]
    /// and the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(ThreadRandom)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl Default for KeyGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> KeyGenerator<R>
where
    R: RandomBit,
{
    /// Creates a generator with the default alphabet and jitter, drawing bits
    /// from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            digits: Digits::default(),
            jitter_bits: DEFAULT_JITTER_BITS,
            rng,
        }
    }

    /// Creates a generator from a [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config.digits` is not a valid alphabet.
    pub fn from_config(config: &GeneratorConfig, rng: R) -> Result<Self> {
        Ok(Self {
            digits: Digits::new(config.digits.clone())?,
            jitter_bits: config.jitter_bits,
            rng,
        })
    }

    /// Replaces the digit alphabet.
    #[must_use]
    pub fn with_digits(mut self, digits: Digits) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the number of jitter rounds; `0` makes the generator
    /// deterministic.
    #[must_use]
    pub fn with_jitter_bits(mut self, jitter_bits: u32) -> Self {
        self.jitter_bits = jitter_bits;
        self
    }

    /// The digit alphabet keys are built from.
    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Number of random narrowing rounds per key.
    pub fn jitter_bits(&self) -> u32 {
        self.jitter_bits
    }

    /// Consumes the generator and returns its bit source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Generates one key strictly between `low` and `high`.
    ///
    /// # Errors
    ///
    /// Fails if a bound is malformed, if `low >= high`, or if the keyspace is
    /// exhausted. See [`key_between`].
    ///
    /// # Example
    /// ```
    /// use fracdex::KeyGenerator;
    ///
    /// let mut generator = KeyGenerator::new().with_jitter_bits(0);
    /// assert_eq!(generator.generate_key_between(None, None).unwrap(), "a0");
    /// assert_eq!(
    ///     generator.generate_key_between(Some("a0"), Some("a1")).unwrap(),
    ///     "a0V"
    /// );
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_key_between(&mut self, low: Option<&str>, high: Option<&str>) -> Result<String> {
        self.jittered(low, high)
    }

    /// Generates `n` strictly increasing keys between `low` and `high`.
    ///
    /// With jitter enabled, `n + 1` deterministic boundary keys are laid out
    /// first and each returned key is jittered inside its own pair of
    /// neighbouring boundaries, so the output stays strictly increasing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_key_between`], plus [`Error::TooManyKeys`]
    /// if `n` keys cannot be allocated.
    ///
    /// # Example
    /// ```
    /// use fracdex::KeyGenerator;
    ///
    /// let mut generator = KeyGenerator::new().with_jitter_bits(0);
    /// let keys = generator.generate_n_keys_between(None, None, 3).unwrap();
    /// assert_eq!(keys, ["a0", "a1", "a2"]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_n_keys_between(
        &mut self,
        low: Option<&str>,
        high: Option<&str>,
        n: usize,
    ) -> Result<Vec<String>> {
        if self.jitter_bits == 0 || n == 0 {
            return keys_between(low, high, n, &self.digits);
        }
        if n == 1 {
            return Ok(vec![self.jittered(low, high)?]);
        }

        let boundaries = n.checked_add(1).ok_or(Error::TooManyKeys { count: n })?;
        let bounds = keys_between(low, high, boundaries, &self.digits)?;
        bounds
            .windows(2)
            .map(|pair| self.jittered(Some(pair[0].as_str()), Some(pair[1].as_str())))
            .collect()
    }

    fn jittered(&mut self, low: Option<&str>, high: Option<&str>) -> Result<String> {
        let mut mid = key_between(low, high, &self.digits)?;
        let mut low = low.map(str::to_owned);
        let mut high = high.map(str::to_owned);
        for _ in 0..self.jitter_bits {
            if self.rng.random_bit() {
                low = Some(mid);
            } else {
                high = Some(mid);
            }
            mid = key_between(low.as_deref(), high.as_deref(), &self.digits)?;
        }
        Ok(mid)
    }
}

/// Generates one jittered key between `low` and `high` with the default
/// configuration: base-62 digits, [`DEFAULT_JITTER_BITS`] rounds and the
/// thread-local RNG.
///
/// # Errors
///
/// See [`KeyGenerator::generate_key_between`].
///
/// # Example
/// ```
/// use fracdex::generate_key_between;
///
/// let key = generate_key_between(Some("a0"), Some("a1")).unwrap();
/// assert!("a0" < key.as_str() && key.as_str() < "a1");
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn generate_key_between(low: Option<&str>, high: Option<&str>) -> Result<String> {
    KeyGenerator::new().generate_key_between(low, high)
}

/// Generates `n` jittered, strictly increasing keys between `low` and `high`
/// with the default configuration.
///
/// # Errors
///
/// See [`KeyGenerator::generate_n_keys_between`].
///
/// # Example
/// ```
/// use fracdex::generate_n_keys_between;
///
/// let keys = generate_n_keys_between(None, None, 4).unwrap();
/// assert_eq!(keys.len(), 4);
/// assert!(keys.windows(2).all(|w| w[0] < w[1]));
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn generate_n_keys_between(
    low: Option<&str>,
    high: Option<&str>,
    n: usize,
) -> Result<Vec<String>> {
    KeyGenerator::new().generate_n_keys_between(low, high, n)
}
