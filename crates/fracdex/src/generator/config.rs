use crate::{BASE_62_DIGITS, DEFAULT_JITTER_BITS};

/// Plain-data configuration for a [`KeyGenerator`].
///
/// This is the serializable counterpart to the builder methods on
/// [`KeyGenerator`]; the random bit source is supplied separately because it
/// is a capability, not data.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// [`KeyGenerator`]: crate::KeyGenerator
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Digit alphabet, lowest symbol first.
    pub digits: String,
    /// Number of random narrowing rounds; `0` disables jitter.
    pub jitter_bits: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            digits: BASE_62_DIGITS.to_owned(),
            jitter_bits: DEFAULT_JITTER_BITS,
        }
    }
}
